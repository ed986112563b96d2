use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        league::{
            CreateLeagueDto, InviteDetailsDto, InviteRequestDto, JoinLeagueResponseDto,
            LeagueDetailsDto, LeagueDto, MyLeagueDto, PublicLeagueDto, PublicLeaguesQuery,
            StartDraftResponseDto,
        },
    },
    server::{
        controller::util::{json_body, path_param, query_params},
        error::Error,
        identity::CurrentIdentity,
        model::app::AppState,
        service::league::LeagueService,
    },
};

pub static LEAGUE_TAG: &str = "league";

/// Create a league with the caller as admin
#[utoipa::path(
    post,
    path = "/api/leagues",
    tag = LEAGUE_TAG,
    request_body = CreateLeagueDto,
    responses(
        (status = 201, description = "League created", body = LeagueDto),
        (status = 400, description = "Invalid league settings", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "Competition not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_league(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    body: Result<Json<CreateLeagueDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let principal = identity.require()?;
    let request = json_body(body)?;

    let league = LeagueService::new(&state.db)
        .create_league(&principal, request)
        .await?;

    Ok((StatusCode::CREATED, Json(league)))
}

/// List the leagues the caller belongs to
#[utoipa::path(
    get,
    path = "/api/leagues",
    tag = LEAGUE_TAG,
    responses(
        (status = 200, description = "Caller's leagues, newest first", body = Vec<MyLeagueDto>),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_my_leagues(
    State(state): State<AppState>,
    identity: CurrentIdentity,
) -> Result<impl IntoResponse, Error> {
    let principal = identity.require()?;

    let leagues = LeagueService::new(&state.db).my_leagues(&principal).await?;

    Ok((StatusCode::OK, Json(leagues)))
}

/// Browse public leagues that still have room
#[utoipa::path(
    get,
    path = "/api/leagues/public",
    tag = LEAGUE_TAG,
    params(PublicLeaguesQuery),
    responses(
        (status = 200, description = "Joinable public leagues", body = Vec<PublicLeagueDto>),
        (status = 400, description = "Malformed query parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_public_leagues(
    State(state): State<AppState>,
    query: Result<Query<PublicLeaguesQuery>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    let query = query_params(query)?;
    let leagues = LeagueService::new(&state.db).public_leagues(query).await?;

    Ok((StatusCode::OK, Json(leagues)))
}

/// League details for one of its members
#[utoipa::path(
    get,
    path = "/api/leagues/{league_id}/details",
    tag = LEAGUE_TAG,
    params(("league_id" = i32, Path, description = "League ID")),
    responses(
        (status = 200, description = "League with roster and scoring rules", body = LeagueDetailsDto),
        (status = 400, description = "Malformed league ID", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Not a member of this league", body = ErrorDto),
        (status = 404, description = "User or league not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_league_details(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    league_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let league_id = path_param(league_id)?;
    let principal = identity.require()?;

    let details = LeagueService::new(&state.db)
        .league_details(&principal, league_id)
        .await?;

    Ok((StatusCode::OK, Json(details)))
}

/// Join a league
#[utoipa::path(
    post,
    path = "/api/leagues/{league_id}/join",
    tag = LEAGUE_TAG,
    params(("league_id" = i32, Path, description = "League ID")),
    responses(
        (status = 200, description = "Joined the league", body = JoinLeagueResponseDto),
        (status = 400, description = "League full, closed or already joined", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "League not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn join_league(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    league_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let league_id = path_param(league_id)?;
    let principal = identity.require()?;

    let joined = LeagueService::new(&state.db)
        .join_league(&principal, league_id)
        .await?;

    Ok((StatusCode::OK, Json(joined)))
}

/// Start the draft of a league
#[utoipa::path(
    post,
    path = "/api/leagues/{league_id}/start-draft",
    tag = LEAGUE_TAG,
    params(("league_id" = i32, Path, description = "League ID")),
    responses(
        (status = 200, description = "Draft started", body = StartDraftResponseDto),
        (status = 400, description = "Not in draft status or not enough members", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Caller did not create the league", body = ErrorDto),
        (status = 404, description = "User or league not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn start_draft(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    league_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let league_id = path_param(league_id)?;
    let principal = identity.require()?;

    let started = LeagueService::new(&state.db)
        .start_draft(&principal, league_id)
        .await?;

    Ok((StatusCode::OK, Json(started)))
}

/// Public summary shown on an invitation link
#[utoipa::path(
    get,
    path = "/api/leagues/{league_id}/invite",
    tag = LEAGUE_TAG,
    params(("league_id" = i32, Path, description = "League ID")),
    responses(
        (status = 200, description = "League accepting members", body = InviteDetailsDto),
        (status = 400, description = "League full or no longer accepting members", body = ErrorDto),
        (status = 404, description = "League not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_invite_details(
    State(state): State<AppState>,
    league_id: Result<Path<i32>, PathRejection>,
) -> Result<impl IntoResponse, Error> {
    let league_id = path_param(league_id)?;
    let details = LeagueService::new(&state.db)
        .invite_details(league_id)
        .await?;

    Ok((StatusCode::OK, Json(details)))
}

/// Invite a user to a league by username or email
#[utoipa::path(
    post,
    path = "/api/leagues/{league_id}/invite",
    tag = LEAGUE_TAG,
    params(("league_id" = i32, Path, description = "League ID")),
    request_body = InviteRequestDto,
    responses(
        (status = 200, description = "Invitation sent", body = SuccessDto),
        (status = 400, description = "Invalid invitation or league full", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 403, description = "Caller is not a league admin", body = ErrorDto),
        (status = 404, description = "User or league not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn invite(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    league_id: Result<Path<i32>, PathRejection>,
    body: Result<Json<InviteRequestDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let league_id = path_param(league_id)?;
    let principal = identity.require()?;
    let request = json_body(body)?;

    let (target, outcome) = LeagueService::new(&state.db)
        .invite(&principal, league_id, request)
        .await?;

    Ok((
        StatusCode::OK,
        Json(SuccessDto {
            success: true,
            message: outcome.message(&target),
        }),
    ))
}
