use axum::{
    extract::{rejection::QueryRejection, Query},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        team::{TeamInfoDto, TeamsDto, TeamsQuery},
    },
    server::{controller::util::query_params, error::Error, reference},
};

pub static TEAM_TAG: &str = "team";

/// List the supported leagues and their clubs
#[utoipa::path(
    get,
    path = "/api/teams",
    tag = TEAM_TAG,
    params(TeamsQuery),
    responses(
        (status = 200, description = "Leagues and teams", body = TeamsDto),
        (status = 400, description = "Malformed query parameters", body = ErrorDto)
    ),
)]
pub async fn list_teams(
    query: Result<Query<TeamsQuery>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    let query = query_params(query)?;
    let teams = match query.league.as_deref().filter(|l| !l.is_empty()) {
        Some(league_id) => reference::teams_by_league(league_id),
        None => reference::teams().iter().collect(),
    };

    Ok((
        StatusCode::OK,
        Json(TeamsDto {
            leagues: reference::leagues().iter().map(Into::into).collect(),
            teams: teams.into_iter().map(TeamInfoDto::from).collect(),
        }),
    ))
}
