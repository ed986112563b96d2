use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        player::{PlayersPageDto, PlayersQuery},
    },
    server::{
        controller::util::query_params, error::Error, model::app::AppState,
        service::player::PlayerService,
    },
};

pub static PLAYER_TAG: &str = "player";

/// Browse active players, most valuable first
#[utoipa::path(
    get,
    path = "/api/players",
    tag = PLAYER_TAG,
    params(PlayersQuery),
    responses(
        (status = 200, description = "One page of players", body = PlayersPageDto),
        (status = 400, description = "Malformed query parameters", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_players(
    State(state): State<AppState>,
    query: Result<Query<PlayersQuery>, QueryRejection>,
) -> Result<impl IntoResponse, Error> {
    let query = query_params(query)?;
    let page = PlayerService::new(&state.db).list(query).await?;

    Ok((StatusCode::OK, Json(page)))
}
