use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        preferences::{PreferencesResponseDto, SavePreferencesDto},
    },
    server::{
        controller::util::json_body, error::Error, identity::CurrentIdentity,
        model::app::AppState, service::preferences::PreferencesService,
    },
};

pub static PREFERENCES_TAG: &str = "preferences";

/// Get the caller's onboarding preferences and favourite teams
#[utoipa::path(
    get,
    path = "/api/user/preferences",
    tag = PREFERENCES_TAG,
    responses(
        (status = 200, description = "Preferences, null before onboarding", body = PreferencesResponseDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_preferences(
    State(state): State<AppState>,
    identity: CurrentIdentity,
) -> Result<impl IntoResponse, Error> {
    let principal = identity.require()?;

    let preferences = PreferencesService::new(&state.db)
        .get_preferences(&principal)
        .await?;

    Ok((StatusCode::OK, Json(preferences)))
}

/// Save onboarding answers, replacing the favourite teams
#[utoipa::path(
    post,
    path = "/api/user/preferences",
    tag = PREFERENCES_TAG,
    request_body = SavePreferencesDto,
    responses(
        (status = 200, description = "Preferences saved", body = SuccessDto),
        (status = 400, description = "Unknown team or malformed body", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn save_preferences(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    body: Result<Json<SavePreferencesDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let principal = identity.require()?;
    let request = json_body(body)?;

    let saved = PreferencesService::new(&state.db)
        .save_preferences(&principal, request)
        .await?;

    Ok((StatusCode::OK, Json(saved)))
}
