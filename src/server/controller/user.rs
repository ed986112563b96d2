use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        user::{UpdateUserDto, UserProfileDto},
    },
    server::{
        controller::util::json_body, error::Error, identity::CurrentIdentity,
        model::app::AppState, service::user::UserService,
    },
};

pub static USER_TAG: &str = "user";

/// Get the signed-in user's profile
#[utoipa::path(
    get,
    path = "/api/users/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Profile of the signed-in user", body = UserProfileDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_me(
    State(state): State<AppState>,
    identity: CurrentIdentity,
) -> Result<impl IntoResponse, Error> {
    let principal = identity.require()?;

    let profile = UserService::new(&state.db).get_profile(&principal).await?;

    Ok((StatusCode::OK, Json(profile)))
}

/// Update the signed-in user's profile
#[utoipa::path(
    put,
    path = "/api/users/me",
    tag = USER_TAG,
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Updated profile", body = UserProfileDto),
        (status = 400, description = "Username is already taken", body = ErrorDto),
        (status = 401, description = "Not signed in", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_me(
    State(state): State<AppState>,
    identity: CurrentIdentity,
    body: Result<Json<UpdateUserDto>, JsonRejection>,
) -> Result<impl IntoResponse, Error> {
    let principal = identity.require()?;
    let changes = json_body(body)?;

    let profile = UserService::new(&state.db)
        .update_profile(&principal, changes)
        .await?;

    Ok((StatusCode::OK, Json(profile)))
}
