use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum UserError {
    #[error("User with email {0:?} not found despite a resolved identity")]
    NotFound(String),
    #[error("Username {0:?} is already owned by another user")]
    UsernameTaken(String),
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::NotFound(_) => error_response(StatusCode::NOT_FOUND, "User not found"),
            Self::UsernameTaken(_) => {
                error_response(StatusCode::BAD_REQUEST, "Username is already taken")
            }
        }
    }
}
