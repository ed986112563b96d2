use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::server::error::error_response;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("No identity could be resolved for the request")]
    Unauthorized,
    #[error("Email is required")]
    EmailRequired,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::Unauthorized => error_response(StatusCode::UNAUTHORIZED, "Unauthorized"),
            Self::EmailRequired => error_response(StatusCode::BAD_REQUEST, self.to_string()),
        }
    }
}
