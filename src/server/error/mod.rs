//! Error types for the matchday server.
//!
//! Each domain has its own `thiserror` enum carrying the HTTP mapping for its variants. The
//! top-level [`Error`] aggregates them through `#[from]` so services and controllers can use
//! `?` throughout, and every error renders as an [`ErrorDto`] JSON body.

pub mod auth;
pub mod config;
pub mod league;
pub mod news;
pub mod preferences;
pub mod user;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, league::LeagueError, news::NewsError,
        preferences::PreferencesError, user::UserError,
    },
};

/// Main error type for the matchday server.
///
/// Expected client errors (401, 403, 404, 400) are logged at debug level by the domain enums.
/// Everything else becomes a 500 through [`InternalServerError`].
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Identity resolution or sign-in error.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Profile lookup or update error.
    #[error(transparent)]
    UserError(#[from] UserError),
    /// League lifecycle rule violation.
    #[error(transparent)]
    LeagueError(#[from] LeagueError),
    /// Onboarding preference validation error.
    #[error(transparent)]
    PreferencesError(#[from] PreferencesError),
    /// News feed access error.
    #[error(transparent)]
    NewsError(#[from] NewsError),
    /// Malformed request body or parameters.
    #[error("Bad request: {0}")]
    BadRequest(String),
    /// Failed to parse a stored or transported value.
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// A state the code assumes impossible, such as a foreign key row vanishing.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// Listener bind or serve failure.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::UserError(err) => err.into_response(),
            Self::LeagueError(err) => err.into_response(),
            Self::PreferencesError(err) => err.into_response(),
            Self::NewsError(err) => err.into_response(),
            Self::BadRequest(message) => {
                tracing::debug!("Rejected malformed request: {}", message);

                error_response(StatusCode::BAD_REQUEST, message)
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Builds a JSON error response with the given status and client-facing message.
pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorDto {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// The full error is logged server side while the client only receives a generic message.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}
