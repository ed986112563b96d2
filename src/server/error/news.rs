use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::RedirectErrorDto;

pub static ONBOARDING_PATH: &str = "/onboarding";

#[derive(Error, Debug)]
pub enum NewsError {
    #[error("Onboarding not completed")]
    OnboardingIncomplete,
}

impl IntoResponse for NewsError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        match self {
            Self::OnboardingIncomplete => (
                StatusCode::FORBIDDEN,
                Json(RedirectErrorDto {
                    error: self.to_string(),
                    redirect_to: ONBOARDING_PATH.to_string(),
                }),
            )
                .into_response(),
        }
    }
}
