use axum::{extract::FromRequestParts, http::request::Parts};

use crate::server::{
    error::{auth::AuthError, Error},
    identity::Principal,
    model::app::AppState,
};

/// Identity of the caller, if any source recognised one.
pub struct CurrentIdentity(pub Option<Principal>);

impl CurrentIdentity {
    /// Principal for endpoints that need a signed-in caller.
    pub fn require(self) -> Result<Principal, Error> {
        self.0.ok_or(Error::AuthError(AuthError::Unauthorized))
    }
}

impl FromRequestParts<AppState> for CurrentIdentity {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let principal = state.identity.resolve(parts).await?;

        Ok(Self(principal))
    }
}
