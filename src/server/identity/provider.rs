use axum::http::request::Parts;
use futures::future::BoxFuture;
use tower_sessions::Session;

use crate::server::{
    error::Error,
    identity::{IdentitySource, Principal},
    model::session::principal::SessionPrincipal,
};

/// Principal written into the server session by the auth provider integration.
///
/// Requests that did not pass through the session layer resolve to nothing.
pub struct ProviderSessionSource;

impl IdentitySource for ProviderSessionSource {
    fn resolve<'a>(&'a self, parts: &'a Parts) -> BoxFuture<'a, Result<Option<Principal>, Error>> {
        Box::pin(async move {
            let Some(session) = parts.extensions.get::<Session>() else {
                return Ok(None);
            };

            SessionPrincipal::get(session).await
        })
    }
}
