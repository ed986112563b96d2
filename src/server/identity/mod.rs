//! Request identity resolution.
//!
//! An [`IdentityResolver`] asks each configured [`IdentitySource`] in order and uses the first
//! principal found. Handlers receive the result through the
//! [`CurrentIdentity`](extractor::CurrentIdentity) extractor and map it to a user row by email.

#[cfg(any(debug_assertions, feature = "dev-auth"))]
pub mod dev_cookie;
pub mod extractor;
pub mod provider;

use axum::http::request::Parts;
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};

use crate::server::error::Error;

pub use extractor::CurrentIdentity;

/// Authenticated caller as reported by an identity source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    pub email: String,
    pub name: Option<String>,
}

/// A place a request can carry its caller's identity.
pub trait IdentitySource: Send + Sync {
    fn resolve<'a>(&'a self, parts: &'a Parts) -> BoxFuture<'a, Result<Option<Principal>, Error>>;
}

/// Ordered chain of identity sources, the first principal with a non-blank email wins.
pub struct IdentityResolver {
    sources: Vec<Box<dyn IdentitySource>>,
}

impl IdentityResolver {
    pub fn new(sources: Vec<Box<dyn IdentitySource>>) -> Self {
        Self { sources }
    }

    /// Provider session first, then the development cookie when compiled in.
    pub fn default_chain() -> Self {
        #[allow(unused_mut)]
        let mut sources: Vec<Box<dyn IdentitySource>> =
            vec![Box::new(provider::ProviderSessionSource)];

        #[cfg(any(debug_assertions, feature = "dev-auth"))]
        sources.push(Box::new(dev_cookie::DevCookieSource));

        Self::new(sources)
    }

    pub async fn resolve(&self, parts: &Parts) -> Result<Option<Principal>, Error> {
        for source in &self.sources {
            match source.resolve(parts).await? {
                Some(principal) if !principal.email.trim().is_empty() => {
                    return Ok(Some(principal));
                }
                Some(_) => tracing::debug!("Ignoring principal without an email"),
                None => {}
            }
        }

        Ok(None)
    }
}
