//! Development sign-in cookie.
//!
//! The cookie carries `{"user":{"id","email","name"}}` as base64url JSON so the value stays a
//! valid cookie token. It is compiled only into debug builds or with the `dev-auth` feature.

use axum::http::request::Parts;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
use futures::future::BoxFuture;
use serde::{Deserialize, Serialize};

use crate::server::{
    error::Error,
    identity::{IdentitySource, Principal},
};

pub const DEV_SESSION_COOKIE: &str = "dev-session";
pub const DEV_SESSION_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevSessionUser {
    pub id: i32,
    pub email: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevSession {
    pub user: DevSessionUser,
}

impl DevSession {
    pub fn encode(&self) -> Result<String, Error> {
        let json = serde_json::to_vec(self)
            .map_err(|e| Error::ParseError(format!("Failed to encode dev session: {}", e)))?;

        Ok(URL_SAFE_NO_PAD.encode(json))
    }

    /// Returns `None` for anything that isn't a well-formed dev session.
    pub fn decode(value: &str) -> Option<Self> {
        let bytes = URL_SAFE_NO_PAD.decode(value.trim()).ok()?;

        serde_json::from_slice(&bytes).ok()
    }

    /// Cookie holding this session for 7 days.
    pub fn cookie(&self) -> Result<Cookie<'static>, Error> {
        let cookie = Cookie::build((DEV_SESSION_COOKIE, self.encode()?))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(!cfg!(debug_assertions))
            .max_age(time::Duration::days(DEV_SESSION_DAYS))
            .build();

        Ok(cookie)
    }
}

/// Cookie to pass to [`CookieJar::remove`] to clear the dev session.
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build(DEV_SESSION_COOKIE).path("/").build()
}

/// Reads the `dev-session` cookie.
pub struct DevCookieSource;

impl IdentitySource for DevCookieSource {
    fn resolve<'a>(&'a self, parts: &'a Parts) -> BoxFuture<'a, Result<Option<Principal>, Error>> {
        Box::pin(async move {
            let jar = CookieJar::from_headers(&parts.headers);
            let Some(cookie) = jar.get(DEV_SESSION_COOKIE) else {
                return Ok(None);
            };

            let Some(session) = DevSession::decode(cookie.value()) else {
                tracing::debug!("Ignoring unparsable {} cookie", DEV_SESSION_COOKIE);

                return Ok(None);
            };

            Ok(Some(Principal {
                email: session.user.email,
                name: session.user.name,
            }))
        })
    }
}
