use tower_sessions::Session;

use crate::server::{error::Error, identity::Principal};

pub const SESSION_PRINCIPAL_KEY: &str = "matchday:auth:principal";

/// Principal stored by the auth provider integration after a successful sign-in.
pub struct SessionPrincipal;

impl SessionPrincipal {
    /// Insert the signed-in principal into the session
    pub async fn insert(session: &Session, principal: &Principal) -> Result<(), Error> {
        session.insert(SESSION_PRINCIPAL_KEY, principal).await?;

        Ok(())
    }

    /// Get the signed-in principal from the session
    pub async fn get(session: &Session) -> Result<Option<Principal>, Error> {
        let principal = session.get::<Principal>(SESSION_PRINCIPAL_KEY).await?;

        Ok(principal)
    }

    /// Remove the principal, returning it if one was stored
    pub async fn remove(session: &Session) -> Result<Option<Principal>, Error> {
        let principal = session.remove::<Principal>(SESSION_PRINCIPAL_KEY).await?;

        Ok(principal)
    }
}
