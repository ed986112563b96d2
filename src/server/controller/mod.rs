//! HTTP controller endpoints for the matchday web API.
//!
//! Handlers resolve the caller through [`CurrentIdentity`](crate::server::identity::CurrentIdentity),
//! delegate to a service and return JSON. Every handler is annotated with `#[utoipa::path]`
//! and registered in [`router`](crate::server::router).

pub mod auth;
pub mod league;
pub mod news;
pub mod player;
pub mod preferences;
pub mod team;
pub mod user;
pub mod util;
