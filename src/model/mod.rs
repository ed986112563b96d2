//! JSON request and response shapes shared by the HTTP API.
//!
//! Field names are camelCase on the wire. Money amounts travel as decimal strings, see
//! [`money`].

pub mod api;
pub mod auth;
pub mod league;
pub mod money;
pub mod news;
pub mod player;
pub mod preferences;
pub mod team;
pub mod user;
