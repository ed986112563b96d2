//! Server application models.
//!
//! Application state shared with handlers, database model aliases and typed session data.

pub mod app;
pub mod db;
pub mod session;
