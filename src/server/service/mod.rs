//! Business logic between the controllers and the repositories.
//!
//! Services borrow the database connection and return [`Error`](crate::server::error::Error)
//! so controllers can propagate with `?`.

pub mod league;
pub mod news;
pub mod player;
pub mod preferences;
pub mod seed;
pub mod user;
