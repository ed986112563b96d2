//! Database fixtures inserted directly through the entity crate.
//!
//! - `user` - users and their onboarding preferences
//! - `league` - fantasy leagues, memberships and invitations
//! - `reference` - competitions, teams and players

pub mod league;
pub mod reference;
pub mod user;
