//! Server application core modules.
//!
//! HTTP routing, identity resolution, persistence and the league, onboarding, news and player
//! services behind the matchday API.

#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod identity;
pub mod model;
pub mod news;
pub mod reference;
pub mod router;
pub mod service;
pub mod startup;
