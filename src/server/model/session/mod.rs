//! Typed wrappers over tower-sessions data.
//!
//! Each submodule owns one session key and the insert/get/remove helpers for it, so callers
//! never deal with raw keys or serialization.

pub mod principal;
