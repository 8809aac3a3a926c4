//! # wicket_core
//!
//! Core domain logic for Wicket.

pub mod access;
pub mod auth;
pub mod db;
pub mod menu;
pub mod migrate;
pub mod models;
pub mod seed;
pub mod text;
pub mod users;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
