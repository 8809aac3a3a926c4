//! Request-level services orchestrating the core crate.

pub mod auth;
