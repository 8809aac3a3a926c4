//! Authentication logic.
//!
//! Provides password hashing, JWT management, the session-marker protocol,
//! and the database queries behind the login flow.

pub mod jwt;
pub mod password;
pub mod queries;
pub mod session;

use thiserror::Error;

/// Authentication errors.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Bad username or password. Never says which, so usernames cannot be
    /// enumerated through the login endpoint.
    #[error("Username or password is incorrect")]
    InvalidCredentials,

    /// Authenticated but the role holds no viewable menu with a path.
    #[error("Sorry, you don't have access to this resource.")]
    NoAccess,

    /// Missing, expired, or no-longer-live token, or the user vanished.
    #[error("Unauthenticated")]
    Unauthenticated,

    #[error("Token error: {0}")]
    TokenError(String),

    #[error("Database error: {0}")]
    DbError(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
