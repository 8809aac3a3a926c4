//! Role ("access") administration.
//!
//! A role is a named bundle of per-menu capability flags. The admin engine
//! owns every write to `user_access` and `user_access_detail`; the
//! capability matrix of a role is always replaced as a whole, inside one
//! transaction.

pub mod admin;
pub mod queries;

use thiserror::Error;

/// Role administration errors.
#[derive(Debug, Error)]
pub enum AccessError {
    /// Another role already carries this name (case-insensitive).
    #[error("Name already exists")]
    DuplicateName,

    /// The referenced role id does not exist.
    #[error("Access not found")]
    NotFound,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    DbError(#[from] sqlx::Error),
}
