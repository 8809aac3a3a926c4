//! Menu hierarchy resolution.
//!
//! Menus form a tree via a parent pointer (`header`, 0 = root) and are
//! read-only here; the admin engine only attaches capability flags to them.

pub mod queries;
pub mod tree;

use thiserror::Error;

/// Menu resolution errors.
#[derive(Debug, Error)]
pub enum MenuError {
    /// The role holds no matching menu/permission row.
    #[error("Sorry, you don't have access to this resource.")]
    NoAccess,

    #[error("Database error: {0}")]
    DbError(#[from] sqlx::Error),
}
