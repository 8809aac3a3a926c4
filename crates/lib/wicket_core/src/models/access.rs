//! Role ("access") domain models.

use serde::{Deserialize, Serialize};

/// Stored role row projection used by the admin engine.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AccessRow {
    pub id: i64,
    pub name: String,
    pub created_by: Option<i64>,
}

/// One submitted capability row for a (role, menu) pair. Flags are 0/1
/// smallints, matching the stored representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessDetailInput {
    pub menu_id: i64,
    pub m_created: i16,
    pub m_updated: i16,
    pub m_deleted: i16,
}

/// Input for creating a role and its capability matrix.
#[derive(Debug, Clone)]
pub struct CreateAccess {
    pub name: String,
    pub description: String,
    pub access_detail: Vec<AccessDetailInput>,
}

/// Input for updating a role in place and replacing its capability matrix.
#[derive(Debug, Clone)]
pub struct UpdateAccess {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub status: i16,
    pub access_detail: Vec<AccessDetailInput>,
}
