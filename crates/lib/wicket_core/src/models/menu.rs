//! Menu hierarchy domain models.

use serde::{Deserialize, Serialize};

/// One row of the permission-annotated menu query: a menu joined to the
/// capability flags the role holds on it.
///
/// Rows arrive ordered by `(level, sort, id)` so parents precede children.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct MenuPermissionRow {
    pub id: i64,
    pub name: String,
    pub path: String,
    pub icon: String,
    pub level: i16,
    /// Parent menu id; 0 marks a top-level node.
    pub header: i64,
    pub m_created: i16,
    pub m_view: i16,
    pub m_updated: i16,
    pub m_deleted: i16,
}

/// Capability flags carried on a menu node.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Permission {
    pub m_created: i16,
    pub m_view: i16,
    pub m_updated: i16,
    pub m_deleted: i16,
}

/// A node of the assembled menu forest.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuNode {
    pub id: i64,
    pub name: String,
    pub path: String,
    pub icon: String,
    pub level: i16,
    pub permission: Permission,
    pub child: Vec<MenuNode>,
}

/// Point permission-check result for one menu path.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct PathPermission {
    pub id: i64,
    pub path: String,
    pub m_created: i16,
    pub m_view: i16,
    pub m_updated: i16,
    pub m_deleted: i16,
}
