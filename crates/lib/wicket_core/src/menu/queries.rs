//! Menu and permission queries.
//!
//! All three queries walk the same join: capability rows to menus to the
//! role to the users holding it.

use sqlx::PgPool;

use super::MenuError;
use crate::models::menu::{MenuPermissionRow, PathPermission};

/// Fetch the permission-annotated menu rows for a user's role.
///
/// The `(level, sort, id)` ordering is load-bearing: the tree builder is
/// single-pass and requires every parent to be emitted before its children.
pub async fn menu_rows_for_user(
    pool: &PgPool,
    user_id: i64,
) -> Result<Vec<MenuPermissionRow>, MenuError> {
    let rows = sqlx::query_as::<_, MenuPermissionRow>(
        r#"
        SELECT m.id, m.name, m.path, m.icon, m.level, m.header,
               d.m_created, d.m_view, d.m_updated, d.m_deleted
        FROM user_access_detail d
        INNER JOIN master_menu m ON m.id = d.menu_id
        INNER JOIN user_access a ON a.id = d.access_id
        INNER JOIN users u ON u.access_id = a.id
        WHERE u.id = $1
        ORDER BY m.level ASC, m.sort ASC, m.id ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Point permission check: the capability row for one exact menu path.
pub async fn permission_for_path(
    pool: &PgPool,
    user_id: i64,
    path: &str,
) -> Result<Option<PathPermission>, MenuError> {
    let row = sqlx::query_as::<_, PathPermission>(
        r#"
        SELECT m.id, m.path, d.m_created, d.m_view, d.m_updated, d.m_deleted
        FROM user_access_detail d
        INNER JOIN master_menu m ON m.id = d.menu_id
        INNER JOIN user_access a ON a.id = d.access_id
        INNER JOIN users u ON u.access_id = a.id
        WHERE u.id = $1 AND m.path = $2
        "#,
    )
    .bind(user_id)
    .bind(path)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Resolve the first menu path a role can land on after login: lowest
/// `(level, sort, id)` among its menus with a non-empty path.
pub async fn first_menu_path(pool: &PgPool, access_id: i64) -> Result<Option<String>, MenuError> {
    let path = sqlx::query_scalar::<_, String>(
        r#"
        SELECT m.path
        FROM user_access_detail d
        INNER JOIN master_menu m ON m.id = d.menu_id
        WHERE d.access_id = $1 AND m.path != ''
        ORDER BY m.level ASC, m.sort ASC, m.id ASC
        LIMIT 1
        "#,
    )
    .bind(access_id)
    .fetch_optional(pool)
    .await?;
    Ok(path)
}
