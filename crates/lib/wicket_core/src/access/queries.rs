//! Role and capability-matrix queries.

use sqlx::PgPool;

use super::AccessError;
use crate::models::access::{AccessDetailInput, AccessRow};

/// Find a role whose name matches case-insensitively.
pub async fn find_access_by_name_ci(
    pool: &PgPool,
    name: &str,
) -> Result<Option<AccessRow>, AccessError> {
    let row = sqlx::query_as::<_, AccessRow>(
        "SELECT id, name, created_by FROM user_access WHERE LOWER(name) = LOWER($1)",
    )
    .bind(name)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Fetch a role by id.
pub async fn get_access(pool: &PgPool, id: i64) -> Result<Option<AccessRow>, AccessError> {
    let row = sqlx::query_as::<_, AccessRow>(
        "SELECT id, name, created_by FROM user_access WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Insert a role and its capability rows in one transaction.
///
/// Returns the generated role id. Any failure rolls the role insert back
/// with the detail rows — a role never becomes visible without its matrix.
pub async fn insert_access_with_details(
    pool: &PgPool,
    name: &str,
    description: &str,
    details: &[AccessDetailInput],
    actor_id: i64,
) -> Result<i64, AccessError> {
    let mut tx = pool.begin().await?;

    let access_id = sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO user_access (name, description, created_by)
        VALUES ($1, $2, $3)
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(description)
    .bind(actor_id)
    .fetch_one(&mut *tx)
    .await?;

    for detail in details {
        sqlx::query(
            r#"
            INSERT INTO user_access_detail
                (access_id, menu_id, m_created, m_updated, m_deleted, created_by)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(access_id)
        .bind(detail.menu_id)
        .bind(detail.m_created)
        .bind(detail.m_updated)
        .bind(detail.m_deleted)
        .bind(actor_id)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(access_id)
}

/// Update a role in place and replace its whole capability matrix.
///
/// Delete-all-then-insert rather than diff/merge: simpler, at the cost of
/// churn on unchanged rows. One transaction — a failed insert leaves the
/// prior matrix intact, never a half-replaced set.
#[allow(clippy::too_many_arguments)]
pub async fn replace_access_with_details(
    pool: &PgPool,
    access_id: i64,
    name: &str,
    description: &str,
    status: i16,
    details: &[AccessDetailInput],
    original_creator: Option<i64>,
    actor_id: i64,
) -> Result<(), AccessError> {
    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        UPDATE user_access
        SET name = $2, description = $3, status = $4, updated_by = $5, updated_at = now()
        WHERE id = $1
        "#,
    )
    .bind(access_id)
    .bind(name)
    .bind(description)
    .bind(status)
    .bind(actor_id)
    .execute(&mut *tx)
    .await?;

    sqlx::query("DELETE FROM user_access_detail WHERE access_id = $1")
        .bind(access_id)
        .execute(&mut *tx)
        .await?;

    for detail in details {
        sqlx::query(
            r#"
            INSERT INTO user_access_detail
                (access_id, menu_id, m_created, m_updated, m_deleted, created_by, updated_by)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(access_id)
        .bind(detail.menu_id)
        .bind(detail.m_created)
        .bind(detail.m_updated)
        .bind(detail.m_deleted)
        .bind(original_creator)
        .bind(actor_id)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(())
}
