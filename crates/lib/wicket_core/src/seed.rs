//! First-run seed data.

use sqlx::PgPool;
use tracing::info;

use crate::auth::AuthError;
use crate::auth::password::hash_password;

/// Seed the initial menu, role, and administrator account.
///
/// Runs only when both the role and user tables are empty, so calling it
/// on every startup is safe. Everything is inserted in one transaction:
/// a half-seeded database never becomes visible.
pub async fn seed_init(pool: &PgPool) -> Result<(), AuthError> {
    let (access_count, user_count): (i64, i64) = sqlx::query_as(
        "SELECT (SELECT COUNT(*) FROM user_access), (SELECT COUNT(*) FROM users)",
    )
    .fetch_one(pool)
    .await?;

    if access_count > 0 || user_count > 0 {
        return Ok(());
    }

    let password = hash_password("admin")?;

    let mut tx = pool.begin().await?;

    let menu_id = sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO master_menu (name, path, icon, level, header, sort)
        VALUES ('Dashboard', '/dashboard', 'dashboard', 1, 0, 1)
        RETURNING id
        "#,
    )
    .fetch_one(&mut *tx)
    .await?;

    let access_id = sqlx::query_scalar::<_, i64>(
        r#"
        INSERT INTO user_access (name, description)
        VALUES ('Administrator', 'Administrator Access')
        RETURNING id
        "#,
    )
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO user_access_detail (access_id, menu_id, m_created, m_updated, m_deleted)
        VALUES ($1, $2, 1, 1, 1)
        "#,
    )
    .bind(access_id)
    .bind(menu_id)
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO users (access_id, username, password, fullname, email, phone)
        VALUES ($1, 'admin', $2, 'Admin', 'admin@gmail.com', '08123456789')
        "#,
    )
    .bind(access_id)
    .bind(&password)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    info!("seeded initial administrator account");
    Ok(())
}
