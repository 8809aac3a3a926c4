//! Auth-related database queries.

use sqlx::PgPool;

use super::AuthError;
use crate::models::auth::{DeviceInfo, LoginUser};

/// Fetch an active user by username, joined to its role name.
pub async fn find_login_user(
    pool: &PgPool,
    username: &str,
) -> Result<Option<LoginUser>, AuthError> {
    let row = sqlx::query_as::<_, LoginUser>(
        r#"
        SELECT u.id, u.access_id, u.fullname, u.password, a.name AS access_name
        FROM users u
        INNER JOIN user_access a ON a.id = u.access_id
        WHERE u.username = $1 AND u.status = 1
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Fetch the stored session marker for a user, if any.
pub async fn get_session_marker(pool: &PgPool, user_id: i64) -> Result<Option<String>, AuthError> {
    let row = sqlx::query_scalar::<_, String>(
        "SELECT session_id FROM user_session WHERE user_id = $1",
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Write the session marker for a user: insert if absent, else overwrite.
///
/// `user_session.user_id` is UNIQUE, so this keeps the at-most-one-marker
/// invariant and stays idempotent for retries.
pub async fn upsert_session_marker(
    pool: &PgPool,
    user_id: i64,
    session_id: &str,
) -> Result<(), AuthError> {
    sqlx::query(
        r#"
        INSERT INTO user_session (user_id, session_id)
        VALUES ($1, $2)
        ON CONFLICT (user_id)
        DO UPDATE SET session_id = EXCLUDED.session_id, updated_at = now()
        "#,
    )
    .bind(user_id)
    .bind(session_id)
    .execute(pool)
    .await?;
    Ok(())
}

/// Write the device fingerprint for a user: insert if absent, else overwrite.
pub async fn upsert_device(
    pool: &PgPool,
    user_id: i64,
    device: &DeviceInfo,
) -> Result<(), AuthError> {
    sqlx::query(
        r#"
        INSERT INTO user_device
            (user_id, firebase_id, device_imei, device_name, device_os,
             device_platform, app_version)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        ON CONFLICT (user_id)
        DO UPDATE SET
            firebase_id = EXCLUDED.firebase_id,
            device_imei = EXCLUDED.device_imei,
            device_name = EXCLUDED.device_name,
            device_os = EXCLUDED.device_os,
            device_platform = EXCLUDED.device_platform,
            app_version = EXCLUDED.app_version,
            updated_at = now()
        "#,
    )
    .bind(user_id)
    .bind(&device.firebase_id)
    .bind(&device.device_imei)
    .bind(&device.device_name)
    .bind(&device.device_os)
    .bind(&device.device_platform)
    .bind(&device.app_version)
    .execute(pool)
    .await?;
    Ok(())
}

/// Check whether a user record still exists and is active.
pub async fn user_exists(pool: &PgPool, user_id: i64) -> Result<bool, AuthError> {
    let exists = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM users WHERE id = $1 AND status = 1)",
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;
    Ok(exists)
}
