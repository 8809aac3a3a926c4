//! User profile and listing queries.

use sqlx::PgPool;

use crate::models::user::{UserListPage, UserListRow, UserProfile};

/// Default page size for the user listing.
const DEFAULT_PAGE_SIZE: i64 = 10;

/// Listing filter: page/limit plus optional search and status.
#[derive(Debug, Clone, Default)]
pub struct UserListFilter {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
    pub status: Option<i16>,
}

/// Fetch the profile projection for one user.
pub async fn get_profile(pool: &PgPool, user_id: i64) -> Result<Option<UserProfile>, sqlx::Error> {
    sqlx::query_as::<_, UserProfile>(
        r#"
        SELECT u.id, u.fullname, a.name AS access_name, u.email, u.phone, u.image
        FROM users u
        INNER JOIN user_access a ON a.id = u.access_id
        WHERE u.id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await
}

/// Paginated user listing with optional search (username/fullname/email)
/// and status filter, newest first.
pub async fn list_users(pool: &PgPool, filter: &UserListFilter) -> Result<UserListPage, sqlx::Error> {
    let page = filter.page.unwrap_or(1).max(1);
    let limit = filter.limit.unwrap_or(DEFAULT_PAGE_SIZE).max(1);
    let offset = (page - 1) * limit;
    let search = filter
        .search
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(|s| format!("%{s}%"));

    let rows = sqlx::query_as::<_, UserListRow>(
        r#"
        SELECT u.id, u.fullname, a.name AS access_name, u.email, u.phone, u.status,
               CASE WHEN u.status = 1 THEN 'Active' ELSE 'Inactive' END AS status_text,
               u.created_at, u.updated_at
        FROM users u
        INNER JOIN user_access a ON a.id = u.access_id
        WHERE ($1::text IS NULL
               OR u.username ILIKE $1 OR u.fullname ILIKE $1 OR u.email ILIKE $1)
          AND ($2::smallint IS NULL OR u.status = $2)
        ORDER BY u.created_at DESC, u.id DESC
        LIMIT $3 OFFSET $4
        "#,
    )
    .bind(search.as_deref())
    .bind(filter.status)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    let total_data = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*)
        FROM users u
        WHERE ($1::text IS NULL
               OR u.username ILIKE $1 OR u.fullname ILIKE $1 OR u.email ILIKE $1)
          AND ($2::smallint IS NULL OR u.status = $2)
        "#,
    )
    .bind(search.as_deref())
    .bind(filter.status)
    .fetch_one(pool)
    .await?;

    Ok(UserListPage {
        data: rows,
        page,
        total_data,
        total_page: (total_data as u64).div_ceil(limit as u64) as i64,
        total_per_page: limit,
    })
}
