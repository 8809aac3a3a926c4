//! User domain models.

use serde::{Deserialize, Serialize};

/// Profile projection for the authenticated user.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserProfile {
    pub id: i64,
    pub fullname: String,
    pub access_name: String,
    pub email: String,
    pub phone: String,
    pub image: String,
}

/// One row of the paginated user listing.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct UserListRow {
    pub id: i64,
    pub fullname: String,
    pub access_name: String,
    pub email: String,
    pub phone: String,
    pub status: i16,
    pub status_text: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// Paginated listing envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserListPage {
    pub data: Vec<UserListRow>,
    pub page: i64,
    pub total_data: i64,
    pub total_page: i64,
    pub total_per_page: i64,
}
