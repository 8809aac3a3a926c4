//! Authentication domain models.

use serde::{Deserialize, Serialize};

/// JWT claims embedded in access tokens.
///
/// Validity is extrinsic: a decoded token is only honored while the user's
/// session marker predates `iat` (see [`crate::auth::session`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// User ID.
    pub id: i64,
    /// Display name (fullname at login time).
    pub name: String,
    /// Role name the user held at login time.
    pub access: String,
    /// Issued at (unix timestamp).
    pub iat: i64,
    /// Expiry (unix timestamp).
    pub exp: i64,
}

/// Row needed to authenticate a login attempt: the active user joined to
/// its role name.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct LoginUser {
    pub id: i64,
    pub access_id: i64,
    pub fullname: String,
    pub password: String,
    pub access_name: String,
}

/// Device metadata captured at login. Free-form identifying fields; the
/// row is a side effect of login, never a liveness gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub firebase_id: String,
    pub device_imei: String,
    pub device_name: String,
    pub device_os: String,
    pub device_platform: String,
    pub app_version: String,
}
