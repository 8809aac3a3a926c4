//! Request and response bodies for the HTTP surface.

use serde::{Deserialize, Serialize};

use wicket_core::models::access::AccessDetailInput;
use wicket_core::models::auth::DeviceInfo;

/// Error payload: machine-readable kind plus a stable human message.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// `POST /auth/login` body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub user: String,
    pub password: String,
    pub device: DeviceInfo,
}

/// `POST /auth/login` response.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub redirect_to: String,
}

/// `GET /auth/session` response — the liveness probe.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session: bool,
}

/// `GET /auth/me` response.
#[derive(Debug, Serialize, Deserialize)]
pub struct MeResponse {
    pub id: i64,
    pub name: String,
    pub access: String,
}

/// `GET /auth/permission` query.
#[derive(Debug, Deserialize)]
pub struct PermissionQuery {
    pub path: String,
}

/// `GET /user/list` query.
#[derive(Debug, Deserialize, Default)]
pub struct UserListQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
    pub status: Option<i16>,
}

/// `POST /user/access` body.
#[derive(Debug, Deserialize)]
pub struct CreateAccessRequest {
    pub name: String,
    pub description: String,
    pub access_detail: Vec<AccessDetailInput>,
}

/// `PATCH /user/access` body.
#[derive(Debug, Deserialize)]
pub struct UpdateAccessRequest {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub status: i16,
    pub access_detail: Vec<AccessDetailInput>,
}

/// Mutation acknowledgement.
#[derive(Debug, Serialize, Deserialize)]
pub struct MutationResponse {
    pub success: bool,
    pub message: String,
}
