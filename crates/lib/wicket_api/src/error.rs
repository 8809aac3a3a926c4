//! Application error types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Convenience alias for handler return types.
pub type AppResult<T> = Result<T, AppError>;

/// Application-level errors with HTTP status mapping.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal server error")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match &self {
            AppError::Validation(m) => (StatusCode::BAD_REQUEST, "validation_error", m.as_str()),
            AppError::NotFound(m) => (StatusCode::NOT_FOUND, "not_found", m.as_str()),
            AppError::Unauthorized(m) => (StatusCode::UNAUTHORIZED, "unauthorized", m.as_str()),
            AppError::Forbidden(m) => (StatusCode::FORBIDDEN, "forbidden", m.as_str()),
            // Internal detail stays in the logs, never in the payload.
            AppError::Internal(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                "Internal server error",
            ),
        };
        let body = Json(ErrorResponse {
            error: error.to_string(),
            message: message.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        match e {
            sqlx::Error::RowNotFound => AppError::NotFound("row not found".into()),
            _ => AppError::Internal(e.to_string()),
        }
    }
}

impl From<wicket_core::auth::AuthError> for AppError {
    fn from(e: wicket_core::auth::AuthError) -> Self {
        use wicket_core::auth::AuthError;
        match e {
            // The login failure message never says whether the username or
            // the password was wrong.
            AuthError::InvalidCredentials => {
                AppError::Validation("Username or password is incorrect".into())
            }
            AuthError::NoAccess => {
                AppError::Forbidden("Sorry, you don't have access to this resource.".into())
            }
            AuthError::Unauthenticated => AppError::Unauthorized("Unauthenticated".into()),
            AuthError::TokenError(msg) => AppError::Unauthorized(msg),
            AuthError::DbError(e) => AppError::from(e),
            AuthError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

impl From<wicket_core::access::AccessError> for AppError {
    fn from(e: wicket_core::access::AccessError) -> Self {
        use wicket_core::access::AccessError;
        match e {
            AccessError::DuplicateName => AppError::Validation("Name already exists".into()),
            AccessError::NotFound => AppError::NotFound("Access not found".into()),
            AccessError::Validation(msg) => AppError::Validation(msg),
            AccessError::DbError(e) => AppError::from(e),
        }
    }
}

impl From<wicket_core::menu::MenuError> for AppError {
    fn from(e: wicket_core::menu::MenuError) -> Self {
        use wicket_core::menu::MenuError;
        match e {
            MenuError::NoAccess => {
                AppError::Forbidden("Sorry, you don't have access to this resource.".into())
            }
            MenuError::DbError(e) => AppError::from(e),
        }
    }
}
