//! Authentication middleware — Bearer extraction, JWT verification, and
//! the session-liveness gate.

use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use wicket_core::auth::{jwt, queries, session};
use wicket_core::models::auth::TokenClaims;

use crate::AppState;
use crate::error::AppError;

/// Key used to store `TokenClaims` in request extensions.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser(pub TokenClaims);

/// Pull the bearer token out of the `Authorization` header.
pub fn extract_bearer(headers: &HeaderMap) -> Result<&str, AppError> {
    let header = headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".into()))?;

    header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AppError::Unauthorized("Invalid authorization scheme".into()))
}

/// Decode and verify the bearer token on a request.
pub fn verify_request_token(headers: &HeaderMap, secret: &[u8]) -> Result<TokenClaims, AppError> {
    let token = extract_bearer(headers)?;
    jwt::verify_access_token(token, secret)
        .ok_or_else(|| AppError::Unauthorized("Invalid or expired token".into()))
}

/// Axum middleware: verifies the JWT, checks the session marker is still
/// live for the token's `iat`, and injects [`AuthenticatedUser`] into
/// request extensions.
///
/// A token that decodes fine but predates the user's current marker is
/// rejected here — a later login elsewhere ends this session.
pub async fn require_auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let claims = verify_request_token(request.headers(), state.config.jwt_secret.as_bytes())?;

    let marker = queries::get_session_marker(&state.pool, claims.id).await?;
    let live = match marker {
        Some(session_id) => session::is_live(&session_id, claims.iat),
        None => false,
    };
    if !live {
        return Err(AppError::Unauthorized("Session is no longer active".into()));
    }

    request.extensions_mut().insert(AuthenticatedUser(claims));

    Ok(next.run(request).await)
}
