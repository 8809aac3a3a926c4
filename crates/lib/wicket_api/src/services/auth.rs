//! Authentication service — the login/session/me flows.

use sqlx::PgPool;
use tracing::info;

use wicket_core::auth::{AuthError, jwt, password, queries, session};
use wicket_core::menu;
use wicket_core::models::auth::{DeviceInfo, TokenClaims};

use crate::error::{AppError, AppResult};
use crate::models::{LoginResponse, MeResponse, SessionResponse};

/// Authenticate with username + password and open a new session.
///
/// On success the user's session marker is rewritten, which retroactively
/// invalidates every token issued before this call — one active session
/// per user. The marker and device writes are independent idempotent
/// upserts issued concurrently; both must land before the response goes
/// out, but they share no transaction, so a client may safely retry.
pub async fn login(
    pool: &PgPool,
    config: &crate::config::ApiConfig,
    username: &str,
    pass: &str,
    device: &DeviceInfo,
) -> AppResult<LoginResponse> {
    let user = queries::find_login_user(pool, username)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    if !password::verify_password(pass, &user.password)? {
        return Err(AuthError::InvalidCredentials.into());
    }

    let redirect_to = menu::queries::first_menu_path(pool, user.access_id)
        .await
        .map_err(AppError::from)?
        .ok_or(AuthError::NoAccess)?;

    // Marker before token: the liveness rule is `markerEpoch <= iat`, so
    // stamping the marker first keeps the fresh token live even when the
    // two calls straddle a second boundary.
    let session_id = session::new_session_id();

    let access_token = jwt::generate_access_token(
        user.id,
        &user.fullname,
        &user.access_name,
        config.jwt_secret.as_bytes(),
        config.token_expiry_secs,
    )?;

    tokio::try_join!(
        queries::upsert_session_marker(pool, user.id, &session_id),
        queries::upsert_device(pool, user.id, device),
    )?;

    info!(user_id = user.id, access = %user.access_name, "login succeeded");

    Ok(LoginResponse {
        access_token,
        redirect_to,
    })
}

/// Session liveness probe: whether the given claims are still honored.
///
/// No stored marker means no session. Unlike the middleware gate this
/// never errors on a dead session — it reports it.
pub async fn probe_session(pool: &PgPool, claims: &TokenClaims) -> AppResult<SessionResponse> {
    let live = match queries::get_session_marker(pool, claims.id).await? {
        Some(session_id) => session::is_live(&session_id, claims.iat),
        None => false,
    };
    Ok(SessionResponse { session: live })
}

/// Resolve the current user: the record must still exist and be active.
pub async fn me(pool: &PgPool, claims: &TokenClaims) -> AppResult<MeResponse> {
    if !queries::user_exists(pool, claims.id).await? {
        return Err(AuthError::Unauthenticated.into());
    }
    Ok(MeResponse {
        id: claims.id,
        name: claims.name.clone(),
        access: claims.access.clone(),
    })
}
