//! Authentication request handlers.

use axum::Json;
use axum::extract::{Extension, Query, State};
use axum::http::HeaderMap;

use wicket_core::menu;
use wicket_core::models::menu::{MenuNode, PathPermission};

use crate::AppState;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::{AuthenticatedUser, verify_request_token};
use crate::models::{LoginRequest, LoginResponse, MeResponse, PermissionQuery, SessionResponse};
use crate::services::auth;

/// `POST /auth/login` — authenticate with username + password.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let resp = auth::login(
        &state.pool,
        &state.config,
        &body.user,
        &body.password,
        &body.device,
    )
    .await?;
    Ok(Json(resp))
}

/// `GET /auth/session` — liveness probe for the presented token.
///
/// Deliberately outside the auth gate: a valid-but-superseded token gets
/// `{session: false}` back instead of a 401, so clients can distinguish
/// "log in again" from "malformed request".
pub async fn session_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> AppResult<Json<SessionResponse>> {
    let claims = verify_request_token(&headers, state.config.jwt_secret.as_bytes())?;
    let resp = auth::probe_session(&state.pool, &claims).await?;
    Ok(Json(resp))
}

/// `GET /auth/me` — current user summary.
pub async fn me_handler(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(claims)): Extension<AuthenticatedUser>,
) -> AppResult<Json<MeResponse>> {
    let resp = auth::me(&state.pool, &claims).await?;
    Ok(Json(resp))
}

/// `GET /auth/menu` — the annotated menu forest for the current user.
pub async fn menu_handler(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(claims)): Extension<AuthenticatedUser>,
) -> AppResult<Json<Vec<MenuNode>>> {
    let rows = menu::queries::menu_rows_for_user(&state.pool, claims.id)
        .await
        .map_err(AppError::from)?;
    let forest = menu::tree::build_menu_tree(rows).map_err(AppError::from)?;
    Ok(Json(forest))
}

/// `GET /auth/permission?path=` — capability flags for one menu path.
pub async fn permission_handler(
    State(state): State<AppState>,
    Extension(AuthenticatedUser(claims)): Extension<AuthenticatedUser>,
    Query(query): Query<PermissionQuery>,
) -> AppResult<Json<PathPermission>> {
    let permission = menu::queries::permission_for_path(&state.pool, claims.id, &query.path)
        .await
        .map_err(AppError::from)?
        .ok_or(wicket_core::menu::MenuError::NoAccess)
        .map_err(AppError::from)?;
    Ok(Json(permission))
}
