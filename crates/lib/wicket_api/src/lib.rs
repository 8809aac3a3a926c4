//! # wicket_api
//!
//! HTTP API library for Wicket.

pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

use axum::Router;
use axum::routing::{get, post};
use sqlx::PgPool;
use tower_http::cors::{Any, CorsLayer};

use crate::config::ApiConfig;
use crate::handlers::{auth, user};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool.
    pub pool: PgPool,
    /// API configuration.
    pub config: ApiConfig,
}

/// Run embedded database migrations.
///
/// Delegates to `wicket_core::migrate::migrate()` which owns the migration files.
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    wicket_core::migrate::migrate(pool).await
}

/// Builds the Axum router with all routes and shared state.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Public routes (no session gate). The session probe verifies its own
    // token so it can answer `false` instead of 401.
    let public = Router::new()
        .route("/auth/login", post(auth::login_handler))
        .route("/auth/session", get(auth::session_handler));

    // Protected routes (require a live session)
    let protected = Router::new()
        .route("/auth/me", get(auth::me_handler))
        .route("/auth/menu", get(auth::menu_handler))
        .route("/auth/permission", get(auth::permission_handler))
        .route("/user", get(user::profile_handler))
        .route("/user/list", get(user::list_handler))
        .route(
            "/user/access",
            post(user::create_access_handler).patch(user::update_access_handler),
        )
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::require_auth,
        ));

    Router::new()
        .merge(public)
        .merge(protected)
        .layer(cors)
        .with_state(state)
}
