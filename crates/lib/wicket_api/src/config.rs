//! API server configuration.

use wicket_core::auth::jwt::resolve_jwt_secret;

/// Default access-token lifetime: one day.
const DEFAULT_TOKEN_EXPIRY_SECS: i64 = 24 * 60 * 60;

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Address to bind the HTTP listener (e.g. "127.0.0.1:3200").
    pub bind_addr: String,
    /// PostgreSQL connection URL.
    pub pg_connection_url: String,
    /// JWT signing secret.
    pub jwt_secret: String,
    /// Access-token lifetime in seconds.
    pub token_expiry_secs: i64,
}

impl ApiConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable           | Default                                  |
    /// |--------------------|------------------------------------------|
    /// | `BIND_ADDR`        | `127.0.0.1:3200`                         |
    /// | `DATABASE_URL`     | `postgres://localhost:5432/wicket`       |
    /// | `JWT_SECRET` / `AUTH_SECRET` | generated & persisted to file  |
    /// | `JWT_EXPIRES_IN`   | `86400` (seconds)                        |
    pub fn from_env() -> Self {
        Self {
            bind_addr: std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:3200".into()),
            pg_connection_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost:5432/wicket".into()),
            jwt_secret: resolve_jwt_secret(),
            token_expiry_secs: std::env::var("JWT_EXPIRES_IN")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_TOKEN_EXPIRY_SECS),
        }
    }
}
