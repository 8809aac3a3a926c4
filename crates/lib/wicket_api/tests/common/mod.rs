//! Shared test bootstrap: ephemeral PostgreSQL, migrated + seeded schema,
//! and a router driven through `tower::ServiceExt::oneshot`.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tower::ServiceExt;

use wicket_api::{AppState, config::ApiConfig};
use wicket_core::db::DbManager;

/// Signing secret used by every test token.
pub const TEST_SECRET: &str = "test-secret";

pub struct TestApp {
    pub db: DbManager,
    pub state: AppState,
    app: Router,
}

impl TestApp {
    /// Boot an ephemeral PostgreSQL instance, migrate, seed, and build the
    /// router.
    pub async fn spawn() -> Self {
        let mut db = DbManager::ephemeral().await.expect("DbManager::ephemeral");
        db.setup().await.expect("db setup");
        db.start().await.expect("db start");

        let pool = sqlx::PgPool::connect(&db.connection_url())
            .await
            .expect("connect to ephemeral PG");

        wicket_api::migrate(&pool).await.expect("migrations");
        wicket_core::seed::seed_init(&pool).await.expect("seed");

        let state = AppState {
            pool,
            config: ApiConfig {
                bind_addr: "127.0.0.1:0".into(),
                pg_connection_url: db.connection_url(),
                jwt_secret: TEST_SECRET.into(),
                token_expiry_secs: 3600,
            },
        };
        let app = wicket_api::router(state.clone());

        Self { db, state, app }
    }

    async fn send(&self, req: Request<Body>) -> (StatusCode, Value) {
        let resp = self.app.clone().oneshot(req).await.expect("request");
        let status = resp.status();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("parse JSON body")
        };
        (status, body)
    }

    pub async fn get(&self, path: &str, token: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder().uri(path);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn send_json(
        &self,
        method: &str,
        path: &str,
        token: Option<&str>,
        body: &Value,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
        }
        self.send(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    /// POST /auth/login with the standard test device payload.
    pub async fn login(&self, user: &str, password: &str) -> (StatusCode, Value) {
        self.send_json(
            "POST",
            "/auth/login",
            None,
            &json!({
                "user": user,
                "password": password,
                "device": device_body(),
            }),
        )
        .await
    }

    /// Log in and return the bearer token, panicking on failure.
    pub async fn login_token(&self, user: &str, password: &str) -> String {
        let (status, body) = self.login(user, password).await;
        assert_eq!(StatusCode::OK, status, "login failed: {body}");
        body["access_token"].as_str().expect("access_token").to_string()
    }

    pub async fn stop(mut self) {
        self.db.stop().await.expect("db stop");
    }
}

/// Free-form device metadata submitted at login.
pub fn device_body() -> Value {
    json!({
        "firebase_id": "",
        "device_imei": "",
        "device_name": "integration-test",
        "device_os": "linux",
        "device_platform": "Web",
        "app_version": "0.1.0",
    })
}
