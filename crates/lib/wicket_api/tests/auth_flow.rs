//! Login, session-liveness, and menu-resolution flows against a seeded
//! ephemeral database.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{TEST_SECRET, TestApp};
use wicket_core::auth::{jwt, password};

#[tokio::test]
async fn login_with_seeded_admin_returns_token_and_redirect() {
    let app = TestApp::spawn().await;

    let (status, body) = app.login("admin", "admin").await;

    assert_eq!(StatusCode::OK, status);
    assert!(!body["access_token"].as_str().expect("token").is_empty());
    assert_eq!("/dashboard", body["redirect_to"]);

    app.stop().await;
}

#[tokio::test]
async fn bad_credentials_get_one_generic_message() {
    let app = TestApp::spawn().await;

    // Wrong password and unknown username must be indistinguishable.
    let (status, body) = app.login("admin", "wrong").await;
    assert_eq!(StatusCode::BAD_REQUEST, status);
    assert_eq!("Username or password is incorrect", body["message"]);

    let (status, body) = app.login("nobody", "admin").await;
    assert_eq!(StatusCode::BAD_REQUEST, status);
    assert_eq!("Username or password is incorrect", body["message"]);

    app.stop().await;
}

#[tokio::test]
async fn second_login_invalidates_first_token() {
    let app = TestApp::spawn().await;

    let first = app.login_token("admin", "admin").await;
    let (status, _) = app.get("/auth/menu", Some(&first)).await;
    assert_eq!(StatusCode::OK, status);

    // The marker's resolution is one second; make sure the second login
    // lands on a later epoch than the first token's iat.
    tokio::time::sleep(std::time::Duration::from_millis(1100)).await;
    let second = app.login_token("admin", "admin").await;

    let (status, _) = app.get("/auth/menu", Some(&first)).await;
    assert_eq!(StatusCode::UNAUTHORIZED, status, "superseded token must die");

    let (status, body) = app.get("/auth/session", Some(&first)).await;
    assert_eq!(StatusCode::OK, status);
    assert_eq!(json!({"session": false}), body);

    let (status, body) = app.get("/auth/session", Some(&second)).await;
    assert_eq!(StatusCode::OK, status);
    assert_eq!(json!({"session": true}), body);

    let (status, _) = app.get("/auth/menu", Some(&second)).await;
    assert_eq!(StatusCode::OK, status);

    app.stop().await;
}

#[tokio::test]
async fn session_probe_is_false_without_a_marker_row() {
    let app = TestApp::spawn().await;

    // A validly signed token for the seeded admin, but nobody has logged
    // in, so no marker row exists yet.
    let token = jwt::generate_access_token(1, "Admin", "Administrator", TEST_SECRET.as_bytes(), 3600)
        .expect("sign token");

    let (status, body) = app.get("/auth/session", Some(&token)).await;
    assert_eq!(StatusCode::OK, status);
    assert_eq!(json!({"session": false}), body);

    app.stop().await;
}

#[tokio::test]
async fn menu_returns_annotated_dashboard_tree() {
    let app = TestApp::spawn().await;
    let token = app.login_token("admin", "admin").await;

    let (status, body) = app.get("/auth/menu", Some(&token)).await;
    assert_eq!(StatusCode::OK, status);

    let forest = body.as_array().expect("forest");
    assert_eq!(1, forest.len());
    let node = &forest[0];
    assert_eq!("Dashboard", node["name"]);
    assert_eq!("/dashboard", node["path"]);
    assert_eq!(1, node["permission"]["m_created"]);
    assert_eq!(1, node["permission"]["m_updated"]);
    assert_eq!(1, node["permission"]["m_deleted"]);
    assert!(node["child"].as_array().expect("child").is_empty());

    app.stop().await;
}

#[tokio::test]
async fn permission_point_check_resolves_by_path() {
    let app = TestApp::spawn().await;
    let token = app.login_token("admin", "admin").await;

    let (status, body) = app
        .get("/auth/permission?path=/dashboard", Some(&token))
        .await;
    assert_eq!(StatusCode::OK, status);
    assert_eq!("/dashboard", body["path"]);
    assert_eq!(1, body["m_created"]);

    let (status, body) = app.get("/auth/permission?path=/nowhere", Some(&token)).await;
    assert_eq!(StatusCode::FORBIDDEN, status);
    assert_eq!(
        "Sorry, you don't have access to this resource.",
        body["message"]
    );

    app.stop().await;
}

#[tokio::test]
async fn me_returns_identity_summary() {
    let app = TestApp::spawn().await;
    let token = app.login_token("admin", "admin").await;

    let (status, body) = app.get("/auth/me", Some(&token)).await;
    assert_eq!(StatusCode::OK, status);
    assert_eq!(1, body["id"]);
    assert_eq!("Admin", body["name"]);
    assert_eq!("Administrator", body["access"]);

    app.stop().await;
}

#[tokio::test]
async fn login_without_any_accessible_menu_is_forbidden() {
    let app = TestApp::spawn().await;

    // A role with no capability rows at all: credentials will match but
    // there is nowhere to redirect to.
    let access_id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO user_access (name, description) VALUES ('Bare', 'No Menus') RETURNING id",
    )
    .fetch_one(&app.state.pool)
    .await
    .expect("insert access");

    let hash = password::hash_password("secret").expect("hash");
    sqlx::query(
        "INSERT INTO users (access_id, username, password, fullname) \
         VALUES ($1, 'bare', $2, 'Bare User')",
    )
    .bind(access_id)
    .bind(&hash)
    .execute(&app.state.pool)
    .await
    .expect("insert user");

    let (status, body) = app.login("bare", "secret").await;
    assert_eq!(StatusCode::FORBIDDEN, status);
    assert_eq!(
        "Sorry, you don't have access to this resource.",
        body["message"]
    );

    app.stop().await;
}

#[tokio::test]
async fn protected_routes_reject_missing_and_garbage_tokens() {
    let app = TestApp::spawn().await;

    let (status, _) = app.get("/auth/menu", None).await;
    assert_eq!(StatusCode::UNAUTHORIZED, status);

    let (status, _) = app.get("/auth/menu", Some("not-a-jwt")).await;
    assert_eq!(StatusCode::UNAUTHORIZED, status);

    app.stop().await;
}
