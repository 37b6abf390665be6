//! Shared helpers for HTTP-level integration tests.
//!
//! Tests drive the full router (same middleware stack as production) via
//! `tower::ServiceExt::oneshot`, without a TCP listener.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use gigdesk_api::auth::jwt::{generate_access_token, JwtConfig};
use gigdesk_api::auth::password::hash_password;
use gigdesk_api::config::ServerConfig;
use gigdesk_api::router::build_app_router;
use gigdesk_api::state::AppState;
use gigdesk_db::models::user::CreateUser;
use gigdesk_db::repositories::UserRepo;

/// Secret used for all test tokens.
const TEST_JWT_SECRET: &str = "test-secret-that-is-long-enough-for-hmac";

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        open_tier_reads: false,
        jwt: JwtConfig {
            secret: TEST_JWT_SECRET.to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, request ID, timeout, tracing,
/// panic recovery) that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Create a user with a profile of the given role directly in the
/// database, returning the new user's id.
pub async fn create_test_user(pool: &PgPool, username: &str, role: &str) -> i64 {
    let hashed = hash_password("test_password_123!").expect("hashing should succeed");
    let input = CreateUser {
        username: username.to_string(),
        email: format!("{username}@test.com"),
        password_hash: hashed,
    };
    let (user, _profile) = UserRepo::create_with_profile(pool, &input, role)
        .await
        .expect("user creation should succeed");
    user.id
}

/// Mint an access token for a user, signed with the test secret.
pub fn token_for(user_id: i64, role: &str) -> String {
    generate_access_token(user_id, role, false, &test_config().jwt)
        .expect("token generation should succeed")
}

/// Mint a staff (elevated) token for a user.
pub fn staff_token_for(user_id: i64, role: &str) -> String {
    generate_access_token(user_id, role, true, &test_config().jwt)
        .expect("token generation should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn request(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
    token: Option<&str>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .expect("request should build"),
        None => builder.body(Body::empty()).expect("request should build"),
    };
    app.oneshot(request).await.expect("request should not error")
}

pub async fn get(app: Router, uri: &str) -> Response {
    request(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    request(app, Method::GET, uri, None, Some(token)).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    request(app, Method::POST, uri, Some(body), None).await
}

pub async fn post_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    request(app, Method::POST, uri, Some(body), Some(token)).await
}

pub async fn patch_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    request(app, Method::PATCH, uri, Some(body), Some(token)).await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    request(app, Method::PUT, uri, Some(body), Some(token)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    request(app, Method::DELETE, uri, None, Some(token)).await
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}
