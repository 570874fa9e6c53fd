#![allow(dead_code)]

//! Shared helpers for HTTP-level integration tests.
//!
//! Tests drive the production router via `tower::ServiceExt::oneshot`, so
//! no TCP listener is involved. `build_test_app` goes through the same
//! [`build_app_router`] as `main.rs`.

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use foodlog_api::auth::jwt::generate_access_token;
use foodlog_api::auth::password::hash_password;
use foodlog_api::config::{JwtConfig, ServerConfig};
use foodlog_api::router::build_app_router;
use foodlog_api::state::AppState;
use foodlog_core::types::DbId;
use foodlog_db::models::{NewPortion, NewProduct, Portion, Product};
use foodlog_db::repositories::{AccountRepo, PortionRepo, ProductRepo};

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-not-for-production".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    build_app_router(AppState::new(pool, config.clone()), &config)
}

// ---------------------------------------------------------------------------
// Seeding
// ---------------------------------------------------------------------------

/// Create an account directly in the store and mint a valid token for it.
///
/// Returns `(account_id, bearer_token)`.
pub async fn seed_account(pool: &PgPool, email: &str) -> (DbId, String) {
    let password_hash = hash_password("integration-pass").unwrap();
    let account = AccountRepo::create(pool, email, &password_hash)
        .await
        .unwrap();
    let token = generate_access_token(account.id, &test_config().jwt).unwrap();
    (account.id, token)
}

/// Create a product owned by `creator`.
pub async fn seed_product(pool: &PgPool, creator: DbId, name: &str) -> Product {
    ProductRepo::create(
        pool,
        creator,
        &NewProduct {
            name: name.to_string(),
        },
    )
    .await
    .unwrap()
}

/// Add a portion to a product.
pub async fn seed_portion(pool: &PgPool, product_id: DbId, unit: &str, energy: f64) -> Portion {
    PortionRepo::create(
        pool,
        product_id,
        &NewPortion {
            unit: unit.to_string(),
            energy,
        },
    )
    .await
    .unwrap()
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Send an unauthenticated GET request.
pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a GET request with a bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send an unauthenticated POST request with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a bearer token and a JSON body.
pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Send a POST request with a bearer token and a raw (possibly invalid) body.
pub async fn post_raw_auth(app: Router, uri: &str, token: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
