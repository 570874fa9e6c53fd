//! HTTP-level integration tests for registration and login.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json};
use sqlx::PgPool;

fn creds(email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({"email": email, "password": password})
}

// ---------------------------------------------------------------------------
// Register
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_returns_token_and_account(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/auth/register",
        creds("alice@example.com", "a-strong-password"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["token"].is_string());
    assert!(json["account"]["id"].is_number());
    assert_eq!(json["account"]["email"], "alice@example.com");

    // The stored hash must never appear in a response.
    assert!(json["account"].get("password_hash").is_none());

    // The returned token is immediately usable.
    let token = json["token"].as_str().unwrap().to_string();
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/entries/dates", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_duplicate_email_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/auth/register",
        creds("dup@example.com", "a-strong-password"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/register",
        creds("dup@example.com", "another-password"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("already exists"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_rejects_short_password(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/register",
        creds("alice@example.com", "short"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("at least 8"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_rejects_invalid_email(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/auth/register",
        creds("not-an-email", "a-strong-password"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("email"));
}

// ---------------------------------------------------------------------------
// Login
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_round_trip(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/v1/auth/register",
        creds("alice@example.com", "a-strong-password"),
    )
    .await;

    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/auth/login",
        creds("alice@example.com", "a-strong-password"),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["token"].is_string());
    assert_eq!(json["account"]["email"], "alice@example.com");

    let token = json["token"].as_str().unwrap().to_string();
    let app = common::build_test_app(pool);
    let response = get_auth(app, "/api/v1/entries/dates", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_failures_do_not_reveal_which_part_was_wrong(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    post_json(
        app,
        "/api/v1/auth/register",
        creds("alice@example.com", "a-strong-password"),
    )
    .await;

    // Wrong password for a real account.
    let app = common::build_test_app(pool.clone());
    let wrong_password = post_json(
        app,
        "/api/v1/auth/login",
        creds("alice@example.com", "wrong-password"),
    )
    .await;
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);
    let wrong_password = body_json(wrong_password).await;

    // An account that does not exist at all.
    let app = common::build_test_app(pool);
    let unknown_email = post_json(
        app,
        "/api/v1/auth/login",
        creds("nobody@example.com", "wrong-password"),
    )
    .await;
    assert_eq!(unknown_email.status(), StatusCode::UNAUTHORIZED);
    let unknown_email = body_json(unknown_email).await;

    // Both failures must be indistinguishable.
    assert_eq!(wrong_password["error"], unknown_email["error"]);
}
