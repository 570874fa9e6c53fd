//! Tests for `ApiError` -> HTTP response mapping.
//!
//! These tests verify that each `ApiError` variant produces the correct HTTP
//! status code and message shape. They do NOT need an HTTP server or a
//! database -- they call `IntoResponse` directly on `ApiError` values.

use axum::response::IntoResponse;
use http_body_util::BodyExt;

use foodlog_api::error::ApiError;
use foodlog_core::error::CoreError;
use foodlog_db::DbError;

/// Helper: convert an `ApiError` into its status code and parsed JSON body.
async fn error_to_response(err: ApiError) -> (axum::http::StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: CoreError::NotFound maps to 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404() {
    let err = ApiError::Domain(CoreError::NotFound {
        entity: "Entry",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Entry with id 42 not found");
}

// ---------------------------------------------------------------------------
// Test: the envelope carries exactly one key
// ---------------------------------------------------------------------------

#[tokio::test]
async fn error_envelope_has_only_the_error_key() {
    let err = ApiError::BadRequest("no entry provided".into());

    let (_, json) = error_to_response(err).await;

    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 1);
    assert!(object.contains_key("error"));
}

// ---------------------------------------------------------------------------
// Test: ApiError::BadRequest maps to 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bad_request_error_returns_400() {
    let err = ApiError::BadRequest("while decoding request body: unexpected end".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert_eq!(
        json["error"],
        "while decoding request body: unexpected end"
    );
}

// ---------------------------------------------------------------------------
// Test: CoreError::Validation maps to 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_400() {
    let err = ApiError::Domain(CoreError::Validation("a valid email address is required".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("a valid email address is required"));
}

// ---------------------------------------------------------------------------
// Test: missing credentials map to 401
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unauthenticated_error_returns_401() {
    let err = ApiError::Domain(CoreError::Unauthenticated(
        "Missing Authorization header".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::UNAUTHORIZED);
    assert!(json["error"]
        .as_str()
        .unwrap()
        .contains("Missing Authorization header"));
}

// ---------------------------------------------------------------------------
// Test: owning someone else's resource maps to 401
// ---------------------------------------------------------------------------

#[tokio::test]
async fn permission_denied_error_returns_401() {
    let err = ApiError::Domain(CoreError::PermissionDenied(
        "entry belongs to another account".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::UNAUTHORIZED);
    assert_eq!(
        json["error"],
        "Permission denied: entry belongs to another account"
    );
}

// ---------------------------------------------------------------------------
// Test: CoreError::Internal maps to 500 and sanitizes the message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = ApiError::Domain(CoreError::Internal(
        "secret database credentials leaked".into(),
    ));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);

    // The response body must NOT contain the original error details.
    let body_text = json.to_string();
    assert!(
        !body_text.contains("secret"),
        "Internal error response must not leak sensitive details"
    );
    assert_eq!(json["error"], "An internal error occurred");
}

// ---------------------------------------------------------------------------
// Test: an integrity violation maps to 500 and sanitizes the message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn integrity_violation_returns_500_and_sanitizes_message() {
    let err = ApiError::store(
        "while fetching entry",
        DbError::Integrity {
            entity: "Entry",
            id: 7,
        },
    );

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, axum::http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "An internal error occurred");
}
