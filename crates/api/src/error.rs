//! API error type and its HTTP rendering.
//!
//! Every handler returns [`ApiResult`]; failures are converted here into a
//! status code plus a JSON body of the shape `{"error": "<message>"}`. This
//! is the single choke point where errors are logged and where internal
//! detail is stripped before it can reach a client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use foodlog_core::error::CoreError;
use foodlog_db::DbError;
use serde_json::json;

/// Message returned for any failure the client can do nothing about.
const INTERNAL_MESSAGE: &str = "An internal error occurred";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A domain-level failure (not found, validation, auth).
    #[error(transparent)]
    Domain(#[from] CoreError),

    /// A store failure, wrapped with the operation that was in progress.
    #[error("{context}: {source}")]
    Store {
        context: &'static str,
        #[source]
        source: DbError,
    },

    /// The request itself was unusable (bad JSON, missing fields).
    #[error("{0}")]
    BadRequest(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Wrap a store error with the operation it interrupted.
    pub fn store(context: &'static str, source: DbError) -> Self {
        Self::Store { context, source }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Domain(core) => match core {
                CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, self.to_string()),
                CoreError::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
                CoreError::Unauthenticated(_) => (StatusCode::UNAUTHORIZED, self.to_string()),
                CoreError::PermissionDenied(_) => (StatusCode::UNAUTHORIZED, self.to_string()),
                CoreError::Internal(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
                }
            },
            ApiError::Store { source, .. } => match source {
                // Constraint and query failures are reported to the caller,
                // prefixed with the interrupted operation.
                DbError::Sqlx(_) => (StatusCode::BAD_REQUEST, self.to_string()),
                DbError::Integrity { .. } => {
                    (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_MESSAGE.to_string())
                }
            },
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, self.to_string()),
        };

        if status.is_server_error() {
            tracing::error!(status = %status, error = %self, "request failed");
        } else {
            tracing::warn!(status = %status, error = %self, "request failed");
        }

        (status, Json(json!({ "error": message }))).into_response()
    }
}
