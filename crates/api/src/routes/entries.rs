//! Route definitions for the `/entries` resource.
//!
//! All endpoints require authentication. Mutations take the target id in
//! the JSON body rather than the path, matching the diary client's calls.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::entries;
use crate::state::AppState;

/// Routes mounted at `/entries`.
///
/// ```text
/// POST /        -> create
/// POST /view    -> view (optionally filtered by day)
/// POST /update  -> update
/// POST /delete  -> delete
/// GET  /dates   -> dates
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(entries::create))
        .route("/view", post(entries::view))
        .route("/update", post(entries::update))
        .route("/delete", post(entries::delete))
        .route("/dates", get(entries::dates))
}
