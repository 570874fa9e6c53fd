//! Route definitions for the `/products` resource.
//!
//! All endpoints require authentication.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::products;
use crate::state::AppState;

/// Routes mounted at `/products`.
///
/// ```text
/// GET  /               -> list
/// POST /               -> create
/// GET  /{id}           -> get_by_id (with portions)
/// POST /{id}/portions  -> add_portion
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(products::list).post(products::create))
        .route("/{id}", get(products::get_by_id))
        .route("/{id}/portions", post(products::add_portion))
}
