pub mod auth;
pub mod entries;
pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                  register (public)
/// /auth/login                     login (public)
///
/// /entries                        create entry (POST)
/// /entries/view                   list populated entries (POST)
/// /entries/update                 update entry (POST)
/// /entries/delete                 delete entry (POST)
/// /entries/dates                  logged dates (GET)
///
/// /products                       list (GET), create (POST)
/// /products/{id}                  get with portions (GET)
/// /products/{id}/portions         add portion (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Registration and login (public).
        .nest("/auth", auth::router())
        // The diary itself.
        .nest("/entries", entries::router())
        // Shared product and portion lookups.
        .nest("/products", products::router())
}
