//! HTTP layer of the food diary backend.
//!
//! Exposes the axum application assembled by [`router::build_app_router`]
//! so integration tests can drive the exact production routing stack
//! without binding a socket.

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod routes;
pub mod state;
