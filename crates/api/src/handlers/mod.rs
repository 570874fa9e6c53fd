//! Request handlers, grouped by resource.

pub mod auth;
pub mod entries;
pub mod products;
