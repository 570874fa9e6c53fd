//! Shared domain types and the error taxonomy used across the foodlog crates.

pub mod error;
pub mod types;
