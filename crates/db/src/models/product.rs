//! Product entity model and DTOs.

use foodlog_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `products` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    /// Account that added the product.
    pub creator: DbId,
}

/// DTO for creating a product. `creator` is taken from the caller.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProduct {
    pub name: String,
}
