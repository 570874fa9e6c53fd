//! Portion entity model and DTOs.

use foodlog_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `portions` table: a named serving size of a product.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Portion {
    pub id: DbId,
    pub product_id: DbId,
    /// Serving-size label, e.g. `"g"`, `"cup"`, `"slice"`.
    pub unit: String,
    /// Energy in kcal per unit.
    pub energy: f64,
}

/// DTO for adding a portion to a product. `product_id` comes from the path.
#[derive(Debug, Clone, Deserialize)]
pub struct NewPortion {
    pub unit: String,
    pub energy: f64,
}
