//! Repository for the `portions` table.

use foodlog_core::types::DbId;
use sqlx::PgPool;

use crate::models::portion::{NewPortion, Portion};
use crate::DbError;

/// Column list for `portions` queries.
const COLUMNS: &str = "id, product_id, unit, energy";

/// Provides lookup and creation for product portions.
pub struct PortionRepo;

impl PortionRepo {
    /// Add a portion to a product, returning the created row.
    pub async fn create(
        pool: &PgPool,
        product_id: DbId,
        input: &NewPortion,
    ) -> Result<Portion, DbError> {
        let query = format!(
            "INSERT INTO portions (product_id, unit, energy) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        let portion = sqlx::query_as::<_, Portion>(&query)
            .bind(product_id)
            .bind(&input.unit)
            .bind(input.energy)
            .fetch_one(pool)
            .await?;
        Ok(portion)
    }

    /// List a product's portions, possibly empty.
    pub async fn list_by_product(
        pool: &PgPool,
        product_id: DbId,
    ) -> Result<Vec<Portion>, DbError> {
        let query = format!(
            "SELECT {COLUMNS} FROM portions WHERE product_id = $1 ORDER BY id"
        );
        let portions = sqlx::query_as::<_, Portion>(&query)
            .bind(product_id)
            .fetch_all(pool)
            .await?;
        Ok(portions)
    }
}
