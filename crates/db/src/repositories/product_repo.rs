//! Repository for the `products` table.

use foodlog_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::{NewProduct, Product};
use crate::DbError;

/// Column list for `products` queries.
const COLUMNS: &str = "id, name, creator";

/// Provides lookup and creation for products.
pub struct ProductRepo;

impl ProductRepo {
    /// Insert a product added by `creator`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        creator: DbId,
        input: &NewProduct,
    ) -> Result<Product, DbError> {
        let query = format!(
            "INSERT INTO products (name, creator) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        let product = sqlx::query_as::<_, Product>(&query)
            .bind(&input.name)
            .bind(creator)
            .fetch_one(pool)
            .await?;
        Ok(product)
    }

    /// Find a product by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        let product = sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(product)
    }

    /// List all products by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Product>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY name, id");
        let products = sqlx::query_as::<_, Product>(&query).fetch_all(pool).await?;
        Ok(products)
    }
}
