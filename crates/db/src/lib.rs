//! Database layer: connection pool helpers, row models, and repositories.
//!
//! Every repository method takes a `&PgPool` and fully materializes its
//! result set before returning, so no connection or cursor outlives a call.

use foodlog_core::types::DbId;
use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Error type for repository operations.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    /// More than one row matched a primary-key lookup. Unreachable while the
    /// schema's constraints hold, but checked rather than assumed.
    #[error("data integrity violation: {entity} id {id} matched more than one row")]
    Integrity { entity: &'static str, id: DbId },
}

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database is reachable with a trivial round-trip query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply the embedded migrations from `crates/db/migrations/`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
