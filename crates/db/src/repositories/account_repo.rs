//! Repository for the `accounts` table.

use foodlog_core::types::DbId;
use sqlx::PgPool;

use crate::models::account::Account;
use crate::DbError;

/// Column list for `accounts` queries.
const COLUMNS: &str = "id, email, password_hash, created_at";

/// Provides lookup and creation for accounts.
pub struct AccountRepo;

impl AccountRepo {
    /// Insert a new account, returning the created row.
    ///
    /// The email's uniqueness is enforced by the schema; a duplicate surfaces
    /// as a constraint violation from the store.
    pub async fn create(
        pool: &PgPool,
        email: &str,
        password_hash: &str,
    ) -> Result<Account, DbError> {
        let query = format!(
            "INSERT INTO accounts (email, password_hash) \
             VALUES ($1, $2) \
             RETURNING {COLUMNS}"
        );
        let account = sqlx::query_as::<_, Account>(&query)
            .bind(email)
            .bind(password_hash)
            .fetch_one(pool)
            .await?;
        Ok(account)
    }

    /// Find an account by internal id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Account>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM accounts WHERE id = $1");
        let account = sqlx::query_as::<_, Account>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(account)
    }

    /// Find an account by email (case-sensitive).
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Account>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM accounts WHERE email = $1");
        let account = sqlx::query_as::<_, Account>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await?;
        Ok(account)
    }
}
