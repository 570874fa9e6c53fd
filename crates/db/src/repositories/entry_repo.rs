//! Repository for the `entries` table.

use chrono::NaiveDate;
use foodlog_core::types::DbId;
use sqlx::PgPool;

use crate::models::entry::{Entry, NewEntry};
use crate::DbError;

/// Column list for `entries` queries.
const COLUMNS: &str = "id, user_id, product_id, quantity, date";

/// Provides CRUD operations for diary entries.
pub struct EntryRepo;

impl EntryRepo {
    /// Insert an entry owned by `user_id`, returning the created row.
    ///
    /// `date` is assigned by the store (`DEFAULT CURRENT_DATE`).
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &NewEntry,
    ) -> Result<Entry, DbError> {
        let query = format!(
            "INSERT INTO entries (user_id, product_id, quantity) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        let entry = sqlx::query_as::<_, Entry>(&query)
            .bind(user_id)
            .bind(input.product_id)
            .bind(input.quantity)
            .fetch_one(pool)
            .await?;
        Ok(entry)
    }

    /// Find an entry by id.
    ///
    /// Returns `None` when no row matches. A duplicate id is impossible under
    /// the primary-key constraint but is still checked and reported as
    /// [`DbError::Integrity`] instead of silently taking the first row.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Entry>, DbError> {
        let query = format!("SELECT {COLUMNS} FROM entries WHERE id = $1");
        let mut rows = sqlx::query_as::<_, Entry>(&query)
            .bind(id)
            .fetch_all(pool)
            .await?;
        if rows.len() > 1 {
            return Err(DbError::Integrity { entity: "Entry", id });
        }
        Ok(rows.pop())
    }

    /// List entries owned by `user_id`, oldest first.
    ///
    /// When `date` is given, only that day's entries are returned.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
        date: Option<NaiveDate>,
    ) -> Result<Vec<Entry>, DbError> {
        let entries = match date {
            Some(day) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM entries \
                     WHERE user_id = $1 AND date = $2 \
                     ORDER BY id"
                );
                sqlx::query_as::<_, Entry>(&query)
                    .bind(user_id)
                    .bind(day)
                    .fetch_all(pool)
                    .await?
            }
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM entries WHERE user_id = $1 ORDER BY id"
                );
                sqlx::query_as::<_, Entry>(&query)
                    .bind(user_id)
                    .fetch_all(pool)
                    .await?
            }
        };
        Ok(entries)
    }

    /// Replace the product and quantity of an entry, but only if it is owned
    /// by `user_id`. The ownership predicate makes check-and-act a single
    /// atomic statement.
    ///
    /// Returns `true` if a row was updated, `false` if no owned row matched.
    pub async fn update_owned(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        input: &NewEntry,
    ) -> Result<bool, DbError> {
        let result = sqlx::query(
            "UPDATE entries SET product_id = $3, quantity = $4 \
             WHERE id = $1 AND user_id = $2",
        )
        .bind(id)
        .bind(user_id)
        .bind(input.product_id)
        .bind(input.quantity)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete an entry, but only if it is owned by `user_id`.
    ///
    /// Returns `true` if a row was deleted, `false` if no owned row matched.
    pub async fn delete_owned(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, DbError> {
        let result = sqlx::query("DELETE FROM entries WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Distinct days on which `user_id` has logged entries, ascending.
    pub async fn logged_dates(pool: &PgPool, user_id: DbId) -> Result<Vec<NaiveDate>, DbError> {
        let dates = sqlx::query_scalar(
            "SELECT DISTINCT date FROM entries WHERE user_id = $1 ORDER BY date",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await?;
        Ok(dates)
    }
}
