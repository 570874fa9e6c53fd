//! Entry entity model and DTOs.

use foodlog_core::types::{DbId, DiaryDate};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `entries` table: one logged consumption of a product.
///
/// `user_id` is the owning account and is immutable after creation; the
/// ownership gate in the handlers relies on it. `date` defaults to the
/// current date at the store layer and is not client-settable.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Entry {
    pub id: DbId,
    pub user_id: DbId,
    pub product_id: DbId,
    pub quantity: f64,
    pub date: DiaryDate,
}

/// Client-settable entry fields, used for both create and update.
///
/// There is deliberately no `user_id` here: any ownership value in the
/// request body is ignored and the authenticated identity is used instead.
#[derive(Debug, Clone, Deserialize)]
pub struct NewEntry {
    pub product_id: DbId,
    pub quantity: f64,
}
