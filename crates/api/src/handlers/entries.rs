//! Handlers for the `/entries` resource: the diary itself.
//!
//! All endpoints require authentication via [`AuthUser`]. Every read is
//! scoped to the caller's own entries, and every mutation checks ownership
//! before touching the row.

use axum::extract::State;
use axum::Json;
use chrono::{DateTime, NaiveDate, Utc};
use foodlog_core::error::CoreError;
use foodlog_core::types::DbId;
use serde::{Deserialize, Deserializer, Serialize};

use foodlog_db::models::{Entry, NewEntry};
use foodlog_db::repositories::{EntryRepo, PortionRepo, ProductRepo};
use foodlog_db::DbPool;

use crate::error::{ApiError, ApiResult};
use crate::extract::ApiJson;
use crate::handlers::products::ProductWithPortions;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Body for `POST /entries`.
#[derive(Debug, Deserialize)]
pub struct CreateEntryRequest {
    pub entry: Option<NewEntry>,
}

/// Body for `POST /entries/view`.
#[derive(Debug, Deserialize)]
pub struct ViewEntriesRequest {
    /// Restrict the listing to a single day. Accepts `YYYY-MM-DD` or an
    /// RFC 3339 timestamp, which is converted to UTC and truncated.
    #[serde(default, deserialize_with = "deserialize_diary_date")]
    pub date: Option<NaiveDate>,
}

/// Body for `POST /entries/delete`.
#[derive(Debug, Deserialize)]
pub struct DeleteEntryRequest {
    pub id: DbId,
}

/// Body for `POST /entries/update`.
#[derive(Debug, Deserialize)]
pub struct UpdateEntryRequest {
    pub id: DbId,
    pub entry: Option<NewEntry>,
}

#[derive(Debug, Serialize)]
pub struct EntryResponse {
    pub entry: Entry,
}

/// An entry joined with its product and the product's portions, the shape
/// the diary screen renders directly.
#[derive(Debug, Serialize)]
pub struct PopulatedEntry {
    #[serde(flatten)]
    pub entry: Entry,
    pub product: ProductWithPortions,
}

#[derive(Debug, Serialize)]
pub struct EntriesResponse {
    pub entries: Vec<PopulatedEntry>,
}

#[derive(Debug, Serialize)]
pub struct DatesResponse {
    pub dates: Vec<NaiveDate>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/entries
///
/// Log a consumption. Ownership comes from the token, never from the body,
/// and the created row (with its assigned id and date) is returned.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreateEntryRequest>,
) -> ApiResult<Json<EntryResponse>> {
    let new_entry = input
        .entry
        .ok_or_else(|| ApiError::BadRequest("no entry provided".into()))?;

    let entry = EntryRepo::create(&state.pool, auth.account_id, &new_entry)
        .await
        .map_err(|e| ApiError::store("while creating entry", e))?;

    tracing::info!(entry_id = entry.id, account_id = auth.account_id, "entry created");

    Ok(Json(EntryResponse { entry }))
}

/// POST /api/v1/entries/view
///
/// List the caller's entries, optionally restricted to one day, each
/// populated with its product and the product's portions. A dangling
/// product reference fails the whole request rather than returning a
/// partially populated list.
pub async fn view(
    auth: AuthUser,
    State(state): State<AppState>,
    ApiJson(input): ApiJson<ViewEntriesRequest>,
) -> ApiResult<Json<EntriesResponse>> {
    let entries = EntryRepo::list_for_user(&state.pool, auth.account_id, input.date)
        .await
        .map_err(|e| ApiError::store("while listing entries", e))?;

    let mut populated = Vec::with_capacity(entries.len());
    for entry in entries {
        let product = ProductRepo::find_by_id(&state.pool, entry.product_id)
            .await
            .map_err(|e| ApiError::store("while fetching entry product", e))?
            .ok_or_else(|| {
                ApiError::BadRequest(format!(
                    "while fetching entry product: product {} does not exist",
                    entry.product_id
                ))
            })?;

        let portions = PortionRepo::list_by_product(&state.pool, entry.product_id)
            .await
            .map_err(|e| ApiError::store("while fetching product portions", e))?;

        populated.push(PopulatedEntry {
            entry,
            product: ProductWithPortions { product, portions },
        });
    }

    Ok(Json(EntriesResponse { entries: populated }))
}

/// POST /api/v1/entries/update
///
/// Replace the product and quantity of one of the caller's entries. The
/// owner and the date are not replaceable.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    ApiJson(input): ApiJson<UpdateEntryRequest>,
) -> ApiResult<Json<serde_json::Value>> {
    let new_entry = input
        .entry
        .ok_or_else(|| ApiError::BadRequest("no entry provided".into()))?;

    fetch_owned_entry(&state.pool, input.id, auth.account_id).await?;

    let updated = EntryRepo::update_owned(&state.pool, input.id, auth.account_id, &new_entry)
        .await
        .map_err(|e| ApiError::store("while updating entry", e))?;
    if !updated {
        // The row vanished between the ownership check and the update.
        return Err(entry_not_found(input.id));
    }

    tracing::info!(entry_id = input.id, account_id = auth.account_id, "entry updated");

    Ok(Json(serde_json::json!({})))
}

/// POST /api/v1/entries/delete
///
/// Delete one of the caller's entries.
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    ApiJson(input): ApiJson<DeleteEntryRequest>,
) -> ApiResult<Json<serde_json::Value>> {
    fetch_owned_entry(&state.pool, input.id, auth.account_id).await?;

    let deleted = EntryRepo::delete_owned(&state.pool, input.id, auth.account_id)
        .await
        .map_err(|e| ApiError::store("while deleting entry", e))?;
    if !deleted {
        // The row vanished between the ownership check and the delete.
        return Err(entry_not_found(input.id));
    }

    tracing::info!(entry_id = input.id, account_id = auth.account_id, "entry deleted");

    Ok(Json(serde_json::json!({})))
}

/// GET /api/v1/entries/dates
///
/// The distinct days on which the caller has logged anything, ascending.
/// Drives the diary's calendar picker.
pub async fn dates(
    auth: AuthUser,
    State(state): State<AppState>,
) -> ApiResult<Json<DatesResponse>> {
    let dates = EntryRepo::logged_dates(&state.pool, auth.account_id)
        .await
        .map_err(|e| ApiError::store("while listing logged dates", e))?;

    Ok(Json(DatesResponse { dates }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Fetch an entry and verify the caller owns it.
///
/// A missing entry is a 404; an entry owned by someone else is a 401. The
/// mutation that follows still carries its own ownership predicate, so this
/// read shapes the error response but never authorizes the write by itself.
async fn fetch_owned_entry(pool: &DbPool, id: DbId, account_id: DbId) -> ApiResult<Entry> {
    let entry = EntryRepo::find_by_id(pool, id)
        .await
        .map_err(|e| ApiError::store("while fetching entry", e))?
        .ok_or_else(|| entry_not_found(id))?;

    if entry.user_id != account_id {
        return Err(ApiError::Domain(CoreError::PermissionDenied(
            "entry belongs to another account".into(),
        )));
    }

    Ok(entry)
}

fn entry_not_found(id: DbId) -> ApiError {
    ApiError::Domain(CoreError::NotFound { entity: "Entry", id })
}

fn deserialize_diary_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(raw) => parse_diary_date(&raw)
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Parse a day from either a bare date or an RFC 3339 timestamp.
///
/// Browser clients send `Date.toISOString()` output; the timestamp is taken
/// in UTC and truncated to its date.
fn parse_diary_date(raw: &str) -> Result<NaiveDate, String> {
    if let Ok(day) = raw.parse::<NaiveDate>() {
        return Ok(day);
    }
    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Ok(instant.with_timezone(&Utc).date_naive());
    }
    Err(format!(
        "invalid date '{raw}': expected YYYY-MM-DD or an RFC 3339 timestamp"
    ))
}
