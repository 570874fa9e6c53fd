//! Handlers for account registration and login.

use axum::extract::State;
use axum::Json;
use foodlog_core::error::CoreError;
use foodlog_core::types::DbId;
use serde::{Deserialize, Serialize};

use foodlog_db::repositories::AccountRepo;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::error::{ApiError, ApiResult};
use crate::extract::ApiJson;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Body for both `POST /auth/register` and `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Public view of an account, safe to return to the client.
#[derive(Debug, Serialize)]
pub struct AccountInfo {
    pub id: DbId,
    pub email: String,
}

/// Successful registration or login: an access token plus the account.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub account: AccountInfo,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/register
///
/// Create an account and return a token for it, so a fresh registration is
/// already logged in.
pub async fn register(
    State(state): State<AppState>,
    ApiJson(creds): ApiJson<Credentials>,
) -> ApiResult<Json<AuthResponse>> {
    let email = creds.email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(ApiError::Domain(CoreError::Validation(
            "a valid email address is required".into(),
        )));
    }
    validate_password_strength(&creds.password)
        .map_err(|msg| ApiError::Domain(CoreError::Validation(msg)))?;

    let existing = AccountRepo::find_by_email(&state.pool, email)
        .await
        .map_err(|e| ApiError::store("while checking for an existing account", e))?;
    if existing.is_some() {
        return Err(ApiError::Domain(CoreError::Validation(
            "an account with this email already exists".into(),
        )));
    }

    let password_hash = hash_password(&creds.password)
        .map_err(|e| ApiError::Domain(CoreError::Internal(format!("password hashing: {e}"))))?;

    let account = AccountRepo::create(&state.pool, email, &password_hash)
        .await
        .map_err(|e| ApiError::store("while creating account", e))?;

    let token = generate_access_token(account.id, &state.config.jwt)
        .map_err(|e| ApiError::Domain(CoreError::Internal(format!("token generation: {e}"))))?;

    tracing::info!(account_id = account.id, "account registered");

    Ok(Json(AuthResponse {
        token,
        account: AccountInfo {
            id: account.id,
            email: account.email,
        },
    }))
}

/// POST /api/v1/auth/login
///
/// Exchange credentials for an access token. An unknown email and a wrong
/// password get the same answer, so the response does not reveal which
/// accounts exist.
pub async fn login(
    State(state): State<AppState>,
    ApiJson(creds): ApiJson<Credentials>,
) -> ApiResult<Json<AuthResponse>> {
    let account = AccountRepo::find_by_email(&state.pool, creds.email.trim())
        .await
        .map_err(|e| ApiError::store("while looking up account", e))?
        .ok_or_else(invalid_credentials)?;

    let verified = verify_password(&creds.password, &account.password_hash)
        .map_err(|e| ApiError::Domain(CoreError::Internal(format!("password verification: {e}"))))?;
    if !verified {
        return Err(invalid_credentials());
    }

    let token = generate_access_token(account.id, &state.config.jwt)
        .map_err(|e| ApiError::Domain(CoreError::Internal(format!("token generation: {e}"))))?;

    tracing::info!(account_id = account.id, "account logged in");

    Ok(Json(AuthResponse {
        token,
        account: AccountInfo {
            id: account.id,
            email: account.email,
        },
    }))
}

fn invalid_credentials() -> ApiError {
    ApiError::Domain(CoreError::Unauthenticated(
        "invalid email or password".into(),
    ))
}
