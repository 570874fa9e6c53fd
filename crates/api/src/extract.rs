//! Request extractors with JSON error responses.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;

use crate::error::ApiError;

/// JSON body extractor whose rejection is an [`ApiError`].
///
/// The stock `Json` extractor rejects malformed bodies with a plain-text
/// response; wrapping it keeps decode failures inside the same
/// `{"error": ...}` envelope as every other failure.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(ApiJson(value)),
            Err(rejection) => Err(ApiError::BadRequest(format!(
                "while decoding request body: {rejection}"
            ))),
        }
    }
}
