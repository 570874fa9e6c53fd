use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// No authenticated identity on the request (missing/invalid credentials).
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    /// The caller is authenticated but does not own the target resource.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
