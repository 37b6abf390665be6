//! Domain-level error type shared across crates.

/// Errors produced by domain logic and the persistence layer.
///
/// The API crate maps each variant onto an HTTP status; nothing in this
/// enum carries internal detail that would be unsafe to surface.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A resource id did not resolve.
    #[error("{entity} with id {id} not found")]
    NotFound {
        entity: &'static str,
        id: crate::types::DbId,
    },

    /// Malformed, missing, or inconsistent input.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A uniqueness rule was violated.
    #[error("conflict: {0}")]
    Conflict(String),

    /// No valid caller identity.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Valid identity, insufficient role or ownership.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Unexpected fault. The message is logged, never surfaced.
    #[error("internal error: {0}")]
    Internal(String),
}
