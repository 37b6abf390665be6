//! Pagination defaults and clamp helpers.
//!
//! This module lives in `core` (zero internal deps) so repositories can
//! clamp user-supplied limits without reaching into the API layer.

/// Default number of list results per page.
pub const DEFAULT_LIST_LIMIT: i64 = 50;

/// Maximum number of list results per page.
pub const MAX_LIST_LIMIT: i64 = 200;

/// Clamp a user-supplied limit into `[1, max]`, falling back to `default`.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    match limit {
        Some(l) if l < 1 => default,
        Some(l) if l > max => max,
        Some(l) => l,
        None => default,
    }
}

/// Clamp a user-supplied offset to be non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
