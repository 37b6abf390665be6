//! Review entity model and DTOs.

use gigdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `reviews` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Review {
    pub id: DbId,
    pub business_user_id: DbId,
    pub reviewer_id: DbId,
    pub rating: i32,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a review. The reviewer is always the caller.
#[derive(Debug, Deserialize)]
pub struct CreateReview {
    pub business_user: DbId,
    pub rating: i32,
    #[serde(default)]
    pub description: String,
}

/// DTO for editing a review. Only these two fields are editable; anything
/// else in the request body is silently dropped by deserialization.
#[derive(Debug, Deserialize)]
pub struct UpdateReview {
    pub rating: Option<i32>,
    pub description: Option<String>,
}

/// Query parameters accepted by the review list endpoint.
#[derive(Debug, Deserialize)]
pub struct ReviewListParams {
    pub business_user_id: Option<DbId>,
    pub reviewer_id: Option<DbId>,
    /// `rating`, `-rating`, `updated_at`, or `-updated_at`.
    pub ordering: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
