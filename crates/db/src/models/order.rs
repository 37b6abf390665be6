//! Order entity model and DTOs.

use gigdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `orders` table.
///
/// All tier fields are a point-in-time copy taken at creation; only
/// `status` changes afterwards.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Order {
    pub id: DbId,
    pub customer_user_id: DbId,
    pub business_user_id: DbId,
    pub title: String,
    pub revisions: i32,
    pub delivery_time_in_days: i32,
    pub price: f64,
    pub features: Vec<String>,
    pub offer_type: String,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an order: the chosen tier is the only input, everything
/// else is derived from it.
#[derive(Debug, Deserialize)]
pub struct CreateOrder {
    pub offer_detail_id: DbId,
}

/// DTO for the status transition. Any other submitted field is ignored.
#[derive(Debug, Deserialize)]
pub struct UpdateOrderStatus {
    pub status: String,
}
