//! Offer and offer-detail (tier) models and DTOs.

use gigdesk_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `offers` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Offer {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub image: Option<String>,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `offer_details` table: one pricing tier of an offer.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OfferDetail {
    pub id: DbId,
    pub offer_id: DbId,
    pub title: String,
    pub revisions: i32,
    pub delivery_time_in_days: i32,
    pub price: f64,
    pub features: Vec<String>,
    pub offer_type: String,
}

/// Offer row annotated with tier aggregates and the owner's display fields,
/// as produced by the list/detail queries.
#[derive(Debug, Clone, FromRow)]
pub struct OfferWithStats {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub image: Option<String>,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// Minimum tier price, 0 when the offer has no tiers.
    pub min_price: f64,
    /// Minimum tier delivery days, 0 when the offer has no tiers.
    pub min_delivery_time: i32,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

/// One tier payload inside an offer creation request.
///
/// `offer_type` stays optional so a missing label is reported by domain
/// validation (400) instead of a body-deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOfferDetail {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub revisions: i32,
    #[serde(default)]
    pub delivery_time_in_days: i32,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub features: Vec<String>,
    pub offer_type: Option<String>,
}

/// DTO for creating a new offer with its three tiers.
#[derive(Debug, Deserialize)]
pub struct CreateOffer {
    pub title: String,
    pub image: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub details: Vec<CreateOfferDetail>,
}

/// One tier payload inside an offer update: merged into the existing tier
/// with the same label, field by field.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateOfferDetail {
    pub offer_type: Option<String>,
    pub title: Option<String>,
    pub revisions: Option<i32>,
    pub delivery_time_in_days: Option<i32>,
    pub price: Option<f64>,
    pub features: Option<Vec<String>>,
}

/// DTO for updating an offer. All fields are optional.
#[derive(Debug, Deserialize)]
pub struct UpdateOffer {
    pub title: Option<String>,
    pub image: Option<String>,
    pub description: Option<String>,
    pub details: Option<Vec<UpdateOfferDetail>>,
}

/// Query parameters accepted by the offer list endpoint.
#[derive(Debug, Deserialize)]
pub struct OfferListParams {
    /// Restrict to offers owned by this user.
    pub creator_id: Option<DbId>,
    /// Keep offers with at least one tier priced at or above this value.
    pub min_price: Option<f64>,
    /// Keep offers with at least one tier delivering in exactly this many
    /// days.
    pub delivery_time: Option<i32>,
    /// Keep offers with at least one tier delivering within this many days.
    pub max_delivery_time: Option<i32>,
    /// Keep offers with at least one tier taking at least this many days.
    pub min_delivery_time: Option<i32>,
    /// Free-text search over title and description.
    pub search: Option<String>,
    /// `min_price`, `-min_price`, `updated_at`, or `-updated_at`.
    pub ordering: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
