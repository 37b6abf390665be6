//! Handlers for the offer catalog.
//!
//! The list view is public and embeds a reduced owner snapshot per item;
//! the detail view requires authentication and omits it. Read responses
//! reference tiers by id + URL; write responses echo the full tier bodies.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use gigdesk_core::error::CoreError;
use gigdesk_core::types::{DbId, Timestamp};
use gigdesk_core::{offers as offer_rules, policy};
use gigdesk_db::models::offer::{
    CreateOffer, Offer, OfferDetail, OfferListParams, UpdateOffer,
};
use gigdesk_db::repositories::OfferRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireBusiness;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Response shapes
// ---------------------------------------------------------------------------

/// Tier reference used in read responses: id plus a resolvable URL.
#[derive(Debug, Serialize)]
pub struct TierRef {
    pub id: DbId,
    pub url: String,
}

/// Reduced owner snapshot embedded in list items.
#[derive(Debug, Serialize)]
pub struct OwnerDetails {
    pub first_name: String,
    pub last_name: String,
    pub username: String,
}

/// Offer shape for the public list view.
#[derive(Debug, Serialize)]
pub struct OfferListItem {
    pub id: DbId,
    pub user: DbId,
    pub title: String,
    pub image: Option<String>,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub details: Vec<TierRef>,
    pub min_price: f64,
    pub min_delivery_time: i32,
    pub user_details: OwnerDetails,
}

/// Offer shape for the authenticated detail view (no owner snapshot).
#[derive(Debug, Serialize)]
pub struct OfferReadResponse {
    pub id: DbId,
    pub user: DbId,
    pub title: String,
    pub image: Option<String>,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub details: Vec<TierRef>,
    pub min_price: f64,
    pub min_delivery_time: i32,
}

/// Offer shape echoed by create/update: full tier bodies.
#[derive(Debug, Serialize)]
pub struct OfferWriteResponse {
    pub id: DbId,
    pub user: DbId,
    pub title: String,
    pub image: Option<String>,
    pub description: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub details: Vec<OfferDetail>,
    pub min_price: f64,
    pub min_delivery_time: i32,
}

fn tier_ref(detail: &OfferDetail) -> TierRef {
    TierRef {
        id: detail.id,
        url: format!("/api/offer-details/{}", detail.id),
    }
}

fn write_response(offer: Offer, details: Vec<OfferDetail>) -> OfferWriteResponse {
    let min_price = details
        .iter()
        .map(|d| d.price)
        .fold(f64::INFINITY, f64::min);
    let min_delivery_time = details
        .iter()
        .map(|d| d.delivery_time_in_days)
        .min()
        .unwrap_or(0);

    OfferWriteResponse {
        id: offer.id,
        user: offer.user_id,
        title: offer.title,
        image: offer.image,
        description: offer.description,
        created_at: offer.created_at,
        updated_at: offer.updated_at,
        details,
        min_price: if min_price.is_finite() { min_price } else { 0.0 },
        min_delivery_time,
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /offers?creator_id=&min_price=&delivery_time=&max_delivery_time=&min_delivery_time=&search=&ordering=&limit=&offset=
///
/// Public listing with filters and tier aggregates.
pub async fn list_offers(
    State(state): State<AppState>,
    Query(params): Query<OfferListParams>,
) -> AppResult<impl IntoResponse> {
    let offers = OfferRepo::list(&state.pool, &params).await?;

    let ids: Vec<DbId> = offers.iter().map(|o| o.id).collect();
    let details = OfferRepo::details_for_offers(&state.pool, &ids).await?;
    let mut refs: HashMap<DbId, Vec<TierRef>> = HashMap::new();
    for detail in &details {
        refs.entry(detail.offer_id).or_default().push(tier_ref(detail));
    }

    let items: Vec<OfferListItem> = offers
        .into_iter()
        .map(|o| OfferListItem {
            id: o.id,
            user: o.user_id,
            title: o.title,
            image: o.image,
            description: o.description,
            created_at: o.created_at,
            updated_at: o.updated_at,
            details: refs.remove(&o.id).unwrap_or_default(),
            min_price: o.min_price,
            min_delivery_time: o.min_delivery_time,
            user_details: OwnerDetails {
                first_name: o.first_name,
                last_name: o.last_name,
                username: o.username,
            },
        })
        .collect();

    Ok(Json(DataResponse { data: items }))
}

/// GET /offers/{id}
///
/// Authenticated detail view. The owner snapshot is list-only.
pub async fn get_offer(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let offer = OfferRepo::find_with_stats(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Offer", id }))?;

    let details = OfferRepo::details_for_offer(&state.pool, id).await?;

    let response = OfferReadResponse {
        id: offer.id,
        user: offer.user_id,
        title: offer.title,
        image: offer.image,
        description: offer.description,
        created_at: offer.created_at,
        updated_at: offer.updated_at,
        details: details.iter().map(tier_ref).collect(),
        min_price: offer.min_price,
        min_delivery_time: offer.min_delivery_time,
    };

    Ok(Json(DataResponse { data: response }))
}

/// POST /offers
///
/// Create an offer with its three tiers. The tier set is validated before
/// any row is written; the insert itself is transactional.
pub async fn create_offer(
    RequireBusiness(auth): RequireBusiness,
    State(state): State<AppState>,
    Json(input): Json<CreateOffer>,
) -> AppResult<impl IntoResponse> {
    offer_rules::validate_title(&input.title).map_err(AppError::BadRequest)?;
    offer_rules::validate_description(&input.description).map_err(AppError::BadRequest)?;

    let labels: Vec<Option<&str>> = input.details.iter().map(|t| t.offer_type.as_deref()).collect();
    offer_rules::validate_tier_set(&labels).map_err(AppError::BadRequest)?;
    for tier in &input.details {
        offer_rules::validate_tier_fields(tier.price, tier.delivery_time_in_days)
            .map_err(AppError::BadRequest)?;
    }

    let (offer, details) = OfferRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(user_id = auth.user_id, offer_id = offer.id, "Offer created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: write_response(offer, details),
        }),
    ))
}

/// PATCH /offers/{id} (also mounted for PUT)
///
/// Partial update by the owning business. Tier payloads merge into the
/// existing tier with the same label; a label with no existing tier fails
/// before any write.
pub async fn update_offer(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateOffer>,
) -> AppResult<impl IntoResponse> {
    let offer = OfferRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Offer", id }))?;

    if !policy::can_modify_offer(auth.user_id, &auth.role, auth.staff, offer.user_id) {
        return Err(AppError::Core(CoreError::Forbidden(
            "You do not have permission to edit this offer".into(),
        )));
    }

    if let Some(ref title) = input.title {
        offer_rules::validate_title(title).map_err(AppError::BadRequest)?;
    }
    if let Some(ref description) = input.description {
        offer_rules::validate_description(description).map_err(AppError::BadRequest)?;
    }
    if let Some(ref tiers) = input.details {
        let existing = OfferRepo::details_for_offer(&state.pool, id).await?;
        let existing_labels: Vec<&str> = existing.iter().map(|d| d.offer_type.as_str()).collect();
        let labels: Vec<Option<&str>> = tiers.iter().map(|t| t.offer_type.as_deref()).collect();
        offer_rules::validate_tier_labels_known(&labels, &existing_labels)
            .map_err(AppError::BadRequest)?;

        for tier in tiers {
            offer_rules::validate_tier_fields(
                tier.price.unwrap_or(0.0),
                tier.delivery_time_in_days.unwrap_or(0),
            )
            .map_err(AppError::BadRequest)?;
        }
    }

    let (offer, details) = OfferRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Offer", id }))?;

    tracing::info!(user_id = auth.user_id, offer_id = id, "Offer updated");

    Ok(Json(DataResponse {
        data: write_response(offer, details),
    }))
}

/// DELETE /offers/{id}
///
/// Owner or staff; never a customer. Tiers cascade.
pub async fn delete_offer(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let offer = OfferRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Offer", id }))?;

    if !policy::can_delete_offer(auth.user_id, &auth.role, auth.staff, offer.user_id) {
        return Err(AppError::Core(CoreError::Forbidden(
            "You do not have permission to delete this offer".into(),
        )));
    }

    let deleted = OfferRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Offer", id }));
    }

    tracing::info!(user_id = auth.user_id, offer_id = id, "Offer deleted");

    Ok(StatusCode::NO_CONTENT)
}
