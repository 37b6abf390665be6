//! Route definitions for the offer catalog.
//!
//! Mounted at `/offers` and `/offer-details` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{offer_details, offers};
use crate::state::AppState;

/// Offer routes.
///
/// ```text
/// GET    /        -> list_offers (?creator_id, min_price, delivery_time,
///                                 max_delivery_time, min_delivery_time,
///                                 search, ordering, limit, offset)
/// POST   /        -> create_offer
/// GET    /{id}    -> get_offer
/// PUT    /{id}    -> update_offer
/// PATCH  /{id}    -> update_offer
/// DELETE /{id}    -> delete_offer
/// ```
pub fn offers_router() -> Router<AppState> {
    Router::new()
        .route("/", get(offers::list_offers).post(offers::create_offer))
        .route(
            "/{id}",
            get(offers::get_offer)
                .put(offers::update_offer)
                .patch(offers::update_offer)
                .delete(offers::delete_offer),
        )
}

/// Tier routes.
///
/// ```text
/// GET    /{id}    -> get_offer_detail
/// ```
pub fn offer_details_router() -> Router<AppState> {
    Router::new().route("/{id}", get(offer_details::get_offer_detail))
}
