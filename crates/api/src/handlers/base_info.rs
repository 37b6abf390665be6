//! Handler for the public aggregation snapshot.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use gigdesk_core::roles::ROLE_BUSINESS;
use gigdesk_db::repositories::{OfferRepo, ProfileRepo, ReviewRepo};
use serde::Serialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Platform-wide counters, computed on demand.
#[derive(Debug, Serialize)]
pub struct BaseInfo {
    pub review_count: i64,
    /// Mean rating rounded to one decimal; 0.0 when no reviews exist.
    pub average_rating: f64,
    pub business_profile_count: i64,
    pub offer_count: i64,
}

/// GET /base-info
pub async fn base_info(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let review_count = ReviewRepo::count(&state.pool).await?;
    let average_rating = ReviewRepo::average_rating(&state.pool).await?;
    let business_profile_count = ProfileRepo::count_by_type(&state.pool, ROLE_BUSINESS).await?;
    let offer_count = OfferRepo::count(&state.pool).await?;

    Ok(Json(DataResponse {
        data: BaseInfo {
            review_count,
            average_rating,
            business_profile_count,
            offer_count,
        },
    }))
}
