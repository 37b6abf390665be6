//! Handler for reading a single offer tier.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use gigdesk_core::error::CoreError;
use gigdesk_core::types::DbId;
use gigdesk_db::repositories::OfferRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::MaybeAuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /offer-details/{id}
///
/// Returns one full tier body. Authentication is required unless the
/// deployment opted into open tier reads (`OPEN_TIER_READS`).
pub async fn get_offer_detail(
    MaybeAuthUser(user): MaybeAuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !state.config.open_tier_reads && user.is_none() {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Authentication required".into(),
        )));
    }

    let detail = OfferRepo::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "OfferDetail",
                id,
            })
        })?;

    Ok(Json(DataResponse { data: detail }))
}
