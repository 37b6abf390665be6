//! Handlers for the review registry.
//!
//! One review per (reviewer, business) pair: the handler checks before
//! writing, and the storage unique constraint settles any race.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use gigdesk_core::error::CoreError;
use gigdesk_core::types::DbId;
use gigdesk_core::{policy, reviews as review_rules};
use gigdesk_db::models::review::{CreateReview, ReviewListParams, UpdateReview};
use gigdesk_db::repositories::{ReviewRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireCustomer;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /reviews?business_user_id=&reviewer_id=&ordering=&limit=&offset=
pub async fn list_reviews(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ReviewListParams>,
) -> AppResult<impl IntoResponse> {
    let reviews = ReviewRepo::list(&state.pool, &params).await?;
    Ok(Json(DataResponse { data: reviews }))
}

/// POST /reviews
///
/// Create a review of a business. Rejected when the caller has already
/// reviewed that business.
pub async fn create_review(
    RequireCustomer(auth): RequireCustomer,
    State(state): State<AppState>,
    Json(input): Json<CreateReview>,
) -> AppResult<impl IntoResponse> {
    review_rules::validate_rating(input.rating).map_err(AppError::BadRequest)?;
    review_rules::validate_review_description(&input.description).map_err(AppError::BadRequest)?;

    if UserRepo::find_by_id(&state.pool, input.business_user)
        .await?
        .is_none()
    {
        return Err(AppError::BadRequest("Unknown business user".to_string()));
    }

    if ReviewRepo::exists(&state.pool, auth.user_id, input.business_user).await? {
        return Err(AppError::BadRequest(
            "You have already reviewed this business".to_string(),
        ));
    }

    let review = ReviewRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        review_id = review.id,
        business_user_id = input.business_user,
        "Review created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: review })))
}

/// PATCH /reviews/{id} (also mounted for PUT)
///
/// Author-scoped edit. The DTO only knows `rating` and `description`, so
/// any other submitted field is dropped rather than rejected.
pub async fn update_review(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateReview>,
) -> AppResult<impl IntoResponse> {
    let review = ReviewRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Review", id }))?;

    if !policy::can_modify_review(auth.user_id, auth.staff, review.reviewer_id) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the review's author can edit it".into(),
        )));
    }

    if let Some(rating) = input.rating {
        review_rules::validate_rating(rating).map_err(AppError::BadRequest)?;
    }
    if let Some(ref description) = input.description {
        review_rules::validate_review_description(description).map_err(AppError::BadRequest)?;
    }

    let review = ReviewRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Review", id }))?;

    tracing::info!(user_id = auth.user_id, review_id = id, "Review updated");

    Ok(Json(DataResponse { data: review }))
}

/// DELETE /reviews/{id}
///
/// Author-scoped delete.
pub async fn delete_review(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let review = ReviewRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Review", id }))?;

    if !policy::can_modify_review(auth.user_id, auth.staff, review.reviewer_id) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the review's author can delete it".into(),
        )));
    }

    let deleted = ReviewRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Review", id }));
    }

    tracing::info!(user_id = auth.user_id, review_id = id, "Review deleted");

    Ok(StatusCode::NO_CONTENT)
}
