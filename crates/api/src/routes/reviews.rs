//! Route definitions for the review registry.
//!
//! Mounted at `/reviews` by `api_routes()`.

use axum::routing::get;
use axum::Router;

use crate::handlers::reviews;
use crate::state::AppState;

/// ```text
/// GET    /        -> list_reviews (?business_user_id, reviewer_id, ordering,
///                                  limit, offset)
/// POST   /        -> create_review
/// PUT    /{id}    -> update_review
/// PATCH  /{id}    -> update_review
/// DELETE /{id}    -> delete_review
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(reviews::list_reviews).post(reviews::create_review))
        .route(
            "/{id}",
            axum::routing::put(reviews::update_review)
                .patch(reviews::update_review)
                .delete(reviews::delete_review),
        )
}
