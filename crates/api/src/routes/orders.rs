//! Route definitions for the order ledger.
//!
//! Mounted at `/orders` by `api_routes()`.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::orders;
use crate::state::AppState;

/// ```text
/// GET    /                                   -> list_orders
/// POST   /                                   -> create_order
/// PATCH  /{id}                               -> update_order_status
/// DELETE /{id}                               -> delete_order
/// GET    /{business_user_id}/count           -> order_count
/// GET    /{business_user_id}/completed-count -> completed_order_count
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(orders::list_orders).post(orders::create_order))
        .route(
            "/{id}",
            patch(orders::update_order_status).delete(orders::delete_order),
        )
        .route("/{business_user_id}/count", get(orders::order_count))
        .route(
            "/{business_user_id}/completed-count",
            get(orders::completed_order_count),
        )
}
