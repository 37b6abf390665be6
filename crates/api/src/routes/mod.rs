pub mod auth;
pub mod health;
pub mod offers;
pub mod orders;
pub mod profiles;
pub mod reviews;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/registration                       register (public)
/// /auth/login                              login (public)
///
/// /offers                                  list (public), create (business)
/// /offers/{id}                             get (auth), patch/put (owner), delete
/// /offer-details/{id}                      get (auth unless OPEN_TIER_READS)
///
/// /orders                                  list (participant), create (customer)
/// /orders/{id}                             patch status, delete (seller)
/// /orders/{business_user_id}/count         in-progress count (auth)
/// /orders/{business_user_id}/completed-count  completed count (auth)
///
/// /reviews                                 list (auth), create (customer)
/// /reviews/{id}                            put/patch, delete (author)
///
/// /profiles/business                       list business profiles (auth)
/// /profiles/customer                       list customer profiles (auth)
/// /profiles/{user_id}                      get (auth), patch (owner)
///
/// /base-info                               aggregation snapshot (public)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/offers", offers::offers_router())
        .nest("/offer-details", offers::offer_details_router())
        .nest("/orders", orders::router())
        .nest("/reviews", reviews::router())
        .nest("/profiles", profiles::router())
        .route("/base-info", get(handlers::base_info::base_info))
}
