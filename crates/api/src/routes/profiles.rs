//! Route definitions for user profiles.
//!
//! Mounted at `/profiles` by `api_routes()`. The static `business` /
//! `customer` segments take precedence over the `{user_id}` capture.

use axum::routing::get;
use axum::Router;

use crate::handlers::profiles;
use crate::state::AppState;

/// ```text
/// GET    /business     -> list_business_profiles
/// GET    /customer     -> list_customer_profiles
/// GET    /{user_id}    -> get_profile
/// PATCH  /{user_id}    -> update_profile
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/business", get(profiles::list_business_profiles))
        .route("/customer", get(profiles::list_customer_profiles))
        .route(
            "/{user_id}",
            get(profiles::get_profile).patch(profiles::update_profile),
        )
}
