//! Route definitions for authentication.
//!
//! Mounted at `/auth` by `api_routes()`.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// ```text
/// POST /registration     -> register
/// POST /login            -> login
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/registration", post(auth::register))
        .route("/login", post(auth::login))
}
