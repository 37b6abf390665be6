//! Liveness endpoint, mounted at the root (not under `/api`).

use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// GET /health
async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
