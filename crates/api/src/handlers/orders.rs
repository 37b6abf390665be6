//! Handlers for the order ledger.
//!
//! Creation snapshots the chosen tier; afterwards only the status moves,
//! and only at the seller's (or staff's) hand.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use gigdesk_core::error::CoreError;
use gigdesk_core::orders::{STATUS_COMPLETED, STATUS_IN_PROGRESS};
use gigdesk_core::types::DbId;
use gigdesk_core::{orders as order_rules, policy};
use gigdesk_db::models::order::{CreateOrder, UpdateOrderStatus};
use gigdesk_db::repositories::{OrderRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireCustomer;
use crate::response::DataResponse;
use crate::state::AppState;

/// Response body for the per-seller in-progress count.
#[derive(Debug, Serialize)]
pub struct OrderCountResponse {
    pub order_count: i64,
}

/// Response body for the per-seller completed count.
#[derive(Debug, Serialize)]
pub struct CompletedOrderCountResponse {
    pub completed_order_count: i64,
}

/// GET /orders
///
/// List the caller's orders (as buyer or seller).
pub async fn list_orders(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let orders = OrderRepo::list_for_participant(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: orders }))
}

/// POST /orders
///
/// Create an order from a tier id. The tier's fields are frozen into the
/// new row; the offer's owner becomes the seller.
pub async fn create_order(
    RequireCustomer(auth): RequireCustomer,
    State(state): State<AppState>,
    Json(input): Json<CreateOrder>,
) -> AppResult<impl IntoResponse> {
    let order = OrderRepo::create_from_detail(&state.pool, auth.user_id, input.offer_detail_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "OfferDetail",
                id: input.offer_detail_id,
            })
        })?;

    tracing::info!(
        user_id = auth.user_id,
        order_id = order.id,
        offer_detail_id = input.offer_detail_id,
        "Order created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: order })))
}

/// PATCH /orders/{id}
///
/// Transition an order's status. Seller-scoped: a business caller who is
/// not this order's seller is rejected. Only `status` is read from the
/// body; anything else is ignored.
pub async fn update_order_status(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateOrderStatus>,
) -> AppResult<impl IntoResponse> {
    let order = OrderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Order", id }))?;

    if !policy::can_manage_order(auth.user_id, &auth.role, auth.staff, order.business_user_id) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the order's seller can update its status".into(),
        )));
    }

    order_rules::validate_status(&input.status).map_err(AppError::BadRequest)?;

    let order = OrderRepo::update_status(&state.pool, id, &input.status)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Order", id }))?;

    tracing::info!(
        user_id = auth.user_id,
        order_id = id,
        status = %order.status,
        "Order status updated"
    );

    Ok(Json(DataResponse { data: order }))
}

/// DELETE /orders/{id}
///
/// Seller-scoped, like the status transition.
pub async fn delete_order(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let order = OrderRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "Order", id }))?;

    if !policy::can_manage_order(auth.user_id, &auth.role, auth.staff, order.business_user_id) {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the order's seller can delete it".into(),
        )));
    }

    let deleted = OrderRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound { entity: "Order", id }));
    }

    tracing::info!(user_id = auth.user_id, order_id = id, "Order deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// GET /orders/{business_user_id}/count
///
/// Count of a seller's in-progress orders.
pub async fn order_count(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(business_user_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_user_exists(&state, business_user_id).await?;
    let count =
        OrderRepo::count_for_business(&state.pool, business_user_id, STATUS_IN_PROGRESS).await?;
    Ok(Json(DataResponse {
        data: OrderCountResponse { order_count: count },
    }))
}

/// GET /orders/{business_user_id}/completed-count
///
/// Count of a seller's completed orders.
pub async fn completed_order_count(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(business_user_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    ensure_user_exists(&state, business_user_id).await?;
    let count =
        OrderRepo::count_for_business(&state.pool, business_user_id, STATUS_COMPLETED).await?;
    Ok(Json(DataResponse {
        data: CompletedOrderCountResponse {
            completed_order_count: count,
        },
    }))
}

/// 404 when the referenced business user does not exist.
async fn ensure_user_exists(state: &AppState, id: DbId) -> AppResult<()> {
    UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    Ok(())
}
