//! Order route handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Serialize;
use tracing::instrument;

use ironwood_core::{Order, OrderId, OrderStatus};

use crate::error::{AppError, Result};
use crate::middleware::RequireKey;
use crate::ops::{NewOrder, StatusUpdate};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct OrdersResponse {
    pub orders: Vec<Order>,
}

#[derive(Debug, Serialize)]
pub struct OrderResponse {
    pub order: Order,
}

/// List every order on the dealer's account.
///
/// # Errors
///
/// Returns an error if the backend is unreachable.
pub async fn index(
    _auth: RequireKey,
    State(state): State<AppState>,
) -> Result<Json<OrdersResponse>> {
    let orders = state.ops().orders().await?;
    Ok(Json(OrdersResponse { orders }))
}

/// Return one order with its full timeline.
///
/// # Errors
///
/// Returns an error if no order has that id.
pub async fn show(
    _auth: RequireKey,
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
) -> Result<Json<OrderResponse>> {
    let order = state.ops().order(&id).await?;
    Ok(Json(OrderResponse { order }))
}

/// Create a draft order.
///
/// # Errors
///
/// Returns an error if the order has no line items or a zero quantity.
#[instrument(skip(state, _auth, body))]
pub async fn create(
    _auth: RequireKey,
    State(state): State<AppState>,
    Json(body): Json<NewOrder>,
) -> Result<(StatusCode, Json<OrderResponse>)> {
    let order = state.ops().create_order(body).await?;
    Ok((StatusCode::CREATED, Json(OrderResponse { order })))
}

/// Advance an order to the next status.
///
/// # Errors
///
/// Returns an error if the status name is unknown or the move is not a
/// legal step in the order lifecycle.
#[instrument(skip(state, _auth))]
pub async fn update_status(
    _auth: RequireKey,
    State(state): State<AppState>,
    Path(id): Path<OrderId>,
    Json(body): Json<StatusUpdate>,
) -> Result<Json<OrderResponse>> {
    let status: OrderStatus = body.status.parse().map_err(AppError::BadRequest)?;
    let order = state
        .ops()
        .update_order_status(&id, status, body.note)
        .await?;
    Ok(Json(OrderResponse { order }))
}
