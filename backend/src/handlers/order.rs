//! HTTP handlers for order endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::order::{CreateOrderInput, CreateOrderResponse, OrderService};
use crate::AppState;
use shared::models::{Order, OrderWithItems};

/// Submit a stock-movement order (the fulfillment transaction)
pub async fn create_order(
    State(state): State<AppState>,
    Json(input): Json<CreateOrderInput>,
) -> AppResult<(StatusCode, Json<CreateOrderResponse>)> {
    let service = OrderService::new(state.db, state.config.inventory.lock_timeout_ms);
    let response = service.create_order(input).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// Get one order with its line items in submission order
pub async fn get_order(
    State(state): State<AppState>,
    Path(order_id): Path<Uuid>,
) -> AppResult<Json<OrderWithItems>> {
    let service = OrderService::new(state.db, state.config.inventory.lock_timeout_ms);
    let order = service.get_order(order_id).await?;
    Ok(Json(order))
}

/// List all orders, newest first
pub async fn list_orders(State(state): State<AppState>) -> AppResult<Json<Vec<Order>>> {
    let service = OrderService::new(state.db, state.config.inventory.lock_timeout_ms);
    let orders = service.list_orders().await?;
    Ok(Json(orders))
}
