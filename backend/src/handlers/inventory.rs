//! HTTP handlers for inventory endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::inventory::InventoryService;
use crate::AppState;
use shared::models::{InventoryRecord, InventoryView};

/// List inventory joined with product, warehouse, and location metadata
pub async fn list_inventory(State(state): State<AppState>) -> AppResult<Json<Vec<InventoryView>>> {
    let service = InventoryService::new(state.db);
    let inventory = service.list_inventory().await?;
    Ok(Json(inventory))
}

/// Get the inventory record for one (product, warehouse) pair
pub async fn get_inventory_record(
    State(state): State<AppState>,
    Path((warehouse_id, product_id)): Path<(Uuid, Uuid)>,
) -> AppResult<Json<InventoryRecord>> {
    let service = InventoryService::new(state.db);
    let record = service.get_record(warehouse_id, product_id).await?;
    Ok(Json(record))
}
