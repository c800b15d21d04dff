//! HTTP handlers for warehouse endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::error::AppResult;
use crate::services::warehouse::{CreateWarehouseInput, UpdateWarehouseInput, WarehouseService};
use crate::AppState;
use shared::models::{Location, Warehouse};

/// List all warehouses
pub async fn list_warehouses(State(state): State<AppState>) -> AppResult<Json<Vec<Warehouse>>> {
    let service = WarehouseService::new(state.db);
    let warehouses = service.list_warehouses().await?;
    Ok(Json(warehouses))
}

/// Create a warehouse
pub async fn create_warehouse(
    State(state): State<AppState>,
    Json(input): Json<CreateWarehouseInput>,
) -> AppResult<(StatusCode, Json<Warehouse>)> {
    let service = WarehouseService::new(state.db);
    let warehouse = service.create_warehouse(input).await?;
    Ok((StatusCode::CREATED, Json(warehouse)))
}

/// Update a warehouse
pub async fn update_warehouse(
    State(state): State<AppState>,
    Path(warehouse_id): Path<Uuid>,
    Json(input): Json<UpdateWarehouseInput>,
) -> AppResult<Json<Warehouse>> {
    let service = WarehouseService::new(state.db);
    let warehouse = service.update_warehouse(warehouse_id, input).await?;
    Ok(Json(warehouse))
}

/// List the bin locations of one warehouse
pub async fn list_locations(
    State(state): State<AppState>,
    Path(warehouse_id): Path<Uuid>,
) -> AppResult<Json<Vec<Location>>> {
    let service = WarehouseService::new(state.db);
    let locations = service.list_locations(warehouse_id).await?;
    Ok(Json(locations))
}

/// Delete a warehouse
pub async fn delete_warehouse(
    State(state): State<AppState>,
    Path(warehouse_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let service = WarehouseService::new(state.db);
    service.delete_warehouse(warehouse_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
