//! Warehouse management service

use serde::Deserialize;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::models::{Location, Warehouse};
use shared::validation::validate_name;

/// Warehouse service
#[derive(Clone)]
pub struct WarehouseService {
    db: PgPool,
}

/// Input for creating a warehouse
#[derive(Debug, Deserialize)]
pub struct CreateWarehouseInput {
    pub name: String,
    pub address: String,
}

/// Input for updating a warehouse
#[derive(Debug, Deserialize)]
pub struct UpdateWarehouseInput {
    pub name: String,
    pub address: String,
}

impl WarehouseService {
    /// Create a new WarehouseService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// List all warehouses
    pub async fn list_warehouses(&self) -> AppResult<Vec<Warehouse>> {
        let warehouses = sqlx::query_as::<_, WarehouseRow>(
            "SELECT id, name, address, created_at FROM warehouses ORDER BY name",
        )
        .fetch_all(&self.db)
        .await?;

        Ok(warehouses.into_iter().map(Into::into).collect())
    }

    /// Create a warehouse
    pub async fn create_warehouse(&self, input: CreateWarehouseInput) -> AppResult<Warehouse> {
        validate_name(&input.name).map_err(|msg| AppError::Validation {
            field: "name".to_string(),
            message: msg.to_string(),
        })?;

        let warehouse = sqlx::query_as::<_, WarehouseRow>(
            r#"
            INSERT INTO warehouses (name, address)
            VALUES ($1, $2)
            RETURNING id, name, address, created_at
            "#,
        )
        .bind(&input.name)
        .bind(&input.address)
        .fetch_one(&self.db)
        .await?;

        Ok(warehouse.into())
    }

    /// Update a warehouse
    pub async fn update_warehouse(
        &self,
        warehouse_id: Uuid,
        input: UpdateWarehouseInput,
    ) -> AppResult<Warehouse> {
        validate_name(&input.name).map_err(|msg| AppError::Validation {
            field: "name".to_string(),
            message: msg.to_string(),
        })?;

        let warehouse = sqlx::query_as::<_, WarehouseRow>(
            r#"
            UPDATE warehouses
            SET name = $1, address = $2
            WHERE id = $3
            RETURNING id, name, address, created_at
            "#,
        )
        .bind(&input.name)
        .bind(&input.address)
        .bind(warehouse_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Warehouse".to_string()))?;

        Ok(warehouse.into())
    }

    /// Delete a warehouse
    pub async fn delete_warehouse(&self, warehouse_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM warehouses WHERE id = $1")
            .bind(warehouse_id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Warehouse".to_string()));
        }
        Ok(())
    }

    /// List the bin locations of one warehouse; 404 when the warehouse
    /// itself does not exist
    pub async fn list_locations(&self, warehouse_id: Uuid) -> AppResult<Vec<Location>> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM warehouses WHERE id = $1)")
                .bind(warehouse_id)
                .fetch_one(&self.db)
                .await?;

        if !exists {
            return Err(AppError::NotFound("Warehouse".to_string()));
        }

        let locations = sqlx::query_as::<_, LocationRow>(
            "SELECT id, warehouse_id, code FROM locations WHERE warehouse_id = $1 ORDER BY code",
        )
        .bind(warehouse_id)
        .fetch_all(&self.db)
        .await?;

        Ok(locations.into_iter().map(Into::into).collect())
    }
}

#[derive(Debug, sqlx::FromRow)]
struct LocationRow {
    id: Uuid,
    warehouse_id: Uuid,
    code: String,
}

impl From<LocationRow> for Location {
    fn from(row: LocationRow) -> Self {
        Location {
            id: row.id,
            warehouse_id: row.warehouse_id,
            code: row.code,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct WarehouseRow {
    id: Uuid,
    name: String,
    address: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<WarehouseRow> for Warehouse {
    fn from(row: WarehouseRow) -> Self {
        Warehouse {
            id: row.id,
            name: row.name,
            address: row.address,
            created_at: row.created_at,
        }
    }
}
