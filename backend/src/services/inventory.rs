//! Inventory read service
//!
//! Inventory rows are written only by the order fulfillment transaction;
//! this service serves the joined view the dashboard displays.

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::models::{InventoryRecord, InventoryView};

/// Inventory service
#[derive(Clone)]
pub struct InventoryService {
    db: PgPool,
}

impl InventoryService {
    /// Create a new InventoryService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// List inventory joined with product, warehouse, and location metadata
    pub async fn list_inventory(&self) -> AppResult<Vec<InventoryView>> {
        let rows = sqlx::query_as::<_, InventoryViewRow>(
            r#"
            SELECT i.id, i.product_id, i.warehouse_id, i.quantity, i.updated_at,
                   p.sku AS product_sku,
                   p.name AS product_name,
                   p.price AS product_price,
                   w.name AS warehouse_name,
                   l.code AS location_code
            FROM inventory i
            JOIN products p ON i.product_id = p.id
            JOIN warehouses w ON i.warehouse_id = w.id
            LEFT JOIN locations l ON i.location_id = l.id
            ORDER BY w.name, p.sku
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Point lookup of the inventory record for one (product, warehouse)
    /// pair; 404 when no order has ever stocked the pair
    pub async fn get_record(
        &self,
        warehouse_id: Uuid,
        product_id: Uuid,
    ) -> AppResult<InventoryRecord> {
        let record = sqlx::query_as::<_, InventoryRecordRow>(
            r#"
            SELECT id, product_id, warehouse_id, location_id, quantity, updated_at
            FROM inventory
            WHERE warehouse_id = $1 AND product_id = $2
            "#,
        )
        .bind(warehouse_id)
        .bind(product_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Inventory record".to_string()))?;

        Ok(record.into())
    }
}

#[derive(Debug, sqlx::FromRow)]
struct InventoryRecordRow {
    id: Uuid,
    product_id: Uuid,
    warehouse_id: Uuid,
    location_id: Option<Uuid>,
    quantity: Decimal,
    updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<InventoryRecordRow> for InventoryRecord {
    fn from(row: InventoryRecordRow) -> Self {
        InventoryRecord {
            id: row.id,
            product_id: row.product_id,
            warehouse_id: row.warehouse_id,
            location_id: row.location_id,
            quantity: row.quantity,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct InventoryViewRow {
    id: Uuid,
    product_id: Uuid,
    warehouse_id: Uuid,
    quantity: Decimal,
    updated_at: chrono::DateTime<chrono::Utc>,
    product_sku: String,
    product_name: String,
    product_price: Decimal,
    warehouse_name: String,
    location_code: Option<String>,
}

impl From<InventoryViewRow> for InventoryView {
    fn from(row: InventoryViewRow) -> Self {
        InventoryView {
            id: row.id,
            product_id: row.product_id,
            warehouse_id: row.warehouse_id,
            quantity: row.quantity,
            product_sku: row.product_sku,
            product_name: row.product_name,
            product_price: row.product_price,
            warehouse_name: row.warehouse_name,
            location_code: row.location_code,
            updated_at: row.updated_at,
        }
    }
}
