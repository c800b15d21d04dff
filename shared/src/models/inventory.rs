//! Inventory models

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// On-hand stock for one (product, warehouse) pair
///
/// At most one record exists per pair; the first inbound order for a pair
/// creates it implicitly and every later order against the pair rewrites
/// `quantity`. Records are never deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub id: Uuid,
    pub product_id: Uuid,
    pub warehouse_id: Uuid,
    pub location_id: Option<Uuid>,
    pub quantity: Decimal,
    pub updated_at: DateTime<Utc>,
}

/// Inventory row joined with product, warehouse, and location metadata,
/// as served to the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryView {
    pub id: Uuid,
    pub product_id: Uuid,
    pub warehouse_id: Uuid,
    pub quantity: Decimal,
    pub product_sku: String,
    pub product_name: String,
    pub product_price: Decimal,
    pub warehouse_name: String,
    pub location_code: Option<String>,
    pub updated_at: DateTime<Utc>,
}
