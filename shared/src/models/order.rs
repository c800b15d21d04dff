//! Order and order-item models, plus the pure stock-movement rule

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a stock-movement order
///
/// Stored as TEXT ("IN"/"OUT") and bound through `as_str`, so the shared
/// crate stays free of the database dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderType {
    In,
    Out,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::In => "IN",
            OrderType::Out => "OUT",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "IN" => Some(OrderType::In),
            "OUT" => Some(OrderType::Out),
            _ => None,
        }
    }

    /// Signed contribution of a movement of `quantity` in this direction
    pub fn signed(&self, quantity: Decimal) -> Decimal {
        match self {
            OrderType::In => quantity,
            OrderType::Out => -quantity,
        }
    }
}

/// Apply one movement to the current on-hand quantity of a
/// (product, warehouse) pair.
///
/// `current` is `None` when no inventory row exists for the pair yet.
/// Returns the quantity the row should hold afterwards, or `None` when no
/// row should be created: an OUT against unknown stock neither creates nor
/// modifies inventory (explicit policy, not an error).
pub fn apply_movement(
    current: Option<Decimal>,
    order_type: OrderType,
    quantity: Decimal,
) -> Option<Decimal> {
    match (current, order_type) {
        (Some(on_hand), _) => Some(on_hand + order_type.signed(quantity)),
        (None, OrderType::In) => Some(quantity),
        (None, OrderType::Out) => None,
    }
}

/// A stock-movement order header
///
/// Orders are immutable once created; status is fixed to "NEW" (there is no
/// workflow behind it).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: Uuid,
    pub order_number: String,
    pub order_type: OrderType,
    pub warehouse_id: Uuid,
    pub reference: Option<String>,
    pub created_by: Uuid,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// A line item belonging to an order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: Uuid,
    pub order_id: Uuid,
    pub product_id: Uuid,
    pub quantity: Decimal,
}

/// An order header together with its line items, in the order they were
/// submitted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderWithItems {
    pub order: Order,
    pub items: Vec<OrderItem>,
}
