//! Order fulfillment service
//!
//! The one transactional piece of the system: persisting an order header,
//! its line items, and the inventory reconciliation for the affected
//! (product, warehouse) pairs as a single atomic unit.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use shared::models::{Order, OrderItem, OrderType, OrderWithItems};
use shared::validation::{validate_order_items, validate_order_number};

/// Order service handling submission and listing of stock-movement orders
#[derive(Clone)]
pub struct OrderService {
    db: PgPool,
    /// Bound on row-lock waits, in milliseconds; exceeding it surfaces as
    /// a retryable error so the caller can resubmit
    lock_timeout_ms: u64,
}

/// A line item in an order submission
#[derive(Debug, Clone, Deserialize)]
pub struct OrderItemInput {
    pub product_id: Uuid,
    pub quantity: Decimal,
}

/// Input for submitting an order
#[derive(Debug, Deserialize)]
pub struct CreateOrderInput {
    pub order_number: String,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub warehouse_id: Uuid,
    pub reference: Option<String>,
    pub created_by: Uuid,
    pub items: Vec<OrderItemInput>,
}

/// Response after a successful submission
#[derive(Debug, Serialize)]
pub struct CreateOrderResponse {
    pub order_id: Uuid,
    pub message: String,
}

impl OrderService {
    /// Create a new OrderService instance
    pub fn new(db: PgPool, lock_timeout_ms: u64) -> Self {
        Self {
            db,
            lock_timeout_ms,
        }
    }

    /// Submit an order: persist the header and items, and reconcile
    /// inventory for every affected (product, warehouse) pair.
    ///
    /// All writes happen inside one database transaction. Inventory rows are
    /// locked with `FOR UPDATE` so concurrent submissions against the same
    /// pair serialize instead of losing updates; the first-insert race on a
    /// brand-new pair is absorbed by the unique (product_id, warehouse_id)
    /// constraint via `ON CONFLICT DO UPDATE`.
    pub async fn create_order(&self, input: CreateOrderInput) -> AppResult<CreateOrderResponse> {
        // Validate before any write so bad input never needs a rollback
        validate_order_number(&input.order_number)
            .map_err(|msg| AppError::ValidationError(msg.to_string()))?;

        let quantities: Vec<Decimal> = input.items.iter().map(|i| i.quantity).collect();
        validate_order_items(&quantities)
            .map_err(|msg| AppError::ValidationError(msg.to_string()))?;

        self.ensure_warehouse_exists(input.warehouse_id).await?;
        self.ensure_products_exist(&input.items).await?;

        let mut tx = self.db.begin().await?;

        // Bounded lock waits: a blocked FOR UPDATE fails with SQLSTATE 55P03
        // once the timeout expires, which maps to a retryable error
        sqlx::query(&format!("SET LOCAL lock_timeout = '{}ms'", self.lock_timeout_ms))
            .execute(&mut *tx)
            .await?;

        let order_id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO orders (order_number, order_type, warehouse_id, reference, created_by, status)
            VALUES ($1, $2, $3, $4, $5, 'NEW')
            RETURNING id
            "#,
        )
        .bind(&input.order_number)
        .bind(input.order_type.as_str())
        .bind(input.warehouse_id)
        .bind(&input.reference)
        .bind(input.created_by)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::from_sqlx(e, "order_number"))?;

        for (line_no, item) in input.items.iter().enumerate() {
            sqlx::query(
                "INSERT INTO order_items (order_id, product_id, quantity, line_no) VALUES ($1, $2, $3, $4)",
            )
            .bind(order_id)
            .bind(item.product_id)
            .bind(item.quantity)
            .bind(line_no as i32)
            .execute(&mut *tx)
            .await?;

            self.apply_to_inventory(&mut tx, input.order_type, input.warehouse_id, item)
                .await?;
        }

        tx.commit().await?;

        tracing::info!(
            order_id = %order_id,
            order_number = %input.order_number,
            order_type = input.order_type.as_str(),
            items = input.items.len(),
            "order created"
        );

        Ok(CreateOrderResponse {
            order_id,
            message: "Order created successfully".to_string(),
        })
    }

    /// Read-modify-write of one (product, warehouse) inventory pair inside
    /// the submission transaction
    async fn apply_to_inventory(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order_type: OrderType,
        warehouse_id: Uuid,
        item: &OrderItemInput,
    ) -> AppResult<()> {
        // Lock the pair's row for the rest of the transaction
        let existing = sqlx::query_as::<_, (Uuid, Decimal)>(
            r#"
            SELECT id, quantity FROM inventory
            WHERE product_id = $1 AND warehouse_id = $2
            FOR UPDATE
            "#,
        )
        .bind(item.product_id)
        .bind(warehouse_id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(|e| AppError::from_sqlx(e, "inventory"))?;

        match (existing, order_type) {
            (Some((inventory_id, on_hand)), _) => {
                let new_quantity = on_hand + order_type.signed(item.quantity);
                sqlx::query("UPDATE inventory SET quantity = $1, updated_at = now() WHERE id = $2")
                    .bind(new_quantity)
                    .bind(inventory_id)
                    .execute(&mut **tx)
                    .await
                    .map_err(|e| AppError::from_sqlx(e, "inventory"))?;
            }
            (None, OrderType::In) => {
                // Two first-time IN orders can both miss the row; the unique
                // pair constraint turns the loser's insert into an increment
                sqlx::query(
                    r#"
                    INSERT INTO inventory (product_id, warehouse_id, quantity)
                    VALUES ($1, $2, $3)
                    ON CONFLICT (product_id, warehouse_id)
                    DO UPDATE SET quantity = inventory.quantity + EXCLUDED.quantity,
                                  updated_at = now()
                    "#,
                )
                .bind(item.product_id)
                .bind(warehouse_id)
                .bind(item.quantity)
                .execute(&mut **tx)
                .await
                .map_err(|e| AppError::from_sqlx(e, "inventory"))?;
            }
            (None, OrderType::Out) => {
                // Outbound against unknown stock: neither rejected nor
                // recorded as negative. The order and item rows still land.
                tracing::warn!(
                    product_id = %item.product_id,
                    warehouse_id = %warehouse_id,
                    "outbound movement against nonexistent inventory, skipping reconciliation"
                );
            }
        }

        Ok(())
    }

    async fn ensure_warehouse_exists(&self, warehouse_id: Uuid) -> AppResult<()> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM warehouses WHERE id = $1)")
                .bind(warehouse_id)
                .fetch_one(&self.db)
                .await?;

        if !exists {
            return Err(AppError::NotFound("Warehouse".to_string()));
        }
        Ok(())
    }

    async fn ensure_products_exist(&self, items: &[OrderItemInput]) -> AppResult<()> {
        let product_ids: Vec<Uuid> = items.iter().map(|i| i.product_id).collect();
        let known = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(DISTINCT id) FROM products WHERE id = ANY($1)",
        )
        .bind(&product_ids)
        .fetch_one(&self.db)
        .await?;

        let distinct: std::collections::HashSet<Uuid> = product_ids.iter().copied().collect();
        if known != distinct.len() as i64 {
            return Err(AppError::NotFound("Product".to_string()));
        }
        Ok(())
    }

    /// Get one order with its line items in submission order
    pub async fn get_order(&self, order_id: Uuid) -> AppResult<OrderWithItems> {
        let row = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, order_number, order_type, warehouse_id, reference, created_by,
                   status, created_at
            FROM orders
            WHERE id = $1
            "#,
        )
        .bind(order_id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| AppError::NotFound("Order".to_string()))?;

        let items = sqlx::query_as::<_, OrderItemRow>(
            r#"
            SELECT id, order_id, product_id, quantity
            FROM order_items
            WHERE order_id = $1
            ORDER BY line_no
            "#,
        )
        .bind(order_id)
        .fetch_all(&self.db)
        .await?;

        Ok(OrderWithItems {
            order: row.try_into_order()?,
            items: items.into_iter().map(Into::into).collect(),
        })
    }

    /// List all orders, newest first
    pub async fn list_orders(&self) -> AppResult<Vec<Order>> {
        let rows = sqlx::query_as::<_, OrderRow>(
            r#"
            SELECT id, order_number, order_type, warehouse_id, reference, created_by,
                   status, created_at
            FROM orders
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        rows.into_iter().map(OrderRow::try_into_order).collect()
    }
}

/// Database row for an order; `order_type` arrives as TEXT
#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: Uuid,
    order_number: String,
    order_type: String,
    warehouse_id: Uuid,
    reference: Option<String>,
    created_by: Uuid,
    status: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, sqlx::FromRow)]
struct OrderItemRow {
    id: Uuid,
    order_id: Uuid,
    product_id: Uuid,
    quantity: Decimal,
}

impl From<OrderItemRow> for OrderItem {
    fn from(row: OrderItemRow) -> Self {
        OrderItem {
            id: row.id,
            order_id: row.order_id,
            product_id: row.product_id,
            quantity: row.quantity,
        }
    }
}

impl OrderRow {
    fn try_into_order(self) -> AppResult<Order> {
        let order_type = OrderType::from_str(&self.order_type).ok_or_else(|| {
            AppError::Internal(format!("unknown order type in store: {}", self.order_type))
        })?;

        Ok(Order {
            id: self.id,
            order_number: self.order_number,
            order_type,
            warehouse_id: self.warehouse_id,
            reference: self.reference,
            created_by: self.created_by,
            status: self.status,
            created_at: self.created_at,
        })
    }
}
