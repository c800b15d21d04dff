//! Dashboard statistics service

use sqlx::PgPool;

use crate::error::AppResult;
use shared::models::DashboardStats;

/// Stats service producing the dashboard headline numbers
#[derive(Clone)]
pub struct StatsService {
    db: PgPool,
    low_stock_threshold: i64,
}

impl StatsService {
    /// Create a new StatsService instance
    pub fn new(db: PgPool, low_stock_threshold: i64) -> Self {
        Self {
            db,
            low_stock_threshold,
        }
    }

    /// Compute the dashboard stats: product count, today's IN/OUT order
    /// counts, and the number of low-stock inventory rows
    pub async fn get_stats(&self) -> AppResult<DashboardStats> {
        let total_products = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(&self.db)
            .await?;

        let inbound_today = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM orders WHERE order_type = 'IN' AND created_at::date = CURRENT_DATE",
        )
        .fetch_one(&self.db)
        .await?;

        let outbound_today = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM orders WHERE order_type = 'OUT' AND created_at::date = CURRENT_DATE",
        )
        .fetch_one(&self.db)
        .await?;

        let low_stock_items = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM inventory WHERE quantity < $1",
        )
        .bind(rust_decimal::Decimal::from(self.low_stock_threshold))
        .fetch_one(&self.db)
        .await?;

        Ok(DashboardStats {
            total_products,
            inbound_today,
            outbound_today,
            low_stock_items,
        })
    }
}
