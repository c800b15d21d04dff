//! Dashboard KPI models

use serde::{Deserialize, Serialize};

/// Headline numbers for the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_products: i64,
    /// IN orders created today (server date)
    pub inbound_today: i64,
    /// OUT orders created today (server date)
    pub outbound_today: i64,
    /// Inventory rows with quantity below the low-stock threshold
    pub low_stock_items: i64,
}
