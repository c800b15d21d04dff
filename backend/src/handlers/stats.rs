//! HTTP handlers for dashboard stats

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::services::stats::StatsService;
use crate::AppState;
use shared::models::DashboardStats;

/// Get dashboard headline numbers
pub async fn get_stats(State(state): State<AppState>) -> AppResult<Json<DashboardStats>> {
    let service = StatsService::new(state.db, state.config.stats.low_stock_threshold);
    let stats = service.get_stats().await?;
    Ok(Json(stats))
}
