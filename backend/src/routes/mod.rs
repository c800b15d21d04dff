//! Route definitions for the Warehouse Management System

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Auth (placeholder login lookup)
        .route("/auth/login", post(handlers::login))
        // Product catalog
        .nest("/products", product_routes())
        // Warehouses
        .nest("/warehouses", warehouse_routes())
        // Inventory (read-only; written by order fulfillment)
        .route("/inventory", get(handlers::list_inventory))
        .route(
            "/inventory/:warehouse_id/:product_id",
            get(handlers::get_inventory_record),
        )
        // Orders
        .route(
            "/orders",
            get(handlers::list_orders).post(handlers::create_order),
        )
        .route("/orders/:order_id", get(handlers::get_order))
        // Dashboard stats
        .route("/stats", get(handlers::get_stats))
}

/// Product catalog routes
fn product_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/:product_id",
            put(handlers::update_product).delete(handlers::delete_product),
        )
}

/// Warehouse management routes
fn warehouse_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_warehouses).post(handlers::create_warehouse),
        )
        .route(
            "/:warehouse_id",
            put(handlers::update_warehouse).delete(handlers::delete_warehouse),
        )
        .route("/:warehouse_id/locations", get(handlers::list_locations))
}
