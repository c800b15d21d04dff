//! HTTP handlers for the Warehouse Management System

pub mod auth;
pub mod health;
pub mod inventory;
pub mod order;
pub mod product;
pub mod stats;
pub mod warehouse;

pub use auth::login;
pub use health::health_check;
pub use inventory::{get_inventory_record, list_inventory};
pub use order::{create_order, get_order, list_orders};
pub use product::{create_product, delete_product, list_products, update_product};
pub use stats::get_stats;
pub use warehouse::{
    create_warehouse, delete_warehouse, list_locations, list_warehouses, update_warehouse,
};
