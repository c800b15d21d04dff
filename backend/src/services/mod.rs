//! Business logic services for the Warehouse Management System

pub mod auth;
pub mod inventory;
pub mod order;
pub mod product;
pub mod stats;
pub mod warehouse;

pub use auth::AuthService;
pub use inventory::InventoryService;
pub use order::OrderService;
pub use product::ProductService;
pub use stats::StatsService;
pub use warehouse::WarehouseService;
