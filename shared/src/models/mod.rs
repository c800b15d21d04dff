//! Domain models for the Warehouse Management System

mod inventory;
mod order;
mod product;
mod stats;
mod user;
mod warehouse;

pub use inventory::*;
pub use order::*;
pub use product::*;
pub use stats::*;
pub use user::*;
pub use warehouse::*;
