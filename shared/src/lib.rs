//! Shared types and models for the Warehouse Management System
//!
//! This crate contains the domain model and the pure stock-movement logic
//! shared between the backend and its integration tests.

pub mod models;
pub mod validation;

pub use models::*;
pub use validation::*;
