//! Service layer for stocklist
//!
//! Business logic on top of the storage layer.

pub mod stock;

pub use stock::{parse_amount, StockService, UpsertOutcome};
