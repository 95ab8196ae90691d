//! Core data models for stocklist
//!
//! The product record and the category filters applied to it.

pub mod filter;
pub mod product;

pub use filter::ProductFilter;
pub use product::{default_stock, Product};
