//! Configuration module for stocklist
//!
//! This module provides configuration management including:
//! - Data directory and file path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::StockPaths;
pub use settings::Settings;
