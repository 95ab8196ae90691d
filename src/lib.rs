//! stocklist - Interactive terminal stock list
//!
//! This library provides the core functionality for the stocklist
//! application: a list of products (name, availability, category, amount)
//! kept in a flat text file and edited through a numbered console menu.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data directory resolution and user settings
//! - `error`: Custom error types
//! - `models`: The product record and category filters
//! - `storage`: Flat text storage with atomic writes
//! - `audit`: Append-only change journal
//! - `services`: Business logic over the in-memory stock list
//! - `display`: Text formatting for terminal output
//! - `cli`: The interactive menu
//! - `logging`: Diagnostic log setup
//!
//! # Example
//!
//! ```rust,ignore
//! use stocklist::config::{StockPaths, Settings};
//! use stocklist::services::StockService;
//!
//! let paths = StockPaths::new(None)?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut service = StockService::open(&paths, &settings);
//! service.add_item("Bread", "food", 4);
//! service.save()?;
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{StockError, StockResult};
