//! Interactive command-line interface
//!
//! The numbered stock menu and its Add, Alter and Check flows,
//! bridging console input with the service layer.

pub mod menu;

pub use menu::{MenuCommand, StockMenu, VERSION_BANNER};
