//! Storage layer for stocklist
//!
//! Flat text storage for the stock list with atomic whole-file writes.

pub mod file_io;
pub mod stock_file;

pub use file_io::{read_lines, write_lines_atomic};
pub use stock_file::{format_record, parse_record, StockFile};
