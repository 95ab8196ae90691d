//! Display formatting for terminal output
//!
//! Pure text formatting of products and stock reports. Coloring is applied
//! by the interactive menu.

pub mod product;

pub use product::{format_filter_report, format_name_list, format_product_line, format_unavailable};
