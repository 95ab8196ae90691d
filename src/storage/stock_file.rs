//! Flat text storage for the stock list
//!
//! One product per line, as comma-separated fields padded with a space:
//!
//! ```text
//! Bananas, true, food, 10
//! "Ice cream, vanilla", true, food, 2
//! ```
//!
//! Fields containing a comma or a quote are quoted. Fields are trimmed on
//! read, so unpadded lines load as well. Lines with three fields (no amount)
//! are also accepted. Any other field count is skipped. A malformed
//! availability flag fails the whole load.

use std::path::PathBuf;

use csv::{ReaderBuilder, StringRecord, Terminator, Trim, WriterBuilder};
use tracing::{debug, error, info, warn};

use crate::error::{StockError, StockResult};
use crate::models::{default_stock, Product};

use super::file_io::{read_lines, write_lines_atomic};

/// Encode a product as a storage line
pub fn format_record(product: &Product) -> StockResult<String> {
    let fields = [
        product.name.clone(),
        format!(" {}", product.available),
        format!(" {}", product.category),
        format!(" {}", product.amount),
    ];

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    writer
        .write_record(&fields)
        .map_err(|e| StockError::Storage(format!("Failed to encode {}: {}", product.name, e)))?;

    let bytes = writer
        .into_inner()
        .map_err(|e| StockError::Storage(format!("Failed to encode {}: {}", product.name, e)))?;
    let line = String::from_utf8(bytes)
        .map_err(|e| StockError::Storage(format!("Failed to encode {}: {}", product.name, e)))?;

    Ok(line.trim_end_matches('\n').to_string())
}

/// Decode a storage line
///
/// Returns `Ok(None)` for lines that don't have 3 or 4 fields. The amount is
/// only read when `restore_amounts` is set; otherwise it is 0.
pub fn parse_record(line: &str, line_no: usize, restore_amounts: bool) -> StockResult<Option<Product>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(line.as_bytes());

    let record = match reader.records().next() {
        Some(record) => record.map_err(|e| StockError::Parse {
            line: line_no,
            message: e.to_string(),
        })?,
        None => return Ok(None),
    };

    decode(&record, line_no, restore_amounts)
}

fn decode(record: &StringRecord, line_no: usize, restore_amounts: bool) -> StockResult<Option<Product>> {
    let (Some(name), Some(raw_available), Some(category)) = (record.get(0), record.get(1), record.get(2)) else {
        return Ok(None);
    };
    if record.len() > 4 {
        return Ok(None);
    }

    let available = parse_bool(raw_available).ok_or_else(|| StockError::Parse {
        line: line_no,
        message: format!("invalid availability '{}'", raw_available),
    })?;

    let amount = match record.get(3) {
        Some(raw) if restore_amounts => raw.parse::<i32>().map_err(|e| StockError::Parse {
            line: line_no,
            message: format!("invalid amount '{}': {}", raw, e),
        })?,
        _ => 0,
    };

    Ok(Some(Product::new(name, available, category, amount)))
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.to_lowercase().as_str() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

/// The stock storage file
#[derive(Debug, Clone)]
pub struct StockFile {
    path: PathBuf,
    restore_amounts: bool,
}

impl StockFile {
    /// Create a handle on the storage file at `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            restore_amounts: false,
        }
    }

    /// Read saved amounts back instead of resetting them to 0
    pub fn with_restore_amounts(mut self, restore_amounts: bool) -> Self {
        self.restore_amounts = restore_amounts;
        self
    }

    /// Get the path of the storage file
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Load the stock list, seeding defaults when the file doesn't exist
    pub fn try_load(&self) -> StockResult<Vec<Product>> {
        let Some(lines) = read_lines(&self.path)? else {
            info!(path = %self.path.display(), "no stock file, using default stock");
            return Ok(default_stock());
        };

        let mut products = Vec::with_capacity(lines.len());
        for (index, line) in lines.iter().enumerate() {
            match parse_record(line, index + 1, self.restore_amounts)? {
                Some(product) => products.push(product),
                None => warn!(line = index + 1, "skipping malformed stock line"),
            }
        }

        debug!(count = products.len(), path = %self.path.display(), "loaded stock");
        Ok(products)
    }

    /// Overwrite the storage file with `products`
    pub fn save(&self, products: &[Product]) -> StockResult<()> {
        let written = products
            .iter()
            .map(format_record)
            .collect::<StockResult<Vec<_>>>()
            .and_then(|lines| write_lines_atomic(&self.path, lines));

        match written {
            Ok(()) => {
                info!(count = products.len(), path = %self.path.display(), "stock data saved");
                Ok(())
            }
            Err(e) => {
                error!(path = %self.path.display(), error = %e, "error saving stock data");
                Err(e)
            }
        }
    }
}
