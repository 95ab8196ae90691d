//! Stock service
//!
//! Owns the in-memory stock list and provides the add, update, remove and
//! query operations on it. Every change is journaled when an audit logger
//! is attached; persistence is explicit through [`StockService::save`].

use tracing::{debug, error, warn};

use crate::audit::{generate_diff, AuditEntry, AuditLogger};
use crate::config::{Settings, StockPaths};
use crate::error::{StockError, StockResult};
use crate::models::{Product, ProductFilter};
use crate::storage::StockFile;

/// Result of [`StockService::upsert`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// An existing product was changed; holds its previous state
    Updated { before: Product },
    /// No product matched, so a new one was appended
    Inserted,
}

/// Service owning the stock list
pub struct StockService {
    products: Vec<Product>,
    file: StockFile,
    audit: Option<AuditLogger>,
    /// Normalized names that are added as unavailable
    out_of_stock: Vec<String>,
    /// The list was emptied because the stock file could not be loaded
    load_failed: bool,
}

/// Parse a quantity typed at a prompt
pub fn parse_amount(input: &str) -> StockResult<i32> {
    input
        .trim()
        .parse::<i32>()
        .map_err(|_| StockError::Validation(format!("'{}' is not a valid amount", input.trim())))
}

impl StockService {
    /// Create a service over an already loaded list
    pub fn new(file: StockFile, products: Vec<Product>) -> Self {
        Self {
            products,
            file,
            audit: None,
            out_of_stock: Vec::new(),
            load_failed: false,
        }
    }

    /// Load the list from `file`; load failures leave the list empty
    pub fn load(file: StockFile) -> Self {
        match file.try_load() {
            Ok(products) => Self::new(file, products),
            Err(e) => {
                error!(path = %file.path().display(), error = %e, "error loading stock data");
                let mut service = Self::new(file, Vec::new());
                service.load_failed = true;
                service
            }
        }
    }

    /// Whether the list started empty because loading failed
    ///
    /// Cleared by the first successful save.
    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    /// Build the service for a data directory and its settings
    pub fn open(paths: &StockPaths, settings: &Settings) -> Self {
        let file = StockFile::new(paths.stock_file()).with_restore_amounts(settings.restore_amounts);
        let mut service = Self::load(file).with_out_of_stock(&settings.out_of_stock);
        if settings.audit_enabled {
            service = service.with_audit(AuditLogger::new(paths.audit_log()));
        }
        service
    }

    /// Journal every change to `logger`
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    /// Names that the Add flow records as unavailable
    pub fn with_out_of_stock<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.out_of_stock = names
            .into_iter()
            .map(|n| Product::normalize_name(n.as_ref()))
            .collect();
        self
    }

    /// All products in insertion order
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Check a name against the out-of-stock list
    pub fn is_out_of_stock(&self, name: &str) -> bool {
        let normalized = Product::normalize_name(name);
        self.out_of_stock.iter().any(|n| *n == normalized)
    }

    /// First product whose name matches (case-insensitive)
    pub fn find(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.matches_name(name))
    }

    /// Append a new product from the Add flow
    ///
    /// The product is unavailable if its name is on the out-of-stock list.
    /// Duplicates are not merged.
    pub fn add_item(&mut self, name: &str, category: &str, amount: i32) -> &Product {
        let available = !self.is_out_of_stock(name);
        self.push(Product::new(name, available, category, amount))
    }

    /// Update the first product matching `name`, or insert a new available one
    ///
    /// An update changes category and amount only; availability is kept.
    pub fn upsert(&mut self, name: &str, category: &str, amount: i32) -> UpsertOutcome {
        match self.products.iter().position(|p| p.matches_name(name)) {
            Some(index) => {
                let before = self.products[index].clone();
                let product = &mut self.products[index];
                product.category = category.to_string();
                product.amount = amount;
                let after = product.clone();

                debug!(product = %after.name, "updated product");
                let diff = match (serde_json::to_value(&before), serde_json::to_value(&after)) {
                    (Ok(b), Ok(a)) => generate_diff(&b, &a),
                    _ => None,
                };
                self.record(AuditEntry::update(&before, &after, diff));

                UpsertOutcome::Updated { before }
            }
            None => {
                self.push(Product::new(name, true, category, amount));
                UpsertOutcome::Inserted
            }
        }
    }

    /// Remove every product matching `name`, returning how many were removed
    pub fn remove(&mut self, name: &str) -> usize {
        let (removed, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.products)
            .into_iter()
            .partition(|p| p.matches_name(name));
        self.products = kept;

        for product in &removed {
            debug!(product = %product.name, "removed product");
            self.record(AuditEntry::delete(product));
        }

        removed.len()
    }

    /// Products passing `filter`, in insertion order
    pub fn filter(&self, filter: ProductFilter) -> Vec<&Product> {
        self.products.iter().filter(|p| filter.matches(p)).collect()
    }

    /// Products currently marked unavailable
    pub fn unavailable(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| !p.available).collect()
    }

    /// Write the full list to the storage file
    pub fn save(&mut self) -> StockResult<()> {
        if self.load_failed {
            warn!(
                path = %self.file.path().display(),
                count = self.products.len(),
                "overwriting stock file that failed to load"
            );
        }

        self.file.save(&self.products)?;
        self.load_failed = false;
        Ok(())
    }

    fn push(&mut self, product: Product) -> &Product {
        debug!(product = %product.name, available = product.available, "added product");
        self.record(AuditEntry::create(&product));
        self.products.push(product);
        &self.products[self.products.len() - 1]
    }

    fn record(&self, entry: AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(&entry) {
                warn!(error = %e, "failed to write audit entry");
            }
        }
    }
}
