//! Product model
//!
//! A stocked item. The name is the de-facto key and is matched
//! case-insensitively; uniqueness is not enforced.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A product on the stock list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Product name
    pub name: String,

    /// Whether the product is in stock; set at creation only
    pub available: bool,

    /// Free-text category, conventionally "food" or "non-food"
    pub category: String,

    /// Quantity on hand
    pub amount: i32,
}

impl Product {
    /// Create a new product
    pub fn new(
        name: impl Into<String>,
        available: bool,
        category: impl Into<String>,
        amount: i32,
    ) -> Self {
        Self {
            name: name.into(),
            available,
            category: category.into(),
            amount,
        }
    }

    /// Normalize a product name for matching
    pub fn normalize_name(name: &str) -> String {
        name.trim().to_lowercase()
    }

    /// Check if this product matches a name (case-insensitive)
    pub fn matches_name(&self, name: &str) -> bool {
        Self::normalize_name(&self.name) == Self::normalize_name(name)
    }

    /// Human-readable availability phrase
    pub fn availability_label(&self) -> &'static str {
        if self.available {
            "Is Available"
        } else {
            "Isn't Available"
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - Type: {} - Amount: {}",
            self.name, self.category, self.amount
        )
    }
}

/// The stock list used when no storage file exists yet
pub fn default_stock() -> Vec<Product> {
    [
        ("Bananas", 10),
        ("Chocolate bars", 20),
        ("Pears", 15),
        ("Oranges", 9),
        ("Coconuts", 7),
        ("Coca-cola", 13),
        ("Coffee", 5),
    ]
    .into_iter()
    .map(|(name, amount)| Product::new(name, true, "food", amount))
    .collect()
}
