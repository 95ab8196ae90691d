//! Audit entry data structures
//!
//! One journal line per change to the stock list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Product;

/// Types of changes recorded in the journal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// Product was added
    Create,
    /// Product category or amount changed
    Update,
    /// Product was removed
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the change occurred (UTC)
    pub timestamp: DateTime<Utc>,

    /// Type of change
    pub operation: Operation,

    /// Name of the affected product
    pub product: String,

    /// The product before the change (updates and deletes)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<serde_json::Value>,

    /// The product after the change (creates and updates)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<serde_json::Value>,

    /// Human-readable diff summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_summary: Option<String>,
}

impl AuditEntry {
    /// Entry for an added product
    pub fn create(product: &Product) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Create,
            product: product.name.clone(),
            before: None,
            after: serde_json::to_value(product).ok(),
            diff_summary: None,
        }
    }

    /// Entry for a changed product
    pub fn update(before: &Product, after: &Product, diff_summary: Option<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Update,
            product: after.name.clone(),
            before: serde_json::to_value(before).ok(),
            after: serde_json::to_value(after).ok(),
            diff_summary,
        }
    }

    /// Entry for a removed product
    pub fn delete(product: &Product) -> Self {
        Self {
            timestamp: Utc::now(),
            operation: Operation::Delete,
            product: product.name.clone(),
            before: serde_json::to_value(product).ok(),
            after: None,
            diff_summary: None,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.product
        );

        if let Some(diff) = &self.diff_summary {
            output.push_str(&format!("\n  Changes: {}", diff));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::Create.to_string(), "CREATE");
        assert_eq!(Operation::Update.to_string(), "UPDATE");
        assert_eq!(Operation::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_create_entry() {
        let entry = AuditEntry::create(&Product::new("Pears", true, "food", 15));

        assert_eq!(entry.operation, Operation::Create);
        assert_eq!(entry.product, "Pears");
        assert!(entry.before.is_none());
        assert_eq!(entry.after.unwrap()["amount"], 15);
    }

    #[test]
    fn test_update_entry() {
        let before = Product::new("Pears", true, "food", 15);
        let after = Product::new("Pears", true, "food", 3);

        let entry = AuditEntry::update(&before, &after, Some("amount: 15 -> 3".into()));

        assert_eq!(entry.operation, Operation::Update);
        assert!(entry.before.is_some());
        assert!(entry.after.is_some());
        assert_eq!(entry.diff_summary.as_deref(), Some("amount: 15 -> 3"));
    }

    #[test]
    fn test_delete_entry() {
        let entry = AuditEntry::delete(&Product::new("Coffee", true, "food", 5));

        assert_eq!(entry.operation, Operation::Delete);
        assert!(entry.before.is_some());
        assert!(entry.after.is_none());
    }

    #[test]
    fn test_serialization_skips_empty_fields() {
        let entry = AuditEntry::create(&Product::new("Soap", true, "non-food", 1));

        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"operation\":\"create\""));
        assert!(!json.contains("before"));

        let deserialized: AuditEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.operation, Operation::Create);
        assert_eq!(deserialized.product, "Soap");
    }

    #[test]
    fn test_human_readable_format() {
        let before = Product::new("Pears", true, "food", 15);
        let after = Product::new("Pears", true, "fruit", 15);
        let entry = AuditEntry::update(&before, &after, Some("category: \"food\" -> \"fruit\"".into()));

        let formatted = entry.format_human_readable();
        assert!(formatted.contains("UPDATE Pears"));
        assert!(formatted.contains("Changes: category"));
    }
}
