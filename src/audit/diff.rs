//! Diff generation for audit logging
//!
//! Summarizes which product fields changed between two states.

use serde_json::Value;

/// Generate a human-readable diff between two product snapshots
///
/// Only top-level fields present in both objects are compared. Returns
/// `None` when nothing changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    let (Value::Object(before_obj), Value::Object(after_obj)) = (before, after) else {
        return None;
    };

    let changes: Vec<String> = before_obj
        .iter()
        .filter_map(|(key, before_val)| {
            let after_val = after_obj.get(key)?;
            (after_val != before_val).then(|| {
                format!("{}: {} -> {}", key, format_value(before_val), format_value(after_val))
            })
        })
        .collect();

    if changes.is_empty() {
        None
    } else {
        Some(changes.join(", "))
    }
}

/// Format a JSON value for human-readable display
fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) if s.chars().count() > 50 => {
            let head: String = s.chars().take(47).collect();
            format!("\"{}...\"", head)
        }
        other => other.to_string(),
    }
}
