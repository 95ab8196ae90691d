//! User settings for stocklist
//!
//! Manages the out-of-stock list, load behavior, journaling and console colors.

use serde::{Deserialize, Serialize};

use super::paths::StockPaths;
use crate::error::StockError;

/// User settings for stocklist
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Item names that are added as unavailable in the Add flow
    #[serde(default = "default_out_of_stock")]
    pub out_of_stock: Vec<String>,

    /// Read saved amounts back on load instead of resetting them to 0
    #[serde(default)]
    pub restore_amounts: bool,

    /// Whether changes are appended to the audit log
    #[serde(default = "default_true")]
    pub audit_enabled: bool,

    /// Whether console status text is colorized
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_out_of_stock() -> Vec<String> {
    ["milk", "sushi", "ice cream", "apples", "crisps", "falafel"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            out_of_stock: default_out_of_stock(),
            restore_amounts: false,
            audit_enabled: true,
            color: true,
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &StockPaths) -> Result<Self, StockError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| StockError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                StockError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &StockPaths) -> Result<(), StockError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| StockError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| StockError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
