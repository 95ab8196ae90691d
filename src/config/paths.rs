//! Path management for stocklist
//!
//! All files live in a single data directory.
//!
//! ## Path Resolution Order
//!
//! 1. `--data-dir` flag or `STOCKLIST_DATA_DIR` environment variable
//! 2. The current working directory

use std::path::PathBuf;

use crate::error::StockError;

/// Storage file name, kept compatible with existing stock lists
pub const STOCK_FILE_NAME: &str = "stock_data.txt";

/// Manages all paths used by stocklist
#[derive(Debug, Clone)]
pub struct StockPaths {
    /// Directory holding the stock file, settings and audit log
    base_dir: PathBuf,
}

impl StockPaths {
    /// Resolve paths from an optional explicit directory
    ///
    /// # Errors
    ///
    /// Returns an error if no directory was given and the current working
    /// directory cannot be determined.
    pub fn new(data_dir: Option<PathBuf>) -> Result<Self, StockError> {
        let base_dir = match data_dir {
            Some(dir) => dir,
            None => std::env::current_dir().map_err(|e| {
                StockError::Config(format!("Could not determine working directory: {}", e))
            })?,
        };

        Ok(Self { base_dir })
    }

    /// Create StockPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the stock storage file
    pub fn stock_file(&self) -> PathBuf {
        self.base_dir.join(STOCK_FILE_NAME)
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Ensure the data directory exists
    pub fn ensure_directories(&self) -> Result<(), StockError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| StockError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if a settings file has been written
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StockPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.stock_file(), temp_dir.path().join("stock_data.txt"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("audit.log"));
    }

    #[test]
    fn test_explicit_dir_wins() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StockPaths::new(Some(temp_dir.path().to_path_buf())).unwrap();
        assert_eq!(paths.base_dir(), temp_dir.path());
    }

    #[test]
    fn test_defaults_to_working_directory() {
        let paths = StockPaths::new(None).unwrap();
        assert_eq!(paths.base_dir(), &std::env::current_dir().unwrap());
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = StockPaths::with_base_dir(temp_dir.path().join("nested").join("stock"));

        paths.ensure_directories().unwrap();

        assert!(paths.base_dir().exists());
        assert!(!paths.is_initialized());
    }
}
