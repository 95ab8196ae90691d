//! File I/O utilities with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::StockError;

/// Read every line of a text file, or `None` if the file doesn't exist
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Option<Vec<String>>, StockError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(None);
    }

    let file = File::open(path)
        .map_err(|e| StockError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let lines = BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| StockError::Storage(format!("Failed to read {}: {}", path.display(), e)))?;

    Ok(Some(lines))
}

/// Write lines to a file atomically (write to temp, then rename)
///
/// The file is either completely replaced or left untouched.
pub fn write_lines_atomic<P, I, S>(path: P, lines: I) -> Result<(), StockError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                StockError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    // Same directory as the target so the rename stays on one filesystem
    let temp_path = path.with_extension("txt.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| StockError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line.as_ref())
            .map_err(|e| StockError::Storage(format!("Failed to write data: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| StockError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| StockError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        StockError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_nonexistent_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.txt");

        assert!(read_lines(&path).unwrap().is_none());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("stock.txt");

        write_lines_atomic(&path, ["first", "second"]).unwrap();

        let lines = read_lines(&path).unwrap().unwrap();
        assert_eq!(lines, vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn test_write_replaces_whole_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("stock.txt");

        write_lines_atomic(&path, ["a", "b", "c"]).unwrap();
        write_lines_atomic(&path, ["d"]).unwrap();

        let lines = read_lines(&path).unwrap().unwrap();
        assert_eq!(lines, vec!["d".to_string()]);
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("stock.txt");
        let temp_path = temp_dir.path().join("stock.txt.tmp");

        write_lines_atomic(&path, ["line"]).unwrap();

        assert!(path.exists());
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_write_empty_list_creates_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("stock.txt");

        write_lines_atomic(&path, Vec::<String>::new()).unwrap();

        assert_eq!(read_lines(&path).unwrap().unwrap(), Vec::<String>::new());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("stock.txt");

        write_lines_atomic(&path, ["line"]).unwrap();
        assert!(path.exists());
    }
}
