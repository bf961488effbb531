//! # SrcSync Filesystem I/O Operations
//!
//! File: cli/src/common/fs/io.rs
//!
//! ## Overview
//!
//! This module centralizes the fundamental filesystem input/output operations
//! used by SrcSync. It provides convenient, robust wrappers around standard
//! library `std::fs` functions for reading whole files into strings, writing
//! string content back to files, and ensuring directories exist.
//!
//! ## Architecture
//!
//! The module offers three focused utility functions:
//! - **`ensure_dir_exists`**: Creates a directory (including parents) if it
//!   does not exist, and errors if the path exists but is not a directory.
//! - **`read_file_to_string`**: A wrapper around `fs::read_to_string` that
//!   adds context to I/O errors using `anyhow::Context`.
//! - **`write_string_to_file`**: Writes a string slice to a path, ensuring
//!   the parent directory exists first. Overwrites any existing file.
//!
//! ## Usage
//!
//! The template substitutor uses `read_file_to_string` to load
//! `CMakeLists.txt.template` and `write_string_to_file` to emit the
//! regenerated `CMakeLists.txt`.
//!
use crate::core::error::{Result, SrcsyncError};
use anyhow::Context;
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Ensures that a directory exists at the specified path.
///
/// If the path does not exist, it is created recursively (like `mkdir -p`).
/// If the path exists but is not a directory, an error is returned.
///
/// ## Arguments
///
/// * `path` - The directory path to ensure exists.
///
/// ## Errors
///
/// Returns an `Err` if the path exists but is not a directory, or if
/// creating the directory fails (e.g. permissions).
pub fn ensure_dir_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory {:?}", path))?;
        info!("Created directory: {:?}", path);
    } else if !path.is_dir() {
        anyhow::bail!(SrcsyncError::FileSystem(format!(
            "Path exists but is not a directory: {:?}",
            path
        )));
    } else {
        debug!("Directory already exists: {:?}", path);
    }
    Ok(())
}

/// Reads the entire content of a file into a string.
///
/// A wrapper around `std::fs::read_to_string` that adds contextual
/// information naming the file when reading fails.
pub fn read_file_to_string(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file {:?}", path))
}

/// Writes string content to a file path, overwriting if it exists.
///
/// The parent directory of `path` is created first if necessary.
///
/// ## Errors
///
/// Returns an `Err` if the parent directory cannot be created or if writing
/// fails (e.g. permissions, disk full).
pub fn write_string_to_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir_exists(parent)?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write to file {:?}", path))?;
    info!("Wrote content to file: {:?}", path);
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_ensure_dir_exists_creates_new() -> Result<()> {
        let base_dir = tempdir()?;
        let new_dir = base_dir.path().join("new/subdir");
        assert!(!new_dir.exists());
        ensure_dir_exists(&new_dir)?;
        assert!(new_dir.is_dir());
        Ok(())
    }

    #[test]
    fn test_ensure_dir_exists_accepts_existing() -> Result<()> {
        let base_dir = tempdir()?;
        ensure_dir_exists(base_dir.path())?;
        assert!(base_dir.path().is_dir());
        Ok(())
    }

    #[test]
    fn test_ensure_dir_exists_rejects_file() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("a_file");
        fs::write(&file_path, "content")?;
        let result = ensure_dir_exists(&file_path);
        assert!(result.is_err());
        Ok(())
    }

    #[test]
    fn test_read_write_round_trip() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("nested/output.txt");
        let content = "set(SOURCES\n    main.cpp\n)\n";
        write_string_to_file(&file_path, content)?;
        assert_eq!(read_file_to_string(&file_path)?, content);
        Ok(())
    }

    #[test]
    fn test_write_overwrites_existing() -> Result<()> {
        let base_dir = tempdir()?;
        let file_path = base_dir.path().join("output.txt");
        write_string_to_file(&file_path, "first")?;
        write_string_to_file(&file_path, "second")?;
        assert_eq!(read_file_to_string(&file_path)?, "second");
        Ok(())
    }

    #[test]
    fn test_read_missing_file_errors() {
        let base_dir = tempdir().unwrap();
        let missing = base_dir.path().join("nope.txt");
        assert!(read_file_to_string(&missing).is_err());
    }
}
