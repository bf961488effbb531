//! # SrcSync List Headers Command
//!
//! File: cli/src/commands/list/headers.rs
//!
//! ## Overview
//!
//! This module implements `srcsync list headers <PATH>`, which recursively
//! scans a directory tree and prints every `.h` / `.hpp` file found, one
//! root-relative forward-slash path per line.
//!
//! ## Examples
//!
//! ```bash
//! srcsync list headers ./src/runtime
//! ```
//!
//! Example output:
//!
//! ```text
//! Found .h or .hpp files:
//! core/engine.h
//! function/object.hpp
//! ```
//!
//! If no headers exist under the path, a notice is printed instead. A path
//! that is not a directory is an error.
//!
use crate::common::fs::lister;
use crate::core::error::{Result, SrcsyncError};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Arguments for the `srcsync list headers` subcommand.
#[derive(Parser, Debug)]
pub struct HeadersArgs {
    /// Root folder to search for .h / .hpp files (recursive).
    pub path: PathBuf,
}

/// Handler for `srcsync list headers`: validates the root, lists matching
/// files, and prints them (or a "none found" notice) to stdout.
pub fn handle_headers(args: HeadersArgs) -> Result<()> {
    info!("Listing header files under: {}", args.path.display());

    // Pre-validate so the user gets the familiar message instead of a raw
    // traversal error.
    if !args.path.is_dir() {
        anyhow::bail!(SrcsyncError::InvalidPath(format!(
            "Invalid folder path: {}",
            args.path.display()
        )));
    }

    let header_files = lister::find_header_files(&args.path, "")?;
    if header_files.is_empty() {
        println!("No .h or .hpp files found in the specified folder.");
    } else {
        println!("Found .h or .hpp files:");
        for file_path in &header_files {
            println!("{}", file_path);
        }
    }
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_handle_headers_accepts_valid_dir() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("a.h"), "")?;
        handle_headers(HeadersArgs {
            path: dir.path().to_path_buf(),
        })
    }

    #[test]
    fn test_handle_headers_rejects_missing_dir() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("gone");
        let err = handle_headers(HeadersArgs { path: missing }).unwrap_err();
        assert!(err.to_string().contains("Invalid folder path"));
    }
}
