//! # SrcSync List Sources Command
//!
//! File: cli/src/commands/list/sources.rs
//!
//! ## Overview
//!
//! This module implements `srcsync list sources <PATH>`, the `.cpp`
//! counterpart of `list headers`: it recursively scans a directory tree and
//! prints every `.cpp` file found, one root-relative forward-slash path per
//! line.
//!
//! ## Examples
//!
//! ```bash
//! srcsync list sources ./src/runtime
//! ```
//!
//! Example output:
//!
//! ```text
//! Found .cpp files:
//! core/engine.cpp
//! main.cpp
//! ```
//!
use crate::common::fs::lister;
use crate::core::error::{Result, SrcsyncError};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// Arguments for the `srcsync list sources` subcommand.
#[derive(Parser, Debug)]
pub struct SourcesArgs {
    /// Root folder to search for .cpp files (recursive).
    pub path: PathBuf,
}

/// Handler for `srcsync list sources`: validates the root, lists matching
/// files, and prints them (or a "none found" notice) to stdout.
pub fn handle_sources(args: SourcesArgs) -> Result<()> {
    info!("Listing source files under: {}", args.path.display());

    if !args.path.is_dir() {
        anyhow::bail!(SrcsyncError::InvalidPath(format!(
            "Invalid folder path: {}",
            args.path.display()
        )));
    }

    let source_files = lister::find_source_files(&args.path, "")?;
    if source_files.is_empty() {
        println!("No .cpp files found in the specified folder.");
    } else {
        println!("Found .cpp files:");
        for file_path in &source_files {
            println!("{}", file_path);
        }
    }
    Ok(())
}
