//! # SrcSync Filesystem Utilities
//!
//! File: cli/src/common/fs/mod.rs
//!
//! ## Overview
//!
//! This module groups the filesystem building blocks shared by the SrcSync
//! commands: basic file I/O wrappers and the recursive header/source file
//! lister.
//!
//! ## Usage
//!
//! ```rust
//! use crate::common::fs::{io, lister};
//! use std::path::Path;
//!
//! # fn run_example() -> crate::core::error::Result<()> {
//! let root = Path::new("./src/runtime");
//! let headers = lister::find_header_files(root, "")?;
//! io::write_string_to_file(Path::new("./headers.txt"), &headers.join("\n"))?;
//! # Ok(())
//! # }
//! ```
//!

/// Basic file I/O operations (`ensure_dir_exists`, `read_file_to_string`, `write_string_to_file`).
pub mod io;
/// Recursive discovery of header/source files with path normalization.
pub mod lister;
