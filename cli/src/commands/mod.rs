//! # SrcSync Command Modules
//!
//! File: cli/src/commands/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the top-level command groups that comprise the
//! SrcSync CLI. It is the central point for importing and re-exporting
//! command modules so they are accessible to the main application entry
//! point (`main.rs`).
//!
//! ## Command Groups
//!
//! - `list`: Prints discovered header/source file lists (`headers`, `sources`)
//! - `sync`: Regenerates `CMakeLists.txt` files from their templates
//!
//! Each command group defines its own arguments structure and handler
//! function to process those arguments and implement the command's
//! functionality. Subcommands (like `headers` within `list`) are declared
//! within their parent module's `mod.rs`, not here.
//!

/// Command group for printing discovered header/source file lists.
pub mod list;
/// Command group for regenerating CMakeLists.txt files from templates.
pub mod sync;
