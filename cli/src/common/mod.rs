//! # SrcSync Common Utilities
//!
//! File: cli/src/common/mod.rs
//!
//! ## Overview
//!
//! This module aggregates shared utilities used across the SrcSync command
//! handlers. Currently that is the filesystem layer: file I/O wrappers and
//! the recursive file lister.
//!
//! ## Architecture
//!
//! Utilities live in focused submodules rather than one grab-bag file, so a
//! command handler imports only what it needs:
//!
//! ```rust
//! use crate::common::fs::lister; // file discovery
//! use crate::common::fs::io;     // read/write helpers
//! ```
//!

/// Utilities for filesystem operations (I/O wrappers, file listing).
pub mod fs;
