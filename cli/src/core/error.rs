//! # SrcSync Error Types
//!
//! File: cli/src/core/error.rs
//!
//! ## Overview
//!
//! This module defines the error types and error handling mechanisms used
//! throughout the SrcSync application. It provides a consistent approach to
//! error management with detailed error information and context.
//!
//! ## Architecture
//!
//! The error system consists of two main components:
//! - `SrcsyncError`: A custom error enum using `thiserror` for specific error types
//! - `Result<T>`: A type alias for `anyhow::Result<T>` for flexible error handling
//!
//! The error types cover the domains the tool touches:
//! - Configuration errors (malformed or missing `.srcsync.toml` content)
//! - Filesystem errors (traversal, read, write failures)
//! - Invalid user-supplied paths (the "Invalid folder path" case)
//! - Argument parsing errors
//!
//! ## Examples
//!
//! Using the error system:
//!
//! ```rust
//! // Return a specific error type
//! if !root.is_dir() {
//!     anyhow::bail!(SrcsyncError::InvalidPath(format!(
//!         "Invalid folder path: {}",
//!         root.display()
//!     )));
//! }
//!
//! // Add context to errors using anyhow
//! let content = fs::read_to_string(&path)
//!     .with_context(|| format!("Failed to read file: {}", path.display()))?;
//! ```
//!
//! Note that a missing template file is deliberately *not* an error: the sync
//! operation models it as an explicit `SyncOutcome::TemplateMissing` (see
//! `core::templating`), preserving the tool's best-effort behavior.
//!
use thiserror::Error;

/// Custom error type for the SrcSync application.
#[derive(Error, Debug)]
pub enum SrcsyncError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Filesystem error: {0}")]
    FileSystem(String),

    /// A user-supplied root directory does not exist or is not a directory.
    /// The message keeps the "Invalid folder path" wording users of the
    /// original regeneration scripts expect to see.
    #[error("{0}")]
    InvalidPath(String),

    #[error("Argument parsing error: {0}")]
    ArgumentParsing(String),
}

/// Type alias for Result using anyhow::Error for broad compatibility.
/// Anyhow allows for easy context addition and flexible error handling.
pub type Result<T> = anyhow::Result<T>;
