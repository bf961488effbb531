//! # SrcSync Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure components that provide
//! foundational functionality for the SrcSync application: configuration,
//! error management, and the template substitution engine.
//!
//! ## Architecture
//!
//! The core infrastructure consists of three key components:
//! - `config`: Loading and validation of `.srcsync.toml` sync targets
//! - `error`: Error types and error handling utilities
//! - `templating`: Placeholder substitution producing `CMakeLists.txt` files
//!
//! ## Usage
//!
//! Core infrastructure is imported by command handlers:
//!
//! ```rust
//! use crate::core::config; // For loading sync targets
//! use crate::core::error::{Result, SrcsyncError}; // For error handling
//! use crate::core::templating; // For regenerating CMakeLists files
//! ```
//!
pub mod config;
pub mod error;
pub mod templating;
