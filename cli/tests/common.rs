//! # SrcSync CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! This module provides shared utility functions used across the integration
//! test files (`list.rs`, `sync.rs`, `main_tests.rs`), avoiding duplication
//! in the test suite.
//!
//! Integration tests live in `cli/tests/`; each non-module `.rs` file there
//! is compiled as a separate test crate running the real `srcsync` binary.
//!

// Allow potentially unused code in this common module, as different test
// files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::Path;

/// Creates an `assert_cmd::Command` pointing at the compiled `srcsync`
/// binary target for the current test run.
///
/// ## Panics
/// Panics if the binary cannot be found via `Command::cargo_bin`.
pub fn srcsync_cmd() -> Command {
    Command::cargo_bin("srcsync").expect("Failed to find srcsync binary for testing")
}

/// Creates a file (and its parent directories) with the given content.
pub fn create_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directories");
    }
    fs::write(path, content).expect("Failed to write test file");
}

/// Creates an empty file (and its parent directories).
pub fn touch(path: &Path) {
    create_file(path, "");
}
