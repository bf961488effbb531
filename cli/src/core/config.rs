//! # SrcSync Configuration
//!
//! File: cli/src/core/config.rs
//!
//! ## Overview
//!
//! This module handles loading and validating the project configuration for
//! SrcSync. The configuration describes one or more *sync targets*: project
//! directories whose `CMakeLists.txt` should be regenerated from a
//! `CMakeLists.txt.template`, together with the directories to scan for
//! header and source files and optional path prefixes to prepend to every
//! discovered file.
//!
//! ## Architecture
//!
//! Configuration lives in a `.srcsync.toml` file at the root of the C++
//! project. Loading follows these steps:
//! 1. Walk up from the current working directory looking for `.srcsync.toml`,
//!    stopping at a `.git` boundary (so a config in an unrelated parent
//!    checkout is never picked up).
//! 2. Parse the file with serde/toml (`deny_unknown_fields` so typos fail
//!    loudly instead of being ignored).
//! 3. Expand `~` in all configured paths via `shellexpand`.
//! 4. Validate the result (at least one target, non-empty roots).
//!
//! ## Example `.srcsync.toml`
//!
//! ```toml
//! [[targets]]
//! root = "./src/runtime"
//!
//! [[targets]]
//! root = "./src/editor"
//! header_root = "./src/editor/include"
//! src_root = "./src/editor/src"
//! header_prefix = "include/"
//! source_prefix = "src/"
//! ```
//!
//! `header_root` and `src_root` default to `root` when omitted; the prefixes
//! default to empty strings. This replaces the original workflow of editing a
//! hardcoded path inside a regeneration script for every project directory.
//!
use crate::core::error::{Result, SrcsyncError};
use anyhow::Context;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Filename of the per-project configuration file, searched for in the
/// current directory and its ancestors.
pub const PROJECT_CONFIG_FILENAME: &str = ".srcsync.toml";

/// Represents the main configuration structure, loaded from `.srcsync.toml`.
#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields)] // Error if unknown fields are in the TOML
pub struct Config {
    /// The list of sync targets to regenerate, in file order.
    #[serde(default)]
    pub targets: Vec<TargetConfig>,
}

/// Configuration for a single sync target (one directory holding a
/// `CMakeLists.txt.template`).
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TargetConfig {
    /// Directory containing the template; the regenerated `CMakeLists.txt`
    /// is written next to it. Can use `~`, which will be expanded.
    pub root: String,
    /// Directory to scan for `.h` / `.hpp` files. Defaults to `root`.
    #[serde(default)]
    pub header_root: Option<String>,
    /// Directory to scan for `.cpp` files. Defaults to `root`.
    #[serde(default)]
    pub src_root: Option<String>,
    /// Prefix prepended to every discovered header path (e.g. `include/`).
    #[serde(default)]
    pub header_prefix: String,
    /// Prefix prepended to every discovered source path (e.g. `src/`).
    #[serde(default)]
    pub source_prefix: String,
}

impl TargetConfig {
    /// The effective header scan root (falls back to `root`).
    pub fn header_root(&self) -> &str {
        self.header_root.as_deref().unwrap_or(&self.root)
    }

    /// The effective source scan root (falls back to `root`).
    pub fn src_root(&self) -> &str {
        self.src_root.as_deref().unwrap_or(&self.root)
    }
}

/// Loads the project configuration from the nearest `.srcsync.toml`.
///
/// ## Returns
///
/// * `Result<Config>` - The parsed, expanded, validated configuration.
///
/// ## Errors
///
/// Returns an `Err` if no configuration file is found, if it cannot be read
/// or parsed, or if validation fails.
pub fn load_config() -> Result<Config> {
    let config_path = find_project_config_path()?.ok_or_else(|| {
        SrcsyncError::Config(format!(
            "No {} found in the current directory or its ancestors. \
             Create one, or pass a target explicitly with --root.",
            PROJECT_CONFIG_FILENAME
        ))
    })?;
    info!("Loading configuration from: {}", config_path.display());
    let mut config = load_config_from_path(&config_path)?;
    expand_config_paths(&mut config).context("Failed to expand paths in configuration")?;
    validate_config(&config).context("Configuration validation failed")?;
    debug!("Final loaded configuration: {:?}", config);
    Ok(config)
}

/// Reads and parses a configuration file at an explicit path.
pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read configuration file: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML from file: {}", path.display()))
}

/// Walks up from the current directory looking for `.srcsync.toml`.
///
/// Stops the search when a `.git` directory is encountered without a config
/// file beside it, so the search never escapes the current repository.
fn find_project_config_path() -> Result<Option<PathBuf>> {
    let current_dir = std::env::current_dir().context("Failed to get current directory")?;
    let mut path: &Path = &current_dir;
    loop {
        let project_config = path.join(PROJECT_CONFIG_FILENAME);
        let git_dir = path.join(".git");
        if project_config.is_file() {
            return Ok(Some(project_config));
        }
        if git_dir.is_dir() {
            debug!(
                "Found .git directory at {}, stopping config search.",
                path.display()
            );
            return Ok(None);
        }
        match path.parent() {
            Some(parent) => path = parent,
            None => break,
        }
    }
    Ok(None)
}

/// Expands `~` (and environment variables) in every configured path.
fn expand_config_paths(config: &mut Config) -> Result<()> {
    for target in &mut config.targets {
        target.root = expand_path(&target.root)?;
        if let Some(header_root) = &target.header_root {
            target.header_root = Some(expand_path(header_root)?);
        }
        if let Some(src_root) = &target.src_root {
            target.src_root = Some(expand_path(src_root)?);
        }
        // Prefixes are verbatim text inserted into the generated file,
        // never filesystem paths, so they are not expanded.
    }
    Ok(())
}

fn expand_path(raw: &str) -> Result<String> {
    let expanded = shellexpand::full(raw)
        .map_err(|e| SrcsyncError::Config(format!("Cannot expand path '{}': {}", raw, e)))?;
    Ok(expanded.into_owned())
}

/// Validates the loaded configuration before it is acted upon.
fn validate_config(config: &Config) -> Result<()> {
    if config.targets.is_empty() {
        anyhow::bail!(SrcsyncError::Config(format!(
            "{} defines no [[targets]] entries",
            PROJECT_CONFIG_FILENAME
        )));
    }
    for (index, target) in config.targets.iter().enumerate() {
        if target.root.trim().is_empty() {
            anyhow::bail!(SrcsyncError::Config(format!(
                "targets[{}] has an empty 'root' path",
                index
            )));
        }
    }
    Ok(())
}
