//! # SrcSync Sync Command
//!
//! File: cli/src/commands/sync/mod.rs
//!
//! ## Overview
//!
//! This module implements `srcsync sync`, the command that regenerates
//! `CMakeLists.txt` files from their `CMakeLists.txt.template` counterparts.
//! For every target it discovers the header and source files under the
//! configured scan roots and substitutes them at the placeholder tokens
//! (see `core::templating`).
//!
//! ## Architecture
//!
//! Targets come from one of two places:
//! - **Flags**: `--root` (plus optional `--header-root`, `--src-root`,
//!   `--header-prefix`, `--source-prefix`) describes a single ad-hoc target.
//! - **Config**: with no `--root`, every `[[targets]]` entry of the nearest
//!   `.srcsync.toml` is synced in file order.
//!
//! Outcome reporting distinguishes a regenerated file ("Replace success.")
//! from a directory that holds no template (a skip notice). A root that is
//! not a directory is an error; targets are processed sequentially and the
//! first hard error aborts the run.
//!
//! ## Examples
//!
//! ```bash
//! # Regenerate one directory in place
//! srcsync sync --root ./src/runtime
//!
//! # Separate include/ and src/ trees with list prefixes
//! srcsync sync --root ./module \
//!     --header-root ./module/include --header-prefix include/ \
//!     --src-root ./module/src --source-prefix src/
//!
//! # Regenerate everything declared in .srcsync.toml
//! srcsync sync
//! ```
//!
use crate::core::config::{self, TargetConfig};
use crate::core::error::Result;
use crate::core::templating::{self, SyncOutcome, SyncTarget};
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info};

/// Arguments for the `srcsync sync` command.
#[derive(Parser, Debug)]
pub struct SyncArgs {
    /// Directory containing CMakeLists.txt.template. When omitted, targets
    /// are loaded from the nearest .srcsync.toml instead.
    #[arg(long)]
    root: Option<PathBuf>,

    /// Directory to scan for .h / .hpp files (defaults to --root).
    #[arg(long, requires = "root")]
    header_root: Option<PathBuf>,

    /// Directory to scan for .cpp files (defaults to --root).
    #[arg(long, requires = "root")]
    src_root: Option<PathBuf>,

    /// Prefix prepended to every listed header path.
    #[arg(long, default_value = "", requires = "root")]
    header_prefix: String,

    /// Prefix prepended to every listed source path.
    #[arg(long, default_value = "", requires = "root")]
    source_prefix: String,
}

/// Entry point for `srcsync sync`: resolves the target list and regenerates
/// each one, reporting the per-target outcome on stdout.
pub fn handle_sync(args: SyncArgs) -> Result<()> {
    info!("Handling sync command with args: {:?}", args);

    let targets = resolve_targets(args)?;
    debug!("Resolved {} sync target(s).", targets.len());

    for target in &targets {
        match templating::sync_target(target)? {
            SyncOutcome::Written(path) => {
                info!("Wrote {}", path.display());
                println!("Replace success.");
            }
            SyncOutcome::TemplateMissing => {
                println!(
                    "No {} in '{}', skipping.",
                    templating::TEMPLATE_FILENAME,
                    target.cmakelist_root.display()
                );
            }
        }
    }
    Ok(())
}

/// Builds the list of targets to sync, either the single flag-described one
/// or every entry from the project configuration.
fn resolve_targets(args: SyncArgs) -> Result<Vec<SyncTarget>> {
    if let Some(root) = args.root {
        let mut target = SyncTarget::for_root(root);
        if let Some(header_root) = args.header_root {
            target.header_root = header_root;
        }
        if let Some(src_root) = args.src_root {
            target.src_root = src_root;
        }
        target.header_prefix = args.header_prefix;
        target.source_prefix = args.source_prefix;
        return Ok(vec![target]);
    }

    let cfg = config::load_config()?;
    Ok(cfg.targets.iter().map(target_from_config).collect())
}

/// Converts a validated config entry into a resolved sync target.
fn target_from_config(target: &TargetConfig) -> SyncTarget {
    SyncTarget {
        cmakelist_root: PathBuf::from(&target.root),
        header_root: PathBuf::from(target.header_root()),
        src_root: PathBuf::from(target.src_root()),
        header_prefix: target.header_prefix.clone(),
        source_prefix: target.source_prefix.clone(),
    }
}
