//! # SrcSync List Commands
//!
//! File: cli/src/commands/list/mod.rs
//!
//! ## Overview
//!
//! This module implements the `srcsync list` command group, which prints the
//! C++ header or source files discovered under a directory tree without
//! touching any build files. These commands are the quick inspection
//! counterpart to `srcsync sync`: they show exactly the file lists that a
//! sync would substitute into a `CMakeLists.txt`.
//!
//! ## Architecture
//!
//! The group follows the standard subcommand layout:
//! - `headers.rs`: lists `.h` / `.hpp` files (`srcsync list headers <PATH>`)
//! - `sources.rs`: lists `.cpp` files (`srcsync list sources <PATH>`)
//!
//! Both take the root directory as a positional argument — a typed parameter
//! instead of an interactive prompt, so the commands compose in scripts and
//! are testable without simulated standard input.
//!
//! ## Examples
//!
//! ```bash
//! # List all headers under the runtime tree
//! srcsync list headers ./src/runtime
//!
//! # List all sources, with shell-friendly relative paths
//! srcsync list sources ./src/editor
//! ```
//!
use crate::core::error::Result;
use clap::{Parser, Subcommand};

/// Contains the handler and arguments for `srcsync list headers`.
mod headers;
/// Contains the handler and arguments for `srcsync list sources`.
mod sources;

/// Arguments for the `srcsync list` command group. Captures which listing
/// subcommand the user wants to execute.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// The specific list subcommand to execute (headers or sources).
    #[command(subcommand)]
    command: ListCommand,
}

/// The set of valid subcommands under `srcsync list`.
#[derive(Subcommand, Debug)]
enum ListCommand {
    /// Lists `.h` / `.hpp` files under a directory tree.
    Headers(headers::HeadersArgs),
    /// Lists `.cpp` files under a directory tree.
    Sources(sources::SourcesArgs),
}

/// Entry point for the `srcsync list` command group: dispatches to the
/// chosen subcommand handler.
pub fn handle_list(args: ListArgs) -> Result<()> {
    match args.command {
        ListCommand::Headers(args) => headers::handle_headers(args)?,
        ListCommand::Sources(args) => sources::handle_sources(args)?,
    }
    Ok(())
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_headers_subcommand() {
        // Simulate command-line input: `srcsync list headers ./src`
        let args = ListArgs::try_parse_from(["list", "headers", "./src"]).unwrap();
        assert!(matches!(args.command, ListCommand::Headers(_)));
    }

    #[test]
    fn test_parse_sources_subcommand() {
        let args = ListArgs::try_parse_from(["list", "sources", "./src"]).unwrap();
        assert!(matches!(args.command, ListCommand::Sources(_)));
    }

    #[test]
    fn test_missing_path_is_rejected() {
        assert!(ListArgs::try_parse_from(["list", "headers"]).is_err());
    }

    #[test]
    fn test_unknown_subcommand_is_rejected() {
        assert!(ListArgs::try_parse_from(["list", "objects", "./src"]).is_err());
    }
}
