//! # SrcSync Main Entry Point
//!
//! File: cli/src/main.rs
//!
//! ## Overview
//!
//! This file serves as the main entry point for the SrcSync CLI application.
//! It handles:
//! - Command-line argument parsing using Clap
//! - Setting up the logging system based on verbosity flags
//! - Routing execution to the appropriate command handlers
//!
//! ## Architecture
//!
//! The application follows a modular command structure:
//! - Each top-level command (`list`, `sync`) is a variant in the `Commands`
//!   enum, holding that command's argument struct
//! - Commands are mapped to handler functions in their respective modules
//! - All errors are propagated to this level for consistent handling
//!
//! ## Examples
//!
//! Basic SrcSync usage:
//!
//! ```bash
//! # Get help
//! srcsync --help
//!
//! # List the headers under a tree
//! srcsync list headers ./src/runtime
//!
//! # Regenerate CMakeLists.txt files with debug logging
//! srcsync -vv sync
//! ```
//!
//! Command processing flow:
//! 1. Parse command-line args via Clap
//! 2. Configure logging based on verbosity level
//! 3. Route to the appropriate command handler
//! 4. Format and display any errors that occur
//!
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

// Declare the top-level modules of the CLI crate.
mod commands; // Handles specific command logic (list, sync).
mod common; // Contains shared utilities (fs helpers, file lister).
mod core; // Core infrastructure (errors, config, template substitution).

/// Defines the top-level command-line arguments structure using Clap's derive macros.
#[derive(Parser, Debug)]
#[command(
    name = "srcsync",
    about = "🔄 SrcSync ⚙️: CMake Source List Regeneration for C++ Projects",
    long_about = "List C++ header/source files and regenerate CMakeLists.txt files from\n\
                  CMakeLists.txt.template by substituting discovered file lists at the\n\
                  <all_headers_place_holder> and <all_sources_place_holder> tokens.",
    propagate_version = true,
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

/// Enum defining all available top-level commands.
#[derive(Parser, Debug)]
enum Commands {
    #[command(alias = "l")]
    List(commands::list::ListArgs),
    #[command(alias = "s")]
    Sync(commands::sync::SyncArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();

    tracing::debug!("Parsed CLI arguments: {:?}", cli);

    let command_result = match cli.command {
        Commands::List(args) => commands::list::handle_list(args),
        Commands::Sync(args) => commands::sync::handle_sync(args),
    };

    if let Err(e) = command_result {
        tracing::error!("Command execution failed: {:?}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

// --- Basic Integration Tests ---
#[cfg(test)]
mod tests {
    use assert_cmd::Command;
    use predicates::prelude::*;
    fn srcsync_cmd() -> Command {
        Command::cargo_bin("srcsync").expect("Failed to find srcsync binary for testing")
    }
    #[test]
    fn test_main_help_flag() {
        srcsync_cmd().arg("--help").assert().success();
    }
    #[test]
    fn test_main_version_flag() {
        srcsync_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }
}
