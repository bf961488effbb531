//! # SrcSync Template Substitution
//!
//! File: cli/src/core/templating.rs
//!
//! ## Overview
//!
//! This module implements the template substitution at the heart of SrcSync:
//! regenerating a `CMakeLists.txt` from a `CMakeLists.txt.template` by
//! replacing fixed placeholder tokens with discovered file lists.
//!
//! ## Architecture
//!
//! Substitution is purely textual and follows these steps:
//! 1. Read the full text of `CMakeLists.txt.template` in the target root.
//!    If the template does not exist, return `SyncOutcome::TemplateMissing`
//!    (a skip, not an error — directories without a template are simply not
//!    managed by this tool).
//! 2. If `<all_headers_place_holder>` occurs anywhere in the text, list the
//!    `.h` / `.hpp` files under the header root, join them with newlines,
//!    indent every line with four spaces, and replace *every* occurrence of
//!    the token with that block.
//! 3. Independently, do the same for `<all_sources_place_holder>` with the
//!    `.cpp` files under the source root.
//! 4. Write the result to `CMakeLists.txt` next to the template, overwriting
//!    any existing file. When neither token is present the output is a
//!    byte-identical copy of the template.
//!
//! There is no template language here: the tokens are not CMake syntax and
//! not a templating DSL, so replacement is a plain `str::replace`. The
//! operation is idempotent — re-running against unchanged inputs produces
//! byte-identical output.
//!
//! ## Examples
//!
//! ```rust
//! use crate::core::templating::{self, SyncOutcome, SyncTarget};
//!
//! # fn run_example() -> crate::core::error::Result<()> {
//! let target = SyncTarget::for_root("./src/runtime");
//! match templating::sync_target(&target)? {
//!     SyncOutcome::Written(path) => println!("Regenerated {}", path.display()),
//!     SyncOutcome::TemplateMissing => println!("Nothing to do."),
//! }
//! # Ok(())
//! # }
//! ```
//!
use crate::common::fs::{io, lister};
use crate::core::error::{Result, SrcsyncError};
use std::path::PathBuf;
use tracing::{debug, info};

/// Filename of the template file looked up inside a target root.
pub const TEMPLATE_FILENAME: &str = "CMakeLists.txt.template";

/// Filename of the regenerated output, written next to the template.
pub const OUTPUT_FILENAME: &str = "CMakeLists.txt";

/// Token replaced by the discovered header file list.
pub const HEADERS_PLACEHOLDER: &str = "<all_headers_place_holder>";

/// Token replaced by the discovered source file list.
pub const SOURCES_PLACEHOLDER: &str = "<all_sources_place_holder>";

/// Indentation applied to every generated list line, matching the
/// conventional indentation of file lists inside CMake `set(...)` blocks.
const LIST_INDENT: &str = "    ";

/// Fully-resolved description of one directory to regenerate.
///
/// This is the typed replacement for the original workflow's positional
/// arguments and hardcoded paths; it is built either from CLI flags or from
/// a `.srcsync.toml` target entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncTarget {
    /// Directory containing `CMakeLists.txt.template`; the output is written
    /// into this same directory.
    pub cmakelist_root: PathBuf,
    /// Directory scanned for `.h` / `.hpp` files.
    pub header_root: PathBuf,
    /// Directory scanned for `.cpp` files.
    pub src_root: PathBuf,
    /// Prefix prepended to every listed header path.
    pub header_prefix: String,
    /// Prefix prepended to every listed source path.
    pub source_prefix: String,
}

impl SyncTarget {
    /// Builds a target whose header and source scan roots are the template
    /// root itself, with no prefixes — the common single-directory layout.
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            header_root: root.clone(),
            src_root: root.clone(),
            cmakelist_root: root,
            header_prefix: String::new(),
            source_prefix: String::new(),
        }
    }
}

/// Outcome of a sync attempt against one target.
///
/// A missing template is an explicit, inspectable outcome rather than a
/// silent early return, so callers (and tests) can tell "regenerated" apart
/// from "nothing to do".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The output file was written (path included for reporting).
    Written(PathBuf),
    /// No `CMakeLists.txt.template` exists in the target root; nothing was
    /// read or written.
    TemplateMissing,
}

/// Regenerates the `CMakeLists.txt` for a single target.
///
/// ## Arguments
///
/// * `target` - The resolved target describing the template root, scan
///   roots, and path prefixes.
///
/// ## Returns
///
/// * `Result<SyncOutcome>` - `Written` with the output path on success,
///   `TemplateMissing` when the root holds no template.
///
/// ## Errors
///
/// Returns an `Err` if the target root is not a directory, if the template
/// cannot be read, if a scan root cannot be traversed, or if the output file
/// cannot be written. No attempt is made to validate that the generated text
/// is well-formed CMake — that is the build system's concern.
pub fn sync_target(target: &SyncTarget) -> Result<SyncOutcome> {
    if !target.cmakelist_root.is_dir() {
        anyhow::bail!(SrcsyncError::InvalidPath(format!(
            "Invalid folder path: {}",
            target.cmakelist_root.display()
        )));
    }

    let template_path = target.cmakelist_root.join(TEMPLATE_FILENAME);
    if !template_path.is_file() {
        debug!(
            "No {} in '{}', nothing to regenerate.",
            TEMPLATE_FILENAME,
            target.cmakelist_root.display()
        );
        return Ok(SyncOutcome::TemplateMissing);
    }

    // Read the whole template up front; substitution happens in memory and
    // the output is always rewritten from scratch in a single write.
    let mut content = io::read_file_to_string(&template_path)?;

    if content.contains(HEADERS_PLACEHOLDER) {
        let headers = lister::find_header_files(&target.header_root, &target.header_prefix)?;
        debug!("Substituting {} header file(s).", headers.len());
        content = content.replace(HEADERS_PLACEHOLDER, &indent_join(&headers));
    }

    // Independent of the headers token, not exclusive with it.
    if content.contains(SOURCES_PLACEHOLDER) {
        let sources = lister::find_source_files(&target.src_root, &target.source_prefix)?;
        debug!("Substituting {} source file(s).", sources.len());
        content = content.replace(SOURCES_PLACEHOLDER, &indent_join(&sources));
    }

    let output_path = target.cmakelist_root.join(OUTPUT_FILENAME);
    io::write_string_to_file(&output_path, &content)?;
    info!("Regenerated {}", output_path.display());
    Ok(SyncOutcome::Written(output_path))
}

/// Joins paths into the replacement block: one path per line, each indented
/// with four spaces. An empty list yields an empty string (the token simply
/// disappears).
fn indent_join(paths: &[String]) -> String {
    paths
        .iter()
        .map(|path| format!("{}{}", LIST_INDENT, path))
        .collect::<Vec<_>>()
        .join("\n")
}
