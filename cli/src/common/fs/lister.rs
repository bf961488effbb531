//! # SrcSync File Lister
//!
//! File: cli/src/common/fs/lister.rs
//!
//! ## Overview
//!
//! This module implements the recursive file lister that discovers C++
//! header and source files under a directory tree. It is the data source for
//! both the `list` commands (which print what was found) and the template
//! substitutor (which injects the lists into `CMakeLists.txt`).
//!
//! ## Architecture
//!
//! A single traversal routine, `list_files`, walks the tree with `walkdir`
//! and applies three transformations to every matching file path:
//! 1. Normalize path separators: every backslash becomes a forward slash,
//!    so generated lists are identical across platforms.
//! 2. Strip the root prefix: `<root>/` is removed from the front of the path
//!    when present, yielding root-relative paths. When the prefix does not
//!    match (unusual root spellings), the path is left unchanged — a silent
//!    no-op, not an error.
//! 3. Prepend the optional caller-supplied prefix (e.g. `include/`).
//!
//! Matching is a case-sensitive suffix test against a fixed extension set.
//! No sorting is applied: the result order is whatever order the traversal
//! yields, which is not guaranteed stable across filesystems.
//!
//! ## Examples
//!
//! ```rust
//! use crate::common::fs::lister;
//! use std::path::Path;
//!
//! # fn run_example() -> crate::core::error::Result<()> {
//! let headers = lister::find_header_files(Path::new("./src/runtime"), "")?;
//! for header in &headers {
//!     println!("{}", header); // e.g. "function/object.h"
//! }
//! # Ok(())
//! # }
//! ```
//!
use crate::core::error::Result;
use anyhow::Context;
use std::path::Path;
use tracing::trace;
use walkdir::WalkDir;

/// Extensions recognized as C++ header files. Suffix match, case-sensitive.
pub const HEADER_EXTENSIONS: &[&str] = &[".h", ".hpp"];

/// Extensions recognized as C++ source files. Suffix match, case-sensitive.
pub const SOURCE_EXTENSIONS: &[&str] = &[".cpp"];

/// Recursively lists files under `root` whose names end in one of
/// `extensions`, as normalized, root-relative, prefix-decorated strings.
///
/// ## Arguments
///
/// * `root` - Directory to traverse (recursive descent, no depth limit, no
///   symlink-cycle protection).
/// * `extensions` - Suffixes to match, including the leading dot.
/// * `prefix_to_add` - String prepended to every returned path; pass `""`
///   for plain root-relative paths.
///
/// ## Returns
///
/// * `Result<Vec<String>>` - One entry per matching file, in traversal
///   order. The length equals the number of matching files.
///
/// ## Errors
///
/// Returns an `Err` if the root does not exist or an entry cannot be read
/// during traversal. Callers that want the friendlier "Invalid folder path"
/// message should validate `root.is_dir()` before invoking.
pub fn list_files(root: &Path, extensions: &[&str], prefix_to_add: &str) -> Result<Vec<String>> {
    // The strip prefix is computed from the root exactly as given (after
    // separator normalization), mirroring how callers spell their roots.
    let root_str = root.to_string_lossy().replace('\\', "/");
    let strip_prefix = format!("{}/", root_str);

    let mut matches = Vec::new();
    for entry_result in WalkDir::new(root) {
        let entry = entry_result
            .with_context(|| format!("Failed to traverse directory '{}'", root.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy();
        if !extensions.iter().any(|ext| file_name.ends_with(ext)) {
            continue;
        }

        // Normalize separators first, then strip the root prefix. A root
        // spelling that does not prefix-match is left as-is.
        let full_path = entry.path().to_string_lossy().replace('\\', "/");
        let relative = full_path.strip_prefix(&strip_prefix).unwrap_or(&full_path);
        trace!("Matched file: {}", relative);
        matches.push(format!("{}{}", prefix_to_add, relative));
    }
    Ok(matches)
}

/// Lists `.h` / `.hpp` files under `root`. See [`list_files`].
pub fn find_header_files(root: &Path, prefix_to_add: &str) -> Result<Vec<String>> {
    list_files(root, HEADER_EXTENSIONS, prefix_to_add)
}

/// Lists `.cpp` files under `root`. See [`list_files`].
pub fn find_source_files(root: &Path, prefix_to_add: &str) -> Result<Vec<String>> {
    list_files(root, SOURCE_EXTENSIONS, prefix_to_add)
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "").unwrap();
    }

    #[test]
    fn test_headers_filtered_by_extension() -> Result<()> {
        let dir = tempdir()?;
        touch(&dir.path().join("a.h"));
        touch(&dir.path().join("b.hpp"));
        touch(&dir.path().join("c.cpp"));
        touch(&dir.path().join("notes.txt"));
        touch(&dir.path().join("d.hxx"));

        let mut headers = find_header_files(dir.path(), "")?;
        headers.sort(); // traversal order is unspecified, sort for assertion
        assert_eq!(headers, vec!["a.h".to_string(), "b.hpp".to_string()]);
        Ok(())
    }

    #[test]
    fn test_sources_filtered_by_extension() -> Result<()> {
        let dir = tempdir()?;
        touch(&dir.path().join("main.cpp"));
        touch(&dir.path().join("main.h"));
        touch(&dir.path().join("main.c"));

        let sources = find_source_files(dir.path(), "")?;
        assert_eq!(sources, vec!["main.cpp".to_string()]);
        Ok(())
    }

    #[test]
    fn test_extension_match_is_case_sensitive() -> Result<()> {
        let dir = tempdir()?;
        touch(&dir.path().join("shouty.HPP"));
        touch(&dir.path().join("quiet.hpp"));

        let headers = find_header_files(dir.path(), "")?;
        assert_eq!(headers, vec!["quiet.hpp".to_string()]);
        Ok(())
    }

    #[test]
    fn test_recursive_descent_yields_relative_paths() -> Result<()> {
        let dir = tempdir()?;
        touch(&dir.path().join("a.h"));
        touch(&dir.path().join("sub/deeper/b.hpp"));

        let headers = find_header_files(dir.path(), "")?;
        assert_eq!(headers.len(), 2);
        assert!(headers.contains(&"a.h".to_string()));
        assert!(headers.contains(&"sub/deeper/b.hpp".to_string()));
        // Paths are root-relative and use forward slashes only.
        for header in &headers {
            assert!(!header.contains('\\'));
            assert!(!header.starts_with('/'));
        }
        Ok(())
    }

    #[test]
    fn test_prefix_is_prepended() -> Result<()> {
        let dir = tempdir()?;
        touch(&dir.path().join("core/object.h"));

        let headers = find_header_files(dir.path(), "include/")?;
        assert_eq!(headers, vec!["include/core/object.h".to_string()]);
        Ok(())
    }

    #[test]
    fn test_empty_directory_yields_empty_list() -> Result<()> {
        let dir = tempdir()?;
        assert!(find_header_files(dir.path(), "")?.is_empty());
        assert!(find_source_files(dir.path(), "")?.is_empty());
        Ok(())
    }

    #[test]
    fn test_nonexistent_root_is_an_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("not-here");
        let result = find_header_files(&missing, "");
        assert!(result.is_err());
    }

    #[test]
    fn test_count_matches_file_count() -> Result<()> {
        let dir = tempdir()?;
        for i in 0..5 {
            touch(&dir.path().join(format!("mod_{}/impl.cpp", i)));
            touch(&dir.path().join(format!("mod_{}/impl.h", i)));
        }
        assert_eq!(find_source_files(dir.path(), "")?.len(), 5);
        assert_eq!(find_header_files(dir.path(), "")?.len(), 5);
        Ok(())
    }
}
