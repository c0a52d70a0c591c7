//! Source-unit discovery by file extension.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// Extensions scanned when none are configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &["sv"];

/// Find all source files under `root` (recursively) with one of `extensions`.
///
/// A `root` that is a file is returned as-is. The result is sorted and
/// deduplicated so output is deterministic.
pub fn find_sources<S: AsRef<str>>(root: &Path, extensions: &[S]) -> Result<Vec<PathBuf>> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }
    if !root.is_dir() {
        bail!("source root not found: {}", root.display());
    }

    let base = glob::Pattern::escape(&root.to_string_lossy());
    let mut files = Vec::new();
    for ext in extensions {
        let ext = ext.as_ref().trim_start_matches('.');
        let pattern = format!("{}/**/*.{}", base, ext);
        let entries =
            glob::glob(&pattern).with_context(|| format!("invalid glob pattern: {}", pattern))?;
        for entry in entries {
            match entry {
                Ok(path) if path.is_file() => files.push(path),
                Ok(_) => {}
                Err(e) => log::warn!("skipping unreadable entry: {}", e),
            }
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}
