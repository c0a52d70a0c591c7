//! Summary index: one table row per generated page.

use crate::labels::Labels;
use crate::render::markdown::table_cell;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Longest description shown in the index, ellipsis included.
pub const MAX_DESCRIPTION: usize = 120;
const ELLIPSIS: &str = "...";

/// One generated page as listed in the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// Page name (source file stem)
    pub name: String,
    /// Link to the page, relative to the index
    pub page: String,
    /// Short description, `None` for undocumented units
    pub summary: Option<String>,
    /// Source file name shown as link text
    pub source_name: String,
    pub source_href: String,
}

/// Shorten `text` to [`MAX_DESCRIPTION`] characters, ending in `...` when cut.
pub fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_DESCRIPTION {
        return text.to_string();
    }
    let keep = MAX_DESCRIPTION - ELLIPSIS.len();
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Render the index page. Rows are sorted by page name.
pub fn render_index(entries: &[IndexEntry], l: &Labels) -> String {
    let mut sorted: Vec<&IndexEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    let mut out = String::new();
    out.push_str(&format!("# {}\n\n## {}\n\n", l.index_title, l.index_list));
    out.push_str(&format!(
        "| {} | {} | {} |\n",
        l.col_module, l.col_description, l.col_source
    ));
    out.push_str("|--------------|--------|----------------|\n");

    for entry in sorted {
        let desc = match entry.summary {
            Some(ref s) => table_cell(&truncate(s)),
            None => "-".to_string(),
        };
        out.push_str(&format!(
            "| [{}]({}) | {} | [{}]({}) |\n",
            entry.name, entry.page, desc, entry.source_name, entry.source_href
        ));
    }
    out
}

/// Link target for a source file.
///
/// With a base URL the path relative to the source root is appended to it;
/// otherwise the link is relative to the directory holding the index.
pub fn source_href(
    source: &Path,
    source_root: &Path,
    index_dir: &Path,
    base_url: Option<&str>,
) -> String {
    if let Some(base) = base_url {
        let mut rel = source.strip_prefix(source_root).unwrap_or(source);
        // A single-file root strips to nothing
        if rel.as_os_str().is_empty() {
            rel = source.file_name().map(Path::new).unwrap_or(source);
        }
        return format!("{}/{}", base.trim_end_matches('/'), to_slashes(rel));
    }
    match (resolve(index_dir), resolve(source)) {
        (Some(from), Some(to)) => to_slashes(&relative_path(&from, &to)),
        _ => to_slashes(source),
    }
}

/// Absolute path with `.` and `..` resolved.
fn resolve(path: &Path) -> Option<PathBuf> {
    fs::canonicalize(path)
        .or_else(|_| std::path::absolute(path))
        .ok()
}

/// Path from directory `from` to `to`; both must be absolute.
fn relative_path(from: &Path, to: &Path) -> PathBuf {
    let from: Vec<Component> = from.components().collect();
    let to: Vec<Component> = to.components().collect();
    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut rel = PathBuf::new();
    for _ in common..from.len() {
        rel.push("..");
    }
    for c in &to[common..] {
        rel.push(c.as_os_str());
    }
    rel
}

/// Markdown links always use forward slashes.
fn to_slashes(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
