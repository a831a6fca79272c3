//! Indented directory listing.

use crate::engine::walk_entries;
use crate::error::RepomdError;
use crate::filter::IgnoreRuleSet;
use crate::types::PathEntry;
use std::path::Path;

/// Indentation added per nesting level.
pub const INDENT: &str = "  ";

/// Builds the tree lines from entries produced by a pre-order walk.
///
/// Each entry becomes one line, indented by its depth. Directories get a
/// trailing `/`.
pub(crate) fn build_tree_from_entries(entries: &[PathEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|entry| {
            let suffix = if entry.is_dir() { "/" } else { "" };
            format!("{}{}{}", INDENT.repeat(entry.depth), entry.name(), suffix)
        })
        .collect()
}

/// Walks `root` and renders every entry not excluded by `rules`.
///
/// # Errors
///
/// Fails as a whole if `root` is not a directory or any directory under it
/// cannot be read; no partial tree is returned.
pub fn render_tree(root: impl AsRef<Path>, rules: &IgnoreRuleSet) -> Result<Vec<String>, RepomdError> {
    let entries = walk_entries(root.as_ref(), rules, false)?;
    Ok(build_tree_from_entries(&entries))
}
