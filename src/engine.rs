use crate::error::RepomdError;
use crate::filter::{IgnoreRuleSet, is_includable, is_priority, language_label};
use crate::options::{BinaryDetection, RepomdOptions};
use crate::tree::build_tree_from_entries;
use crate::types::{ContentBody, EntryKind, FileEntry, PathEntry, RepomdResult};
use ignore::WalkBuilder;
use std::fs;
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;
const BINARY_SNIFF_LEN: usize = 8192;
struct Walker {
    inner: ignore::Walk,
    root: PathBuf,
}
impl Walker {
    fn new(root: &Path, rules: &IgnoreRuleSet, follow_links: bool) -> Result<Self, RepomdError> {
        let root = match root.canonicalize() {
            Ok(root) if root.is_dir() => root,
            _ => return Err(RepomdError::InvalidRoot(root.to_path_buf())),
        };
        let mut builder = WalkBuilder::new(&root);
        builder
            .standard_filters(false)
            .follow_links(follow_links)
            .sort_by_file_name(|a, b| a.cmp(b));
        if !rules.is_empty() {
            let rules = rules.clone();
            let base = root.clone();
            builder.filter_entry(move |entry| {
                let relative = entry.path().strip_prefix(&base).unwrap_or(entry.path());
                let keep = relative.as_os_str().is_empty() || !rules.is_ignored(relative);
                #[cfg(feature = "logging")]
                if !keep {
                    tracing::trace!("Pruned {}", relative.display());
                }
                keep
            });
        }
        Ok(Self {
            inner: builder.build(),
            root,
        })
    }
    fn into_iter(self) -> impl Iterator<Item = Result<PathEntry, RepomdError>> {
        let root = self.root;
        self.inner.filter_map(move |result| match result {
            Ok(entry) if entry.depth() == 0 => None,
            Ok(entry) => {
                let kind = match entry.file_type() {
                    Some(ft) if ft.is_dir() => EntryKind::Directory,
                    _ => EntryKind::File,
                };
                let relative = entry
                    .path()
                    .strip_prefix(&root)
                    .unwrap_or(entry.path())
                    .to_path_buf();
                Some(Ok(PathEntry {
                    path: entry.path().to_path_buf(),
                    relative,
                    kind,
                    depth: entry.depth() - 1,
                }))
            }
            Err(e) => {
                let path = error_path(&e).unwrap_or(root.as_path()).to_path_buf();
                Some(Err(RepomdError::directory_read(path, e)))
            }
        })
    }
    fn collect_entries(self) -> Result<Vec<PathEntry>, RepomdError> {
        self.into_iter().collect()
    }
}
fn error_path(err: &ignore::Error) -> Option<&Path> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        ignore::Error::Loop { child, .. } => Some(child),
        _ => None,
    }
}
/// Depth-first, pre-order walk of `root`, pruning every entry whose relative
/// path matches `rules` before it is descended into.
///
/// The root is canonicalized first, so every [`PathEntry::path`] is absolute.
/// Entries within a directory are visited in file-name order. Any directory
/// that cannot be enumerated fails the whole walk.
pub(crate) fn walk_entries(
    root: &Path,
    rules: &IgnoreRuleSet,
    follow_links: bool,
) -> Result<Vec<PathEntry>, RepomdError> {
    Walker::new(root, rules, follow_links)?.collect_entries()
}
fn read_file_body(path: &Path, max_lines: usize, binary_detection: BinaryDetection) -> ContentBody {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            #[cfg(feature = "logging")]
            tracing::debug!("Failed to read {}: {}", path.display(), e);
            return ContentBody::ReadError(e.to_string());
        }
    };
    let sniff = &bytes[..bytes.len().min(BINARY_SNIFF_LEN)];
    let is_binary = match binary_detection {
        BinaryDetection::Simple => sniff.contains(&0),
        BinaryDetection::Accurate => content_inspector::inspect(sniff).is_binary(),
        BinaryDetection::None => false,
    };
    if is_binary {
        #[cfg(feature = "logging")]
        tracing::debug!("Binary file detected: {}", path.display());
        return ContentBody::Binary;
    }
    let content = match String::from_utf8(bytes) {
        Ok(content) => content,
        Err(e) => {
            #[cfg(feature = "logging")]
            tracing::debug!("{} is not valid UTF-8: {}", path.display(), e);
            return ContentBody::ReadError(e.to_string());
        }
    };
    // A trailing newline opens one more (empty) line, and an empty file is one line.
    if content.split('\n').count() > max_lines {
        #[cfg(feature = "logging")]
        tracing::debug!("{} exceeds {} lines, skipping content", path.display(), max_lines);
        return ContentBody::TooManyLines { limit: max_lines };
    }
    ContentBody::Text(content)
}
fn collect_from_entries(
    entries: &[PathEntry],
    options: &RepomdOptions,
) -> (Vec<FileEntry>, Vec<FileEntry>) {
    let mut priority = Vec::new();
    let mut ordinary = Vec::new();
    for entry in entries.iter().filter(|e| !e.is_dir()) {
        let name = entry.name();
        if !is_includable(&name) {
            continue;
        }
        let file = FileEntry {
            path: entry.path.clone(),
            relative: entry.relative.clone(),
            language: language_label(&entry.path),
            body: read_file_body(&entry.path, options.max_lines, options.binary_detection),
        };
        if is_priority(&name) {
            priority.push(file);
        } else {
            ordinary.push(file);
        }
    }
    (priority, ordinary)
}
/// Reads every eligible, non-excluded file under `root`.
///
/// Returns the priority-class files and the ordinary files as two lists, each
/// in walk order. Unreadable and oversized files are still returned, with a
/// placeholder body; only a directory enumeration failure is an error.
pub fn collect_contents(
    root: impl AsRef<Path>,
    rules: &IgnoreRuleSet,
    options: &RepomdOptions,
) -> Result<(Vec<FileEntry>, Vec<FileEntry>), RepomdError> {
    let entries = walk_entries(root.as_ref(), rules, options.follow_links)?;
    Ok(collect_from_entries(&entries, options))
}
pub fn repomd(options: RepomdOptions) -> Result<RepomdResult, RepomdError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Starting repomd with root: {}", options.root.display());
    let rules = options.ignore_rules();
    let entries = walk_entries(&options.root, &rules, options.follow_links)?;
    let tree = build_tree_from_entries(&entries);
    let (priority, ordinary) = collect_from_entries(&entries, &options);
    #[cfg(feature = "logging")]
    tracing::debug!(
        "Walked {} entries, {} priority and {} ordinary files",
        entries.len(),
        priority.len(),
        ordinary.len()
    );
    Ok(RepomdResult {
        tree,
        priority,
        ordinary,
    })
}
