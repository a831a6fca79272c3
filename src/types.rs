use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Whether a walked entry is a directory or a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    Directory,
    File,
}

/// A filesystem node met during a walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathEntry {
    /// The absolute path, under the canonicalized scan root.
    pub path: PathBuf,
    /// The path relative to the scan root.
    pub relative: PathBuf,
    pub kind: EntryKind,
    /// Nesting level; direct children of the root are at depth 0.
    pub depth: usize,
}

impl PathEntry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// The basename as a lossy string.
    pub fn name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// What goes inside a file's fence.
///
/// Only [`ContentBody::Text`] carries the real file content; every other
/// variant renders to a fixed placeholder line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentBody {
    Text(String),
    /// The file has more lines than the configured limit.
    TooManyLines { limit: usize },
    /// The file could not be read as UTF-8 text.
    ReadError(String),
    Binary,
}

impl ContentBody {
    pub fn render(&self) -> String {
        match self {
            ContentBody::Text(content) => content.clone(),
            ContentBody::TooManyLines { limit } => format!("File exceeds {limit} lines. Skipped."),
            ContentBody::ReadError(message) => format!("Error reading file: {message}"),
            ContentBody::Binary => "Binary file. Skipped.".to_string(),
        }
    }
}

/// A file selected for the content section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileEntry {
    /// The full path to the file.
    pub path: PathBuf,
    /// The path shown in the block heading.
    pub relative: PathBuf,
    /// Fence label derived from the extension.
    pub language: String,
    pub body: ContentBody,
}

/// The complete result of a run, ready to be assembled into markdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepomdResult {
    /// Indented tree lines, one per entry.
    pub tree: Vec<String>,
    /// Priority-class files, in walk order.
    pub priority: Vec<FileEntry>,
    /// All other eligible files, in walk order.
    pub ordinary: Vec<FileEntry>,
}

impl RepomdResult {
    /// Every content block in output order.
    pub fn files(&self) -> impl Iterator<Item = &FileEntry> {
        self.priority.iter().chain(self.ordinary.iter())
    }
}
