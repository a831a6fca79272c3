//! Path exclusion and content-eligibility predicates.
//!
//! Exclusion works on the path relative to the scan root and is pure substring
//! containment. Eligibility and priority work on the basename only.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Substrings that exclude a path (and its whole subtree) unless the run
/// includes ignored paths.
pub const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    // JavaScript
    "node_modules",
    "package-lock.json",
    "npm-debug.log",
    "yarn.lock",
    "yarn-error.log",
    "pnpm-lock.yaml",
    "bun.lockb",
    "deno.lock",
    // PHP
    "vendor",
    "composer.lock",
    // Python
    "__pycache__",
    ".pyc",
    ".pyo",
    ".pyd",
    ".Python",
    "pip-log.txt",
    "pip-delete-this-directory.txt",
    ".venv",
    "venv",
    "ENV",
    "env",
    // Ruby
    "Gemfile.lock",
    ".bundle",
    // JVM / Rust / .NET
    "target",
    ".class",
    ".gradle",
    "build",
    "pom.xml.tag",
    "pom.xml.releaseBackup",
    "pom.xml.versionsBackup",
    "pom.xml.next",
    "bin",
    "obj",
    ".suo",
    ".user",
    "go.sum",
    "Cargo.lock",
    // VCS
    ".git",
    ".svn",
    ".hg",
    // OS
    ".DS_Store",
    "Thumbs.db",
    // Secrets
    ".env",
    ".env.local",
    ".env.development.local",
    ".env.test.local",
    ".env.production.local",
    // Framework output and caches
    ".svelte-kit",
    ".next",
    ".nuxt",
    ".vuepress",
    ".cache",
    "dist",
    "tmp",
    ".expo",
];

/// Documentation file matched case-insensitively.
pub const DOC_FILENAME: &str = "readme.md";

/// Manifest files matched case-sensitively.
pub const MANIFEST_FILENAMES: &[&str] = &["package.json", "requirements.txt", "pyproject.toml"];

/// Extensions (with the leading dot) whose files are eligible for content.
pub const INCLUDED_EXTENSIONS: &[&str] = &[".py", ".js", ".jsx", ".ts", ".tsx", ".json"];

/// Lowercased names emitted before every other file.
pub const PRIORITY_FILENAMES: &[&str] =
    &["readme.md", "package.json", "requirements.txt", "pyproject.toml"];

/// Language label for files without an extension.
pub const FALLBACK_LANGUAGE: &str = "text";

/// Ordered set of substring patterns. A relative path is excluded iff it
/// contains any of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IgnoreRuleSet {
    patterns: Vec<String>,
}

impl IgnoreRuleSet {
    /// A rule set that excludes nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The built-in patterns.
    pub fn default_set() -> Self {
        Self::new(DEFAULT_IGNORE_PATTERNS.iter().map(|p| p.to_string()))
    }

    pub fn new(patterns: impl IntoIterator<Item = String>) -> Self {
        Self {
            patterns: patterns.into_iter().filter(|p| !p.is_empty()).collect(),
        }
    }

    /// Appends patterns after the existing ones.
    pub fn extend(mut self, patterns: impl IntoIterator<Item = String>) -> Self {
        self.patterns
            .extend(patterns.into_iter().filter(|p| !p.is_empty()));
        self
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Returns true if any pattern occurs in `relative`. Case-sensitive.
    pub fn is_ignored(&self, relative: &Path) -> bool {
        if self.patterns.is_empty() {
            return false;
        }
        let relative = relative.to_string_lossy();
        self.patterns.iter().any(|p| relative.contains(p.as_str()))
    }
}

/// Whether a file named `name` is eligible for the content section.
pub fn is_includable(name: &str) -> bool {
    name.to_lowercase() == DOC_FILENAME
        || MANIFEST_FILENAMES.contains(&name)
        || INCLUDED_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Whether a file named `name` belongs to the priority class.
pub fn is_priority(name: &str) -> bool {
    PRIORITY_FILENAMES.contains(&name.to_lowercase().as_str())
}

/// Fence label for a file: its lowercased extension, or [`FALLBACK_LANGUAGE`].
pub fn language_label(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .filter(|ext| !ext.is_empty())
        .unwrap_or_else(|| FALLBACK_LANGUAGE.to_string())
}
