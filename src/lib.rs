//! # Repomd
//!
//! `repomd` flattens a source tree into a single markdown document: an indented
//! directory listing followed by the content of selected files, each fenced and
//! labeled by extension.
//!
//! Paths are excluded by substring patterns ([`IgnoreRuleSet`]) before anything
//! else is decided. Among the surviving files, only documentation, manifests and
//! a fixed set of source extensions have their content included, and the
//! documentation and manifest files are emitted first. Files longer than the
//! configured line limit are listed with a placeholder body.
//!
//! Options, walk entries and results implement serde's `Serialize` and
//! `Deserialize`. The crate itself only emits markdown; the derives let callers
//! keep options in their own config files or store results in whatever format
//! they use.
//!
//! # Features
//!
//! - `logging`: Enables debug logging via the `tracing` crate (on by default).
//!
//! # Example
//!
//! ```no_run
//! use repomd::{RepomdBuilder, output, repomd};
//!
//! let options = RepomdBuilder::new(".")
//!     .max_lines(500)
//!     .include_ignored(false)
//!     .build();
//!
//! let result = repomd(options).expect("Failed to scan directory");
//! output::write_document(&result, output::DEFAULT_OUTPUT_FILE).expect("Failed to write");
//! ```

mod engine;
mod error;
pub mod filter;
mod options;
pub mod output;
mod tree;
mod types;

pub use engine::{collect_contents, repomd};
pub use error::RepomdError;
pub use filter::{IgnoreRuleSet, is_includable, is_priority, language_label};
pub use options::{BinaryDetection, DEFAULT_MAX_LINES, RepomdBuilder, RepomdOptions};
pub use tree::render_tree;
pub use types::{ContentBody, EntryKind, FileEntry, PathEntry, RepomdResult};
