//! Markdown assembly for repomd results.
//!
//! The document is a fenced directory tree followed by one fenced block per
//! selected file, priority files first. File bodies are copied verbatim.

use crate::{RepomdError, RepomdResult};
use crate::types::FileEntry;
use std::fs;
use std::path::Path;

/// Artifact name used when no output path is given.
pub const DEFAULT_OUTPUT_FILE: &str = "combined_repo.md";

/// Formats the result into the complete markdown document.
pub fn format_markdown(result: &RepomdResult) -> String {
    let mut out = String::with_capacity(1024);
    out.push_str("# Directory Structure\n\n```\n");
    out.push_str(&result.tree.join("\n"));
    out.push_str("\n```\n\n");
    for file in result.files() {
        push_file_block(&mut out, file);
    }
    out
}

/// Writes the formatted document to `path`, replacing any existing file.
pub fn write_document(result: &RepomdResult, path: impl AsRef<Path>) -> Result<(), RepomdError> {
    let document = format_markdown(result);
    fs::write(&path, document).map_err(|e| RepomdError::io(path.as_ref(), e))?;
    Ok(())
}

fn push_file_block(out: &mut String, file: &FileEntry) {
    out.push_str(&format!(
        "## {}\n\n```{}\n",
        file.relative.display(),
        file.language
    ));
    out.push_str(&file.body.render());
    out.push_str("\n```\n\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ContentBody;
    use std::path::PathBuf;

    fn file(relative: &str, language: &str, body: ContentBody) -> FileEntry {
        FileEntry {
            path: PathBuf::from("/repo").join(relative),
            relative: PathBuf::from(relative),
            language: language.to_string(),
            body,
        }
    }

    #[test]
    fn tree_then_priority_then_ordinary() {
        let result = RepomdResult {
            tree: vec!["README.md".into(), "src/".into(), "  index.ts".into()],
            priority: vec![file("README.md", "md", ContentBody::Text("# Demo".into()))],
            ordinary: vec![file("src/index.ts", "ts", ContentBody::Text("export {};\n".into()))],
        };
        let expected = "# Directory Structure\n\n```\nREADME.md\nsrc/\n  index.ts\n```\n\n\
                        ## README.md\n\n```md\n# Demo\n```\n\n\
                        ## src/index.ts\n\n```ts\nexport {};\n\n```\n\n";
        assert_eq!(format_markdown(&result), expected);
    }

    #[test]
    fn placeholder_bodies_keep_their_label() {
        let result = RepomdResult {
            tree: vec!["big.json".into()],
            priority: Vec::new(),
            ordinary: vec![file("big.json", "json", ContentBody::TooManyLines { limit: 1000 })],
        };
        let doc = format_markdown(&result);
        assert!(doc.contains("## big.json\n\n```json\nFile exceeds 1000 lines. Skipped.\n```\n\n"));
    }

    #[test]
    fn empty_result_still_has_tree_fence() {
        let result = RepomdResult {
            tree: Vec::new(),
            priority: Vec::new(),
            ordinary: Vec::new(),
        };
        assert_eq!(format_markdown(&result), "# Directory Structure\n\n```\n\n```\n\n");
    }
}
