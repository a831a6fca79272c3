use repomd::{output, repomd, RepomdBuilder};
use std::fs;
use tempfile::tempdir;
fn sample_repo(root: &std::path::Path) {
    fs::write(root.join("README.md"), "# Demo\n\nA sample.\n").unwrap();
    fs::create_dir(root.join("src")).unwrap();
    fs::write(
        root.join("src/index.ts"),
        "import a from './a';\n\nexport function main() {\n  return a;\n}\n",
    )
    .unwrap();
    fs::create_dir_all(root.join("node_modules/pkg")).unwrap();
    fs::write(root.join("node_modules/pkg/index.js"), "module.exports = 1;\n").unwrap();
}
#[test]
fn integration_full_document() {
    let dir = tempdir().unwrap();
    sample_repo(dir.path());
    let result = repomd(RepomdBuilder::new(dir.path()).build()).unwrap();
    let doc = output::format_markdown(&result);
    let expected = concat!(
        "# Directory Structure\n\n",
        "```\nREADME.md\nsrc/\n  index.ts\n```\n\n",
        "## README.md\n\n```md\n# Demo\n\nA sample.\n\n```\n\n",
        "## src/index.ts\n\n```ts\n",
        "import a from './a';\n\nexport function main() {\n  return a;\n}\n",
        "\n```\n\n",
    );
    assert_eq!(doc, expected);
    assert!(!doc.contains("node_modules"));
}
#[test]
fn integration_runs_are_identical() {
    let dir = tempdir().unwrap();
    sample_repo(dir.path());
    let first = repomd(RepomdBuilder::new(dir.path()).build()).unwrap();
    let second = repomd(RepomdBuilder::new(dir.path()).build()).unwrap();
    assert_eq!(first, second);
    assert_eq!(output::format_markdown(&first), output::format_markdown(&second));
}
#[test]
fn integration_write_document() {
    let dir = tempdir().unwrap();
    let out_dir = tempdir().unwrap();
    sample_repo(dir.path());
    let result = repomd(RepomdBuilder::new(dir.path()).build()).unwrap();
    let out_path = out_dir.path().join(output::DEFAULT_OUTPUT_FILE);
    output::write_document(&result, &out_path).unwrap();
    let written = fs::read_to_string(&out_path).unwrap();
    assert_eq!(written, output::format_markdown(&result));
}
#[test]
fn integration_write_to_missing_directory_fails() {
    let dir = tempdir().unwrap();
    sample_repo(dir.path());
    let result = repomd(RepomdBuilder::new(dir.path()).build()).unwrap();
    let err = output::write_document(&result, dir.path().join("missing/out.md")).unwrap_err();
    assert!(err.to_string().contains("missing"));
}
