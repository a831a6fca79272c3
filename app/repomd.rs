//! Command-line interface for repomd.
//!
//! Walks a directory tree and writes the combined markdown document to a
//! file in the current directory (or to stdout).

use clap::{Parser, ValueEnum};
use repomd::{BinaryDetection, DEFAULT_MAX_LINES, RepomdBuilder, RepomdOptions, output, repomd};
use std::path::PathBuf;
use std::process::exit;

/// repomd — flatten a source tree into one markdown file
#[derive(Parser)]
#[command(name = "repomd", version, about, long_about = None)]
struct Cli {
    /// Root directory (default current dir)
    #[arg(default_value = ".")]
    root: PathBuf,

    /// Files with more lines than this get a placeholder instead of content
    #[arg(long, default_value_t = DEFAULT_MAX_LINES)]
    max_lines: usize,

    /// Disable every ignore pattern for the whole run
    #[arg(long)]
    include_ignored: bool,

    /// Extra ignore substrings (can be repeated)
    #[arg(short = 'I', long = "ignore")]
    ignore_patterns: Vec<String>,

    /// Output file
    #[arg(short, long, default_value = output::DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Print the document to stdout instead of writing a file
    #[arg(long, conflicts_with = "output")]
    stdout: bool,

    /// Replace files that look binary with a placeholder
    #[arg(long, value_enum, default_value_t = BinaryMode::None)]
    binary_detection: BinaryMode,

    /// Follow symlinks
    #[arg(long)]
    follow_links: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum BinaryMode {
    /// Never sniff; invalid UTF-8 still shows up as a read error
    None,
    /// Any NUL byte in the first 8 KiB
    Simple,
    /// content_inspector heuristics
    Accurate,
}

impl From<BinaryMode> for BinaryDetection {
    fn from(mode: BinaryMode) -> Self {
        match mode {
            BinaryMode::None => BinaryDetection::None,
            BinaryMode::Simple => BinaryDetection::Simple,
            BinaryMode::Accurate => BinaryDetection::Accurate,
        }
    }
}

impl Cli {
    fn into_options(self) -> (RepomdOptions, PathBuf, bool) {
        let options = RepomdBuilder::new(self.root)
            .max_lines(self.max_lines)
            .include_ignored(self.include_ignored)
            .ignore_patterns(self.ignore_patterns)
            .binary_detection(self.binary_detection.into())
            .follow_links(self.follow_links)
            .build();
        (options, self.output, self.stdout)
    }
}

#[cfg(feature = "logging")]
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() {
    let cli = Cli::parse();
    #[cfg(feature = "logging")]
    init_logging(cli.verbose);
    let (options, output_path, to_stdout) = cli.into_options();

    let result = match repomd(options) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    };

    if to_stdout {
        print!("{}", output::format_markdown(&result));
        return;
    }

    if let Err(e) = output::write_document(&result, &output_path) {
        eprintln!("Error: {}", e);
        exit(1);
    }
    println!("Markdown file created: {}", output_path.display());
}
