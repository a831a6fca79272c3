use crate::filter::IgnoreRuleSet;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
pub const DEFAULT_MAX_LINES: usize = 1000;
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryDetection {
    Simple,
    Accurate,
    #[default]
    None,
}
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RepomdOptions {
    pub root: PathBuf,
    pub max_lines: usize,
    pub include_ignored: bool,
    pub extra_ignore_patterns: Vec<String>,
    pub binary_detection: BinaryDetection,
    pub follow_links: bool,
}
impl Default for RepomdOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            max_lines: DEFAULT_MAX_LINES,
            include_ignored: false,
            extra_ignore_patterns: Vec::new(),
            binary_detection: BinaryDetection::None,
            follow_links: false,
        }
    }
}
impl RepomdOptions {
    /// The exclusion rules in force for the run. Empty when ignored paths are included.
    pub fn ignore_rules(&self) -> IgnoreRuleSet {
        if self.include_ignored {
            IgnoreRuleSet::empty()
        } else {
            IgnoreRuleSet::default_set().extend(self.extra_ignore_patterns.iter().cloned())
        }
    }
}
#[derive(Debug, Default)]
pub struct RepomdBuilder {
    options: RepomdOptions,
}
impl RepomdBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: RepomdOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn max_lines(mut self, lines: usize) -> Self {
        self.options.max_lines = lines;
        self
    }
    pub fn include_ignored(mut self, yes: bool) -> Self {
        self.options.include_ignored = yes;
        self
    }
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.extra_ignore_patterns = patterns;
        self
    }
    pub fn binary_detection(mut self, method: BinaryDetection) -> Self {
        self.options.binary_detection = method;
        self
    }
    pub fn follow_links(mut self, yes: bool) -> Self {
        self.options.follow_links = yes;
        self
    }
    pub fn build(self) -> RepomdOptions {
        self.options
    }
}
