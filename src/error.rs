use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum RepomdError {
    #[error("Cannot read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        source: ignore::Error,
    },
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid root directory: {0}")]
    InvalidRoot(PathBuf),
}
impl RepomdError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RepomdError::Io {
            path: path.into(),
            source,
        }
    }
    pub(crate) fn directory_read(path: impl Into<PathBuf>, source: ignore::Error) -> Self {
        RepomdError::DirectoryRead {
            path: path.into(),
            source,
        }
    }
}
