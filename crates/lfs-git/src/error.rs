//! Error types for lfs-git

use std::path::PathBuf;

/// Result type for lfs-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading configuration from a repository
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("No git repository found at or above {path}")]
    RepositoryNotFound { path: PathBuf },
}
