//! Git-backed configuration loading
//!
//! Supplies the collaborators [`lfs_config`] expects: a [`Values`] snapshot
//! read from every git config level and the process environment, plus the
//! short name of the checked-out branch.

pub mod branch;
pub mod error;
pub mod loader;

use std::collections::HashMap;
use std::path::Path;

use git2::{ErrorCode, Repository};
use lfs_config::{Configuration, Values};

pub use branch::current_branch;
pub use error::{Error, Result};
pub use loader::{config_values, load_git_values, load_os_values, process_os_values};

/// Build a [`Configuration`] for the repository containing `path`.
///
/// The environment namespace comes from the running process.
pub fn open(path: impl AsRef<Path>) -> Result<Configuration> {
    let path = path.as_ref();
    let repo = Repository::discover(path).map_err(|e| match e.code() {
        ErrorCode::NotFound => Error::RepositoryNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Git(e),
    })?;

    from_repository(&repo, process_os_values())
}

/// Build a [`Configuration`] for `repo` with an explicit environment.
pub fn from_repository(
    repo: &Repository,
    os: HashMap<String, Vec<String>>,
) -> Result<Configuration> {
    let git = load_git_values(repo)?;
    let branch = current_branch(repo)?;

    tracing::debug!(
        path = %repo.path().display(),
        branch = branch.as_deref().unwrap_or("(detached)"),
        "Resolved repository configuration"
    );

    Ok(Configuration::from_values(Values { git, os }, branch))
}
