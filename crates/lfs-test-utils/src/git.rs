//! Git repository fixtures for configuration loading tests.
//!
//! Every fixture writes config at the repository's local level only, so a
//! developer's global config never decides an assertion as long as tests
//! check keys they set themselves.

use std::fs;
use std::path::Path;

use git2::{Repository, Signature};
use tempfile::TempDir;

/// Initialises an empty repository (unborn HEAD, no commits).
///
/// # Panics
/// Panics if `git2::Repository::init` fails.
pub fn real_git_repo(path: &Path) -> Repository {
    Repository::init(path).unwrap_or_else(|e| {
        panic!(
            "real_git_repo: failed to init repository at {}: {e}",
            path.display()
        )
    })
}

/// Initialises a repository with one commit on `main`, checked out.
///
/// # Panics
/// Panics if any git operation fails.
pub fn real_git_repo_with_commit(path: &Path) -> Repository {
    let repo = real_git_repo(path);
    commit_on_main(&repo);
    repo
}

fn commit_on_main(repo: &Repository) {
    let sig = Signature::now("Test User", "test@test.com")
        .unwrap_or_else(|e| panic!("commit_on_main: failed to build signature: {e}"));
    let tree_id = repo
        .index()
        .and_then(|mut index| index.write_tree())
        .unwrap_or_else(|e| panic!("commit_on_main: failed to write tree: {e}"));
    let tree = repo
        .find_tree(tree_id)
        .unwrap_or_else(|e| panic!("commit_on_main: failed to find tree: {e}"));

    repo.commit(Some("refs/heads/main"), &sig, &sig, "Initial commit", &tree, &[])
        .unwrap_or_else(|e| panic!("commit_on_main: failed to commit: {e}"));
    repo.set_head("refs/heads/main")
        .unwrap_or_else(|e| panic!("commit_on_main: failed to point HEAD at main: {e}"));
}

/// Detach HEAD at the current commit.
///
/// # Panics
/// Panics if HEAD does not resolve to a commit.
pub fn detach_head(repo: &Repository) {
    let oid = repo
        .head()
        .and_then(|head| head.peel_to_commit())
        .map(|commit| commit.id())
        .unwrap_or_else(|e| panic!("detach_head: HEAD has no commit: {e}"));
    repo.set_head_detached(oid)
        .unwrap_or_else(|e| panic!("detach_head: failed to detach: {e}"));
}

/// Set local-level config entries. Repeated keys become multi-valued.
///
/// # Panics
/// Panics if the config cannot be written.
pub fn set_local_config(repo: &Repository, entries: &[(&str, &str)]) {
    let mut config = repo
        .config()
        .and_then(|config| config.open_level(git2::ConfigLevel::Local))
        .unwrap_or_else(|e| panic!("set_local_config: failed to open local config: {e}"));

    for (key, value) in entries {
        // `^$` matches no existing value, so this always appends.
        config
            .set_multivar(key, "^$", value)
            .unwrap_or_else(|e| panic!("set_local_config: failed to set {key}: {e}"));
    }
}

/// A temporary directory holding a repository with one commit on `main`.
pub struct TestRepo {
    temp_dir: TempDir,
    repo: Repository,
}

impl Default for TestRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl TestRepo {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let repo = real_git_repo_with_commit(temp_dir.path());
        Self { temp_dir, repo }
    }

    /// Root of the working tree.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn repo(&self) -> &Repository {
        &self.repo
    }

    /// Builder-style wrapper over [`set_local_config`].
    pub fn with_config(self, entries: &[(&str, &str)]) -> Self {
        set_local_config(&self.repo, entries);
        self
    }

    /// Create and return a nested directory inside the working tree.
    pub fn subdir(&self, relative: &str) -> std::path::PathBuf {
        let path = self.root().join(relative);
        fs::create_dir_all(&path).unwrap();
        path
    }
}
