//! Fetch and prune tuning

use crate::config::Configuration;
use crate::remote::DEFAULT_REMOTE;

/// Typed bundle of the `lfs.fetch*` and `lfs.prune*` settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchPruneConfig {
    /// Days of ref history to consider "recent" when fetching.
    pub fetch_recent_refs_days: i64,

    /// Include remote refs when fetching recent refs.
    pub fetch_recent_refs_include_remotes: bool,

    /// Days of commit history to fetch on each recent ref.
    pub fetch_recent_commits_days: i64,

    /// Always fetch recent content, not just the checkout.
    pub fetch_recent_always: bool,

    /// Extra days added to the recent window before pruning.
    pub prune_offset_days: i64,

    /// Verify objects exist on the remote before pruning.
    pub prune_verify_remote_always: bool,

    /// Remote consulted when verifying before prune.
    pub prune_remote_name: String,
}

impl Default for FetchPruneConfig {
    fn default() -> Self {
        Self {
            fetch_recent_refs_days: 7,
            fetch_recent_refs_include_remotes: true,
            fetch_recent_commits_days: 0,
            fetch_recent_always: false,
            prune_offset_days: 3,
            prune_verify_remote_always: false,
            prune_remote_name: DEFAULT_REMOTE.to_string(),
        }
    }
}

impl Configuration {
    /// Resolve fetch/prune settings, defaulting each field independently.
    pub fn fetch_prune_config(&self) -> FetchPruneConfig {
        let defaults = FetchPruneConfig::default();
        let git = &self.git;

        FetchPruneConfig {
            fetch_recent_refs_days: git
                .int("lfs.fetchrecentrefsdays", defaults.fetch_recent_refs_days),
            fetch_recent_refs_include_remotes: git.bool(
                "lfs.fetchrecentremoterefs",
                defaults.fetch_recent_refs_include_remotes,
            ),
            fetch_recent_commits_days: git
                .int("lfs.fetchrecentcommitsdays", defaults.fetch_recent_commits_days),
            fetch_recent_always: git.bool("lfs.fetchrecentalways", defaults.fetch_recent_always),
            prune_offset_days: git.int("lfs.pruneoffsetdays", defaults.prune_offset_days),
            prune_verify_remote_always: git.bool(
                "lfs.pruneverifyremotealways",
                defaults.prune_verify_remote_always,
            ),
            prune_remote_name: git
                .get("lfs.pruneremotetocheck")
                .map(str::to_string)
                .unwrap_or(defaults.prune_remote_name),
        }
    }
}
