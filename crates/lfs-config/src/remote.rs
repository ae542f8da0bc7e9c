//! Branch-aware remote resolution

use std::collections::BTreeSet;

use crate::config::Configuration;

/// Remote used when nothing more specific is configured.
pub const DEFAULT_REMOTE: &str = "origin";

impl Configuration {
    /// Remote to fetch from.
    ///
    /// An explicit override set with [`set_remote`](Self::set_remote) wins,
    /// then `branch.<current>.remote`, then [`DEFAULT_REMOTE`].
    pub fn remote(&self) -> String {
        if let Some(remote) = &self.remote {
            return remote.clone();
        }

        self.branch_value("remote")
            .unwrap_or(DEFAULT_REMOTE)
            .to_string()
    }

    /// Remote to push to.
    ///
    /// `branch.<current>.pushRemote`, then `remote.pushDefault`, then
    /// [`remote`](Self::remote).
    pub fn push_remote(&self) -> String {
        if let Some(remote) = self.branch_value("pushremote") {
            return remote.to_string();
        }

        if let Some(remote) = self.git.get("remote.pushdefault") {
            return remote.to_string();
        }

        self.remote()
    }

    /// Force [`remote`](Self::remote) to return `name`.
    pub fn set_remote(&mut self, name: impl Into<String>) {
        self.remote = Some(name.into());
    }

    /// Whether the fetch remote is [`DEFAULT_REMOTE`].
    pub fn is_default_remote(&self) -> bool {
        self.remote() == DEFAULT_REMOTE
    }

    /// Names of every remote with at least one `remote.<name>.<field>` key.
    pub fn remotes(&self) -> Vec<String> {
        let names: BTreeSet<&str> = self
            .git
            .keys()
            .filter_map(|key| key.strip_prefix("remote."))
            .filter_map(|rest| rest.rsplit_once('.'))
            .map(|(name, _field)| name)
            .collect();

        names.into_iter().map(str::to_string).collect()
    }

    /// Branch-scoped lookup; never consulted without a current branch.
    fn branch_value(&self, field: &str) -> Option<&str> {
        let branch = self.current_ref.as_deref()?;
        self.git.get(&format!("branch.{branch}.{field}"))
    }
}

#[cfg(test)]
mod tests {
    use crate::{Configuration, Values};

    #[test]
    fn remotes_lists_unique_names() {
        let config = Configuration::new(
            Values::new()
                .git("remote.origin.url", ["https://example.com/a.git"])
                .git("remote.origin.fetch", ["+refs/heads/*:refs/remotes/origin/*"])
                .git("remote.upstream.url", ["https://example.com/b.git"])
                .git("remote.pushDefault", ["upstream"]),
        );

        assert_eq!(config.remotes(), vec!["origin", "upstream"]);
    }

    #[test]
    fn explicit_remote_overrides_branch_config() {
        let mut config = Configuration::new(Values::new().git("branch.main.remote", ["a"]))
            .with_current_ref("main");
        assert_eq!(config.remote(), "a");

        config.set_remote("mirror");
        assert_eq!(config.remote(), "mirror");
        assert_eq!(config.push_remote(), "mirror");
        assert!(!config.is_default_remote());
    }
}
