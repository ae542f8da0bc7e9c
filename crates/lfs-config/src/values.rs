//! Raw configuration snapshot handed over by the config store and the process environment

use std::collections::HashMap;

/// Already-tokenized configuration values from both sources.
///
/// `git` holds entries keyed by dotted name, each list in application order
/// (system, global, local, worktree). `os` holds process environment
/// bindings. Nothing here interprets the values; see
/// [`Configuration`](crate::Configuration) for resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Values {
    pub git: HashMap<String, Vec<String>>,
    pub os: HashMap<String, Vec<String>>,
}

impl Values {
    /// Create an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append values for a git config key.
    ///
    /// Calling this twice for the same key extends the list, so later calls
    /// model later-applied scopes.
    pub fn git<I, S>(mut self, key: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.git
            .entry(key.into())
            .or_default()
            .extend(values.into_iter().map(Into::into));
        self
    }

    /// Append values for an environment variable.
    pub fn os<I, S>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.os
            .entry(name.into())
            .or_default()
            .extend(values.into_iter().map(Into::into));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_appends_in_call_order() {
        let values = Values::new()
            .git("core.sharedrepository", ["group"])
            .git("core.sharedrepository", ["0600"]);

        assert_eq!(values.git["core.sharedrepository"], vec!["group", "0600"]);
        assert!(values.os.is_empty());
    }
}
