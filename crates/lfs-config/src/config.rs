//! The resolver object shared by every configuration query

use crate::environment::Environment;
use crate::values::Values;

/// One step of a fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source<'a> {
    /// A git config key.
    Git(&'a str),

    /// An environment variable.
    Os(&'a str),
}

/// Resolved view over a frozen configuration snapshot.
///
/// Construct one per repository and pass it by reference. Every query is a
/// pure function of the snapshot, the current ref and the remote override;
/// the only mutators take `&mut self`, so no query can observe a swap in
/// progress.
#[derive(Debug, Clone)]
pub struct Configuration {
    pub(crate) git: Environment,
    pub(crate) os: Environment,
    pub(crate) current_ref: Option<String>,
    pub(crate) remote: Option<String>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new(Values::default())
    }
}

impl Configuration {
    /// Create a configuration with no checked-out branch.
    pub fn new(values: Values) -> Self {
        Self::from_values(values, None)
    }

    /// Create a configuration bound to the given branch short name.
    pub fn from_values(values: Values, current_ref: Option<String>) -> Self {
        Self {
            git: Environment::git(values.git),
            os: Environment::os(values.os),
            current_ref,
            remote: None,
        }
    }

    /// Bind the current branch, builder style.
    pub fn with_current_ref(mut self, name: impl Into<String>) -> Self {
        self.current_ref = Some(name.into());
        self
    }

    /// Git config namespace.
    pub fn git(&self) -> &Environment {
        &self.git
    }

    /// Process environment namespace.
    pub fn os(&self) -> &Environment {
        &self.os
    }

    /// Short name of the checked-out branch, if any.
    pub fn current_ref(&self) -> Option<&str> {
        self.current_ref.as_deref()
    }

    /// Replace the current branch. `None` models a detached HEAD.
    pub fn set_current_ref(&mut self, name: Option<String>) {
        self.current_ref = name;
    }

    /// Return the first value present along `chain`.
    ///
    /// A present but empty value ends the chain; only absent keys fall
    /// through to the next source.
    pub fn resolve_chain(&self, chain: &[Source<'_>]) -> Option<&str> {
        chain.iter().find_map(|source| match *source {
            Source::Git(key) => self.git.get(key),
            Source::Os(name) => self.os.get(name),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_stops_at_first_present_source() {
        let config = Configuration::new(
            Values::new()
                .git("user.email", [""])
                .os("EMAIL", ["fallback@example.com"]),
        );

        let chain = [Source::Git("user.email"), Source::Os("EMAIL")];
        assert_eq!(config.resolve_chain(&chain), Some(""));
    }

    #[test]
    fn chain_falls_through_absent_sources() {
        let config = Configuration::new(Values::new().os("EMAIL", ["fallback@example.com"]));

        let chain = [
            Source::Os("GIT_AUTHOR_EMAIL"),
            Source::Git("user.email"),
            Source::Os("EMAIL"),
        ];
        assert_eq!(config.resolve_chain(&chain), Some("fallback@example.com"));
        assert_eq!(config.resolve_chain(&chain[..2]), None);
    }

    #[test]
    fn current_ref_can_be_swapped() {
        let mut config = Configuration::new(Values::new()).with_current_ref("main");
        assert_eq!(config.current_ref(), Some("main"));

        config.set_current_ref(None);
        assert_eq!(config.current_ref(), None);
    }
}
