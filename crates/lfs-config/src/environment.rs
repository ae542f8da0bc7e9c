//! Read-only lookups over one configuration namespace
//!
//! An [`Environment`] wraps an ordered-list-per-key container. The current
//! value of a key is always the last element of its list, which is how
//! later config scopes override earlier ones.

use std::borrow::Cow;
use std::collections::HashMap;

/// How keys are compared within a namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyCase {
    /// Keys are folded to lower case (git config).
    Insensitive,

    /// Keys match exactly (process environment).
    #[default]
    Sensitive,
}

/// An immutable view over one namespace of configuration values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    values: HashMap<String, Vec<String>>,
    case: KeyCase,
}

impl Environment {
    /// Build a namespace from raw values.
    ///
    /// With [`KeyCase::Insensitive`], keys differing only by case are merged.
    /// Their lists are concatenated in sorted key order so the result does
    /// not depend on hash iteration order.
    pub fn new(values: HashMap<String, Vec<String>>, case: KeyCase) -> Self {
        let values = match case {
            KeyCase::Sensitive => values,
            KeyCase::Insensitive => {
                let mut entries: Vec<_> = values.into_iter().collect();
                entries.sort_by(|a, b| a.0.cmp(&b.0));

                let mut folded: HashMap<String, Vec<String>> =
                    HashMap::with_capacity(entries.len());
                for (key, list) in entries {
                    folded.entry(key.to_lowercase()).or_default().extend(list);
                }
                folded
            }
        };

        Self { values, case }
    }

    /// Namespace with git config semantics (case-insensitive keys).
    pub fn git(values: HashMap<String, Vec<String>>) -> Self {
        Self::new(values, KeyCase::Insensitive)
    }

    /// Namespace with process environment semantics (exact keys).
    pub fn os(values: HashMap<String, Vec<String>>) -> Self {
        Self::new(values, KeyCase::Sensitive)
    }

    fn normalize<'k>(&self, key: &'k str) -> Cow<'k, str> {
        match self.case {
            KeyCase::Insensitive => Cow::Owned(key.to_lowercase()),
            KeyCase::Sensitive => Cow::Borrowed(key),
        }
    }

    /// The current value of `key`: the last entry of its list.
    pub fn get(&self, key: &str) -> Option<&str> {
        let value = self
            .values
            .get(&*self.normalize(key))
            .and_then(|list| list.last())
            .map(String::as_str);

        tracing::trace!(key, found = value.is_some(), "config lookup");
        value
    }

    /// Every value of `key` in application order.
    pub fn get_all(&self, key: &str) -> &[String] {
        self.values
            .get(&*self.normalize(key))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether `key` has at least one value.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Interpret `key` as a boolean.
    ///
    /// Absent and unparseable values both yield `default`.
    pub fn bool(&self, key: &str, default: bool) -> bool {
        match self.get(key) {
            None => default,
            Some(raw) => parse_bool(raw).unwrap_or_else(|| {
                tracing::debug!(key, value = raw, default, "Not a boolean, using default");
                default
            }),
        }
    }

    /// Interpret `key` as a decimal integer.
    ///
    /// Absent and unparseable values both yield `default`.
    pub fn int(&self, key: &str, default: i64) -> i64 {
        match self.get(key) {
            None => default,
            Some(raw) => parse_int(raw).unwrap_or_else(|| {
                tracing::debug!(key, value = raw, default, "Not an integer, using default");
                default
            }),
        }
    }

    /// Iterate over all keys in this namespace, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Parse git-style boolean tokens.
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parse a decimal integer, tolerating surrounding whitespace.
pub fn parse_int(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn git_env(pairs: &[(&str, &str)]) -> Environment {
        let mut values: HashMap<String, Vec<String>> = HashMap::new();
        for (key, value) in pairs {
            values.entry(key.to_string()).or_default().push(value.to_string());
        }
        Environment::git(values)
    }

    #[test]
    fn get_prefers_last_value() {
        let env = git_env(&[("lfs.url", "https://a"), ("lfs.url", "https://b")]);
        assert_eq!(env.get("lfs.url"), Some("https://b"));
        assert_eq!(env.get_all("lfs.url").len(), 2);
    }

    #[test]
    fn git_keys_ignore_case() {
        let env = git_env(&[("remote.pushDefault", "upstream")]);
        assert_eq!(env.get("remote.pushdefault"), Some("upstream"));
        assert_eq!(env.get("REMOTE.PUSHDEFAULT"), Some("upstream"));
    }

    #[test]
    fn os_keys_are_exact() {
        let mut values = HashMap::new();
        values.insert("EMAIL".to_string(), vec!["a@example.com".to_string()]);
        let env = Environment::os(values);

        assert_eq!(env.get("EMAIL"), Some("a@example.com"));
        assert_eq!(env.get("email"), None);
    }

    #[test]
    fn folded_duplicates_keep_every_value() {
        let env = git_env(&[("Lfs.Url", "a"), ("lfs.url", "b")]);
        assert_eq!(env.get_all("lfs.url").len(), 2);
    }

    #[test]
    fn bool_tokens() {
        for token in ["true", "TRUE", "1", "yes", "On", " true "] {
            assert_eq!(parse_bool(token), Some(true), "{token}");
        }
        for token in ["false", "0", "No", "off"] {
            assert_eq!(parse_bool(token), Some(false), "{token}");
        }
        assert_eq!(parse_bool("wat"), None);
        assert_eq!(parse_bool(""), None);
    }

    #[test]
    fn malformed_values_fall_back_to_default() {
        let env = git_env(&[("lfs.flag", "wat"), ("lfs.count", "ten")]);
        assert!(env.bool("lfs.flag", true));
        assert!(!env.bool("lfs.flag", false));
        assert_eq!(env.int("lfs.count", 8), 8);
        assert_eq!(env.int("lfs.missing", -1), -1);
    }

    #[test]
    fn int_accepts_signed_values() {
        let env = git_env(&[("a", " 12 "), ("b", "-3")]);
        assert_eq!(env.int("a", 0), 12);
        assert_eq!(env.int("b", 0), -3);
    }
}
