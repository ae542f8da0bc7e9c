//! Clean/smudge filter extensions declared under `lfs.extension.<name>.*`

use std::collections::HashMap;
use std::ops::Index;

use crate::config::Configuration;
use crate::environment::parse_int;
use crate::{Error, Result};

const EXTENSION_PREFIX: &str = "lfs.extension.";

static EMPTY_EXTENSION: Extension = Extension {
    name: String::new(),
    clean: String::new(),
    smudge: String::new(),
    priority: 0,
};

/// A named pair of filter commands with its position in the chain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extension {
    pub name: String,
    pub clean: String,
    pub smudge: String,
    pub priority: i64,
}

/// Extensions keyed by name.
///
/// Looking up an unknown name yields the zero record instead of failing, so
/// callers can index unconditionally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extensions {
    by_name: HashMap<String, Extension>,
}

impl Extensions {
    /// The extension called `name`, or the zero record.
    pub fn get(&self, name: &str) -> &Extension {
        self.by_name.get(name).unwrap_or(&EMPTY_EXTENSION)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Extension> {
        self.by_name.values()
    }

    /// Order by ascending priority.
    ///
    /// Two extensions with the same priority cannot be chained
    /// deterministically, so that is an error.
    pub fn sorted(&self) -> Result<Vec<Extension>> {
        let mut sorted: Vec<Extension> = self.by_name.values().cloned().collect();
        sorted.sort_by(|a, b| a.priority.cmp(&b.priority).then_with(|| a.name.cmp(&b.name)));

        if let Some(pair) = sorted.windows(2).find(|w| w[0].priority == w[1].priority) {
            return Err(Error::DuplicatePriority {
                first: pair[0].name.clone(),
                second: pair[1].name.clone(),
                priority: pair[0].priority,
            });
        }

        Ok(sorted)
    }
}

impl Index<&str> for Extensions {
    type Output = Extension;

    fn index(&self, name: &str) -> &Extension {
        self.get(name)
    }
}

/// Accumulates fields for one extension during the scan.
#[derive(Default)]
struct ExtensionBuilder {
    clean: Option<String>,
    smudge: Option<String>,
    priority: Option<i64>,
}

impl ExtensionBuilder {
    fn build(self, name: String) -> Extension {
        Extension {
            name,
            clean: self.clean.unwrap_or_default(),
            smudge: self.smudge.unwrap_or_default(),
            priority: self.priority.unwrap_or_default(),
        }
    }
}

impl Configuration {
    /// Group every `lfs.extension.<name>.<field>` key into records.
    ///
    /// Recognized fields are `clean`, `smudge` and `priority`. A priority that
    /// is not a non-negative integer leaves the record at priority 0.
    pub fn extensions(&self) -> Extensions {
        let mut builders: HashMap<String, ExtensionBuilder> = HashMap::new();

        for key in self.git.keys() {
            let Some((name, field)) = key
                .strip_prefix(EXTENSION_PREFIX)
                .and_then(|rest| rest.rsplit_once('.'))
            else {
                continue;
            };
            if name.is_empty() {
                continue;
            }
            let Some(value) = self.git.get(key) else {
                continue;
            };

            let builder = match field {
                "clean" | "smudge" | "priority" => builders.entry(name.to_string()).or_default(),
                _ => {
                    tracing::debug!(key, "Ignoring unknown extension field");
                    continue;
                }
            };

            match field {
                "clean" => builder.clean = Some(value.to_string()),
                "smudge" => builder.smudge = Some(value.to_string()),
                _ => match parse_int(value) {
                    Some(priority) if priority >= 0 => builder.priority = Some(priority),
                    _ => tracing::debug!(key, value, "Invalid extension priority, using 0"),
                },
            }
        }

        Extensions {
            by_name: builders
                .into_iter()
                .map(|(name, builder)| (name.clone(), builder.build(name)))
                .collect(),
        }
    }

    /// Extensions in chain order. See [`Extensions::sorted`].
    pub fn sorted_extensions(&self) -> Result<Vec<Extension>> {
        self.extensions().sorted()
    }
}
