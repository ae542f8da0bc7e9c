//! Snapshot loading from git config levels and the process environment

use std::collections::HashMap;

use git2::{Config, ConfigLevel, Repository};

use crate::Result;

/// Precedence of a config level; higher ranks override lower ones.
fn level_rank(level: ConfigLevel) -> u8 {
    match level {
        ConfigLevel::ProgramData => 0,
        ConfigLevel::System => 1,
        ConfigLevel::XDG => 2,
        ConfigLevel::Global => 3,
        ConfigLevel::Local => 4,
        ConfigLevel::App => 6,
        ConfigLevel::Highest => 7,
        // Levels added by newer libgit2 releases (worktree) sit above local.
        #[allow(unreachable_patterns)]
        _ => 5,
    }
}

/// Read every entry of `config` into an ordered-list-per-key map.
///
/// Entries are ordered by level, lowest precedence first, keeping file order
/// within a level, so the last value of each key is the effective one. Keys
/// are lowercased. An entry without a value (`[core] bare`) means `true`.
pub fn config_values(config: &mut Config) -> Result<HashMap<String, Vec<String>>> {
    let snapshot = config.snapshot()?;
    let mut entries = snapshot.entries(None)?;

    let mut collected: Vec<(u8, String, String)> = Vec::new();
    while let Some(entry) = entries.next() {
        let entry = entry?;

        let Some(name) = entry.name() else {
            tracing::warn!("Skipping config entry with a non-UTF-8 name");
            continue;
        };
        let value = match entry.has_value().then(|| entry.value_bytes()) {
            None => "true",
            Some(bytes) => match std::str::from_utf8(bytes) {
                Ok(value) => value,
                Err(_) => {
                    tracing::warn!(key = name, "Skipping config entry with a non-UTF-8 value");
                    continue;
                }
            },
        };

        collected.push((
            level_rank(entry.level()),
            name.to_lowercase(),
            value.to_string(),
        ));
    }

    collected.sort_by_key(|(rank, _, _)| *rank);

    let mut values: HashMap<String, Vec<String>> = HashMap::new();
    for (_, key, value) in collected {
        values.entry(key).or_default().push(value);
    }

    tracing::debug!(keys = values.len(), "Loaded git config");
    Ok(values)
}

/// Read the merged config of `repo` (system through worktree levels).
pub fn load_git_values(repo: &Repository) -> Result<HashMap<String, Vec<String>>> {
    let mut config = repo.config()?;
    config_values(&mut config)
}

/// Build the environment namespace from `(name, value)` pairs.
pub fn load_os_values<I, K, V>(vars: I) -> HashMap<String, Vec<String>>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut values: HashMap<String, Vec<String>> = HashMap::new();
    for (name, value) in vars {
        values.entry(name.into()).or_default().push(value.into());
    }
    values
}

/// Environment namespace of the running process.
///
/// Variables whose name or value is not valid UTF-8 are skipped.
pub fn process_os_values() -> HashMap<String, Vec<String>> {
    let vars = std::env::vars_os().filter_map(|(name, value)| {
        match (name.into_string(), value.into_string()) {
            (Ok(name), Ok(value)) => Some((name, value)),
            (name, _) => {
                tracing::debug!(?name, "Skipping non-UTF-8 environment variable");
                None
            }
        }
    });
    load_os_values(vars)
}
