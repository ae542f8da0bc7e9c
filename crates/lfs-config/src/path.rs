//! Include/exclude path lists for fetch filtering

use crate::config::Configuration;

/// Separator between entries of a path list value.
pub const PATH_LIST_DELIMITER: char = ',';

/// Reduce a path to its canonical lexical form.
///
/// Only `/` is a separator; backslashes are glob escapes and pass through
/// untouched. Duplicate separators collapse, `.` segments vanish and `..`
/// consumes the segment before it. A `..` that would climb above the root
/// of an absolute path is dropped; at the front of a relative path it is
/// kept. Trailing separators are removed, except for the root itself.
pub fn clean_path(raw: &str) -> String {
    let rooted = raw.starts_with('/');

    let mut segments: Vec<&str> = Vec::new();
    for segment in raw.split('/') {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(&last) if last != ".." => {
                    segments.pop();
                }
                _ if rooted => {}
                _ => segments.push(".."),
            },
            _ => segments.push(segment),
        }
    }

    let joined = segments.join("/");
    match (rooted, joined.is_empty()) {
        (true, _) => format!("/{joined}"),
        (false, true) => ".".to_string(),
        (false, false) => joined,
    }
}

/// Split a delimited path list and clean every entry, preserving order.
///
/// Entries are whitespace-trimmed and never dropped, so a blank entry cleans
/// to `.`. An empty list value yields no entries.
pub fn clean_paths(list: &str, delimiter: char) -> Vec<String> {
    if list.is_empty() {
        return Vec::new();
    }

    list.split(delimiter).map(str::trim).map(clean_path).collect()
}

impl Configuration {
    /// Paths from `lfs.fetchinclude`.
    pub fn fetch_include_paths(&self) -> Vec<String> {
        self.path_list("lfs.fetchinclude")
    }

    /// Paths from `lfs.fetchexclude`.
    pub fn fetch_exclude_paths(&self) -> Vec<String> {
        self.path_list("lfs.fetchexclude")
    }

    fn path_list(&self, key: &str) -> Vec<String> {
        self.git
            .get(key)
            .map(|list| clean_paths(list, PATH_LIST_DELIMITER))
            .unwrap_or_default()
    }
}
