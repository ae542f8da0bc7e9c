//! File modes for objects written into a shared repository

#[cfg(unix)]
use std::sync::Mutex;

use crate::config::Configuration;

/// Mode requested for new files before the mask is applied.
pub const DEFAULT_FILE_MODE: u32 = 0o666;

/// Mode for `core.sharedRepository = group`.
pub const GROUP_SHARED_MODE: u32 = 0o660;

/// Mode for `core.sharedRepository = all`.
pub const WORLD_SHARED_MODE: u32 = 0o664;

/// Guards the set-and-restore sequence in [`umask`].
#[cfg(unix)]
static UMASK_LOCK: Mutex<()> = Mutex::new(());

/// Query the process umask.
///
/// On Linux the mask is read from `/proc/self/status`, which leaves it
/// untouched. Elsewhere, or when that file has no `Umask:` line, the mask is
/// set to zero and put back; other threads creating files during that window
/// get unmasked modes. Never cached: the mask may change between calls.
#[cfg(unix)]
pub fn umask() -> u32 {
    proc_status_umask().unwrap_or_else(umask_by_reset)
}

#[cfg(target_os = "linux")]
fn proc_status_umask() -> Option<u32> {
    let status = std::fs::read_to_string("/proc/self/status").ok()?;
    parse_status_umask(&status)
}

#[cfg(all(unix, not(target_os = "linux")))]
fn proc_status_umask() -> Option<u32> {
    None
}

/// Octal value of the `Umask:` line of a `/proc/<pid>/status` dump.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn parse_status_umask(status: &str) -> Option<u32> {
    status
        .lines()
        .find_map(|line| line.strip_prefix("Umask:"))
        .and_then(|value| u32::from_str_radix(value.trim(), 8).ok())
}

/// Set-and-restore query; concurrent callers are serialized.
#[cfg(unix)]
fn umask_by_reset() -> u32 {
    use nix::sys::stat::{Mode, umask as set_umask};

    let _guard = UMASK_LOCK
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    let previous = set_umask(Mode::empty());
    set_umask(previous);
    u32::from(previous.bits())
}

/// Query the process umask.
///
/// Platforms without a umask behave as if it were `022`.
#[cfg(not(unix))]
pub fn umask() -> u32 {
    0o022
}

/// Default mode with the process umask applied.
pub fn umask_default_mode() -> u32 {
    DEFAULT_FILE_MODE & !umask()
}

/// Map a `core.sharedRepository` token to a mode.
///
/// Returns `None` for tokens that defer to the umask, including anything
/// unrecognized.
pub fn shared_repository_mode(token: &str) -> Option<u32> {
    let token = token.trim().to_ascii_lowercase();
    match token.as_str() {
        "group" | "true" | "1" | "yes" => Some(GROUP_SHARED_MODE),
        "all" | "world" | "everybody" | "2" => Some(WORLD_SHARED_MODE),
        _ => parse_octal_mode(&token),
    }
}

/// Strict `0NNN` octal literal.
fn parse_octal_mode(token: &str) -> Option<u32> {
    if token.len() != 4 || !token.starts_with('0') {
        return None;
    }
    u32::from_str_radix(token, 8).ok()
}

/// Add an execute bit wherever a read bit is set.
pub fn executable_mode(mode: u32) -> u32 {
    mode | ((mode & 0o444) >> 2)
}

impl Configuration {
    /// Mode for new files, from `core.sharedrepository`.
    ///
    /// Unset and unrecognized values both yield `0666 & !umask`.
    pub fn repository_permissions(&self) -> u32 {
        match self.git.get("core.sharedrepository") {
            Some(token) => shared_repository_mode(token).unwrap_or_else(|| {
                tracing::debug!(token, "Shared repository setting defers to umask");
                umask_default_mode()
            }),
            None => umask_default_mode(),
        }
    }

    /// [`repository_permissions`](Self::repository_permissions) for
    /// executable files.
    pub fn repository_executable_permissions(&self) -> u32 {
        executable_mode(self.repository_permissions())
    }
}
