//! Feature toggles and transfer tuning
//!
//! Malformed flag values are treated exactly like absent ones, so a typo in
//! a config file leaves the feature at its default.

use crate::config::Configuration;

/// Concurrent transfers when `lfs.concurrenttransfers` is unset or invalid.
pub const DEFAULT_CONCURRENT_TRANSFERS: i64 = 8;

impl Configuration {
    /// Restrict transfers to the basic adapter.
    pub fn basic_transfers_only(&self) -> bool {
        self.git.bool("lfs.basictransfersonly", false)
    }

    /// Allow the resumable (tus) upload adapter.
    pub fn tus_transfers_allowed(&self) -> bool {
        self.git.bool("lfs.tustransfers", false)
    }

    /// Keep going when an object fails to download.
    ///
    /// Enabled by either `lfs.skipdownloaderrors` or
    /// `GIT_LFS_SKIP_DOWNLOAD_ERRORS`.
    pub fn skip_download_errors(&self) -> bool {
        self.git.bool("lfs.skipdownloaderrors", false)
            || self.os.bool("GIT_LFS_SKIP_DOWNLOAD_ERRORS", false)
    }

    /// Mark lockable files read-only in the working tree.
    ///
    /// `GIT_LFS_SET_LOCKABLE_READONLY` overrides `lfs.setlockablereadonly`.
    pub fn set_lockable_read_only(&self) -> bool {
        let from_git = self.git.bool("lfs.setlockablereadonly", true);
        self.os.bool("GIT_LFS_SET_LOCKABLE_READONLY", from_git)
    }

    /// Number of parallel object transfers. Always at least 1.
    pub fn concurrent_transfers(&self) -> usize {
        let value = self
            .git
            .int("lfs.concurrenttransfers", DEFAULT_CONCURRENT_TRANSFERS);
        let value = if value < 1 {
            DEFAULT_CONCURRENT_TRANSFERS
        } else {
            value
        };
        usize::try_from(value).unwrap_or(usize::MAX)
    }
}
