//! Layered configuration resolution for the large-file git extension
//!
//! A [`Configuration`] is built once from a [`Values`] snapshot (git config
//! entries plus process environment) and the current branch, then queried
//! for typed answers: remotes, feature flags, filter extensions, fetch path
//! lists, identities and repository file modes.
//!
//! Malformed values never fail a query; each resolver documents the safe
//! default it degrades to.
//!
//! ```
//! use lfs_config::{Configuration, Values};
//!
//! let config = Configuration::new(
//!     Values::new()
//!         .git("branch.main.remote", ["upstream"])
//!         .git("lfs.tustransfers", ["true"]),
//! )
//! .with_current_ref("main");
//!
//! assert_eq!(config.remote(), "upstream");
//! assert!(config.tus_transfers_allowed());
//! ```

pub mod config;
pub mod environment;
pub mod error;
pub mod extension;
pub mod fetch;
pub mod flags;
pub mod identity;
pub mod path;
pub mod permissions;
pub mod remote;
pub mod values;

pub use config::{Configuration, Source};
pub use environment::{Environment, KeyCase};
pub use error::{Error, Result};
pub use extension::{Extension, Extensions};
pub use fetch::FetchPruneConfig;
pub use identity::{Identity, Role};
pub use path::{clean_path, clean_paths};
pub use permissions::umask;
pub use remote::DEFAULT_REMOTE;
pub use values::Values;
