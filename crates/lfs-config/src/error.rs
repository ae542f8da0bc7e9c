//! Error types for lfs-config

/// Result type for lfs-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while resolving configuration.
///
/// Most resolvers degrade malformed input to a safe default instead of
/// failing; only ordering extensions can be rejected.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Extensions '{first}' and '{second}' share priority {priority}")]
    DuplicatePriority {
        first: String,
        second: String,
        priority: i64,
    },
}
