//! Shared test utilities for the lfs workspace.
//!
//! Dev-dependency only, never published.
//!
//! - [`git`]: git repository fixtures with config and branch state

pub mod git;
