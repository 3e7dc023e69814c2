//! bump-version - keeps the release version of a Tauri project in sync.
//!
//! # Overview
//!
//! The project carries its version in three places: `package.json` (the
//! canonical source), `src-tauri/tauri.conf.json`, and
//! `src-tauri/Cargo.toml`. This crate reads the canonical version, bumps it
//! by the requested kind, and rewrites all three records consistently.

pub mod error;
pub mod records;
pub mod sync;
pub mod version;

// Re-export commonly used types
pub use error::{SyncError, VersionError};
pub use sync::{BumpOutcome, Synchronizer};
pub use version::BumpKind;
