//! Error types for bump-version modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from version parsing and arithmetic.
#[derive(Error, Debug)]
pub enum VersionError {
    #[error("Invalid semver version: {0}")]
    InvalidVersion(String),
}

/// Errors from the synchronizer pipeline.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Failed to read {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {reason}", path.display())]
    InvalidJson { path: PathBuf, reason: String },

    #[error("No \"version\" field found in {}", path.display())]
    VersionFieldMissing { path: PathBuf },

    #[error("Failed to find [package] version in {}", path.display())]
    PackageVersionNotFound { path: PathBuf },

    #[error(transparent)]
    Version(#[from] VersionError),
}
