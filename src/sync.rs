//! Version synchronizer: stage all three artifacts, then commit atomically.
//!
//! The three files are staged fully in memory first. Only when every staging
//! step has succeeded are the files written, each via a temp file persisted
//! over the original. A failure while staging therefore leaves the project
//! tree untouched.

use std::fs;
use std::path::{Path, PathBuf};

use semver::Version;
use tracing::debug;

use crate::error::SyncError;
use crate::records::{cargo, json};
use crate::version::{BumpKind, bump, parse_version};

/// Relative path of the canonical version source.
const PACKAGE_JSON: &str = "package.json";
/// Relative path of the Tauri packaging metadata.
const TAURI_CONF: &str = "src-tauri/tauri.conf.json";
/// Relative path of the backend crate manifest.
const CARGO_TOML: &str = "src-tauri/Cargo.toml";

/// Result of a successful bump.
#[derive(Debug, Clone)]
pub struct BumpOutcome {
    pub previous: Version,
    pub next: Version,
}

/// Keeps the three version records of a project tree in sync.
pub struct Synchronizer {
    root: PathBuf,
}

impl Synchronizer {
    /// Create a synchronizer for the project rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Read the canonical version, bump it, and rewrite all three records.
    pub fn bump(&self, kind: BumpKind) -> Result<BumpOutcome, SyncError> {
        let package_json = self.root.join(PACKAGE_JSON);
        let tauri_conf = self.root.join(TAURI_CONF);
        let cargo_toml = self.root.join(CARGO_TOML);

        // package.json is the canonical source of the current version.
        let package_content = read_file(&package_json)?;
        let current_raw = json::read_version(&package_json, &package_content)?;
        let current = parse_version(&current_raw)?;
        let next = bump(&current, kind);
        debug!(%current, %next, ?kind, "calculated next version");

        // Stage every new file content before writing anything.
        let tauri_content = read_file(&tauri_conf)?;
        let cargo_content = read_file(&cargo_toml)?;

        let staged = [
            (
                package_json.as_path(),
                json::set_version(&package_json, &package_content, &next)?,
            ),
            (
                tauri_conf.as_path(),
                json::set_version(&tauri_conf, &tauri_content, &next)?,
            ),
            (
                cargo_toml.as_path(),
                cargo::set_package_version(&cargo_toml, &cargo_content, &next)?,
            ),
        ];

        for (path, content) in staged {
            write_atomic(path, &content)?;
            debug!(path = %path.display(), "rewrote version record");
        }

        Ok(BumpOutcome {
            previous: current,
            next,
        })
    }
}

fn read_file(path: &Path) -> Result<String, SyncError> {
    fs::read_to_string(path).map_err(|e| SyncError::ReadFailed {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write via a temp file in the same directory, then rename over the target.
fn write_atomic(path: &Path, content: &str) -> Result<(), SyncError> {
    let err = |e: std::io::Error| SyncError::WriteFailed {
        path: path.to_path_buf(),
        source: e,
    };

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let tmp = tempfile::NamedTempFile::new_in(dir).map_err(err)?;
    fs::write(tmp.path(), content).map_err(err)?;
    tmp.persist(path)
        .map_err(|e| err(e.error))?;

    Ok(())
}
