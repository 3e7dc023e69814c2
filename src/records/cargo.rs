//! Line-oriented patching of the `[package]` version in a Cargo.toml.
//!
//! A structured TOML round-trip would lose comments and formatting, so this
//! is a small state machine over lines instead: track the current section,
//! rewrite the single matching `version = "..."` line, and keep every other
//! byte as-is. Line endings are normalized to `\n` on rewrite.

use std::path::Path;

use regex_lite::Regex;
use semver::Version;

use crate::error::SyncError;

/// Replace the quoted value of the first `version = "..."` line inside the
/// `[package]` section. Fails if no such line exists.
pub fn set_package_version(
    path: &Path,
    content: &str,
    new_version: &Version,
) -> Result<String, SyncError> {
    let version_line = Regex::new(r#"^(\s*version\s*=\s*)".*?"\s*$"#).expect("Invalid regex");

    let mut lines: Vec<String> = content.split('\n').map(strip_carriage_return).collect();

    let mut in_package = false;
    let mut updated = false;

    for line in lines.iter_mut() {
        let trimmed = line.trim();

        // Section headers are compared verbatim, so `[ package ]` or
        // `[package.metadata]` do not count.
        if trimmed.starts_with('[') && trimmed.ends_with(']') {
            in_package = trimmed == "[package]";
        }

        if in_package && trimmed.starts_with("version") {
            if let Some(caps) = version_line.captures(line) {
                *line = format!("{}\"{}\"", &caps[1], new_version);
                updated = true;
                break;
            }
        }
    }

    if !updated {
        return Err(SyncError::PackageVersionNotFound {
            path: path.to_path_buf(),
        });
    }

    Ok(lines.join("\n"))
}

fn strip_carriage_return(line: &str) -> String {
    line.strip_suffix('\r').unwrap_or(line).to_string()
}
