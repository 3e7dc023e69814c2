//! JSON version records: package.json and tauri.conf.json.

use std::path::Path;

use semver::Version;

use crate::error::SyncError;

/// Read the top-level `"version"` string field of a JSON document.
///
/// `path` is only used for error reporting.
pub fn read_version(path: &Path, content: &str) -> Result<String, SyncError> {
    let json: serde_json::Value =
        serde_json::from_str(content).map_err(|e| SyncError::InvalidJson {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    json.get("version")
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or_else(|| SyncError::VersionFieldMissing {
            path: path.to_path_buf(),
        })
}

/// Produce the document's new contents with the version field replaced.
///
/// All other fields round-trip through the parse; output is re-serialized
/// with 2-space indentation and a trailing newline (npm's formatting).
pub fn set_version(path: &Path, content: &str, new_version: &Version) -> Result<String, SyncError> {
    let mut json: serde_json::Value =
        serde_json::from_str(content).map_err(|e| SyncError::InvalidJson {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    json["version"] = serde_json::Value::String(new_version.to_string());

    let output = serde_json::to_string_pretty(&json).map_err(|e| SyncError::InvalidJson {
        path: path.to_path_buf(),
        reason: format!("Failed to serialize JSON: {}", e),
    })?;

    Ok(format!("{}\n", output))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn path() -> PathBuf {
        PathBuf::from("package.json")
    }

    #[test]
    fn test_read_version() {
        let content = r#"{"name": "player", "version": "1.4.9"}"#;
        assert_eq!(read_version(&path(), content).unwrap(), "1.4.9");
    }

    #[test]
    fn test_read_version_missing_field() {
        let content = r#"{"name": "player"}"#;
        assert!(matches!(
            read_version(&path(), content),
            Err(SyncError::VersionFieldMissing { .. })
        ));
    }

    #[test]
    fn test_read_version_invalid_json() {
        assert!(matches!(
            read_version(&path(), "{not json"),
            Err(SyncError::InvalidJson { .. })
        ));
    }

    #[test]
    fn test_set_version_preserves_other_fields() {
        let content = r#"{"name": "player", "version": "1.4.9", "private": true}"#;
        let output = set_version(&path(), content, &Version::new(1, 5, 0)).unwrap();

        assert!(output.contains("\"version\": \"1.5.0\""));
        assert!(output.contains("\"name\": \"player\""));
        assert!(output.contains("\"private\": true"));
    }

    #[test]
    fn test_set_version_two_space_indent_and_trailing_newline() {
        let content = r#"{"version": "0.1.0"}"#;
        let output = set_version(&path(), content, &Version::new(0, 2, 0)).unwrap();

        assert_eq!(output, "{\n  \"version\": \"0.2.0\"\n}\n");
    }

    #[test]
    fn test_set_version_keeps_key_order() {
        let content = r#"{"productName": "player", "version": "1.4.9", "identifier": "com.player.app"}"#;
        let output = set_version(&path(), content, &Version::new(1, 5, 0)).unwrap();

        let product = output.find("productName").unwrap();
        let version = output.find("version").unwrap();
        let identifier = output.find("identifier").unwrap();
        assert!(product < version && version < identifier);
    }

    #[test]
    fn test_set_version_round_trips_nested_structure() {
        let content = r#"{"version": "1.0.0", "bundle": {"targets": ["dmg", "msi"]}}"#;
        let output = set_version(&path(), content, &Version::new(1, 0, 1)).unwrap();

        let reparsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(reparsed["bundle"]["targets"][1], "msi");
        assert_eq!(reparsed["version"], "1.0.1");
    }
}
