//! Current-version lookup in project manifests.
//!
//! Supports Cargo.toml and package.json. Only reads; bumping the manifest
//! is left to the release tooling around this crate.

use std::path::Path;

use semver::Version;
use tracing::debug;

use crate::error::VersionError;

/// Read the version a manifest currently declares.
///
/// The format is picked from the file name: `package.json` (or any `.json`)
/// is read as npm metadata, everything else as a Cargo manifest.
pub fn read_manifest_version(path: &Path) -> Result<Version, VersionError> {
    let content = std::fs::read_to_string(path).map_err(|source| {
        VersionError::ManifestReadFailed {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let is_json = path.extension().is_some_and(|ext| ext == "json");
    let raw = if is_json {
        package_json_version(path, &content)?
    } else {
        cargo_toml_version(path, &content)?
    };

    debug!(path = %path.display(), version = %raw, "Read manifest version");
    Version::parse(&raw).map_err(|e| VersionError::ParseFailed(raw, e))
}

fn cargo_toml_version(path: &Path, content: &str) -> Result<String, VersionError> {
    let doc = content.parse::<toml_edit::DocumentMut>().map_err(|e| {
        VersionError::ManifestParseFailed {
            path: path.to_path_buf(),
            reason: format!("Invalid TOML: {}", e),
        }
    })?;

    doc.get("package")
        .and_then(|p| p.get("version"))
        .and_then(|v| v.as_str())
        .map(String::from)
        .ok_or_else(|| VersionError::ManifestWithoutVersion(path.to_path_buf()))
}

fn package_json_version(path: &Path, content: &str) -> Result<String, VersionError> {
    let json: serde_json::Value = serde_json::from_str(content).map_err(|e| {
        VersionError::ManifestParseFailed {
            path: path.to_path_buf(),
            reason: format!("Invalid JSON: {}", e),
        }
    })?;

    json.get("version")
        .and_then(|v| v.as_str())
        .map(String::from)
        .ok_or_else(|| VersionError::ManifestWithoutVersion(path.to_path_buf()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_cargo_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Cargo.toml");
        std::fs::write(&path, "[package]\nname = \"demo\"\nversion = \"1.4.2\"\n").unwrap();

        assert_eq!(read_manifest_version(&path).unwrap(), Version::new(1, 4, 2));
    }

    #[test]
    fn test_read_package_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        std::fs::write(&path, r#"{ "name": "demo", "version": "3.3.3" }"#).unwrap();

        assert_eq!(read_manifest_version(&path).unwrap(), Version::new(3, 3, 3));
    }

    #[test]
    fn test_manifest_without_version() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("Cargo.toml");
        std::fs::write(&path, "[workspace]\nmembers = []\n").unwrap();

        assert!(matches!(
            read_manifest_version(&path),
            Err(VersionError::ManifestWithoutVersion(_))
        ));
    }

    #[test]
    fn test_invalid_semver_in_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("package.json");
        std::fs::write(&path, r#"{ "version": "one" }"#).unwrap();

        assert!(matches!(
            read_manifest_version(&path),
            Err(VersionError::ParseFailed(raw, _)) if raw == "one"
        ));
    }

    #[test]
    fn test_missing_manifest() {
        let err = read_manifest_version(Path::new("/no/such/Cargo.toml")).unwrap_err();
        assert!(matches!(err, VersionError::ManifestReadFailed { .. }));
    }
}
