//! Manifest loading and rendering

use crate::error::PackageError;
use crate::models::ExtensionManifest;
use anyhow::{Context, Result};
use serde_json::Value;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Parse manifest.json from bytes
pub fn parse_manifest(content: &[u8]) -> Result<ExtensionManifest> {
    let value: Value = serde_json::from_slice(content).map_err(PackageError::from)?;

    match value {
        Value::Object(fields) => Ok(ExtensionManifest::from_fields(fields)),
        _ => Err(PackageError::ManifestNotObject.into()),
    }
}

/// Parse manifest.json from file path
pub fn parse_manifest_from_file(path: impl AsRef<Path>) -> Result<ExtensionManifest> {
    let path = path.as_ref();
    let content = match fs::read(path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            return Err(PackageError::ManifestNotFound(path.to_path_buf()).into());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("Failed to read {}", path.display()));
        }
    };

    parse_manifest(&content).with_context(|| format!("Invalid manifest at {}", path.display()))
}

/// Render with 2-space indentation and a trailing newline
pub fn render_manifest(manifest: &ExtensionManifest) -> Result<String> {
    let mut rendered =
        serde_json::to_string_pretty(manifest).context("Failed to serialize manifest")?;
    rendered.push('\n');
    Ok(rendered)
}

pub fn write_manifest(path: impl AsRef<Path>, manifest: &ExtensionManifest) -> Result<()> {
    let path = path.as_ref();
    let rendered = render_manifest(manifest)?;
    fs::write(path, rendered).with_context(|| format!("Failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_simple_manifest() {
        let json = r#"{
            "manifest_version": 3,
            "name": "Test Extension",
            "version": "1.0.0"
        }"#;

        let manifest = parse_manifest(json.as_bytes()).unwrap();
        assert_eq!(manifest.version(), Some("1.0.0"));
        assert_eq!(manifest.get("name").and_then(Value::as_str), Some("Test Extension"));
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let err = parse_manifest(b"{ \"version\": ").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PackageError>(),
            Some(PackageError::InvalidManifest(_))
        ));
    }

    #[test]
    fn test_parse_rejects_non_object() {
        let err = parse_manifest(b"[1, 2, 3]").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PackageError>(),
            Some(PackageError::ManifestNotObject)
        ));
    }

    #[test]
    fn test_render_round_trip_formatting() {
        let json = "{\n  \"manifest_version\": 3,\n  \"version\": \"1.0\",\n  \"host_permissions\": [\n    \"https://example.com/*\"\n  ],\n  \"icons\": {}\n}\n";

        let manifest = parse_manifest(json.as_bytes()).unwrap();
        assert_eq!(render_manifest(&manifest).unwrap(), json);
    }

    #[test]
    fn test_render_keeps_numbers_exact() {
        let json = "{\n  \"version\": \"1.0\",\n  \"build\": 123456789012345678901234567890,\n  \"ratio\": 1.50\n}\n";

        let manifest = parse_manifest(json.as_bytes()).unwrap();
        assert_eq!(render_manifest(&manifest).unwrap(), json);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = parse_manifest_from_file(dir.path().join("manifest.json")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PackageError>(),
            Some(PackageError::ManifestNotFound(_))
        ));
    }
}
