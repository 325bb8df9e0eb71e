//! Manifest data structures
//!
//! Only `version` and `host_permissions` are exposed. Every other key is
//! carried through untouched, in its original position.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const VERSION_KEY: &str = "version";
pub const HOST_PERMISSIONS_KEY: &str = "host_permissions";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtensionManifest {
    fields: Map<String, Value>,
}

impl ExtensionManifest {
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// The manifest version, if present and a string
    pub fn version(&self) -> Option<&str> {
        self.fields.get(VERSION_KEY).and_then(Value::as_str)
    }

    pub fn set_version(&mut self, version: impl Into<String>) {
        self.fields
            .insert(VERSION_KEY.to_string(), Value::String(version.into()));
    }

    /// Declared host permissions. Non-string entries are ignored.
    pub fn host_permissions(&self) -> Vec<String> {
        self.fields
            .get(HOST_PERMISSIONS_KEY)
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn set_host_permissions(&mut self, patterns: Vec<String>) {
        let values = patterns.into_iter().map(Value::String).collect();
        self.fields
            .insert(HOST_PERMISSIONS_KEY.to_string(), Value::Array(values));
    }

    /// Raw access for callers that need to inspect untouched keys
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Effective values exactly as they will be written, whatever their type
    pub fn preview(&self) -> ManifestPreview {
        ManifestPreview {
            version: self.fields.get(VERSION_KEY).cloned(),
            host_permissions: self
                .fields
                .get(HOST_PERMISSIONS_KEY)
                .cloned()
                .unwrap_or_else(|| Value::Array(Vec::new())),
        }
    }
}

/// The fields shown in dry-run mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestPreview {
    pub version: Option<Value>,
    pub host_permissions: Value,
}

impl ManifestPreview {
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
