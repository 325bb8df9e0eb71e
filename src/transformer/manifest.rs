//! Manifest overrides applied before packaging

use crate::models::ExtensionManifest;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestOverrides {
    pub version: Option<String>,
    /// Already normalized match patterns
    pub host_patterns: Vec<String>,
}

impl ManifestOverrides {
    pub fn new(version: Option<String>, host_patterns: Vec<String>) -> Self {
        Self {
            version,
            host_patterns,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.version_override().is_none() && self.host_patterns.is_empty()
    }

    /// An empty version string is treated as no override
    fn version_override(&self) -> Option<&str> {
        self.version.as_deref().filter(|v| !v.is_empty())
    }

    pub fn apply(&self, manifest: &mut ExtensionManifest) {
        if let Some(version) = self.version_override() {
            debug!(from = ?manifest.version(), to = version, "overriding manifest version");
            manifest.set_version(version);
        }

        // An empty list leaves the declared permissions alone
        if !self.host_patterns.is_empty() {
            debug!(
                from = ?manifest.host_permissions(),
                to = ?self.host_patterns,
                "overriding host_permissions"
            );
            manifest.set_host_permissions(self.host_patterns.clone());
        }
    }
}
