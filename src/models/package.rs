//! Packaging options and results

use super::manifest::ManifestPreview;
use std::path::PathBuf;

pub const DEFAULT_SOURCE_DIR: &str = "extension";
pub const DEFAULT_OUTPUT_PATH: &str = "dist/chromeos-graylog-agent.zip";
pub const DEFAULT_MANIFEST_NAME: &str = "manifest.json";

#[derive(Debug, Clone)]
pub struct PackageOptions {
    /// Extension source tree, copied verbatim
    pub source_dir: PathBuf,
    pub output_path: PathBuf,
    /// Manifest file name relative to the source tree
    pub manifest_name: String,
    /// Raw `--host` entries, normalized before use
    pub hosts: Vec<String>,
    pub allow_http: bool,
    pub version: Option<String>,
    pub dry_run: bool,
    /// Parent for the scratch directory; system temp dir when `None`
    pub scratch_root: Option<PathBuf>,
}

impl Default for PackageOptions {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(DEFAULT_SOURCE_DIR),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            manifest_name: DEFAULT_MANIFEST_NAME.to_string(),
            hosts: Vec::new(),
            allow_http: false,
            version: None,
            dry_run: false,
            scratch_root: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PackageOutcome {
    /// Dry run: nothing written
    Preview(ManifestPreview),
    Archive {
        path: PathBuf,
        /// Entry names in the order they were written
        entries: Vec<String>,
    },
}
