//! Error types for extension packaging

use std::path::PathBuf;
use thiserror::Error;

/// Failures with a meaning of their own. Plain I/O failures travel as
/// `anyhow::Error` with path context attached instead.
#[derive(Debug, Error)]
pub enum PackageError {
    #[error("Extension directory not found: {}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("Extension source is not a directory: {}", .0.display())]
    SourceNotDirectory(PathBuf),

    #[error("Manifest not found: {}", .0.display())]
    ManifestNotFound(PathBuf),

    #[error("Failed to parse manifest: {0}")]
    InvalidManifest(#[from] serde_json::Error),

    #[error("Manifest must be a JSON object")]
    ManifestNotObject,
}
