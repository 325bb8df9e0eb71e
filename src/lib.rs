//! Browser extension packager
//!
//! Copies an extension source tree into a scratch directory, optionally
//! rewrites the manifest `version` and `host_permissions`, and zips the result.

pub mod error;
pub mod models;
pub mod packager;
pub mod parser;
pub mod transformer;
pub mod validator;

pub use error::PackageError;
pub use models::{ExtensionManifest, ManifestPreview, PackageOptions, PackageOutcome};
pub use transformer::normalize_host_patterns;

use anyhow::Result;
use tracing::{debug, info};

/// Main entry point for packaging an extension
pub fn package_extension(options: &PackageOptions) -> Result<PackageOutcome> {
    // 1. Precondition, before any scratch work
    validator::validate_source_dir(&options.source_dir)?;

    let host_patterns = normalize_host_patterns(&options.hosts, options.allow_http);
    let overrides = transformer::ManifestOverrides::new(options.version.clone(), host_patterns);
    if overrides.is_empty() {
        debug!("no manifest overrides requested");
    }

    // 2. Private copy of the tree, removed when `workspace` drops
    let workspace = packager::ScratchWorkspace::copy_from(
        &options.source_dir,
        options.scratch_root.as_deref(),
    )?;

    // 3. Load and edit the manifest
    let manifest_path = workspace.working_dir().join(&options.manifest_name);
    let mut manifest = parser::parse_manifest_from_file(&manifest_path)?;
    overrides.apply(&mut manifest);

    if options.dry_run {
        return Ok(PackageOutcome::Preview(manifest.preview()));
    }

    // 4. Write the manifest back and build the archive
    parser::write_manifest(&manifest_path, &manifest)?;
    let entries = packager::create_archive(workspace.working_dir(), &options.output_path)?;
    info!(path = %options.output_path.display(), entries = entries.len(), "created package");

    Ok(PackageOutcome::Archive {
        path: options.output_path.clone(),
        entries,
    })
}
