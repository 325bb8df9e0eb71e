//! Zip archive builder

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Component, Path};
use tracing::{debug, trace};
use walkdir::WalkDir;
use zip::write::{FileOptions, ZipWriter};
use zip::CompressionMethod;

/// Zip every file under `source_dir` into `zip_path` and return the entry
/// names in the order written.
///
/// Files are visited in sorted order and stored with forward-slash paths
/// relative to `source_dir`. Directories get no entries of their own. Parent
/// directories of `zip_path` are created and an existing archive is replaced.
pub fn create_archive(source_dir: &Path, zip_path: &Path) -> Result<Vec<String>> {
    if let Some(parent) = zip_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let file = File::create(zip_path)
        .with_context(|| format!("Failed to create ZIP file {}", zip_path.display()))?;
    let mut zip = ZipWriter::new(file);

    // No "time" feature on zip: every entry gets the same fixed timestamp
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o644);

    let mut entries = Vec::new();
    for entry in WalkDir::new(source_dir).sort_by_file_name() {
        let entry = entry.with_context(|| format!("Failed to walk {}", source_dir.display()))?;
        if entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        let relative_path = path
            .strip_prefix(source_dir)
            .context("Failed to get relative path")?;
        let name = archive_name(relative_path);
        trace!(entry = %name, "adding to archive");

        zip.start_file(name.as_str(), options)
            .with_context(|| format!("Failed to add {name}"))?;
        let content =
            fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
        zip.write_all(&content)
            .with_context(|| format!("Failed to write {name}"))?;

        entries.push(name);
    }

    zip.finish().context("Failed to finish ZIP file")?;
    debug!(entries = entries.len(), path = %zip_path.display(), "archive written");

    Ok(entries)
}

/// Join path components with `/` whatever the host separator
fn archive_name(relative_path: &Path) -> String {
    relative_path
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
