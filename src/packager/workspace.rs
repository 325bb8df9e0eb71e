//! Scratch copy of the extension tree
//!
//! The original source is never modified. It is copied into a private
//! temporary directory which is removed when the workspace is dropped,
//! including on error paths.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use tracing::{debug, trace};
use walkdir::WalkDir;

const SCRATCH_PREFIX: &str = "extpack-";
const WORKING_DIR_NAME: &str = "extension";

#[derive(Debug)]
pub struct ScratchWorkspace {
    // Held for its Drop; removes the whole scratch tree
    temp_dir: TempDir,
    working_dir: PathBuf,
}

impl ScratchWorkspace {
    /// Copy `source_dir` into a fresh scratch directory, created under
    /// `scratch_root` when given and the system temp dir otherwise
    pub fn copy_from(source_dir: &Path, scratch_root: Option<&Path>) -> Result<Self> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(SCRATCH_PREFIX);
        let temp_dir = match scratch_root {
            Some(root) => builder.tempdir_in(root),
            None => builder.tempdir(),
        }
        .context("Failed to create scratch directory")?;
        debug!(path = %temp_dir.path().display(), "created scratch directory");

        let working_dir = temp_dir.path().join(WORKING_DIR_NAME);
        let copied = copy_tree(source_dir, &working_dir)?;
        debug!(files = copied, "copied extension tree");

        Ok(Self {
            temp_dir,
            working_dir,
        })
    }

    /// Root of the copied extension tree
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    #[cfg(test)]
    fn scratch_dir(&self) -> &Path {
        self.temp_dir.path()
    }
}

/// Recursively copy a directory tree, returning the number of files copied.
/// Symlinks are followed and copied as regular content.
pub fn copy_tree(source_dir: &Path, dest_dir: &Path) -> Result<usize> {
    let mut copied = 0;

    for entry in WalkDir::new(source_dir).follow_links(true) {
        let entry = entry
            .with_context(|| format!("Failed to walk {}", source_dir.display()))?;
        let relative_path = entry
            .path()
            .strip_prefix(source_dir)
            .context("Failed to get relative path")?;
        let dest_path = dest_dir.join(relative_path);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest_path)
                .with_context(|| format!("Failed to create {}", dest_path.display()))?;
        } else {
            trace!(path = %relative_path.display(), "copying");
            fs::copy(entry.path(), &dest_path).with_context(|| {
                format!("Failed to copy {}", entry.path().display())
            })?;
            copied += 1;
        }
    }

    Ok(copied)
}
