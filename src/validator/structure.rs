//! Source tree precondition checks

use crate::error::PackageError;
use std::path::Path;

/// The source tree must exist and be a directory. Runs before any
/// scratch space is allocated.
pub fn validate_source_dir(source_dir: &Path) -> Result<(), PackageError> {
    if !source_dir.exists() {
        return Err(PackageError::SourceNotFound(source_dir.to_path_buf()));
    }

    if !source_dir.is_dir() {
        return Err(PackageError::SourceNotDirectory(source_dir.to_path_buf()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_dir() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("extension");

        let err = validate_source_dir(&missing).unwrap_err();
        assert!(matches!(err, PackageError::SourceNotFound(ref p) if p == &missing));
        assert!(err.to_string().starts_with("Extension directory not found"));
    }

    #[test]
    fn test_file_instead_of_dir() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("extension");
        fs::write(&file, "not a dir").unwrap();

        assert!(matches!(
            validate_source_dir(&file),
            Err(PackageError::SourceNotDirectory(_))
        ));
    }

    #[test]
    fn test_existing_dir() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_source_dir(temp_dir.path()).is_ok());
    }
}
