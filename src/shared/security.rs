use crate::shared::error::GraphError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum manifest size (100 MB)
/// Lockfiles of large monorepos stay well below this.
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validates that a path is not a symbolic link
///
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Errors
/// Returns an error if the path is a symbolic link or if metadata cannot be read
pub fn validate_not_symlink(path: &Path, operation: &str) -> Result<()> {
    let metadata = fs::symlink_metadata(path).map_err(|e| {
        anyhow::anyhow!(
            "Failed to read metadata for {} operation on {}: {}",
            operation,
            path.display(),
            e
        )
    })?;

    if metadata.is_symlink() {
        return Err(GraphError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} operations on symbolic links are not allowed", operation),
            hint: "Point the tool at the real file instead of a link".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Reads a manifest after checking that it is a regular, reasonably sized file
///
/// # Arguments
/// * `path` - The file to read
/// * `file_description` - Name used in error messages (e.g., "package.json")
///
/// # Errors
/// Returns an error if the path is a symlink, not a regular file, larger than
/// [`MAX_FILE_SIZE`], or unreadable
pub fn read_regular_file(path: &Path, file_description: &str) -> Result<String> {
    validate_not_symlink(path, "read")?;

    let metadata = fs::metadata(path).map_err(|e| GraphError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", file_description, e),
    })?;

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    if metadata.len() > MAX_FILE_SIZE {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            metadata.len(),
            MAX_FILE_SIZE
        );
    }

    fs::read_to_string(path).map_err(|e| {
        GraphError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}

/// Prepares a path that is about to be (re)created
///
/// Creates missing parent directories and removes any existing file at the
/// path. Existing symbolic links are refused rather than followed.
pub fn prepare_output_path(path: &Path) -> Result<()> {
    if fs::symlink_metadata(path).is_ok() {
        validate_not_symlink(path, "write")?;
        fs::remove_file(path).map_err(|e| GraphError::FileWriteError {
            path: path.to_path_buf(),
            details: format!("Failed to remove existing file: {}", e),
        })?;
    }

    if let Some(parent) = path.parent() {
        if parent != Path::new("") && !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| GraphError::FileWriteError {
                path: path.to_path_buf(),
                details: format!("Failed to create directory {}: {}", parent.display(), e),
            })?;
        }
    }

    Ok(())
}
