use crate::ports::outbound::GraphRenderer;
use crate::shared::error::GraphError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// DotFileWriter adapter for the `dot` render format
///
/// Implements the GraphRenderer port by writing the graph description itself
/// to disk. No Graphviz installation is needed.
pub struct DotFileWriter;

impl DotFileWriter {
    pub fn new() -> Self {
        Self
    }

    /// Validates that the parent directory exists before writing
    fn validate_parent_directory(&self, output_path: &Path) -> Result<()> {
        if let Some(parent) = output_path.parent() {
            if !parent.exists() && parent != Path::new("") {
                return Err(GraphError::FileWriteError {
                    path: output_path.to_path_buf(),
                    details: format!("Parent directory does not exist: {}", parent.display()),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Rejects an existing output path that is a symbolic link
    fn validate_output_security(&self, output_path: &Path) -> Result<()> {
        if let Ok(metadata) = fs::symlink_metadata(output_path) {
            if metadata.is_symlink() {
                return Err(GraphError::FileWriteError {
                    path: output_path.to_path_buf(),
                    details: "Security: Output path is a symbolic link. For security reasons, writing to symbolic links is not allowed.".to_string(),
                }
                .into());
            }
        }
        Ok(())
    }
}

impl Default for DotFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphRenderer for DotFileWriter {
    fn render(&self, description: &str, output_path: &Path) -> Result<()> {
        if description.trim().is_empty() {
            return Err(GraphError::RenderError {
                format: "dot".to_string(),
                details: "graph description is empty".to_string(),
            }
            .into());
        }

        self.validate_parent_directory(output_path)?;
        self.validate_output_security(output_path)?;

        fs::write(output_path, description).map_err(|e| GraphError::FileWriteError {
            path: output_path.to_path_buf(),
            details: e.to_string(),
        })?;

        Ok(())
    }
}
