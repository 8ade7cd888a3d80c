use crate::dependency_graph::domain::{DECLARED_MANIFEST, LOCK_MANIFEST};
use crate::ports::outbound::{ManifestReader, ProjectManifests};
use crate::shared::error::GraphError;
use crate::shared::security::read_regular_file;
use crate::shared::Result;
use serde_json::Value;
use std::path::Path;

/// FileSystemReader adapter for reading a project's npm manifests
///
/// Implements the ManifestReader port. Both files must be present before
/// either is read; contents go through the shared file-safety checks.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn parse_manifest(&self, path: &Path, file_name: &str) -> Result<Value> {
        let content = read_regular_file(path, file_name)?;

        serde_json::from_str(&content).map_err(|e| {
            GraphError::ManifestParseError {
                file: file_name.to_string(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ManifestReader for FileSystemReader {
    fn read_manifests(&self, project_path: &Path) -> Result<ProjectManifests> {
        let declared_path = project_path.join(DECLARED_MANIFEST);
        let locked_path = project_path.join(LOCK_MANIFEST);

        if !declared_path.exists() {
            return Err(GraphError::ManifestNotFound {
                path: declared_path,
                suggestion: format!(
                    "package.json does not exist in \"{}\".\n   \
                     Please point PACKAGE_DIR at the root of an npm project.",
                    project_path.display()
                ),
            }
            .into());
        }

        if !locked_path.exists() {
            return Err(GraphError::ManifestNotFound {
                path: locked_path,
                suggestion: format!(
                    "package-lock.json does not exist in \"{}\".\n   \
                     Run `npm install` to generate it, then try again.",
                    project_path.display()
                ),
            }
            .into());
        }

        Ok(ProjectManifests {
            declared: self.parse_manifest(&declared_path, DECLARED_MANIFEST)?,
            locked: self.parse_manifest(&locked_path, LOCK_MANIFEST)?,
        })
    }
}
