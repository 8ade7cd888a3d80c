use crate::shared::Result;
use serde_json::Value;
use std::path::Path;

/// Both parsed manifests of a project
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectManifests {
    /// Parsed `package.json`
    pub declared: Value,
    /// Parsed `package-lock.json`
    pub locked: Value,
}

/// ManifestReader port for loading a project's manifests
pub trait ManifestReader {
    /// Reads and parses `package.json` and `package-lock.json` from the project directory
    ///
    /// # Errors
    /// Returns an error if:
    /// - Either file does not exist (checked for both before anything is read)
    /// - A file cannot be read or is not valid JSON
    fn read_manifests(&self, project_path: &Path) -> Result<ProjectManifests>;
}

/// Manifests that were already loaded hand themselves out unchanged
impl ManifestReader for ProjectManifests {
    fn read_manifests(&self, _project_path: &Path) -> Result<ProjectManifests> {
        Ok(self.clone())
    }
}
