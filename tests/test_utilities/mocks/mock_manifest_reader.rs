use npm_depgraph::prelude::*;
use serde_json::Value;
use std::path::Path;

/// Mock ManifestReader for testing
pub struct MockManifestReader {
    pub declared: Value,
    pub locked: Value,
    pub should_fail: bool,
}

#[allow(dead_code)]
impl MockManifestReader {
    pub fn new(declared: Value, locked: Value) -> Self {
        Self {
            declared,
            locked,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            declared: Value::Null,
            locked: Value::Null,
            should_fail: true,
        }
    }
}

impl ManifestReader for MockManifestReader {
    fn read_manifests(&self, project_path: &Path) -> Result<ProjectManifests> {
        if self.should_fail {
            return Err(GraphError::ManifestNotFound {
                path: project_path.join("package-lock.json"),
                suggestion: "Mock manifest read failure".to_string(),
            }
            .into());
        }
        Ok(ProjectManifests {
            declared: self.declared.clone(),
            locked: self.locked.clone(),
        })
    }
}
