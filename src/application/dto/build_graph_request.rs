use std::collections::BTreeSet;
use std::path::PathBuf;

/// BuildGraphRequest - Request DTO for the dependency graph use case
#[derive(Debug, Clone)]
pub struct BuildGraphRequest {
    /// Directory containing package.json and package-lock.json
    pub project_path: PathBuf,
    /// Whether a graph view should be built after import
    pub build_graph: bool,
    /// Target package names; empty means the full graph
    pub filter_packages: BTreeSet<String>,
}

impl BuildGraphRequest {
    pub fn new(project_path: PathBuf, build_graph: bool, filter_packages: Vec<String>) -> Self {
        Self {
            project_path,
            build_graph,
            filter_packages: filter_packages.into_iter().collect(),
        }
    }

    pub fn is_filtered(&self) -> bool {
        !self.filter_packages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deduplicates_filters() {
        let request = BuildGraphRequest::new(
            PathBuf::from("."),
            true,
            vec!["ms".to_string(), "debug".to_string(), "ms".to_string()],
        );

        assert!(request.is_filtered());
        assert_eq!(request.filter_packages.len(), 2);
    }

    #[test]
    fn test_request_without_filters() {
        let request = BuildGraphRequest::new(PathBuf::from("."), false, vec![]);
        assert!(!request.is_filtered());
        assert!(!request.build_graph);
    }
}
