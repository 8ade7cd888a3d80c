/// Directed "parent requires child" relationship between two packages
///
/// Endpoints are referenced by name and version only. A child need not exist
/// as a package record; such edges drop out of joined queries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DependencyEdge {
    pub parent_name: String,
    pub parent_version: String,
    pub child_name: String,
    pub child_version: String,
}

impl DependencyEdge {
    pub fn new(
        parent_name: impl Into<String>,
        parent_version: impl Into<String>,
        child_name: impl Into<String>,
        child_version: impl Into<String>,
    ) -> Self {
        Self {
            parent_name: parent_name.into(),
            parent_version: parent_version.into(),
            child_name: child_name.into(),
            child_version: child_version.into(),
        }
    }
}

impl std::fmt::Display for DependencyEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}@{} -> {}@{}",
            self.parent_name, self.parent_version, self.child_name, self.child_version
        )
    }
}

/// An edge whose both endpoints resolved to stored package records
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct JoinedDependency {
    pub edge: DependencyEdge,
    pub parent_id: i64,
    pub child_id: i64,
}
