use crate::dependency_graph::domain::{DependencyEdge, JoinedDependency};
use crate::shared::Result;

/// DependencyStore port for the parent -> child edge table
///
/// Edges are unique on their full (parent, child) name+version tuple.
/// Endpoints are not required to exist as package records.
pub trait DependencyStore {
    /// Inserts the edge unless it is already present
    ///
    /// # Returns
    /// `true` for a new edge, `false` for a duplicate (not an error)
    fn add_dependency(&mut self, edge: &DependencyEdge) -> Result<bool>;

    /// Edges whose child side carries the given name
    fn dependencies_of(&self, child_name: &str) -> Result<Vec<DependencyEdge>>;

    /// Every edge joined with the ids of its endpoint package records
    ///
    /// Edges with an endpoint missing from the package table are left out.
    /// An endpoint matching several records yields one row per match.
    fn joined_dependencies(&self) -> Result<Vec<JoinedDependency>>;

    fn dependency_count(&self) -> Result<usize>;
}
