use crate::dependency_graph::domain::GraphView;
use crate::shared::Result;

/// GraphFormatter port for turning a graph view into a text description
pub trait GraphFormatter {
    /// Formats the graph as a description the renderer understands
    ///
    /// # Errors
    /// Returns an error if the view cannot be expressed in the notation
    fn format(&self, graph: &GraphView) -> Result<String>;
}
