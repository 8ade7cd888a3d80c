use crate::shared::Result;
use std::path::Path;

/// GraphRenderer port for producing the final artifact from a graph description
pub trait GraphRenderer {
    /// Renders `description` into `output_path`
    ///
    /// # Errors
    /// Returns an error if the description produces no usable graph or the
    /// artifact cannot be written. Nothing partial is left at `output_path`
    /// when the description itself is rejected.
    fn render(&self, description: &str, output_path: &Path) -> Result<()>;
}
