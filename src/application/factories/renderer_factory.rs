use crate::adapters::outbound::filesystem::DotFileWriter;
use crate::adapters::outbound::renderers::GraphvizRenderer;
use crate::application::dto::RenderFormat;
use crate::ports::outbound::GraphRenderer;

/// Factory for creating graph renderers
///
/// Selects the renderer adapter for a format: the `dot` format is written
/// as text, everything else goes through Graphviz.
pub struct RendererFactory;

impl RendererFactory {
    /// Creates a renderer for the specified format
    ///
    /// # Arguments
    /// * `format` - The artifact format to produce
    /// * `dot_command` - Graphviz executable used by image formats
    ///
    /// # Examples
    /// ```
    /// use npm_depgraph::application::dto::RenderFormat;
    /// use npm_depgraph::application::factories::RendererFactory;
    ///
    /// let renderer = RendererFactory::create(RenderFormat::Dot, "dot");
    /// ```
    pub fn create(format: RenderFormat, dot_command: &str) -> Box<dyn GraphRenderer> {
        match format {
            RenderFormat::Dot => Box::new(DotFileWriter::new()),
            image => Box::new(GraphvizRenderer::new(dot_command, image.to_string())),
        }
    }

    /// Returns the progress message for the specified format
    pub fn progress_message(format: RenderFormat) -> &'static str {
        match format {
            RenderFormat::Svg => "Building GraphViz graph (svg)...",
            RenderFormat::Png => "Building GraphViz graph (png)...",
            RenderFormat::Pdf => "Building GraphViz graph (pdf)...",
            RenderFormat::Dot => "Building GraphViz graph (dot source)...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_create_dot_renderer_writes_text() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("deps.dot");

        let renderer = RendererFactory::create(RenderFormat::Dot, "dot");
        renderer.render("digraph g {}", &output_path).unwrap();

        assert_eq!(fs::read_to_string(&output_path).unwrap(), "digraph g {}");
    }

    #[test]
    fn test_create_image_renderer_uses_dot_command() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("deps.svg");

        let renderer = RendererFactory::create(RenderFormat::Svg, "npm-depgraph-missing-dot");
        let err = renderer.render("digraph g {}", &output_path).unwrap_err();

        assert!(err.to_string().contains("npm-depgraph-missing-dot"));
    }

    #[test]
    fn test_progress_message() {
        assert_eq!(
            RendererFactory::progress_message(RenderFormat::Svg),
            "Building GraphViz graph (svg)..."
        );
        assert_eq!(
            RendererFactory::progress_message(RenderFormat::Dot),
            "Building GraphViz graph (dot source)..."
        );
    }
}
