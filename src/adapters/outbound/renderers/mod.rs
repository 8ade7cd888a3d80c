/// Renderer adapters turning graph descriptions into image files
mod graphviz_renderer;

pub use graphviz_renderer::{GraphvizRenderer, DEFAULT_DOT_COMMAND};
