/// Mock implementations for testing
mod mock_graph_renderer;
mod mock_manifest_reader;
mod mock_progress_reporter;

#[allow(unused_imports)]
pub use mock_graph_renderer::MockGraphRenderer;
#[allow(unused_imports)]
pub use mock_manifest_reader::MockManifestReader;
#[allow(unused_imports)]
pub use mock_progress_reporter::MockProgressReporter;
