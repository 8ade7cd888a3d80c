/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (relational store, file system,
/// Graphviz, console).
pub mod dependency_store;
pub mod graph_formatter;
pub mod graph_renderer;
pub mod manifest_reader;
pub mod package_store;
pub mod progress_reporter;

pub use dependency_store::DependencyStore;
pub use graph_formatter::GraphFormatter;
pub use graph_renderer::GraphRenderer;
pub use manifest_reader::{ManifestReader, ProjectManifests};
pub use package_store::{GraphStore, PackageStore};
pub use progress_reporter::ProgressReporter;
