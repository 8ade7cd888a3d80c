pub mod graph_query;
pub mod manifest_importer;

pub use graph_query::{AncestorClosure, GraphQueryEngine};
pub use manifest_importer::{ManifestImporter, SectionImport};
