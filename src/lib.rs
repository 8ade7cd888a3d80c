//! npm-depgraph - dependency graph builder for npm projects
//!
//! This library imports a project's `package.json` and `package-lock.json`
//! into a normalized package/dependency store and turns the result into a
//! Graphviz graph, either whole or restricted to the chains that lead to a
//! set of target packages.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`dependency_graph`): Packages, manifest entries, graph views,
//!   the manifest importer and the ancestor query engine
//! - **Application Layer** (`application`): Use case, DTOs and factories
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): SQLite store, manifest reader, DOT formatter, renderers
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use npm_depgraph::prelude::*;
//! use std::path::{Path, PathBuf};
//!
//! # fn main() -> Result<()> {
//! let store = SqliteGraphStore::create(Path::new("deps.db"))?;
//! let mut use_case = BuildDependencyGraphUseCase::new(
//!     FileSystemReader::new(),
//!     store,
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = BuildGraphRequest::new(PathBuf::from("."), true, vec!["ms".to_string()]);
//! let response = use_case.execute(request)?;
//!
//! if let Some(graph) = response.graph {
//!     let description = DotFormatter::new().format(&graph)?;
//!     RendererFactory::create(RenderFormat::Svg, "dot").render(&description, Path::new("deps.svg"))?;
//! }
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod dependency_graph;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{SilentProgressReporter, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{DotFileWriter, FileSystemReader};
    pub use crate::adapters::outbound::formatters::{sanitize_node_id, DotFormatter};
    pub use crate::adapters::outbound::renderers::GraphvizRenderer;
    pub use crate::adapters::outbound::storage::{InMemoryGraphStore, SqliteGraphStore};
    pub use crate::application::dto::{
        BuildGraphRequest, BuildGraphResponse, ImportSummary, RenderFormat,
    };
    pub use crate::application::factories::RendererFactory;
    pub use crate::application::use_cases::BuildDependencyGraphUseCase;
    pub use crate::dependency_graph::domain::{
        DependencyEdge, EdgeKind, GraphMode, GraphNode, GraphView, ManifestEntry, NodeOrigin,
        Package, PackageName, PackageRecord, Version,
    };
    pub use crate::dependency_graph::services::{
        GraphQueryEngine, ManifestImporter, SectionImport,
    };
    pub use crate::ports::outbound::{
        DependencyStore, GraphFormatter, GraphRenderer, GraphStore, ManifestReader, PackageStore,
        ProgressReporter, ProjectManifests,
    };
    pub use crate::shared::error::{ExitCode, GraphError};
    pub use crate::shared::Result;
}
