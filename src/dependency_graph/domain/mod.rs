pub mod dependency;
pub mod graph_view;
pub mod manifest_entry;
pub mod package;

pub use dependency::{DependencyEdge, JoinedDependency};
pub use graph_view::{
    EdgeEndpoint, EdgeKind, GraphEdge, GraphMode, GraphNode, GraphView, NodeOrigin,
    DECLARED_MANIFEST, LOCK_MANIFEST,
};
pub use manifest_entry::{ManifestEntry, PackageLeaf};
pub use package::{Package, PackageGroup, PackageName, PackageRecord, Version, VersionSlot};
