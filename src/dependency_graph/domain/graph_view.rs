use super::{PackageGroup, PackageRecord, VersionSlot};
use std::collections::BTreeSet;

/// File label of the declared-dependency manifest
pub const DECLARED_MANIFEST: &str = "package.json";

/// File label of the resolved lockfile
pub const LOCK_MANIFEST: &str = "package-lock.json";

/// Which manifest a graph node was read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeOrigin {
    Declared,
    Locked,
}

impl NodeOrigin {
    pub fn from_file(file: &str) -> Self {
        if file == LOCK_MANIFEST {
            NodeOrigin::Locked
        } else {
            NodeOrigin::Declared
        }
    }

    pub fn manifest(&self) -> &'static str {
        match self {
            NodeOrigin::Declared => DECLARED_MANIFEST,
            NodeOrigin::Locked => LOCK_MANIFEST,
        }
    }
}

/// One stored package version, placed in the cluster of its manifest
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GraphNode {
    pub name: String,
    pub id: i64,
    pub version: String,
    pub origin: NodeOrigin,
}

impl GraphNode {
    pub fn from_record(record: &PackageRecord) -> Self {
        Self {
            name: record.package.name().to_string(),
            id: record.id,
            version: record.package.version().to_string(),
            origin: NodeOrigin::from_file(record.package.file()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EdgeKind {
    /// Plain edge of the unfiltered graph
    Dependency,
    /// Edge found while walking back from a filter target
    Ancestor,
}

/// Edge endpoint; `slot` is the package record id when one matched
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeEndpoint {
    pub name: String,
    pub version: String,
    pub slot: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GraphEdge {
    pub parent: EdgeEndpoint,
    pub child: EdgeEndpoint,
    pub kind: EdgeKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphMode {
    Full,
    /// Ancestor subgraph of the given target names
    Ancestors(BTreeSet<String>),
}

/// Transient graph materialized for a single render
///
/// Nodes and edges are sets: inserting an equal value twice keeps one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphView {
    mode: GraphMode,
    declared: BTreeSet<GraphNode>,
    locked: BTreeSet<GraphNode>,
    edges: BTreeSet<GraphEdge>,
}

impl GraphView {
    pub fn new(mode: GraphMode) -> Self {
        Self {
            mode,
            declared: BTreeSet::new(),
            locked: BTreeSet::new(),
            edges: BTreeSet::new(),
        }
    }

    pub fn add_node(&mut self, node: GraphNode) {
        match node.origin {
            NodeOrigin::Declared => self.declared.insert(node),
            NodeOrigin::Locked => self.locked.insert(node),
        };
    }

    pub fn add_edge(&mut self, edge: GraphEdge) {
        self.edges.insert(edge);
    }

    pub fn mode(&self) -> &GraphMode {
        &self.mode
    }

    pub fn is_filtered(&self) -> bool {
        matches!(self.mode, GraphMode::Ancestors(_))
    }

    /// Whether `name` is one of the filter targets
    pub fn is_target(&self, name: &str) -> bool {
        match &self.mode {
            GraphMode::Full => false,
            GraphMode::Ancestors(targets) => targets.contains(name),
        }
    }

    pub fn declared(&self) -> &BTreeSet<GraphNode> {
        &self.declared
    }

    pub fn locked(&self) -> &BTreeSet<GraphNode> {
        &self.locked
    }

    pub fn edges(&self) -> &BTreeSet<GraphEdge> {
        &self.edges
    }

    /// Nodes of one cluster grouped by name, one group per record-shaped node
    pub fn groups(&self, origin: NodeOrigin) -> Vec<PackageGroup> {
        let nodes = match origin {
            NodeOrigin::Declared => &self.declared,
            NodeOrigin::Locked => &self.locked,
        };

        let mut groups: Vec<PackageGroup> = Vec::new();
        for node in nodes {
            let slot = VersionSlot {
                id: node.id,
                version: node.version.clone(),
            };
            match groups.last_mut() {
                Some(group) if group.name == node.name => group.slots.push(slot),
                _ => groups.push(PackageGroup {
                    name: node.name.clone(),
                    slots: vec![slot],
                }),
            }
        }
        groups
    }

    /// Distinct package names across both clusters
    pub fn node_names(&self) -> BTreeSet<&str> {
        self.declared
            .iter()
            .chain(self.locked.iter())
            .map(|n| n.name.as_str())
            .collect()
    }

    /// Distinct (parent, child) name pairs
    pub fn edge_pairs(&self) -> BTreeSet<(&str, &str)> {
        self.edges
            .iter()
            .map(|e| (e.parent.name.as_str(), e.child.name.as_str()))
            .collect()
    }

    pub fn node_count(&self) -> usize {
        self.declared.len() + self.locked.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}
