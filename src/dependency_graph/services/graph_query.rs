use crate::dependency_graph::domain::{
    DependencyEdge, EdgeEndpoint, EdgeKind, GraphEdge, GraphMode, GraphNode, GraphView,
    NodeOrigin, PackageRecord, DECLARED_MANIFEST, LOCK_MANIFEST,
};
use crate::ports::outbound::{DependencyStore, PackageStore};
use crate::shared::Result;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Everything reachable by walking edges backwards from a set of targets
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AncestorClosure {
    /// Names expanded during the walk (targets included)
    pub names: BTreeSet<String>,
    /// Package records carrying one of those names
    pub records: BTreeSet<PackageRecord>,
    /// Edges whose child is one of those names
    pub edges: BTreeSet<DependencyEdge>,
}

/// GraphQueryEngine service producing graph views from the stores
///
/// Read-only: it never writes to either store.
pub struct GraphQueryEngine<'a, S> {
    store: &'a S,
}

impl<'a, S> GraphQueryEngine<'a, S>
where
    S: PackageStore + DependencyStore,
{
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Builds the unfiltered graph
    ///
    /// Both manifest clusters are included in full. Edges come from the joined
    /// dependency query, so an edge with an unknown endpoint is not drawn.
    pub fn build_full_graph(&self) -> Result<GraphView> {
        let mut view = GraphView::new(GraphMode::Full);
        self.add_cluster(&mut view, DECLARED_MANIFEST)?;
        self.add_cluster(&mut view, LOCK_MANIFEST)?;

        for joined in self.store.joined_dependencies()? {
            let edge = joined.edge;
            view.add_edge(GraphEdge {
                parent: EdgeEndpoint {
                    name: edge.parent_name,
                    version: edge.parent_version,
                    slot: Some(joined.parent_id),
                },
                child: EdgeEndpoint {
                    name: edge.child_name,
                    version: edge.child_version,
                    slot: Some(joined.child_id),
                },
                kind: EdgeKind::Dependency,
            });
        }

        debug!(
            nodes = view.node_count(),
            edges = view.edge_count(),
            "built full graph"
        );
        Ok(view)
    }

    /// Builds the subgraph of every path leading to one of `target_names`
    ///
    /// The declared cluster is always included whole. Lockfile nodes and
    /// edges are limited to the ancestor closure of the targets. Unknown
    /// target names contribute nothing.
    pub fn build_ancestor_graph(&self, target_names: &BTreeSet<String>) -> Result<GraphView> {
        let closure = self.ancestor_closure(target_names)?;

        let mut view = GraphView::new(GraphMode::Ancestors(target_names.clone()));
        self.add_cluster(&mut view, DECLARED_MANIFEST)?;
        for record in &closure.records {
            view.add_node(GraphNode::from_record(record));
        }

        // Endpoint slots resolve against every node in the view.
        let mut slots: BTreeMap<(&str, &str), Vec<i64>> = BTreeMap::new();
        for node in view.declared().iter().chain(view.locked().iter()) {
            slots
                .entry((node.name.as_str(), node.version.as_str()))
                .or_default()
                .push(node.id);
        }

        let mut edges = Vec::new();
        for edge in &closure.edges {
            let parent_slots = resolve_slots(&slots, &edge.parent_name, &edge.parent_version);
            let child_slots = resolve_slots(&slots, &edge.child_name, &edge.child_version);
            for parent_slot in &parent_slots {
                for child_slot in &child_slots {
                    edges.push(GraphEdge {
                        parent: EdgeEndpoint {
                            name: edge.parent_name.clone(),
                            version: edge.parent_version.clone(),
                            slot: *parent_slot,
                        },
                        child: EdgeEndpoint {
                            name: edge.child_name.clone(),
                            version: edge.child_version.clone(),
                            slot: *child_slot,
                        },
                        kind: EdgeKind::Ancestor,
                    });
                }
            }
        }
        for edge in edges {
            view.add_edge(edge);
        }

        debug!(
            targets = target_names.len(),
            expanded = closure.names.len(),
            nodes = view.node_count(),
            edges = view.edge_count(),
            "built ancestor graph"
        );
        Ok(view)
    }

    /// Walks dependency edges backwards from `target_names`
    ///
    /// Each name is expanded at most once, so cycles terminate.
    pub fn ancestor_closure(&self, target_names: &BTreeSet<String>) -> Result<AncestorClosure> {
        let mut closure = AncestorClosure::default();
        self.collect_ancestors(target_names.clone(), &mut closure)?;
        Ok(closure)
    }

    fn collect_ancestors(
        &self,
        working_set: BTreeSet<String>,
        closure: &mut AncestorClosure,
    ) -> Result<()> {
        let pending: BTreeSet<String> = working_set
            .into_iter()
            .filter(|name| !closure.names.contains(name))
            .collect();
        if pending.is_empty() {
            return Ok(());
        }

        let mut parents = BTreeSet::new();
        for name in pending {
            closure.records.extend(self.store.packages_named(&name)?);
            for edge in self.store.dependencies_of(&name)? {
                parents.insert(edge.parent_name.clone());
                closure.edges.insert(edge);
            }
            closure.names.insert(name);
        }

        self.collect_ancestors(parents, closure)
    }

    fn add_cluster(&self, view: &mut GraphView, file: &str) -> Result<()> {
        let origin = NodeOrigin::from_file(file);
        for group in self.store.packages_by_source(file)? {
            for slot in group.slots {
                view.add_node(GraphNode {
                    name: group.name.clone(),
                    id: slot.id,
                    version: slot.version,
                    origin,
                });
            }
        }
        Ok(())
    }
}

fn resolve_slots(
    slots: &BTreeMap<(&str, &str), Vec<i64>>,
    name: &str,
    version: &str,
) -> Vec<Option<i64>> {
    match slots.get(&(name, version)) {
        Some(ids) => ids.iter().copied().map(Some).collect(),
        None => vec![None],
    }
}
