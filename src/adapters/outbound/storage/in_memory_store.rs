use crate::dependency_graph::domain::{
    DependencyEdge, JoinedDependency, Package, PackageGroup, PackageRecord, VersionSlot,
};
use crate::ports::outbound::{DependencyStore, GraphStore, PackageStore};
use crate::shared::Result;
use std::collections::{BTreeMap, BTreeSet};

/// Store kept entirely in memory
///
/// Same key and join semantics as [`super::SqliteGraphStore`], without a
/// database. Ids are assigned sequentially from 1 in insertion order.
#[derive(Debug, Default)]
pub struct InMemoryGraphStore {
    records: Vec<PackageRecord>,
    /// (name, version, section) -> index into `records`
    keys: BTreeMap<(String, String, String), usize>,
    edges: BTreeSet<DependencyEdge>,
}

impl InMemoryGraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn ids_matching<'a>(&'a self, name: &'a str, version: &'a str) -> impl Iterator<Item = i64> + 'a {
        self.records
            .iter()
            .filter(move |r| r.package.name() == name && r.package.version() == version)
            .map(|r| r.id)
    }
}

impl PackageStore for InMemoryGraphStore {
    fn add_package(&mut self, package: &Package) -> Result<bool> {
        let key = (
            package.name().to_string(),
            package.version().to_string(),
            package.section().to_string(),
        );
        if self.keys.contains_key(&key) {
            return Ok(false);
        }

        let id = self.records.len() as i64 + 1;
        self.keys.insert(key, self.records.len());
        self.records.push(PackageRecord {
            id,
            package: package.clone(),
        });
        Ok(true)
    }

    fn packages_by_source(&self, file: &str) -> Result<Vec<PackageGroup>> {
        let mut grouped: BTreeMap<&str, Vec<VersionSlot>> = BTreeMap::new();
        for record in self.records.iter().filter(|r| r.package.file() == file) {
            grouped
                .entry(record.package.name())
                .or_default()
                .push(VersionSlot {
                    id: record.id,
                    version: record.package.version().to_string(),
                });
        }

        Ok(grouped
            .into_iter()
            .map(|(name, slots)| PackageGroup {
                name: name.to_string(),
                slots,
            })
            .collect())
    }

    fn packages_named(&self, name: &str) -> Result<Vec<PackageRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.package.name() == name)
            .cloned()
            .collect())
    }

    fn package_count(&self) -> Result<usize> {
        Ok(self.records.len())
    }
}

impl DependencyStore for InMemoryGraphStore {
    fn add_dependency(&mut self, edge: &DependencyEdge) -> Result<bool> {
        Ok(self.edges.insert(edge.clone()))
    }

    fn dependencies_of(&self, child_name: &str) -> Result<Vec<DependencyEdge>> {
        Ok(self
            .edges
            .iter()
            .filter(|e| e.child_name == child_name)
            .cloned()
            .collect())
    }

    fn joined_dependencies(&self) -> Result<Vec<JoinedDependency>> {
        let mut joined = Vec::new();
        for edge in &self.edges {
            for parent_id in self.ids_matching(&edge.parent_name, &edge.parent_version) {
                for child_id in self.ids_matching(&edge.child_name, &edge.child_version) {
                    joined.push(JoinedDependency {
                        edge: edge.clone(),
                        parent_id,
                        child_id,
                    });
                }
            }
        }
        joined.sort_by_key(|j| (j.parent_id, j.child_id));
        Ok(joined)
    }

    fn dependency_count(&self) -> Result<usize> {
        Ok(self.edges.len())
    }
}

impl GraphStore for InMemoryGraphStore {}
