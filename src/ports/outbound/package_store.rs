use super::DependencyStore;
use crate::dependency_graph::domain::{Package, PackageGroup, PackageRecord};
use crate::shared::Result;

/// PackageStore port for the normalized package table
///
/// Records are keyed on (name, version, section) and are append-only.
pub trait PackageStore {
    /// Inserts the package unless a record with the same key exists
    ///
    /// # Returns
    /// `true` when a new record was written, `false` when the key was already
    /// present. An existing key is never an error and is never updated.
    fn add_package(&mut self, package: &Package) -> Result<bool>;

    /// Packages recorded from one manifest file, grouped by name
    ///
    /// Groups are ordered by name and the version slots of a group by record id.
    fn packages_by_source(&self, file: &str) -> Result<Vec<PackageGroup>>;

    /// Every record carrying the given name, across files and sections
    fn packages_named(&self, name: &str) -> Result<Vec<PackageRecord>>;

    fn package_count(&self) -> Result<usize>;
}

/// A store holding both the package and the dependency tables
///
/// `begin_import`/`finish_import` bracket one bulk import so engines that
/// support transactions can write it as one unit.
pub trait GraphStore: PackageStore + DependencyStore {
    fn begin_import(&mut self) -> Result<()> {
        Ok(())
    }

    fn finish_import(&mut self) -> Result<()> {
        Ok(())
    }
}
