use crate::dependency_graph::domain::{DependencyEdge, ManifestEntry, Package, PackageLeaf};
use crate::ports::outbound::{DependencyStore, PackageStore, ProgressReporter};
use crate::shared::error::GraphError;
use crate::shared::Result;
use serde_json::Value;
use tracing::debug;

/// Outcome of importing one manifest section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionImport {
    /// The section key was absent from the document
    Missing,
    /// Counts of newly written rows; duplicates are not counted
    Imported {
        packages_added: usize,
        dependencies_added: usize,
    },
}

impl SectionImport {
    pub fn packages_added(&self) -> usize {
        match self {
            SectionImport::Missing => 0,
            SectionImport::Imported { packages_added, .. } => *packages_added,
        }
    }

    pub fn dependencies_added(&self) -> usize {
        match self {
            SectionImport::Missing => 0,
            SectionImport::Imported {
                dependencies_added, ..
            } => *dependencies_added,
        }
    }
}

/// File and section label every record of one import is tagged with
struct SectionSource<'s> {
    file: &'s str,
    section: &'s str,
}

#[derive(Default)]
struct ImportCounts {
    packages: usize,
    dependencies: usize,
}

/// ManifestImporter service flattening manifest sections into the stores
///
/// Entries are parsed into [`ManifestEntry`] values first, then walked
/// depth-first. Nested `dependencies` records are descended into; `requires`
/// constraints are recorded as leaves and never expanded.
pub struct ManifestImporter<'a, S, PR> {
    store: &'a mut S,
    progress_reporter: &'a PR,
}

impl<'a, S, PR> ManifestImporter<'a, S, PR>
where
    S: PackageStore + DependencyStore,
    PR: ProgressReporter,
{
    pub fn new(store: &'a mut S, progress_reporter: &'a PR) -> Self {
        Self {
            store,
            progress_reporter,
        }
    }

    /// Imports `document[section_name]`, recording packages under `section_name`
    ///
    /// # Arguments
    /// * `document` - Parsed manifest
    /// * `file_label` - Manifest name stored with every package (e.g. "package.json")
    /// * `section_name` - Top-level key to import (e.g. "devDependencies")
    ///
    /// # Returns
    /// `SectionImport::Missing` when the key is absent (reported, not an error)
    ///
    /// # Errors
    /// Returns `GraphError::ManifestParseError` when an entry is neither a
    /// version string nor a record with a string `version`
    pub fn import_section(
        &mut self,
        document: &Value,
        file_label: &str,
        section_name: &str,
    ) -> Result<SectionImport> {
        self.import_section_as(document, file_label, section_name, section_name)
    }

    /// Same as [`import_section`](Self::import_section), but records packages
    /// under `section_label` instead of the JSON key
    pub fn import_section_as(
        &mut self,
        document: &Value,
        file_label: &str,
        section_key: &str,
        section_label: &str,
    ) -> Result<SectionImport> {
        let Some(section) = document.get(section_key) else {
            self.progress_reporter.report_error(&format!(
                "Section \"{}\" not found in {}, skipping",
                section_key, file_label
            ));
            return Ok(SectionImport::Missing);
        };

        let entries =
            ManifestEntry::parse_section(section).map_err(|e| GraphError::ManifestParseError {
                file: file_label.to_string(),
                details: format!("section \"{}\": {}", section_key, e),
            })?;

        let source = SectionSource {
            file: file_label,
            section: section_label,
        };
        let mut counts = ImportCounts::default();
        let total = entries.len();

        for (index, entry) in entries.iter().enumerate() {
            self.record_package(entry.package(), &source, &mut counts)?;
            self.import_nested(entry, &source, &mut counts)?;
            self.progress_reporter
                .report_progress(index + 1, total, Some(section_label));
        }

        debug!(
            file = file_label,
            section = section_label,
            entries = total,
            packages_added = counts.packages,
            dependencies_added = counts.dependencies,
            "imported manifest section"
        );

        Ok(SectionImport::Imported {
            packages_added: counts.packages,
            dependencies_added: counts.dependencies,
        })
    }

    /// Records the nested requirements of `entry`, with `entry` as the parent
    ///
    /// Bare-string entries have nothing nested and end the walk.
    fn import_nested(
        &mut self,
        entry: &ManifestEntry,
        source: &SectionSource<'_>,
        counts: &mut ImportCounts,
    ) -> Result<()> {
        let ManifestEntry::WithSubtree {
            package: parent,
            dependencies,
            requires,
        } = entry
        else {
            return Ok(());
        };

        for child in dependencies {
            self.record_package(child.package(), source, counts)?;
            self.record_dependency(parent, child.package(), counts)?;
            self.import_nested(child, source, counts)?;
        }

        for requirement in requires {
            self.record_package(requirement, source, counts)?;
            self.record_dependency(parent, requirement, counts)?;
        }

        Ok(())
    }

    fn record_package(
        &mut self,
        leaf: &PackageLeaf,
        source: &SectionSource<'_>,
        counts: &mut ImportCounts,
    ) -> Result<()> {
        let package = Package::new(
            leaf.name.clone(),
            leaf.version.clone(),
            source.file,
            source.section,
        )
        .map_err(|e| GraphError::ManifestParseError {
            file: source.file.to_string(),
            details: format!("section \"{}\": {}", source.section, e),
        })?;

        if self.store.add_package(&package)? {
            counts.packages += 1;
        }
        Ok(())
    }

    fn record_dependency(
        &mut self,
        parent: &PackageLeaf,
        child: &PackageLeaf,
        counts: &mut ImportCounts,
    ) -> Result<()> {
        let edge = DependencyEdge::new(&parent.name, &parent.version, &child.name, &child.version);
        if self.store.add_dependency(&edge)? {
            counts.dependencies += 1;
        }
        Ok(())
    }
}
