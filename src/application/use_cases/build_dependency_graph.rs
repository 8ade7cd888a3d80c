use crate::application::dto::{
    BuildGraphRequest, BuildGraphResponse, ImportSummary, SectionSummary,
};
use crate::dependency_graph::domain::{GraphView, DECLARED_MANIFEST, LOCK_MANIFEST};
use crate::dependency_graph::services::{GraphQueryEngine, ManifestImporter};
use crate::ports::outbound::{GraphStore, ManifestReader, ProgressReporter, ProjectManifests};
use crate::shared::Result;
use serde_json::Value;
use tracing::info;

/// Section label the lockfile's `dependencies` are recorded under
///
/// Keeps lockfile rows apart from `package.json`'s `dependencies` in the
/// (name, version, section) key.
pub const LOCK_SECTION_LABEL: &str = "package-lock.json/dependencies";

/// One section to import: (manifest, JSON key, recorded section label)
type SectionPlan = (&'static str, &'static str, &'static str);

/// Sections imported for every project, in order
const IMPORT_PLAN: [SectionPlan; 3] = [
    (DECLARED_MANIFEST, "dependencies", "dependencies"),
    (DECLARED_MANIFEST, "devDependencies", "devDependencies"),
    (LOCK_MANIFEST, "dependencies", LOCK_SECTION_LABEL),
];

/// BuildDependencyGraphUseCase - Core use case for graph construction
///
/// Reads both manifests, imports them into the store inside one import
/// transaction, then optionally builds the full or filtered graph view.
///
/// # Type Parameters
/// * `MR` - ManifestReader implementation
/// * `S` - GraphStore implementation (owned; released when the use case drops)
/// * `PR` - ProgressReporter implementation
pub struct BuildDependencyGraphUseCase<MR, S, PR> {
    manifest_reader: MR,
    store: S,
    progress_reporter: PR,
}

impl<MR, S, PR> BuildDependencyGraphUseCase<MR, S, PR>
where
    MR: ManifestReader,
    S: GraphStore,
    PR: ProgressReporter,
{
    pub fn new(manifest_reader: MR, store: S, progress_reporter: PR) -> Self {
        Self {
            manifest_reader,
            store,
            progress_reporter,
        }
    }

    /// Executes the use case
    ///
    /// # Errors
    /// Fails before touching the store when a manifest is missing or
    /// malformed; store failures abort the run. Callers that create the
    /// store from scratch should load the manifests before creating it.
    pub fn execute(&mut self, request: BuildGraphRequest) -> Result<BuildGraphResponse> {
        self.progress_reporter.report("Parsing package files...");

        let manifests = self.manifest_reader.read_manifests(&request.project_path)?;
        let summary = self.import_manifests(&manifests)?;
        self.report_summary(&summary);

        let graph = if request.build_graph {
            Some(self.build_graph(&request)?)
        } else {
            None
        };

        Ok(BuildGraphResponse::new(summary, graph))
    }

    /// The store the manifests were imported into
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn progress_reporter(&self) -> &PR {
        &self.progress_reporter
    }

    fn import_manifests(&mut self, manifests: &ProjectManifests) -> Result<ImportSummary> {
        self.store.begin_import()?;

        let mut sections = Vec::with_capacity(IMPORT_PLAN.len());
        {
            let mut importer = ManifestImporter::new(&mut self.store, &self.progress_reporter);
            for (file, key, label) in IMPORT_PLAN {
                let document: &Value = if file == LOCK_MANIFEST {
                    &manifests.locked
                } else {
                    &manifests.declared
                };
                let outcome = importer.import_section_as(document, file, key, label)?;
                sections.push(SectionSummary {
                    file: file.to_string(),
                    section: key.to_string(),
                    outcome,
                });
            }
        }

        self.store.finish_import()?;

        Ok(ImportSummary {
            sections,
            total_packages: self.store.package_count()?,
            total_dependencies: self.store.dependency_count()?,
        })
    }

    fn report_summary(&self, summary: &ImportSummary) {
        for section in &summary.sections {
            if section.outcome.packages_added() > 0 || section.outcome.dependencies_added() > 0 {
                self.progress_reporter.report(&format!(
                    "   {} {}: {} package(s), {} dependency edge(s)",
                    section.file,
                    section.section,
                    section.outcome.packages_added(),
                    section.outcome.dependencies_added()
                ));
            }
        }

        info!(
            packages = summary.total_packages,
            dependencies = summary.total_dependencies,
            "import finished"
        );
    }

    fn build_graph(&self, request: &BuildGraphRequest) -> Result<GraphView> {
        self.progress_reporter.report("Building graph...");

        let engine = GraphQueryEngine::new(&self.store);
        if request.is_filtered() {
            engine.build_ancestor_graph(&request.filter_packages)
        } else {
            engine.build_full_graph()
        }
    }
}
