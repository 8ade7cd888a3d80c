use crate::dependency_graph::domain::GraphView;
use crate::dependency_graph::services::SectionImport;

/// Import outcome of one manifest section
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionSummary {
    pub file: String,
    pub section: String,
    pub outcome: SectionImport,
}

/// Per-section import results plus store totals after the run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub sections: Vec<SectionSummary>,
    pub total_packages: usize,
    pub total_dependencies: usize,
}

impl ImportSummary {
    pub fn packages_added(&self) -> usize {
        self.sections.iter().map(|s| s.outcome.packages_added()).sum()
    }

    pub fn dependencies_added(&self) -> usize {
        self.sections
            .iter()
            .map(|s| s.outcome.dependencies_added())
            .sum()
    }

    /// Sections that were absent from their manifest
    pub fn missing_sections(&self) -> impl Iterator<Item = &SectionSummary> {
        self.sections
            .iter()
            .filter(|s| s.outcome == SectionImport::Missing)
    }
}

/// BuildGraphResponse - Response DTO from the dependency graph use case
#[derive(Debug, Clone)]
pub struct BuildGraphResponse {
    pub summary: ImportSummary,
    /// Present only when the request asked for a graph
    pub graph: Option<GraphView>,
}

impl BuildGraphResponse {
    pub fn new(summary: ImportSummary, graph: Option<GraphView>) -> Self {
        Self { summary, graph }
    }
}
