/// Use cases module containing application business logic orchestration
mod build_dependency_graph;

pub use build_dependency_graph::{BuildDependencyGraphUseCase, LOCK_SECTION_LABEL};
