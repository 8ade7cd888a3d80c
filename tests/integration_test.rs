/// Integration tests for the application layer
mod test_utilities;

use serde_json::json;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use test_utilities::mocks::*;

use npm_depgraph::prelude::*;

fn express_project() -> MockManifestReader {
    MockManifestReader::new(
        json!({
            "dependencies": { "express": "^4.18.2" },
            "devDependencies": { "debug": "^2.6.9" }
        }),
        json!({
            "dependencies": {
                "express": {
                    "version": "4.18.2",
                    "requires": { "debug": "2.6.9", "send": "0.18.0" }
                },
                "debug": { "version": "2.6.9", "requires": { "ms": "2.0.0" } },
                "ms": { "version": "2.0.0" },
                "send": {
                    "version": "0.18.0",
                    "requires": { "ms": "2.1.3" },
                    "dependencies": { "ms": { "version": "2.1.3" } }
                }
            }
        }),
    )
}

#[test]
fn test_build_graph_happy_path() {
    let progress_reporter = MockProgressReporter::new();
    let mut use_case = BuildDependencyGraphUseCase::new(
        express_project(),
        InMemoryGraphStore::new(),
        progress_reporter.clone(),
    );

    let response = use_case
        .execute(BuildGraphRequest::new(PathBuf::from("."), true, vec![]))
        .unwrap();

    // express, debug (declared) + express, debug, send, ms@2.0.0, ms@2.1.3 (locked)
    assert_eq!(response.summary.total_packages, 7);
    assert_eq!(response.summary.total_dependencies, 4);

    let graph = response.graph.unwrap();
    assert_eq!(graph.declared().len(), 2);
    assert_eq!(graph.locked().len(), 5);
    assert_eq!(
        graph.edge_pairs(),
        BTreeSet::from([
            ("debug", "ms"),
            ("express", "debug"),
            ("express", "send"),
            ("send", "ms"),
        ])
    );

    let messages = progress_reporter.get_messages();
    assert_eq!(messages.first().map(String::as_str), Some("Parsing package files..."));
    assert!(messages.iter().any(|m| m == "Building graph..."));
    assert!(progress_reporter.errors().is_empty());
}

#[test]
fn test_missing_sections_are_reported_and_skipped() {
    let progress_reporter = MockProgressReporter::new();
    let reader = MockManifestReader::new(json!({ "name": "empty" }), json!({}));
    let mut use_case =
        BuildDependencyGraphUseCase::new(reader, InMemoryGraphStore::new(), progress_reporter.clone());

    let response = use_case
        .execute(BuildGraphRequest::new(PathBuf::from("."), false, vec![]))
        .unwrap();

    assert_eq!(response.summary.missing_sections().count(), 3);
    assert_eq!(response.summary.total_packages, 0);
    assert_eq!(
        progress_reporter.errors(),
        vec![
            "Section \"dependencies\" not found in package.json, skipping",
            "Section \"devDependencies\" not found in package.json, skipping",
            "Section \"dependencies\" not found in package-lock.json, skipping",
        ]
    );
}

#[test]
fn test_manifest_read_failure_propagates() {
    let mut use_case = BuildDependencyGraphUseCase::new(
        MockManifestReader::with_failure(),
        InMemoryGraphStore::new(),
        MockProgressReporter::new(),
    );

    let err = use_case
        .execute(BuildGraphRequest::new(PathBuf::from("/project"), true, vec![]))
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<GraphError>(),
        Some(GraphError::ManifestNotFound { .. })
    ));
    assert_eq!(use_case.store().package_count().unwrap(), 0);
}

#[test]
fn test_malformed_entry_is_parse_error() {
    let reader = MockManifestReader::new(
        json!({ "dependencies": { "express": 4 } }),
        json!({ "dependencies": {} }),
    );
    let mut use_case =
        BuildDependencyGraphUseCase::new(reader, InMemoryGraphStore::new(), MockProgressReporter::new());

    let err = use_case
        .execute(BuildGraphRequest::new(PathBuf::from("."), false, vec![]))
        .unwrap_err();

    assert!(matches!(
        err.downcast_ref::<GraphError>(),
        Some(GraphError::ManifestParseError { .. })
    ));
}

#[test]
fn test_filtered_graph_walks_back_to_declared_roots() {
    let mut use_case = BuildDependencyGraphUseCase::new(
        express_project(),
        InMemoryGraphStore::new(),
        MockProgressReporter::new(),
    );

    let response = use_case
        .execute(BuildGraphRequest::new(
            PathBuf::from("."),
            true,
            vec!["send".to_string()],
        ))
        .unwrap();

    let graph = response.graph.unwrap();
    assert!(graph.is_target("send"));
    assert_eq!(graph.edge_pairs(), BTreeSet::from([("express", "send")]));
    assert!(graph.edges().iter().all(|e| e.kind == EdgeKind::Ancestor));
    // declared cluster is kept whole
    assert_eq!(graph.declared().len(), 2);
    let locked: BTreeSet<_> = graph.locked().iter().map(|n| n.name.as_str()).collect();
    assert_eq!(locked, BTreeSet::from(["express", "send"]));
}

#[test]
fn test_sqlite_and_in_memory_stores_agree() {
    let mut sqlite_case = BuildDependencyGraphUseCase::new(
        express_project(),
        SqliteGraphStore::in_memory().unwrap(),
        MockProgressReporter::new(),
    );
    let mut memory_case = BuildDependencyGraphUseCase::new(
        express_project(),
        InMemoryGraphStore::new(),
        MockProgressReporter::new(),
    );

    let request = BuildGraphRequest::new(PathBuf::from("."), true, vec!["ms".to_string()]);
    let from_sqlite = sqlite_case.execute(request.clone()).unwrap();
    let from_memory = memory_case.execute(request).unwrap();

    assert_eq!(from_sqlite.summary, from_memory.summary);
    let sqlite_graph = from_sqlite.graph.unwrap();
    let memory_graph = from_memory.graph.unwrap();
    assert_eq!(sqlite_graph.node_names(), memory_graph.node_names());
    assert_eq!(sqlite_graph.edge_pairs(), memory_graph.edge_pairs());
}

#[test]
fn test_formatted_graph_reaches_renderer() {
    let mut use_case = BuildDependencyGraphUseCase::new(
        express_project(),
        InMemoryGraphStore::new(),
        MockProgressReporter::new(),
    );
    let response = use_case
        .execute(BuildGraphRequest::new(PathBuf::from("."), true, vec![]))
        .unwrap();

    let description = DotFormatter::new()
        .format(&response.graph.unwrap())
        .unwrap();
    let renderer = MockGraphRenderer::new();
    renderer
        .render(&description, Path::new("deps.svg"))
        .unwrap();

    let rendered = renderer.rendered();
    assert_eq!(rendered.len(), 1);
    assert_eq!(rendered[0].0, PathBuf::from("deps.svg"));
    assert!(rendered[0].1.contains("subgraph cluster_lock_json"));
    assert!(rendered[0].1.contains("\"send\" [label=\"send | "));
}

#[test]
fn test_renderer_failure_is_render_error() {
    let err = MockGraphRenderer::with_failure()
        .render("digraph g {}", Path::new("deps.svg"))
        .unwrap_err();

    assert!(err.to_string().contains("Failed to render mock graph"));
}

#[test]
fn test_sqlite_store_persists_to_disk() {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("nested").join("deps.db");

    {
        let store = SqliteGraphStore::create(&db_path).unwrap();
        let mut use_case =
            BuildDependencyGraphUseCase::new(express_project(), store, MockProgressReporter::new());
        use_case
            .execute(BuildGraphRequest::new(PathBuf::from("."), false, vec![]))
            .unwrap();
    }

    let conn = rusqlite::Connection::open(&db_path).unwrap();
    let packages: i64 = conn
        .query_row("SELECT COUNT(*) FROM packages", [], |row| row.get(0))
        .unwrap();
    let dependencies: i64 = conn
        .query_row("SELECT COUNT(*) FROM dependencies", [], |row| row.get(0))
        .unwrap();
    assert_eq!(packages, 7);
    assert_eq!(dependencies, 4);
}
