mod cli;
mod config;

use clap::error::ErrorKind;
use clap::Parser;
use cli::Args;
use config::ConfigFile;
use npm_depgraph::adapters::outbound::console::{SilentProgressReporter, StderrProgressReporter};
use npm_depgraph::adapters::outbound::filesystem::FileSystemReader;
use npm_depgraph::adapters::outbound::formatters::DotFormatter;
use npm_depgraph::adapters::outbound::renderers::DEFAULT_DOT_COMMAND;
use npm_depgraph::adapters::outbound::storage::SqliteGraphStore;
use npm_depgraph::application::dto::{BuildGraphRequest, RenderFormat};
use npm_depgraph::application::factories::RendererFactory;
use npm_depgraph::application::use_cases::BuildDependencyGraphUseCase;
use npm_depgraph::ports::outbound::{GraphFormatter, ManifestReader, ProgressReporter};
use npm_depgraph::shared::error::{ExitCode, GraphError};
use npm_depgraph::shared::Result;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::Success,
                _ => ExitCode::InvalidArguments,
            };
            // Printing to a closed stream is not worth reporting
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_filter())),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let result = if args.quiet {
        run(args, SilentProgressReporter::new())
    } else {
        run(args, StderrProgressReporter::new())
    };

    if let Err(e) = result {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

/// Options after merging the command line over the config file
#[derive(Debug, PartialEq)]
struct Settings {
    graph_output: Option<PathBuf>,
    format: RenderFormat,
    filter_packages: Vec<String>,
    dot_command: String,
}

fn resolve_settings(args: &Args, config: Option<ConfigFile>) -> Settings {
    let config = config.unwrap_or_default();

    let mut filter_packages = config.filter_packages.clone().unwrap_or_default();
    for name in &args.filter {
        if !filter_packages.contains(name) {
            filter_packages.push(name.clone());
        }
    }

    Settings {
        graph_output: args.graph.clone().or(config.graph_output.clone()),
        format: args
            .format
            .or_else(|| config.render_format())
            .unwrap_or_default(),
        filter_packages,
        dot_command: config
            .dot_command
            .unwrap_or_else(|| DEFAULT_DOT_COMMAND.to_string()),
    }
}

fn load_config(args: &Args, progress_reporter: &impl ProgressReporter) -> Result<Option<ConfigFile>> {
    if let Some(ref path) = args.config {
        return config::load_config_from_path(path).map(Some);
    }

    let discovered = config::discover_config(&args.package_dir)?;
    if discovered.is_some() {
        progress_reporter.report(&format!(
            "📄 Auto-discovered config file: {}",
            args.package_dir.join(config::CONFIG_FILENAME).display()
        ));
    }
    Ok(discovered)
}

fn run<PR: ProgressReporter>(args: Args, progress_reporter: PR) -> Result<()> {
    validate_project_path(&args.package_dir)?;

    let settings = resolve_settings(&args, load_config(&args, &progress_reporter)?);
    tracing::debug!(?settings, "resolved settings");

    // Manifests must load before the store replaces any previous database
    let manifests = FileSystemReader::new().read_manifests(&args.package_dir)?;
    let store = SqliteGraphStore::create(&args.output_db)?;
    let mut use_case = BuildDependencyGraphUseCase::new(manifests, store, progress_reporter);

    let request = BuildGraphRequest::new(
        args.package_dir.clone(),
        settings.graph_output.is_some(),
        settings.filter_packages.clone(),
    );
    let response = use_case.execute(request)?;

    if let (Some(graph), Some(graph_output)) = (response.graph, settings.graph_output.as_ref()) {
        let reporter = use_case.progress_reporter();
        reporter.report(RendererFactory::progress_message(settings.format));

        let description = DotFormatter::new().format(&graph)?;
        let renderer = RendererFactory::create(settings.format, &settings.dot_command);
        renderer.render(&description, graph_output)?;

        reporter.report(&format!("✅ Graph written: {}", graph_output.display()));
    }

    use_case.progress_reporter().report_completion("Complete");
    Ok(())
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(GraphError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    // Security check: Reject symbolic links for project paths
    let metadata = std::fs::symlink_metadata(path).map_err(|e| GraphError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(GraphError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(GraphError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    let canonical_path = path
        .canonicalize()
        .map_err(|e| GraphError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: format!("Failed to canonicalize path: {}", e),
        })?;

    if !canonical_path.is_dir() {
        return Err(GraphError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Resolved path is not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::TempDir;

    fn args(extra: &[&str]) -> Args {
        Args::try_parse_from(["npm-depgraph", "proj", "deps.db"].iter().chain(extra.iter()))
            .unwrap()
    }

    fn config_with(format: Option<&str>, filters: &[&str]) -> ConfigFile {
        ConfigFile {
            format: format.map(str::to_string),
            filter_packages: Some(filters.iter().map(|s| s.to_string()).collect()),
            graph_output: Some(PathBuf::from("from-config.svg")),
            dot_command: None,
            unknown_fields: HashMap::new(),
        }
    }

    #[test]
    fn test_resolve_settings_defaults() {
        let settings = resolve_settings(&args(&[]), None);
        assert_eq!(
            settings,
            Settings {
                graph_output: None,
                format: RenderFormat::Svg,
                filter_packages: vec![],
                dot_command: "dot".to_string(),
            }
        );
    }

    #[test]
    fn test_resolve_settings_cli_overrides_config() {
        let settings = resolve_settings(
            &args(&["-g", "cli.dot", "-f", "dot"]),
            Some(config_with(Some("png"), &[])),
        );
        assert_eq!(settings.graph_output, Some(PathBuf::from("cli.dot")));
        assert_eq!(settings.format, RenderFormat::Dot);
    }

    #[test]
    fn test_resolve_settings_config_fills_gaps() {
        let settings = resolve_settings(&args(&[]), Some(config_with(Some("pdf"), &[])));
        assert_eq!(settings.graph_output, Some(PathBuf::from("from-config.svg")));
        assert_eq!(settings.format, RenderFormat::Pdf);
    }

    #[test]
    fn test_resolve_settings_merges_filters_without_duplicates() {
        let settings = resolve_settings(
            &args(&["-F", "ms", "-F", "debug"]),
            Some(config_with(None, &["debug", "lodash"])),
        );
        assert_eq!(settings.filter_packages, vec!["debug", "lodash", "ms"]);
    }

    #[test]
    fn test_validate_project_path_valid_directory() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_project_path(temp_dir.path()).is_ok());
    }

    #[test]
    fn test_validate_project_path_nonexistent() {
        let nonexistent_path = PathBuf::from("/nonexistent/path/that/does/not/exist");
        let err = validate_project_path(&nonexistent_path).unwrap_err();
        assert!(format!("{}", err).contains("Directory does not exist"));
    }

    #[test]
    fn test_validate_project_path_file_not_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("package.json");
        fs::write(&file_path, "{}").unwrap();

        let err = validate_project_path(&file_path).unwrap_err();
        assert!(format!("{}", err).contains("Not a directory"));
    }
}
