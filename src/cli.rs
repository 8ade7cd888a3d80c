use clap::{ArgAction, Parser};
use npm_depgraph::application::dto::RenderFormat;
use std::path::PathBuf;

/// Build a dependency graph database from an npm project's manifests
#[derive(Parser, Debug)]
#[command(name = "npm-depgraph")]
#[command(version)]
#[command(
    about = "Import package.json and package-lock.json into SQLite and optionally render a Graphviz dependency graph",
    long_about = None
)]
pub struct Args {
    /// Directory containing package.json and package-lock.json
    #[arg(value_name = "PACKAGE_DIR")]
    pub package_dir: PathBuf,

    /// SQLite database to write (an existing file is replaced)
    #[arg(value_name = "OUTPUT_DB")]
    pub output_db: PathBuf,

    /// Graph output path (no graph is rendered when omitted)
    #[arg(short, long, value_name = "PATH")]
    pub graph: Option<PathBuf>,

    /// Graph format: svg, png, pdf or dot [default: svg]
    #[arg(short, long)]
    pub format: Option<RenderFormat>,

    /// Only draw the dependency chains leading to this package.
    /// Can be specified multiple times: -F debug -F ms
    #[arg(short = 'F', long = "filter", value_name = "NAME")]
    pub filter: Vec<String>,

    /// Config file (defaults to npm-depgraph.config.yml in PACKAGE_DIR)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Tracing filter directive for the requested verbosity
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
