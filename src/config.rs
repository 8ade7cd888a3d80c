//! Configuration file support for npm-depgraph.
//!
//! Provides YAML-based configuration through `npm-depgraph.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use npm_depgraph::application::dto::RenderFormat;
use npm_depgraph::shared::Result;

pub const CONFIG_FILENAME: &str = "npm-depgraph.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub filter_packages: Option<Vec<String>>,
    pub graph_output: Option<PathBuf>,
    pub dot_command: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// The configured render format, already checked by validation.
    pub fn render_format(&self) -> Option<RenderFormat> {
        self.format
            .as_deref()
            .and_then(|f| RenderFormat::from_str(f).ok())
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file deserializes to null rather than an empty mapping
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        if let Err(e) = RenderFormat::from_str(format) {
            bail!(
                "Invalid config: format: {}\n\n💡 Hint: Use one of svg, png, pdf or dot.",
                e
            );
        }
    }

    if let Some(ref filters) = config.filter_packages {
        for (i, name) in filters.iter().enumerate() {
            if name.trim().is_empty() {
                bail!(
                    "Invalid config: filter_packages[{}] must not be empty.\n\n\
                     💡 Hint: Each filter_packages entry must be a package name (e.g., \"lodash\").",
                    i
                );
            }
        }
    }

    if let Some(ref command) = config.dot_command {
        if command.trim().is_empty() {
            bail!(
                "Invalid config: dot_command must not be empty.\n\n\
                 💡 Hint: Remove the field to use `dot` from PATH."
            );
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<_> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
