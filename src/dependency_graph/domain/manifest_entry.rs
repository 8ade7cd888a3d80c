use crate::shared::Result;
use anyhow::bail;
use serde_json::{Map, Value};

/// A name plus the version string it was declared or resolved with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageLeaf {
    pub name: String,
    pub version: String,
}

impl PackageLeaf {
    pub fn new(name: &str, version: &str) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
        }
    }
}

/// One dependency entry of a manifest section, classified once at parse time
///
/// A bare version string (`"lodash": "^4.17.21"`) becomes a `Leaf`. A
/// dependency record (`"lodash": {"version": "4.17.21", ...}`) becomes a
/// `WithSubtree` carrying its nested `dependencies` records, which are walked
/// further, and its `requires` constraints, which are always leaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestEntry {
    Leaf(PackageLeaf),
    WithSubtree {
        package: PackageLeaf,
        dependencies: Vec<ManifestEntry>,
        requires: Vec<PackageLeaf>,
    },
}

impl ManifestEntry {
    /// Parses every entry of a section mapping (`name -> version | record`)
    pub fn parse_section(section: &Value) -> Result<Vec<ManifestEntry>> {
        let Value::Object(entries) = section else {
            bail!(
                "section must be an object mapping package names to versions, found {}",
                json_kind(section)
            );
        };

        entries
            .iter()
            .map(|(name, value)| Self::parse(name, value))
            .collect()
    }

    /// Parses a single entry value
    pub fn parse(name: &str, value: &Value) -> Result<Self> {
        match value {
            Value::String(version) => Ok(ManifestEntry::Leaf(PackageLeaf::new(name, version))),
            Value::Object(record) => Self::parse_record(name, record),
            other => bail!(
                "entry '{}' must be a version string or a dependency record, found {}",
                name,
                json_kind(other)
            ),
        }
    }

    fn parse_record(name: &str, record: &Map<String, Value>) -> Result<Self> {
        let version = match record.get("version") {
            Some(Value::String(version)) => version,
            Some(other) => bail!(
                "dependency record '{}' has a non-string version ({})",
                name,
                json_kind(other)
            ),
            None => bail!("dependency record '{}' has no version field", name),
        };

        let dependencies = match record.get("dependencies") {
            Some(Value::Object(children)) => children
                .iter()
                .map(|(child_name, child)| Self::parse(child_name, child))
                .collect::<Result<Vec<_>>>()?,
            Some(other) => bail!(
                "'dependencies' of '{}' must be an object, found {}",
                name,
                json_kind(other)
            ),
            None => Vec::new(),
        };

        let requires = match record.get("requires") {
            Some(Value::Object(constraints)) => constraints
                .iter()
                .map(|(required_name, constraint)| match constraint {
                    Value::String(version) => Ok(PackageLeaf::new(required_name, version)),
                    other => bail!(
                        "requirement '{}' of '{}' must be a version string, found {}",
                        required_name,
                        name,
                        json_kind(other)
                    ),
                })
                .collect::<Result<Vec<_>>>()?,
            Some(other) => bail!(
                "'requires' of '{}' must be an object, found {}",
                name,
                json_kind(other)
            ),
            None => Vec::new(),
        };

        Ok(ManifestEntry::WithSubtree {
            package: PackageLeaf::new(name, version),
            dependencies,
            requires,
        })
    }

    pub fn package(&self) -> &PackageLeaf {
        match self {
            ManifestEntry::Leaf(package) => package,
            ManifestEntry::WithSubtree { package, .. } => package,
        }
    }

    pub fn name(&self) -> &str {
        &self.package().name
    }

    pub fn version(&self) -> &str {
        &self.package().version
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
