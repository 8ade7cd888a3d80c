use crate::shared::Result;

/// Maximum length for package names (npm registry limit)
const MAX_PACKAGE_NAME_LENGTH: usize = 214;

/// Maximum length for version strings
///
/// Bare requirements may be git URLs or tarball paths, so this is generous.
const MAX_VERSION_LENGTH: usize = 1024;

/// NewType wrapper for package name with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageName(String);

impl PackageName {
    pub fn new(name: String) -> Result<Self> {
        if name.is_empty() {
            anyhow::bail!("Package name cannot be empty");
        }

        if name.len() > MAX_PACKAGE_NAME_LENGTH {
            anyhow::bail!(
                "Package name is too long ({} bytes). Maximum allowed: {} bytes",
                name.len(),
                MAX_PACKAGE_NAME_LENGTH
            );
        }

        // Scoped names (`@scope/pkg`) are fine; whitespace and control characters are not.
        if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
            anyhow::bail!(
                "Package name '{}' contains whitespace or control characters",
                name.escape_debug()
            );
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PackageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// NewType wrapper for a version string
///
/// Holds either a resolved version (`4.17.21`) or a raw requirement
/// (`^4.17.0`, `git+https://...`). Ranges are never interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Version(String);

impl Version {
    pub fn new(version: String) -> Result<Self> {
        if version.len() > MAX_VERSION_LENGTH {
            anyhow::bail!(
                "Package version is too long ({} bytes). Maximum allowed: {} bytes",
                version.len(),
                MAX_VERSION_LENGTH
            );
        }

        if version.chars().any(|c| c.is_control()) {
            anyhow::bail!(
                "Package version '{}' contains control characters",
                version.escape_debug()
            );
        }

        Ok(Self(version))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Version {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Package value object: one (name, version) as seen in one manifest section
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Package {
    name: PackageName,
    version: Version,
    file: String,
    section: String,
}

impl Package {
    pub fn new(name: String, version: String, file: &str, section: &str) -> Result<Self> {
        Ok(Self {
            name: PackageName::new(name)?,
            version: Version::new(version)?,
            file: file.to_string(),
            section: section.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn version(&self) -> &str {
        self.version.as_str()
    }

    /// Manifest the package was read from (e.g. `package-lock.json`)
    pub fn file(&self) -> &str {
        &self.file
    }

    /// Section label it was recorded under (e.g. `devDependencies`)
    pub fn section(&self) -> &str {
        &self.section
    }
}

/// A package as stored, with its store-assigned identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageRecord {
    pub id: i64,
    pub package: Package,
}

/// One version cell of a grouped package record
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VersionSlot {
    pub id: i64,
    pub version: String,
}

/// Every version recorded for one package name within one manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageGroup {
    pub name: String,
    pub slots: Vec<VersionSlot>,
}

impl PackageGroup {
    pub fn versions(&self) -> Vec<&str> {
        self.slots.iter().map(|s| s.version.as_str()).collect()
    }
}
