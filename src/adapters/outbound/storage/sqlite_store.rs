use crate::dependency_graph::domain::{
    DependencyEdge, JoinedDependency, Package, PackageGroup, PackageRecord, VersionSlot,
};
use crate::ports::outbound::{DependencyStore, GraphStore, PackageStore};
use crate::shared::error::GraphError;
use crate::shared::security::prepare_output_path;
use crate::shared::Result;
use rusqlite::{params, Connection, Row};
use std::path::{Path, PathBuf};
use tracing::debug;

const SCHEMA_SQL: &str = "
CREATE TABLE packages (
    id INTEGER PRIMARY KEY NOT NULL,
    name TEXT NOT NULL,
    version TEXT NOT NULL,
    file TEXT NOT NULL,
    fileSection TEXT NOT NULL,
    UNIQUE(name, version, fileSection)
);
CREATE TABLE dependencies (
    parentName TEXT NOT NULL,
    parentVersion TEXT NOT NULL,
    childName TEXT NOT NULL,
    childVersion TEXT NOT NULL,
    UNIQUE(parentName, parentVersion, childName, childVersion)
);
CREATE INDEX idx_dependencies_child ON dependencies(childName);
";

const PACKAGE_EXISTS_SQL: &str =
    "SELECT 1 FROM packages WHERE name = ?1 AND version = ?2 AND fileSection = ?3";

const INSERT_PACKAGE_SQL: &str =
    "INSERT INTO packages (name, version, file, fileSection) VALUES (?1, ?2, ?3, ?4)";

const DEPENDENCY_EXISTS_SQL: &str = "SELECT 1 FROM dependencies \
     WHERE parentName = ?1 AND parentVersion = ?2 AND childName = ?3 AND childVersion = ?4";

const INSERT_DEPENDENCY_SQL: &str = "INSERT INTO dependencies \
     (parentName, parentVersion, childName, childVersion) VALUES (?1, ?2, ?3, ?4)";

const PACKAGES_BY_FILE_SQL: &str =
    "SELECT id, name, version FROM packages WHERE file = ?1 ORDER BY name, id";

const PACKAGES_BY_NAME_SQL: &str =
    "SELECT id, name, version, file, fileSection FROM packages WHERE name = ?1 ORDER BY id";

const DEPENDENCIES_BY_CHILD_SQL: &str = "SELECT parentName, parentVersion, childName, childVersion \
     FROM dependencies WHERE childName = ?1 \
     ORDER BY parentName, parentVersion, childVersion";

const JOINED_DEPENDENCIES_SQL: &str = "
SELECT d.parentName, d.parentVersion, d.childName, d.childVersion, parent.id, child.id
FROM dependencies AS d
JOIN packages AS parent
    ON d.parentName = parent.name AND d.parentVersion = parent.version
JOIN packages AS child
    ON d.childName = child.name AND d.childVersion = child.version
ORDER BY parent.id, child.id";

/// SQLite-backed package and dependency store
///
/// Owns its connection; dropping the store closes it.
pub struct SqliteGraphStore {
    conn: Connection,
    db_path: Option<PathBuf>,
}

impl std::fmt::Debug for SqliteGraphStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteGraphStore")
            .field("db_path", &self.db_path)
            .finish_non_exhaustive()
    }
}

impl SqliteGraphStore {
    /// Creates a fresh store at `path`
    ///
    /// Any existing file at the path is removed first and missing parent
    /// directories are created.
    pub fn create(path: &Path) -> Result<Self> {
        prepare_output_path(path)?;
        let conn = Connection::open(path).map_err(|e| GraphError::store("open database", e))?;
        let store = Self {
            conn,
            db_path: Some(path.to_path_buf()),
        };
        store.initialize()?;
        debug!(path = %path.display(), "created dependency store");
        Ok(store)
    }

    /// Creates a store that lives only in memory
    pub fn in_memory() -> Result<Self> {
        let conn =
            Connection::open_in_memory().map_err(|e| GraphError::store("open database", e))?;
        let store = Self {
            conn,
            db_path: None,
        };
        store.initialize()?;
        Ok(store)
    }

    pub fn db_path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }

    fn initialize(&self) -> Result<()> {
        self.conn
            .execute_batch(SCHEMA_SQL)
            .map_err(|e| GraphError::store("create schema", e))?;
        Ok(())
    }

    fn row_exists(&self, sql: &str, values: &[&str], operation: &str) -> Result<bool> {
        let mut stmt = self
            .conn
            .prepare_cached(sql)
            .map_err(|e| GraphError::store(operation, e))?;
        let exists = stmt
            .exists(rusqlite::params_from_iter(values.iter()))
            .map_err(|e| GraphError::store(operation, e))?;
        Ok(exists)
    }

    fn count(&self, table: &str) -> Result<usize> {
        let operation = format!("count {}", table);
        let count: i64 = self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {}", table), [], |row| {
                row.get(0)
            })
            .map_err(|e| GraphError::store(&operation, e))?;
        Ok(count as usize)
    }
}

impl PackageStore for SqliteGraphStore {
    fn add_package(&mut self, package: &Package) -> Result<bool> {
        let key = [package.name(), package.version(), package.section()];
        if self.row_exists(PACKAGE_EXISTS_SQL, &key, "look up package")? {
            return Ok(false);
        }

        self.conn
            .prepare_cached(INSERT_PACKAGE_SQL)
            .and_then(|mut stmt| {
                stmt.execute(params![
                    package.name(),
                    package.version(),
                    package.file(),
                    package.section()
                ])
            })
            .map_err(|e| GraphError::store("insert package", e))?;
        Ok(true)
    }

    fn packages_by_source(&self, file: &str) -> Result<Vec<PackageGroup>> {
        let operation = "query packages by file";
        let mut stmt = self
            .conn
            .prepare_cached(PACKAGES_BY_FILE_SQL)
            .map_err(|e| GraphError::store(operation, e))?;
        let rows = stmt
            .query_map(params![file], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                ))
            })
            .map_err(|e| GraphError::store(operation, e))?;

        let mut groups: Vec<PackageGroup> = Vec::new();
        for row in rows {
            let (id, name, version) = row.map_err(|e| GraphError::store(operation, e))?;
            let slot = VersionSlot { id, version };
            match groups.last_mut() {
                Some(group) if group.name == name => group.slots.push(slot),
                _ => groups.push(PackageGroup {
                    name,
                    slots: vec![slot],
                }),
            }
        }
        Ok(groups)
    }

    fn packages_named(&self, name: &str) -> Result<Vec<PackageRecord>> {
        let operation = "query packages by name";
        let mut stmt = self
            .conn
            .prepare_cached(PACKAGES_BY_NAME_SQL)
            .map_err(|e| GraphError::store(operation, e))?;
        let rows = stmt
            .query_map(params![name], |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, String>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, String>(4)?,
                ))
            })
            .map_err(|e| GraphError::store(operation, e))?;

        let mut records = Vec::new();
        for row in rows {
            let (id, name, version, file, section) =
                row.map_err(|e| GraphError::store(operation, e))?;
            records.push(PackageRecord {
                id,
                package: Package::new(name, version, &file, &section)?,
            });
        }
        Ok(records)
    }

    fn package_count(&self) -> Result<usize> {
        self.count("packages")
    }
}

impl DependencyStore for SqliteGraphStore {
    fn add_dependency(&mut self, edge: &DependencyEdge) -> Result<bool> {
        let key = [
            edge.parent_name.as_str(),
            edge.parent_version.as_str(),
            edge.child_name.as_str(),
            edge.child_version.as_str(),
        ];
        if self.row_exists(DEPENDENCY_EXISTS_SQL, &key, "look up dependency")? {
            return Ok(false);
        }

        self.conn
            .prepare_cached(INSERT_DEPENDENCY_SQL)
            .and_then(|mut stmt| stmt.execute(rusqlite::params_from_iter(key.iter())))
            .map_err(|e| GraphError::store("insert dependency", e))?;
        Ok(true)
    }

    fn dependencies_of(&self, child_name: &str) -> Result<Vec<DependencyEdge>> {
        let operation = "query dependencies by child";
        let mut stmt = self
            .conn
            .prepare_cached(DEPENDENCIES_BY_CHILD_SQL)
            .map_err(|e| GraphError::store(operation, e))?;
        let rows = stmt
            .query_map(params![child_name], edge_from_row)
            .map_err(|e| GraphError::store(operation, e))?;

        let edges = rows
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| GraphError::store(operation, e))?;
        Ok(edges)
    }

    fn joined_dependencies(&self) -> Result<Vec<JoinedDependency>> {
        let operation = "join dependencies with packages";
        let mut stmt = self
            .conn
            .prepare_cached(JOINED_DEPENDENCIES_SQL)
            .map_err(|e| GraphError::store(operation, e))?;
        let rows = stmt
            .query_map([], |row| {
                Ok(JoinedDependency {
                    edge: edge_from_row(row)?,
                    parent_id: row.get(4)?,
                    child_id: row.get(5)?,
                })
            })
            .map_err(|e| GraphError::store(operation, e))?;

        let joined = rows
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(|e| GraphError::store(operation, e))?;
        Ok(joined)
    }

    fn dependency_count(&self) -> Result<usize> {
        self.count("dependencies")
    }
}

impl GraphStore for SqliteGraphStore {
    fn begin_import(&mut self) -> Result<()> {
        self.conn
            .execute_batch("BEGIN")
            .map_err(|e| GraphError::store("begin import transaction", e))?;
        Ok(())
    }

    fn finish_import(&mut self) -> Result<()> {
        self.conn
            .execute_batch("COMMIT")
            .map_err(|e| GraphError::store("commit import transaction", e))?;
        Ok(())
    }
}

fn edge_from_row(row: &Row<'_>) -> rusqlite::Result<DependencyEdge> {
    Ok(DependencyEdge {
        parent_name: row.get(0)?,
        parent_version: row.get(1)?,
        child_name: row.get(2)?,
        child_version: row.get(3)?,
    })
}
