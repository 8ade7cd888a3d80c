/// Storage adapters implementing the package and dependency store ports
mod in_memory_store;
mod sqlite_store;

pub use in_memory_store::InMemoryGraphStore;
pub use sqlite_store::SqliteGraphStore;
