/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: SQLite and in-memory
/// stores, manifest reading, DOT formatting and Graphviz rendering.
pub mod outbound;
