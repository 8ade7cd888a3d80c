/// Ports module defining interfaces for hexagonal architecture
///
/// Only outbound (driven) ports exist: the storage, file system, rendering and
/// console interfaces that the domain services and use case depend on.
pub mod outbound;
