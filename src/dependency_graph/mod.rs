/// Domain layer: dependency graph model and the services that build and query it
///
/// Nothing in here performs I/O directly; storage and progress output go
/// through the outbound ports.
pub mod domain;
pub mod services;
