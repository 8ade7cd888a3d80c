/// Data Transfer Objects for application layer
///
/// DTOs carry data between the use case and the entry point, keeping the
/// domain layer isolated from CLI and configuration concerns.
mod build_graph_request;
mod build_graph_response;
mod render_format;

pub use build_graph_request::BuildGraphRequest;
pub use build_graph_response::{BuildGraphResponse, ImportSummary, SectionSummary};
pub use render_format::RenderFormat;
