/// Formatter adapters turning graph views into text descriptions
mod dot_formatter;

pub use dot_formatter::{sanitize_node_id, DotFormatter};
