use crate::dependency_graph::domain::{
    EdgeEndpoint, EdgeKind, GraphEdge, GraphView, NodeOrigin, PackageGroup,
};
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;

/// Name of the emitted digraph
const GRAPH_NAME: &str = "package_dependency_graph";

/// Color of edges found by walking back from a filter target
const ANCESTOR_EDGE_COLOR: &str = "firebrick";

/// Fill color marking lockfile nodes in filtered graphs
const LOCKED_FILL_COLOR: &str = "lightgrey";

/// Replaces characters that are awkward in Graphviz identifiers
///
/// `-`, `@`, `/` and `.` become `_`, `a`, `f` and `p`. Labels show the
/// package name unchanged; only identifiers are sanitized.
pub fn sanitize_node_id(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '-' => '_',
            '@' => 'a',
            '/' => 'f',
            '.' => 'p',
            other => other,
        })
        .collect()
}

/// DotFormatter adapter producing Graphviz DOT text
///
/// Implements the GraphFormatter port. Each package name becomes one
/// record-shaped node per cluster, with one `<p{id}>` field per version.
/// Edges point from child to parent.
pub struct DotFormatter;

impl DotFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes characters that have meaning inside a record label
    fn escape_record_text(text: &str) -> String {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            if matches!(c, '<' | '>' | '|' | '{' | '}' | '"') {
                escaped.push('\\');
            }
            escaped.push(c);
        }
        escaped
    }

    fn node_label(group: &PackageGroup) -> String {
        let mut fields = vec![Self::escape_record_text(&group.name)];
        fields.extend(
            group
                .slots
                .iter()
                .map(|slot| format!("<p{}> {}", slot.id, Self::escape_record_text(&slot.version))),
        );
        fields.join(" | ")
    }

    fn endpoint(endpoint: &EdgeEndpoint) -> String {
        let id = sanitize_node_id(&endpoint.name);
        match endpoint.slot {
            Some(slot) => format!("\"{}\":<p{}>", id, slot),
            None => format!("\"{}\"", id),
        }
    }
}

impl Default for DotFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl DotFormatter {
    fn render_header(&self, output: &mut String) {
        output.push_str(&format!("digraph {} {{\n", GRAPH_NAME));
        output.push_str("\tnode [shape=record];\n");
        output.push_str("\trankdir=LR;\n");
    }

    fn render_cluster(&self, output: &mut String, graph: &GraphView, origin: NodeOrigin) {
        let cluster = match origin {
            NodeOrigin::Declared => "cluster_package_json",
            NodeOrigin::Locked => "cluster_lock_json",
        };
        output.push_str(&format!("\tsubgraph {} {{\n", cluster));
        output.push_str(&format!("\t\tlabel=\"{}\";\n", origin.manifest()));

        for group in graph.groups(origin) {
            let mut attributes = vec![format!("label=\"{}\"", Self::node_label(&group))];
            if graph.is_filtered() && origin == NodeOrigin::Locked {
                attributes.push("style=filled".to_string());
                attributes.push(format!("fillcolor={}", LOCKED_FILL_COLOR));
            }
            if graph.is_target(&group.name) {
                attributes.push("penwidth=2".to_string());
            }

            output.push_str(&format!(
                "\t\t\"{}\" [{}];\n",
                sanitize_node_id(&group.name),
                attributes.join(", ")
            ));
        }
        output.push_str("\t}\n");
    }

    fn render_edge(&self, output: &mut String, edge: &GraphEdge) {
        let attributes = match edge.kind {
            EdgeKind::Dependency => String::new(),
            EdgeKind::Ancestor => format!(" [color={}]", ANCESTOR_EDGE_COLOR),
        };
        output.push_str(&format!(
            "\t{} -> {}{};\n",
            Self::endpoint(&edge.child),
            Self::endpoint(&edge.parent),
            attributes
        ));
    }
}

impl GraphFormatter for DotFormatter {
    fn format(&self, graph: &GraphView) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output);
        self.render_cluster(&mut output, graph, NodeOrigin::Declared);
        self.render_cluster(&mut output, graph, NodeOrigin::Locked);
        for edge in graph.edges() {
            self.render_edge(&mut output, edge);
        }
        output.push_str("}\n");

        Ok(output)
    }
}
