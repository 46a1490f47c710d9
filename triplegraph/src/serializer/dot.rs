//! Graphviz DOT serializer.
//!
//! Produces the `graph.gv` source that is offered for download next to the
//! rendered SVG. Layout and SVG rendering are left to Graphviz.

use crate::model::{Attributes, Graph};

/// File name under which DOT output is offered for download.
pub const FILE_NAME: &str = "graph.gv";

/// Media type of DOT output.
pub const MEDIA_TYPE: &str = "text/vnd.graphviz";

/// Serializes a graph to Graphviz DOT source.
#[must_use]
pub fn to_dot(graph: &Graph) -> String {
    let mut out = String::with_capacity(64 * (graph.nodes.len() + graph.edges.len()) + 16);

    out.push_str(if graph.directed { "digraph {\n" } else { "graph {\n" });
    let arrow = if graph.directed { "->" } else { "--" };

    for node in &graph.nodes {
        out.push_str(&format!(
            "  {} [{}];\n",
            quote(&node.name),
            attribute_list(&node.attributes)
        ));
    }

    for edge in &graph.edges {
        out.push_str(&format!(
            "  {} {arrow} {} [{}];\n",
            quote(&edge.tail),
            quote(&edge.head),
            attribute_list(&edge.attributes)
        ));
    }

    out.push_str("}\n");
    out
}

fn attribute_list(attributes: &Attributes) -> String {
    let mut attrs = vec![format!("label={}", quote(&attributes.label))];
    if let Some(shape) = attributes.shape {
        attrs.push(format!("shape={}", shape.as_str()));
    }
    if let Some(color) = &attributes.color {
        attrs.push(format!("color={}", quote(color)));
    }
    attrs.join(", ")
}

/// Quotes a DOT identifier. Line breaks become the `\n` escape.
fn quote(s: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n");
    format!("\"{}\"", escaped)
}
