//! Network JSON serializer for force-directed renderers.
//!
//! The output is a `{ "nodes": [...], "edges": [...] }` document in the shape
//! expected by vis-network style data sets: nodes carry `id`/`label`, edges
//! carry `from`/`to` and point at their head with an arrow.

use serde::Serialize;
use serde_json::Value;

use crate::model::{Graph, Shape};

/// File name under which network JSON is written.
pub const FILE_NAME: &str = "graph.vis.json";

/// A network node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisNode {
    /// Node id.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Renderer shape.
    pub shape: &'static str,
    /// Fill color, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A network edge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisEdge {
    /// Source node id.
    pub from: String,
    /// Target node id.
    pub to: String,
    /// Display label.
    pub label: String,
    /// Arrow placement; `"to"` for directed graphs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrows: Option<&'static str>,
}

/// A network data set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VisNetwork {
    /// Nodes in graph order.
    pub nodes: Vec<VisNode>,
    /// Edges in graph order.
    pub edges: Vec<VisEdge>,
}

impl From<&Graph> for VisNetwork {
    fn from(graph: &Graph) -> Self {
        let nodes = graph
            .nodes
            .iter()
            .map(|node| VisNode {
                id: node.name.clone(),
                label: node.attributes.label.clone(),
                shape: node.attributes.shape.unwrap_or(Shape::Ellipse).as_str(),
                color: node.attributes.color.clone(),
            })
            .collect();
        let arrows = graph.directed.then_some("to");
        let edges = graph
            .edges
            .iter()
            .map(|edge| VisEdge {
                from: edge.tail.clone(),
                to: edge.head.clone(),
                label: edge.attributes.label.clone(),
                arrows,
            })
            .collect();
        Self { nodes, edges }
    }
}

/// Serializes a graph to a network JSON `Value`.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
///
/// # Errors
///
/// Returns an error if the network cannot be represented as JSON.
pub fn to_vis_json(graph: &Graph) -> serde_json::Result<Value> {
    serde_json::to_value(VisNetwork::from(graph))
}
