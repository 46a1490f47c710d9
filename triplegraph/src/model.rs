//! Core data model: triples as embedded in entity pages, and the directed
//! graph handed to a rendering engine.
//!
//! [`GraphData`] mirrors the JSON a page embeds in a
//! `<script data-render-graph="true">` element. [`Graph`] serializes to the
//! node/edge object format accepted by Graphviz-in-the-browser renderers.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// A relational triple: an edge between two URI nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String, String)", into = "(String, String, String)")]
pub struct Triple {
    /// Subject URI.
    pub subject: String,
    /// Predicate URI.
    pub predicate: String,
    /// Object URI.
    pub object: String,
}

impl Triple {
    /// Creates a new triple.
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }
}

impl From<(String, String, String)> for Triple {
    fn from((subject, predicate, object): (String, String, String)) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }
}

impl From<Triple> for (String, String, String) {
    fn from(triple: Triple) -> Self {
        (triple.subject, triple.predicate, triple.object)
    }
}

/// A data triple: an edge from a URI node to a literal value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawDataTriple", into = "RawDataTriple")]
pub struct DataTriple {
    /// Subject URI.
    pub subject: String,
    /// Predicate URI.
    pub predicate: String,
    /// The literal, as any JSON value.
    pub literal: Value,
    /// Language tag (`en`) or datatype IRI, if known.
    pub tag: Option<String>,
}

impl DataTriple {
    /// Creates a new data triple without a tag.
    pub fn new(subject: impl Into<String>, predicate: impl Into<String>, literal: Value) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            literal,
            tag: None,
        }
    }

    /// Attaches a language tag or datatype IRI.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }
}

/// Wire form of a [`DataTriple`]: a 3- or 4-element array.
#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawDataTriple {
    Tagged(String, String, Value, Option<String>),
    Plain(String, String, Value),
}

impl From<RawDataTriple> for DataTriple {
    fn from(raw: RawDataTriple) -> Self {
        let (subject, predicate, literal, tag) = match raw {
            RawDataTriple::Tagged(s, p, l, t) => (s, p, l, t),
            RawDataTriple::Plain(s, p, l) => (s, p, l, None),
        };
        Self {
            subject,
            predicate,
            literal,
            tag,
        }
    }
}

impl From<DataTriple> for RawDataTriple {
    fn from(data: DataTriple) -> Self {
        match data.tag {
            Some(tag) => {
                RawDataTriple::Tagged(data.subject, data.predicate, data.literal, Some(tag))
            }
            None => RawDataTriple::Plain(data.subject, data.predicate, data.literal),
        }
    }
}

/// Triples embedded in an entity page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    /// Relational triples.
    #[serde(default)]
    pub triples: Vec<Triple>,
    /// Data triples.
    #[serde(default)]
    pub data: Vec<DataTriple>,
}

impl GraphData {
    /// Parses graph data from a script element's text content.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::Error::Json) if the text is not valid
    /// graph data.
    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Node shape hint for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    /// URI nodes.
    Ellipse,
    /// Literal nodes.
    Box,
}

impl Shape {
    /// Returns the Graphviz shape name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Shape::Ellipse => "ellipse",
            Shape::Box => "box",
        }
    }
}

/// Display attributes of a node or edge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    /// Display label; may contain `\n` line breaks.
    pub label: String,
    /// Node shape, unset for edges.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<Shape>,
    /// Node color, unset for the renderer default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A graph node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    /// Unique node id: a URI or a synthesized literal id.
    pub name: String,
    /// Display attributes.
    pub attributes: Attributes,
}

/// A directed graph edge from `tail` to `head`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// Source node id (the subject).
    pub tail: String,
    /// Target node id (the object or literal node).
    pub head: String,
    /// Display attributes.
    pub attributes: Attributes,
}

/// A directed graph ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    /// Always `true`.
    pub directed: bool,
    /// Nodes in insertion order.
    pub nodes: Vec<Node>,
    /// Edges in insertion order.
    pub edges: Vec<Edge>,
}

impl Default for Graph {
    fn default() -> Self {
        Self {
            directed: true,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }
}

impl Graph {
    /// Looks up a node by id.
    #[must_use]
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.name == name)
    }

    /// Returns edges leaving `name`.
    pub fn edges_from<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().filter(move |e| e.tail == name)
    }

    /// Returns `true` when every edge endpoint is a node of this graph.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        let names: HashSet<&str> = self.nodes.iter().map(|n| n.name.as_str()).collect();
        self.edges
            .iter()
            .all(|e| names.contains(e.tail.as_str()) && names.contains(e.head.as_str()))
    }
}

/// Standard IRI constants.
pub mod iris {
    /// RDF namespace. Always aliased as `rdf`.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_embedded_json() {
        let data = GraphData::from_json(
            r#"{
                "triples": [["http://a.org/s", "http://a.org/p", "http://a.org/o"]],
                "data": [
                    ["http://a.org/s", "http://a.org/name", "Alice"],
                    ["http://a.org/s", "http://a.org/age", 42, "en"],
                    ["http://a.org/s", "http://a.org/flag", true, null]
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(
            data.triples,
            vec![Triple::new("http://a.org/s", "http://a.org/p", "http://a.org/o")]
        );
        assert_eq!(data.data.len(), 3);
        assert_eq!(data.data[0].literal, json!("Alice"));
        assert_eq!(data.data[0].tag, None);
        assert_eq!(data.data[1].literal, json!(42));
        assert_eq!(data.data[1].tag.as_deref(), Some("en"));
        assert_eq!(data.data[2].tag, None);
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let data = GraphData::from_json("{}").unwrap();
        assert!(data.triples.is_empty());
        assert!(data.data.is_empty());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(GraphData::from_json("{\"triples\": [[\"a\", \"b\"]]}").is_err());
        assert!(GraphData::from_json("not json").is_err());
    }

    #[test]
    fn data_triple_serializes_as_array() {
        let plain = DataTriple::new("s", "p", json!(1));
        assert_eq!(serde_json::to_value(&plain).unwrap(), json!(["s", "p", 1]));
        let tagged = plain.with_tag("de");
        assert_eq!(serde_json::to_value(&tagged).unwrap(), json!(["s", "p", 1, "de"]));
    }

    #[test]
    fn graph_serializes_in_renderer_format() {
        let graph = Graph {
            directed: true,
            nodes: vec![Node {
                name: "http://a.org/s".into(),
                attributes: Attributes {
                    label: "a:s".into(),
                    shape: Some(Shape::Ellipse),
                    color: None,
                },
            }],
            edges: vec![],
        };
        assert_eq!(
            serde_json::to_value(&graph).unwrap(),
            json!({
                "directed": true,
                "nodes": [{"name": "http://a.org/s", "attributes": {"label": "a:s", "shape": "ellipse"}}],
                "edges": []
            })
        );
    }

    #[test]
    fn closed_graph_check() {
        let mut graph = Graph::default();
        graph.nodes.push(Node {
            name: "a".into(),
            attributes: Attributes::default(),
        });
        graph.edges.push(Edge {
            tail: "a".into(),
            head: "b".into(),
            attributes: Attributes::default(),
        });
        assert!(!graph.is_closed());
        graph.nodes.push(Node {
            name: "b".into(),
            attributes: Attributes::default(),
        });
        assert!(graph.is_closed());
        assert_eq!(graph.edges_from("a").count(), 1);
    }
}
