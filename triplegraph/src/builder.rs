//! Assembles a renderable [`Graph`] from embedded [`GraphData`].

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::model::iris::RDF;
use crate::model::{Attributes, Edge, Graph, GraphData, Node, Shape};
use crate::namespace::{NamespaceMap, DEFAULT_MAX_ALIAS_LEN, DEFAULT_SEPARATORS};

/// Width at which literal labels are wrapped unless configured otherwise.
pub const DEFAULT_WRAP_WIDTH: usize = 30;

/// Reserved id prefix of synthesized literal nodes.
pub const LITERAL_ID_PREFIX: &str = "_:";

/// Fill color of literal nodes.
const LITERAL_COLOR: &str = "orange";

/// How literal values are turned into labels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LiteralStyle {
    /// Tagged literals are quoted and annotated (`"42"@en`, `"1"^^xsd:int`);
    /// untagged literals render verbatim.
    #[default]
    Annotated,
    /// Every literal renders verbatim and tags are ignored.
    Plain,
}

/// A built graph together with the namespace map used for its labels.
#[derive(Debug, Clone)]
pub struct RenderedGraph {
    /// The graph.
    pub graph: Graph,
    /// Namespaces used to shorten node and edge labels.
    pub namespaces: NamespaceMap,
}

/// Builds graphs from triples.
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    separators: String,
    max_alias_len: usize,
    wrap_width: usize,
    literal_style: LiteralStyle,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self {
            separators: DEFAULT_SEPARATORS.to_owned(),
            max_alias_len: DEFAULT_MAX_ALIAS_LEN,
            wrap_width: DEFAULT_WRAP_WIDTH,
            literal_style: LiteralStyle::default(),
        }
    }
}

impl GraphBuilder {
    /// Creates a builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder from configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            separators: config.separators.clone(),
            max_alias_len: config.max_alias_len,
            wrap_width: config.wrap_width,
            literal_style: config.literal_style,
        }
    }

    /// Sets the wrap width of literal labels. A width of zero disables wrapping.
    #[must_use]
    pub fn wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = width;
        self
    }

    /// Sets how literal values are rendered.
    #[must_use]
    pub fn literal_style(mut self, style: LiteralStyle) -> Self {
        self.literal_style = style;
        self
    }

    /// Builds the graph.
    ///
    /// Subjects and objects of relational triples, and subjects of data
    /// triples, become ellipse nodes. Each data triple gets its own box node
    /// with a fresh `_:N` id. All URIs are labelled through a namespace map
    /// generated from the node and predicate URIs, with `rdf` always pinned.
    #[must_use]
    pub fn build(&self, data: &GraphData) -> RenderedGraph {
        let mut nodes: Vec<&str> = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();
        let endpoints = data
            .triples
            .iter()
            .flat_map(|t| [t.subject.as_str(), t.object.as_str()])
            .chain(data.data.iter().map(|d| d.subject.as_str()));
        for uri in endpoints {
            if seen.insert(uri) {
                nodes.push(uri);
            }
        }

        // predicates first: alias numbering follows input order
        let predicates = data
            .triples
            .iter()
            .map(|t| t.predicate.as_str())
            .chain(data.data.iter().map(|d| d.predicate.as_str()));
        let mut uris: Vec<&str> = Vec::new();
        let mut seen_uris: HashSet<&str> = HashSet::new();
        for uri in predicates.chain(nodes.iter().copied()) {
            if seen_uris.insert(uri) {
                uris.push(uri);
            }
        }

        let mut namespaces = NamespaceMap::generate(uris, &self.separators, self.max_alias_len);
        namespaces.add(RDF, "rdf");

        let mut graph = Graph::default();
        for &uri in &nodes {
            graph.nodes.push(Node {
                name: uri.to_owned(),
                attributes: Attributes {
                    label: namespaces.shorten(uri),
                    shape: Some(Shape::Ellipse),
                    color: None,
                },
            });
        }

        for triple in &data.triples {
            graph.edges.push(Edge {
                tail: triple.subject.clone(),
                head: triple.object.clone(),
                attributes: Attributes {
                    label: namespaces.shorten(&triple.predicate),
                    ..Attributes::default()
                },
            });
        }

        let mut counter = 0usize;
        for datum in &data.data {
            let id = loop {
                counter += 1;
                let id = format!("{LITERAL_ID_PREFIX}{counter}");
                if !seen.contains(id.as_str()) {
                    break id;
                }
            };

            let text = render_literal(
                &datum.literal,
                datum.tag.as_deref(),
                self.literal_style,
                &namespaces,
            );
            graph.nodes.push(Node {
                name: id.clone(),
                attributes: Attributes {
                    label: wrap(&text, self.wrap_width),
                    shape: Some(Shape::Box),
                    color: Some(LITERAL_COLOR.to_owned()),
                },
            });
            graph.edges.push(Edge {
                tail: datum.subject.clone(),
                head: id,
                attributes: Attributes {
                    label: namespaces.shorten(&datum.predicate),
                    ..Attributes::default()
                },
            });
        }

        debug!(
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            namespaces = namespaces.len(),
            "built triple graph"
        );

        RenderedGraph { graph, namespaces }
    }
}

/// Renders a literal value as label text.
///
/// Strings render verbatim, other values as compact JSON. In
/// [`LiteralStyle::Annotated`] a tag adds quotes and either `@lang` or, for
/// tags that look like IRIs, `^^datatype` shortened through `namespaces`.
#[must_use]
pub fn render_literal(
    literal: &Value,
    tag: Option<&str>,
    style: LiteralStyle,
    namespaces: &NamespaceMap,
) -> String {
    let text = match literal {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    let tag = match (style, tag) {
        (LiteralStyle::Annotated, Some(tag)) if !tag.is_empty() => tag,
        _ => return text,
    };
    if tag.contains(':') {
        format!("\"{text}\"^^{}", namespaces.shorten(tag))
    } else {
        format!("\"{text}\"@{tag}")
    }
}

/// Splits `text` into lines of at most `width` characters.
///
/// The split is purely positional. A width of zero returns the text unchanged.
#[must_use]
pub fn wrap(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_owned();
    }
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
