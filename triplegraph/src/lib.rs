//! Triple graphs for RDF entity viewers.
//!
//! The `triplegraph` crate turns the triples an entity page embeds into a
//! directed graph with compact, namespace-shortened labels, and serializes
//! that graph for Graphviz, for force-directed network renderers, and as
//! Turtle. It also carries the state machines behind the viewer's smaller
//! widgets: the triple table, collapsible panels, the loading progress
//! poller and the tipsy frame handshake.
//!
//! # Entry Point
//!
//! ```
//! use triplegraph::{GraphBuilder, GraphData};
//!
//! let data = GraphData::from_json(
//!     r#"{"triples": [["http://a.org/x", "http://a.org/y", "http://b.org/z"]]}"#,
//! ).unwrap();
//! let rendered = GraphBuilder::new().build(&data);
//! assert_eq!(rendered.graph.nodes[0].attributes.label, "a:x");
//! ```
//!
//! # Serialization
//!
//! ```
//! # use triplegraph::{GraphBuilder, GraphData};
//! # let data = GraphData::default();
//! let rendered = GraphBuilder::new().build(&data);
//! let dot = triplegraph::serializer::dot::to_dot(&rendered.graph);
//! let vis = triplegraph::serializer::vis::to_vis_json(&rendered.graph).unwrap();
//! let ttl = triplegraph::serializer::turtle::to_turtle(&data, &rendered.namespaces);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod builder;
pub mod config;
pub mod embed;
pub mod error;
pub mod model;
pub mod namespace;
pub mod progress;
pub mod serializer;
pub mod showable;
pub mod table;
pub mod tipsy;

pub use builder::{GraphBuilder, LiteralStyle, RenderedGraph};
pub use config::Config;
pub use error::{Error, Result};
pub use model::{Attributes, DataTriple, Edge, Graph, GraphData, Node, Shape, Triple};
pub use namespace::NamespaceMap;
pub use progress::{Poller, Progress, ProgressSink, ProgressSource, StatusView};
