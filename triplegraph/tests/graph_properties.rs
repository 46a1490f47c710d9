//! Property-based tests for triple-graph assembly.

use std::collections::HashSet;

use proptest::prelude::*;
use serde_json::{json, Value};
use triplegraph::builder::{wrap, LITERAL_ID_PREFIX};
use triplegraph::serializer::{dot, vis};
use triplegraph::{DataTriple, GraphBuilder, GraphData, Shape, Triple};

fn uri() -> impl Strategy<Value = String> {
    prop_oneof![
        "http://(a|b|www\\.c)\\.org/[a-z]{1,3}(#[a-z]{1,3})?",
        "urn:[a-z]{1,4}",
        // ids that look like literal nodes must not confuse the builder
        "_:[1-4]",
    ]
}

fn literal() -> impl Strategy<Value = Value> {
    prop_oneof![
        "[ -~]{0,80}".prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        Just(Value::Null),
        Just(json!([1, "two"])),
    ]
}

fn graph_data() -> impl Strategy<Value = GraphData> {
    let triple = (uri(), uri(), uri()).prop_map(|(s, p, o)| Triple::new(s, p, o));
    let datum = (uri(), uri(), literal(), prop::option::of("(en|de|http://x\\.org/t)"))
        .prop_map(|(s, p, l, tag)| {
            let datum = DataTriple::new(s, p, l);
            match tag {
                Some(tag) => datum.with_tag(tag),
                None => datum,
            }
        });
    (
        prop::collection::vec(triple, 0..16),
        prop::collection::vec(datum, 0..16),
    )
        .prop_map(|(triples, data)| GraphData { triples, data })
}

proptest! {
    /// Every edge endpoint is a node.
    #[test]
    fn prop_edges_reference_nodes(data in graph_data()) {
        let graph = GraphBuilder::new().build(&data).graph;
        prop_assert!(graph.is_closed());
    }

    /// Node ids are unique and literal ids never collide with URI nodes.
    #[test]
    fn prop_node_ids_unique(data in graph_data()) {
        let graph = GraphBuilder::new().build(&data).graph;
        let mut names = HashSet::new();
        for node in &graph.nodes {
            prop_assert!(names.insert(node.name.as_str()), "duplicate node {}", node.name);
        }
        let literals = graph
            .nodes
            .iter()
            .filter(|n| n.attributes.shape == Some(Shape::Box))
            .count();
        prop_assert_eq!(literals, data.data.len());
        for node in graph.nodes.iter().filter(|n| n.attributes.shape == Some(Shape::Box)) {
            prop_assert!(node.name.starts_with(LITERAL_ID_PREFIX));
        }
    }

    /// One edge per triple and per data triple.
    #[test]
    fn prop_edge_count(data in graph_data()) {
        let graph = GraphBuilder::new().build(&data).graph;
        prop_assert_eq!(graph.edges.len(), data.triples.len() + data.data.len());
    }

    /// Building is deterministic.
    #[test]
    fn prop_deterministic(data in graph_data()) {
        let builder = GraphBuilder::new();
        prop_assert_eq!(builder.build(&data).graph, builder.build(&data).graph);
    }

    /// Serializers mention every node.
    #[test]
    fn prop_serializers_cover_nodes(data in graph_data()) {
        let graph = GraphBuilder::new().build(&data).graph;
        let dot = dot::to_dot(&graph);
        let network = vis::VisNetwork::from(&graph);
        prop_assert_eq!(network.nodes.len(), graph.nodes.len());
        prop_assert_eq!(network.edges.len(), graph.edges.len());
        for node in &graph.nodes {
            let needle = format!("\"{}\" [", node.name);
            prop_assert!(dot.contains(&needle));
        }
    }

    /// Wrapped lines never exceed the width and concatenate to the input.
    #[test]
    fn prop_wrap(text in "[ -~äöü]{0,120}", width in 1usize..40) {
        let wrapped = wrap(&text, width);
        for line in wrapped.split('\n') {
            prop_assert!(line.chars().count() <= width);
        }
        prop_assert_eq!(wrapped.replace('\n', ""), text);
    }
}

#[test]
fn tagged_literal_fits_on_one_line() {
    let data = GraphData {
        triples: vec![],
        data: vec![DataTriple::new("http://a.org/s", "http://a.org/n", json!(42)).with_tag("en")],
    };
    let graph = GraphBuilder::new().wrap_width(30).build(&data).graph;
    assert_eq!(graph.node("_:1").map(|n| n.attributes.label.as_str()), Some("\"42\"@en"));
}
