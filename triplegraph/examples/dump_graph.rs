//! Demonstrates building a triple graph and printing its namespaces and DOT source.
//!
//! Run with: `cargo run --example dump_graph -p triplegraph`

use serde_json::json;
use triplegraph::serializer::dot;
use triplegraph::{DataTriple, GraphBuilder, GraphData, Triple};

fn main() {
    let data = GraphData {
        triples: vec![
            Triple::new(
                "http://example.org/people/alice",
                "http://xmlns.com/foaf/0.1/knows",
                "http://example.org/people/bob",
            ),
            Triple::new(
                "http://example.org/people/alice",
                "http://www.w3.org/1999/02/22-rdf-syntax-ns#type",
                "http://xmlns.com/foaf/0.1/Person",
            ),
        ],
        data: vec![
            DataTriple::new(
                "http://example.org/people/alice",
                "http://xmlns.com/foaf/0.1/name",
                json!("Alice"),
            )
            .with_tag("en"),
            DataTriple::new(
                "http://example.org/people/bob",
                "http://xmlns.com/foaf/0.1/age",
                json!(42),
            ),
        ],
    };

    let rendered = GraphBuilder::new().build(&data);

    println!("Namespaces:");
    for (prefix, alias) in rendered.namespaces.iter() {
        println!("  {:10} {}", alias, prefix);
    }
    println!();

    println!(
        "Graph: {} nodes, {} edges",
        rendered.graph.nodes.len(),
        rendered.graph.edges.len()
    );
    println!();
    print!("{}", dot::to_dot(&rendered.graph));
}
