//! `triplegraph-render` — Builds the triple graph of an entity page and
//! writes it in every supported format.
//!
//! **Input:** either the raw graph JSON or an HTML page embedding it in a
//! `<script data-render-graph="true">` element.
//!
//! **Outputs (`<out>/`):**
//! - `graph.gv` — Graphviz DOT source
//! - `graph.json` — node/edge graph for in-browser Graphviz renderers
//! - `graph.vis.json` — network data set for force-directed renderers
//! - `graph.ttl` — the triples as Turtle
//! - `namespaces.html` — namespace legend
//!
//! **Usage:**
//! ```text
//! triplegraph-render <input> [--out <path>] [--config <file>] [--wrap-width <n>]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use triplegraph::embed::load_graph_data;
use triplegraph::serializer::{dot, legend, turtle, vis};
use triplegraph::{GraphBuilder, GraphData, LiteralStyle, RenderedGraph};
use triplegraph_clients::{init_logging, load_config};

/// Render the triple graph of an entity page.
#[derive(Parser)]
#[command(
    name = "triplegraph-render",
    about = "Render the triple graph of an entity page"
)]
struct Args {
    /// Graph JSON or HTML page to read.
    input: PathBuf,

    /// Output directory for generated files.
    #[arg(long, default_value = "public")]
    out: PathBuf,

    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Characters that terminate a namespace prefix.
    #[arg(long)]
    separators: Option<String>,

    /// Maximum length of generated namespace aliases.
    #[arg(long)]
    max_alias_len: Option<usize>,

    /// Width at which literal labels are wrapped (0 disables wrapping).
    #[arg(long)]
    wrap_width: Option<usize>,

    /// Render literals verbatim, ignoring language and datatype tags.
    #[arg(long)]
    plain_literals: bool,
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    let mut config = load_config(args.config.as_deref())?;
    if let Some(separators) = args.separators {
        config.separators = separators;
    }
    if let Some(max_alias_len) = args.max_alias_len {
        config.max_alias_len = max_alias_len;
    }
    if let Some(wrap_width) = args.wrap_width {
        config.wrap_width = wrap_width;
    }
    if args.plain_literals {
        config.literal_style = LiteralStyle::Plain;
    }

    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;
    let data = load_graph_data(&text)
        .with_context(|| format!("No usable graph data in {}", args.input.display()))?;

    let rendered = GraphBuilder::from_config(&config).build(&data);
    info!(
        triples = data.triples.len(),
        data = data.data.len(),
        "loaded graph data"
    );

    println!(
        "Triple graph: {} nodes, {} edges, {} namespaces",
        rendered.graph.nodes.len(),
        rendered.graph.edges.len(),
        rendered.namespaces.len()
    );

    if let Err(err) = write_outputs(&args.out, &data, &rendered) {
        error!(error = %format!("{err:#}"), "Failed to render graph");
        return Err(err);
    }

    println!("Render complete.");
    Ok(())
}

/// Writes every output format into `out`.
///
/// # Errors
///
/// Returns an error if a file cannot be written or serialized.
fn write_outputs(out: &Path, data: &GraphData, rendered: &RenderedGraph) -> Result<()> {
    fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory: {}", out.display()))?;

    // Graphviz
    write(&out.join(dot::FILE_NAME), &dot::to_dot(&rendered.graph))?;

    let graph_json = serde_json::to_string_pretty(&rendered.graph)
        .context("Failed to serialize graph to JSON")?;
    write(&out.join("graph.json"), &graph_json)?;

    // Network
    let vis_json = vis::to_vis_json(&rendered.graph)
        .and_then(|network| serde_json::to_string_pretty(&network))
        .context("Failed to serialize network JSON")?;
    write(&out.join(vis::FILE_NAME), &vis_json)?;

    // Turtle
    write(
        &out.join(turtle::FILE_NAME),
        &turtle::to_turtle(data, &rendered.namespaces),
    )?;

    // Legend
    write(
        &out.join("namespaces.html"),
        &legend::to_html_table(&rendered.namespaces),
    )?;

    Ok(())
}

fn write(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;
    println!("  Written: {}", path.display());
    Ok(())
}
