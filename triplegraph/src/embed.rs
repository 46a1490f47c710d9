//! Extraction of graph data embedded in entity pages.
//!
//! Entity pages carry their triples in
//! `<script type="application/json" data-render-graph="true">` elements.
//! Extraction uses string scanning rather than a full HTML parser; script
//! content is raw text, so no entity decoding is needed.

use crate::error::{Error, Result};
use crate::model::GraphData;

const SCRIPT_OPEN: &str = "<script";
const SCRIPT_CLOSE: &str = "</script";
const MARKERS: [&str; 3] = [
    "data-render-graph=\"true\"",
    "data-render-graph='true'",
    "data-render-graph=true",
];

/// Returns the text content of every graph data script in `html`.
#[must_use]
pub fn graph_scripts(html: &str) -> Vec<&str> {
    // ASCII lowercasing keeps byte offsets aligned with `html`.
    let lower = html.to_ascii_lowercase();
    let mut scripts = Vec::new();
    let mut pos = 0;

    while let Some(found) = lower[pos..].find(SCRIPT_OPEN) {
        let tag_start = pos + found;
        let Some(tag_len) = tag_end(&lower[tag_start..]) else {
            break;
        };
        let tag = &lower[tag_start..tag_start + tag_len];
        let body_start = tag_start + tag_len + 1;
        let body_end = lower[body_start..]
            .find(SCRIPT_CLOSE)
            .map_or(lower.len(), |end| body_start + end);

        if MARKERS.iter().any(|marker| tag.contains(marker)) {
            scripts.push(&html[body_start..body_end]);
        }
        pos = body_end;
    }

    scripts
}

/// Returns the offset of the `>` closing the tag that starts `tag`.
///
/// A `>` inside a quoted attribute value does not close the tag.
fn tag_end(tag: &str) -> Option<usize> {
    let mut quote = None;
    for (index, c) in tag.char_indices() {
        match (quote, c) {
            (None, '"' | '\'') => quote = Some(c),
            (Some(open), _) if c == open => quote = None,
            (None, '>') => return Some(index),
            _ => {}
        }
    }
    None
}

/// Parses every graph embedded in `html`.
///
/// # Errors
///
/// Returns [`Error::Json`] if any embedded script is not valid graph data.
pub fn extract_graphs(html: &str) -> Result<Vec<GraphData>> {
    graph_scripts(html)
        .into_iter()
        .map(|text| GraphData::from_json(text.trim()))
        .collect()
}

/// Loads graph data from either a raw JSON document or an HTML page.
///
/// For HTML input the first embedded graph is used.
///
/// # Errors
///
/// Returns [`Error::NoGraphData`] if a page embeds no graph, or
/// [`Error::Json`] if the data is malformed.
pub fn load_graph_data(text: &str) -> Result<GraphData> {
    let trimmed = text.trim_start();
    if trimmed.starts_with('{') {
        return GraphData::from_json(trimmed);
    }
    extract_graphs(text)?
        .into_iter()
        .next()
        .ok_or(Error::NoGraphData)
}
