//! Serializers for built graphs.
//!
//! Four output formats are supported:
//! - **Graphviz DOT** ([`dot`]) — offered for download as `graph.gv`
//! - **Network JSON** ([`vis`]) — nodes and edges for force-directed network renderers
//! - **Turtle** ([`turtle`]) — the source triples, using the generated namespaces
//! - **Namespace legend** ([`legend`]) — an HTML table of aliases and prefixes

pub mod dot;
pub mod legend;
pub mod turtle;
pub mod vis;

/// Escapes text for inclusion in HTML element content or attribute values.
pub(crate) fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
