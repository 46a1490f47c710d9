//! Namespace legend shown below a rendered graph.

use super::escape_html;
use crate::namespace::NamespaceMap;

/// Renders the namespace map as an HTML table with `NS` and `URI` columns.
#[must_use]
pub fn to_html_table(namespaces: &NamespaceMap) -> String {
    let mut out = String::from("<table>\n<tr><th>NS</th><th>URI</th></tr>\n");
    for (prefix, alias) in namespaces.iter() {
        out.push_str(&format!(
            "<tr><td>{}</td><td>{}</td></tr>\n",
            escape_html(alias),
            escape_html(prefix)
        ));
    }
    out.push_str("</table>\n");
    out
}
