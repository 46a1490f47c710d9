//! Turtle 1.1 serializer for embedded graph data.
//!
//! Writes one `@prefix` declaration per usable namespace of the map and then
//! one statement per triple, using prefixed names wherever the local part is
//! a plain name. Graph labels may share an alias between two namespaces (the
//! pinned `rdf` can collide with a generated one); Turtle prefixes may not, so
//! the writer derives its own prefix table from the map.

use std::collections::HashSet;

use serde_json::Value;

use crate::model::GraphData;
use crate::namespace::NamespaceMap;

/// File name under which Turtle output is written.
pub const FILE_NAME: &str = "graph.ttl";

/// Serializes graph data to a Turtle string.
#[must_use]
pub fn to_turtle(data: &GraphData, namespaces: &NamespaceMap) -> String {
    let prefixes = PrefixTable::new(namespaces);
    let mut out = String::with_capacity(128 * (data.triples.len() + data.data.len() + 1));

    // Prefix declarations
    for (prefix, alias) in &prefixes.entries {
        out.push_str(&format!("@prefix {}: {} .\n", alias, iri_ref(prefix)));
    }
    if !prefixes.entries.is_empty() {
        out.push('\n');
    }

    for triple in &data.triples {
        out.push_str(&format!(
            "{} {} {} .\n",
            prefixes.term(&triple.subject),
            prefixes.term(&triple.predicate),
            prefixes.term(&triple.object)
        ));
    }

    for datum in &data.data {
        out.push_str(&format!(
            "{} {} {} .\n",
            prefixes.term(&datum.subject),
            prefixes.term(&datum.predicate),
            literal(&datum.literal, datum.tag.as_deref(), &prefixes)
        ));
    }

    out
}

/// Prefix declarations of one Turtle document.
///
/// Aliases are unique and valid `PN_PREFIX` names. Entries registered later
/// keep their alias on collision, so a pinned namespace wins over a generated
/// one; the loser gets the next free `_N` suffix. Namespaces whose alias is
/// not a valid prefix name are left out and written as full IRIs.
struct PrefixTable<'a> {
    entries: Vec<(&'a str, String)>,
}

impl<'a> PrefixTable<'a> {
    fn new(namespaces: &'a NamespaceMap) -> Self {
        let mut taken: HashSet<String> = HashSet::new();
        let mut entries = Vec::new();
        let usable: Vec<_> = namespaces
            .iter()
            .filter(|(_, alias)| is_prefix_name(alias))
            .collect();

        for (prefix, alias) in usable.into_iter().rev() {
            let mut name = alias.to_owned();
            let mut counter = 1;
            while taken.contains(&name) {
                name = format!("{alias}_{counter}");
                counter += 1;
            }
            taken.insert(name.clone());
            entries.push((prefix, name));
        }
        entries.reverse();
        Self { entries }
    }

    /// Same selection rule as [`NamespaceMap::prefix_of`].
    fn lookup(&self, uri: &str) -> Option<(&'a str, &str)> {
        self.entries
            .iter()
            .filter(|(prefix, _)| uri.starts_with(prefix))
            .max_by_key(|(prefix, _)| *prefix)
            .map(|(prefix, alias)| (*prefix, alias.as_str()))
    }

    fn term(&self, uri: &str) -> String {
        if uri.starts_with("_:") {
            return uri.to_owned();
        }
        if let Some((prefix, alias)) = self.lookup(uri) {
            let local = &uri[prefix.len()..];
            if is_local_name(local) {
                return format!("{alias}:{local}");
            }
        }
        iri_ref(uri)
    }
}

/// Writes `iri` as an `IRIREF`, escaping characters it may not contain.
fn iri_ref(iri: &str) -> String {
    let mut out = String::with_capacity(iri.len() + 2);
    out.push('<');
    for c in iri.chars() {
        match c {
            '\u{0}'..='\u{20}' | '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\' => {
                out.push_str(&format!("\\u{:04X}", u32::from(c)));
            }
            _ => out.push(c),
        }
    }
    out.push('>');
    out
}

/// Checks that `alias` is a Turtle `PN_PREFIX` as generated aliases spell it.
fn is_prefix_name(alias: &str) -> bool {
    alias.chars().next().is_some_and(|c| c.is_ascii_alphabetic())
        && alias
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// Conservative check for a Turtle `PN_LOCAL` that needs no escaping.
fn is_local_name(local: &str) -> bool {
    !local.starts_with('-')
        && local
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

fn literal(value: &Value, tag: Option<&str>, prefixes: &PrefixTable<'_>) -> String {
    let tag = tag.filter(|t| !t.is_empty());
    let text = match (value, tag) {
        (Value::Number(n), None) => return n.to_string(),
        (Value::Bool(b), None) => return b.to_string(),
        (Value::String(s), _) => turtle_string(s),
        (other, _) => turtle_string(&other.to_string()),
    };
    match tag {
        Some(datatype) if datatype.contains(':') => {
            format!("{}^^{}", text, prefixes.term(datatype))
        }
        Some(lang) => format!("{}@{}", text, lang),
        None => text,
    }
}

fn turtle_string(s: &str) -> String {
    let escaped = s
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r");
    format!("\"{}\"", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::GraphBuilder;
    use crate::model::iris::{RDF, XSD};
    use crate::model::{DataTriple, Triple};
    use serde_json::json;

    fn sample() -> GraphData {
        GraphData {
            triples: vec![
                Triple::new("http://a.org/s", "http://a.org/p", "http://b.org/o"),
                Triple::new("http://a.org/s", "http://a.org/p", "http://b.org/with space"),
            ],
            data: vec![
                DataTriple::new("http://a.org/s", "http://a.org/name", json!("Line\n\"two\"")),
                DataTriple::new("http://a.org/s", "http://a.org/age", json!(42)),
                DataTriple::new("http://a.org/s", "http://a.org/label", json!("Hallo")).with_tag("de"),
                DataTriple::new("http://a.org/s", "http://a.org/n", json!(7)).with_tag(format!("{XSD}int")),
            ],
        }
    }

    #[test]
    fn produces_prefixes_and_statements() {
        let data = sample();
        let namespaces = GraphBuilder::new().build(&data).namespaces;
        let turtle = to_turtle(&data, &namespaces);

        assert!(turtle.contains("@prefix a: <http://a.org/> .\n"));
        assert!(turtle.contains("@prefix b: <http://b.org/> .\n"));
        assert!(turtle.contains("@prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .\n"));
        assert!(turtle.contains("a:s a:p b:o .\n"));
        assert!(turtle.contains("a:s a:p <http://b.org/with\\u0020space> .\n"));
        assert!(turtle.contains("a:s a:name \"Line\\n\\\"two\\\"\" .\n"));
        assert!(turtle.contains("a:s a:age 42 .\n"));
        assert!(turtle.contains("a:s a:label \"Hallo\"@de .\n"));
        assert!(turtle.contains("a:s a:n \"7\"^^<http://www.w3.org/2001/XMLSchema#int> .\n"));
    }

    #[test]
    fn pinned_rdf_keeps_its_prefix() {
        let data = GraphData {
            triples: vec![Triple::new(
                "http://rdf.org/s",
                "http://rdf.org/p",
                format!("{RDF}nil"),
            )],
            data: vec![],
        };
        let namespaces = GraphBuilder::new().build(&data).namespaces;
        // graph labels share the alias
        assert_eq!(namespaces.shorten("http://rdf.org/s"), "rdf:s");

        let turtle = to_turtle(&data, &namespaces);
        assert_eq!(
            turtle,
            "@prefix rdf_1: <http://rdf.org/> .\n\
             @prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .\n\
             \n\
             rdf_1:s rdf_1:p rdf:nil .\n"
        );
    }

    #[test]
    fn suffix_skips_taken_aliases() {
        let mut namespaces = NamespaceMap::new();
        namespaces.add("http://one.org/", "a");
        namespaces.add("http://two.org/", "a_1");
        namespaces.add("http://three.org/", "a");
        let data = GraphData {
            triples: vec![Triple::new("http://one.org/s", "http://two.org/p", "http://three.org/o")],
            data: vec![],
        };
        let turtle = to_turtle(&data, &namespaces);
        assert!(turtle.contains("@prefix a_2: <http://one.org/> .\n"));
        assert!(turtle.contains("@prefix a_1: <http://two.org/> .\n"));
        assert!(turtle.contains("@prefix a: <http://three.org/> .\n"));
        assert!(turtle.contains("a_2:s a_1:p a:o .\n"));
    }

    #[test]
    fn digit_alias_falls_back_to_full_iris() {
        let data = GraphData {
            triples: vec![Triple::new(
                "http://123.org/s",
                "http://123.org/p",
                "http://b.org/with space",
            )],
            data: vec![],
        };
        let namespaces = GraphBuilder::new().build(&data).namespaces;
        assert_eq!(namespaces.alias_of("http://123.org/"), Some("123"));

        let turtle = to_turtle(&data, &namespaces);
        assert!(!turtle.contains("@prefix 123:"));
        assert!(turtle.contains(
            "<http://123.org/s> <http://123.org/p> <http://b.org/with\\u0020space> .\n"
        ));
    }

    #[test]
    fn iri_ref_escapes_forbidden_characters() {
        assert_eq!(iri_ref("http://a.org/x"), "<http://a.org/x>");
        assert_eq!(
            iri_ref("http://a.org/<a|b>\"{c}^`\\"),
            "<http://a.org/\\u003Ca\\u007Cb\\u003E\\u0022\\u007Bc\\u007D\\u005E\\u0060\\u005C>"
        );
        assert_eq!(iri_ref("http://a.org/\tö"), "<http://a.org/\\u0009ö>");
    }

    #[test]
    fn empty_map_uses_full_iris() {
        let data = GraphData {
            triples: vec![Triple::new("http://a.org/s", "http://a.org/p", "_:b0")],
            data: vec![],
        };
        assert_eq!(
            to_turtle(&data, &NamespaceMap::new()),
            "<http://a.org/s> <http://a.org/p> _:b0 .\n"
        );
    }
}
