//! Namespace compaction for display labels.
//!
//! A [`NamespaceMap`] maps long URI prefixes to short aliases, so that
//! `http://a.org/x` can be shown as `a:x`. Maps are either generated from a
//! set of URIs with [`NamespaceMap::generate`] or assembled by hand with
//! [`NamespaceMap::add`].

/// Characters that end a namespace prefix unless configured otherwise.
pub const DEFAULT_SEPARATORS: &str = "/#";

/// Maximum alias length unless configured otherwise.
pub const DEFAULT_MAX_ALIAS_LEN: usize = 30;

/// Alias used when a prefix contains no usable alphanumeric segment.
const FALLBACK_ALIAS: &str = "prefix";

/// Segment skipped during alias derivation; compared case-sensitively.
const SKIPPED_SEGMENT: &str = "www";

/// A mapping from long URI prefixes to short aliases.
///
/// Entries keep their registration order, which is also the order of the
/// namespace legend rendered next to a graph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceMap {
    entries: Vec<(String, String)>,
}

impl NamespaceMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `short` as the alias of `long`.
    ///
    /// An empty alias is ignored. Registering an existing prefix again
    /// replaces its alias but keeps its position.
    pub fn add(&mut self, long: impl Into<String>, short: impl Into<String>) {
        let short = short.into();
        if short.is_empty() {
            return;
        }
        let long = long.into();
        match self.entries.iter_mut().find(|(prefix, _)| *prefix == long) {
            Some(entry) => entry.1 = short,
            None => self.entries.push((long, short)),
        }
    }

    /// Derives a compact namespace map for the given URIs.
    ///
    /// Each URI contributes the substring up to and including the last
    /// character contained in `separators`. Candidates are merged greedily in
    /// input order so that no retained prefix is a prefix of another one.
    /// Every retained prefix is then aliased with the first alphanumeric
    /// segment after its scheme (ignoring `www`), lowercased, truncated to
    /// `max_alias_len` characters and suffixed with `_N` on collision.
    #[must_use]
    pub fn generate<I, S>(uris: I, separators: &str, max_alias_len: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut prefixes: Vec<String> = Vec::new();
        for uri in uris {
            let Some(prefix) = candidate_prefix(uri.as_ref(), separators) else {
                continue;
            };
            if prefixes.iter().any(|old| old == prefix) {
                continue;
            }

            // drop retained prefixes that extend this one
            prefixes.retain(|old| !old.starts_with(prefix));

            if prefixes.iter().any(|old| prefix.starts_with(old.as_str())) {
                continue;
            }
            prefixes.push(prefix.to_owned());
        }

        let mut map = Self::new();
        let mut seen: Vec<(String, usize)> = Vec::new();
        for prefix in prefixes {
            let base = alias_base(&prefix, max_alias_len);
            let alias = match seen.iter_mut().find(|(name, _)| *name == base) {
                Some((_, counter)) => {
                    let alias = format!("{base}_{counter}");
                    *counter += 1;
                    alias
                }
                None => {
                    seen.push((base.clone(), 1));
                    base
                }
            };
            map.add(prefix, alias);
        }
        map
    }

    /// Returns the registered prefix used to shorten `uri`, if any.
    ///
    /// When several prefixes match, the lexicographically greatest wins.
    /// For nested prefixes this is the longest one.
    #[must_use]
    pub fn prefix_of(&self, uri: &str) -> Option<&str> {
        self.entries
            .iter()
            .map(|(prefix, _)| prefix.as_str())
            .filter(|prefix| uri.starts_with(prefix))
            .max()
    }

    /// Returns the alias registered for `prefix`.
    #[must_use]
    pub fn alias_of(&self, prefix: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(long, _)| long == prefix)
            .map(|(_, short)| short.as_str())
    }

    /// Shortens `uri` to `alias:remainder`, or returns it unchanged when no
    /// prefix matches.
    #[must_use]
    pub fn shorten(&self, uri: &str) -> String {
        let Some(prefix) = self.prefix_of(uri) else {
            return uri.to_owned();
        };
        match self.alias_of(prefix) {
            Some(alias) => format!("{alias}:{}", &uri[prefix.len()..]),
            None => uri.to_owned(),
        }
    }

    /// Expands a shortened `alias:remainder` back into a full URI.
    ///
    /// Returns `None` when the alias is unknown.
    #[must_use]
    pub fn expand(&self, short: &str) -> Option<String> {
        let (alias, rest) = short.split_once(':')?;
        self.entries
            .iter()
            .find(|(_, name)| name == alias)
            .map(|(prefix, _)| format!("{prefix}{rest}"))
    }

    /// Iterates `(prefix, alias)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(long, short)| (long.as_str(), short.as_str()))
    }

    /// Returns the number of registered prefixes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no prefix is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Returns `uri` up to and including its last separator character.
fn candidate_prefix<'a>(uri: &'a str, separators: &str) -> Option<&'a str> {
    let (index, sep) = uri
        .char_indices()
        .rev()
        .find(|(_, c)| separators.contains(*c))?;
    Some(&uri[..index + sep.len_utf8()])
}

/// Derives the (not yet de-duplicated) alias of a prefix.
fn alias_base(prefix: &str, max_alias_len: usize) -> String {
    let name = match prefix.find("://") {
        Some(index) => &prefix[index + "://".len()..],
        None => prefix,
    };
    let segment = name
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|segment| !segment.is_empty())
        .find(|segment| *segment != SKIPPED_SEGMENT)
        .unwrap_or(FALLBACK_ALIAS);
    segment
        .chars()
        .take(max_alias_len)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(uris: &[&str]) -> NamespaceMap {
        NamespaceMap::generate(uris.iter().copied(), DEFAULT_SEPARATORS, DEFAULT_MAX_ALIAS_LEN)
    }

    #[test]
    fn two_authorities() {
        let map = generate(&["http://a.org/x", "http://a.org/y", "http://b.org/z"]);
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![("http://a.org/", "a"), ("http://b.org/", "b")]);
        assert_eq!(map.shorten("http://a.org/x"), "a:x");
        assert_eq!(map.shorten("http://b.org/z"), "b:z");
    }

    #[test]
    fn shorter_candidate_replaces_longer() {
        let map = generate(&["http://a.org/deep/x", "http://a.org/y"]);
        let prefixes: Vec<_> = map.iter().map(|(long, _)| long).collect();
        assert_eq!(prefixes, vec!["http://a.org/"]);
        assert_eq!(map.shorten("http://a.org/deep/x"), "a:deep/x");
    }

    #[test]
    fn longer_candidate_is_absorbed() {
        let map = generate(&["http://a.org/y", "http://a.org/deep/x"]);
        assert_eq!(map.len(), 1);
        assert_eq!(map.prefix_of("http://a.org/deep/x"), Some("http://a.org/"));
    }

    #[test]
    fn hash_separator_wins_when_last() {
        let map = generate(&["http://www.w3.org/2000/01/rdf-schema#label"]);
        assert_eq!(map.prefix_of("http://www.w3.org/2000/01/rdf-schema#label"), Some("http://www.w3.org/2000/01/rdf-schema#"));
        // `www` is skipped
        assert_eq!(map.alias_of("http://www.w3.org/2000/01/rdf-schema#"), Some("w3"));
    }

    #[test]
    fn uri_without_separator_is_ignored() {
        let map = generate(&["urn:isbn:0451450523"]);
        assert!(map.is_empty());
        assert_eq!(map.shorten("urn:isbn:0451450523"), "urn:isbn:0451450523");
    }

    #[test]
    fn collisions_get_numbered() {
        let map = generate(&[
            "http://example.org/a/x",
            "http://example.com/b#y",
            "https://www.example.net/z",
        ]);
        let aliases: Vec<_> = map.iter().map(|(_, short)| short).collect();
        assert_eq!(aliases, vec!["example", "example_1", "example_2"]);
    }

    #[test]
    fn fallback_alias() {
        let map = generate(&["http://www/x", "/y"]);
        let aliases: Vec<_> = map.iter().map(|(_, short)| short).collect();
        assert_eq!(aliases, vec!["prefix", "prefix_1"]);
    }

    #[test]
    fn alias_is_lowercased() {
        let map = generate(&["http://Example.ORG/x"]);
        assert_eq!(map.shorten("http://Example.ORG/x"), "example:x");
    }

    #[test]
    fn only_lowercase_www_is_skipped() {
        let map = generate(&["http://WWW.example.org/x", "https://www.example.com/y"]);
        let aliases: Vec<_> = map.iter().map(|(_, short)| short).collect();
        assert_eq!(aliases, vec!["www", "example"]);
    }

    #[test]
    fn alias_is_truncated() {
        let map = NamespaceMap::generate(["http://abcdefghij.org/x"], "/", 4);
        assert_eq!(map.shorten("http://abcdefghij.org/x"), "abcd:x");
    }

    #[test]
    fn add_ignores_empty_alias_and_replaces_existing() {
        let mut map = NamespaceMap::new();
        map.add("http://a.org/", "");
        assert!(map.is_empty());
        map.add("http://a.org/", "a");
        map.add("http://b.org/", "b");
        map.add("http://a.org/", "alpha");
        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![("http://a.org/", "alpha"), ("http://b.org/", "b")]);
    }

    #[test]
    fn prefix_of_prefers_greatest_match() {
        let mut map = NamespaceMap::new();
        map.add("http://a.org/deep/", "deep");
        map.add("http://a.org/", "a");
        assert_eq!(map.prefix_of("http://a.org/deep/x"), Some("http://a.org/deep/"));
        assert_eq!(map.shorten("http://a.org/deep/x"), "deep:x");
        assert_eq!(map.shorten("http://a.org/x"), "a:x");
    }

    #[test]
    fn expand_reverses_shorten() {
        let map = generate(&["http://a.org/x", "http://b.org/z"]);
        assert_eq!(map.expand("a:x").as_deref(), Some("http://a.org/x"));
        assert_eq!(map.expand("c:x"), None);
        assert_eq!(map.expand("plain"), None);
    }
}
