use indexmap::IndexMap;
use serde::Deserialize;

/// Resolves an identifier from one platform's vocabulary into another's.
///
/// `None` means no mapping is documented for the identifier. That is a normal
/// outcome, not an error.
pub trait Translate {
    fn resolve(&self, key: &str) -> Option<&str>;
}

/// Authored rename table. Keys are either `Class.method` or a bare `method`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct TranslationTable {
    entries: IndexMap<String, String>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Value -> key. Duplicate values keep the last authored key.
    pub fn inverted(&self) -> Self {
        let mut out = Self::new();
        for (key, value) in self.iter() {
            out.insert(value, key);
        }
        out
    }

    /// Inserts every entry of `other`, overwriting existing keys.
    pub fn merge(&mut self, other: &TranslationTable) {
        for (key, value) in other.iter() {
            self.insert(key, value);
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TranslationTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Translate for TranslationTable {
    fn resolve(&self, key: &str) -> Option<&str> {
        self.get(key)
    }
}

/// Ordered hops through several tables, each hop's output feeding the next.
///
/// A miss on the first hop fails the whole lookup. A miss on any later hop
/// returns the last value that did translate.
#[derive(Debug, Clone)]
pub struct TranslationChain<'a> {
    hops: Vec<&'a TranslationTable>,
}

impl<'a> TranslationChain<'a> {
    pub fn new(hops: Vec<&'a TranslationTable>) -> Self {
        Self { hops }
    }

    pub fn single(table: &'a TranslationTable) -> Self {
        Self { hops: vec![table] }
    }

    pub fn hop_count(&self) -> usize {
        self.hops.len()
    }
}

impl Translate for TranslationChain<'_> {
    fn resolve(&self, key: &str) -> Option<&str> {
        let mut translated: Option<&str> = None;
        for table in &self.hops {
            match table.get(translated.unwrap_or(key)) {
                Some(next) => translated = Some(next),
                None => return translated,
            }
        }
        translated
    }
}

/// Method component of a possibly qualified identifier.
pub fn unqualified(identifier: &str) -> &str {
    identifier
        .rsplit_once('.')
        .map_or(identifier, |(_, method)| method)
}
