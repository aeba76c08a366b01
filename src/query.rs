//! Order-preserving query-string parameters
//!
//! [`QueryParams`] is the mapping both sides of the helpers speak: the
//! incoming request query string is parsed into one, and outgoing link URLs
//! are serialized from one. Encoding follows standard form encoding
//! (percent-escaped keys and values joined with `&`), with list values
//! flattened using bracket notation (`tags[]=a&tags[]=b`).
//!
//! Insertion order is preserved, so parsing a generated query string and
//! re-serializing it reproduces the same string.

use std::fmt;
use url::form_urlencoded;

/// A single query parameter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    /// Plain scalar value (`key=v`)
    Single(String),
    /// List value, serialized with bracket notation (`key[]=v1&key[]=v2`)
    List(Vec<String>),
}

impl QueryValue {
    /// Get the scalar value, or the first list element
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Single(v) => Some(v),
            Self::List(vs) => vs.first().map(String::as_str),
        }
    }
}

impl From<String> for QueryValue {
    fn from(v: String) -> Self {
        Self::Single(v)
    }
}

impl From<&str> for QueryValue {
    fn from(v: &str) -> Self {
        Self::Single(v.to_string())
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(vs: Vec<String>) -> Self {
        Self::List(vs)
    }
}

/// Insertion-ordered query parameter mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, QueryValue)>,
}

impl QueryParams {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw query string
    ///
    /// Malformed input never errors: unparseable fragments simply contribute
    /// nothing. A `key[]` suffix appends to a list under `key`; a repeated
    /// plain key promotes the existing value to a list.
    pub fn parse(raw: &str) -> Self {
        let mut params = Self::new();
        for (key, value) in form_urlencoded::parse(raw.as_bytes()) {
            if key.is_empty() {
                continue;
            }
            if let Some(base) = key.strip_suffix("[]") {
                if base.is_empty() {
                    continue;
                }
                params.append_list_value(base, value.into_owned());
            } else {
                params.append(key.into_owned(), value.into_owned());
            }
        }
        params
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// True when no parameters are present
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Look up a value by key
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Look up a scalar value by key
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(QueryValue::as_str)
    }

    /// Set a key, replacing any existing value in place
    ///
    /// An existing key keeps its position; a new key is appended, so inserted
    /// keys always serialize after the original ones.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        if let Some(slot) = self.pairs.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.pairs.push((key, value));
        }
        self
    }

    /// Remove a key, returning its value if it was present
    pub fn remove(&mut self, key: &str) -> Option<QueryValue> {
        let idx = self.pairs.iter().position(|(k, _)| k == key)?;
        Some(self.pairs.remove(idx).1)
    }

    /// Copy of this mapping with one key removed
    pub fn without(&self, key: &str) -> Self {
        let mut params = self.clone();
        params.remove(key);
        params
    }

    /// Iterate pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Serialize to a form-encoded query string (no leading `?`)
    pub fn to_query_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            match value {
                QueryValue::Single(v) => {
                    serializer.append_pair(key, v);
                }
                QueryValue::List(vs) => {
                    let bracketed = format!("{key}[]");
                    for v in vs {
                        serializer.append_pair(&bracketed, v);
                    }
                }
            }
        }
        serializer.finish()
    }

    fn append(&mut self, key: String, value: String) {
        if let Some(pos) = self.pairs.iter().position(|(k, _)| *k == key) {
            self.push_at(pos, value);
        } else {
            self.pairs.push((key, QueryValue::Single(value)));
        }
    }

    fn append_list_value(&mut self, key: &str, value: String) {
        if let Some(pos) = self.pairs.iter().position(|(k, _)| k == key) {
            self.push_at(pos, value);
        } else {
            self.pairs
                .push((key.to_string(), QueryValue::List(vec![value])));
        }
    }

    // Promotes a Single slot to a List when a second value arrives.
    fn push_at(&mut self, pos: usize, value: String) {
        let current = std::mem::replace(&mut self.pairs[pos].1, QueryValue::List(Vec::new()));
        self.pairs[pos].1 = match current {
            QueryValue::Single(existing) => QueryValue::List(vec![existing, value]),
            QueryValue::List(mut vs) => {
                vs.push(value);
                QueryValue::List(vs)
            }
        };
    }
}

impl fmt::Display for QueryParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

impl<K: Into<String>, V: Into<QueryValue>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (k, v) in iter {
            params.set(k, v);
        }
        params
    }
}
