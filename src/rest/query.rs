//! Ordered query parameters and their query-string serialization.
//!
//! [`QueryParams`] keeps parameters in insertion order, and
//! [`serialize_query`] renders them as `?k1=v1&k2=v2` in that same order.
//!
//! # Encoding
//!
//! Keys and values are written verbatim: no percent-encoding is applied.
//! A value containing `&`, `=`, `#` or a space ends up in the query string
//! as-is, so callers must only pass values that are already URL-safe.
//!
//! # Example
//!
//! ```rust
//! use sendcloud_api::rest::{serialize_query, QueryParams};
//!
//! let mut params = QueryParams::new();
//! params.insert("a", 1);
//! params.insert("b", "x");
//!
//! assert_eq!(serialize_query(Some(&params)), "?a=1&b=x");
//! assert_eq!(serialize_query(None), "");
//! ```

use std::fmt;

/// A scalar query parameter value.
#[derive(Clone, Debug, PartialEq)]
pub enum QueryValue {
    /// A string value.
    Str(String),
    /// An integer value.
    Int(i64),
    /// A floating point value.
    Float(f64),
    /// A boolean value, rendered as `true` or `false`.
    Bool(bool),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(value) => f.write_str(value),
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for QueryValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// A flat, insertion-ordered set of query parameters.
///
/// Inserting a key that is already present replaces its value but keeps
/// its original position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryParams {
    entries: Vec<(String, QueryValue)>,
}

impl QueryParams {
    /// Creates an empty parameter set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts or replaces a parameter.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        let key = key.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            entry.1 = value;
        } else {
            self.entries.push((key, value));
        }
    }

    /// Inserts a parameter only when a value is present.
    pub fn insert_opt<V: Into<QueryValue>>(&mut self, key: impl Into<String>, value: Option<V>) {
        if let Some(value) = value {
            self.insert(key, value);
        }
    }

    /// Returns the value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Returns the number of parameters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

/// Renders query parameters as a query string.
///
/// Returns `""` when `params` is `None` or empty; otherwise the first entry
/// is prefixed with `?` and every following entry with `&`. The result is
/// meant to be appended directly to a request path.
#[must_use]
pub fn serialize_query(params: Option<&QueryParams>) -> String {
    let mut query = String::new();
    for (key, value) in params.into_iter().flat_map(|p| p.iter()) {
        query.push(if query.is_empty() { '?' } else { '&' });
        query.push_str(key);
        query.push('=');
        query.push_str(&value.to_string());
    }
    query
}
