//! Flat, single-level query strings.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::codec::{decode, encode_query};
use crate::query::Scalar;

/// An ordered `key=value` map without nesting.
///
/// Unlike [`QueryNode`](crate::QueryNode), brackets in keys carry no
/// meaning and every key is encoded, numeric or not.
///
/// # Examples
///
/// ```
/// use uri_tools::FlatQueryMap;
///
/// let mut query = FlatQueryMap::parse("page=2&q=rust+uri");
/// query.set("0", "kept");
/// query.set("exact", true);
///
/// assert_eq!(query.get("q").map(ToString::to_string).as_deref(), Some("rust uri"));
/// assert_eq!(query.to_string(), "page=2&q=rust+uri&0=kept&exact=1");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatQueryMap {
    entries: IndexMap<String, Scalar>,
}

impl FlatQueryMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a form-encoded query string (without leading `?`). Later
    /// assignments to the same key win.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let mut map = Self::new();
        for pair in input.split('&').filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            map.set(decode(key).into_owned(), decode(value).into_owned());
        }
        map
    }

    /// Stores a value under `key`, replacing any previous value in place.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Scalar>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Returns the value under `key`.
    ///
    /// A missing key returns `None` and emits a warning through `tracing`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Scalar> {
        let value = self.entries.get(key);
        if value.is_none() {
            #[cfg(feature = "tracing")]
            tracing::warn!(key, "undefined query key");
        }
        value
    }

    /// Returns true if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes `key` and returns its value.
    pub fn remove(&mut self, key: &str) -> Option<Scalar> {
        self.entries.shift_remove(key)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Scalar)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Encodes the map as `key=value` pairs joined by `&`.
    #[must_use]
    pub fn encode(&self) -> String {
        self.entries
            .iter()
            .map(|(key, value)| {
                format!("{}={}", encode_query(key), encode_query(&value.to_string()))
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K: Into<String>, V: Into<Scalar>> FromIterator<(K, V)> for FlatQueryMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.set(key, value);
        }
        map
    }
}

impl fmt::Display for FlatQueryMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for FlatQueryMap {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FlatQueryMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.encode())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for FlatQueryMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}
