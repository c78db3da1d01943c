//! Nested query strings with bracket syntax.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::codec::{decode, encode_query};
use crate::constants::MAX_QUERY_DEPTH;
use crate::error::QueryError;

/// A single query value that is not a nested structure.
///
/// Booleans render as `1` and `0`.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Text
    Str(String),
    /// Integer
    Int(i64),
    /// Floating point number
    Float(f64),
    /// Boolean, rendered as `1`/`0`
    Bool(bool),
}

impl Scalar {
    /// Returns the text if this is a [`Scalar::Str`].
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(b) => f.write_str(if *b { "1" } else { "0" }),
        }
    }
}

/// A value stored under a key of a [`QueryNode`].
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    /// No value; contributes nothing when encoded
    Null,
    /// A scalar value
    Scalar(Scalar),
    /// A nested structure
    Node(QueryNode),
}

impl QueryValue {
    /// Returns true for [`QueryValue::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the scalar, if this is one.
    #[must_use]
    pub const fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Self::Scalar(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the text of a string scalar.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().and_then(Scalar::as_str)
    }

    /// Returns the nested node, if this is one.
    #[must_use]
    pub const fn as_node(&self) -> Option<&QueryNode> {
        match self {
            Self::Node(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the nested node mutably, if this is one.
    pub fn as_node_mut(&mut self) -> Option<&mut QueryNode> {
        match self {
            Self::Node(n) => Some(n),
            _ => None,
        }
    }
}

macro_rules! impl_scalar_from {
    ($variant:ident($target:ty): $($source:ty),+) => {
        $(
            impl From<$source> for Scalar {
                fn from(value: $source) -> Self {
                    Self::$variant(<$target>::from(value))
                }
            }

            impl From<$source> for QueryValue {
                fn from(value: $source) -> Self {
                    Self::Scalar(Scalar::from(value))
                }
            }
        )+
    };
}

impl_scalar_from!(Str(String): &str, String, &String);
impl_scalar_from!(Int(i64): i8, i16, i32, i64, u8, u16, u32);
impl_scalar_from!(Float(f64): f32, f64);
impl_scalar_from!(Bool(bool): bool);

impl From<Scalar> for QueryValue {
    fn from(value: Scalar) -> Self {
        Self::Scalar(value)
    }
}

impl<T: Into<QueryValue>> From<Option<T>> for QueryValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<QueryNode> for QueryValue {
    fn from(node: QueryNode) -> Self {
        Self::Node(node)
    }
}

impl<T: Into<QueryValue>> From<Vec<T>> for QueryValue {
    fn from(items: Vec<T>) -> Self {
        Self::Node(QueryNode::from_sequence(items))
    }
}

impl<T: Into<QueryValue>, const N: usize> From<[T; N]> for QueryValue {
    fn from(items: [T; N]) -> Self {
        Self::Node(QueryNode::from_sequence(items))
    }
}

impl<K: Into<String>, V: Into<QueryValue>> From<IndexMap<K, V>> for QueryValue {
    fn from(map: IndexMap<K, V>) -> Self {
        Self::Node(map.into_iter().collect())
    }
}

impl<K: Into<String>, V: Into<QueryValue>> From<BTreeMap<K, V>> for QueryValue {
    fn from(map: BTreeMap<K, V>) -> Self {
        Self::Node(map.into_iter().collect())
    }
}

/// An ordered, arbitrarily nested set of query parameters.
///
/// Keys keep their insertion order. Any compound value assigned to a key
/// (a `Vec`, an array, a map or another node) is stored as a nested node;
/// sequences get positional keys `0`, `1`, ….
///
/// Encoding uses bracket syntax and form encoding, so
/// `baz = [1, 2]` becomes `baz%5B0%5D=1&baz%5B1%5D=2`. Keys at the top level
/// that look numeric are left out of the encoded string, while numeric keys
/// below a named parent are kept.
///
/// # Examples
///
/// ```
/// use uri_tools::QueryNode;
///
/// let mut query = QueryNode::new();
/// query.set("foo", "bar");
/// query.set("baz", vec![1, 2, 3]);
/// query.set("debug", true);
///
/// assert_eq!(query.len(), 3);
/// assert_eq!(
///     query.to_string(),
///     "foo=bar&baz%5B0%5D=1&baz%5B1%5D=2&baz%5B2%5D=3&debug=1"
/// );
/// ```
///
/// The structure cannot change while it is being iterated:
///
/// ```compile_fail
/// use uri_tools::QueryNode;
///
/// let mut query = QueryNode::parse("a=1&b=2");
/// for (key, _) in query.iter() {
///     query.remove(key);
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryNode {
    entries: IndexMap<String, QueryValue>,
}

impl QueryNode {
    /// Creates an empty node.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a form-encoded query string (without leading `?`).
    ///
    /// Bracketed keys build nested nodes: `a[b]=1` stores a node under
    /// `a`, and `a[]=x` appends under the next free positional key. Later
    /// assignments to the same key win. A key whose first `[` is never
    /// closed is kept literally.
    ///
    /// # Examples
    ///
    /// ```
    /// use uri_tools::QueryNode;
    ///
    /// let query = QueryNode::parse("user[name]=Ada+L&tags[]=x&tags[]=y");
    /// let user = query.get("user").and_then(|v| v.as_node()).unwrap();
    /// assert_eq!(user.get("name").and_then(|v| v.as_str()), Some("Ada L"));
    /// let tags = query.get("tags").and_then(|v| v.as_node()).unwrap();
    /// assert_eq!(tags.get("1").and_then(|v| v.as_str()), Some("y"));
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let mut root = Self::new();

        for pair in input.split('&') {
            if pair.is_empty() {
                continue;
            }

            let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode(raw_key);
            let Some(path) = key_path(&key) else {
                #[cfg(feature = "tracing")]
                tracing::warn!(key = %key, "query key nested too deeply, dropping pair");
                continue;
            };
            if path.first().is_none_or(|base| base.is_empty()) {
                continue;
            }

            root.insert_path(&path, decode(raw_value).into_owned());
        }

        root
    }

    /// Stores a value under `key`, replacing any previous value in place.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Returns the value under `key`.
    ///
    /// A missing key is not an error: it returns `None` and emits a
    /// warning through `tracing`. Use [`try_get`](Self::try_get) for a
    /// strict lookup.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        let value = self.entries.get(key);
        if value.is_none() {
            #[cfg(feature = "tracing")]
            tracing::warn!(key, "undefined query key");
        }
        value
    }

    /// Returns the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::UndefinedKey` if the key is not present.
    pub fn try_get(&self, key: &str) -> Result<&QueryValue, QueryError> {
        self.entries.get(key).ok_or_else(|| QueryError::UndefinedKey {
            key: key.to_string(),
        })
    }

    /// Returns the value under `key` mutably.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut QueryValue> {
        self.entries.get_mut(key)
    }

    /// Returns true if `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Removes `key` and returns its value. Removing a missing key does
    /// nothing.
    pub fn remove(&mut self, key: &str) -> Option<QueryValue> {
        self.entries.shift_remove(key)
    }

    /// Returns the number of top-level entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no top-level entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns an iterator over the top-level entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Encodes the node as a query string (without leading `?`).
    #[must_use]
    pub fn encode(&self) -> String {
        let mut pairs = Vec::new();
        for (key, value) in &self.entries {
            // positional entries at the top level have no name to encode
            if is_numeric_key(key) {
                continue;
            }
            encode_entry(&mut pairs, key, value);
        }
        pairs.join("&")
    }

    fn from_sequence<T: Into<QueryValue>>(items: impl IntoIterator<Item = T>) -> Self {
        items
            .into_iter()
            .enumerate()
            .map(|(i, item)| (i.to_string(), item))
            .collect()
    }

    fn insert_path(&mut self, path: &[&str], value: String) {
        let Some((first, rest)) = path.split_first() else {
            return;
        };

        let key = if first.is_empty() {
            let Some(index) = self.next_index() else {
                #[cfg(feature = "tracing")]
                tracing::warn!("no free index left to append to, dropping value");
                return;
            };
            index
        } else {
            (*first).to_string()
        };

        if rest.is_empty() {
            self.entries.insert(key, QueryValue::from(value));
            return;
        }

        let child = self
            .entries
            .entry(key)
            .or_insert_with(|| QueryValue::Node(Self::new()));
        if !matches!(child, QueryValue::Node(_)) {
            *child = QueryValue::Node(Self::new());
        }
        if let QueryValue::Node(node) = child {
            node.insert_path(rest, value);
        }
    }

    /// Returns max numeric key + 1, or `None` once `u64::MAX` is taken.
    fn next_index(&self) -> Option<String> {
        let next = match self.entries.keys().filter_map(|k| k.parse::<u64>().ok()).max() {
            Some(max) => max.checked_add(1)?,
            None => 0,
        };
        Some(next.to_string())
    }
}

fn encode_entry(pairs: &mut Vec<String>, name: &str, value: &QueryValue) {
    match value {
        QueryValue::Null => {}
        QueryValue::Node(node) => {
            for (key, child) in &node.entries {
                encode_entry(pairs, &format!("{name}[{key}]"), child);
            }
        }
        QueryValue::Scalar(scalar) => {
            let text = scalar.to_string();
            pairs.push(format!("{}={}", encode_query(name), encode_query(&text)));
        }
    }
}

/// Splits `a[b][]` into `["a", "b", ""]`.
///
/// Returns `None` when the key has more than [`MAX_QUERY_DEPTH`] bracket
/// levels.
fn key_path(key: &str) -> Option<Vec<&str>> {
    let Some(open) = key.find('[') else {
        return Some(vec![key]);
    };

    let mut path = vec![&key[..open]];
    let mut rest = &key[open..];
    while let Some(inner) = rest.strip_prefix('[') {
        let Some(close) = inner.find(']') else {
            break;
        };
        if path.len() > MAX_QUERY_DEPTH {
            return None;
        }
        path.push(&inner[..close]);
        rest = &inner[close + 1..];
    }

    if path.len() == 1 {
        return Some(vec![key]);
    }
    Some(path)
}

/// True for keys like `0`, `-1`, `2.5` or `1e3`.
fn is_numeric_key(key: &str) -> bool {
    fn all_digits(s: &str) -> bool {
        s.bytes().all(|b| b.is_ascii_digit())
    }

    let unsigned = key.strip_prefix(['+', '-']).unwrap_or(key);
    let (mantissa, exponent) = match unsigned.find(['e', 'E']) {
        Some(i) => (&unsigned[..i], Some(&unsigned[i + 1..])),
        None => (unsigned, None),
    };
    let (int, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    if (int.is_empty() && frac.is_empty()) || !all_digits(int) || !all_digits(frac) {
        return false;
    }

    exponent.is_none_or(|e| {
        let digits = e.strip_prefix(['+', '-']).unwrap_or(e);
        !digits.is_empty() && all_digits(digits)
    })
}

impl<K: Into<String>, V: Into<QueryValue>> FromIterator<(K, V)> for QueryNode {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut node = Self::new();
        node.extend(iter);
        node
    }
}

impl<K: Into<String>, V: Into<QueryValue>> Extend<(K, V)> for QueryNode {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

impl IntoIterator for QueryNode {
    type Item = (String, QueryValue);
    type IntoIter = indexmap::map::IntoIter<String, QueryValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl fmt::Display for QueryNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for QueryNode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for QueryNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.encode())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for QueryNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::parse(&s))
    }
}
