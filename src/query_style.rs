//! The query field of a [`Uri`](crate::Uri): nested or flat.

use std::fmt;

use crate::flat_query::FlatQueryMap;
use crate::query::QueryNode;

/// Selects how a [`Uri`](crate::Uri) represents its query string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum QueryStyle {
    /// Bracket-syntax nesting through [`QueryNode`]
    #[default]
    Nested,
    /// Plain `key=value` pairs through [`FlatQueryMap`]
    Flat,
}

/// A query structure in either representation.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    /// Nested query
    Nested(QueryNode),
    /// Flat query
    Flat(FlatQueryMap),
}

impl Query {
    /// Creates an empty query of the given style.
    #[must_use]
    pub fn empty(style: QueryStyle) -> Self {
        match style {
            QueryStyle::Nested => Self::Nested(QueryNode::new()),
            QueryStyle::Flat => Self::Flat(FlatQueryMap::new()),
        }
    }

    /// Parses a form-encoded query string into the given style.
    #[must_use]
    pub fn parse(input: &str, style: QueryStyle) -> Self {
        match style {
            QueryStyle::Nested => Self::Nested(QueryNode::parse(input)),
            QueryStyle::Flat => Self::Flat(FlatQueryMap::parse(input)),
        }
    }

    /// Returns the representation in use.
    #[must_use]
    pub const fn style(&self) -> QueryStyle {
        match self {
            Self::Nested(_) => QueryStyle::Nested,
            Self::Flat(_) => QueryStyle::Flat,
        }
    }

    /// Returns the number of top-level entries.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Nested(q) => q.len(),
            Self::Flat(q) => q.len(),
        }
    }

    /// Returns true if there are no top-level entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Encodes the query (without leading `?`).
    #[must_use]
    pub fn encode(&self) -> String {
        match self {
            Self::Nested(q) => q.encode(),
            Self::Flat(q) => q.encode(),
        }
    }

    /// Returns the nested structure, if this query is nested.
    #[must_use]
    pub const fn as_nested(&self) -> Option<&QueryNode> {
        match self {
            Self::Nested(q) => Some(q),
            Self::Flat(_) => None,
        }
    }

    /// Returns the nested structure mutably, if this query is nested.
    pub fn as_nested_mut(&mut self) -> Option<&mut QueryNode> {
        match self {
            Self::Nested(q) => Some(q),
            Self::Flat(_) => None,
        }
    }

    /// Returns the flat map, if this query is flat.
    #[must_use]
    pub const fn as_flat(&self) -> Option<&FlatQueryMap> {
        match self {
            Self::Flat(q) => Some(q),
            Self::Nested(_) => None,
        }
    }

    /// Returns the flat map mutably, if this query is flat.
    pub fn as_flat_mut(&mut self) -> Option<&mut FlatQueryMap> {
        match self {
            Self::Flat(q) => Some(q),
            Self::Nested(_) => None,
        }
    }
}

impl Default for Query {
    fn default() -> Self {
        Self::empty(QueryStyle::default())
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nested(q) => fmt::Display::fmt(q, f),
            Self::Flat(q) => fmt::Display::fmt(q, f),
        }
    }
}

impl From<QueryNode> for Query {
    fn from(query: QueryNode) -> Self {
        Self::Nested(query)
    }
}

impl From<FlatQueryMap> for Query {
    fn from(query: FlatQueryMap) -> Self {
        Self::Flat(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty_nested() {
        let query = Query::default();
        assert_eq!(query.style(), QueryStyle::Nested);
        assert!(query.is_empty());
    }

    #[test]
    fn parse_respects_style() {
        let nested = Query::parse("a[b]=1", QueryStyle::Nested);
        let flat = Query::parse("a[b]=1", QueryStyle::Flat);

        assert!(nested.as_nested().is_some_and(|q| q.contains_key("a")));
        assert!(flat.as_flat().is_some_and(|q| q.contains_key("a[b]")));
        assert_eq!(nested.encode(), flat.encode());
    }

    #[test]
    fn numeric_key_handling_differs_by_style() {
        let nested = Query::parse("0=a", QueryStyle::Nested);
        let flat = Query::parse("0=a", QueryStyle::Flat);
        assert_eq!(nested.len(), 1);
        assert_eq!(nested.encode(), "");
        assert_eq!(flat.encode(), "0=a");
    }
}
