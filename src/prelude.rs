//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use uri_tools::prelude::*;
//!
//! let uri = Uri::parse("http://www.example.org").unwrap();
//! assert_eq!(uri.get(Component::Host).as_deref(), Some("www.example.org"));
//! ```
//!
//! The percent-encoding helpers stay in [`crate::codec`].

pub use crate::{
    // Core types
    Component, FlatQueryMap, PropertyUri, Query, QueryNode, QueryStyle, QueryValue, RawParts,
    Scalar, Uri,
    // Free functions
    Replacement, replace_component, replace_component_by_name, split, validate_scheme,
    // Errors
    ParseError, ParseErrorKind, QueryError, SchemeError, UriError,
};
