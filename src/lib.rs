//! A mutable URI value object with nested query strings.
//!
//! This crate splits URI strings into their eight components, lets each
//! component be read and changed with validation, and writes the result
//! back as a normalized, percent-encoded string.
//!
//! # Overview
//!
//! ```text
//! [scheme:][//[user[:pass]@]host[:port]][path][?query][#fragment]
//! ```
//!
//! - [`Uri`] owns decoded components and encodes them on display.
//! - [`QueryNode`] models nested query strings (`a[b][0]=v`);
//!   [`FlatQueryMap`] is the single-level alternative. [`QueryStyle`]
//!   picks one when a [`Uri`] is created.
//! - [`replace_component`] swaps one component of a URI string without
//!   decoding anything, and never fails.
//!
//! # Quick Start
//!
//! ```rust
//! use uri_tools::{Component, Uri, UriError};
//!
//! let mut uri = Uri::parse("http://www.example.org/docs?page=2").unwrap();
//! assert_eq!(uri.host(), Some("www.example.org"));
//!
//! uri.set_scheme(Some("https")).unwrap();
//! uri.set_fragment(Some("intro"));
//! assert_eq!(uri.to_string(), "https://www.example.org/docs?page=2#intro");
//!
//! // Dynamic access by component name
//! assert_eq!(uri.get_by_name("path").unwrap().as_deref(), Some("/docs"));
//! assert!(matches!(uri.set_by_name("schemer", None), Err(UriError::InvalidField { .. })));
//!
//! // Invalid schemes are rejected
//! assert!(matches!(uri.set(Component::Scheme, Some("1")), Err(UriError::InvalidScheme(_))));
//! ```
//!
//! # Error policy
//!
//! | Operation | On failure |
//! |-----------|------------|
//! | [`Uri::parse`] | `Err(UriError::InvalidUri)` |
//! | [`Uri::set_scheme`] | `Err(UriError::InvalidScheme)` |
//! | [`Uri::get_by_name`] / [`Uri::set_by_name`] | `Err(UriError::InvalidField)` |
//! | [`QueryNode::get`] / [`FlatQueryMap::get`] | `None`, plus a `tracing` warning |
//! | [`QueryNode::parse`] | over-deep keys dropped, plus a `tracing` warning |
//! | [`QueryNode::try_get`] | `Err(QueryError::UndefinedKey)` |
//! | [`replace_component`] | input returned unchanged |
//!
//! # Features
//!
//! - `tracing` (default): diagnostics for lenient lookups and no-op
//!   replacements.
//! - `serde`: string (de)serialization for [`Uri`], [`QueryNode`] and
//!   [`FlatQueryMap`].

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod access;
pub mod codec;
mod component;
mod constants;
mod error;
mod flat_query;
pub mod prelude;
mod query;
mod query_style;
mod replace;
mod splitter;
mod uri;

pub use access::PropertyUri;
pub use component::Component;
pub use constants::{FILE_SCHEME, MAX_PORT, MAX_QUERY_DEPTH, SCHEME_SPECIAL_CHARS};
pub use error::{ParseError, ParseErrorKind, QueryError, SchemeError, UriError};
pub use flat_query::FlatQueryMap;
pub use query::{QueryNode, QueryValue, Scalar};
pub use query_style::{Query, QueryStyle};
pub use replace::{Replacement, replace_component, replace_component_by_name};
pub use splitter::{RawParts, split, validate_scheme};
pub use uri::Uri;
