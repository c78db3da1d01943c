//! Component-wise replacement on raw URI text.
//!
//! Unlike [`Uri`](crate::Uri), nothing here decodes or encodes: the input
//! is split, one part is swapped, and the parts are concatenated again.
//! Failures never surface; the input comes back unchanged instead.

use std::borrow::Cow;
use std::fmt;

use crate::component::Component;
use crate::error::ParseErrorKind;
use crate::splitter::{RawParts, split};

/// What to put in place of the selected component.
pub enum Replacement<'a> {
    /// Use this raw text, or remove the component with `None`
    Set(Option<&'a str>),
    /// Compute the new raw text from the old one and the selected component
    Map(Box<dyn FnOnce(Option<&str>, Component) -> Option<String> + 'a>),
    /// Rewrite all parts at once; only applies without a selector
    Parts(Box<dyn FnOnce(RawParts) -> RawParts + 'a>),
}

impl<'a> Replacement<'a> {
    /// Wraps a closure computing the new value from the old one.
    pub fn map(f: impl FnOnce(Option<&str>, Component) -> Option<String> + 'a) -> Self {
        Self::Map(Box::new(f))
    }

    /// Wraps a closure rewriting every part.
    pub fn parts(f: impl FnOnce(RawParts) -> RawParts + 'a) -> Self {
        Self::Parts(Box::new(f))
    }
}

impl<'a> From<&'a str> for Replacement<'a> {
    fn from(value: &'a str) -> Self {
        Self::Set(Some(value))
    }
}

impl<'a> From<Option<&'a str>> for Replacement<'a> {
    fn from(value: Option<&'a str>) -> Self {
        Self::Set(value)
    }
}

impl fmt::Debug for Replacement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Set(value) => f.debug_tuple("Set").field(value).finish(),
            Self::Map(_) => f.write_str("Map(..)"),
            Self::Parts(_) => f.write_str("Parts(..)"),
        }
    }
}

/// Replaces one component of `url`, or rewrites all of them.
///
/// With `Some(component)`, a [`Replacement::Set`] or [`Replacement::Map`]
/// changes exactly that component. With `None`, a [`Replacement::Parts`]
/// closure receives and returns every part. Other combinations recombine
/// the parts untouched.
///
/// Returns `url` unchanged if it cannot be split or if a new port is not a
/// valid port number.
///
/// # Examples
///
/// ```
/// use uri_tools::{replace_component, Component, Replacement};
///
/// assert_eq!(
///     replace_component("http://www.example.org", Some(Component::Scheme), "https".into()),
///     "https://www.example.org"
/// );
/// assert_eq!(
///     replace_component(
///         "http://www.example.org/foobar?bar=baz#test",
///         Some(Component::Query),
///         Replacement::Set(None),
///     ),
///     "http://www.example.org/foobar#test"
/// );
/// ```
#[must_use]
pub fn replace_component(url: &str, component: Option<Component>, replacement: Replacement<'_>) -> String {
    match try_replace(url, component, replacement) {
        Ok(replaced) => replaced,
        Err(kind) => {
            #[cfg(feature = "tracing")]
            tracing::debug!(url, ?kind, "replacement failed, returning input unchanged");
            #[cfg(not(feature = "tracing"))]
            let _ = kind;
            url.to_string()
        }
    }
}

/// Like [`replace_component`], selecting the component by name.
///
/// An unrecognized name returns `url` unchanged.
#[must_use]
pub fn replace_component_by_name(url: &str, name: Option<&str>, replacement: Replacement<'_>) -> String {
    match name {
        None => replace_component(url, None, replacement),
        Some(name) => match Component::from_name(name) {
            Some(component) => replace_component(url, Some(component), replacement),
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(url, name, "unknown component, returning input unchanged");
                url.to_string()
            }
        },
    }
}

fn try_replace(
    url: &str,
    component: Option<Component>,
    replacement: Replacement<'_>,
) -> Result<String, ParseErrorKind> {
    let mut parts = split(url).map_err(|e| e.kind)?;

    match (component, replacement) {
        (Some(component), Replacement::Set(value)) => {
            parts.set(component, value.map(str::to_string))?;
        }
        (Some(component), Replacement::Map(f)) => {
            let old = parts.get(component).map(Cow::into_owned);
            parts.set(component, f(old.as_deref(), component))?;
        }
        (None, Replacement::Parts(f)) => parts = f(parts),
        _ => {}
    }

    Ok(parts.to_string())
}
