//! Loose, name-indexed access to a [`Uri`].

use std::fmt;

use indexmap::IndexMap;

use crate::component::Component;
use crate::error::UriError;
use crate::uri::Uri;

/// A [`Uri`] addressed by component name, with room for extra properties.
///
/// Keys are either a [`Component`] or its name. Any other name is stored
/// as an opaque extra property instead of failing; extras never appear in
/// the displayed URI.
///
/// # Examples
///
/// ```
/// use uri_tools::{Component, PropertyUri};
///
/// let mut props = PropertyUri::parse("http://www.example.org").unwrap();
/// props.set(Component::Scheme, Some("https")).unwrap();
/// props.set("label", Some("homepage")).unwrap();
///
/// assert_eq!(props.get("scheme").as_deref(), Some("https"));
/// assert_eq!(props.get("label").as_deref(), Some("homepage"));
/// assert_eq!(props.to_string(), "https://www.example.org");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyUri {
    uri: Uri,
    extra: IndexMap<String, String>,
}

impl PropertyUri {
    /// Wraps a URI.
    #[must_use]
    pub fn new(uri: Uri) -> Self {
        Self {
            uri,
            extra: IndexMap::new(),
        }
    }

    /// Parses a URI and wraps it.
    ///
    /// # Errors
    ///
    /// Returns `UriError::InvalidUri` if the string cannot be split.
    pub fn parse(input: &str) -> Result<Self, UriError> {
        Uri::parse(input).map(Self::new)
    }

    /// Returns the wrapped URI.
    #[must_use]
    pub const fn uri(&self) -> &Uri {
        &self.uri
    }

    /// Returns the wrapped URI mutably.
    pub fn uri_mut(&mut self) -> &mut Uri {
        &mut self.uri
    }

    /// Unwraps the URI, dropping extra properties.
    #[must_use]
    pub fn into_uri(self) -> Uri {
        self.uri
    }

    /// Returns a component or extra property.
    #[must_use]
    pub fn get(&self, key: impl AsRef<str>) -> Option<String> {
        let key = key.as_ref();
        match Component::from_name(key) {
            Some(component) => self.uri.get(component),
            None => self.extra.get(key).cloned(),
        }
    }

    /// Sets a component or extra property. `None` clears it.
    ///
    /// # Errors
    ///
    /// Returns `UriError::InvalidScheme` for an invalid scheme.
    pub fn set(&mut self, key: impl AsRef<str>, value: Option<&str>) -> Result<(), UriError> {
        let key = key.as_ref();
        if let Some(component) = Component::from_name(key) {
            return self.uri.set(component, value);
        }

        match value {
            Some(v) => {
                self.extra.insert(key.to_string(), v.to_string());
            }
            None => {
                self.extra.shift_remove(key);
            }
        }
        Ok(())
    }

    /// Clears a component or removes an extra property.
    pub fn unset(&mut self, key: impl AsRef<str>) {
        let key = key.as_ref();
        match Component::from_name(key) {
            Some(component) => self.uri.clear(component),
            None => {
                self.extra.shift_remove(key);
            }
        }
    }

    /// Returns true for every component name and for present extras.
    #[must_use]
    pub fn contains(&self, key: impl AsRef<str>) -> bool {
        let key = key.as_ref();
        Component::from_name(key).is_some() || self.extra.contains_key(key)
    }

    /// Returns the extra properties in insertion order.
    pub fn extras(&self) -> impl Iterator<Item = (&str, &str)> {
        self.extra.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<Uri> for PropertyUri {
    fn from(uri: Uri) -> Self {
        Self::new(uri)
    }
}

impl fmt::Display for PropertyUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.uri, f)
    }
}
