//! The eight structural components of a URI.

use std::fmt;
use std::str::FromStr;

use crate::error::UriError;

/// Identifies one of the eight URI components.
///
/// Used for dynamic field access on [`Uri`](crate::Uri) and as the
/// selector of [`replace_component`](crate::replace_component).
///
/// # Examples
///
/// ```
/// use uri_tools::Component;
///
/// let c: Component = "host".parse().unwrap();
/// assert_eq!(c, Component::Host);
/// assert_eq!(c.as_str(), "host");
/// assert!("schemer".parse::<Component>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Component {
    /// `http` in `http://host`
    Scheme,
    /// User name of the authority
    User,
    /// Password of the authority
    Pass,
    /// Host of the authority
    Host,
    /// Port of the authority
    Port,
    /// Path
    Path,
    /// Query string
    Query,
    /// Fragment
    Fragment,
}

/// Component-name table, in serialization order.
static COMPONENTS: [(Component, &str); 8] = [
    (Component::Scheme, "scheme"),
    (Component::User, "user"),
    (Component::Pass, "pass"),
    (Component::Host, "host"),
    (Component::Port, "port"),
    (Component::Path, "path"),
    (Component::Query, "query"),
    (Component::Fragment, "fragment"),
];

impl Component {
    /// All components in serialization order.
    pub const ALL: [Self; 8] = [
        Self::Scheme,
        Self::User,
        Self::Pass,
        Self::Host,
        Self::Port,
        Self::Path,
        Self::Query,
        Self::Fragment,
    ];

    /// Returns the lowercase name of the component.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        COMPONENTS[self as usize].1
    }

    /// Looks up a component by its lowercase name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        COMPONENTS
            .iter()
            .find(|(_, n)| *n == name)
            .map(|(c, _)| *c)
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AsRef<str> for Component {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for Component {
    type Err = UriError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| UriError::InvalidField {
            name: s.to_string(),
        })
    }
}

impl TryFrom<&str> for Component {
    type Error = UriError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_declaration_order() {
        for (i, c) in Component::ALL.iter().enumerate() {
            assert_eq!(COMPONENTS[i].0, *c);
        }
    }

    #[test]
    fn names_round_trip() {
        for c in Component::ALL {
            assert_eq!(Component::from_name(c.as_str()), Some(c));
        }
    }

    #[test]
    fn unknown_name_is_invalid_field() {
        let result = "Scheme".parse::<Component>();
        assert!(matches!(result, Err(UriError::InvalidField { name }) if name == "Scheme"));
    }
}
