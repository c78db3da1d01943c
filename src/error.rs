//! Error types for URI parsing and manipulation.

use std::fmt;

/// Errors that can occur when splitting a raw URI string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

/// Specific splitting error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Port in the authority is not a valid port number
    InvalidPort {
        /// The invalid value
        value: String,
        /// Reason for invalidity
        reason: &'static str,
    },
    /// Authority is present but names no host
    MissingHost,
    /// IPv6 literal is missing its closing bracket
    UnterminatedIpLiteral {
        /// The unterminated literal
        value: String,
    },
    /// Unexpected character after an IPv6 literal
    UnexpectedChar {
        /// The unexpected character
        char: char,
        /// Position in the host and port text
        position: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse URI '{}': ", self.input)?;
        match &self.kind {
            ParseErrorKind::InvalidPort { value, reason } => {
                write!(f, "invalid port '{value}': {reason}")
            }
            ParseErrorKind::MissingHost => {
                write!(f, "authority after '//' must name a host")
            }
            ParseErrorKind::UnterminatedIpLiteral { value } => {
                write!(f, "IP literal '{value}' is missing a closing ']'")
            }
            ParseErrorKind::UnexpectedChar { char, position } => {
                write!(f, "unexpected character '{char}' at position {position} after the host")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Errors for scheme validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemeError {
    /// Scheme is empty
    Empty,
    /// Scheme must start with an ASCII letter
    MustStartWithLetter {
        /// The character found
        found: char,
    },
    /// Invalid character (not alphanumeric, `+`, `.` or `-`)
    InvalidChar {
        /// The invalid character
        char: char,
        /// Position in the input
        position: usize,
    },
}

impl fmt::Display for SchemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "scheme cannot be empty"),
            Self::MustStartWithLetter { found } => {
                write!(f, "scheme must start with a letter, found '{found}'")
            }
            Self::InvalidChar { char, position } => {
                write!(
                    f,
                    "invalid character '{char}' at position {position}; only letters, digits, '+', '.' and '-' allowed"
                )
            }
        }
    }
}

impl std::error::Error for SchemeError {}

/// Errors for strict query lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Key is not present in the query structure
    UndefinedKey {
        /// The missing key
        key: String,
    },
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedKey { key } => write!(f, "undefined query key '{key}'"),
        }
    }
}

impl std::error::Error for QueryError {}

/// Errors returned by [`Uri`](crate::Uri) construction and mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UriError {
    /// Raw string could not be split into components
    InvalidUri(ParseError),
    /// Scheme does not match `[A-Za-z][A-Za-z0-9+.-]*`
    InvalidScheme(SchemeError),
    /// Name does not denote one of the eight URI components
    InvalidField {
        /// The unknown name
        name: String,
    },
}

impl fmt::Display for UriError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUri(e) => write!(f, "invalid URI: {e}"),
            Self::InvalidScheme(e) => write!(f, "invalid URI scheme: {e}"),
            Self::InvalidField { name } => {
                write!(
                    f,
                    "unknown URI component '{name}'; expected one of scheme, user, pass, host, port, path, query, fragment"
                )
            }
        }
    }
}

impl std::error::Error for UriError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidUri(e) => Some(e),
            Self::InvalidScheme(e) => Some(e),
            Self::InvalidField { .. } => None,
        }
    }
}

impl From<ParseError> for UriError {
    fn from(e: ParseError) -> Self {
        Self::InvalidUri(e)
    }
}

impl From<SchemeError> for UriError {
    fn from(e: SchemeError) -> Self {
        Self::InvalidScheme(e)
    }
}
