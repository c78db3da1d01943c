//! Constants for URI splitting and validation.

/// Characters allowed in a scheme after the leading letter, besides ASCII
/// alphanumerics.
pub const SCHEME_SPECIAL_CHARS: &[char] = &['+', '.', '-'];

/// Scheme whose URIs may carry an empty authority (`file:///etc/hosts`).
pub const FILE_SCHEME: &str = "file";

/// Highest valid port number.
pub const MAX_PORT: u16 = u16::MAX;

/// Deepest bracket nesting accepted in a query key (`a[b][c]` is 2).
/// Pairs nested deeper are dropped when parsing.
pub const MAX_QUERY_DEPTH: usize = 64;
