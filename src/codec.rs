//! Percent-encoding helpers for URI components.
//!
//! Every component uses form encoding: ASCII alphanumerics and `-`, `_`,
//! `.` pass through, a space becomes `+`, and every other byte of the
//! UTF-8 representation becomes `%XX` with uppercase hex digits.
//! [`decode`] is the exact inverse for any valid UTF-8 input.

use std::borrow::Cow;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Bytes escaped in form encoding.
const FORM: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_');

/// Bytes escaped inside a bracketed IP literal such as `[::1]`.
const IP_LITERAL: &AsciiSet = &FORM.remove(b'[').remove(b']').remove(b':');

fn form_encode<'a>(input: &'a str, set: &'static AsciiSet) -> Cow<'a, str> {
    let encoded: Cow<'a, str> = utf8_percent_encode(input, set).into();
    if input.contains(' ') {
        // '%' itself is escaped, so every "%20" came from a space
        Cow::Owned(encoded.replace("%20", "+"))
    } else {
        encoded
    }
}

/// Encodes a single path segment. `/` is escaped; split the path first.
#[inline]
#[must_use]
pub fn encode_path_segment(segment: &str) -> Cow<'_, str> {
    form_encode(segment, FORM)
}

/// Encodes a query key or value.
#[inline]
#[must_use]
pub fn encode_query(value: &str) -> Cow<'_, str> {
    form_encode(value, FORM)
}

/// Encodes a user name or password for the authority.
#[inline]
#[must_use]
pub fn encode_user_info(value: &str) -> Cow<'_, str> {
    form_encode(value, FORM)
}

/// Encodes a host. Bracketed IP literals keep their brackets and colons.
#[must_use]
pub fn encode_host(host: &str) -> Cow<'_, str> {
    if host.starts_with('[') && host.ends_with(']') {
        form_encode(host, IP_LITERAL)
    } else {
        form_encode(host, FORM)
    }
}

/// Encodes a fragment.
#[inline]
#[must_use]
pub fn encode_fragment(value: &str) -> Cow<'_, str> {
    form_encode(value, FORM)
}

/// Decodes a form-encoded value: `+` becomes a space and `%XX` sequences
/// become bytes. Invalid UTF-8 is replaced lossily; malformed escapes are
/// kept verbatim.
#[must_use]
pub fn decode(value: &str) -> Cow<'_, str> {
    if value.contains('+') {
        Cow::Owned(
            percent_decode_str(&value.replace('+', " "))
                .decode_utf8_lossy()
                .into_owned(),
        )
    } else {
        percent_decode_str(value).decode_utf8_lossy()
    }
}
