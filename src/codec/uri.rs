//! Percent-encoded URI component text.
//!
//! The unreserved set matches `encodeURIComponent`: ASCII letters, digits and
//! `- _ . ! ~ * ' ( )`. Everything else is written as `%XX` per UTF-8 byte.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::codec::utf8;
use crate::error::CodecError;

/// Characters escaped by [`encode`].
pub const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Find the first `%` that does not introduce two hex digits.
fn find_malformed_escape(input: &str) -> Option<usize> {
    let bytes = input.as_bytes();
    bytes.iter().enumerate().find_map(|(i, &b)| {
        if b != b'%' {
            return None;
        }
        match bytes.get(i + 1..i + 3) {
            Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => None,
            _ => Some(i),
        }
    })
}

/// Percent-decode URI text and validate the result as UTF-8.
///
/// Unescaped characters pass through as their own UTF-8 bytes.
///
/// # Examples
///
/// ```
/// use unibytes::codec::uri;
///
/// assert_eq!(uri::decode_text("%E2%82%AC 5").unwrap(), "€ 5");
/// assert!(uri::decode_text("%FF").is_err());
/// ```
pub fn decode_text(input: &str) -> Result<String, CodecError> {
    if let Some(position) = find_malformed_escape(input) {
        return Err(CodecError::MalformedEscape { position });
    }

    let bytes: Vec<u8> = percent_decode_str(input).collect();
    utf8::decode(&bytes).map_err(|err| match err {
        CodecError::InvalidUtf8 { valid_up_to } => CodecError::InvalidEncoding { valid_up_to },
        other => other,
    })
}

/// Percent-encode text, escaping everything outside the unreserved set.
///
/// # Examples
///
/// ```
/// use unibytes::codec::uri;
///
/// assert_eq!(uri::encode("€"), "%E2%82%AC");
/// assert_eq!(uri::encode("a b/c"), "a%20b%2Fc");
/// ```
pub fn encode(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}
