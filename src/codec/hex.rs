//! Hexadecimal byte strings.
//!
//! Decoding accepts digits in either case separated by arbitrary whitespace.
//! Encoding always emits uppercase pairs separated by single spaces.

use crate::error::CodecError;

/// Decode a hex string into bytes.
///
/// All whitespace is removed first. Character validation happens before the
/// length check, so `"ZZZ"` reports an invalid character rather than an odd
/// length.
///
/// # Examples
///
/// ```
/// use unibytes::codec::hex;
///
/// let bytes = hex::decode("48 65 6c 6C 6F").unwrap();
/// assert_eq!(bytes, b"Hello");
/// ```
pub fn decode(input: &str) -> Result<Vec<u8>, CodecError> {
    let stripped: String = input.chars().filter(|c| !c.is_whitespace()).collect();

    if let Some((position, character)) = stripped
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_hexdigit())
    {
        return Err(CodecError::InvalidCharacter { character, position });
    }

    // Only ASCII remains, so byte length equals character count.
    if stripped.len() % 2 != 0 {
        return Err(CodecError::OddLength {
            length: stripped.len(),
        });
    }

    ::hex::decode(&stripped).map_err(|err| match err {
        ::hex::FromHexError::InvalidHexCharacter { c, index } => CodecError::InvalidCharacter {
            character: c,
            position: index,
        },
        _ => CodecError::OddLength {
            length: stripped.len(),
        },
    })
}

/// Encode bytes as uppercase hex pairs separated by single spaces.
///
/// # Examples
///
/// ```
/// use unibytes::codec::hex;
///
/// assert_eq!(hex::encode(&[0xE2, 0x82, 0xAC]), "E2 82 AC");
/// assert_eq!(hex::encode(&[]), "");
/// ```
pub fn encode(bytes: &[u8]) -> String {
    let digits = ::hex::encode_upper(bytes);
    let mut out = String::with_capacity(bytes.len() * 3);

    for (i, pair) in digits.as_bytes().chunks(2).enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(char::from(pair[0]));
        out.push(char::from(pair[1]));
    }

    out
}
