//! Base64 with the standard RFC 4648 alphabet and `=` padding.
//!
//! Encoded output is wrapped MIME-style: a `\r\n` follows every
//! [`LINE_WIDTH`] characters when more output follows. The decoder accepts
//! that wrapping back.

use std::num::NonZeroUsize;

use ::base64::engine::general_purpose::STANDARD;
use ::base64::Engine as _;
use tracing::trace;

use crate::error::CodecError;

/// Number of Base64 characters per output line.
pub const LINE_WIDTH: usize = 76;

/// Separator inserted between output lines.
pub const LINE_BREAK: &str = "\r\n";

/// Block size that leaves decoded output unaligned.
pub const UNALIGNED: NonZeroUsize = NonZeroUsize::MIN;

/// Map a Base64 alphabet byte to its 6-bit value.
///
/// Callers validate the alphabet beforehand; anything else maps to zero.
fn sextet(c: u8) -> u32 {
    let value = match c {
        b'A'..=b'Z' => c - b'A',
        b'a'..=b'z' => c - b'a' + 26,
        b'0'..=b'9' => c - b'0' + 52,
        b'+' => 62,
        b'/' => 63,
        _ => 0,
    };
    u32::from(value)
}

fn is_alphabet(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '=')
}

/// Decode a Base64 string into bytes.
///
/// Whitespace, including the line breaks written by [`encode`], is ignored.
/// Padding must be a contiguous suffix. A trailing partial group of two or
/// three characters yields one or two bytes. The output is zero-padded up to
/// the next multiple of `block_size`.
///
/// # Examples
///
/// ```
/// use unibytes::codec::base64::{self, UNALIGNED};
///
/// let bytes = base64::decode("SGVsbG8=", UNALIGNED).unwrap();
/// assert_eq!(bytes, b"Hello");
/// ```
pub fn decode(input: &str, block_size: NonZeroUsize) -> Result<Vec<u8>, CodecError> {
    let normalized: String = input.chars().filter(|c| !c.is_whitespace()).collect();

    if let Some((position, character)) = normalized
        .chars()
        .enumerate()
        .find(|(_, c)| !is_alphabet(*c))
    {
        return Err(CodecError::InvalidCharacter { character, position });
    }

    // Alphabet is ASCII from here on.
    let raw = normalized.as_bytes();
    if let Some(position) = raw.windows(2).position(|w| w[0] == b'=' && w[1] != b'=') {
        return Err(CodecError::MisplacedPadding { position });
    }

    let data: Vec<u8> = raw.iter().copied().filter(|&c| c != b'=').collect();
    let out_len = (data.len() * 3 + 1) >> 2;
    let padded_len = out_len.div_ceil(block_size.get()) * block_size.get();

    let mut out = Vec::with_capacity(padded_len);
    let mut acc: u32 = 0;
    let last = data.len().saturating_sub(1);

    for (i, &c) in data.iter().enumerate() {
        let slot = i & 3;
        acc |= sextet(c) << (6 * (3 - slot));

        if slot == 3 || i == last {
            for shift in [16u32, 8, 0] {
                if out.len() < out_len {
                    out.push((acc >> shift) as u8);
                }
            }
            acc = 0;
        }
    }

    if padded_len > out_len {
        trace!(
            decoded = out_len,
            block_size = block_size.get(),
            "zero-padding base64 output to block size"
        );
        out.resize(padded_len, 0);
    }

    Ok(out)
}

/// Encode bytes as wrapped Base64.
///
/// # Examples
///
/// ```
/// use unibytes::codec::base64;
///
/// assert_eq!(base64::encode(b"Hello"), "SGVsbG8=");
/// assert_eq!(base64::encode(b""), "");
/// ```
pub fn encode(bytes: &[u8]) -> String {
    let flat = STANDARD.encode(bytes);
    if flat.len() <= LINE_WIDTH {
        return flat;
    }

    let breaks = (flat.len() - 1) / LINE_WIDTH;
    let mut out = String::with_capacity(flat.len() + breaks * LINE_BREAK.len());

    // Base64 output is ASCII, so byte chunks are valid str boundaries.
    for (i, line) in flat.as_bytes().chunks(LINE_WIDTH).enumerate() {
        if i > 0 {
            out.push_str(LINE_BREAK);
        }
        out.extend(line.iter().map(|&b| char::from(b)));
    }

    out
}
