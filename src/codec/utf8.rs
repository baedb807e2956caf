//! UTF-8 text and code point segmentation.

use crate::error::CodecError;
use crate::types::CodePoint;

/// Decode bytes as strict UTF-8.
///
/// Rejects truncated or stray continuation bytes, overlong forms, encoded
/// surrogate halves and anything above U+10FFFF. There is no lossy fallback.
///
/// # Examples
///
/// ```
/// use unibytes::codec::utf8;
///
/// assert_eq!(utf8::decode(&[0xE2, 0x82, 0xAC]).unwrap(), "€");
/// assert!(utf8::decode(&[0xC0, 0x80]).is_err()); // overlong NUL
/// ```
pub fn decode(bytes: &[u8]) -> Result<String, CodecError> {
    Ok(String::from_utf8(bytes.to_vec())?)
}

/// Encode text as UTF-8 bytes.
pub fn encode(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}

/// Split text into one [`CodePoint`] per Unicode scalar value.
///
/// # Examples
///
/// ```
/// use unibytes::codec::utf8;
///
/// let cps = utf8::segment_code_points("a\u{1F600}");
/// let values: Vec<u32> = cps.iter().map(|cp| cp.value()).collect();
/// assert_eq!(values, vec![0x61, 0x1F600]);
/// ```
pub fn segment_code_points(text: &str) -> Vec<CodePoint> {
    text.chars().map(CodePoint::from).collect()
}

/// Segment UTF-16 code units, joining surrogate pairs into single scalars.
///
/// For collaborators that hold text as 16-bit units. A high surrogate must be
/// immediately followed by a low surrogate; any unpaired half is rejected.
pub fn segment_utf16(units: &[u16]) -> Result<Vec<CodePoint>, CodecError> {
    let mut code_points = Vec::with_capacity(units.len());
    let mut position = 0;

    for decoded in char::decode_utf16(units.iter().copied()) {
        match decoded {
            Ok(c) => {
                position += c.len_utf16();
                code_points.push(CodePoint::from(c));
            }
            Err(err) => {
                return Err(CodecError::LoneSurrogate {
                    unit: err.unpaired_surrogate(),
                    position,
                });
            }
        }
    }

    Ok(code_points)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(cps: &[CodePoint]) -> Vec<u32> {
        cps.iter().map(|cp| cp.value()).collect()
    }

    #[test]
    fn test_decode_valid() {
        assert_eq!(decode(b"Hello").unwrap(), "Hello");
        assert_eq!(decode(&[0xF0, 0x9F, 0x98, 0x80]).unwrap(), "\u{1F600}");
        assert_eq!(decode(&[]).unwrap(), "");
    }

    #[test]
    fn test_decode_rejects_invalid_lead_bytes() {
        assert_eq!(decode(&[0xFF, 0xFE]), Err(CodecError::InvalidUtf8 { valid_up_to: 0 }));
        assert_eq!(decode(b"ab\x80"), Err(CodecError::InvalidUtf8 { valid_up_to: 2 }));
    }

    #[test]
    fn test_decode_rejects_overlong() {
        // "/" encoded in two and three bytes.
        assert!(decode(&[0xC0, 0xAF]).is_err());
        assert!(decode(&[0xE0, 0x80, 0xAF]).is_err());
    }

    #[test]
    fn test_decode_rejects_encoded_surrogates() {
        // U+D800 as a three byte sequence.
        assert!(decode(&[0xED, 0xA0, 0x80]).is_err());
    }

    #[test]
    fn test_decode_rejects_beyond_max_scalar() {
        // U+110000
        assert!(decode(&[0xF4, 0x90, 0x80, 0x80]).is_err());
    }

    #[test]
    fn test_decode_rejects_truncated_sequence() {
        assert_eq!(decode(&[0xE2, 0x82]), Err(CodecError::InvalidUtf8 { valid_up_to: 0 }));
    }

    #[test]
    fn test_encode() {
        assert_eq!(encode("€"), vec![0xE2, 0x82, 0xAC]);
        assert_eq!(encode(""), Vec::<u8>::new());
    }

    #[test]
    fn test_segment_code_points() {
        assert_eq!(values(&segment_code_points("€")), vec![0x20AC]);
        assert_eq!(values(&segment_code_points("\u{1F600}")), vec![0x1F600]);
        assert_eq!(values(&segment_code_points("aé")), vec![0x61, 0xE9]);
        assert!(segment_code_points("").is_empty());
    }

    #[test]
    fn test_segment_utf16_pairs_surrogates() {
        let units: Vec<u16> = "x\u{1F600}y".encode_utf16().collect();
        assert_eq!(units.len(), 4);

        let cps = segment_utf16(&units).unwrap();
        assert_eq!(values(&cps), vec![0x78, 0x1F600, 0x79]);
    }

    #[test]
    fn test_segment_utf16_rejects_lone_surrogates() {
        assert_eq!(
            segment_utf16(&[0x61, 0xD83D]),
            Err(CodecError::LoneSurrogate { unit: 0xD83D, position: 1 })
        );
        assert_eq!(
            segment_utf16(&[0xDE00, 0x61]),
            Err(CodecError::LoneSurrogate { unit: 0xDE00, position: 0 })
        );
    }
}
