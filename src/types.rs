//! Core data structures shared by the codecs and the conversion facade.

use std::fmt;
use std::str::FromStr;

use crate::error::{CodecError, FormatParseError};

/// Which decoder turns the raw input string into bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    /// Input is already text; bytes are its UTF-8 encoding.
    Text,
    /// Input is percent-encoded text.
    Uri,
    /// Input is hex digits, optionally separated by whitespace.
    Hex,
    /// Input is standard Base64 with `=` padding.
    Base64,
}

impl SourceFormat {
    /// All formats in display order.
    pub const ALL: [SourceFormat; 4] = [
        SourceFormat::Text,
        SourceFormat::Uri,
        SourceFormat::Hex,
        SourceFormat::Base64,
    ];

    /// Lowercase tag used when parsing and displaying a format.
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceFormat::Text => "text",
            SourceFormat::Uri => "uri",
            SourceFormat::Hex => "hex",
            SourceFormat::Base64 => "base64",
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SourceFormat {
    type Err = FormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SourceFormat::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FormatParseError(s.to_string()))
    }
}

/// One Unicode scalar value extracted from decoded text.
///
/// Always in `[0, 0x10FFFF]` and never inside the surrogate range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CodePoint(char);

impl CodePoint {
    /// Numeric scalar value.
    pub fn value(&self) -> u32 {
        u32::from(self.0)
    }

    /// The scalar value as a `char`.
    pub fn as_char(&self) -> char {
        self.0
    }

    /// Whether this code point lies outside the Basic Multilingual Plane.
    pub fn is_supplementary(&self) -> bool {
        self.value() >= 0x10000
    }
}

impl From<char> for CodePoint {
    fn from(c: char) -> Self {
        CodePoint(c)
    }
}

impl TryFrom<u32> for CodePoint {
    type Error = CodecError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        char::from_u32(value)
            .map(CodePoint)
            .ok_or(CodecError::InvalidCodePoint(value))
    }
}

impl From<CodePoint> for u32 {
    fn from(cp: CodePoint) -> Self {
        cp.value()
    }
}

impl fmt::Display for CodePoint {
    /// Formats as `U+` followed by six lowercase hex digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:06x}", self.value())
    }
}

/// Terminal state reached by a single conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionState {
    /// Nothing has been attempted yet.
    Empty,
    /// Bytes were decoded; text decode not yet attempted.
    BytesDecoded,
    /// The format-specific decoder rejected the input.
    BytesInvalid,
    /// Bytes decoded to valid UTF-8 text; code points not yet extracted.
    TextDecoded,
    /// Bytes are valid but are not UTF-8 text.
    TextInvalid,
    /// Text decoded and segmented into code points.
    CodePointsExtracted,
}

/// Everything derived from one conversion request.
///
/// A result is built fresh for every call and never mutated afterwards by
/// the caller, so fields from different stages always belong to the same input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionResult {
    /// Decoded bytes, empty when `bytes_valid` is false.
    pub bytes: Vec<u8>,
    /// Whether the format-specific decode succeeded.
    pub bytes_valid: bool,
    /// Decoded text, empty when `text_valid` is false.
    pub text: String,
    /// Whether `bytes` is valid UTF-8.
    pub text_valid: bool,
    /// Code points of `text`, empty when `text_valid` is false.
    pub code_points: Vec<CodePoint>,
    /// Human readable reason for a byte-decode failure.
    pub error_message: String,
    /// Typed byte-decode failure, if any.
    pub error: Option<CodecError>,
    pub(crate) state: ConversionState,
}

impl ConversionResult {
    pub(crate) const UNKNOWN_ERROR: &'static str = "Unknown error";

    /// The reset value every conversion starts from.
    pub(crate) fn reset() -> Self {
        Self {
            bytes: Vec::new(),
            bytes_valid: false,
            text: String::new(),
            text_valid: false,
            code_points: Vec::new(),
            error_message: Self::UNKNOWN_ERROR.to_string(),
            error: None,
            state: ConversionState::Empty,
        }
    }

    /// The state the conversion stopped in.
    pub fn state(&self) -> ConversionState {
        self.state
    }

    /// Whether the pipeline ran to code point extraction.
    pub fn is_complete(&self) -> bool {
        self.state == ConversionState::CodePointsExtracted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_format_round_trip_tags() {
        for format in SourceFormat::ALL {
            let parsed: SourceFormat = format.to_string().parse().unwrap();
            assert_eq!(parsed, format);
        }
    }

    #[test]
    fn test_source_format_parse_is_case_insensitive() {
        assert_eq!("HEX".parse::<SourceFormat>().unwrap(), SourceFormat::Hex);
        assert_eq!(" Base64 ".parse::<SourceFormat>().unwrap(), SourceFormat::Base64);
        assert!("latin1".parse::<SourceFormat>().is_err());
    }

    #[test]
    fn test_code_point_from_u32() {
        assert_eq!(CodePoint::try_from(0x20AC).unwrap().as_char(), '€');
        assert_eq!(
            CodePoint::try_from(0xD800),
            Err(CodecError::InvalidCodePoint(0xD800))
        );
        assert_eq!(
            CodePoint::try_from(0x110000),
            Err(CodecError::InvalidCodePoint(0x110000))
        );
    }

    #[test]
    fn test_code_point_display() {
        assert_eq!(CodePoint::from('€').to_string(), "U+0020ac");
        assert_eq!(CodePoint::from('\u{1F600}').to_string(), "U+01f600");
        assert_eq!(CodePoint::from('\0').to_string(), "U+000000");
    }

    #[test]
    fn test_code_point_supplementary() {
        assert!(CodePoint::from('\u{10000}').is_supplementary());
        assert!(!CodePoint::from('\u{FFFF}').is_supplementary());
    }

    #[test]
    fn test_reset_result() {
        let result = ConversionResult::reset();

        assert!(!result.bytes_valid);
        assert!(!result.text_valid);
        assert!(result.bytes.is_empty());
        assert!(result.code_points.is_empty());
        assert_eq!(result.error_message, "Unknown error");
        assert_eq!(result.state(), ConversionState::Empty);
    }
}
