//! Error types for byte and text conversion operations.

use thiserror::Error;

/// Errors that can occur while decoding or validating an input representation.
///
/// Every variant is a local, recoverable validation failure. None of them is
/// fatal to the caller; the conversion facade folds them into validity flags.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Hex or Base64 input contains a character outside its alphabet.
    #[error("Invalid character {character:?} at position {position}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Character index in the normalized input.
        position: usize,
    },

    /// Hex input without whitespace has an odd number of digits.
    #[error("Hex string length without spaces must be a multiple of 2 (got {length})")]
    OddLength {
        /// Length of the whitespace-stripped input.
        length: usize,
    },

    /// Base64 padding `=` is followed by a non-padding character.
    #[error("Base64 padding '=' can only appear at the end of the string (position {position})")]
    MisplacedPadding {
        /// Character index of the first `=` that is followed by data.
        position: usize,
    },

    /// A byte buffer is not valid UTF-8.
    #[error("Bytes are not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidUtf8 {
        /// Length of the longest valid prefix.
        valid_up_to: usize,
    },

    /// Percent-decoded URI bytes are not valid UTF-8.
    #[error("Percent-decoded bytes are not valid UTF-8 (valid up to byte {valid_up_to})")]
    InvalidEncoding {
        /// Length of the longest valid prefix of the decoded bytes.
        valid_up_to: usize,
    },

    /// A `%` in URI input is not followed by two hex digits.
    #[error("Malformed percent escape at position {position}")]
    MalformedEscape {
        /// Byte index of the `%`.
        position: usize,
    },

    /// A UTF-16 surrogate unit without its partner.
    #[error("Lone surrogate 0x{unit:04X} at unit {position}")]
    LoneSurrogate {
        /// The unpaired unit.
        unit: u16,
        /// Index of the unit in the input slice.
        position: usize,
    },

    /// A value that is not a Unicode scalar value.
    #[error("Not a Unicode scalar value: 0x{0:X}")]
    InvalidCodePoint(u32),
}

impl From<std::string::FromUtf8Error> for CodecError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        CodecError::InvalidUtf8 {
            valid_up_to: err.utf8_error().valid_up_to(),
        }
    }
}

/// Error returned when parsing an unknown source format tag.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown source format: {0:?} (expected text, uri, hex or base64)")]
pub struct FormatParseError(pub String);
