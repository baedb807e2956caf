//! Display views of a finished conversion.
//!
//! These only format fields that are already validated; they never fail and
//! return an empty string for a stage that did not succeed.

use crate::codec::{base64, hex, uri};
use crate::types::{CodePoint, ConversionResult};

/// Render code points as `U+xxxxxx`, space separated.
pub fn unicode_string(code_points: &[CodePoint]) -> String {
    code_points
        .iter()
        .map(CodePoint::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

impl ConversionResult {
    /// Bytes as uppercase hex pairs separated by spaces.
    pub fn hex_view(&self) -> String {
        if !self.bytes_valid {
            return String::new();
        }
        hex::encode(&self.bytes)
    }

    /// Bytes as wrapped Base64.
    pub fn base64_view(&self) -> String {
        if !self.bytes_valid {
            return String::new();
        }
        base64::encode(&self.bytes)
    }

    /// Text as a percent-encoded URI component.
    pub fn uri_view(&self) -> String {
        if !self.text_valid {
            return String::new();
        }
        uri::encode(&self.text)
    }

    /// Code points as `U+xxxxxx` entries.
    pub fn unicode_view(&self) -> String {
        unicode_string(&self.code_points)
    }
}
