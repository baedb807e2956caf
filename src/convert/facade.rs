//! The conversion pipeline.
//!
//! This module provides the single entry point the presentation layer calls
//! on every input change: a source format plus the raw input string in, a
//! fresh [`ConversionResult`] out.

use std::num::NonZeroUsize;

use tracing::debug;

use crate::codec::{base64, hex, uri, utf8};
use crate::error::CodecError;
use crate::types::{ConversionResult, ConversionState, SourceFormat};

/// Runtime options for a [`Converter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConverterOptions {
    /// Base64 output is zero-padded to a multiple of this many bytes.
    pub base64_block_size: NonZeroUsize,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            base64_block_size: base64::UNALIGNED,
        }
    }
}

/// Builder for [`Converter`].
#[derive(Debug, Clone, Default)]
pub struct ConverterBuilder {
    options: ConverterOptions,
}

impl ConverterBuilder {
    /// Align decoded Base64 output to `block_size` bytes.
    pub fn base64_block_size(mut self, block_size: NonZeroUsize) -> Self {
        self.options.base64_block_size = block_size;
        self
    }

    /// Finish building.
    pub fn build(self) -> Converter {
        Converter {
            options: self.options,
        }
    }
}

/// Runs the decode pipeline with a fixed configuration.
///
/// A converter holds no state between calls; every [`Converter::convert`]
/// starts from a reset result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Converter {
    options: ConverterOptions,
}

impl Converter {
    /// Create a converter with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start building a converter with custom options.
    pub fn builder() -> ConverterBuilder {
        ConverterBuilder::default()
    }

    /// The options this converter runs with.
    pub fn options(&self) -> &ConverterOptions {
        &self.options
    }

    /// Decode `input` according to `format`.
    fn decode_bytes(&self, format: SourceFormat, input: &str) -> Result<Vec<u8>, CodecError> {
        match format {
            SourceFormat::Text => Ok(utf8::encode(input)),
            SourceFormat::Uri => uri::decode_text(input).map(|text| utf8::encode(&text)),
            SourceFormat::Hex => hex::decode(input),
            SourceFormat::Base64 => base64::decode(input, self.options.base64_block_size),
        }
    }

    /// Convert one input string into bytes, text and code points.
    ///
    /// Byte-decode failures stop the pipeline and are reported through
    /// `error_message` and `error`. Bytes that are not UTF-8 are a valid
    /// outcome: `text_valid` stays false and no error is reported.
    pub fn convert(&self, format: SourceFormat, input: &str) -> ConversionResult {
        // Step 1: Reset
        let mut result = ConversionResult::reset();

        // Step 2: Decode to bytes
        match self.decode_bytes(format, input) {
            Ok(bytes) => {
                result.bytes = bytes;
                result.bytes_valid = true;
                result.error_message.clear();
                result.state = ConversionState::BytesDecoded;
            }
            Err(err) => {
                debug!(%format, error = %err, "input rejected");
                result.error_message = err.to_string();
                result.error = Some(err);
                result.state = ConversionState::BytesInvalid;
                return finish(format, input, result);
            }
        }

        // Step 3: Decode bytes as text
        match utf8::decode(&result.bytes) {
            Ok(text) => {
                result.text = text;
                result.text_valid = true;
                result.state = ConversionState::TextDecoded;
            }
            Err(_) => {
                result.state = ConversionState::TextInvalid;
                return finish(format, input, result);
            }
        }

        // Step 4: Segment code points
        result.code_points = utf8::segment_code_points(&result.text);
        result.state = ConversionState::CodePointsExtracted;

        finish(format, input, result)
    }
}

fn finish(format: SourceFormat, input: &str, result: ConversionResult) -> ConversionResult {
    debug!(
        %format,
        input_len = input.len(),
        bytes = result.bytes.len(),
        code_points = result.code_points.len(),
        state = ?result.state,
        "conversion finished"
    );
    result
}

/// Convert with default options.
///
/// # Examples
///
/// ```
/// use unibytes::{convert, SourceFormat};
///
/// let result = convert(SourceFormat::Text, "€");
/// assert_eq!(result.bytes, vec![0xE2, 0x82, 0xAC]);
/// assert_eq!(result.code_points[0].value(), 0x20AC);
/// ```
pub fn convert(format: SourceFormat, input: &str) -> ConversionResult {
    Converter::default().convert(format, input)
}
