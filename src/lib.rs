//! unibytes - strict conversions between bytes and their textual forms
//!
//! This crate converts user input in one of several representations into a
//! byte buffer, then derives every other view of those bytes in one pass.
//!
//! # Features
//!
//! - **Hex**: whitespace-tolerant decoding, uppercase space-separated encoding
//! - **Base64**: standard RFC 4648 alphabet, strict padding rules, 76-column wrap
//! - **URI**: percent-encoding with the `encodeURIComponent` unreserved set
//! - **UTF-8**: strict validation, no lossy substitution
//! - **Code points**: one entry per Unicode scalar value, surrogate pairs joined
//!
//! # Quick Start
//!
//! ```
//! use unibytes::{convert, SourceFormat};
//!
//! let result = convert(SourceFormat::Hex, "48 65 6C 6C 6F");
//! assert!(result.bytes_valid && result.text_valid);
//! assert_eq!(result.text, "Hello");
//! assert_eq!(result.base64_view(), "SGVsbG8=");
//!
//! // Binary data is valid bytes but not text.
//! let binary = convert(SourceFormat::Hex, "FF FE");
//! assert!(binary.bytes_valid);
//! assert!(!binary.text_valid);
//!
//! // Malformed input is reported, never panics.
//! let bad = convert(SourceFormat::Hex, "ABC");
//! assert!(!bad.bytes_valid);
//! println!("{}", bad.error_message);
//! ```
//!
//! # Pipeline
//!
//! | Stage | Runs when | Failure means |
//! |-------|-----------|---------------|
//! | input → bytes | always | `bytes_valid = false`, `error_message` set |
//! | bytes → text | bytes decoded | `text_valid = false`, no error |
//! | text → code points | text decoded | cannot fail |
//!
//! # Error Handling
//!
//! The individual codecs return `Result<T, CodecError>`. The facade folds
//! those errors into validity flags on [`ConversionResult`].

pub use codec::{base64, hex, uri, utf8};
pub use convert::{convert, unicode_string, Converter, ConverterBuilder, ConverterOptions};
pub use error::{CodecError, FormatParseError};
pub use types::{CodePoint, ConversionResult, ConversionState, SourceFormat};

pub mod codec;
pub mod convert;
pub mod error;
pub mod types;
