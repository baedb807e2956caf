//! Format-specific codecs.
//!
//! Each submodule converts between bytes (or text) and one representation:
//! - `hex`: whitespace-tolerant hex digits
//! - `base64`: RFC 4648 Base64 with MIME line wrapping
//! - `uri`: percent-encoded URI component text
//! - `utf8`: strict UTF-8 and code point segmentation

pub mod base64;
pub mod hex;
pub mod uri;
pub mod utf8;
