//! Conversion facade and display rendering.
//!
//! - `facade`: the bytes → text → code points pipeline
//! - `render`: pure display views of a finished result

pub mod facade;
pub mod render;

pub use facade::{convert, Converter, ConverterBuilder, ConverterOptions};
pub use render::unicode_string;
