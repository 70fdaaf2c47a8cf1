//! Image Caption Encoder Library
//!
//! This library re-encodes images until they fit under a byte-size budget.

pub mod fitter;
pub mod jpeg_encoder;
pub mod png_encoder;

pub use caption_core::{Error, Result};
pub use fitter::fit;
pub use jpeg_encoder::JPEG_QUALITY_LADDER;
pub use png_encoder::{PngSettings, PNG_COMPRESSION_LADDER};
