//! Image Caption Core Library
//!
//! This library provides the data structures shared by the encoder, the
//! request client and the CLI: image assets with their declared format,
//! the byte-size budget, and data URI construction.

pub mod asset;
pub mod budget;
pub mod data_uri;

pub use asset::{ImageAsset, ImageFormat};
pub use budget::SizeBudget;
pub use data_uri::wrap;

/// Result type for caption-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for caption-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported image format: {0:?}")]
    UnsupportedFormat(String),

    #[error("Failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("Failed to encode image: {0}")]
    Encode(#[source] image::ImageError),

    #[error("Unable to compress image to {budget} bytes or less")]
    BudgetExceeded { budget: u64 },
}
