//! Image Caption Client Library
//!
//! This library builds vision chat-completion requests, sends them over HTTP
//! and turns the responses into caption results.

pub mod client;
pub mod request;
pub mod response;

pub use client::CaptionClient;
pub use request::ChatRequest;
pub use response::{interpret, CaptionResult, TokenUsage};

/// Result type for caption-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for caption-client operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request failed with status {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Failed to decode JSON response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Response is missing {0}")]
    MissingData(&'static str),
}
