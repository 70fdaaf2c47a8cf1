//! Chat-completion response decoding

use crate::{Error, Result};
use serde::Deserialize;

/// Response body of a chat-completion call
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub object: String,
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub system_fingerprint: Option<String>,
    #[serde(default)]
    pub choices: Vec<Choice>,
    #[serde(default)]
    pub usage: Usage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub index: u32,
    pub message: ResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
    #[serde(default)]
    pub logprobs: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub role: String,
    pub content: String,
}

/// Token accounting as reported by the API
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub prompt_tokens: u64,
    #[serde(default)]
    pub completion_tokens: u64,
    #[serde(default)]
    pub total_tokens: u64,
    #[serde(default)]
    pub prompt_tokens_details: Option<PromptTokensDetails>,
    #[serde(default)]
    pub completion_tokens_details: Option<CompletionTokensDetails>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PromptTokensDetails {
    #[serde(default)]
    pub cached_tokens: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompletionTokensDetails {
    #[serde(default)]
    pub text_tokens: u64,
}

/// Prompt, completion and total token counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenUsage {
    pub prompt: u64,
    pub completion: u64,
    pub total: u64,
}

/// Caption text and the tokens spent producing it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionResult {
    pub text: String,
    pub usage: TokenUsage,
}

/// Validates the status and decodes a response body into a caption.
///
/// Only 200 and 201 are accepted; any other status is reported with the raw
/// body and the body is not parsed.
pub fn interpret(status: u16, body: &[u8]) -> Result<CaptionResult> {
    if !matches!(status, 200 | 201) {
        return Err(Error::Http {
            status,
            body: String::from_utf8_lossy(body).into_owned(),
        });
    }

    let response: ApiResponse = serde_json::from_slice(body)?;

    let text = response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or(Error::MissingData("choices"))?;

    Ok(CaptionResult {
        text,
        usage: TokenUsage {
            prompt: response.usage.prompt_tokens,
            completion: response.usage.completion_tokens,
            total: response.usage.total_tokens,
        },
    })
}
