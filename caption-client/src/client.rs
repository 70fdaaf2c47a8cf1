//! Blocking HTTP transport for chat-completion calls

use crate::{interpret, CaptionResult, ChatRequest, Result};
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use std::time::Duration;
use tracing::debug;

/// Sends caption requests to a chat-completion endpoint
#[derive(Debug, Clone)]
pub struct CaptionClient {
    http: Client,
    url: String,
    api_key: String,
}

impl CaptionClient {
    /// Creates a client for `url` authenticating with a bearer token
    pub fn new(url: &str, api_key: &str, timeout: Duration) -> Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            url: url.to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Endpoint this client posts to
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Posts the request and interprets the response.
    ///
    /// The body is read to the end before interpretation; the response is
    /// dropped on every return path.
    pub fn caption(&self, request: &ChatRequest) -> Result<CaptionResult> {
        let body = serde_json::to_vec(request)?;
        debug!(url = %self.url, model = %request.model, bytes = body.len(), "sending caption request");

        let response = self
            .http
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
            .body(body)
            .send()?;

        let status = response.status().as_u16();
        let bytes = response.bytes()?;
        debug!(status, bytes = bytes.len(), "received caption response");

        interpret(status, &bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use httpmock::prelude::*;
    use serde_json::json;

    fn request() -> ChatRequest {
        ChatRequest::caption("qwen-vl-plus", "Describe", "data:image/jpeg;base64,AAAA".to_string())
    }

    fn client(server: &MockServer) -> CaptionClient {
        CaptionClient::new(&server.url("/v1/chat/completions"), "sk-test", Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn posts_json_with_bearer_token() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/v1/chat/completions")
                .header("authorization", "Bearer sk-test")
                .header("content-type", "application/json")
                .json_body(serde_json::to_value(request()).unwrap());
            then.status(200).json_body(json!({
                "id": "chatcmpl-1",
                "object": "chat.completion",
                "created": 1,
                "model": "qwen-vl-plus",
                "choices": [{
                    "index": 0,
                    "message": { "role": "assistant", "content": "A cat on a sofa." },
                    "finish_reason": "stop"
                }],
                "usage": { "prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15 }
            }));
        });

        let result = client(&server).caption(&request()).unwrap();
        mock.assert();
        assert_eq!(result.text, "A cat on a sofa.");
        assert_eq!(result.usage.total, 15);
    }

    #[test]
    fn rate_limit_surfaces_status_and_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/v1/chat/completions");
            then.status(429).body("Too Many Requests");
        });

        match client(&server).caption(&request()) {
            Err(Error::Http { status, body }) => {
                assert_eq!(status, 429);
                assert_eq!(body, "Too Many Requests");
            }
            other => panic!("expected Http error, got {other:?}"),
        }
    }

    #[test]
    fn unreachable_endpoint_is_transport_error() {
        let client = CaptionClient::new("http://127.0.0.1:9/", "sk-test", Duration::from_secs(2)).unwrap();
        assert!(matches!(client.caption(&request()), Err(Error::Transport(_))));
    }
}
