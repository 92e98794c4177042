//! Mock HTTP server setup for integration tests

#![allow(dead_code)]

use ai_inference_rust::ChatCompletionsClient;
use mockito::{Matcher, Server, ServerGuard};
use serde_json::json;

pub const DEFAULT_API_VERSION: &str = "2024-05-01-preview";

/// Test fixture that manages a mock server
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    /// Client pointed at the mock server with the given credential.
    pub fn client(&self, credential: &str) -> ChatCompletionsClient {
        ChatCompletionsClient::builder(self.base_url.as_str(), credential)
            .build()
            .expect("client should build against the mock server")
    }
}

/// Query matcher for the default `api-version`.
pub fn api_version_query() -> Matcher {
    Matcher::UrlEncoded("api-version".into(), DEFAULT_API_VERSION.into())
}

/// A minimal successful chat completions body.
pub fn chat_body(content: &str, prompt: u32, completion: u32) -> String {
    json!({
        "id": "cmpl-test",
        "object": "chat.completion",
        "created": 1718726686,
        "model": "TinyLlama/TinyLlama-1.1B-Chat-v1.0",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {
            "prompt_tokens": prompt,
            "completion_tokens": completion,
            "total_tokens": prompt + completion
        }
    })
    .to_string()
}
