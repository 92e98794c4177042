//! Chat completions request and response payloads.
//!
//! Reference: https://learn.microsoft.com/en-us/rest/api/aifoundry/model-inference/get-chat-completions/get-chat-completions

use super::message::{ChatRequestMessage, ChatResponseMessage};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Body of `POST /chat/completions`.
///
/// Unset optional fields are left out of the JSON so the service applies its own
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletionsOptions {
    /// ID of the model to use, if more than one model is available on the endpoint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Conversation turns, sent in this exact order.
    pub messages: Vec<ChatRequestMessage>,

    /// Maximum number of tokens to generate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,

    /// Sampling temperature, range [0, 1].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,

    /// Nucleus sampling probability mass, range [0, 1].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,

    /// Penalty on tokens already present in the text, range [-2, 2].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f32>,

    /// Penalty proportional to token frequency so far, range [-2, 2].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f32>,

    /// Best-effort deterministic sampling seed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,

    /// Sequences that end generation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,

    /// Parameters outside the API schema, forwarded to the model as top-level fields.
    /// A non-empty map makes the client send `extra-parameters: pass-through`.
    #[serde(flatten, default)]
    pub model_extras: BTreeMap<String, serde_json::Value>,
}

impl ChatCompletionsOptions {
    pub fn new(messages: Vec<ChatRequestMessage>) -> Self {
        Self {
            model: None,
            messages,
            max_tokens: None,
            temperature: None,
            top_p: None,
            presence_penalty: None,
            frequency_penalty: None,
            seed: None,
            stop: None,
            model_extras: BTreeMap::new(),
        }
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn max_tokens(mut self, max: u32) -> Self {
        self.max_tokens = Some(max);
        self
    }

    pub fn temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }

    pub fn top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    pub fn presence_penalty(mut self, penalty: f32) -> Self {
        self.presence_penalty = Some(penalty);
        self
    }

    pub fn frequency_penalty(mut self, penalty: f32) -> Self {
        self.frequency_penalty = Some(penalty);
        self
    }

    pub fn seed(mut self, seed: i64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn stop(mut self, stop: Vec<String>) -> Self {
        self.stop = Some(stop);
        self
    }

    pub fn model_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.model_extras.insert(key.into(), value);
        self
    }
}

/// Body returned by `POST /chat/completions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatCompletions {
    #[serde(default)]
    pub id: Option<String>,
    /// Unix timestamp (seconds).
    #[serde(default)]
    pub created: Option<i64>,
    #[serde(default)]
    pub model: Option<String>,
    pub choices: Vec<ChatChoice>,
    pub usage: CompletionsUsage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub index: u32,
    pub message: ChatResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Token accounting for one completion request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionsUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

/// Renders as a key-sorted mapping, the same text the Python SDK prints for a usage
/// object: `{'completion_tokens': 3, 'prompt_tokens': 5, 'total_tokens': 8}`.
impl fmt::Display for CompletionsUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{'completion_tokens': {}, 'prompt_tokens': {}, 'total_tokens': {}}}",
            self.completion_tokens, self.prompt_tokens, self.total_tokens
        )
    }
}
