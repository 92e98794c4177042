//! 类型模块：定义聊天补全请求与响应的载荷类型。
//!
//! # Types Module
//!
//! Strongly typed payloads for the chat completions and model-info routes.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ChatRequestMessage`] | One conversation turn sent to the service |
//! | [`ChatCompletionsOptions`] | The generation request (messages, limits, sampling) |
//! | [`ChatCompletions`] | The generation response (choices and usage) |
//! | [`CompletionsUsage`] | Token accounting for one request |
//! | [`ModelInfo`] | What `GET /info` reports about the deployed model |
//!
//! ## Example
//!
//! ```rust
//! use ai_inference_rust::types::{ChatCompletionsOptions, ChatRequestMessage};
//!
//! let options = ChatCompletionsOptions::new(vec![
//!     ChatRequestMessage::system("You are a helpful assistant."),
//!     ChatRequestMessage::user("How many feet are in a mile?"),
//! ])
//! .max_tokens(256);
//!
//! let body = serde_json::to_value(&options).unwrap();
//! assert_eq!(body["messages"][0]["role"], "system");
//! assert_eq!(body["max_tokens"], 256);
//! ```

pub mod completions;
pub mod message;
pub mod model_info;

pub use completions::{ChatChoice, ChatCompletions, ChatCompletionsOptions, CompletionsUsage};
pub use message::{ChatRequestMessage, ChatResponseMessage, ChatRole};
pub use model_info::{ModelInfo, ModelType};
