//! # ai-inference-rust
//!
//! 面向 Azure AI Model Inference 兼容端点的聊天补全客户端与示例程序。
//!
//! Typed client for chat-completion endpoints that speak the Azure AI Model
//! Inference API, plus the two sample programs that exercise it.
//!
//! ## Overview
//!
//! The service owns the model, the protocol and every policy around it (timeouts,
//! throttling, content filtering). This crate only builds the documented JSON
//! payloads, sends them over HTTP with the mandatory `api-version` query parameter,
//! and parses the replies into strongly typed values.
//!
//! The client is a capability object: [`ChatCompletionsApi`] has one method per
//! remote operation, and [`ChatCompletionsClient`] implements it over HTTP. All
//! configuration (endpoint, credential, api-version) is passed explicitly through
//! [`ChatCompletionsClientBuilder`]; there is no global state.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ai_inference_rust::{ChatCompletionsApi, ChatCompletionsClient, ChatCompletionsOptions, ChatRequestMessage};
//!
//! #[tokio::main]
//! async fn main() -> ai_inference_rust::Result<()> {
//!     let client = ChatCompletionsClient::builder("http://localhost", "").build()?;
//!
//!     let response = client
//!         .complete(
//!             ChatCompletionsOptions::new(vec![
//!                 ChatRequestMessage::system("You are a helpful assistant."),
//!                 ChatRequestMessage::user("How many feet are in a mile?"),
//!             ])
//!             .max_tokens(256),
//!         )
//!         .await?;
//!
//!     println!("{}", response.choices[0].message.text());
//!     println!("\nToken usage: {}", response.usage);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | Chat completions client, builder and credential |
//! | [`embeddings`] | Embeddings client on the same endpoint family |
//! | [`types`] | Request/response payloads (messages, completions, model info) |
//! | [`transport`] | HTTP transport shared by the clients |
//! | [`config`] | Explicit client configuration with optional env overrides |
//! | [`sample`] | The sample invocation used by the binaries |
//! | [`error_class`] | Classification of remote failures |

pub mod client;
pub mod config;
pub mod embeddings;
pub mod error_class;
pub mod sample;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{ChatCompletionsApi, ChatCompletionsClient, ChatCompletionsClientBuilder, KeyCredential};
pub use config::ClientConfig;
pub use error_class::ErrorClass;
pub use types::{
    completions::{ChatChoice, ChatCompletions, ChatCompletionsOptions, CompletionsUsage},
    message::{ChatRequestMessage, ChatResponseMessage, ChatRole},
    model_info::{ModelInfo, ModelType},
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
