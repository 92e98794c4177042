//! Embeddings support on the same endpoint family.
//!
//! This module provides:
//! - [`EmbeddingsClient`] for `POST /embeddings`
//! - Types for embedding requests and responses

mod client;
mod types;

pub use client::{EmbeddingsClient, EmbeddingsClientBuilder};
pub use types::{
    EmbeddingEncodingFormat, EmbeddingInputType, EmbeddingItem, EmbeddingVector, EmbeddingsOptions,
    EmbeddingsResult, EmbeddingsUsage,
};
