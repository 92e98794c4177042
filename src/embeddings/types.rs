//! Embedding types and data structures.
//!
//! Reference: https://learn.microsoft.com/en-us/rest/api/aifoundry/model-inference/get-embeddings/get-embeddings

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Represents the input types used for embedding search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingInputType {
    /// A general text input.
    Text,
    /// A search query used to find relevant documents.
    Query,
    /// A document stored in a vector database.
    Document,
}

/// Wire format of the returned vectors. The compressed formats trade precision for storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingEncodingFormat {
    /// Packed binary, returned as a base64 string.
    Base64,
    /// Signed binary.
    Binary,
    /// Full precision.
    Float,
    /// Signed int8.
    Int8,
    /// Unsigned binary.
    UBinary,
    /// Unsigned int8.
    UInt8,
}

/// Body of `POST /embeddings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingsOptions {
    pub input: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    /// Number of dimensions of the output embeddings, when the model supports it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub encoding_format: Option<EmbeddingEncodingFormat>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_type: Option<EmbeddingInputType>,

    /// Model-specific fields outside the API schema. A non-empty map makes the client send
    /// `extra-parameters: pass-through`.
    #[serde(flatten, default)]
    pub model_extras: BTreeMap<String, serde_json::Value>,
}

impl EmbeddingsOptions {
    pub fn new(input: Vec<String>) -> Self {
        Self {
            input,
            model: None,
            dimensions: None,
            encoding_format: None,
            input_type: None,
            model_extras: BTreeMap::new(),
        }
    }

    pub fn single(text: impl Into<String>) -> Self {
        Self::new(vec![text.into()])
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn dimensions(mut self, dimensions: u32) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    pub fn encoding_format(mut self, format: EmbeddingEncodingFormat) -> Self {
        self.encoding_format = Some(format);
        self
    }

    pub fn input_type(mut self, input_type: EmbeddingInputType) -> Self {
        self.input_type = Some(input_type);
        self
    }

    pub fn model_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.model_extras.insert(key.into(), value);
        self
    }
}

/// One returned vector: numbers for the numeric formats, a string for `base64`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmbeddingVector {
    Numbers(Vec<f32>),
    Encoded(String),
}

/// A single embedding vector, positioned by `index` in the request input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingItem {
    pub index: usize,
    pub embedding: EmbeddingVector,
}

impl EmbeddingItem {
    pub fn as_slice(&self) -> Option<&[f32]> {
        match &self.embedding {
            EmbeddingVector::Numbers(values) => Some(values),
            EmbeddingVector::Encoded(_) => None,
        }
    }

    /// Element count of a numeric vector; `None` for base64 payloads.
    pub fn dimensions(&self) -> Option<usize> {
        self.as_slice().map(<[f32]>::len)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddingsUsage {
    pub prompt_tokens: u32,
    pub total_tokens: u32,
}

/// Body returned by `POST /embeddings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmbeddingsResult {
    #[serde(default)]
    pub id: Option<String>,
    pub data: Vec<EmbeddingItem>,
    #[serde(default)]
    pub model: Option<String>,
    pub usage: EmbeddingsUsage,
}

impl EmbeddingsResult {
    /// Numeric vectors sorted by input position. Base64 items are skipped.
    pub fn vectors(&self) -> Vec<&[f32]> {
        let mut items: Vec<&EmbeddingItem> = self.data.iter().collect();
        items.sort_by_key(|item| item.index);
        items.into_iter().filter_map(EmbeddingItem::as_slice).collect()
    }
}
