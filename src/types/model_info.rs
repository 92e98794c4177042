use serde::{Deserialize, Serialize};

/// Represents some basic information about the AI model.
/// Reference: https://learn.microsoft.com/en-us/rest/api/aifoundry/model-inference/get-model-info/get-model-info
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    /// The name of the AI model. For example: Phi21
    pub model_name: String,

    /// The type of the AI model.
    pub model_type: ModelType,

    /// The model provider name. For example: Microsoft
    pub model_provider_name: String,
}

/// The type of AI model. Types the service adds later are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ModelType {
    /// A model capable of taking chat-formatted messages and generate responses
    ChatCompletion,

    /// A model capable of generating embeddings from a text
    Embeddings,

    Other(String),
}

impl ModelType {
    pub fn as_str(&self) -> &str {
        match self {
            ModelType::ChatCompletion => "chat-completion",
            ModelType::Embeddings => "embeddings",
            ModelType::Other(s) => s,
        }
    }
}

impl From<String> for ModelType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "chat-completion" => ModelType::ChatCompletion,
            "embeddings" => ModelType::Embeddings,
            _ => ModelType::Other(value),
        }
    }
}

impl From<ModelType> for String {
    fn from(value: ModelType) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_info_body() {
        let info: ModelInfo = serde_json::from_str(
            r#"{"model_name": "TinyLlama-1.1B-Chat-v1.0", "model_type": "chat-completion", "model_provider_name": "TinyLlama"}"#,
        )
        .unwrap();
        assert_eq!(info.model_type, ModelType::ChatCompletion);
        assert_eq!(info.model_provider_name, "TinyLlama");
    }

    #[test]
    fn unknown_model_type_is_preserved() {
        let t: ModelType = serde_json::from_str(r#""image-generation""#).unwrap();
        assert_eq!(t, ModelType::Other("image-generation".into()));
        assert_eq!(serde_json::to_string(&t).unwrap(), r#""image-generation""#);
    }

    #[test]
    fn near_miss_names_keep_their_spelling() {
        for raw in ["chat", "chat_completion"] {
            let t: ModelType = serde_json::from_value(serde_json::json!(raw)).unwrap();
            assert_eq!(t, ModelType::Other(raw.into()));
            assert_eq!(serde_json::to_value(&t).unwrap(), serde_json::json!(raw));
        }
    }
}
