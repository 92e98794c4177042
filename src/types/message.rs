//! Conversation turns exchanged with the service.

use serde::{Deserialize, Serialize};

/// A single turn sent to the service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequestMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatRequestMessage {
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: text.into(),
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: text.into(),
        }
    }
}

/// Message role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// The generated turn inside a choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponseMessage {
    pub role: ChatRole,
    /// Null when the model produced no text (e.g. a content-filtered reply).
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatResponseMessage {
    /// Generated text, empty when the service returned none.
    pub fn text(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_message_wire_shape() {
        let json = serde_json::to_value(ChatRequestMessage::user("hi")).unwrap();
        assert_eq!(json, serde_json::json!({"role": "user", "content": "hi"}));
    }

    #[test]
    fn null_content_reads_as_empty_text() {
        let msg: ChatResponseMessage =
            serde_json::from_str(r#"{"role": "assistant", "content": null}"#).unwrap();
        assert_eq!(msg.role, ChatRole::Assistant);
        assert_eq!(msg.text(), "");
    }
}
