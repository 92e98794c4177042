//! Explicit client configuration.
//!
//! [`ClientConfig::default`] holds the values the samples use (a local, unauthenticated
//! endpoint). [`ClientConfig::from_env`] layers environment overrides on top for
//! callers that want to point the same code at a real deployment:
//!
//! - `AZURE_AI_ENDPOINT`
//! - `AZURE_AI_CREDENTIAL`
//! - `AZURE_AI_MODEL`
//! - `AZURE_AI_API_VERSION`
//! - `AI_HTTP_TIMEOUT_SECS`

use crate::client::{ChatCompletionsClientBuilder, KeyCredential};
use crate::transport::DEFAULT_API_VERSION;
use std::env;
use std::time::Duration;

pub const LOCAL_ENDPOINT: &str = "http://localhost";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub endpoint: String,
    pub credential: KeyCredential,
    pub model: Option<String>,
    pub api_version: String,
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: LOCAL_ENDPOINT.to_string(),
            credential: KeyCredential::default(),
            model: None,
            api_version: DEFAULT_API_VERSION.to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Defaults overridden by whichever variables are set in the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(endpoint) = lookup("AZURE_AI_ENDPOINT") {
            config.endpoint = endpoint;
        }
        // Present-but-empty is a deliberate "no credential".
        if let Some(credential) = lookup("AZURE_AI_CREDENTIAL") {
            config.credential = KeyCredential::new(credential);
        }
        config.model = lookup("AZURE_AI_MODEL").filter(|m| !m.trim().is_empty());
        if let Some(version) = lookup("AZURE_AI_API_VERSION").filter(|v| !v.trim().is_empty()) {
            config.api_version = version;
        }
        config.timeout = lookup("AI_HTTP_TIMEOUT_SECS")
            .and_then(|s| s.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);
        config
    }

    pub fn into_builder(self) -> ChatCompletionsClientBuilder {
        let mut builder = ChatCompletionsClientBuilder::new(self.endpoint, self.credential)
            .api_version(self.api_version);
        if let Some(model) = self.model {
            builder = builder.model(model);
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder
    }
}
