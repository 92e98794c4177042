use crate::client::core::ChatCompletionsClient;
use crate::client::credential::KeyCredential;
use crate::transport::HttpTransport;
use crate::Result;
use std::sync::Arc;
use std::time::Duration;

/// Builder for [`ChatCompletionsClient`].
///
/// Keep this surface area small and predictable: endpoint and credential are required,
/// everything else has a default.
pub struct ChatCompletionsClientBuilder {
    endpoint: String,
    credential: KeyCredential,
    api_version: Option<String>,
    model: Option<String>,
    timeout: Option<Duration>,
}

impl ChatCompletionsClientBuilder {
    pub fn new(endpoint: impl Into<String>, credential: impl Into<KeyCredential>) -> Self {
        Self {
            endpoint: endpoint.into(),
            credential: credential.into(),
            api_version: None,
            model: None,
            timeout: None,
        }
    }

    /// Pin the `api-version` query parameter (default `2024-05-01-preview`).
    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    /// Model sent with requests that do not set one.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Whole-request timeout.
    ///
    /// Defaults to `AI_HTTP_TIMEOUT_SECS` when set, 30 seconds otherwise.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<ChatCompletionsClient> {
        let transport = HttpTransport::new(
            &self.endpoint,
            self.credential,
            self.api_version.as_deref(),
            self.timeout,
        )?;

        tracing::debug!(
            endpoint = %transport.endpoint(),
            api_version = transport.api_version(),
            authenticated = !transport.credential().is_empty(),
            "built chat completions client"
        );

        Ok(ChatCompletionsClient {
            transport: Arc::new(transport),
            default_model: self.model,
        })
    }
}
