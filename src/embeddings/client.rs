//! Embeddings client for generating embeddings.

use super::types::{EmbeddingsOptions, EmbeddingsResult};
use crate::client::core::EXTRA_PARAMETERS_HEADER;
use crate::client::KeyCredential;
use crate::transport::HttpTransport;
use crate::{Error, ErrorContext, Result};
use std::sync::Arc;
use std::time::Duration;
use url::Url;

const EMBEDDINGS_ROUTE: &str = "embeddings";

/// HTTP client for the `/embeddings` route.
#[derive(Clone)]
pub struct EmbeddingsClient {
    transport: Arc<HttpTransport>,
    model: Option<String>,
    dimensions: Option<u32>,
}

impl EmbeddingsClient {
    /// Start configuring a client for `endpoint`; `credential` may be empty.
    pub fn builder(
        endpoint: impl Into<String>,
        credential: impl Into<KeyCredential>,
    ) -> EmbeddingsClientBuilder {
        EmbeddingsClientBuilder::new(endpoint, credential)
    }

    /// Embed every string in `options.input`; client defaults fill unset fields.
    pub async fn embed(&self, mut options: EmbeddingsOptions) -> Result<EmbeddingsResult> {
        if options.input.is_empty() {
            return Err(Error::validation_with_context(
                "embeddings request needs at least one input",
                ErrorContext::new()
                    .with_field_path("options.input")
                    .with_source("embeddings"),
            ));
        }
        if options.model.is_none() {
            options.model = self.model.clone();
        }
        if options.dimensions.is_none() {
            options.dimensions = self.dimensions;
        }

        let headers: &[(&'static str, &'static str)] = if options.model_extras.is_empty() {
            &[]
        } else {
            &[(EXTRA_PARAMETERS_HEADER, "pass-through")]
        };
        self.transport
            .post_json(EMBEDDINGS_ROUTE, &options, headers)
            .await
    }

    pub fn endpoint(&self) -> &Url {
        self.transport.endpoint()
    }

    pub fn credential(&self) -> &KeyCredential {
        self.transport.credential()
    }

    pub fn api_version(&self) -> &str {
        self.transport.api_version()
    }

    /// Model used when a request does not name one.
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }
}

pub struct EmbeddingsClientBuilder {
    endpoint: String,
    credential: KeyCredential,
    api_version: Option<String>,
    model: Option<String>,
    dimensions: Option<u32>,
    timeout: Option<Duration>,
}

impl EmbeddingsClientBuilder {
    pub fn new(endpoint: impl Into<String>, credential: impl Into<KeyCredential>) -> Self {
        Self {
            endpoint: endpoint.into(),
            credential: credential.into(),
            api_version: None,
            model: None,
            dimensions: None,
            timeout: None,
        }
    }

    pub fn api_version(mut self, version: impl Into<String>) -> Self {
        self.api_version = Some(version.into());
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn dimensions(mut self, dimensions: u32) -> Self {
        self.dimensions = Some(dimensions);
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<EmbeddingsClient> {
        let transport = HttpTransport::new(
            &self.endpoint,
            self.credential,
            self.api_version.as_deref(),
            self.timeout,
        )?;
        tracing::debug!(
            endpoint = %transport.endpoint(),
            api_version = transport.api_version(),
            "embeddings client configured"
        );
        Ok(EmbeddingsClient {
            transport: Arc::new(transport),
            model: self.model,
            dimensions: self.dimensions,
        })
    }
}
