use crate::client::builder::ChatCompletionsClientBuilder;
use crate::client::credential::KeyCredential;
use crate::client::validation::validate_chat_options;
use crate::transport::HttpTransport;
use crate::types::{ChatCompletions, ChatCompletionsOptions, ModelInfo};
use crate::Result;
use async_trait::async_trait;
use std::sync::Arc;
use url::Url;

const CHAT_COMPLETIONS_ROUTE: &str = "chat/completions";
const INFO_ROUTE: &str = "info";

/// Header telling the service what to do with fields outside the API schema.
pub(crate) const EXTRA_PARAMETERS_HEADER: &str = "extra-parameters";

/// Remote operations of a chat-completion service.
///
/// [`ChatCompletionsClient`] implements this over HTTP; tests and callers that need a
/// different backend implement it directly.
#[async_trait]
pub trait ChatCompletionsApi: Send + Sync {
    /// Run one chat completion. Resolves once the full response has arrived.
    async fn complete(&self, options: ChatCompletionsOptions) -> Result<ChatCompletions>;

    /// Describe the model deployed behind the endpoint.
    async fn get_model_info(&self) -> Result<ModelInfo>;
}

/// HTTP client for the `/chat/completions` and `/info` routes.
#[derive(Clone)]
pub struct ChatCompletionsClient {
    pub(crate) transport: Arc<HttpTransport>,
    pub(crate) default_model: Option<String>,
}

impl ChatCompletionsClient {
    /// Start configuring a client for `endpoint`; `credential` may be empty.
    pub fn builder(
        endpoint: impl Into<String>,
        credential: impl Into<KeyCredential>,
    ) -> ChatCompletionsClientBuilder {
        ChatCompletionsClientBuilder::new(endpoint, credential)
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
    pub fn default_model(&self) -> Option<&str> {
        self.default_model.as_deref()
    }
}

#[async_trait]
impl ChatCompletionsApi for ChatCompletionsClient {
    async fn complete(&self, mut options: ChatCompletionsOptions) -> Result<ChatCompletions> {
        if options.model.is_none() {
            options.model = self.default_model.clone();
        }
        validate_chat_options(&options)?;

        let headers: &[(&'static str, &'static str)] = if options.model_extras.is_empty() {
            &[]
        } else {
            &[(EXTRA_PARAMETERS_HEADER, "pass-through")]
        };

        self.transport
            .post_json(CHAT_COMPLETIONS_ROUTE, &options, headers)
            .await
    }

    async fn get_model_info(&self) -> Result<ModelInfo> {
        self.transport.get_json(INFO_ROUTE).await
    }
}
