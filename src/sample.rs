//! The sample invocation behind the `azure-foundry-inference` and
//! `default-model-inference` binaries.
//!
//! One request, two printed lines, no retries: any error from the client is returned
//! to `main` untouched and nothing is written to the output.

use crate::client::{ChatCompletionsApi, ChatCompletionsClient};
use crate::config::LOCAL_ENDPOINT;
use crate::types::{ChatCompletions, ChatCompletionsOptions, ChatRequestMessage};
use crate::{Error, ErrorContext, Result};
use std::io::Write;

pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";
pub const USER_PROMPT: &str = "How many feet are in a mile?";
pub const SAMPLE_MODEL: &str = "TinyLlama/TinyLlama-1.1B-Chat-v1.0";

/// The two shipped samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleVariant {
    /// Names the model explicitly, up to 256 tokens.
    AzureFoundry,
    /// Lets the service pick its configured model, up to 128 tokens.
    DefaultModel,
}

impl SampleVariant {
    pub fn model(&self) -> Option<&'static str> {
        match self {
            SampleVariant::AzureFoundry => Some(SAMPLE_MODEL),
            SampleVariant::DefaultModel => None,
        }
    }

    pub fn max_tokens(&self) -> u32 {
        match self {
            SampleVariant::AzureFoundry => 256,
            SampleVariant::DefaultModel => 128,
        }
    }

    /// The fixed request: system turn, then user turn, then the token bound.
    pub fn options(&self) -> ChatCompletionsOptions {
        let options = ChatCompletionsOptions::new(vec![
            ChatRequestMessage::system(SYSTEM_PROMPT),
            ChatRequestMessage::user(USER_PROMPT),
        ])
        .max_tokens(self.max_tokens());

        match self.model() {
            Some(model) => options.model(model),
            None => options,
        }
    }
}

/// Client bound to the local, unauthenticated endpoint.
pub fn local_client() -> Result<ChatCompletionsClient> {
    ChatCompletionsClient::builder(LOCAL_ENDPOINT, "").build()
}

/// `<reply>\n\nToken usage: <usage>\n`, from the first choice.
pub fn render(response: &ChatCompletions) -> Result<String> {
    let choice = response.choices.first().ok_or_else(|| {
        Error::validation_with_context(
            "response contained no choices",
            ErrorContext::new()
                .with_field_path("choices")
                .with_source("sample"),
        )
    })?;

    Ok(format!(
        "{}\n\nToken usage: {}\n",
        choice.message.text(),
        response.usage
    ))
}

/// Send the sample request through `api` and write the rendered reply to `out`.
pub async fn run<A, W>(api: &A, variant: SampleVariant, out: &mut W) -> Result<()>
where
    A: ChatCompletionsApi + ?Sized,
    W: Write,
{
    let response = api.complete(variant.options()).await?;
    let rendered = render(&response)?;
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}

/// Log to stderr so stdout carries only the sample output. `RUST_LOG` overrides the
/// default `warn` level.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChatRole;

    #[test]
    fn variants_differ_only_in_model_and_limit() {
        let foundry = SampleVariant::AzureFoundry.options();
        let default = SampleVariant::DefaultModel.options();

        assert_eq!(foundry.model.as_deref(), Some(SAMPLE_MODEL));
        assert_eq!(foundry.max_tokens, Some(256));
        assert_eq!(default.model, None);
        assert_eq!(default.max_tokens, Some(128));
        assert_eq!(foundry.messages, default.messages);

        let roles: Vec<ChatRole> = foundry.messages.iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![ChatRole::System, ChatRole::User]);
    }

    #[test]
    fn local_client_keeps_empty_credential() {
        let client = local_client().unwrap();
        assert_eq!(client.credential().key(), "");
        assert_eq!(client.endpoint().as_str(), "http://localhost/");
    }
}
