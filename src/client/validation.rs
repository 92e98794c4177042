//! Request validation performed before anything goes on the wire.

use crate::types::ChatCompletionsOptions;
use crate::{Error, ErrorContext, Result};

pub(crate) fn validate_chat_options(options: &ChatCompletionsOptions) -> Result<()> {
    if options.messages.is_empty() {
        return Err(Error::validation_with_context(
            "chat completions request needs at least one message",
            ErrorContext::new()
                .with_field_path("options.messages")
                .with_source("request_validator"),
        ));
    }

    if options.max_tokens == Some(0) {
        return Err(Error::validation_with_context(
            "max_tokens must be a positive integer",
            ErrorContext::new()
                .with_field_path("options.max_tokens")
                .with_details("got 0")
                .with_source("request_validator"),
        ));
    }

    Ok(())
}
