//! Chat completions client for the Azure AI Model Inference API.
//!
//! Keep the public surface small: one capability trait, one HTTP implementation and
//! its builder. Implementation details are split into submodules under `src/client/`.

pub mod builder;
pub mod core;
pub mod credential;
mod validation;

pub use builder::ChatCompletionsClientBuilder;
pub use self::core::{ChatCompletionsApi, ChatCompletionsClient};
pub use credential::KeyCredential;
