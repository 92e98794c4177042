//! Chat completion against a local Azure AI Model Inference endpoint, naming the model.
//!
//! Usage:
//!   cargo run --bin azure-foundry-inference
//!
//! Prints the reply, a blank line, and the token usage. Any failure (connection
//! refused, auth, malformed reply) ends the process with a non-zero status.

use ai_inference_rust::sample::{self, SampleVariant};

#[tokio::main]
async fn main() -> ai_inference_rust::Result<()> {
    sample::init_tracing();

    let client = sample::local_client()?;
    sample::run(&client, SampleVariant::AzureFoundry, &mut std::io::stdout()).await
}
