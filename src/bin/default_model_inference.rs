//! Chat completion against a local endpoint, leaving the model choice to the service.
//!
//! Usage:
//!   cargo run --bin default-model-inference

use ai_inference_rust::sample::{self, SampleVariant};

#[tokio::main]
async fn main() -> ai_inference_rust::Result<()> {
    sample::init_tracing();

    let client = sample::local_client()?;
    sample::run(&client, SampleVariant::DefaultModel, &mut std::io::stdout()).await
}
