//! HTTP transport shared by the chat completions and embeddings clients.

mod http;

pub use http::{HttpTransport, TransportError, API_VERSIONS, DEFAULT_API_VERSION};
