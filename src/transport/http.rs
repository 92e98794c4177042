use crate::client::KeyCredential;
use crate::error_class::ErrorClass;
use crate::{Error, ErrorContext, Result};
use reqwest::header::{HeaderMap, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use url::Url;
use uuid::Uuid;

/// Supported Azure AI Model Inference API versions.
pub const API_VERSIONS: &[&str] = &["2024-05-01-preview", "2025-04-01"];

/// Version sent when the caller does not pick one.
pub const DEFAULT_API_VERSION: &str = "2024-05-01-preview";

const CLIENT_REQUEST_ID_HEADER: &str = "x-ms-client-request-id";
const API_KEY_HEADER: &str = "api-key";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: Url,
    api_version: String,
    credential: KeyCredential,
}

impl HttpTransport {
    pub fn new(
        endpoint: &str,
        credential: KeyCredential,
        api_version: Option<&str>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        let endpoint = parse_endpoint(endpoint)?;
        let api_version = check_api_version(api_version.unwrap_or(DEFAULT_API_VERSION))?;

        let timeout = timeout.unwrap_or_else(|| {
            Duration::from_secs(
                env::var("AI_HTTP_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse::<u64>().ok())
                    .filter(|secs| *secs > 0)
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            )
        });

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        Ok(Self {
            client,
            endpoint,
            api_version,
            credential,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn credential(&self) -> &KeyCredential {
        &self.credential
    }

    /// Absolute URL for `route` under the endpoint, with `api-version` set.
    pub fn route_url(&self, route: &str) -> Result<Url> {
        let mut url = self.endpoint.clone();
        url.set_query(None);
        url.set_fragment(None);
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                Error::configuration_with_context(
                    format!("Endpoint '{}' cannot carry a path", self.endpoint),
                    ErrorContext::new()
                        .with_field_path("endpoint")
                        .with_source("http_transport"),
                )
            })?;
            segments
                .pop_if_empty()
                .extend(route.trim_start_matches('/').split('/'));
        }
        url.query_pairs_mut()
            .append_pair("api-version", &self.api_version);
        Ok(url)
    }

    /// POST a JSON body to `route` and decode the JSON reply.
    pub async fn post_json<B, T>(
        &self,
        route: &str,
        body: &B,
        headers: &[(&'static str, &'static str)],
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.route_url(route)?;
        let bytes = serde_json::to_vec(body)?;
        debug!(
            route,
            body = %String::from_utf8_lossy(&bytes),
            "serialized request body"
        );

        let mut request = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .body(bytes);
        for (name, value) in headers {
            request = request.header(*name, *value);
        }

        self.send(route, request).await
    }

    /// GET `route` and decode the JSON reply.
    pub async fn get_json<T: DeserializeOwned>(&self, route: &str) -> Result<T> {
        let url = self.route_url(route)?;
        let request = self.client.get(url);
        self.send(route, request).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        route: &str,
        mut request: reqwest::RequestBuilder,
    ) -> Result<T> {
        if !self.credential.is_empty() {
            request = request
                .header(AUTHORIZATION, format!("Bearer {}", self.credential.key()))
                .header(API_KEY_HEADER, self.credential.key());
        }

        let client_request_id = Uuid::new_v4().to_string();
        request = request
            .header("accept", "application/json")
            .header(CLIENT_REQUEST_ID_HEADER, client_request_id.as_str());

        let start = Instant::now();
        let resp = request
            .send()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        let status = resp.status().as_u16();
        let request_id = header_first(resp.headers(), &["apim-request-id", "x-request-id"]);

        if !resp.status().is_success() {
            let body = resp.text().await.unwrap_or_default();
            let (code, message) = parse_service_error(&body);
            let class = ErrorClass::classify(status, code.as_deref());
            warn!(
                http_status = status,
                error_class = class.name(),
                client_request_id = client_request_id.as_str(),
                request_id = request_id.as_deref().unwrap_or(""),
                route,
                duration_ms = start.elapsed().as_millis() as u64,
                "inference request failed"
            );
            return Err(Error::Remote {
                status,
                class,
                code,
                message,
            });
        }

        let bytes = resp
            .bytes()
            .await
            .map_err(|e| Error::Transport(TransportError::Http(e)))?;

        info!(
            http_status = status,
            client_request_id = client_request_id.as_str(),
            request_id = request_id.as_deref().unwrap_or(""),
            route,
            duration_ms = start.elapsed().as_millis() as u64,
            "inference request completed"
        );

        Ok(serde_json::from_slice(&bytes)?)
    }
}

fn header_first(headers: &HeaderMap, names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| {
        let value = headers.get(*name)?.to_str().ok()?.trim();
        (!value.is_empty()).then(|| value.to_string())
    })
}

/// Reference: https://github.com/microsoft/api-guidelines/blob/vNext/azure/Guidelines.md#handling-errors
#[derive(Deserialize)]
struct ServiceErrorBody {
    error: ServiceErrorDetail,
}

#[derive(Deserialize)]
struct ServiceErrorDetail {
    #[serde(default)]
    code: Option<serde_json::Value>,
    #[serde(default)]
    message: Option<String>,
}

/// Extract `(code, message)` from an error body; the raw body is the message otherwise.
fn parse_service_error(body: &str) -> (Option<String>, String) {
    match serde_json::from_str::<ServiceErrorBody>(body) {
        Ok(parsed) => {
            let code = parsed.error.code.and_then(|c| match c {
                serde_json::Value::String(s) => Some(s),
                serde_json::Value::Number(n) => Some(n.to_string()),
                _ => None,
            });
            let message = parsed.error.message.unwrap_or_else(|| body.to_string());
            (code, message)
        }
        Err(_) => (None, body.to_string()),
    }
}

/// Parse an endpoint address; a missing scheme defaults to `http`.
fn parse_endpoint(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{}", trimmed)
    };

    let context = || {
        ErrorContext::new()
            .with_field_path("endpoint")
            .with_source("http_transport")
    };

    let url = Url::parse(&candidate).map_err(|e| {
        Error::configuration_with_context(format!("Invalid endpoint '{}': {}", raw, e), context())
    })?;

    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(Error::configuration_with_context(
            format!("Unsupported endpoint '{}'", raw),
            context().with_details("expected an http or https URL"),
        ));
    }

    Ok(url)
}

/// Check that `api_version` is one the service accepts.
fn check_api_version(api_version: &str) -> Result<String> {
    if !API_VERSIONS.contains(&api_version) {
        return Err(Error::configuration_with_context(
            format!(
                "Unsupported api-version '{}'. The supported api-versions are '{}'.",
                api_version,
                API_VERSIONS.join(", ")
            ),
            ErrorContext::new()
                .with_field_path("api_version")
                .with_source("http_transport"),
        ));
    }
    Ok(api_version.to_string())
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

impl TransportError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, TransportError::Http(e) if e.is_timeout())
    }
}
