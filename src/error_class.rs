//! 远端错误分类：根据 HTTP 状态码与服务端错误码归类失败原因。
//!
//! Classification of remote failures.
//!
//! The inference service reports failures as an HTTP status plus an optional
//! `{"error": {"code": ..., "message": ...}}` body. [`ErrorClass`] folds both into
//! one small, stable set so callers can branch on the kind of failure without
//! parsing strings. Classification is informational: the client never retries.
//!
//! ## Example
//!
//! ```rust
//! use ai_inference_rust::ErrorClass;
//!
//! let class = ErrorClass::classify(429, None);
//! assert_eq!(class.name(), "rate_limited");
//! assert_eq!(class.category(), "rate");
//!
//! // A recognised service code wins over the status.
//! let class = ErrorClass::classify(400, Some("UnsupportedApiVersionValue"));
//! assert_eq!(class, ErrorClass::InvalidRequest);
//! ```

use serde::Serialize;
use std::fmt;

/// Kind of remote failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorClass {
    /// Malformed request, invalid parameters, or missing/unsupported api-version
    InvalidRequest,
    /// Invalid, expired, or missing credential
    Authentication,
    /// Valid credential but insufficient permissions
    PermissionDenied,
    /// Requested model, deployment, or route does not exist
    NotFound,
    /// Input exceeds the context window or payload size limit
    RequestTooLarge,
    /// Request rate or token quota exceeded
    RateLimited,
    /// Internal server error on the service side
    ServerError,
    /// Service temporarily unavailable
    Overloaded,
    /// Request timed out before a response was received
    Timeout,
    /// State conflict
    Conflict,
    /// Error could not be classified
    Unknown,
}

impl ErrorClass {
    /// Returns the standard name (e.g., `"invalid_request"`).
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::Authentication => "authentication",
            Self::PermissionDenied => "permission_denied",
            Self::NotFound => "not_found",
            Self::RequestTooLarge => "request_too_large",
            Self::RateLimited => "rate_limited",
            Self::ServerError => "server_error",
            Self::Overloaded => "overloaded",
            Self::Timeout => "timeout",
            Self::Conflict => "conflict",
            Self::Unknown => "unknown",
        }
    }

    /// Returns the category: `"client"`, `"rate"`, `"server"`, `"operational"`, or `"unknown"`.
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidRequest
            | Self::Authentication
            | Self::PermissionDenied
            | Self::NotFound
            | Self::RequestTooLarge => "client",
            Self::RateLimited => "rate",
            Self::ServerError | Self::Overloaded | Self::Timeout => "server",
            Self::Conflict => "operational",
            Self::Unknown => "unknown",
        }
    }

    /// Maps a service error code to an [`ErrorClass`].
    ///
    /// Accepts the PascalCase codes of the Azure error guidelines (`"Unauthorized"`,
    /// `"MissingApiVersionParameter"`) as well as the snake_case codes returned by
    /// OpenAI-compatible backends (`"invalid_api_key"`, `"context_length_exceeded"`).
    pub fn from_service_code(code: &str) -> Option<Self> {
        let class = match code {
            "BadRequest"
            | "InvalidRequest"
            | "MissingApiVersionParameter"
            | "UnsupportedApiVersionValue"
            | "invalid_request"
            | "invalid_request_error" => Self::InvalidRequest,
            "Unauthorized" | "InvalidAuthenticationToken" | "invalid_api_key"
            | "authentication_error" => Self::Authentication,
            "Forbidden" | "PermissionDenied" | "permission_error" => Self::PermissionDenied,
            "NotFound" | "DeploymentNotFound" | "ModelNotFound" | "model_not_found" => {
                Self::NotFound
            }
            "RequestEntityTooLarge" | "context_length_exceeded" => Self::RequestTooLarge,
            "TooManyRequests" | "RateLimitExceeded" | "rate_limit_exceeded"
            | "insufficient_quota" => Self::RateLimited,
            "InternalServerError" | "InternalProxyParsing" | "server_error" => {
                Self::ServerError
            }
            "ServiceUnavailable" | "overloaded" => Self::Overloaded,
            "Timeout" | "RequestTimeout" | "timeout" => Self::Timeout,
            "Conflict" | "conflict" => Self::Conflict,
            _ => return None,
        };
        Some(class)
    }

    /// Maps an HTTP status code to the most likely [`ErrorClass`].
    pub fn from_http_status(status: u16) -> Self {
        match status {
            400 | 422 => Self::InvalidRequest,
            401 => Self::Authentication,
            403 => Self::PermissionDenied,
            404 => Self::NotFound,
            408 | 504 => Self::Timeout,
            409 => Self::Conflict,
            413 => Self::RequestTooLarge,
            429 => Self::RateLimited,
            502 | 503 => Self::Overloaded,
            500..=599 => Self::ServerError,
            _ => Self::Unknown,
        }
    }

    /// Classify a failed response; a recognised service code takes precedence.
    pub fn classify(status: u16, code: Option<&str>) -> Self {
        code.and_then(Self::from_service_code)
            .unwrap_or_else(|| Self::from_http_status(status))
    }
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
