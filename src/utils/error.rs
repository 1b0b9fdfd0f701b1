//! Error handling for the gateway
//!
//! Defines the error taxonomy shared by the admission-control core and the
//! HTTP layer, and the mapping from internal errors to wire responses.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

/// Result type alias for the gateway
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Closed set of caller-visible failure categories.
///
/// Every error that reaches the wire is tagged with one of these kinds; the
/// kind determines the HTTP status and the machine-readable `code` field of
/// the error body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed, missing, or out-of-range input; the client must fix and resend
    BadRequest,
    /// Credential failure (produced by collaborators, reserved here)
    Unauthorized,
    /// Admission denied; the client should wait `retry_after` seconds
    RateLimited,
    /// Configuration or upstream provider failure
    ServerError,
}

impl ErrorKind {
    /// Wire tag for the `code` field of error responses
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::BadRequest => "bad_request",
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::RateLimited => "rate_limited",
            ErrorKind::ServerError => "server_error",
        }
    }

    /// HTTP status the kind maps to
    pub fn http_status(&self) -> StatusCode {
        match self {
            ErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            ErrorKind::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Main error type for the gateway
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid request input
    #[error("{0}")]
    BadRequest(String),

    /// Credential failures
    #[error("{0}")]
    Unauthorized(String),

    /// Admission denied by the rate limiter
    #[error("Too many requests")]
    RateLimited {
        /// Seconds the client should wait before retrying
        retry_after_secs: u64,
    },

    /// Upstream provider failure
    #[error("{0}")]
    Upstream(String),

    /// HTTP client errors
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal server errors
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl GatewayError {
    /// Taxonomy kind this error surfaces as
    pub fn kind(&self) -> ErrorKind {
        match self {
            GatewayError::BadRequest(_) => ErrorKind::BadRequest,
            GatewayError::Unauthorized(_) => ErrorKind::Unauthorized,
            GatewayError::RateLimited { .. } => ErrorKind::RateLimited,
            _ => ErrorKind::ServerError,
        }
    }

    pub fn bad_request<S: Into<String>>(message: S) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn upstream<S: Into<String>>(message: S) -> Self {
        Self::Upstream(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }
}

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        self.kind().http_status()
    }

    fn error_response(&self) -> HttpResponse {
        let kind = self.kind();

        // Internal detail stays in the logs; the wire carries the taxonomy
        // message the client can act on.
        let message = match self {
            GatewayError::RateLimited { .. } => "Too many requests".to_string(),
            GatewayError::BadRequest(msg)
            | GatewayError::Unauthorized(msg)
            | GatewayError::Upstream(msg) => msg.clone(),
            GatewayError::Config(_) => "Service not configured".to_string(),
            _ => "An internal error occurred".to_string(),
        };

        let retry_after = match self {
            GatewayError::RateLimited { retry_after_secs } => Some(*retry_after_secs),
            _ => None,
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: kind.as_str().to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
                retry_after,
            },
        };

        let mut builder = HttpResponse::build(kind.http_status());
        if let Some(secs) = retry_after {
            builder.insert_header(("Retry-After", secs.to_string()));
        }
        builder.json(error_response)
    }
}

/// Standard error response format
#[derive(serde::Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(serde::Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<u64>,
}
