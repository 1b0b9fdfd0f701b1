//! Request-shape validation for proxied operations
//!
//! One pure entry point per operation kind, each checking a decoded request
//! body against its declared constraints in a fixed order. The first failing
//! rule wins; a call either fully passes or fails with exactly one outcome.

mod rules;


pub use rules::{
    validate_coaching_request, validate_review_request, validate_stt_request,
    validate_tts_request,
};

use crate::utils::error::{ErrorKind, GatewayError};
use actix_web::http::StatusCode;
use std::fmt;

/// Maximum accepted text length for speech synthesis, in characters
pub const MAX_TEXT_LENGTH: usize = 5000;

/// Maximum accepted decoded audio size for transcription (10 MiB)
pub const MAX_AUDIO_SIZE_BYTES: usize = 10 * 1024 * 1024;

/// Languages the voice and coaching pipelines support
pub const SUPPORTED_LANGUAGES: [&str; 4] = ["en", "es", "de", "ru"];

/// Structured rejection produced by a validator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Taxonomy category the rejection maps to
    pub kind: ErrorKind,
    /// Names the failing field and constraint
    pub message: String,
}

impl ValidationError {
    pub(crate) fn bad_request<S: Into<String>>(message: S) -> Self {
        Self {
            kind: ErrorKind::BadRequest,
            message: message.into(),
        }
    }

    /// HTTP status the rejection maps to
    pub fn http_status(&self) -> StatusCode {
        self.kind.http_status()
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for GatewayError {
    fn from(err: ValidationError) -> Self {
        match err.kind {
            ErrorKind::Unauthorized => GatewayError::Unauthorized(err.message),
            ErrorKind::ServerError => GatewayError::Internal(err.message),
            _ => GatewayError::BadRequest(err.message),
        }
    }
}
