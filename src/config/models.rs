//! Configuration models

use serde::{Deserialize, Serialize};

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
    /// Allowed CORS origins; `*` allows any origin
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: default_cors_origins(),
        }
    }
}

/// Rate limiting configuration
///
/// Immutable per-limiter settings; set at construction, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Maximum admitted requests per window
    #[serde(default = "default_requests_per_window")]
    pub requests_per_window: u32,
    /// Window length in seconds
    #[serde(default = "default_window_seconds")]
    pub window_seconds: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            requests_per_window: default_requests_per_window(),
            window_seconds: default_window_seconds(),
        }
    }
}

/// ElevenLabs provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElevenLabsConfig {
    /// API key; operations fail with `server_error` at request time when empty
    #[serde(default)]
    pub api_key: String,
    /// API base URL
    #[serde(default = "default_elevenlabs_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for ElevenLabsConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_elevenlabs_base_url(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

/// Gemini provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiConfig {
    /// API key; operations fall back to canned copy when generation fails
    #[serde(default)]
    pub api_key: String,
    /// API base URL
    #[serde(default = "default_gemini_base_url")]
    pub base_url: String,
    /// Model id used for coaching generation
    #[serde(default = "default_gemini_model")]
    pub model: String,
    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_gemini_base_url(),
            model: default_gemini_model(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_requests_per_window() -> u32 {
    100
}

fn default_window_seconds() -> u64 {
    60
}

fn default_elevenlabs_base_url() -> String {
    "https://api.elevenlabs.io".to_string()
}

fn default_gemini_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_gemini_model() -> String {
    "gemini-2.0-flash-001".to_string()
}

fn default_request_timeout() -> u64 {
    30
}
