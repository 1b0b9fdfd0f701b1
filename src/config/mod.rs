//! Configuration management for the gateway
//!
//! Handles loading, validation, and defaulting of all gateway configuration.
//! Environment variables always win over the optional YAML file.

pub mod models;

pub use models::*;

use crate::utils::error::{GatewayError, Result};
use std::env;
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the gateway
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Admission-control settings
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
    /// ElevenLabs provider settings
    #[serde(default)]
    pub elevenlabs: ElevenLabsConfig,
    /// Gemini provider settings
    #[serde(default)]
    pub gemini: GeminiConfig,
}

impl Config {
    /// Load configuration: optional YAML file (`CONFIG_PATH`, default
    /// `config/gateway.yaml`), then environment overrides, then validation.
    pub async fn load() -> Result<Self> {
        let path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config/gateway.yaml".to_string());

        let mut config = if Path::new(&path).exists() {
            Self::parse_file(Path::new(&path)).await?
        } else {
            debug!("No config file at {:?}, using defaults", path);
            Self::default()
        };

        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Self::parse_file(path.as_ref()).await?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;
        config.validate()?;
        Ok(config)
    }

    async fn parse_file(path: &Path) -> Result<Self> {
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GatewayError::Config(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| GatewayError::Config(format!("Failed to parse config: {}", e)))?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    fn apply_env(&mut self) -> Result<()> {
        if let Ok(host) = env::var("HOST") {
            self.server.host = host;
        }
        if let Ok(port) = env::var("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| GatewayError::Config(format!("Invalid PORT value: {}", port)))?;
        }
        if let Ok(origins) = env::var("CORS_ORIGINS") {
            self.server.cors_origins = origins
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect();
        }

        if let Ok(limit) = env::var("RATE_LIMIT_REQUESTS_PER_MINUTE") {
            self.rate_limit.requests_per_window = limit.parse().map_err(|_| {
                GatewayError::Config(format!(
                    "Invalid RATE_LIMIT_REQUESTS_PER_MINUTE value: {}",
                    limit
                ))
            })?;
        }
        if let Ok(window) = env::var("RATE_LIMIT_WINDOW_SECONDS") {
            self.rate_limit.window_seconds = window.parse().map_err(|_| {
                GatewayError::Config(format!("Invalid RATE_LIMIT_WINDOW_SECONDS value: {}", window))
            })?;
        }

        if let Ok(key) = env::var("ELEVENLABS_API_KEY") {
            self.elevenlabs.api_key = key;
        }
        if let Ok(url) = env::var("ELEVENLABS_BASE_URL") {
            self.elevenlabs.base_url = url;
        }

        if let Ok(key) = env::var("GEMINI_API_KEY") {
            self.gemini.api_key = key;
        }
        if let Ok(url) = env::var("GEMINI_BASE_URL") {
            self.gemini.base_url = url;
        }
        if let Ok(model) = env::var("GEMINI_MODEL") {
            self.gemini.model = model;
        }

        Ok(())
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(GatewayError::Config(
                "Server port must be non-zero".to_string(),
            ));
        }
        if self.rate_limit.requests_per_window == 0 {
            return Err(GatewayError::Config(
                "Rate limit must be a positive integer".to_string(),
            ));
        }
        if self.rate_limit.window_seconds == 0 {
            return Err(GatewayError::Config(
                "Rate limit window must be a positive number of seconds".to_string(),
            ));
        }
        Ok(())
    }
}
