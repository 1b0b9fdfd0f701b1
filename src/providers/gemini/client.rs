//! Gemini API client
//!
//! Single-candidate text generation against the `generateContent` endpoint.
//! Callers treat any failure as a signal to fall back to canned copy.

use crate::config::GeminiConfig;
use crate::utils::error::{GatewayError, Result};
use reqwest::{Client, ClientBuilder};
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, error};

/// Gemini API client
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    http: Client,
}

impl GeminiClient {
    /// Create a new client with the configured timeouts
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let http = ClientBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| GatewayError::internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, http })
    }

    /// Generate text for a prompt, trimmed of surrounding whitespace.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        if self.config.api_key.is_empty() {
            error!("GEMINI_API_KEY not configured");
            return Err(GatewayError::Config("Gemini API key missing".to_string()));
        }

        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        );

        debug!("Gemini request: model={}, {} prompt chars", self.config.model, prompt.len());

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&json!({
                "contents": [{
                    "parts": [{ "text": prompt }]
                }]
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::upstream(format!(
                "Gemini returned {}: {}",
                status, body
            )));
        }

        let payload: Value = response.json().await?;
        let text = payload
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                GatewayError::upstream("Gemini response missing generated text".to_string())
            })?;

        Ok(text.trim().to_string())
    }
}
