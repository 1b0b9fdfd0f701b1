//! ElevenLabs API client
//!
//! Outbound calls for text-to-speech and speech-to-text. Credentials never
//! reach the requesting client; upstream failures surface as `server_error`
//! taxonomy outcomes at the handler boundary.

use crate::config::ElevenLabsConfig;
use crate::utils::error::{GatewayError, Result};
use reqwest::{Client, ClientBuilder, multipart};
use serde_json::{Value, json};
use std::time::Duration;
use tracing::{debug, error};

/// Transcription result from speech-to-text
#[derive(Debug, Clone)]
pub struct Transcription {
    /// Recognized text
    pub text: String,
    /// Recognition confidence, defaulted when the API omits it
    pub confidence: f64,
    /// Language the audio was transcribed as
    pub language: String,
}

/// ElevenLabs API client
#[derive(Debug, Clone)]
pub struct ElevenLabsClient {
    config: ElevenLabsConfig,
    http: Client,
}

impl ElevenLabsClient {
    /// Create a new client with the configured timeouts
    pub fn new(config: ElevenLabsConfig) -> Result<Self> {
        let http = ClientBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| GatewayError::internal(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, http })
    }

    fn api_key(&self) -> Result<&str> {
        if self.config.api_key.is_empty() {
            error!("ELEVENLABS_API_KEY not configured");
            return Err(GatewayError::Config(
                "ElevenLabs API key missing".to_string(),
            ));
        }
        Ok(&self.config.api_key)
    }

    /// Convert text to speech, returning raw audio bytes (mp3).
    pub async fn synthesize(&self, text: &str, voice_id: &str, model_id: &str) -> Result<Vec<u8>> {
        let api_key = self.api_key()?;
        let url = format!("{}/v1/text-to-speech/{}", self.config.base_url, voice_id);

        debug!("ElevenLabs TTS request: voice={}, model={}", voice_id, model_id);

        let response = self
            .http
            .post(&url)
            .header("xi-api-key", api_key)
            .json(&json!({
                "text": text,
                "model_id": model_id,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::upstream(format!(
                "ElevenLabs TTS returned {}: {}",
                status, body
            )));
        }

        Ok(response.bytes().await?.to_vec())
    }

    /// Convert speech to text.
    pub async fn transcribe(&self, audio: Vec<u8>, language: &str) -> Result<Transcription> {
        let api_key = self.api_key()?;
        let url = format!("{}/v1/speech-to-text", self.config.base_url);

        debug!("ElevenLabs STT request: {} bytes, lang={}", audio.len(), language);

        let form = multipart::Form::new()
            .text("model_id", "scribe_v1")
            .text("language_code", language.to_string())
            .part("file", multipart::Part::bytes(audio).file_name("audio.webm"));

        let response = self
            .http
            .post(&url)
            .header("xi-api-key", api_key)
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GatewayError::upstream(format!(
                "ElevenLabs STT returned {}: {}",
                status, body
            )));
        }

        let payload: Value = response.json().await?;
        let text = payload
            .get("text")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let confidence = payload
            .get("language_probability")
            .and_then(Value::as_f64)
            .unwrap_or(0.9);

        Ok(Transcription {
            text,
            confidence,
            language: language.to_string(),
        })
    }
}
