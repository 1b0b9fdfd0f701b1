//! ElevenLabs proxy endpoints for text-to-speech and speech-to-text
//!
//! Provides API access to the voice upstream without exposing credentials to
//! the client. Every operation runs admission control and validation before
//! the upstream call.

use crate::core::validation::{validate_stt_request, validate_tts_request};
use crate::providers::elevenlabs::{LANGUAGES, VoiceConfig, resolve_voice_id, voice_config};
use crate::server::routes::admit;
use crate::server::state::AppState;
use crate::server::utils::client_ip;
use crate::utils::error::GatewayError;
use actix_web::{HttpRequest, HttpResponse, web};
use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{error, info, warn};

/// Configure ElevenLabs proxy routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/elevenlabs")
            .route("/tts", web::post().to(text_to_speech))
            .route("/stt", web::post().to(speech_to_text))
            .route("/voices", web::get().to(list_voices))
            .route("/health", web::get().to(health_check)),
    );
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TtsResponse {
    audio: String,
    format: &'static str,
    duration_ms: u64,
}

#[derive(Debug, Serialize)]
struct SttResponse {
    transcript: String,
    confidence: f64,
    language: String,
}

#[derive(Debug, Deserialize)]
struct VoicesQuery {
    language: Option<String>,
}

/// Convert text to speech.
async fn text_to_speech(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<Value>,
) -> Result<HttpResponse, GatewayError> {
    let client_id = client_ip(&req);
    admit(&state, &client_id).await?;

    validate_tts_request(&body).map_err(|e| {
        warn!("Invalid TTS request from {}: {}", client_id, e);
        GatewayError::from(e)
    })?;

    let text = body.get("text").and_then(Value::as_str).unwrap_or_default();
    let language = optional_str(&body, "language").unwrap_or("en");
    let voice = voice_config(language);
    let voice_id = resolve_voice_id(voice, optional_str(&body, "voiceId"));

    info!(
        "TTS request: {} chars, voice={}, lang={}",
        text.chars().count(),
        voice_id,
        language
    );

    let audio = match state.elevenlabs.synthesize(text, voice_id, voice.model).await {
        Ok(bytes) => bytes,
        Err(e @ GatewayError::Config(_)) => return Err(e),
        Err(e) => {
            error!("ElevenLabs API error: {}", e);
            return Err(GatewayError::upstream("Text-to-speech conversion failed"));
        }
    };

    // Rough speech-rate estimate, ~10 chars per second
    let duration_ms = text.chars().count() as u64 * 100;

    Ok(HttpResponse::Ok().json(TtsResponse {
        audio: BASE64.encode(&audio),
        format: "mp3",
        duration_ms,
    }))
}

/// Convert speech to text.
async fn speech_to_text(
    state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Json<Value>,
) -> Result<HttpResponse, GatewayError> {
    let client_id = client_ip(&req);
    admit(&state, &client_id).await?;

    validate_stt_request(&body).map_err(|e| {
        warn!("Invalid STT request from {}: {}", client_id, e);
        GatewayError::from(e)
    })?;

    let audio_b64 = body.get("audio").and_then(Value::as_str).unwrap_or_default();
    let language = optional_str(&body, "language").unwrap_or("en");

    info!(
        "STT request: {} chars base64, lang={}",
        audio_b64.len(),
        language
    );

    let audio = BASE64.decode(audio_b64).map_err(|e| {
        error!("Failed to decode audio: {}", e);
        GatewayError::bad_request("Invalid base64 audio data")
    })?;

    let transcription = match state.elevenlabs.transcribe(audio, language).await {
        Ok(result) => result,
        Err(e @ GatewayError::Config(_)) => return Err(e),
        Err(e) => {
            error!("ElevenLabs STT API error: {}", e);
            return Err(GatewayError::upstream("Speech-to-text conversion failed"));
        }
    };

    Ok(HttpResponse::Ok().json(SttResponse {
        transcript: transcription.text,
        confidence: transcription.confidence,
        language: transcription.language,
    }))
}

/// Get available voices by language.
async fn list_voices(query: web::Query<VoicesQuery>) -> Result<HttpResponse, GatewayError> {
    if let Some(language) = query.language.as_deref() {
        if !LANGUAGES.contains(&language) {
            return Err(GatewayError::bad_request(format!(
                "Unsupported language: {}",
                language
            )));
        }
        return Ok(HttpResponse::Ok().json(json!({
            language: describe(voice_config(language)),
        })));
    }

    let mut catalog = serde_json::Map::new();
    for language in LANGUAGES {
        catalog.insert(language.to_string(), describe(voice_config(language)));
    }
    Ok(HttpResponse::Ok().json(Value::Object(catalog)))
}

/// Health check endpoint
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "elevenlabs-proxy",
    }))
}

fn describe(config: &VoiceConfig) -> Value {
    let names: Vec<&str> = config.available.iter().map(|(name, _)| *name).collect();
    json!({
        "default": config.default_voice,
        "available": names,
        "model": config.model,
    })
}

/// Optional string field, treating null and empty string as absent.
fn optional_str<'a>(body: &'a Value, field: &str) -> Option<&'a str> {
    body.get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}
