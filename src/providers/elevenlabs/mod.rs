//! ElevenLabs provider: voice catalog and TTS/STT client

mod client;
mod voices;

pub use client::{ElevenLabsClient, Transcription};
pub use voices::{LANGUAGES, VoiceConfig, resolve_voice_id, voice_config};
