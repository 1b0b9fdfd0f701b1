//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::core::rate_limiter::RateLimiter;
use crate::providers::elevenlabs::ElevenLabsClient;
use crate::providers::gemini::GeminiClient;
use crate::utils::error::Result;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// The rate limiter is process-scoped state constructed once here and passed
/// by reference to every handler; there is no global limiter lookup. All
/// fields are wrapped in Arc for cheap sharing across workers.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration (shared read-only)
    pub config: Arc<Config>,
    /// Admission-control limiter
    pub rate_limiter: Arc<RateLimiter>,
    /// ElevenLabs TTS/STT client
    pub elevenlabs: Arc<ElevenLabsClient>,
    /// Gemini coaching client
    pub gemini: Arc<GeminiClient>,
}

impl AppState {
    /// Create a new AppState with shared resources
    pub fn new(config: Config) -> Result<Self> {
        let rate_limiter = Arc::new(RateLimiter::new(config.rate_limit.clone()));
        let elevenlabs = Arc::new(ElevenLabsClient::new(config.elevenlabs.clone())?);
        let gemini = Arc::new(GeminiClient::new(config.gemini.clone())?);

        Ok(Self {
            config: Arc::new(config),
            rate_limiter,
            elevenlabs,
            gemini,
        })
    }
}
