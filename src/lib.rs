//! # Voice Coach Gateway
//!
//! Backend proxy for ElevenLabs TTS/STT and Gemini coaching generation.
//! Every proxied operation passes through the admission-control core first:
//! a concurrent sliding-window rate limiter keyed by client identity and a
//! request-shape validation pipeline with deterministic, typed outcomes.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use voicecoach_gateway::{Config, server::HttpServer};
//!
//! #[tokio::main]
//! async fn main() -> voicecoach_gateway::Result<()> {
//!     let config = Config::load().await?;
//!     HttpServer::new(config)?.start().await
//! }
//! ```

#![warn(clippy::all)]

// Public module exports
pub mod config;
pub mod core;
pub mod providers;
pub mod server;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::rate_limiter::{RateLimitDecision, RateLimiter};
pub use core::validation::{
    ValidationError, validate_coaching_request, validate_review_request, validate_stt_request,
    validate_tts_request,
};
pub use utils::error::{ErrorKind, GatewayError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
