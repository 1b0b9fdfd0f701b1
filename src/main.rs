//! Voice-coach gateway binary
//!
//! Backend proxy service fronting the ElevenLabs and Gemini upstreams.

use std::process::ExitCode;
use tracing_subscriber::EnvFilter;
use voicecoach_gateway::config::Config;
use voicecoach_gateway::server::HttpServer;

#[tokio::main]
async fn main() -> ExitCode {
    // Environment first, so LOG_LEVEL and keys from .env are visible
    dotenvy::dotenv().ok();

    // Initialize logging system
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> voicecoach_gateway::Result<()> {
    let config = Config::load().await?;
    HttpServer::new(config)?.start().await
}
