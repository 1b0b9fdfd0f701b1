//! Service info and health endpoints

use actix_web::{HttpResponse, web};
use serde_json::json;

/// Configure root and health routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(root_info))
        .route("/health", web::get().to(health_check));
}

/// Root endpoint with API info
async fn root_info() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "name": "Voice Coach Gateway",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "elevenlabs": "/elevenlabs",
            "gemini": "/gemini",
        },
    }))
}

/// Global health check endpoint
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "voicecoach-gateway",
        "timestamp": chrono::Utc::now(),
    }))
}
