//! HTTP server core implementation

use crate::config::{Config, ServerConfig};
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{GatewayError, Result};
use actix_cors::Cors;
use actix_web::{App, HttpServer as ActixHttpServer, web};
use tracing::info;
use tracing_actix_web::TracingLogger;

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Create a new HTTP server
    pub fn new(config: Config) -> Result<Self> {
        info!("Creating HTTP server");

        let server_config = config.server.clone();
        let state = AppState::new(config)?;

        Ok(Self {
            config: server_config,
            state,
        })
    }

    /// Start the HTTP server
    pub async fn start(self) -> Result<()> {
        let bind_addr = format!("{}:{}", self.config.host, self.config.port);

        info!("Starting HTTP server on {}", bind_addr);

        let state = web::Data::new(self.state);
        let cors_origins = self.config.cors_origins.clone();

        let server = ActixHttpServer::new(move || {
            let mut cors = Cors::default()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);
            if cors_origins.iter().any(|origin| origin == "*") {
                cors = cors.allow_any_origin();
            } else {
                for origin in &cors_origins {
                    cors = cors.allowed_origin(origin);
                }
            }

            // Body cap above the validator's 10 MiB audio limit plus base64
            // overhead, so oversized payloads get the validator's outcome
            let json_config = web::JsonConfig::default()
                .limit(16 * 1024 * 1024)
                .error_handler(|err, _req| {
                    GatewayError::bad_request(err.to_string()).into()
                });

            App::new()
                .app_data(state.clone())
                .app_data(json_config)
                .wrap(cors)
                .wrap(TracingLogger::default())
                .configure(routes::health::configure_routes)
                .configure(routes::speech::configure_routes)
                .configure(routes::coaching::configure_routes)
        })
        .bind(&bind_addr)
        .map_err(|e| GatewayError::Config(format!("Failed to bind {}: {}", bind_addr, e)))?
        .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| GatewayError::internal(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        Ok(())
    }

    /// Get server configuration
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get application state
    pub fn state(&self) -> &AppState {
        &self.state
    }
}
