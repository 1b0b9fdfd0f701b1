//! HTTP server and route handlers

pub mod routes;
pub mod server;
pub mod state;
pub mod utils;

pub use server::HttpServer;
pub use state::AppState;
