//! Request helpers shared by route handlers

use actix_web::HttpRequest;

/// Resolve the client identity used as the rate-limit key.
///
/// First entry of `X-Forwarded-For` when present, else the direct peer
/// address, else the `"unknown"` sentinel. The identity is caller-supplied,
/// not verified.
pub fn client_ip(req: &HttpRequest) -> String {
    if let Some(forwarded) = req.headers().get("x-forwarded-for") {
        if let Ok(value) = forwarded.to_str() {
            if let Some(first) = value.split(',').next() {
                let first = first.trim();
                if !first.is_empty() {
                    return first.to_string();
                }
            }
        }
    }

    req.peer_addr()
        .map(|addr| addr.ip().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
