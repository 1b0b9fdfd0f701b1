//! HTTP route modules
//!
//! Route handlers organized by upstream, plus the admission step every
//! proxied operation runs first.

pub mod coaching;
pub mod health;
pub mod speech;

use crate::server::state::AppState;
use crate::utils::error::GatewayError;
use tracing::warn;

/// Consult the rate limiter for one inbound operation.
///
/// Rejections become `rate_limited` responses carrying the wait hint; the
/// operation's validator only runs after admission.
pub(crate) async fn admit(state: &AppState, client_id: &str) -> Result<(), GatewayError> {
    let decision = state.rate_limiter.check(client_id).await;
    if decision.allowed {
        return Ok(());
    }

    warn!("Rate limit exceeded for client: {}", client_id);
    Err(GatewayError::RateLimited {
        retry_after_secs: decision.retry_after_secs.unwrap_or(1),
    })
}
