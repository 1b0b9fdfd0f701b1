//! Core rate limiter implementation

use super::types::{ClientWindow, RateLimitDecision};
use crate::config::RateLimitConfig;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;

/// Sliding-window rate limiter keyed by client identity.
///
/// Stores one timestamp per admitted request inside the trailing window, so
/// a burst straddling a bucket boundary can never double the effective limit.
/// The per-client sequence is bounded by the limit itself.
pub struct RateLimiter {
    /// Rate limit configuration
    config: RateLimitConfig,
    /// Admission history by client id (forwarded address or peer address)
    entries: Arc<RwLock<HashMap<String, ClientWindow>>>,
    /// Window duration
    window: Duration,
}

impl RateLimiter {
    /// Create a new rate limiter with the window length from the config
    pub fn new(config: RateLimitConfig) -> Self {
        let window = Duration::from_secs(config.window_seconds);
        Self {
            config,
            entries: Arc::new(RwLock::new(HashMap::new())),
            window,
        }
    }

    /// Create a rate limiter with a custom window (test hook)
    pub fn with_window(config: RateLimitConfig, window: Duration) -> Self {
        Self {
            config,
            entries: Arc::new(RwLock::new(HashMap::new())),
            window,
        }
    }

    /// Check whether a request from `client_id` is admitted, recording it if so.
    ///
    /// Purge, decision, and record happen under a single lock acquisition;
    /// two concurrent callers can never both observe the same count and
    /// jointly exceed the limit. Unknown client ids are created with an
    /// empty history.
    pub async fn check(&self, client_id: &str) -> RateLimitDecision {
        let now = Instant::now();
        let limit = self.config.requests_per_window;

        let mut entries = self.entries.write().await;
        let entry = entries.entry(client_id.to_string()).or_default();

        // Drop timestamps at or before the window start
        if let Some(window_start) = now.checked_sub(self.window) {
            entry.timestamps.retain(|&t| t > window_start);
        }

        let count = entry.timestamps.len() as u32;

        if count >= limit {
            let reset_at = entry
                .timestamps
                .first()
                .map(|&oldest| oldest + self.window)
                .unwrap_or(now + self.window);
            debug!(
                "Rate limit exceeded for {}: {}/{} requests",
                client_id, count, limit
            );
            return RateLimitDecision {
                allowed: false,
                remaining: 0,
                reset_at,
                retry_after_secs: Some(retry_after_secs(reset_at, now)),
            };
        }

        entry.timestamps.push(now);
        let reset_at = entry
            .timestamps
            .first()
            .map(|&oldest| oldest + self.window)
            .unwrap_or(now + self.window);

        RateLimitDecision {
            allowed: true,
            remaining: limit - count - 1,
            reset_at,
            retry_after_secs: None,
        }
    }

    /// Clear one client's history. Idempotent on unknown ids.
    pub async fn reset(&self, client_id: &str) {
        self.entries.write().await.remove(client_id);
    }

    /// Clear all client histories (test isolation and administrative reset)
    pub async fn reset_all(&self) {
        self.entries.write().await.clear();
    }

    /// Get the configured limit
    pub fn limit(&self) -> u32 {
        self.config.requests_per_window
    }

    /// Get the window duration
    pub fn window(&self) -> Duration {
        self.window
    }
}

impl Clone for RateLimiter {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            entries: self.entries.clone(),
            window: self.window,
        }
    }
}

/// Whole seconds until `reset_at`, rounded up and floored at 1 so a rejected
/// client is never told to retry immediately.
fn retry_after_secs(reset_at: Instant, now: Instant) -> u64 {
    let wait = reset_at.saturating_duration_since(now);
    let mut secs = wait.as_secs();
    if wait.subsec_nanos() > 0 {
        secs += 1;
    }
    secs.max(1)
}
