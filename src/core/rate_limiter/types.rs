//! Rate limiter types and data structures

use std::time::Instant;

/// Outcome of one admission check
#[derive(Debug, Clone)]
pub struct RateLimitDecision {
    /// Whether the request is admitted
    pub allowed: bool,
    /// Requests still admittable in the current window after this check
    pub remaining: u32,
    /// When the oldest counted request falls out of the window
    pub reset_at: Instant,
    /// Seconds to wait before retrying (only set when not allowed, never zero)
    pub retry_after_secs: Option<u64>,
}

/// Per-client admission history inside the trailing window
///
/// Timestamps are kept oldest-first; entries older than the window are purged
/// lazily on each check. The sequence length never exceeds the configured
/// limit.
#[derive(Debug, Default)]
pub(super) struct ClientWindow {
    pub(super) timestamps: Vec<Instant>,
}
