//! Sliding-window admission control
//!
//! Tracks request timestamps per client inside a trailing time window and
//! decides admit/reject ahead of every proxied operation.

mod limiter;
mod types;

#[cfg(test)]
mod tests;

// Re-export public types
pub use limiter::RateLimiter;
pub use types::RateLimitDecision;
