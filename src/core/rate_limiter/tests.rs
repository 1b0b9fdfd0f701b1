//! Tests for the rate limiter

#[cfg(test)]
mod tests {
    use super::super::limiter::RateLimiter;
    use crate::config::RateLimitConfig;
    use std::sync::Arc;
    use std::time::Duration;

    fn test_config(limit: u32) -> RateLimitConfig {
        RateLimitConfig {
            requests_per_window: limit,
            window_seconds: 60,
        }
    }

    #[tokio::test]
    async fn test_allows_within_limit() {
        let limiter = RateLimiter::new(test_config(10));

        for i in 0..10 {
            let decision = limiter.check("test-client").await;
            assert!(decision.allowed, "Request {} should be allowed", i);
        }
    }

    #[tokio::test]
    async fn test_blocks_over_limit() {
        let limiter = RateLimiter::new(test_config(5));

        for _ in 0..5 {
            let decision = limiter.check("test-client").await;
            assert!(decision.allowed);
        }

        let decision = limiter.check("test-client").await;
        assert!(!decision.allowed);
        assert_eq!(decision.remaining, 0);
        assert!(decision.retry_after_secs.unwrap() >= 1);
    }

    #[tokio::test]
    async fn test_remaining_counts_down() {
        let limiter = RateLimiter::new(test_config(5));

        for expected in [4, 3, 2, 1, 0] {
            let decision = limiter.check("x").await;
            assert!(decision.allowed);
            assert_eq!(decision.remaining, expected);
        }

        let decision = limiter.check("x").await;
        assert!(!decision.allowed);
        assert!(decision.retry_after_secs.unwrap() >= 1);
    }

    #[tokio::test]
    async fn test_clients_are_independent() {
        let limiter = RateLimiter::new(test_config(2));

        limiter.check("client-a").await;
        limiter.check("client-a").await;

        // client-a exhausted
        let decision = limiter.check("client-a").await;
        assert!(!decision.allowed);

        // client-b unaffected, full limit available
        let decision = limiter.check("client-b").await;
        assert!(decision.allowed);
        assert_eq!(decision.remaining, 1);
    }

    #[tokio::test]
    async fn test_reset_restores_full_limit() {
        let limiter = RateLimiter::new(test_config(3));

        for _ in 0..3 {
            limiter.check("client").await;
        }
        assert!(!limiter.check("client").await.allowed);

        limiter.reset("client").await;

        let decision = limiter.check("client").await;
        assert!(decision.allowed);
        assert_eq!(decision.remaining, 2);
    }

    #[tokio::test]
    async fn test_reset_unknown_client_is_noop() {
        let limiter = RateLimiter::new(test_config(3));

        limiter.reset("never-seen").await;

        let decision = limiter.check("never-seen").await;
        assert!(decision.allowed);
        assert_eq!(decision.remaining, 2);
    }

    #[tokio::test]
    async fn test_reset_all() {
        let limiter = RateLimiter::new(test_config(1));

        limiter.check("a").await;
        limiter.check("b").await;
        assert!(!limiter.check("a").await.allowed);
        assert!(!limiter.check("b").await.allowed);

        limiter.reset_all().await;

        assert!(limiter.check("a").await.allowed);
        assert!(limiter.check("b").await.allowed);
    }

    #[tokio::test]
    async fn test_window_expiry_readmits() {
        let limiter = RateLimiter::with_window(test_config(2), Duration::from_millis(50));

        assert!(limiter.check("client").await.allowed);
        assert!(limiter.check("client").await.allowed);
        assert!(!limiter.check("client").await.allowed);

        tokio::time::sleep(Duration::from_millis(100)).await;

        let decision = limiter.check("client").await;
        assert!(decision.allowed);
        assert_eq!(decision.remaining, 1);
    }

    #[tokio::test]
    async fn test_retry_after_positive_for_subsecond_wait() {
        // Window far below one second: the remaining wait rounds up, never 0
        let limiter = RateLimiter::with_window(test_config(1), Duration::from_millis(50));

        assert!(limiter.check("client").await.allowed);
        let decision = limiter.check("client").await;
        assert!(!decision.allowed);
        assert_eq!(decision.retry_after_secs, Some(1));
    }

    #[tokio::test]
    async fn test_first_check_reset_at_is_one_window_out() {
        let limiter = RateLimiter::new(test_config(5));
        let before = std::time::Instant::now();

        let decision = limiter.check("fresh").await;

        assert!(decision.allowed);
        let until_reset = decision.reset_at.duration_since(before);
        assert!(until_reset >= Duration::from_secs(60));
        assert!(until_reset < Duration::from_secs(61));
    }

    // A split read-count-then-append would let concurrent callers jointly
    // exceed the limit; the single-lock check must admit exactly `limit`.
    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn test_concurrent_checks_admit_exactly_limit() {
        let limiter = Arc::new(RateLimiter::new(test_config(8)));

        let mut handles = Vec::new();
        for _ in 0..64 {
            let limiter = limiter.clone();
            handles.push(tokio::spawn(
                async move { limiter.check("shared").await.allowed },
            ));
        }

        let mut admitted = 0;
        for handle in handles {
            if handle.await.unwrap() {
                admitted += 1;
            }
        }

        assert_eq!(admitted, 8);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_clients_each_get_full_limit() {
        let limiter = Arc::new(RateLimiter::new(test_config(4)));

        let mut handles = Vec::new();
        for client in 0..10 {
            let limiter = limiter.clone();
            handles.push(tokio::spawn(async move {
                let id = format!("client-{}", client);
                let mut admitted = 0;
                for _ in 0..6 {
                    if limiter.check(&id).await.allowed {
                        admitted += 1;
                    }
                }
                admitted
            }));
        }

        for handle in handles {
            assert_eq!(handle.await.unwrap(), 4);
        }
    }
}
