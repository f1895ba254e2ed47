use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

/// Process-wide pacing of upstream requests.
///
/// Every caller must `acquire` before dispatching. Successive acquisitions
/// are at least `interval` apart. The lock is held across the wait, so the
/// check-and-set of the last dispatch time is a single critical section and
/// waiters are released in arrival order.
pub struct RateLimiter {
    interval: Duration,
    last: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: Mutex::new(None),
        }
    }

    /// Waits until the next dispatch is allowed and reserves it.
    ///
    /// The recorded timestamp is sampled after the wait, not at entry.
    pub async fn acquire(&self) {
        let mut last = self.last.lock().await;

        if let Some(prev) = *last {
            let elapsed = prev.elapsed();
            if elapsed < self.interval {
                let wait = self.interval - elapsed;
                tracing::debug!(wait_ms = wait.as_millis() as u64, "waiting for rate limit");
                tokio::time::sleep(wait).await;
            }
        }

        *last = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    const INTERVAL: Duration = Duration::from_millis(200);

    #[tokio::test(start_paused = true)]
    async fn first_acquire_does_not_wait() {
        let limiter = RateLimiter::new(INTERVAL);
        let start = Instant::now();
        limiter.acquire().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn back_to_back_acquires_are_spaced() {
        let limiter = RateLimiter::new(INTERVAL);
        let mut stamps = Vec::new();
        for _ in 0..4 {
            limiter.acquire().await;
            stamps.push(Instant::now());
        }
        for pair in stamps.windows(2) {
            assert!(pair[1] - pair[0] >= INTERVAL);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn idle_gap_skips_the_wait() {
        let limiter = RateLimiter::new(INTERVAL);
        limiter.acquire().await;
        tokio::time::sleep(Duration::from_millis(250)).await;

        let start = Instant::now();
        limiter.acquire().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn partial_gap_waits_for_the_remainder() {
        let limiter = RateLimiter::new(INTERVAL);
        limiter.acquire().await;
        tokio::time::sleep(Duration::from_millis(150)).await;

        let start = Instant::now();
        limiter.acquire().await;
        assert_eq!(start.elapsed(), Duration::from_millis(50));
    }

    #[tokio::test(start_paused = true)]
    async fn concurrent_callers_never_share_a_slot() {
        let limiter = Arc::new(RateLimiter::new(INTERVAL));
        let handles: Vec<_> = (0..5)
            .map(|_| {
                let limiter = Arc::clone(&limiter);
                tokio::spawn(async move {
                    limiter.acquire().await;
                    Instant::now()
                })
            })
            .collect();

        let mut stamps = Vec::new();
        for handle in handles {
            stamps.push(handle.await.unwrap());
        }
        stamps.sort();
        for pair in stamps.windows(2) {
            assert!(pair[1] - pair[0] >= INTERVAL);
        }
    }
}
