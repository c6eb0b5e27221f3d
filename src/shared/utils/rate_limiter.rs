use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

/// Paces outgoing requests to an external API to a fixed request rate.
///
/// Callers await `acquire` before every request; the call returns once the
/// minimum interval since the previous request has elapsed.
pub struct RateLimiter {
    next_ready: Mutex<Instant>,
    min_interval: Duration,
}

impl RateLimiter {
    pub fn new(requests_per_second: f64) -> Self {
        let min_interval = Duration::from_secs_f64(1.0 / requests_per_second);
        Self {
            next_ready: Mutex::new(Instant::now()),
            min_interval,
        }
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    pub async fn acquire(&self) {
        let mut next_ready = self.next_ready.lock().await;
        let now = Instant::now();

        if now < *next_ready {
            sleep(*next_ready - now).await;
        }

        *next_ready = Instant::now() + self.min_interval;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paces_consecutive_acquires() {
        tokio_test::block_on(async {
            let limiter = RateLimiter::new(20.0); // 50ms interval
            let start = Instant::now();

            limiter.acquire().await;
            limiter.acquire().await;
            limiter.acquire().await;

            // Two full intervals must have elapsed between three acquires.
            assert!(start.elapsed() >= Duration::from_millis(100));
        });
    }

    #[test]
    fn first_acquire_is_immediate() {
        tokio_test::block_on(async {
            let limiter = RateLimiter::new(1.0);
            let start = Instant::now();
            limiter.acquire().await;
            assert!(start.elapsed() < Duration::from_millis(100));
        });
    }
}
