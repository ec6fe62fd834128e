use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;
use tracing::info;

/// Default spacing between provider calls, sized for the free Gemini tier
pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_secs(15);

/// Single-slot limiter enforcing a minimum interval between outbound calls.
///
/// The lock is held across the wait, so concurrent callers queue up and each
/// one is spaced from the previous stamp.
#[derive(Debug)]
pub struct RateLimiter {
    min_interval: Duration,
    last_call: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_call: Mutex::new(None),
        }
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Wait until the interval since the previous call has elapsed, then stamp now.
    ///
    /// Returns how long the caller was held back.
    pub async fn acquire(&self) -> Duration {
        let mut last_call = self.last_call.lock().await;

        let mut waited = Duration::ZERO;
        if let Some(last) = *last_call {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                waited = self.min_interval - elapsed;
                info!(
                    wait_secs = format!("{:.1}", waited.as_secs_f64()),
                    "Rate limiting: waiting before provider call"
                );
                tokio::time::sleep(waited).await;
            }
        }

        *last_call = Some(Instant::now());
        waited
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_INTERVAL)
    }
}
