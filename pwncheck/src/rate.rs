use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{Instant, sleep_until};

/// Request budget of the public Pwned Passwords service.
pub const DEFAULT_REQUESTS_PER_SECOND: u32 = 8;

/// Fixed minimum-interval pacing for outgoing range requests.
///
/// Cloning shares the underlying clock, so one `Throttle` handed to
/// several concurrent batches bounds their aggregate request rate
/// rather than each batch's rate separately. The first acquisition is
/// admitted immediately; every subsequent one starts at least the
/// configured interval after the previous one started.
#[derive(Debug, Clone)]
pub struct Throttle {
    interval: Duration,
    last_start: Arc<Mutex<Option<Instant>>>,
}

impl Throttle {
    /// A throttle spacing request starts by `interval`.
    pub fn every(interval: Duration) -> Self {
        Self { interval, last_start: Arc::new(Mutex::new(None)) }
    }

    /// A throttle admitting at most `rate` requests per second.
    ///
    /// Panics if `rate` is zero.
    pub fn per_second(rate: u32) -> Self {
        Self::every(Duration::from_secs(1) / rate)
    }

    /// A throttle imposing no delay, for tests and unmetered local
    /// services.
    pub fn none() -> Self {
        Self::every(Duration::ZERO)
    }

    /// Waits until the next request may start.
    pub async fn ready(&self) {
        let start = {
            let mut last = self.last_start.lock().await;
            let now = Instant::now();
            let start = match *last {
                Some(prev) => now.max(prev + self.interval),
                None => now,
            };
            *last = Some(start);
            start
        };
        sleep_until(start).await;
    }
}

impl Default for Throttle {
    /// The pacing the public service tolerates.
    fn default() -> Self {
        Self::per_second(DEFAULT_REQUESTS_PER_SECOND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn spaces_request_starts_by_the_interval() {
        let throttle = Throttle::per_second(8);
        let start = Instant::now();
        for _ in 0..3 {
            throttle.ready().await;
        }
        // First acquisition is immediate, the next two wait 125ms each.
        assert_eq!(start.elapsed(), Duration::from_millis(250));
    }

    #[tokio::test(start_paused = true)]
    async fn none_imposes_no_delay() {
        let throttle = Throttle::none();
        let start = Instant::now();
        for _ in 0..10 {
            throttle.ready().await;
        }
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn clones_share_one_clock() {
        let throttle = Throttle::every(Duration::from_millis(100));
        let clone = throttle.clone();
        throttle.ready().await;
        let start = Instant::now();
        clone.ready().await;
        assert_eq!(start.elapsed(), Duration::from_millis(100));
    }
}
