//! Fixed delay between successive rating-site requests.

use std::time::Duration;

/// Default pause after every scrape call, to stay under the site's rate limit.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

/// A blocking (awaited) pause of fixed length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacingGate {
    delay: Duration,
}

impl PacingGate {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Sleep for the configured delay. A zero delay returns immediately.
    pub async fn wait(&self) {
        if self.delay.is_zero() {
            return;
        }
        tokio::time::sleep(self.delay).await;
    }
}

impl Default for PacingGate {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}
