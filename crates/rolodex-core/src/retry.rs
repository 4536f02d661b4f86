//! Backoff policy for the background creation loop.
//!
//! The loop itself lives in the directory service; this module only decides
//! how long to pause after a failed attempt. Tests swap in their own policy
//! to control when the next attempt happens.

use std::future::Future;
use std::time::Duration;

use rolodex_types::config::DirectoryConfig;

/// Pause between failed attempts.
///
/// `attempt` is 1-based and names the attempt that just failed.
pub trait RetryPolicy: Send + Sync {
    fn wait(&self, attempt: u32) -> impl Future<Output = ()> + Send;
}

/// Waits the same interval after every failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDelay {
    delay: Duration,
}

impl FixedDelay {
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(5);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_config(config: &DirectoryConfig) -> Self {
        Self::new(config.retry_delay())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for FixedDelay {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

impl RetryPolicy for FixedDelay {
    async fn wait(&self, _attempt: u32) {
        tokio::time::sleep(self.delay).await;
    }
}
