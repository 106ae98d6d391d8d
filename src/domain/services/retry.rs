use std::future::Future;
use std::time::Duration;
use tokio::time::{sleep, timeout};
use tracing::warn;

use crate::error::AppError;

/// Bounded retry for idempotent store reads.
///
/// Only transient failures (`AppError::Unavailable`) and attempt timeouts are
/// retried; anything else is returned immediately.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
    pub attempt_timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay: Duration::from_millis(800),
            attempt_timeout: Duration::from_secs(6),
        }
    }
}

impl RetryPolicy {
    pub async fn run<T, F, Fut>(&self, label: &str, mut op: F) -> Result<T, AppError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, AppError>>,
    {
        let attempts = self.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            let outcome = match timeout(self.attempt_timeout, op()).await {
                Ok(result) => result,
                Err(_) => Err(AppError::Unavailable(format!("{} timed out", label))),
            };

            match outcome {
                Err(e) if e.is_transient() && attempt < attempts => {
                    warn!(attempt, max_attempts = attempts, "{} failed, retrying: {}", label, e);
                    sleep(self.delay).await;
                    attempt += 1;
                }
                other => return other,
            }
        }
    }
}
