//! Bounded retry for idempotent reads.
//!
//! Mutations (draw, play, CPU execute, next round) never go through here.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::error::ClientError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Extra attempts after the first failure.
    pub max_retries: u32,
    /// Attempt `n` (0-based) waits `base_backoff * (n + 1)` before retrying.
    pub base_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            base_backoff: Duration::from_millis(1000),
        }
    }
}

impl RetryPolicy {
    pub const fn none() -> Self {
        Self {
            max_retries: 0,
            base_backoff: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn backoff(&self, attempt: u32) -> Duration {
        self.base_backoff.saturating_mul(attempt.saturating_add(1))
    }
}

/// Run `call` until it succeeds, fails with a non-retryable error, or the
/// policy's retries are spent. Returns the last error.
pub async fn retry_idempotent<T, F, Fut>(
    policy: RetryPolicy,
    op: &'static str,
    mut call: F,
) -> Result<T, ClientError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ClientError>>,
{
    let mut attempt = 0;
    loop {
        match call().await {
            Ok(value) => return Ok(value),
            Err(e) if e.is_retryable() && attempt < policy.max_retries => {
                let wait = policy.backoff(attempt);
                warn!(
                    op,
                    attempt,
                    wait_ms = wait.as_millis() as u64,
                    error = %e,
                    "read failed, retrying"
                );
                if !wait.is_zero() {
                    tokio::time::sleep(wait).await;
                }
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
