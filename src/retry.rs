//! Retry logic with exponential backoff
//!
//! Wraps the per-page remote fetch when retries are enabled in
//! [`RetryConfig`](crate::config::RetryConfig). The default configuration
//! performs a single attempt, matching the remote contract of one
//! unconditional try per page.

use crate::config::RetryConfig;
use crate::error::FetchError;
use rand::Rng;
use std::future::Future;
use std::time::Duration;

/// Trait for errors that can be classified as retryable or not
///
/// Transient failures (timeouts, connection resets, remote 5xx) should
/// return `true`. Permanent failures (4xx, unparseable bodies) should
/// return `false`.
pub trait IsRetryable {
    /// Returns true if the error is transient and the operation should be retried
    fn is_retryable(&self) -> bool;
}

impl IsRetryable for FetchError {
    fn is_retryable(&self) -> bool {
        match self {
            // Transport failures: retry timeouts and connect errors only
            FetchError::Request { source, .. } => source.is_timeout() || source.is_connect(),
            // Server-side statuses may clear up; client errors will not
            FetchError::Status { status, .. } => *status >= 500,
            // A body we cannot decode stays undecodable
            FetchError::Decode { .. } => false,
        }
    }
}

/// Execute an async operation with exponential backoff retry logic
///
/// `config.max_attempts` counts retries after the first attempt, so the
/// default of 0 runs the operation exactly once.
pub async fn fetch_with_retry<F, Fut, T, E>(config: &RetryConfig, mut operation: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: IsRetryable + std::fmt::Display,
{
    let mut attempt = 0;
    let mut delay = config.initial_delay();

    loop {
        match operation().await {
            Ok(result) => {
                if attempt > 0 {
                    tracing::info!(attempts = attempt + 1, "fetch succeeded after retry");
                }
                return Ok(result);
            }
            Err(e) if e.is_retryable() && attempt < config.max_attempts => {
                attempt += 1;

                tracing::warn!(
                    error = %e,
                    attempt = attempt,
                    max_attempts = config.max_attempts,
                    delay_ms = delay.as_millis(),
                    "fetch failed, retrying"
                );

                let jittered_delay = if config.jitter { add_jitter(delay) } else { delay };
                tokio::time::sleep(jittered_delay).await;

                let next_delay =
                    Duration::from_secs_f64(delay.as_secs_f64() * config.backoff_multiplier);
                delay = next_delay.min(config.max_delay());
            }
            Err(e) => return Err(e),
        }
    }
}

/// Add up to 25% random jitter to a delay to avoid synchronized retries.
fn add_jitter(delay: Duration) -> Duration {
    let jitter_range = delay.as_millis() as u64 / 4;
    if jitter_range == 0 {
        return delay;
    }
    let jitter = rand::thread_rng().gen_range(0..=jitter_range);
    delay + Duration::from_millis(jitter)
}
