//! Retry and timeout helpers.
//!
//! The client never retries on its own. These helpers wrap any fallible
//! future, typically a service call:
//!
//! ```no_run
//! # async fn example(client: &starlink_client::Client) -> starlink_client::Result<()> {
//! use std::time::Duration;
//! use starlink_client::retry::{RetryPolicy, with_timeout};
//!
//! let policy = RetryPolicy::from_config(client.config());
//! let status = policy.run(|| client.dish().get_status()).await?;
//! let info = with_timeout(client.device().get_info(), Duration::from_secs(2), None).await?;
//! # let _ = (status, info);
//! # Ok(())
//! # }
//! ```

use std::future::Future;
use std::time::Duration;

use crate::config::{
    ClientConfig, DEFAULT_MAX_RECONNECT_BACKOFF, DEFAULT_MAX_RETRIES, DEFAULT_RECONNECT_BACKOFF,
};
use crate::error::{Error, Result};

/// Suspends the current task for `duration`.
pub async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Returns `initial * 2^attempt`, capped at `max`.
#[must_use]
pub fn calculate_backoff(attempt: u32, initial: Duration, max: Duration) -> Duration {
    let factor = 1u128.checked_shl(attempt).unwrap_or(u128::MAX);
    let nanos = initial.as_nanos().saturating_mul(factor);
    if nanos >= max.as_nanos() {
        return max;
    }

    // Below `max`, so the whole seconds fit in a u64.
    let secs = u64::try_from(nanos / 1_000_000_000).unwrap_or(u64::MAX);
    let subsec_nanos = u32::try_from(nanos % 1_000_000_000).unwrap_or(0);
    Duration::new(secs, subsec_nanos)
}

/// Calls `operation` up to `max_retries` times until it succeeds.
///
/// Sleeps with exponential backoff between attempts, but not after the last
/// one.
///
/// # Errors
///
/// Returns the last attempt's error, or an unclassified "max retries
/// exceeded" error if `max_retries` is zero.
pub async fn retry_with_backoff<F, Fut, T>(
    mut operation: F,
    max_retries: u32,
    initial: Duration,
    max: Duration,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut last_error = None;

    for attempt in 0..max_retries {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(error) => {
                if attempt + 1 < max_retries {
                    let backoff = calculate_backoff(attempt, initial, max);
                    tracing::warn!(
                        "attempt {} of {} failed, retrying in {}ms: {}",
                        attempt + 1,
                        max_retries,
                        backoff.as_millis(),
                        error
                    );
                    sleep(backoff).await;
                }
                last_error = Some(error);
            }
        }
    }

    Err(last_error.unwrap_or_else(|| Error::unclassified("max retries exceeded")))
}

/// Races `future` against a timer.
///
/// # Errors
///
/// Returns a timeout error carrying `message`, or
/// `Operation timed out after {ms}ms` when none is given, if the timer wins.
/// Otherwise returns whatever the future returns.
pub async fn with_timeout<F, T>(future: F, duration: Duration, message: Option<&str>) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    match tokio::time::timeout(duration, future).await {
        Ok(result) => result,
        Err(_) => Err(Error::timeout(message.map_or_else(
            || format!("Operation timed out after {}ms", duration.as_millis()),
            str::to_owned,
        ))),
    }
}

/// Retry settings bundled for reuse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Maximum number of attempts.
    pub max_retries: u32,
    pub initial_backoff: Duration,
    pub max_backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(
            DEFAULT_MAX_RETRIES,
            DEFAULT_RECONNECT_BACKOFF,
            DEFAULT_MAX_RECONNECT_BACKOFF,
        )
    }
}

impl RetryPolicy {
    #[must_use]
    pub const fn new(max_retries: u32, initial_backoff: Duration, max_backoff: Duration) -> Self {
        Self {
            max_retries,
            initial_backoff,
            max_backoff,
        }
    }

    /// Takes the retry count and backoff bounds from a client configuration.
    #[must_use]
    pub const fn from_config(config: &ClientConfig) -> Self {
        Self::new(
            config.max_retries,
            config.reconnect_backoff,
            config.max_reconnect_backoff,
        )
    }

    /// Returns the delay after the given zero-based attempt.
    #[must_use]
    pub fn backoff(&self, attempt: u32) -> Duration {
        calculate_backoff(attempt, self.initial_backoff, self.max_backoff)
    }

    /// Runs `operation` under this policy.
    ///
    /// # Errors
    ///
    /// See [`retry_with_backoff`].
    pub async fn run<F, Fut, T>(&self, operation: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        retry_with_backoff(
            operation,
            self.max_retries,
            self.initial_backoff,
            self.max_backoff,
        )
        .await
    }
}
