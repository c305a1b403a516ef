// src/infrastructure/retry.rs
use std::{fmt::Display, future::Future, time::Duration};

/// Bounded, fixed-delay retry used while a backing store is still starting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Attempts made after the first one fails.
    pub retries: u32,
    pub delay: Duration,
}

impl RetryPolicy {
    pub const fn new(retries: u32, delay: Duration) -> Self {
        Self { retries, delay }
    }

    pub const fn no_retry() -> Self {
        Self::new(0, Duration::ZERO)
    }

    pub fn max_attempts(&self) -> u32 {
        self.retries.saturating_add(1)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3, Duration::from_secs(5))
    }
}

/// Runs `attempt` until it succeeds or the policy is exhausted, sleeping
/// `policy.delay` between tries. Returns the successful attempt's value, or
/// the error of the final attempt.
pub async fn retry_with_delay<T, E, F, Fut>(
    policy: RetryPolicy,
    target: &str,
    mut attempt: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let max_attempts = policy.max_attempts();
    let mut current = 1;

    loop {
        match attempt().await {
            Ok(value) => {
                if current > 1 {
                    tracing::info!(target_name = target, attempt = current, "connection established");
                }
                return Ok(value);
            }
            Err(err) if current < max_attempts => {
                tracing::warn!(
                    target_name = target,
                    attempt = current,
                    max_attempts,
                    delay_secs = policy.delay.as_secs_f64(),
                    error = %err,
                    "connection attempt failed, retrying"
                );
                tokio::time::sleep(policy.delay).await;
                current += 1;
            }
            Err(err) => {
                tracing::error!(
                    target_name = target,
                    attempts = current,
                    error = %err,
                    "giving up on connection"
                );
                return Err(err);
            }
        }
    }
}
