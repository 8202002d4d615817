//! Timeout and bounded-retry wrapper for provider calls.
//!
//! The pipeline core issues exactly one attempt per call; this policy layer
//! sits at the orchestration boundary and re-issues transient failures with
//! exponential backoff. Non-retryable errors (dimension mismatch, bad
//! configuration) pass through on the first failure.

use std::future::Future;
use std::time::Duration;

use crate::core::config::RetryConfig;
use crate::core::errors::RagError;

#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: usize,
    pub request_timeout: Duration,
    pub backoff_base: Duration,
}

impl RetryPolicy {
    pub fn from_config(config: &RetryConfig) -> Self {
        Self {
            max_attempts: config.max_attempts.max(1),
            request_timeout: Duration::from_secs(config.request_timeout_secs),
            backoff_base: Duration::from_millis(config.backoff_base_ms),
        }
    }

    fn backoff_for(&self, attempt: usize) -> Duration {
        // 1st retry waits base, 2nd 2x base, then 4x...
        self.backoff_base * (1u32 << (attempt.min(16) as u32 - 1))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::from_config(&RetryConfig::default())
    }
}

/// Run `call` under the policy's per-attempt timeout, retrying transient
/// failures up to `max_attempts` total attempts.
pub async fn call_with_retry<T, F, Fut>(
    policy: &RetryPolicy,
    op: &str,
    mut call: F,
) -> Result<T, RagError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, RagError>>,
{
    let mut attempt = 0;

    loop {
        attempt += 1;

        let outcome = tokio::time::timeout(policy.request_timeout, call()).await;
        let err = match outcome {
            Ok(Ok(value)) => return Ok(value),
            Ok(Err(err)) => err,
            Err(_) => RagError::Timeout {
                op: op.to_string(),
                secs: policy.request_timeout.as_secs(),
            },
        };

        if !err.is_retryable() || attempt >= policy.max_attempts {
            return Err(err);
        }

        let backoff = policy.backoff_for(attempt);
        tracing::warn!(
            "'{}' attempt {}/{} failed ({}), retrying in {:?}",
            op,
            attempt,
            policy.max_attempts,
            err,
            backoff
        );
        tokio::time::sleep(backoff).await;
    }
}
