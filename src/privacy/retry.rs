//! Retry seam and cancellation guard around every network call.
//!
//! ghpm is a best-effort tool: the shipped policy never retries. The trait
//! exists so a back-off policy can be plugged into the session without
//! touching the switch logic.

use std::future::Future;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::infra::github::GitHubError;

pub trait RetryPolicy: Send + Sync {
    /// Delay before attempt `attempt + 1`, or `None` to give up.
    /// `attempt` counts failed attempts so far, starting at 1.
    fn next_delay(&self, attempt: u32, error: &GitHubError) -> Option<Duration>;
}

/// Never retry.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoRetry;

impl RetryPolicy for NoRetry {
    fn next_delay(&self, _attempt: u32, _error: &GitHubError) -> Option<Duration> {
        None
    }
}

/// Run `op` until it succeeds, the policy gives up, or `cancel` fires.
///
/// Cancellation is checked before each attempt and raced against the
/// in-flight request; a cancelled call drops its request future.
pub async fn guarded<T, F, Fut>(
    resource: &str,
    cancel: &CancellationToken,
    policy: &dyn RetryPolicy,
    mut op: F,
) -> Result<T, GitHubError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, GitHubError>>,
{
    let cancelled = || GitHubError::Cancelled {
        resource: resource.to_string(),
    };
    let mut failures = 0u32;

    loop {
        if cancel.is_cancelled() {
            return Err(cancelled());
        }

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(cancelled()),
            result = op() => result,
        };

        let err = match result {
            Ok(value) => return Ok(value),
            Err(err) => err,
        };

        failures += 1;
        let Some(delay) = policy.next_delay(failures, &err) else {
            return Err(err);
        };
        tracing::debug!(resource, attempt = failures, ?delay, "retrying after {}", err.reason());

        tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(cancelled()),
            _ = tokio::time::sleep(delay) => {}
        }
    }
}
