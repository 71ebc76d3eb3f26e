use crate::error::FetcherError;
use std::num::NonZeroU32;
use std::time::Duration;

/// Bounded retry with linear backoff.
///
/// After failed attempt `n` the policy waits `backoff_step * n` before trying again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub attempts: NonZeroU32,
    pub backoff_step: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: NonZeroU32::new(3).expect("3 is non-zero"),
            backoff_step: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.backoff_step * attempt
    }

    /// Run `operation` until it succeeds or the attempts are used up.
    ///
    /// The error of the last attempt is returned.
    pub async fn run<T, F, Fut>(&self, what: &str, mut operation: F) -> Result<T, FetcherError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, FetcherError>>,
    {
        let mut attempt = 1;

        loop {
            let err = match operation().await {
                Ok(v) => return Ok(v),
                Err(err) => err,
            };

            tracing::warn!("Attempt {} failed for {}: {}", attempt, what, err);

            if attempt >= self.attempts.get() {
                return Err(err);
            }

            tokio::time::sleep(self.delay_after(attempt)).await;
            attempt += 1;
        }
    }
}
