//! Reporting of failed attempts.

use crate::fetcher::FetchError;
use std::sync::Arc;

/// One failed attempt, as seen by a [`RetryObserver`].
#[derive(Debug)]
pub struct FailedAttempt<'a> {
    pub id: &'a str,
    pub error: &'a FetchError,
    /// 1-based number of the attempt that failed.
    pub attempt: u32,
    pub attempts_remaining: u32,
}

/// Receives every failed attempt, before the retry decision is acted on.
pub trait RetryObserver {
    fn on_failure(&self, attempt: &FailedAttempt<'_>);
}

/// Emits a `warn` event per failure through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl RetryObserver for TracingObserver {
    fn on_failure(&self, a: &FailedAttempt<'_>) {
        tracing::warn!(
            kind = a.error.kind(),
            id = a.id,
            attempt = a.attempt,
            attempts_remaining = a.attempts_remaining,
            error = %a.error,
            "{} while fetching paper {}, {} tries left",
            a.error.kind(),
            a.id,
            a.attempts_remaining
        );
    }
}

impl<T: RetryObserver + ?Sized> RetryObserver for &T {
    fn on_failure(&self, attempt: &FailedAttempt<'_>) {
        (**self).on_failure(attempt)
    }
}

impl<T: RetryObserver + ?Sized> RetryObserver for Arc<T> {
    fn on_failure(&self, attempt: &FailedAttempt<'_>) {
        (**self).on_failure(attempt)
    }
}
