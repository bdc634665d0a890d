//! Fetcher decorator that retries failed attempts with Fibonacci backoff.

use super::observe::{RetryObserver, TracingObserver};
use super::policy::RetryPolicy;
use super::run::run_with_retry;
use super::sleep::{Sleeper, ThreadSleeper};
use crate::fetcher::{ByteStream, FetchError, Fetcher};

/// Wraps another [`Fetcher`] and retries every failed attempt.
///
/// Holds no per-call state: each `fetch` builds its own backoff, so one
/// instance can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct RetryingFetcher<F, S = ThreadSleeper, O = TracingObserver> {
    inner: F,
    policy: RetryPolicy,
    sleeper: S,
    observer: O,
}

impl<F: Fetcher> RetryingFetcher<F> {
    /// Three attempts, one-second delay unit.
    pub fn new(inner: F) -> Self {
        Self::with_policy(inner, RetryPolicy::default())
    }

    pub fn with_policy(inner: F, policy: RetryPolicy) -> Self {
        Self {
            inner,
            policy,
            sleeper: ThreadSleeper,
            observer: TracingObserver,
        }
    }
}

impl<F, S, O> RetryingFetcher<F, S, O> {
    pub fn with_sleeper<S2: Sleeper>(self, sleeper: S2) -> RetryingFetcher<F, S2, O> {
        RetryingFetcher {
            inner: self.inner,
            policy: self.policy,
            sleeper,
            observer: self.observer,
        }
    }

    pub fn with_observer<O2: RetryObserver>(self, observer: O2) -> RetryingFetcher<F, S, O2> {
        RetryingFetcher {
            inner: self.inner,
            policy: self.policy,
            sleeper: self.sleeper,
            observer,
        }
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    pub fn inner(&self) -> &F {
        &self.inner
    }

    pub fn into_inner(self) -> F {
        self.inner
    }
}

impl<F, S, O> Fetcher for RetryingFetcher<F, S, O>
where
    F: Fetcher,
    S: Sleeper,
    O: RetryObserver,
{
    fn fetch(&self, id: &str) -> Result<ByteStream, FetchError> {
        run_with_retry(&self.policy, &self.sleeper, &self.observer, id, || {
            self.inner.fetch(id)
        })
    }
}
