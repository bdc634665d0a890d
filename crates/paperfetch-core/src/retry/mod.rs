//! Retry and backoff.
//!
//! [`RetryingFetcher`] decorates any [`crate::fetcher::Fetcher`] and retries
//! failed attempts with a Fibonacci backoff (1, 1, 2, 3, 5, ... delay units).
//! Waiting and failure reporting go through injectable [`Sleeper`] and
//! [`RetryObserver`] implementations so tests never touch the wall clock.

mod fetcher;
mod observe;
mod policy;
mod run;
mod sleep;

pub use fetcher::RetryingFetcher;
pub use observe::{FailedAttempt, RetryObserver, TracingObserver};
pub use policy::{FibonacciBackoff, RetryPolicy};
pub use run::run_with_retry;
pub use sleep::{Sleeper, ThreadSleeper};
