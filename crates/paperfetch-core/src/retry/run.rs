//! Retry loop: run a closure until success or the attempt budget is spent.

use super::observe::{FailedAttempt, RetryObserver};
use super::policy::RetryPolicy;
use super::sleep::Sleeper;
use crate::fetcher::FetchError;

/// Runs `f` until it succeeds or `policy.max_attempts()` attempts have failed.
///
/// Every failure is reported to `observer`. Between attempts the current
/// Fibonacci delay is slept through `sleeper`. When the budget is spent the
/// error of the last attempt is returned unchanged.
pub fn run_with_retry<T, F>(
    policy: &RetryPolicy,
    sleeper: &dyn Sleeper,
    observer: &dyn RetryObserver,
    id: &str,
    mut f: F,
) -> Result<T, FetchError>
where
    F: FnMut() -> Result<T, FetchError>,
{
    let mut backoff = policy.backoff();
    let mut attempt = 0u32;
    loop {
        backoff.start_attempt();
        attempt += 1;
        match f() {
            Ok(v) => return Ok(v),
            Err(e) => {
                let remaining = backoff.attempts_remaining();
                observer.on_failure(&FailedAttempt {
                    id,
                    error: &e,
                    attempt,
                    attempts_remaining: remaining,
                });
                if remaining == 0 {
                    return Err(e);
                }
                sleeper.sleep(backoff.next_delay());
            }
        }
    }
}
