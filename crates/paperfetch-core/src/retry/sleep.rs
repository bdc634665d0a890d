//! Waiting between attempts.

use std::sync::Arc;
use std::time::Duration;

/// Blocks the current call for a backoff interval.
pub trait Sleeper {
    fn sleep(&self, delay: Duration);
}

/// Sleeps the calling thread for the full interval.
///
/// `std::thread::sleep` resumes after signal interruption, so the wait is
/// never cut short.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

impl<T: Sleeper + ?Sized> Sleeper for &T {
    fn sleep(&self, delay: Duration) {
        (**self).sleep(delay)
    }
}

impl<T: Sleeper + ?Sized> Sleeper for Arc<T> {
    fn sleep(&self, delay: Duration) {
        (**self).sleep(delay)
    }
}
