use std::time::Duration;

/// Retry configuration shared by every call made through one fetcher.
///
/// Delays follow the Fibonacci sequence measured in `delay_unit`s:
/// 1, 1, 2, 3, 5, 8, ... There is no cap and no jitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay_unit: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            delay_unit: Duration::from_secs(1),
        }
    }
}

impl RetryPolicy {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

    /// Policy with `max_attempts` total attempts (including the first) and
    /// one-second delay units. Zero is treated as one.
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            ..Self::default()
        }
    }

    pub fn with_delay_unit(mut self, delay_unit: Duration) -> Self {
        self.delay_unit = delay_unit;
        self
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub fn delay_unit(&self) -> Duration {
        self.delay_unit
    }

    /// Fresh per-call backoff state.
    pub fn backoff(&self) -> FibonacciBackoff {
        FibonacciBackoff {
            attempts_remaining: self.max_attempts,
            previous: 1,
            current: 1,
            unit: self.delay_unit,
        }
    }
}

/// Backoff state for a single logical fetch. Never shared between calls.
#[derive(Debug, Clone)]
pub struct FibonacciBackoff {
    attempts_remaining: u32,
    previous: u32,
    current: u32,
    unit: Duration,
}

impl FibonacciBackoff {
    /// Consume one attempt. Returns false once the budget is spent, in which
    /// case no further attempt may be made.
    pub fn start_attempt(&mut self) -> bool {
        if self.attempts_remaining == 0 {
            return false;
        }
        self.attempts_remaining -= 1;
        true
    }

    pub fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    /// Delay to wait before the next attempt; advances the sequence.
    ///
    /// The k-th call returns F(k) units: 1, 1, 2, 3, 5, ...
    pub fn next_delay(&mut self) -> Duration {
        let delay = self.unit.saturating_mul(self.previous);
        let next = self.previous.saturating_add(self.current);
        self.previous = self.current;
        self.current = next;
        delay
    }
}
