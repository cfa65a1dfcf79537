// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Retry policy for transport failures

use std::time::Duration;

/// Delivery attempts before giving up
pub const MAX_ATTEMPTS: u32 = 5;
/// Timeout of the first attempt
pub const START_TIMEOUT: Duration = Duration::from_millis(5000);
/// Added to the timeout after every failed attempt
pub const TIMEOUT_STEP: Duration = Duration::from_millis(1000);
/// Pause between attempts
pub const RETRY_INTERVAL: Duration = Duration::from_millis(10);

/// Bounded retry with a linearly growing per-attempt timeout and a fixed
/// pause between attempts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total delivery attempts, the first one included
    pub max_attempts: u32,
    /// Timeout of the first attempt
    pub start_timeout: Duration,
    /// Timeout increase per failed attempt
    pub timeout_step: Duration,
    /// Pause before the next attempt
    pub interval: Duration,
}

impl RetryPolicy {
    /// Single attempt, no retries
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    /// Sets the number of attempts
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    /// Timeout for the 1-based `attempt`
    pub fn timeout_for_attempt(&self, attempt: u32) -> Duration {
        self.start_timeout + self.timeout_step * attempt.saturating_sub(1)
    }

    /// Attempts remaining after `failed` attempts have failed
    pub fn attempts_left(&self, failed: u32) -> u32 {
        self.max_attempts.saturating_sub(failed)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            start_timeout: START_TIMEOUT,
            timeout_step: TIMEOUT_STEP,
            interval: RETRY_INTERVAL,
        }
    }
}
