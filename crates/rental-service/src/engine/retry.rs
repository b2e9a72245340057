//! Exponential backoff for retrying rentals that failed with a retryable error.
//!
//! ```rust
//! use rental_service::engine::RetryPolicy;
//! use std::time::Duration;
//!
//! let policy = RetryPolicy::builder()
//!     .max_retries(5)
//!     .initial_delay(Duration::from_millis(20))
//!     .max_delay(Duration::from_millis(500))
//!     .multiplier(2.0)
//!     .build();
//!
//! assert_eq!(policy.delay_for_attempt(1), Duration::from_millis(40));
//! assert_eq!(policy.delay_for_attempt(10), Duration::from_millis(500));
//! ```

use std::time::Duration;

/// Retry policy configuration for exponential backoff.
///
/// # Default Values
///
/// - `max_retries`: 3
/// - `initial_delay`: 10ms
/// - `max_delay`: 1 second
/// - `multiplier`: 2.0 (delay doubles each retry)
#[derive(Debug, Clone, PartialEq)]
pub struct RetryPolicy {
    /// Retries after the first attempt; 0 disables retrying.
    pub max_retries: usize,
    /// Delay before the first retry
    pub initial_delay: Duration,
    /// Cap on any single delay
    pub max_delay: Duration,
    pub multiplier: f64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 3,
            initial_delay: Duration::from_millis(10),
            max_delay: Duration::from_secs(1),
            multiplier: 2.0,
        }
    }
}

impl RetryPolicy {
    #[must_use]
    pub fn builder() -> RetryPolicyBuilder {
        RetryPolicyBuilder {
            policy: Self::default(),
        }
    }

    /// A policy that never retries.
    #[must_use]
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Delay before retry number `attempt` (0-based): `initial_delay * multiplier^attempt`,
    /// capped at `max_delay`.
    #[must_use]
    pub fn delay_for_attempt(&self, attempt: usize) -> Duration {
        if attempt == 0 {
            return self.initial_delay.min(self.max_delay);
        }

        let exponent = i32::try_from(attempt).unwrap_or(i32::MAX);
        let delay = self.initial_delay.as_secs_f64() * self.multiplier.powi(exponent);
        if !delay.is_finite() || delay >= self.max_delay.as_secs_f64() {
            return self.max_delay;
        }
        Duration::from_secs_f64(delay.max(0.0))
    }
}

/// Builder for [`RetryPolicy`].
#[derive(Debug, Clone)]
pub struct RetryPolicyBuilder {
    policy: RetryPolicy,
}

impl RetryPolicyBuilder {
    #[must_use]
    pub fn max_retries(mut self, max_retries: usize) -> Self {
        self.policy.max_retries = max_retries;
        self
    }

    #[must_use]
    pub fn initial_delay(mut self, delay: Duration) -> Self {
        self.policy.initial_delay = delay;
        self
    }

    #[must_use]
    pub fn max_delay(mut self, delay: Duration) -> Self {
        self.policy.max_delay = delay;
        self
    }

    #[must_use]
    pub fn multiplier(mut self, multiplier: f64) -> Self {
        self.policy.multiplier = multiplier;
        self
    }

    #[must_use]
    pub fn build(self) -> RetryPolicy {
        self.policy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_double_until_capped() {
        let policy = RetryPolicy::builder()
            .initial_delay(Duration::from_millis(100))
            .max_delay(Duration::from_millis(1000))
            .build();

        assert_eq!(policy.delay_for_attempt(0), Duration::from_millis(100));
        assert_eq!(policy.delay_for_attempt(1), Duration::from_millis(200));
        assert_eq!(policy.delay_for_attempt(3), Duration::from_millis(800));
        assert_eq!(policy.delay_for_attempt(4), Duration::from_millis(1000));
        assert_eq!(policy.delay_for_attempt(usize::MAX), Duration::from_millis(1000));
    }

    #[test]
    fn sub_millisecond_delays_still_grow() {
        let policy = RetryPolicy::builder()
            .initial_delay(Duration::from_micros(500))
            .build();

        assert_eq!(policy.delay_for_attempt(0), Duration::from_micros(500));
        assert_eq!(policy.delay_for_attempt(1), Duration::from_micros(1000));
        assert_eq!(policy.delay_for_attempt(2), Duration::from_micros(2000));
    }

    #[test]
    fn none_never_retries() {
        assert_eq!(RetryPolicy::none().max_retries, 0);
    }
}
