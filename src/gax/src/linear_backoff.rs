// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Implements linear backoff for long-running operation polling.
//!
//! The delay before attempt `n + 1` is `initial_delay + increment * (n - 1)`,
//! optionally truncated at a maximum delay. With the defaults the loop waits
//! 5 seconds after the first attempt, 7 seconds after the second, 9 after the
//! third, and so on.

use crate::polling_backoff_policy::PollingBackoffPolicy;
use std::time::{Duration, Instant};

const DEFAULT_INITIAL_DELAY: Duration = Duration::from_secs(5);
const DEFAULT_INCREMENT: Duration = Duration::from_secs(2);

/// A polling backoff policy with linearly increasing delays.
///
/// # Example
/// ```
/// # use google_cloud_gax::linear_backoff::LinearBackoff;
/// # use google_cloud_gax::polling_backoff_policy::PollingBackoffPolicy;
/// use std::time::{Duration, Instant};
/// let policy = LinearBackoff::default();
/// let start = Instant::now();
/// assert_eq!(policy.wait_period(start, 1), Duration::from_secs(5));
/// assert_eq!(policy.wait_period(start, 2), Duration::from_secs(7));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct LinearBackoff {
    initial_delay: Duration,
    increment: Duration,
    maximum_delay: Option<Duration>,
}

impl LinearBackoff {
    /// Creates a policy with the given initial delay and increment.
    pub fn new(initial_delay: Duration, increment: Duration) -> Self {
        Self {
            initial_delay,
            increment,
            maximum_delay: None,
        }
    }

    /// Truncates the delay at `v`.
    pub fn with_maximum_delay(mut self, v: Duration) -> Self {
        self.maximum_delay = Some(v);
        self
    }

    pub fn initial_delay(&self) -> Duration {
        self.initial_delay
    }

    pub fn increment(&self) -> Duration {
        self.increment
    }

    pub fn maximum_delay(&self) -> Option<Duration> {
        self.maximum_delay
    }
}

impl Default for LinearBackoff {
    fn default() -> Self {
        Self::new(DEFAULT_INITIAL_DELAY, DEFAULT_INCREMENT)
    }
}

impl PollingBackoffPolicy for LinearBackoff {
    fn wait_period(&self, _loop_start: Instant, attempt_count: u32) -> Duration {
        let retries = attempt_count.saturating_sub(1);
        let delay = self
            .initial_delay
            .saturating_add(self.increment.saturating_mul(retries));
        match self.maximum_delay {
            Some(max) => delay.min(max),
            None => delay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0, 5)]
    #[test_case(1, 5)]
    #[test_case(2, 7)]
    #[test_case(3, 9)]
    #[test_case(10, 23)]
    fn default_schedule(attempt_count: u32, want_secs: u64) {
        let policy = LinearBackoff::default();
        assert_eq!(
            policy.wait_period(Instant::now(), attempt_count),
            Duration::from_secs(want_secs)
        );
    }

    #[test]
    fn truncated() {
        let policy = LinearBackoff::new(Duration::from_secs(1), Duration::from_secs(10))
            .with_maximum_delay(Duration::from_secs(15));
        let now = Instant::now();
        assert_eq!(policy.wait_period(now, 1), Duration::from_secs(1));
        assert_eq!(policy.wait_period(now, 2), Duration::from_secs(11));
        assert_eq!(policy.wait_period(now, 3), Duration::from_secs(15));
        assert_eq!(policy.wait_period(now, u32::MAX), Duration::from_secs(15));
    }

    #[test]
    fn accessors() {
        let policy = LinearBackoff::new(Duration::from_millis(100), Duration::from_millis(50))
            .with_maximum_delay(Duration::from_secs(1));
        assert_eq!(policy.initial_delay(), Duration::from_millis(100));
        assert_eq!(policy.increment(), Duration::from_millis(50));
        assert_eq!(policy.maximum_delay(), Some(Duration::from_secs(1)));
        assert_eq!(LinearBackoff::default().maximum_delay(), None);
    }
}
