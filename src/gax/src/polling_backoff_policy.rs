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

//! Defines the trait for polling backoff policies.
//!
//! The client libraries can poll long-running operations (LROs) until
//! completion. When doing so they backoff between polling attempts to avoid
//! overloading the service. Polling backoff policies do not use jitter.
//!
//! The default implementation is [LinearBackoff], where the delay grows by a
//! fixed increment on each attempt.
//!
//! To configure the default polling backoff policy for a client, use
//! [ClientBuilder::with_polling_backoff_policy]. To configure the polling
//! backoff policy used for a specific request, use
//! [RequestOptionsBuilder::with_polling_backoff_policy].
//!
//! [LinearBackoff]: crate::linear_backoff::LinearBackoff
//! [ClientBuilder::with_polling_backoff_policy]: crate::client_builder::ClientBuilder::with_polling_backoff_policy
//! [RequestOptionsBuilder::with_polling_backoff_policy]: crate::options::RequestOptionsBuilder::with_polling_backoff_policy
//!
//! # Example
//! ```
//! # use google_cloud_gax::linear_backoff::LinearBackoff;
//! use std::time::Duration;
//!
//! let policy = LinearBackoff::new(Duration::from_secs(1), Duration::from_secs(1))
//!     .with_maximum_delay(Duration::from_secs(30));
//! // `policy` implements the `PollingBackoffPolicy` trait.
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

/// Defines the trait implemented by all backoff strategies.
pub trait PollingBackoffPolicy: Send + Sync + std::fmt::Debug {
    /// Returns the backoff delay before the next polling attempt.
    ///
    /// # Parameters
    /// * `loop_start` - when the polling loop started.
    /// * `attempt_count` - the number of polling attempts so far. This is
    ///   always at least one, the first attempt starts the operation.
    fn wait_period(&self, loop_start: Instant, attempt_count: u32) -> Duration;
}

/// A helper type to use [PollingBackoffPolicy] in client and request options.
#[derive(Clone)]
pub struct PollingBackoffPolicyArg(pub(crate) Arc<dyn PollingBackoffPolicy>);

impl<T: PollingBackoffPolicy + 'static> std::convert::From<T> for PollingBackoffPolicyArg {
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl std::convert::From<Arc<dyn PollingBackoffPolicy>> for PollingBackoffPolicyArg {
    fn from(value: Arc<dyn PollingBackoffPolicy>) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linear_backoff::LinearBackoff;

    #[test]
    fn backoff_policy_arg() {
        let _ = PollingBackoffPolicyArg::from(LinearBackoff::default());

        let policy: Arc<dyn PollingBackoffPolicy> = Arc::new(LinearBackoff::default());
        let arg = PollingBackoffPolicyArg::from(policy);
        assert_eq!(
            arg.0.wait_period(Instant::now(), 1),
            Duration::from_secs(5)
        );
    }
}
