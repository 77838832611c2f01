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

//! Defines the types for polling error policies.
//!
//! # Example
//! ```
//! # use google_cloud_gax::polling_error_policy::*;
//! use std::time::Duration;
//! // Poll for at most 15 minutes or at most 50 attempts: whichever limit is
//! // reached first stops the polling loop.
//! let policy = Aip194Strict
//!     .with_time_limit(Duration::from_secs(15 * 60))
//!     .with_attempt_limit(50);
//! ```
//!
//! The client libraries poll long-running operations (LROs) and need to
//! (1) distinguish between transient and permanent errors, and (2) provide a
//! mechanism to limit the polling loop duration. An operation that never
//! completes must not keep the application waiting forever.
//!
//! To configure the default polling error policy for a client, use
//! [ClientBuilder::with_polling_error_policy]. To configure the polling error
//! policy used for a specific request, use
//! [RequestOptionsBuilder::with_polling_error_policy].
//!
//! [ClientBuilder::with_polling_error_policy]: crate::client_builder::ClientBuilder::with_polling_error_policy
//! [RequestOptionsBuilder::with_polling_error_policy]: crate::options::RequestOptionsBuilder::with_polling_error_policy

use crate::error::Error;
use crate::error::rpc::Code;
use crate::loop_state::LoopState;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// The default limit on the elapsed time of a polling loop.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(60 * 60);

/// Determines how errors are handled in the polling loop.
///
/// Implementations of this trait determine if polling errors may resolve in
/// future attempts, and for how long the polling loop may continue.
pub trait PollingErrorPolicy: Send + Sync + std::fmt::Debug {
    /// Query the polling policy after an error.
    ///
    /// # Parameters
    /// * `loop_start` - when the polling loop started.
    /// * `attempt_count` - the number of attempts. This method is always
    ///   called after the first attempt.
    /// * `error` - the last error when attempting the request.
    fn on_error(&self, loop_start: Instant, attempt_count: u32, error: Error) -> LoopState;

    /// Called when the operation is still in progress.
    ///
    /// Returns an error if the polling loop should stop.
    fn on_in_progress(
        &self,
        _loop_start: Instant,
        _attempt_count: u32,
        _operation_name: &str,
    ) -> Option<Error> {
        None
    }
}

/// A helper type to use [PollingErrorPolicy] in client and request options.
#[derive(Clone)]
pub struct PollingErrorPolicyArg(pub(crate) Arc<dyn PollingErrorPolicy>);

impl<T> std::convert::From<T> for PollingErrorPolicyArg
where
    T: PollingErrorPolicy + 'static,
{
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl std::convert::From<Arc<dyn PollingErrorPolicy>> for PollingErrorPolicyArg {
    fn from(value: Arc<dyn PollingErrorPolicy>) -> Self {
        Self(value)
    }
}

/// Extension trait for [PollingErrorPolicy].
pub trait PollingErrorPolicyExt: PollingErrorPolicy + Sized {
    /// Decorate a [PollingErrorPolicy] to limit the total elapsed time in the
    /// polling loop.
    fn with_time_limit(self, maximum_duration: Duration) -> LimitedElapsedTime<Self> {
        LimitedElapsedTime::custom(self, maximum_duration)
    }

    /// Decorate a [PollingErrorPolicy] to limit the number of poll attempts.
    fn with_attempt_limit(self, maximum_attempts: u32) -> LimitedAttemptCount<Self> {
        LimitedAttemptCount::custom(self, maximum_attempts)
    }
}

impl<T: PollingErrorPolicy> PollingErrorPolicyExt for T {}

/// A polling policy that strictly follows [AIP-194].
///
/// This policy continues polling only after `UNAVAILABLE` status codes, and
/// after errors reported by the transport, or while reading local data. All
/// other errors stop the loop.
///
/// This policy does not limit the elapsed time, applications typically
/// decorate it with [PollingErrorPolicyExt::with_time_limit].
///
/// [AIP-194]: https://google.aip.dev/194
#[derive(Clone, Debug)]
pub struct Aip194Strict;

impl PollingErrorPolicy for Aip194Strict {
    fn on_error(&self, _loop_start: Instant, _attempt_count: u32, error: Error) -> LoopState {
        if error.is_io() || error.is_transport() {
            return LoopState::Continue(error);
        }
        match error.status() {
            Some(status) if status.code == Code::Unavailable => LoopState::Continue(error),
            _ => LoopState::Permanent(error),
        }
    }
}

/// A polling policy that continues on any error.
///
/// Use with care: this policy never stops the loop on its own. Decorate it
/// with [PollingErrorPolicyExt::with_time_limit] or
/// [PollingErrorPolicyExt::with_attempt_limit].
#[derive(Clone, Debug)]
pub struct AlwaysContinue;

impl PollingErrorPolicy for AlwaysContinue {
    fn on_error(&self, _loop_start: Instant, _attempt_count: u32, error: Error) -> LoopState {
        LoopState::Continue(error)
    }
}

/// A polling policy decorator that limits the total elapsed time.
///
/// The limit applies both to errors and to operations that remain in
/// progress.
#[derive(Debug)]
pub struct LimitedElapsedTime<P = Aip194Strict>
where
    P: PollingErrorPolicy,
{
    inner: P,
    maximum_duration: Duration,
}

impl LimitedElapsedTime {
    /// Creates a new instance, with the default inner policy.
    pub fn new(maximum_duration: Duration) -> Self {
        Self {
            inner: Aip194Strict,
            maximum_duration,
        }
    }
}

impl Default for LimitedElapsedTime {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_LIMIT)
    }
}

impl<P> LimitedElapsedTime<P>
where
    P: PollingErrorPolicy,
{
    /// Creates a new instance with a custom inner policy.
    pub fn custom(inner: P, maximum_duration: Duration) -> Self {
        Self {
            inner,
            maximum_duration,
        }
    }

    fn in_progress_impl(&self, start: Instant, operation_name: &str) -> Option<Error> {
        let now = Instant::now();
        if now < start + self.maximum_duration {
            return None;
        }
        Some(Error::exhausted(Exhausted::new(
            operation_name,
            "elapsed time",
            format!("{:?}", now.saturating_duration_since(start)),
            format!("{:?}", self.maximum_duration),
        )))
    }
}

impl<P> PollingErrorPolicy for LimitedElapsedTime<P>
where
    P: PollingErrorPolicy + 'static,
{
    fn on_error(&self, start: Instant, count: u32, error: Error) -> LoopState {
        match self.inner.on_error(start, count, error) {
            LoopState::Continue(e) if Instant::now() >= start + self.maximum_duration => {
                LoopState::Exhausted(e)
            }
            state => state,
        }
    }

    fn on_in_progress(&self, start: Instant, count: u32, operation_name: &str) -> Option<Error> {
        self.inner
            .on_in_progress(start, count, operation_name)
            .or_else(|| self.in_progress_impl(start, operation_name))
    }
}

/// A polling policy decorator that limits the number of attempts.
#[derive(Debug)]
pub struct LimitedAttemptCount<P = Aip194Strict>
where
    P: PollingErrorPolicy,
{
    inner: P,
    maximum_attempts: u32,
}

impl LimitedAttemptCount {
    /// Creates a new instance, with the default inner policy.
    pub fn new(maximum_attempts: u32) -> Self {
        Self {
            inner: Aip194Strict,
            maximum_attempts,
        }
    }
}

impl<P> LimitedAttemptCount<P>
where
    P: PollingErrorPolicy,
{
    /// Creates a new instance with a custom inner policy.
    pub fn custom(inner: P, maximum_attempts: u32) -> Self {
        Self {
            inner,
            maximum_attempts,
        }
    }

    fn in_progress_impl(&self, count: u32, operation_name: &str) -> Option<Error> {
        if count < self.maximum_attempts {
            return None;
        }
        Some(Error::exhausted(Exhausted::new(
            operation_name,
            "attempt count",
            count.to_string(),
            self.maximum_attempts.to_string(),
        )))
    }
}

impl<P> PollingErrorPolicy for LimitedAttemptCount<P>
where
    P: PollingErrorPolicy,
{
    fn on_error(&self, start: Instant, count: u32, error: Error) -> LoopState {
        match self.inner.on_error(start, count, error) {
            LoopState::Continue(e) if count >= self.maximum_attempts => LoopState::Exhausted(e),
            state => state,
        }
    }

    fn on_in_progress(&self, start: Instant, count: u32, operation_name: &str) -> Option<Error> {
        self.inner
            .on_in_progress(start, count, operation_name)
            .or_else(|| self.in_progress_impl(count, operation_name))
    }
}

/// The source of the error returned when a polling policy is exhausted.
#[derive(Debug)]
pub struct Exhausted {
    operation_name: String,
    limit_name: &'static str,
    value: String,
    limit: String,
}

impl Exhausted {
    pub fn new(
        operation_name: &str,
        limit_name: &'static str,
        value: String,
        limit: String,
    ) -> Self {
        Self {
            operation_name: operation_name.to_string(),
            limit_name,
            value,
            limit,
        }
    }
}

impl std::fmt::Display for Exhausted {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "polling loop for {} exhausted, {} value ({}) exceeds limit ({})",
            self.operation_name, self.limit_name, self.value, self.limit
        )
    }
}

impl std::error::Error for Exhausted {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::rpc::Status;
    use std::error::Error as _;
    use test_case::test_case;

    mockall::mock! {
        #[derive(Debug)]
        Policy {}
        impl PollingErrorPolicy for Policy {
            fn on_error(&self, loop_start: Instant, attempt_count: u32, error: Error) -> LoopState;
            fn on_in_progress(&self, loop_start: Instant, attempt_count: u32, operation_name: &str) -> Option<Error>;
        }
    }

    #[test]
    fn polling_policy_arg() {
        let policy = LimitedAttemptCount::new(3);
        let _ = PollingErrorPolicyArg::from(policy);

        let policy: Arc<dyn PollingErrorPolicy> = Arc::new(LimitedAttemptCount::new(3));
        let _ = PollingErrorPolicyArg::from(policy);
    }

    #[test]
    fn aip194_strict() {
        let p = Aip194Strict;
        let now = Instant::now();
        assert!(p.on_in_progress(now, 0, "unused").is_none());
        assert!(p.on_error(now, 0, unavailable()).is_continue());
        assert!(p.on_error(now, 0, permission_denied()).is_permanent());
        assert!(p.on_error(now, 0, Error::io("err")).is_continue());
        assert!(p.on_error(now, 0, Error::transport("err")).is_continue());
        assert!(p.on_error(now, 0, Error::ser("err")).is_permanent());
        assert!(p.on_error(now, 0, Error::no_connection()).is_permanent());
    }

    #[test_case(Error::io("err"))]
    #[test_case(Error::deser("err"))]
    #[test_case(permission_denied())]
    fn always_continue(error: Error) {
        let p = AlwaysContinue;
        let now = Instant::now();
        assert!(p.on_in_progress(now, 0, "unused").is_none());
        assert!(p.on_error(now, 0, error).is_continue());
    }

    #[test]
    fn with_time_limit() {
        let policy = AlwaysContinue.with_time_limit(Duration::from_secs(10));
        let start = Instant::now() - Duration::from_secs(1);
        assert!(policy.on_error(start, 1, permission_denied()).is_continue());
        let start = Instant::now() - Duration::from_secs(20);
        assert!(policy.on_error(start, 1, permission_denied()).is_exhausted());
    }

    #[test]
    fn with_attempt_limit() {
        let policy = AlwaysContinue.with_attempt_limit(3);
        let now = Instant::now();
        assert!(policy.on_error(now, 1, permission_denied()).is_continue());
        assert!(policy.on_error(now, 5, permission_denied()).is_exhausted());
    }

    #[test]
    fn limited_elapsed_time_in_progress() {
        let policy = LimitedElapsedTime::new(Duration::from_secs(20));
        let err = policy.on_in_progress(Instant::now() - Duration::from_secs(10), 1, "unused");
        assert!(err.is_none(), "{err:?}");
        let err = policy.on_in_progress(
            Instant::now() - Duration::from_secs(30),
            1,
            "test-operation-name",
        );
        let err = err.expect("policy should be exhausted");
        assert!(err.is_exhausted(), "{err:?}");
        let exhausted = err.source().and_then(|e| e.downcast_ref::<Exhausted>());
        assert!(exhausted.is_some(), "{err:?}");
        assert!(err.to_string().contains("test-operation-name"), "{err}");
    }

    #[test]
    fn limited_elapsed_time_default() {
        let policy = LimitedElapsedTime::default();
        assert_eq!(policy.maximum_duration, DEFAULT_TIME_LIMIT);
        let start = Instant::now() - DEFAULT_TIME_LIMIT - Duration::from_secs(1);
        assert!(policy.on_in_progress(start, 1, "op").is_some());
    }

    #[test]
    fn limited_time_forwards() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(1)
            .returning(|_, _, e| LoopState::Permanent(e));
        mock.expect_on_in_progress()
            .times(1)
            .returning(|_, _, _| Some(unavailable()));

        let now = Instant::now();
        let policy = LimitedElapsedTime::custom(mock, Duration::from_secs(60));
        assert!(policy.on_error(now, 1, unavailable()).is_permanent());
        assert!(policy.on_in_progress(now, 1, "test-op-name").is_some());
    }

    #[test]
    fn limited_attempt_count_in_progress() {
        let policy = LimitedAttemptCount::new(20);
        let err = policy.on_in_progress(Instant::now(), 10, "unused");
        assert!(err.is_none(), "{err:?}");
        let err = policy.on_in_progress(Instant::now(), 30, "test-operation-name");
        assert!(matches!(err, Some(ref e) if e.is_exhausted()), "{err:?}");
    }

    #[test]
    fn limited_attempt_count_forwards() {
        let mut mock = MockPolicy::new();
        mock.expect_on_error()
            .times(3)
            .returning(|_, _, e| LoopState::Continue(e));

        let now = Instant::now();
        let policy = LimitedAttemptCount::custom(mock, 3);
        assert!(policy.on_error(now, 1, unavailable()).is_continue());
        assert!(policy.on_error(now, 2, unavailable()).is_continue());
        assert!(policy.on_error(now, 3, unavailable()).is_exhausted());
    }

    #[test]
    fn exhausted_fmt() {
        let exhausted = Exhausted::new(
            "op-name",
            "limit-name",
            "test-value".to_string(),
            "test-limit".to_string(),
        );
        let fmt = format!("{exhausted}");
        assert!(fmt.contains("op-name"), "{fmt}");
        assert!(fmt.contains("limit-name"), "{fmt}");
        assert!(fmt.contains("test-value"), "{fmt}");
        assert!(fmt.contains("test-limit"), "{fmt}");
    }

    fn unavailable() -> Error {
        Error::service(
            Status::default()
                .set_code(Code::Unavailable)
                .set_message("UNAVAILABLE"),
        )
    }

    fn permission_denied() -> Error {
        Error::service(
            Status::default()
                .set_code(Code::PermissionDenied)
                .set_message("PERMISSION_DENIED"),
        )
    }
}
