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

//! Per request options.
//!
//! While the client library defaults are intended to work for most
//! applications, it is sometimes necessary to change the behavior of some
//! calls made via a client. Applications sometimes change the timeout for a
//! specific call, or change the polling configuration of a long-running
//! operation. The request builder returned by each client method implements
//! the [RequestOptionsBuilder] trait where applications can override some
//! defaults.

use crate::polling_backoff_policy::{PollingBackoffPolicy, PollingBackoffPolicyArg};
use crate::polling_error_policy::{PollingErrorPolicy, PollingErrorPolicyArg};
use std::sync::Arc;

/// A set of options configuring a single request.
///
/// Application only use this class directly in mocks, where they may want to
/// verify their application has configured all the right request parameters
/// and options.
///
/// All other code uses this type indirectly, via the per-request builders.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    user_agent: Option<String>,
    attempt_timeout: Option<std::time::Duration>,
    polling_error_policy: Option<Arc<dyn PollingErrorPolicy>>,
    polling_backoff_policy: Option<Arc<dyn PollingBackoffPolicy>>,
}

impl RequestOptions {
    /// Prepends this prefix to the user agent header value.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    /// Gets the current user-agent prefix.
    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }

    /// Sets the per-attempt timeout.
    ///
    /// When using a polling loop, this is the timeout for each individual
    /// poll, not for the whole loop.
    pub fn set_attempt_timeout<T: Into<std::time::Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    /// Gets the current per-attempt timeout.
    pub fn attempt_timeout(&self) -> &Option<std::time::Duration> {
        &self.attempt_timeout
    }

    /// Get the current polling error policy override, if any.
    pub fn polling_error_policy(&self) -> &Option<Arc<dyn PollingErrorPolicy>> {
        &self.polling_error_policy
    }

    /// Sets the polling error policy configuration.
    pub fn set_polling_error_policy<V: Into<PollingErrorPolicyArg>>(&mut self, v: V) {
        self.polling_error_policy = Some(v.into().0);
    }

    /// Get the current polling backoff policy override, if any.
    pub fn polling_backoff_policy(&self) -> &Option<Arc<dyn PollingBackoffPolicy>> {
        &self.polling_backoff_policy
    }

    /// Sets the polling backoff policy configuration.
    pub fn set_polling_backoff_policy<V: Into<PollingBackoffPolicyArg>>(&mut self, v: V) {
        self.polling_backoff_policy = Some(v.into().0);
    }
}

/// Implementations of this trait provide setters to configure request options.
///
/// The client libraries provide a builder for each RPC. These builders can be
/// used to set the request parameters, e.g., the name of the resource targeted
/// by the RPC, as well as any options affecting the request, such as
/// additional headers or timeouts.
pub trait RequestOptionsBuilder: internal::RequestBuilder {
    /// Set the user agent header.
    fn with_user_agent<V: Into<String>>(self, v: V) -> Self;

    /// Sets the per-attempt timeout.
    fn with_attempt_timeout<V: Into<std::time::Duration>>(self, v: V) -> Self;

    /// Sets the polling error policy configuration.
    fn with_polling_error_policy<V: Into<PollingErrorPolicyArg>>(self, v: V) -> Self;

    /// Sets the polling backoff policy configuration.
    fn with_polling_backoff_policy<V: Into<PollingBackoffPolicyArg>>(self, v: V) -> Self;
}

/// This module contains implementation details. It is not part of the public
/// API. Types and functions in this module may be changed or removed without
/// warnings. Applications should not use any types contained within.
#[doc(hidden)]
pub mod internal {
    use super::RequestOptions;
    use crate::Result;
    use crate::error::Error;

    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }

    /// Runs `attempt`, failing with a timeout error if it takes longer than
    /// the configured attempt timeout.
    pub async fn with_attempt_timeout<F, T>(options: &RequestOptions, attempt: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        match options.attempt_timeout() {
            None => attempt.await,
            Some(timeout) => tokio::time::timeout(*timeout, attempt)
                .await
                .map_err(Error::timeout)?,
        }
    }
}

impl<T> RequestOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_user_agent(v);
        self
    }

    fn with_attempt_timeout<V: Into<std::time::Duration>>(mut self, v: V) -> Self {
        self.request_options().set_attempt_timeout(v);
        self
    }

    fn with_polling_error_policy<V: Into<PollingErrorPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_polling_error_policy(v);
        self
    }

    fn with_polling_backoff_policy<V: Into<PollingBackoffPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_polling_backoff_policy(v);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::internal::*;
    use super::*;
    use crate::error::Error;
    use crate::linear_backoff::LinearBackoff;
    use crate::polling_error_policy::Aip194Strict;
    use std::time::Duration;

    #[derive(Debug, Default)]
    struct TestBuilder {
        request_options: RequestOptions,
    }
    impl RequestBuilder for TestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.request_options
        }
    }

    #[test]
    fn request_options() {
        let mut opts = RequestOptions::default();
        assert_eq!(opts.user_agent(), &None);
        assert_eq!(opts.attempt_timeout(), &None);
        assert!(opts.polling_error_policy().is_none(), "{opts:?}");
        assert!(opts.polling_backoff_policy().is_none(), "{opts:?}");

        opts.set_user_agent("test-only");
        let d = Duration::from_secs(123);
        opts.set_attempt_timeout(d);
        opts.set_polling_error_policy(Aip194Strict);
        opts.set_polling_backoff_policy(LinearBackoff::default());

        assert_eq!(opts.user_agent().as_deref(), Some("test-only"));
        assert_eq!(opts.attempt_timeout(), &Some(d));
        assert!(opts.polling_error_policy().is_some(), "{opts:?}");
        assert!(opts.polling_backoff_policy().is_some(), "{opts:?}");
    }

    #[test]
    fn request_options_builder() {
        let builder = TestBuilder::default()
            .with_user_agent("test-only")
            .with_attempt_timeout(Duration::from_secs(7))
            .with_polling_error_policy(Aip194Strict)
            .with_polling_backoff_policy(LinearBackoff::default());
        let opts = builder.request_options;
        assert_eq!(opts.user_agent().as_deref(), Some("test-only"));
        assert_eq!(opts.attempt_timeout(), &Some(Duration::from_secs(7)));
        assert!(opts.polling_error_policy().is_some(), "{opts:?}");
        assert!(opts.polling_backoff_policy().is_some(), "{opts:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn attempt_timeout_expires() {
        let mut opts = RequestOptions::default();
        opts.set_attempt_timeout(Duration::from_secs(1));
        let attempt = async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            Ok::<_, Error>(42)
        };
        let got = with_attempt_timeout(&opts, attempt).await;
        assert!(matches!(got, Err(ref e) if e.is_timeout()), "{got:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn attempt_without_timeout() {
        let opts = RequestOptions::default();
        let attempt = async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            Ok::<_, Error>(42)
        };
        let got = with_attempt_timeout(&opts, attempt).await;
        assert!(matches!(got, Ok(42)), "{got:?}");
    }
}
