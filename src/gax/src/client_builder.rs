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

//! Provide types for client construction.
//!
//! Some applications need to construct clients with custom configuration, for
//! example, they may need to override the endpoint, the credentials, or the
//! project. Most importantly, the clients need a transport to send RPCs. The
//! transport is provided by the application (or by a transport crate) as an
//! implementation of the service stub trait.
//!
//! Applications should not create builders directly, instead each client type
//! defines a `builder()` function to obtain the correct type of builder.
//!
//! ## Example: create a client with the default configuration.
//!
//! ```
//! # use google_cloud_gax::client_builder::examples;
//! # use google_cloud_gax::client_builder::Result;
//! # tokio_test::block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder().build().await?;
//! # Result::<()>::Ok(()) });
//! ```
//!
//! ## Example: create a client with a different endpoint
//!
//! ```
//! # use google_cloud_gax::client_builder::examples;
//! # use google_cloud_gax::client_builder::Result;
//! # tokio_test::block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder()
//!     .with_endpoint("https://private.googleapis.com")
//!     .build().await?;
//! # Result::<()>::Ok(()) });
//! ```

use crate::polling_backoff_policy::{PollingBackoffPolicy, PollingBackoffPolicyArg};
use crate::polling_error_policy::{PollingErrorPolicy, PollingErrorPolicyArg};
use std::sync::Arc;

/// The result type for this module.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
///
/// # Examples
/// ```no_run
/// # use google_cloud_gax::client_builder::examples;
/// # use google_cloud_gax::client_builder::Result;
/// # tokio_test::block_on(async {
/// use examples::Client; // Placeholder for examples
/// let client = match Client::builder().build().await {
///     Ok(c) => c,
///     Err(e) if e.is_default_credentials() => {
///         println!("error during client initialization: {e}");
///         println!("troubleshoot using https://cloud.google.com/docs/authentication/client-libraries");
///         return Err(e);
///     }
///     Err(e) => {
///         println!("error during client initialization {e}");
///         return Err(e);
///     }
/// };
/// # Ok(()) });
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, the client could not initialize the default credentials.
    pub fn is_default_credentials(&self) -> bool {
        matches!(&self.0, ErrorKind::DefaultCredentials(_))
    }

    /// If true, the client could not initialize the transport client.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn cred<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::DefaultCredentials(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("could not create default credentials")]
    DefaultCredentials(#[source] BoxError),
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A generic builder for clients.
///
/// In the Google Cloud client libraries for Rust a "client" represents a
/// connection to a specific service. Each client library defines one or more
/// client types. All the clients are initialized using a `ClientBuilder`.
///
/// Clients are configured using the `with_*` methods in this type.
///
/// A client built without a transport is valid, but disconnected: all its
/// RPCs fail with [no_connection][crate::error::Error::no_connection]. Such
/// clients are useful to format resource names, or to inspect the discovered
/// project.
#[derive(Clone, Debug)]
pub struct ClientBuilder<F, Cr, T> {
    config: internal::ClientConfig<Cr>,
    transport: Option<T>,
    factory: F,
}

impl<F, Cr, T> ClientBuilder<F, Cr, T> {
    /// Creates a new client.
    ///
    /// ```
    /// # use google_cloud_gax::client_builder::examples;
    /// # use google_cloud_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// let client = Client::builder()
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C, Credentials = Cr, Transport = T>,
    {
        self.factory.build(self.config, self.transport).await
    }

    /// Sets the endpoint.
    ///
    /// The transport receives this value as part of the client configuration.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Enables tracing.
    ///
    /// The client libraries can be dynamically instrumented with the Tokio
    /// [tracing] framework. Setting this flag enables this instrumentation:
    /// each RPC is wrapped in a span with the method name and the request.
    ///
    /// [tracing]: https://docs.rs/tracing/latest/tracing/
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// Configure the authentication credentials.
    ///
    /// When not set, the credentials are discovered from the environment.
    pub fn with_credentials<V: Into<Cr>>(mut self, v: V) -> Self {
        self.config.cred = Some(v.into());
        self
    }

    /// Configure the project.
    ///
    /// When not set, the project is discovered from the environment or the
    /// credentials.
    pub fn with_project<V: Into<String>>(mut self, v: V) -> Self {
        self.config.project = Some(v.into());
        self
    }

    /// Configure the default per-attempt timeout.
    pub fn with_attempt_timeout<V: Into<std::time::Duration>>(mut self, v: V) -> Self {
        self.config.attempt_timeout = Some(v.into());
        self
    }

    /// Configure the polling error policy.
    ///
    /// The client libraries can poll long-running operations until they
    /// complete. The polling error policy determines which errors end the
    /// loop, and for how long the loop may run.
    ///
    /// ```
    /// # use google_cloud_gax::client_builder::examples;
    /// # use google_cloud_gax::client_builder::Result;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// use google_cloud_gax::polling_error_policy::*;
    /// let client = Client::builder()
    ///     .with_polling_error_policy(Aip194Strict.with_attempt_limit(100))
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_polling_error_policy<V: Into<PollingErrorPolicyArg>>(mut self, v: V) -> Self {
        self.config.polling_error_policy = Some(v.into().0);
        self
    }

    /// Configure the polling backoff policy.
    ///
    /// The polling backoff policy determines how long to wait between polling
    /// attempts.
    pub fn with_polling_backoff_policy<V: Into<PollingBackoffPolicyArg>>(mut self, v: V) -> Self {
        self.config.polling_backoff_policy = Some(v.into().0);
        self
    }

    /// Configure the transport.
    ///
    /// The transport is an implementation of the service stub trait. It sends
    /// the requests to the service and returns the responses.
    pub fn with_transport(mut self, v: T) -> Self {
        self.transport = Some(v);
        self
    }
}

/// This module contains implementation details. It is not part of the public
/// API. Types and functions in this module may be changed or removed without
/// warnings. Applications should not use any types contained within.
#[doc(hidden)]
pub mod internal {
    use super::*;
    use crate::options::RequestOptions;

    pub trait ClientFactory {
        type Client;
        type Credentials;
        type Transport;
        fn build(
            self,
            config: ClientConfig<Self::Credentials>,
            transport: Option<Self::Transport>,
        ) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, Cr, T, C>(factory: F) -> super::ClientBuilder<F, Cr, T>
    where
        F: ClientFactory<Client = C, Credentials = Cr, Transport = T>,
    {
        super::ClientBuilder {
            factory,
            transport: None,
            config: ClientConfig::default(),
        }
    }

    /// Configure a client.
    ///
    /// A client represents a connection to a Google Cloud Service. Each service
    /// has a number of knobs that can be configured.
    #[derive(Clone, Debug)]
    pub struct ClientConfig<Cr> {
        pub endpoint: Option<String>,
        pub cred: Option<Cr>,
        pub project: Option<String>,
        pub tracing: bool,
        pub attempt_timeout: Option<std::time::Duration>,
        pub polling_error_policy: Option<Arc<dyn PollingErrorPolicy>>,
        pub polling_backoff_policy: Option<Arc<dyn PollingBackoffPolicy>>,
    }

    impl<Cr> ClientConfig<Cr> {
        /// The request options applied to every request made by the client.
        pub fn default_options(&self) -> RequestOptions {
            let mut options = RequestOptions::default();
            if let Some(t) = self.attempt_timeout {
                options.set_attempt_timeout(t);
            }
            if let Some(p) = &self.polling_error_policy {
                options.set_polling_error_policy(p.clone());
            }
            if let Some(p) = &self.polling_backoff_policy {
                options.set_polling_backoff_policy(p.clone());
            }
            options
        }
    }

    impl<Cr> std::default::Default for ClientConfig<Cr> {
        fn default() -> Self {
            Self {
                endpoint: None,
                cred: None,
                project: None,
                tracing: false,
                attempt_timeout: None,
                polling_error_policy: None,
                polling_backoff_policy: None,
            }
        }
    }
}

#[doc(hidden)]
pub mod examples {
    //! This module contains helper types used in the rustdoc examples.
    //!
    //! The examples require relatively complex types to be useful.

    type Config = super::internal::ClientConfig<Credentials>;
    use super::Result;

    #[allow(dead_code)]
    pub struct Client {
        config: Config,
        transport: Option<Transport>,
    }
    impl Client {
        pub fn builder() -> client::Builder {
            super::internal::new_builder(client::Factory)
        }

        async fn new(config: Config, transport: Option<Transport>) -> Result<Self> {
            Ok(Self { config, transport })
        }
    }
    mod client {
        pub type Builder =
            super::super::ClientBuilder<Factory, super::Credentials, super::Transport>;
        pub struct Factory;
        impl super::super::internal::ClientFactory for Factory {
            type Credentials = super::Credentials;
            type Transport = super::Transport;
            type Client = super::Client;
            async fn build(
                self,
                config: super::Config,
                transport: Option<Self::Transport>,
            ) -> super::Result<Self::Client> {
                Self::Client::new(config, transport).await
            }
        }
    }

    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Credentials {
        pub scopes: Vec<String>,
    }

    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Transport {
        pub name: String,
    }

    // We use the examples as scaffolding for the tests.
    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::linear_backoff::LinearBackoff;
        use crate::polling_error_policy::{AlwaysContinue, PollingErrorPolicyExt};
        use std::time::Duration;

        #[tokio::test]
        async fn build_default() -> anyhow::Result<()> {
            let client = Client::builder().build().await?;
            let config = client.config;
            assert_eq!(config.endpoint, None);
            assert_eq!(config.cred, None);
            assert_eq!(config.project, None);
            assert!(!config.tracing);
            assert!(config.attempt_timeout.is_none(), "{config:?}");
            assert!(config.polling_error_policy.is_none(), "{config:?}");
            assert!(config.polling_backoff_policy.is_none(), "{config:?}");
            assert!(client.transport.is_none());
            Ok(())
        }

        #[tokio::test]
        async fn endpoint_and_tracing() -> anyhow::Result<()> {
            let client = Client::builder()
                .with_endpoint("http://example.com")
                .with_tracing()
                .build()
                .await?;
            let config = client.config;
            assert_eq!(config.endpoint.as_deref(), Some("http://example.com"));
            assert!(config.tracing);
            Ok(())
        }

        #[tokio::test]
        async fn credentials_and_project() -> anyhow::Result<()> {
            let client = Client::builder()
                .with_credentials(Credentials {
                    scopes: vec!["test-scope".to_string()],
                })
                .with_project("test-project")
                .build()
                .await?;
            let config = client.config;
            let cred = config.cred.expect("credentials are set");
            assert_eq!(cred.scopes, vec!["test-scope".to_string()]);
            assert_eq!(config.project.as_deref(), Some("test-project"));
            Ok(())
        }

        #[tokio::test]
        async fn transport() -> anyhow::Result<()> {
            let client = Client::builder()
                .with_transport(Transport {
                    name: "fake".to_string(),
                })
                .build()
                .await?;
            assert_eq!(
                client.transport.map(|t| t.name),
                Some("fake".to_string())
            );
            Ok(())
        }

        #[tokio::test]
        async fn default_options() -> anyhow::Result<()> {
            let client = Client::builder()
                .with_attempt_timeout(Duration::from_secs(3))
                .with_polling_error_policy(AlwaysContinue.with_attempt_limit(3))
                .with_polling_backoff_policy(LinearBackoff::default())
                .build()
                .await?;
            let options = client.config.default_options();
            assert_eq!(options.attempt_timeout(), &Some(Duration::from_secs(3)));
            assert!(options.polling_error_policy().is_some(), "{options:?}");
            assert!(options.polling_backoff_policy().is_some(), "{options:?}");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[derive(Debug, thiserror::Error)]
    #[error("test-only source")]
    struct TestSource;

    #[test]
    fn error_credentials() {
        let error = Error::cred(TestSource);
        assert!(error.is_default_credentials(), "{error:?}");
        assert!(!error.is_transport(), "{error:?}");
        assert!(error.to_string().contains("default credentials"), "{error}");
        let got = error.source().and_then(|e| e.downcast_ref::<TestSource>());
        assert!(got.is_some(), "{error:?}");
    }

    #[test]
    fn error_transport() {
        let error = Error::transport(TestSource);
        assert!(error.is_transport(), "{error:?}");
        assert!(!error.is_default_credentials(), "{error:?}");
        assert!(error.to_string().contains("transport client"), "{error}");
        let got = error.source().and_then(|e| e.downcast_ref::<TestSource>());
        assert!(got.is_some(), "{error:?}");
    }
}
