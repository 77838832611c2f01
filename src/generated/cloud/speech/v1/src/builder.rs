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

pub mod speech {
    use crate::Result;
    use crate::audio::Audio;
    use crate::job::RecognizeJob;
    use crate::model;
    use crate::result::{RecognitionResult, from_results};
    use gax::error::Error;
    use gax::options::RequestOptions;
    use gax::options::internal::with_attempt_timeout;
    use std::sync::Arc;

    /// A builder for [Speech][crate::client::Speech].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use google_cloud_speech_v1::*;
    /// # use builder::speech::ClientBuilder;
    /// # use client::Speech;
    /// let builder: ClientBuilder = Speech::builder();
    /// let client = builder
    ///     .with_endpoint("https://speech.googleapis.com")
    ///     .with_credentials(auth::credentials::Credentials::anonymous())
    ///     .build()
    ///     .await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder = gax::client_builder::ClientBuilder<
        client::Factory,
        auth::credentials::Credentials,
        Arc<dyn crate::stub::Speech>,
    >;

    pub(crate) mod client {
        use super::super::super::client::Speech;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = Speech;
            type Credentials = auth::credentials::Credentials;
            type Transport = std::sync::Arc<dyn crate::stub::Speech>;
            async fn build(
                self,
                config: gax::client_builder::internal::ClientConfig<Self::Credentials>,
                transport: Option<Self::Transport>,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config, transport).await
            }
        }
    }

    /// Common implementation for [crate::client::Speech] request builders.
    #[derive(Clone, Debug)]
    pub struct RequestBuilder<R: std::default::Default> {
        stub: Option<Arc<dyn crate::stub::Speech>>,
        request: R,
        options: RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: Option<Arc<dyn crate::stub::Speech>>,
            options: RequestOptions,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options,
            }
        }

        fn connected(&self) -> Result<Arc<dyn crate::stub::Speech>> {
            self.stub.clone().ok_or_else(Error::no_connection)
        }
    }

    /// The request builder for [Speech::recognize][crate::client::Speech::recognize] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_speech_v1::builder::speech::Recognize;
    /// # async fn sample() -> gax::Result<()> {
    /// use gax::options::RequestOptionsBuilder;
    ///
    /// let builder = prepare_request_builder();
    /// let results = builder.send().await?;
    /// println!("{} results", results.len());
    ///
    /// fn prepare_request_builder() -> Recognize {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// # Ok(()) }
    /// ```
    #[derive(Clone, Debug)]
    pub struct Recognize {
        inner: RequestBuilder<model::RecognizeRequest>,
        audio: Option<Audio>,
    }

    impl Recognize {
        pub(crate) fn new(
            stub: Option<Arc<dyn crate::stub::Speech>>,
            options: RequestOptions,
        ) -> Self {
            Self {
                inner: RequestBuilder::new(stub, options),
                audio: None,
            }
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::RecognizeRequest>>(mut self, v: V) -> Self {
            self.inner.request = v.into();
            self.audio = None;
            self
        }

        /// Sets the audio to recognize.
        ///
        /// Any overrides in the audio replace the same fields of the config.
        pub fn set_audio<V: Into<Audio>>(mut self, v: V) -> Self {
            self.audio = Some(v.into());
            self
        }

        /// Sets the value of [config][model::RecognizeRequest::config].
        pub fn set_config<V: Into<model::RecognitionConfig>>(mut self, v: V) -> Self {
            self.inner.request.config = Some(v.into());
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<Vec<RecognitionResult>> {
            let stub = self.inner.connected()?;
            let mut request = self.inner.request;
            if let Some(audio) = self.audio {
                request.audio = Some(audio.source.resolve().await?);
                request.config = Some(audio.apply(request.config.unwrap_or_default()));
            }
            let options = self.inner.options;
            let response =
                with_attempt_timeout(&options, stub.recognize(request, options.clone())).await?;
            from_results(response.results)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for Recognize {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.inner.options
        }
    }

    /// The request builder for [Speech::long_running_recognize][crate::client::Speech::long_running_recognize] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_speech_v1::builder::speech::LongRunningRecognize;
    /// # async fn sample() -> gax::Result<()> {
    /// use gax::options::RequestOptionsBuilder;
    /// use lro::Poller;
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.poller().until_done().await?;
    ///
    /// fn prepare_request_builder() -> LongRunningRecognize {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// # Ok(()) }
    /// ```
    #[derive(Clone, Debug)]
    pub struct LongRunningRecognize {
        inner: RequestBuilder<model::LongRunningRecognizeRequest>,
        audio: Option<Audio>,
    }

    impl LongRunningRecognize {
        pub(crate) fn new(
            stub: Option<Arc<dyn crate::stub::Speech>>,
            options: RequestOptions,
        ) -> Self {
            Self {
                inner: RequestBuilder::new(stub, options),
                audio: None,
            }
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::LongRunningRecognizeRequest>>(mut self, v: V) -> Self {
            self.inner.request = v.into();
            self.audio = None;
            self
        }

        /// Sets the audio to recognize.
        ///
        /// Any overrides in the audio replace the same fields of the config.
        pub fn set_audio<V: Into<Audio>>(mut self, v: V) -> Self {
            self.audio = Some(v.into());
            self
        }

        /// Sets the value of [config][model::LongRunningRecognizeRequest::config].
        pub fn set_config<V: Into<model::RecognitionConfig>>(mut self, v: V) -> Self {
            self.inner.request.config = Some(v.into());
            self
        }

        /// Sends the request.
        ///
        /// # Long running operations
        ///
        /// This starts, but does not poll, a long-running operation. More
        /// details on [Speech::long_running_recognize][crate::client::Speech::long_running_recognize].
        pub async fn send(self) -> Result<lro::model::Operation> {
            let stub = self.inner.connected()?;
            let mut request = self.inner.request;
            if let Some(audio) = self.audio {
                request.audio = Some(audio.source.resolve().await?);
                request.config = Some(audio.apply(request.config.unwrap_or_default()));
            }
            let options = self.inner.options;
            with_attempt_timeout(
                &options,
                stub.long_running_recognize(request, options.clone()),
            )
            .await
        }

        /// Starts the operation and returns a handle to track its progress.
        pub async fn start(self) -> Result<RecognizeJob> {
            let stub = self.inner.connected()?;
            let options = self.inner.options.clone();
            let op = self.send().await?;
            Ok(RecognizeJob::new(lro::Operation::new(stub, options, op)))
        }

        /// Creates a [Poller][lro::Poller] to work with `long_running_recognize`.
        pub fn poller(
            self,
        ) -> impl lro::Poller<model::LongRunningRecognizeResponse, model::LongRunningRecognizeMetadata>
        {
            lro::new_poller(move || async move {
                let job = self.start().await?;
                Ok(job.into_operation())
            })
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for LongRunningRecognize {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.inner.options
        }
    }

    /// The request builder for [Speech::get_operation][crate::client::Speech::get_operation] calls.
    #[derive(Clone, Debug)]
    pub struct GetOperation(RequestBuilder<lro::model::GetOperationRequest>);

    impl GetOperation {
        pub(crate) fn new(
            stub: Option<Arc<dyn crate::stub::Speech>>,
            options: RequestOptions,
        ) -> Self {
            Self(RequestBuilder::new(stub, options))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<lro::model::GetOperationRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets the value of [name][lro::model::GetOperationRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<lro::model::Operation> {
            let stub = self.0.connected()?;
            let options = self.0.options;
            with_attempt_timeout(&options, stub.get_operation(self.0.request, options.clone()))
                .await
        }

        /// Fetches the operation and wraps it as a recognition job.
        pub async fn job(self) -> Result<RecognizeJob> {
            let stub = self.0.connected()?;
            let options = self.0.options.clone();
            let op = self.send().await?;
            Ok(RecognizeJob::new(lro::Operation::new(stub, options, op)))
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetOperation {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }
}
