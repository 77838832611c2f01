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

use crate::Result;
use crate::audio::Audio;
use crate::model;
use crate::stream::RecognizeStream;
use gax::error::Error;
use gax::options::RequestOptions;
use std::sync::Arc;

/// Implements a client for the Cloud Speech-to-Text API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use google_cloud_speech_v1::client::Speech;
/// # use google_cloud_speech_v1::model::RecognitionConfig;
/// let client = Speech::builder().build().await?;
/// let results = client
///     .recognize("gs://my-bucket/audio.flac", RecognitionConfig::default().set_language_code("en-US"))
///     .send()
///     .await?;
/// for r in results {
///     println!("{}", r.transcript);
/// }
/// # anyhow::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Service that implements Google Cloud Speech API.
///
/// # Configuration
///
/// To configure `Speech` use the `with_*` methods in the type returned
/// by [builder()][Speech::builder]. The default configuration should
/// work for most applications. Common configuration changes include
///
/// * [with_endpoint()]: by default this client uses the global default endpoint
///   (`https://speech.googleapis.com`). Applications using regional
///   endpoints or running in restricted networks (e.g. a network configured
///   with [Private Google Access with VPC Service Controls]) may want to
///   override this default.
/// * [with_credentials()]: by default this client uses the credentials found
///   in the environment, e.g. `SPEECH_CREDENTIALS` or
///   `GOOGLE_APPLICATION_CREDENTIALS`.
/// * [with_transport()]: the implementation of [stub::Speech][crate::stub::Speech]
///   used to send the requests. A client without a transport is
///   disconnected, its RPCs fail with [no_connection][Error::no_connection].
///
/// [with_endpoint()]: super::builder::speech::ClientBuilder::with_endpoint
/// [with_credentials()]: super::builder::speech::ClientBuilder::with_credentials
/// [with_transport()]: super::builder::speech::ClientBuilder::with_transport
/// [Private Google Access with VPC Service Controls]: https://cloud.google.com/vpc-service-controls/docs/private-connectivity
///
/// # Pooling and Cloning
///
/// `Speech` holds a connection pool internally, it is advised to
/// create one and the reuse it.  You do not need to wrap `Speech` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally.
#[derive(Clone, Debug)]
pub struct Speech {
    inner: Option<Arc<dyn super::stub::Speech>>,
    options: RequestOptions,
    project: Option<String>,
}

impl Speech {
    /// Returns a builder for [Speech].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use google_cloud_speech_v1::client::Speech;
    /// let client = Speech::builder()
    ///     .with_credentials(auth::credentials::Credentials::anonymous())
    ///     .build()
    ///     .await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::speech::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::speech::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::Speech + 'static,
    {
        Self {
            inner: Some(Arc::new(stub)),
            options: RequestOptions::default(),
            project: None,
        }
    }

    pub(crate) async fn new(
        config: gax::client_builder::internal::ClientConfig<auth::credentials::Credentials>,
        transport: Option<Arc<dyn super::stub::Speech>>,
    ) -> gax::client_builder::Result<Self> {
        let env = auth::credentials::SystemEnvironment;
        let cred = match config.cred.clone() {
            Some(c) => c,
            None => auth::credentials::Discovery::for_service("SPEECH")
                .resolve(&env)
                .map_err(gax::client_builder::Error::cred)?,
        };
        let project = config
            .project
            .clone()
            .or_else(|| auth::project::default_project("SPEECH", &env, Some(&cred)));
        let inner = transport.map(|t| {
            if config.tracing {
                Arc::new(super::tracing::Speech::new(t)) as Arc<dyn super::stub::Speech>
            } else {
                t
            }
        });
        Ok(Self {
            inner,
            options: config.default_options(),
            project,
        })
    }

    /// The project used by this client, if one was configured or discovered.
    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }

    /// Returns true if the client has a transport.
    pub fn is_connected(&self) -> bool {
        self.inner.is_some()
    }

    /// Performs synchronous speech recognition: receive results after all
    /// audio has been sent and processed.
    ///
    /// `audio` may be a local path, a `gs://` URI, or the audio bytes. Any
    /// encoding, sample rate, or language set in an [Audio] replace the
    /// values in `config`.
    pub fn recognize<A>(
        &self,
        audio: A,
        config: model::RecognitionConfig,
    ) -> super::builder::speech::Recognize
    where
        A: Into<Audio>,
    {
        super::builder::speech::Recognize::new(self.inner.clone(), self.options.clone())
            .set_config(config)
            .set_audio(audio)
    }

    /// Starts a long-running recognition job.
    ///
    /// Use [start()][super::builder::speech::LongRunningRecognize::start] on
    /// the returned builder to obtain a [RecognizeJob][crate::job::RecognizeJob].
    pub fn recognize_job<A>(
        &self,
        audio: A,
        config: model::RecognitionConfig,
    ) -> super::builder::speech::LongRunningRecognize
    where
        A: Into<Audio>,
    {
        self.long_running_recognize().set_config(config).set_audio(audio)
    }

    /// Performs asynchronous speech recognition.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// The [Working with long-running operations] chapter in the [user guide]
    /// covers these operations in detail.
    ///
    /// [long-running operation]: https://google.aip.dev/151
    /// [user guide]: https://googleapis.github.io/google-cloud-rust/
    /// [working with long-running operations]: https://googleapis.github.io/google-cloud-rust/working_with_long_running_operations.html
    pub fn long_running_recognize(&self) -> super::builder::speech::LongRunningRecognize {
        super::builder::speech::LongRunningRecognize::new(self.inner.clone(), self.options.clone())
    }

    /// Opens a bidirectional streaming recognition session.
    ///
    /// The session does not contact the service until the first call to
    /// [start()][RecognizeStream::start] or [send()][RecognizeStream::send].
    pub fn stream(&self, config: model::StreamingRecognitionConfig) -> Result<RecognizeStream> {
        let stub = self.inner.clone().ok_or_else(Error::no_connection)?;
        Ok(RecognizeStream::new(stub, config, self.options.clone()))
    }

    /// Provides the [Operations][lro::stub::Operations] service functionality
    /// in this service.
    pub fn get_operation<T: Into<String>>(&self, name: T) -> super::builder::speech::GetOperation {
        super::builder::speech::GetOperation::new(self.inner.clone(), self.options.clone())
            .set_name(name)
    }
}
