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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such test can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as expected.
//!
//! The same traits are the boundary with the RPC transport: a transport crate
//! implements them to send the requests over the network.

use crate::Result;
use crate::model;
use futures::stream::BoxStream;
use gax::options::RequestOptions;
use lro::stub::unimplemented_stub;
use tokio::sync::mpsc::UnboundedReceiver;

/// The stream of responses returned by [Speech::streaming_recognize].
pub type ResponseStream = BoxStream<'static, Result<model::StreamingRecognizeResponse>>;

/// Defines the trait used to implement [crate::client::Speech].
///
/// Application developers may need to implement this trait to mock
/// `client::Speech`. In other use-cases, application developers only
/// use `client::Speech` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
#[async_trait::async_trait]
pub trait Speech: lro::stub::Operations + std::fmt::Debug + Send + Sync {
    /// Implements [crate::client::Speech::recognize].
    async fn recognize(
        &self,
        _req: model::RecognizeRequest,
        _options: RequestOptions,
    ) -> Result<model::RecognizeResponse> {
        unimplemented_stub("recognize")
    }

    /// Implements [crate::client::Speech::long_running_recognize].
    async fn long_running_recognize(
        &self,
        _req: model::LongRunningRecognizeRequest,
        _options: RequestOptions,
    ) -> Result<lro::model::Operation> {
        unimplemented_stub("long_running_recognize")
    }

    /// Implements [crate::client::Speech::stream].
    ///
    /// The implementation sends each request received on `requests`, in
    /// order. The channel closing signals the end of the audio. The first
    /// request always carries the streaming configuration.
    async fn streaming_recognize(
        &self,
        _requests: UnboundedReceiver<model::StreamingRecognizeRequest>,
        _options: RequestOptions,
    ) -> Result<ResponseStream> {
        unimplemented_stub("streaming_recognize")
    }
}

#[async_trait::async_trait]
impl<T> Speech for std::sync::Arc<T>
where
    T: Speech + ?Sized,
{
    async fn recognize(
        &self,
        req: model::RecognizeRequest,
        options: RequestOptions,
    ) -> Result<model::RecognizeResponse> {
        (**self).recognize(req, options).await
    }

    async fn long_running_recognize(
        &self,
        req: model::LongRunningRecognizeRequest,
        options: RequestOptions,
    ) -> Result<lro::model::Operation> {
        (**self).long_running_recognize(req, options).await
    }

    async fn streaming_recognize(
        &self,
        requests: UnboundedReceiver<model::StreamingRecognizeRequest>,
        options: RequestOptions,
    ) -> Result<ResponseStream> {
        (**self).streaming_recognize(requests, options).await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    mockall::mock! {
        #[derive(Debug)]
        pub(crate) Speech {}
        #[async_trait::async_trait]
        impl lro::stub::Operations for Speech {
            async fn get_operation(&self, req: lro::model::GetOperationRequest, options: RequestOptions) -> Result<lro::model::Operation>;
        }
        #[async_trait::async_trait]
        impl super::Speech for Speech {
            async fn recognize(&self, req: model::RecognizeRequest, options: RequestOptions) -> Result<model::RecognizeResponse>;
            async fn long_running_recognize(&self, req: model::LongRunningRecognizeRequest, options: RequestOptions) -> Result<lro::model::Operation>;
            async fn streaming_recognize(&self, requests: UnboundedReceiver<model::StreamingRecognizeRequest>, options: RequestOptions) -> Result<ResponseStream>;
        }
    }

    #[derive(Debug)]
    struct Empty;
    impl lro::stub::Operations for Empty {}
    impl Speech for Empty {}

    #[tokio::test]
    async fn defaults_are_unimplemented() {
        let stub = Empty;
        let got = stub
            .recognize(model::RecognizeRequest::default(), RequestOptions::default())
            .await;
        assert!(matches!(got, Err(ref e) if e.status().is_some()), "{got:?}");
        let (_tx, rx) = tokio::sync::mpsc::unbounded_channel();
        let got = stub.streaming_recognize(rx, RequestOptions::default()).await;
        assert!(got.is_err());
    }
}
