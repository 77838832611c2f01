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
use crate::model;
use crate::stub::ResponseStream;
use gax::options::RequestOptions;
use tokio::sync::mpsc::UnboundedReceiver;

/// Implements a [Speech](super::stub::Speech) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct Speech<T>
where
    T: super::stub::Speech + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> Speech<T>
where
    T: super::stub::Speech + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

#[async_trait::async_trait]
impl<T> lro::stub::Operations for Speech<T>
where
    T: super::stub::Speech + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn get_operation(
        &self,
        req: lro::model::GetOperationRequest,
        options: RequestOptions,
    ) -> Result<lro::model::Operation> {
        self.inner.get_operation(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn cancel_operation(
        &self,
        req: lro::model::CancelOperationRequest,
        options: RequestOptions,
    ) -> Result<()> {
        self.inner.cancel_operation(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_operation(
        &self,
        req: lro::model::DeleteOperationRequest,
        options: RequestOptions,
    ) -> Result<()> {
        self.inner.delete_operation(req, options).await
    }
}

#[async_trait::async_trait]
impl<T> super::stub::Speech for Speech<T>
where
    T: super::stub::Speech + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn recognize(
        &self,
        req: model::RecognizeRequest,
        options: RequestOptions,
    ) -> Result<model::RecognizeResponse> {
        self.inner.recognize(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn long_running_recognize(
        &self,
        req: model::LongRunningRecognizeRequest,
        options: RequestOptions,
    ) -> Result<lro::model::Operation> {
        self.inner.long_running_recognize(req, options).await
    }

    #[tracing::instrument(skip(requests))]
    async fn streaming_recognize(
        &self,
        requests: UnboundedReceiver<model::StreamingRecognizeRequest>,
        options: RequestOptions,
    ) -> Result<ResponseStream> {
        self.inner.streaming_recognize(requests, options).await
    }
}
