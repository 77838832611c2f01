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

//! Traits to mock the long-running operations service.
//!
//! The client libraries send requests through implementations of these
//! traits. Application developers may need to implement them to mock the
//! clients. In other use-cases, application developers only use the clients
//! and need not be concerned with these traits or their implementations.

use crate::model;
use gax::Result;
use gax::options::RequestOptions;
use std::sync::Arc;

/// Defines the trait used to query and manage long-running operations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. These implementations just return an
/// `UNIMPLEMENTED` error.
#[async_trait::async_trait]
pub trait Operations: std::fmt::Debug + Send + Sync {
    /// Gets the latest state of a long-running operation.
    async fn get_operation(
        &self,
        _req: model::GetOperationRequest,
        _options: RequestOptions,
    ) -> Result<model::Operation> {
        unimplemented_stub("get_operation")
    }

    /// Starts asynchronous cancellation on a long-running operation.
    async fn cancel_operation(
        &self,
        _req: model::CancelOperationRequest,
        _options: RequestOptions,
    ) -> Result<()> {
        unimplemented_stub("cancel_operation")
    }

    /// Deletes a long-running operation.
    async fn delete_operation(
        &self,
        _req: model::DeleteOperationRequest,
        _options: RequestOptions,
    ) -> Result<()> {
        unimplemented_stub("delete_operation")
    }
}

#[async_trait::async_trait]
impl<T> Operations for Arc<T>
where
    T: Operations + ?Sized,
{
    async fn get_operation(
        &self,
        req: model::GetOperationRequest,
        options: RequestOptions,
    ) -> Result<model::Operation> {
        (**self).get_operation(req, options).await
    }

    async fn cancel_operation(
        &self,
        req: model::CancelOperationRequest,
        options: RequestOptions,
    ) -> Result<()> {
        (**self).cancel_operation(req, options).await
    }

    async fn delete_operation(
        &self,
        req: model::DeleteOperationRequest,
        options: RequestOptions,
    ) -> Result<()> {
        (**self).delete_operation(req, options).await
    }
}

/// The error returned by stub methods without an implementation.
///
/// Not part of the public API, subject to change without notice.
#[doc(hidden)]
pub fn unimplemented_stub<T>(method: &str) -> Result<T> {
    use gax::error::Error;
    use gax::error::rpc::{Code, Status};
    Err(Error::service(
        Status::default()
            .set_code(Code::Unimplemented)
            .set_message(format!("{method} is not implemented by this stub")),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::rpc::Code;

    #[derive(Debug)]
    struct Empty;
    impl Operations for Empty {}

    #[tokio::test]
    async fn defaults_are_unimplemented() {
        let stub: Arc<dyn Operations> = Arc::new(Empty);
        let got = stub
            .get_operation(model::GetOperationRequest::default(), RequestOptions::default())
            .await;
        let code = got.as_ref().err().and_then(|e| e.status()).map(|s| s.code);
        assert_eq!(code, Some(Code::Unimplemented), "{got:?}");

        let got = stub
            .cancel_operation(model::CancelOperationRequest::default(), RequestOptions::default())
            .await;
        assert!(got.is_err(), "{got:?}");

        let got = stub
            .delete_operation(model::DeleteOperationRequest::default(), RequestOptions::default())
            .await;
        assert!(got.is_err(), "{got:?}");
    }

    #[tokio::test]
    async fn arc_forwards() {
        let stub = Arc::new(Arc::new(Empty));
        let got = stub
            .get_operation(model::GetOperationRequest::default(), RequestOptions::default())
            .await;
        assert!(got.is_err(), "{got:?}");
    }
}
