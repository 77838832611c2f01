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

//! Types and functions to make LROs easier to use and to require less boilerplate.
//!
//! Some Google Cloud services perform work that takes minutes or hours, such
//! as creating a cluster. These services start the work and return a
//! long-running operation (LRO). The application can query the operation to
//! learn about its progress, and eventually about its result.
//!
//! [Operation] wraps the operation returned by the service, and decodes its
//! metadata and result into the types documented by each RPC. It can poll the
//! service until the operation completes, using the polling policies from
//! the client or request options.

use gax::Result;
use gax::error::Error;

mod any;
pub mod model;
mod operation;
pub mod stub;

pub use any::{Message, from_any, to_any};
pub use operation::Operation;

/// The result of polling a Long-Running Operation (LRO).
///
/// # Parameters
/// * `R` - the response type. This is the type returned when the LRO completes
///   successfully.
/// * `M` - the metadata type. While operations are in progress the LRO may
///   return values of this type.
#[derive(Debug)]
pub enum PollingResult<R, M> {
    /// The operation is still in progress.
    InProgress(Option<M>),
    /// The operation completed. This includes the result.
    Completed(Result<R>),
    /// An error trying to poll the LRO.
    ///
    /// Not all errors indicate that the operation failed. For example, this
    /// may fail because it was not possible to connect to Google Cloud. Such
    /// transient errors may disappear in the next polling attempt.
    ///
    /// Other errors will never recover. The polling error policy classifies
    /// the errors, errors that never recover are returned as
    /// `PollingResult::Completed(Err(e))`.
    PollingError(Error),
}

/// The trait implemented by LRO helpers.
///
/// # Parameters
/// * `R` - the response type, that is, the type of response included when the
///   long-running operation completes successfully.
/// * `M` - the metadata type, that is, the type returned by the service when
///   the long-running operation is still in progress.
pub trait Poller<R, M>: Send {
    /// Query the current status of the long-running operation.
    ///
    /// The first call returns the status known when the operation started.
    /// Later calls wait for the backoff period, and then query the service.
    /// Returns `None` once the operation has completed.
    fn poll(&mut self) -> impl Future<Output = Option<PollingResult<R, M>>> + Send;

    /// Poll the long-running operation until it completes.
    fn until_done(self) -> impl Future<Output = Result<R>> + Send
    where
        Self: Sized;

    /// Convert a poller to a [futures::Stream].
    fn into_stream(self) -> impl futures::Stream<Item = PollingResult<R, M>> + Send
    where
        Self: Sized + 'static,
        R: Send + 'static,
        M: Send + 'static,
    {
        futures::stream::unfold(self, |mut poller| async move {
            poller.poll().await.map(|r| (r, poller))
        })
    }
}

/// Creates a new `impl Poller<R, M>` from a closure that starts the operation.
///
/// This is intended as an implementation detail of the client libraries.
/// Applications should have no need to create or use this function.
#[doc(hidden)]
pub fn new_poller<R, M, S, SF>(start: S) -> impl Poller<R, M>
where
    R: Message + serde::de::DeserializeOwned + Send,
    M: Message + serde::de::DeserializeOwned + Send,
    S: FnOnce() -> SF + Send,
    SF: Future<Output = Result<Operation<R, M>>> + Send,
{
    PollerImpl {
        start: Some(start),
        operation: None,
    }
}

/// An implementation of `Poller` based on a closure to start the operation.
///
/// The operation starts on the first call to `poll()`, after that, the
/// poller delegates to the [Operation].
struct PollerImpl<R, M, S> {
    start: Option<S>,
    operation: Option<Operation<R, M>>,
}

impl<R, M, S, SF> Poller<R, M> for PollerImpl<R, M, S>
where
    R: Message + serde::de::DeserializeOwned + Send,
    M: Message + serde::de::DeserializeOwned + Send,
    S: FnOnce() -> SF + Send,
    SF: Future<Output = Result<Operation<R, M>>> + Send,
{
    async fn poll(&mut self) -> Option<PollingResult<R, M>> {
        if let Some(start) = self.start.take() {
            match start().await {
                Ok(op) => {
                    self.operation = Some(op);
                }
                Err(e) => return Some(PollingResult::Completed(Err(e))),
            }
        }
        match self.operation.as_mut() {
            Some(op) => op.poll().await,
            None => None,
        }
    }

    async fn until_done(mut self) -> Result<R> {
        if let Some(start) = self.start.take() {
            self.operation = Some(start().await?);
        }
        match self.operation {
            Some(op) => op.until_done().await,
            None => Err(Error::exhausted("the operation has already completed")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::rpc::{Code, Status};
    use gax::options::RequestOptions;

    #[derive(Debug)]
    struct NoQueries;
    impl stub::Operations for NoQueries {}

    type TestOperation = Operation<model::Empty, model::Empty>;

    fn done() -> Result<TestOperation> {
        let response = to_any(&model::Empty::default())?;
        let op = model::Operation::default()
            .set_name("operations/done")
            .set_done(true)
            .set_result(model::operation::Result::Response(response));
        Ok(Operation::new(NoQueries, RequestOptions::default(), op))
    }

    #[tokio::test]
    async fn poller_start_completes() {
        let mut poller = new_poller(|| async { done() });
        let p = poller.poll().await;
        assert!(matches!(p, Some(PollingResult::Completed(Ok(_)))), "{p:?}");
        let p = poller.poll().await;
        assert!(p.is_none(), "{p:?}");
    }

    #[tokio::test]
    async fn poller_start_error() {
        let mut poller = new_poller(|| async {
            Err::<TestOperation, _>(Error::service(
                Status::default().set_code(Code::PermissionDenied),
            ))
        });
        let p = poller.poll().await;
        assert!(
            matches!(p, Some(PollingResult::Completed(Err(ref e))) if e.status().is_some()),
            "{p:?}"
        );
        let p = poller.poll().await;
        assert!(p.is_none(), "{p:?}");
    }

    #[tokio::test]
    async fn poller_until_done() -> anyhow::Result<()> {
        let poller = new_poller(|| async { done() });
        let got = poller.until_done().await?;
        assert_eq!(got, model::Empty::default());
        Ok(())
    }

    #[tokio::test]
    async fn poller_stream() {
        use futures::StreamExt;
        let poller = new_poller(|| async { done() });
        let got: Vec<_> = poller.into_stream().collect().await;
        assert_eq!(got.len(), 1, "{got:?}");
        assert!(matches!(got[0], PollingResult::Completed(Ok(_))), "{got:?}");
    }
}
