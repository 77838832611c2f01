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

use crate::any::{Message, from_any};
use crate::model;
use crate::stub::Operations;
use crate::{Poller, PollingResult};
use gax::Result;
use gax::error::Error;
use gax::error::rpc::Status;
use gax::linear_backoff::LinearBackoff;
use gax::loop_state::LoopState;
use gax::options::RequestOptions;
use gax::options::internal::with_attempt_timeout;
use gax::polling_backoff_policy::PollingBackoffPolicy;
use gax::polling_error_policy::{LimitedElapsedTime, PollingErrorPolicy};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::sync::Arc;
use std::time::Instant;

type DoneCallback<R, M> = Box<dyn FnOnce(&Operation<R, M>) + Send>;

/// A long-running operation with typed results.
///
/// # Parameters
/// * `R` - the response type. This is the type returned when the operation
///   completes successfully.
/// * `M` - the metadata type. While operations are in progress the service
///   may return values of this type.
///
/// # Example
/// ```no_run
/// # extern crate gax as google_cloud_gax;
/// # use google_cloud_lro::Operation;
/// # use google_cloud_lro::model::Empty;
/// async fn wait(op: Operation<Empty, Empty>) -> google_cloud_gax::Result<()> {
///     let name = op.name().to_string();
///     op.until_done().await?;
///     println!("operation {name} completed");
///     Ok(())
/// }
/// ```
pub struct Operation<R, M> {
    stub: Arc<dyn Operations>,
    options: RequestOptions,
    inner: model::Operation,
    on_done: Vec<DoneCallback<R, M>>,
    polling: PollingState,
    _types: PhantomData<fn() -> (R, M)>,
}

#[derive(Debug)]
struct PollingState {
    loop_start: Instant,
    attempt_count: u32,
    reported: bool,
    finished: bool,
}

impl<R, M> Operation<R, M> {
    /// Creates a new handle for the operation in `inner`.
    ///
    /// Typically only the client libraries call this function. Applications
    /// may use it in tests, to return operations from mocks.
    pub fn new<S>(stub: S, options: RequestOptions, inner: model::Operation) -> Self
    where
        S: Operations + 'static,
    {
        Self {
            stub: Arc::new(stub),
            options,
            inner,
            on_done: Vec::new(),
            polling: PollingState {
                loop_start: Instant::now(),
                attempt_count: 1,
                reported: false,
                finished: false,
            },
            _types: PhantomData,
        }
    }

    /// The server-assigned name of the operation.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Returns true if the operation has completed.
    ///
    /// This is the value reported by the service in the last snapshot, call
    /// [reload][Operation::reload] to refresh it.
    pub fn done(&self) -> bool {
        self.inner.done
    }

    /// The error, if the operation completed with an error.
    pub fn error(&self) -> Option<&Status> {
        self.inner.error()
    }

    /// Returns true if the operation completed with an error.
    pub fn is_error(&self) -> bool {
        self.error().is_some()
    }

    /// The last snapshot of the operation, as returned by the service.
    pub fn raw(&self) -> &model::Operation {
        &self.inner
    }

    /// Registers a callback to run when the operation completes.
    ///
    /// The callback runs once, when [reload][Operation::reload] observes the
    /// transition to done. If the operation is already done the callback runs
    /// immediately.
    pub fn on_done<F>(&mut self, callback: F)
    where
        F: FnOnce(&Operation<R, M>) + Send + 'static,
    {
        if self.done() {
            callback(self);
            return;
        }
        self.on_done.push(Box::new(callback));
    }

    /// Fetches the latest status of the operation.
    pub async fn reload(&mut self) -> Result<()> {
        let request = model::GetOperationRequest::default().set_name(self.name());
        let options = self.options.clone();
        let latest = with_attempt_timeout(
            &self.options,
            self.stub.get_operation(request, options),
        )
        .await?;
        let was_done = self.inner.done;
        self.inner = latest;
        if !was_done && self.inner.done {
            tracing::debug!("operation {} completed", self.inner.name);
            for callback in std::mem::take(&mut self.on_done) {
                callback(self);
            }
        }
        Ok(())
    }

    /// Waits until the operation completes.
    ///
    /// Polls the service using the configured backoff policy, by default
    /// waiting 5 seconds after the first attempt and 2 more seconds after
    /// each subsequent attempt. The polling error policy decides if errors
    /// end the loop, and bounds the total time or the number of attempts.
    /// By default the loop gives up after one hour.
    ///
    /// Dropping the future stops the loop.
    pub async fn wait_until_done(&mut self) -> Result<()> {
        let error_policy = self.error_policy();
        let backoff_policy = self.backoff_policy();
        let loop_start = Instant::now();
        let mut attempt_count = 1;
        loop {
            if self.done() {
                return Ok(());
            }
            if let Some(e) = error_policy.on_in_progress(loop_start, attempt_count, self.name()) {
                return Err(e);
            }
            tokio::time::sleep(backoff_policy.wait_period(loop_start, attempt_count)).await;
            attempt_count += 1;
            if let Err(e) = self.reload().await {
                match error_policy.on_error(loop_start, attempt_count, e) {
                    LoopState::Continue(e) => {
                        tracing::debug!("error polling operation {}: {e}", self.name());
                    }
                    LoopState::Permanent(e) | LoopState::Exhausted(e) => return Err(e),
                }
            }
        }
    }

    /// Requests cancellation of the operation.
    ///
    /// Cancellation is asynchronous, the service may complete the operation
    /// anyway. Use [reload][Operation::reload] to find the final status.
    pub async fn cancel(&self) -> Result<()> {
        let request = model::CancelOperationRequest::default().set_name(self.name());
        with_attempt_timeout(
            &self.options,
            self.stub.cancel_operation(request, self.options.clone()),
        )
        .await
    }

    /// Deletes the operation.
    ///
    /// This does not cancel the operation, it only tells the service the
    /// application is no longer interested in its result.
    pub async fn delete(&self) -> Result<()> {
        let request = model::DeleteOperationRequest::default().set_name(self.name());
        with_attempt_timeout(
            &self.options,
            self.stub.delete_operation(request, self.options.clone()),
        )
        .await
    }

    fn error_policy(&self) -> Arc<dyn PollingErrorPolicy> {
        self.options
            .polling_error_policy()
            .clone()
            .unwrap_or_else(|| Arc::new(LimitedElapsedTime::default()))
    }

    fn backoff_policy(&self) -> Arc<dyn PollingBackoffPolicy> {
        self.options
            .polling_backoff_policy()
            .clone()
            .unwrap_or_else(|| Arc::new(LinearBackoff::default()))
    }
}

impl<R, M> Operation<R, M>
where
    R: Message + DeserializeOwned,
{
    /// The result of the operation, `None` while it is in progress.
    ///
    /// Operations that completed with an error return the error as
    /// [Error::service].
    pub fn result(&self) -> Option<Result<R>> {
        if !self.done() {
            return None;
        }
        Some(as_result(&self.inner))
    }

    /// Waits until the operation completes and returns its result.
    pub async fn until_done(mut self) -> Result<R> {
        self.wait_until_done().await?;
        as_result(&self.inner)
    }
}

impl<R, M> Operation<R, M>
where
    M: Message + DeserializeOwned,
{
    /// The metadata of the operation, if the service has returned any.
    pub fn metadata(&self) -> Result<Option<M>> {
        self.inner.metadata.as_ref().map(from_any::<M>).transpose()
    }
}

fn as_result<R>(op: &model::Operation) -> Result<R>
where
    R: Message + DeserializeOwned,
{
    // The result must set either the response *or* the error. Setting neither
    // is a deserialization error.
    match &op.result {
        Some(model::operation::Result::Response(any)) => from_any::<R>(any),
        Some(model::operation::Result::Error(status)) => Err(Error::service(status.clone())),
        None => Err(Error::deser("neither result nor error set in LRO result")),
    }
}

impl<R, M> Poller<R, M> for Operation<R, M>
where
    R: Message + DeserializeOwned + Send,
    M: Message + DeserializeOwned + Send,
{
    async fn poll(&mut self) -> Option<PollingResult<R, M>> {
        if self.polling.finished {
            return None;
        }
        if !self.polling.reported {
            self.polling.reported = true;
            self.polling.loop_start = Instant::now();
            return Some(self.snapshot());
        }
        let error_policy = self.error_policy();
        let backoff_policy = self.backoff_policy();
        let loop_start = self.polling.loop_start;
        let attempt_count = self.polling.attempt_count;
        if let Some(e) = error_policy.on_in_progress(loop_start, attempt_count, self.name()) {
            self.polling.finished = true;
            return Some(PollingResult::Completed(Err(e)));
        }
        tokio::time::sleep(backoff_policy.wait_period(loop_start, attempt_count)).await;
        self.polling.attempt_count += 1;
        match self.reload().await {
            Ok(()) => Some(self.snapshot()),
            Err(e) => match error_policy.on_error(loop_start, self.polling.attempt_count, e) {
                LoopState::Continue(e) => Some(PollingResult::PollingError(e)),
                LoopState::Permanent(e) | LoopState::Exhausted(e) => {
                    self.polling.finished = true;
                    Some(PollingResult::Completed(Err(e)))
                }
            },
        }
    }

    async fn until_done(self) -> Result<R> {
        Operation::until_done(self).await
    }
}

impl<R, M> Operation<R, M>
where
    R: Message + DeserializeOwned,
    M: Message + DeserializeOwned,
{
    fn snapshot(&mut self) -> PollingResult<R, M> {
        if self.done() {
            self.polling.finished = true;
            return PollingResult::Completed(as_result(&self.inner));
        }
        // Metadata is informational, a payload that fails to decode is
        // reported as missing.
        PollingResult::InProgress(self.metadata().ok().flatten())
    }
}

impl<R, M> std::fmt::Debug for Operation<R, M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Operation")
            .field("stub", &self.stub)
            .field("options", &self.options)
            .field("inner", &self.inner)
            .field("on_done", &self.on_done.len())
            .field("polling", &self.polling)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::any::to_any;
    use crate::model::Empty;
    use gax::error::rpc::Code;
    use gax::options::RequestOptions;
    use gax::polling_error_policy::{Aip194Strict, PollingErrorPolicyExt};
    use serde::{Deserialize, Serialize};
    use std::sync::Mutex;
    use std::time::Duration;
    use test_case::test_case;

    #[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
    #[serde(default, rename_all = "camelCase")]
    struct Progress {
        percent: i32,
    }
    impl Message for Progress {
        fn typename() -> &'static str {
            "type.googleapis.com/test.Progress"
        }
    }

    #[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
    #[serde(default)]
    struct Resource {
        name: String,
    }
    impl Message for Resource {
        fn typename() -> &'static str {
            "type.googleapis.com/test.Resource"
        }
    }

    type TestOperation = Operation<Resource, Progress>;

    mockall::mock! {
        #[derive(Debug)]
        Operations {}
        #[async_trait::async_trait]
        impl crate::stub::Operations for Operations {
            async fn get_operation(&self, req: model::GetOperationRequest, options: RequestOptions) -> Result<model::Operation>;
            async fn cancel_operation(&self, req: model::CancelOperationRequest, options: RequestOptions) -> Result<()>;
            async fn delete_operation(&self, req: model::DeleteOperationRequest, options: RequestOptions) -> Result<()>;
        }
    }

    fn in_progress(percent: i32) -> model::Operation {
        model::Operation::default()
            .set_name("operations/test-001")
            .set_metadata(to_any(&Progress { percent }).expect("serializable"))
    }

    fn completed() -> model::Operation {
        let response = to_any(&Resource {
            name: "resources/r".into(),
        })
        .expect("serializable");
        model::Operation::default()
            .set_name("operations/test-001")
            .set_done(true)
            .set_result(model::operation::Result::Response(response))
    }

    fn failed() -> model::Operation {
        model::Operation::default()
            .set_name("operations/test-001")
            .set_done(true)
            .set_result(model::operation::Result::Error(
                Status::default()
                    .set_code(Code::FailedPrecondition)
                    .set_message("test-only"),
            ))
    }

    fn unavailable() -> Error {
        Error::service(Status::default().set_code(Code::Unavailable))
    }

    #[test]
    fn accessors_in_progress() -> anyhow::Result<()> {
        let op = TestOperation::new(MockOperations::new(), RequestOptions::default(), in_progress(25));
        assert_eq!(op.name(), "operations/test-001");
        assert!(!op.done());
        assert!(!op.is_error());
        assert_eq!(op.metadata()?, Some(Progress { percent: 25 }));
        assert!(op.result().is_none());
        Ok(())
    }

    #[test]
    fn accessors_completed() -> anyhow::Result<()> {
        let op = TestOperation::new(MockOperations::new(), RequestOptions::default(), completed());
        assert!(op.done());
        assert!(!op.is_error());
        let got = op.result().transpose()?;
        assert_eq!(got.map(|r| r.name), Some("resources/r".to_string()));
        Ok(())
    }

    #[test]
    fn accessors_failed() {
        let op = TestOperation::new(MockOperations::new(), RequestOptions::default(), failed());
        assert!(op.done());
        assert!(op.is_error());
        assert_eq!(op.error().map(|s| s.code), Some(Code::FailedPrecondition));
        let got = op.result();
        assert!(
            matches!(got, Some(Err(ref e)) if e.status().map(|s| s.code) == Some(Code::FailedPrecondition)),
            "{got:?}"
        );
    }

    #[test]
    fn done_without_result() {
        let op = TestOperation::new(
            MockOperations::new(),
            RequestOptions::default(),
            model::Operation::default().set_done(true),
        );
        let got = op.result();
        assert!(matches!(got, Some(Err(ref e)) if e.is_deserialization()), "{got:?}");
    }

    #[test]
    fn metadata_type_mismatch() {
        let op = TestOperation::new(
            MockOperations::new(),
            RequestOptions::default(),
            model::Operation::default().set_metadata(to_any(&Empty::default()).expect("valid")),
        );
        let got = op.metadata();
        assert!(matches!(got, Err(ref e) if e.is_deserialization()), "{got:?}");
    }

    #[tokio::test]
    async fn reload_fires_on_done_once() -> anyhow::Result<()> {
        let mut mock = MockOperations::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_get_operation()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|r, _| r.name == "operations/test-001")
            .returning(|_, _| Ok(in_progress(50)));
        mock.expect_get_operation()
            .times(2)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(completed()));

        let mut op = TestOperation::new(mock, RequestOptions::default(), in_progress(0));
        let fired = Arc::new(Mutex::new(Vec::new()));
        let f = fired.clone();
        op.on_done(move |op| f.lock().unwrap().push(op.name().to_string()));

        op.reload().await?;
        assert!(!op.done());
        assert_eq!(op.metadata()?, Some(Progress { percent: 50 }));
        assert!(fired.lock().unwrap().is_empty());

        op.reload().await?;
        assert!(op.done());
        op.reload().await?;
        assert_eq!(*fired.lock().unwrap(), vec!["operations/test-001".to_string()]);
        Ok(())
    }

    #[test]
    fn on_done_when_already_done() {
        let mut op = TestOperation::new(MockOperations::new(), RequestOptions::default(), completed());
        let fired = Arc::new(Mutex::new(0));
        let f = fired.clone();
        op.on_done(move |_| *f.lock().unwrap() += 1);
        assert_eq!(*fired.lock().unwrap(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn wait_until_done_uses_linear_backoff() -> anyhow::Result<()> {
        let mut mock = MockOperations::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_get_operation()
            .times(2)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(in_progress(50)));
        mock.expect_get_operation()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(completed()));

        let mut op = TestOperation::new(mock, RequestOptions::default(), in_progress(0));
        let start = tokio::time::Instant::now();
        op.wait_until_done().await?;
        assert!(op.done());
        // 5s + 7s + 9s
        assert_eq!(start.elapsed(), Duration::from_secs(21));
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn wait_until_done_already_done() -> anyhow::Result<()> {
        let mut op = TestOperation::new(MockOperations::new(), RequestOptions::default(), completed());
        let start = tokio::time::Instant::now();
        op.wait_until_done().await?;
        assert_eq!(start.elapsed(), Duration::ZERO);
        Ok(())
    }

    #[test_case(2, 1; "two attempts")]
    #[test_case(3, 2; "three attempts")]
    #[test_case(5, 4; "five attempts")]
    #[tokio::test(start_paused = true)]
    async fn wait_until_done_attempt_limit(limit: u32, reloads: usize) {
        let mut mock = MockOperations::new();
        mock.expect_get_operation()
            .times(reloads)
            .returning(|_, _| Ok(in_progress(50)));

        let mut options = RequestOptions::default();
        options.set_polling_error_policy(Aip194Strict.with_attempt_limit(limit));
        let mut op = TestOperation::new(mock, options, in_progress(0));
        let got = op.wait_until_done().await;
        assert!(matches!(got, Err(ref e) if e.is_exhausted()), "{got:?}");
    }

    #[test_case(Code::Unavailable, true)]
    #[test_case(Code::NotFound, false)]
    #[test_case(Code::PermissionDenied, false)]
    #[tokio::test(start_paused = true)]
    async fn wait_until_done_reload_errors(code: Code, continues: bool) {
        let mut mock = MockOperations::new();
        let calls = Arc::new(Mutex::new(0));
        let c = calls.clone();
        mock.expect_get_operation()
            .times(1 + usize::from(continues))
            .returning(move |_, _| {
                let mut count = c.lock().unwrap();
                *count += 1;
                match *count {
                    1 => Err(Error::service(Status::default().set_code(code))),
                    _ => Ok(completed()),
                }
            });

        let op = TestOperation::new(mock, RequestOptions::default(), in_progress(0));
        let got = op.until_done().await;
        if continues {
            assert!(matches!(got, Ok(ref r) if r.name == "resources/r"), "{got:?}");
        } else {
            assert!(
                matches!(got, Err(ref e) if e.status().map(|s| s.code) == Some(code)),
                "{got:?}"
            );
        }
    }

    #[tokio::test(start_paused = true)]
    async fn until_done_operation_error() {
        let mut mock = MockOperations::new();
        mock.expect_get_operation()
            .times(1)
            .returning(|_, _| Ok(failed()));

        let op = TestOperation::new(mock, RequestOptions::default(), in_progress(0));
        let got = op.until_done().await;
        assert!(
            matches!(got, Err(ref e) if e.status().map(|s| s.code) == Some(Code::FailedPrecondition)),
            "{got:?}"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn wait_until_done_is_cancellable() {
        let mut mock = MockOperations::new();
        mock.expect_get_operation()
            .returning(|_, _| Ok(in_progress(50)));
        let mut op = TestOperation::new(mock, RequestOptions::default(), in_progress(0));
        let got = tokio::time::timeout(Duration::from_secs(60), op.wait_until_done()).await;
        assert!(got.is_err(), "{got:?}");
        assert!(!op.done());
    }

    #[tokio::test]
    async fn cancel_and_delete() -> anyhow::Result<()> {
        let mut mock = MockOperations::new();
        mock.expect_cancel_operation()
            .withf(|r, _| r.name == "operations/test-001")
            .times(1)
            .returning(|_, _| Ok(()));
        mock.expect_delete_operation()
            .withf(|r, _| r.name == "operations/test-001")
            .times(1)
            .returning(|_, _| Ok(()));
        let op = TestOperation::new(mock, RequestOptions::default(), in_progress(0));
        op.cancel().await?;
        op.delete().await?;
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn poller() {
        let mut mock = MockOperations::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_get_operation()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Err(unavailable()));
        mock.expect_get_operation()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(in_progress(75)));
        mock.expect_get_operation()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(completed()));

        let mut op = TestOperation::new(mock, RequestOptions::default(), in_progress(25));
        let p = op.poll().await;
        assert!(
            matches!(p, Some(PollingResult::InProgress(Some(Progress { percent: 25 })))),
            "{p:?}"
        );
        let p = op.poll().await;
        assert!(matches!(p, Some(PollingResult::PollingError(_))), "{p:?}");
        let p = op.poll().await;
        assert!(
            matches!(p, Some(PollingResult::InProgress(Some(Progress { percent: 75 })))),
            "{p:?}"
        );
        let p = op.poll().await;
        assert!(
            matches!(p, Some(PollingResult::Completed(Ok(Resource { ref name }))) if name == "resources/r"),
            "{p:?}"
        );
        let p = op.poll().await;
        assert!(p.is_none(), "{p:?}");
    }
}
