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
use crate::model::{LongRunningRecognizeMetadata, LongRunningRecognizeResponse};
use crate::result::{RecognitionResult, from_results};

/// The long-running operation type returned by `LongRunningRecognize`.
pub type RecognizeOperation =
    lro::Operation<LongRunningRecognizeResponse, LongRunningRecognizeMetadata>;

/// A long-running recognition job.
///
/// Wraps the long-running operation started by
/// [recognize_job][crate::client::Speech::recognize_job] and converts its
/// response into [RecognitionResult]s.
///
/// # Example
/// ```no_run
/// # use google_cloud_speech_v1::client::Speech;
/// # use google_cloud_speech_v1::model::RecognitionConfig;
/// # async fn sample(client: &Speech) -> anyhow::Result<()> {
/// let job = client
///     .recognize_job("gs://my-bucket/audio.flac", RecognitionConfig::default())
///     .start()
///     .await?;
/// for result in job.until_done().await? {
///     println!("{}", result.transcript);
/// }
/// # Ok(()) }
/// ```
#[derive(Debug)]
pub struct RecognizeJob(RecognizeOperation);

impl RecognizeJob {
    pub(crate) fn new(operation: RecognizeOperation) -> Self {
        Self(operation)
    }

    /// The name of the underlying operation.
    pub fn name(&self) -> &str {
        self.0.name()
    }

    /// Returns true if the job has completed, successfully or not.
    pub fn done(&self) -> bool {
        self.0.done()
    }

    /// The progress reported by the service, if any.
    pub fn metadata(&self) -> Result<Option<LongRunningRecognizeMetadata>> {
        self.0.metadata()
    }

    /// The recognition results, `None` while the job is in progress.
    pub fn results(&self) -> Option<Result<Vec<RecognitionResult>>> {
        self.0
            .result()
            .map(|r| r.and_then(|response| from_results(response.results)))
    }

    /// Fetches the latest status of the job.
    pub async fn reload(&mut self) -> Result<()> {
        self.0.reload().await
    }

    /// Waits until the job completes, see [lro::Operation::wait_until_done].
    pub async fn wait_until_done(&mut self) -> Result<()> {
        self.0.wait_until_done().await
    }

    /// Waits until the job completes and returns its results.
    pub async fn until_done(mut self) -> Result<Vec<RecognitionResult>> {
        self.0.wait_until_done().await?;
        match self.results() {
            Some(r) => r,
            None => Err(gax::error::Error::deser(format!(
                "operation {} is not done after waiting",
                self.name()
            ))),
        }
    }

    /// The underlying long-running operation.
    pub fn operation(&self) -> &RecognizeOperation {
        &self.0
    }

    /// Converts the job into the underlying long-running operation.
    pub fn into_operation(self) -> RecognizeOperation {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{SpeechRecognitionAlternative, SpeechRecognitionResult};
    use gax::error::rpc::{Code, Status};
    use gax::options::RequestOptions;
    use lro::model::{GetOperationRequest, Operation, operation};
    use lro::to_any;

    mockall::mock! {
        #[derive(Debug)]
        Operations {}
        #[async_trait::async_trait]
        impl lro::stub::Operations for Operations {
            async fn get_operation(&self, req: GetOperationRequest, options: RequestOptions) -> Result<Operation>;
        }
    }

    fn response() -> LongRunningRecognizeResponse {
        LongRunningRecognizeResponse::default().set_results([SpeechRecognitionResult::default()
            .set_alternatives([SpeechRecognitionAlternative::default()
                .set_transcript("how old is the Brooklyn Bridge")
                .set_confidence(0.98_f32)])])
    }

    fn pending() -> anyhow::Result<Operation> {
        let metadata = LongRunningRecognizeMetadata::default().set_progress_percent(50);
        Ok(Operation::default()
            .set_name("operations/job-001")
            .set_metadata(to_any(&metadata)?))
    }

    fn done() -> anyhow::Result<Operation> {
        Ok(Operation::default()
            .set_name("operations/job-001")
            .set_done(true)
            .set_result(operation::Result::Response(to_any(&response())?)))
    }

    #[tokio::test(start_paused = true)]
    async fn results_after_reload() -> anyhow::Result<()> {
        let completed = done()?;
        let mut mock = MockOperations::new();
        mock.expect_get_operation()
            .withf(|r, _| r.name == "operations/job-001")
            .times(1)
            .return_once(move |_, _| Ok(completed));

        let mut job = RecognizeJob::new(lro::Operation::new(
            mock,
            RequestOptions::default(),
            pending()?,
        ));
        assert!(!job.done());
        assert!(job.results().is_none());
        let metadata = job.metadata()?.map(|m| m.progress_percent);
        assert_eq!(metadata, Some(50));

        job.reload().await?;
        assert!(job.done());
        let results = job.results().transpose()?.unwrap_or_default();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].transcript, "how old is the Brooklyn Bridge");
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn until_done_polls() -> anyhow::Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockOperations::new();
        let still_pending = pending()?;
        mock.expect_get_operation()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(move |_, _| Ok(still_pending));
        let completed = done()?;
        mock.expect_get_operation()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(move |_, _| Ok(completed));

        let job = RecognizeJob::new(lro::Operation::new(
            mock,
            RequestOptions::default(),
            pending()?,
        ));
        let start = tokio::time::Instant::now();
        let results = job.until_done().await?;
        assert_eq!(results.len(), 1);
        // The default backoff waits 5s, then 7s.
        assert_eq!(start.elapsed(), std::time::Duration::from_secs(12));
        Ok(())
    }

    #[tokio::test]
    async fn failed_job() -> anyhow::Result<()> {
        let status = Status::default()
            .set_code(Code::InvalidArgument)
            .set_message("unsupported encoding");
        let op = Operation::default()
            .set_name("operations/job-001")
            .set_done(true)
            .set_result(operation::Result::Error(status.clone()));
        let job = RecognizeJob::new(lro::Operation::new(
            MockOperations::new(),
            RequestOptions::default(),
            op,
        ));
        let got = job.results().transpose();
        assert!(
            matches!(got, Err(ref e) if e.status() == Some(&status)),
            "{got:?}"
        );
        Ok(())
    }
}
