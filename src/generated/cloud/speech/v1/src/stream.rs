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

//! A bidirectional streaming recognition session.

use crate::model::{
    SpeechEventType, StreamingRecognitionConfig, StreamingRecognizeRequest,
    StreamingRecognizeResponse,
};
use crate::result::{InterimResult, RecognitionResult};
use crate::stub::Speech;
use crate::{Error, Result};
use futures::StreamExt;
use gax::options::RequestOptions;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio_util::sync::CancellationToken;

type InterimCallback = Arc<dyn Fn(&[RecognitionResult], &[InterimResult]) + Send + Sync>;
type ResultCallback = Arc<dyn Fn(&[RecognitionResult]) + Send + Sync>;
type ErrorCallback = Arc<dyn Fn(&Error) + Send + Sync>;
type EventCallback = Arc<dyn Fn() + Send + Sync>;

/// A streaming recognition session.
///
/// The application sends audio in chunks with [send][RecognizeStream::send],
/// and signals the end of the audio with [stop][RecognizeStream::stop]. The
/// service returns results while the audio is streamed. Final results are
/// accumulated and available via [results][RecognizeStream::results].
///
/// The responses are processed by a background task. Applications observe
/// them by registering callbacks, which run on a separate dispatcher task,
/// in the order they were registered. Callbacks may call any function on the
/// stream, including `stop()` and registering more callbacks.
///
/// A session is started at most once, and completes exactly once: when the
/// service closes the stream, or when the stream fails. The functions of
/// this type must be called within a Tokio runtime.
///
/// # Example
/// ```no_run
/// # use google_cloud_speech_v1::client::Speech;
/// # use google_cloud_speech_v1::model::{AudioEncoding, RecognitionConfig, StreamingRecognitionConfig};
/// # async fn sample(client: &Speech, chunks: Vec<bytes::Bytes>) -> anyhow::Result<()> {
/// let config = StreamingRecognitionConfig::default().set_config(
///     RecognitionConfig::default()
///         .set_encoding(AudioEncoding::Linear16)
///         .set_sample_rate_hertz(16000)
///         .set_language_code("en-US"),
/// );
/// let stream = client.stream(config)?;
/// stream.on_result(|results| println!("{} final results", results.len()));
/// for chunk in chunks {
///     stream.send(chunk)?;
/// }
/// stream.stop();
/// stream.wait_until_complete().await;
/// for result in stream.results() {
///     println!("{}", result.transcript);
/// }
/// # Ok(()) }
/// ```
#[derive(Clone)]
pub struct RecognizeStream {
    inner: Arc<Session>,
}

struct Session {
    stub: Arc<dyn Speech>,
    options: RequestOptions,
    config: StreamingRecognitionConfig,
    state: Mutex<State>,
    // Cancelled once the session is complete.
    done: CancellationToken,
}

#[derive(Default)]
struct State {
    started: bool,
    stopped: bool,
    complete: bool,
    // Dropped on `stop()`, which closes the request stream.
    requests: Option<UnboundedSender<StreamingRecognizeRequest>>,
    results: Vec<RecognitionResult>,
    callbacks: Callbacks,
}

#[derive(Clone, Default)]
struct Callbacks {
    interim: Vec<InterimCallback>,
    result: Vec<ResultCallback>,
    complete: Vec<EventCallback>,
    utterance: Vec<EventCallback>,
    speech_start: Vec<EventCallback>,
    speech_end: Vec<EventCallback>,
    error: Vec<ErrorCallback>,
}

/// The notifications sent from the I/O task to the dispatcher.
enum Event {
    Interim(Vec<RecognitionResult>, Vec<InterimResult>),
    Result(Vec<RecognitionResult>),
    Utterance,
    SpeechStart,
    SpeechEnd,
    Error(Error),
}

impl RecognizeStream {
    pub(crate) fn new(
        stub: Arc<dyn Speech>,
        config: StreamingRecognitionConfig,
        options: RequestOptions,
    ) -> Self {
        Self {
            inner: Arc::new(Session {
                stub,
                options,
                config,
                state: Mutex::new(State::default()),
                done: CancellationToken::new(),
            }),
        }
    }

    /// Starts the session.
    ///
    /// Opens the stream and sends the streaming configuration. Calling this
    /// function more than once has no effect.
    pub fn start(&self) {
        let mut state = self.inner.state();
        if state.started {
            return;
        }
        state.started = true;
        let (tx, rx) = unbounded_channel();
        let first = StreamingRecognizeRequest::default()
            .set_streaming_config(self.inner.config.clone());
        // The receiver is alive, it is owned by this function.
        let _ = tx.send(first);
        state.requests = Some(tx);
        drop(state);

        let (events_tx, events_rx) = unbounded_channel();
        tokio::spawn(run(self.inner.clone(), rx, events_tx));
        tokio::spawn(dispatch(self.inner.clone(), events_rx));
        tracing::debug!("streaming recognition session started");
    }

    /// Returns true if the session has started.
    pub fn is_started(&self) -> bool {
        self.inner.state().started
    }

    /// Sends a chunk of audio to the service.
    ///
    /// Starts the session if needed. Fails if the session is stopped or
    /// complete.
    pub fn send<T: Into<bytes::Bytes>>(&self, chunk: T) -> Result<()> {
        self.start();
        let state = self.inner.state();
        if state.complete {
            return Err(Error::io("the recognize stream is complete"));
        }
        let Some(requests) = state.requests.as_ref() else {
            return Err(Error::io("the recognize stream is stopped"));
        };
        requests
            .send(StreamingRecognizeRequest::default().set_audio_content(chunk))
            .map_err(Error::io)
    }

    /// Signals the end of the audio.
    ///
    /// The service returns any pending results and then closes the stream,
    /// completing the session. Has no effect if the session never started.
    pub fn stop(&self) {
        let mut state = self.inner.state();
        if !state.started || state.stopped {
            return;
        }
        state.stopped = true;
        state.requests = None;
        tracing::debug!("streaming recognition session stopped");
    }

    /// Returns true if [stop][RecognizeStream::stop] was called on a started
    /// session.
    pub fn is_stopped(&self) -> bool {
        self.inner.state().stopped
    }

    /// The final results received so far, in the order they were received.
    pub fn results(&self) -> Vec<RecognitionResult> {
        self.inner.state().results.clone()
    }

    /// Returns true once the session is complete.
    ///
    /// A complete session receives no more results, and all the callbacks
    /// registered with [on_complete][RecognizeStream::on_complete] have run.
    pub fn is_complete(&self) -> bool {
        self.inner.state().complete
    }

    /// Waits until the session is complete.
    ///
    /// Dropping the future stops waiting, it does not affect the session.
    pub async fn wait_until_complete(&self) {
        self.inner.done.cancelled().await
    }

    /// Waits until the session is complete, or until `timeout` elapses.
    ///
    /// Returns a [timeout][Error::is_timeout] error in the latter case.
    pub async fn wait_until_complete_for(&self, timeout: std::time::Duration) -> Result<()> {
        tokio::time::timeout(timeout, self.inner.done.cancelled())
            .await
            .map_err(Error::timeout)
    }

    /// Registers a callback for interim results.
    ///
    /// The callback receives the final results accumulated so far, and the
    /// interim results in the latest response. Interim results are only
    /// returned if the streaming config requests them.
    pub fn on_interim<F>(&self, callback: F)
    where
        F: Fn(&[RecognitionResult], &[InterimResult]) + Send + Sync + 'static,
    {
        self.inner.state().callbacks.interim.push(Arc::new(callback));
    }

    /// Registers a callback for final results.
    ///
    /// The callback receives all the final results accumulated so far,
    /// including the new one.
    pub fn on_result<F>(&self, callback: F)
    where
        F: Fn(&[RecognitionResult]) + Send + Sync + 'static,
    {
        self.inner.state().callbacks.result.push(Arc::new(callback));
    }

    /// Registers a callback to run when the session completes.
    pub fn on_complete<F>(&self, callback: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.inner.state().callbacks.complete.push(Arc::new(callback));
    }

    /// Registers a callback to run when the service detects the end of a
    /// single utterance.
    ///
    /// Only happens if the streaming config sets `single_utterance`.
    pub fn on_utterance<F>(&self, callback: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.inner.state().callbacks.utterance.push(Arc::new(callback));
    }

    /// Registers a callback to run when the service detects speech.
    ///
    /// Only happens if the streaming config enables voice activity events.
    pub fn on_speech_start<F>(&self, callback: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.inner.state().callbacks.speech_start.push(Arc::new(callback));
    }

    /// Registers a callback to run when the service detects the end of
    /// speech.
    pub fn on_speech_end<F>(&self, callback: F)
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.inner.state().callbacks.speech_end.push(Arc::new(callback));
    }

    /// Registers a callback for errors.
    ///
    /// Errors reported in a response do not end the session. Errors opening
    /// or reading the stream end the session after the callback runs.
    pub fn on_error<F>(&self, callback: F)
    where
        F: Fn(&Error) + Send + Sync + 'static,
    {
        self.inner.state().callbacks.error.push(Arc::new(callback));
    }
}

impl std::fmt::Debug for RecognizeStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.state();
        f.debug_struct("RecognizeStream")
            .field("config", &self.inner.config)
            .field("started", &state.started)
            .field("stopped", &state.stopped)
            .field("complete", &state.complete)
            .field("results", &state.results)
            .finish()
    }
}

impl Session {
    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Converts one response into events, updating the accumulated results.
    fn on_response(&self, response: StreamingRecognizeResponse) -> Vec<Event> {
        let mut events = Vec::new();
        let mut results = response.results.into_iter().peekable();
        if let Some(r) = results.next_if(|r| r.is_final) {
            match RecognitionResult::try_from(r) {
                Ok(r) => {
                    let mut state = self.state();
                    state.results.push(r);
                    events.push(Event::Result(state.results.clone()));
                }
                Err(e) => events.push(Event::Error(e)),
            }
        }
        // Only the first result can be final, the rest are interim.
        let interim = results
            .map(InterimResult::try_from)
            .collect::<Result<Vec<_>>>();
        match interim {
            Ok(interim) if interim.is_empty() => {}
            Ok(interim) => events.push(Event::Interim(self.state().results.clone(), interim)),
            Err(e) => events.push(Event::Error(e)),
        }
        match response.speech_event_type {
            SpeechEventType::EndOfSingleUtterance => events.push(Event::Utterance),
            SpeechEventType::SpeechActivityBegin => events.push(Event::SpeechStart),
            SpeechEventType::SpeechActivityEnd => events.push(Event::SpeechEnd),
            _ => {}
        }
        if let Some(status) = response.error {
            events.push(Event::Error(Error::service(status)));
        }
        events
    }

    /// Marks the session as complete, waking up any waiters.
    fn finish(&self) {
        let mut state = self.state();
        state.complete = true;
        state.requests = None;
        // Callbacks may hold clones of the stream, release them.
        state.callbacks = Callbacks::default();
        drop(state);
        self.done.cancel();
    }
}

/// Sends the requests and reads the responses.
///
/// The session is complete once this function returns and the dispatcher
/// drains the remaining events.
async fn run(
    session: Arc<Session>,
    requests: UnboundedReceiver<StreamingRecognizeRequest>,
    events: UnboundedSender<Event>,
) {
    let mut responses = match session
        .stub
        .streaming_recognize(requests, session.options.clone())
        .await
    {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!("cannot open the recognize stream: {e}");
            let _ = events.send(Event::Error(e));
            return;
        }
    };
    while let Some(response) = responses.next().await {
        match response {
            Ok(r) => {
                for event in session.on_response(r) {
                    let _ = events.send(event);
                }
            }
            Err(e) => {
                tracing::warn!("error reading the recognize stream: {e}");
                let _ = events.send(Event::Error(e));
                break;
            }
        }
    }
    tracing::debug!("recognize stream closed");
}

/// Runs the callbacks for each event, outside the state lock.
///
/// The I/O task drops its sender when it finishes, even if it panics, so
/// the session always completes.
async fn dispatch(session: Arc<Session>, mut events: UnboundedReceiver<Event>) {
    while let Some(event) = events.recv().await {
        let callbacks = session.state().callbacks.clone();
        match event {
            Event::Interim(results, interim) => {
                callbacks
                    .interim
                    .iter()
                    .for_each(|c| c(results.as_slice(), interim.as_slice()))
            }
            Event::Result(results) => callbacks.result.iter().for_each(|c| c(results.as_slice())),
            Event::Utterance => callbacks.utterance.iter().for_each(|c| c()),
            Event::SpeechStart => callbacks.speech_start.iter().for_each(|c| c()),
            Event::SpeechEnd => callbacks.speech_end.iter().for_each(|c| c()),
            Event::Error(e) => callbacks.error.iter().for_each(|c| c(&e)),
        }
    }
    let complete = session.state().callbacks.complete.clone();
    complete.iter().for_each(|c| c());
    session.finish();
    tracing::debug!("streaming recognition session complete");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        SpeechRecognitionAlternative, StreamingRecognitionResult,
    };
    use crate::stub::tests::MockSpeech;
    use gax::error::rpc::{Code, Status};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    const TIMEOUT: Duration = Duration::from_secs(10);

    fn result(transcript: &str, is_final: bool) -> StreamingRecognitionResult {
        StreamingRecognitionResult::default()
            .set_alternatives([SpeechRecognitionAlternative::default()
                .set_transcript(transcript)
                .set_confidence(0.9_f32)])
            .set_is_final(is_final)
    }

    fn response(results: Vec<StreamingRecognitionResult>) -> StreamingRecognizeResponse {
        StreamingRecognizeResponse::default().set_results(results)
    }

    fn stream_with(responses: Vec<Result<StreamingRecognizeResponse>>) -> RecognizeStream {
        let mut mock = MockSpeech::new();
        mock.expect_streaming_recognize()
            .times(1)
            .return_once(move |_requests, _options| {
                Ok(futures::stream::iter(responses).boxed())
            });
        RecognizeStream::new(
            Arc::new(mock),
            StreamingRecognitionConfig::default(),
            RequestOptions::default(),
        )
    }

    fn counter() -> Arc<AtomicUsize> {
        Arc::new(AtomicUsize::new(0))
    }

    #[tokio::test]
    async fn new_stream_is_idle() {
        let mut mock = MockSpeech::new();
        mock.expect_streaming_recognize().never();
        let stream = RecognizeStream::new(
            Arc::new(mock),
            StreamingRecognitionConfig::default(),
            RequestOptions::default(),
        );
        assert!(!stream.is_started());
        assert!(!stream.is_stopped());
        assert!(!stream.is_complete());
        assert!(stream.results().is_empty());
        // Stopping a stream that never started has no effect.
        stream.stop();
        assert!(!stream.is_stopped());
    }

    #[tokio::test]
    async fn final_and_interim_split() -> anyhow::Result<()> {
        let stream = stream_with(vec![
            Ok(response(vec![result("how old", false)])),
            Ok(response(vec![
                result("how old is the Brooklyn Bridge", true),
                result("Brooklyn", false),
            ])),
        ]);
        let interim_calls = Arc::new(Mutex::new(Vec::new()));
        let calls = interim_calls.clone();
        stream.on_interim(move |finals, interim| {
            let transcripts = interim.iter().map(|r| r.transcript.clone()).collect::<Vec<_>>();
            calls
                .lock()
                .expect("test lock")
                .push((finals.len(), transcripts));
        });
        stream.start();
        stream.wait_until_complete_for(TIMEOUT).await?;

        let transcripts = stream
            .results()
            .into_iter()
            .map(|r| r.transcript)
            .collect::<Vec<_>>();
        assert_eq!(transcripts, vec!["how old is the Brooklyn Bridge"]);
        let calls = interim_calls.lock().expect("test lock").clone();
        assert_eq!(
            calls,
            vec![
                (0, vec!["how old".to_string()]),
                (1, vec!["Brooklyn".to_string()]),
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn result_callbacks_before_interim() -> anyhow::Result<()> {
        let stream = stream_with(vec![Ok(response(vec![
            result("final", true),
            result("next", false),
        ]))]);
        let order = Arc::new(Mutex::new(Vec::new()));
        let o = order.clone();
        stream.on_result(move |finals| {
            o.lock()
                .expect("test lock")
                .push(format!("result(finals={})", finals.len()));
        });
        let o = order.clone();
        stream.on_interim(move |finals, _| {
            o.lock()
                .expect("test lock")
                .push(format!("interim(finals={})", finals.len()));
        });
        stream.start();
        stream.wait_until_complete_for(TIMEOUT).await?;
        let order = order.lock().expect("test lock").clone();
        assert_eq!(order, vec!["result(finals=1)", "interim(finals=1)"]);
        Ok(())
    }

    #[tokio::test]
    async fn later_final_results_are_interim() -> anyhow::Result<()> {
        let stream = stream_with(vec![Ok(response(vec![
            result("first", false),
            result("second", true),
        ]))]);
        let interim_calls = Arc::new(Mutex::new(Vec::new()));
        let calls = interim_calls.clone();
        stream.on_interim(move |_, interim| {
            let transcripts = interim.iter().map(|r| r.transcript.clone()).collect::<Vec<_>>();
            calls.lock().expect("test lock").push(transcripts);
        });
        stream.start();
        stream.wait_until_complete_for(TIMEOUT).await?;
        assert!(stream.results().is_empty());
        let calls = interim_calls.lock().expect("test lock").clone();
        assert_eq!(calls, vec![vec!["first".to_string(), "second".to_string()]]);
        Ok(())
    }

    #[tokio::test]
    async fn speech_events() -> anyhow::Result<()> {
        let stream = stream_with(vec![
            Ok(StreamingRecognizeResponse::default()
                .set_speech_event_type(SpeechEventType::SpeechActivityBegin)),
            Ok(StreamingRecognizeResponse::default()
                .set_speech_event_type(SpeechEventType::SpeechActivityEnd)),
            Ok(StreamingRecognizeResponse::default()
                .set_speech_event_type(SpeechEventType::EndOfSingleUtterance)),
        ]);
        let (start, end, utterance) = (counter(), counter(), counter());
        let c = start.clone();
        stream.on_speech_start(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });
        let c = end.clone();
        stream.on_speech_end(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });
        let c = utterance.clone();
        stream.on_utterance(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });
        stream.start();
        stream.wait_until_complete_for(TIMEOUT).await?;
        assert_eq!(start.load(Ordering::SeqCst), 1);
        assert_eq!(end.load(Ordering::SeqCst), 1);
        assert_eq!(utterance.load(Ordering::SeqCst), 1);
        Ok(())
    }

    #[tokio::test]
    async fn response_error_continues() -> anyhow::Result<()> {
        let status = Status::default()
            .set_code(Code::InvalidArgument)
            .set_message("bad audio");
        let stream = stream_with(vec![
            Ok(StreamingRecognizeResponse::default().set_error(status)),
            Ok(response(vec![result("still here", true)])),
        ]);
        let errors = Arc::new(Mutex::new(Vec::new()));
        let e = errors.clone();
        stream.on_error(move |err| {
            e.lock()
                .expect("test lock")
                .push(err.status().map(|s| s.code));
        });
        stream.start();
        stream.wait_until_complete_for(TIMEOUT).await?;
        assert_eq!(
            *errors.lock().expect("test lock"),
            vec![Some(Code::InvalidArgument)]
        );
        assert_eq!(stream.results().len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn decode_error_is_reported() -> anyhow::Result<()> {
        let stream = stream_with(vec![Ok(response(vec![
            StreamingRecognitionResult::default().set_is_final(true),
        ]))]);
        let errors = counter();
        let c = errors.clone();
        stream.on_error(move |e| {
            assert!(e.is_deserialization(), "{e:?}");
            c.fetch_add(1, Ordering::SeqCst);
        });
        stream.start();
        stream.wait_until_complete_for(TIMEOUT).await?;
        assert_eq!(errors.load(Ordering::SeqCst), 1);
        assert!(stream.results().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn stream_error_completes() -> anyhow::Result<()> {
        let stream = stream_with(vec![
            Ok(response(vec![result("first", true)])),
            Err(Error::transport("connection reset")),
            Ok(response(vec![result("never delivered", true)])),
        ]);
        let (errors, completions) = (counter(), counter());
        let c = errors.clone();
        stream.on_error(move |_| {
            c.fetch_add(1, Ordering::SeqCst);
        });
        let c = completions.clone();
        stream.on_complete(move || {
            c.fetch_add(1, Ordering::SeqCst);
        });
        stream.start();
        stream.wait_until_complete_for(TIMEOUT).await?;
        assert!(stream.is_complete());
        assert_eq!(errors.load(Ordering::SeqCst), 1);
        assert_eq!(completions.load(Ordering::SeqCst), 1);
        assert_eq!(stream.results().len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn open_error_completes() -> anyhow::Result<()> {
        let mut mock = MockSpeech::new();
        mock.expect_streaming_recognize()
            .times(1)
            .return_once(|_, _| Err(Error::transport("cannot connect")));
        let stream = RecognizeStream::new(
            Arc::new(mock),
            StreamingRecognitionConfig::default(),
            RequestOptions::default(),
        );
        let errors = counter();
        let c = errors.clone();
        stream.on_error(move |e| {
            assert!(e.is_transport(), "{e:?}");
            c.fetch_add(1, Ordering::SeqCst);
        });
        stream.start();
        stream.wait_until_complete_for(TIMEOUT).await?;
        assert_eq!(errors.load(Ordering::SeqCst), 1);

        let got = stream.send(bytes::Bytes::from_static(b"late"));
        assert!(matches!(got, Err(ref e) if e.is_io()), "{got:?}");
        Ok(())
    }

    #[tokio::test]
    async fn complete_callbacks_run_before_complete() -> anyhow::Result<()> {
        let stream = stream_with(Vec::new());
        let observed = Arc::new(Mutex::new(None));
        let handle = stream.clone();
        let o = observed.clone();
        stream.on_complete(move || {
            *o.lock().expect("test lock") = Some(handle.is_complete());
        });
        stream.start();
        stream.wait_until_complete_for(TIMEOUT).await?;
        assert_eq!(*observed.lock().expect("test lock"), Some(false));
        assert!(stream.is_complete());
        Ok(())
    }

    #[tokio::test]
    async fn callbacks_may_call_the_stream() -> anyhow::Result<()> {
        let stream = stream_with(vec![Ok(response(vec![result("done", true)]))]);
        let handle = stream.clone();
        let seen = counter();
        let c = seen.clone();
        stream.on_result(move |results| {
            // Would deadlock if the callbacks ran under the state lock.
            assert_eq!(handle.results().len(), results.len());
            handle.stop();
            let c = c.clone();
            handle.on_complete(move || {
                c.fetch_add(1, Ordering::SeqCst);
            });
        });
        stream.start();
        stream.wait_until_complete_for(TIMEOUT).await?;
        assert!(stream.is_stopped());
        assert_eq!(seen.load(Ordering::SeqCst), 1);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn wait_timeout() -> anyhow::Result<()> {
        let mut mock = MockSpeech::new();
        mock.expect_streaming_recognize()
            .times(1)
            .return_once(|_, _| Ok(futures::stream::pending().boxed()));
        let stream = RecognizeStream::new(
            Arc::new(mock),
            StreamingRecognitionConfig::default(),
            RequestOptions::default(),
        );
        stream.start();
        let got = stream.wait_until_complete_for(Duration::from_secs(5)).await;
        assert!(matches!(got, Err(ref e) if e.is_timeout()), "{got:?}");
        assert!(!stream.is_complete());
        Ok(())
    }
}
