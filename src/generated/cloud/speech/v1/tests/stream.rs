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

#[cfg(test)]
mod test {
    use futures::StreamExt;
    use gax::error::Error;
    use gax::error::rpc::{Code, Status};
    use gax::options::RequestOptions;
    use google_cloud_speech_v1::client::Speech;
    use google_cloud_speech_v1::model::{
        AudioEncoding, RecognitionConfig, SpeechRecognitionAlternative,
        StreamingRecognitionConfig, StreamingRecognitionResult, StreamingRecognizeRequest,
        StreamingRecognizeResponse,
    };
    use google_cloud_speech_v1::stub::ResponseStream;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tokio::sync::mpsc::UnboundedReceiver;

    type Requests = Arc<Mutex<Vec<StreamingRecognizeRequest>>>;

    /// A fake service.
    ///
    /// Records every request it receives. Once the request stream closes it
    /// returns the canned responses, followed by `trailer` if set.
    #[derive(Debug, Default)]
    struct FakeSpeech {
        requests: Requests,
        opened: Arc<AtomicUsize>,
        responses: Vec<StreamingRecognizeResponse>,
        trailer: Option<Status>,
    }

    impl lro::stub::Operations for FakeSpeech {}

    #[async_trait::async_trait]
    impl google_cloud_speech_v1::stub::Speech for FakeSpeech {
        async fn streaming_recognize(
            &self,
            mut requests: UnboundedReceiver<StreamingRecognizeRequest>,
            _options: RequestOptions,
        ) -> gax::Result<ResponseStream> {
            self.opened.fetch_add(1, Ordering::SeqCst);
            let recorded = self.requests.clone();
            let responses = self.responses.clone();
            let trailer = self.trailer.clone();
            let stream = futures::stream::once(async move {
                while let Some(r) = requests.recv().await {
                    recorded.lock().expect("lock is not poisoned").push(r);
                }
                let mut items: Vec<gax::Result<StreamingRecognizeResponse>> =
                    responses.into_iter().map(Ok).collect();
                if let Some(status) = trailer {
                    items.push(Err(Error::service(status)));
                }
                futures::stream::iter(items)
            })
            .flatten();
            Ok(stream.boxed())
        }
    }

    fn config() -> StreamingRecognitionConfig {
        StreamingRecognitionConfig::default().set_config(
            RecognitionConfig::default()
                .set_encoding(AudioEncoding::Linear16)
                .set_sample_rate_hertz(16000)
                .set_language_code("en-US"),
        )
    }

    fn result(transcript: &str, is_final: bool) -> StreamingRecognitionResult {
        StreamingRecognitionResult::default()
            .set_is_final(is_final)
            .set_alternatives([SpeechRecognitionAlternative::default()
                .set_transcript(transcript)
                .set_confidence(0.9_f32)])
    }

    fn responses() -> Vec<StreamingRecognizeResponse> {
        vec![
            StreamingRecognizeResponse::default().set_results([result("how", false)]),
            StreamingRecognizeResponse::default().set_results([result("how old is", true)]),
            StreamingRecognizeResponse::default().set_results([result("the", false)]),
            StreamingRecognizeResponse::default()
                .set_results([result("the Brooklyn Bridge", true)]),
        ]
    }

    #[tokio::test]
    async fn chunks_are_sent_in_order() -> anyhow::Result<()> {
        let fake = FakeSpeech {
            responses: responses(),
            ..FakeSpeech::default()
        };
        let requests = fake.requests.clone();
        let client = Speech::from_stub(fake);
        let stream = client.stream(config())?;
        stream.send(vec![1_u8, 2])?;
        stream.send(vec![3_u8, 4])?;
        stream.send(vec![5_u8])?;
        stream.stop();
        assert!(stream.send(vec![6_u8]).is_err());
        stream.wait_until_complete_for(Duration::from_secs(5)).await?;

        let got = requests.lock().expect("lock is not poisoned").clone();
        assert_eq!(got.len(), 4, "{got:?}");
        assert_eq!(got[0].streaming_config(), Some(&config()));
        let audio = got[1..]
            .iter()
            .map(|r| r.audio_content().map(|b| b.to_vec()))
            .collect::<Vec<_>>();
        assert_eq!(
            audio,
            vec![Some(vec![1_u8, 2]), Some(vec![3_u8, 4]), Some(vec![5_u8])]
        );
        Ok(())
    }

    #[tokio::test]
    async fn final_results_only() -> anyhow::Result<()> {
        let fake = FakeSpeech {
            responses: responses(),
            ..FakeSpeech::default()
        };
        let client = Speech::from_stub(fake);
        let stream = client.stream(config())?;
        let sizes = Arc::new(Mutex::new(Vec::new()));
        let on_result = sizes.clone();
        stream.on_result(move |results| {
            on_result
                .lock()
                .expect("lock is not poisoned")
                .push(results.len())
        });
        for chunk in [b"abc".to_vec(), b"def".to_vec(), b"ghi".to_vec()] {
            stream.send(chunk)?;
        }
        stream.stop();
        stream.wait_until_complete_for(Duration::from_secs(5)).await?;

        let transcripts = stream
            .results()
            .into_iter()
            .map(|r| r.transcript)
            .collect::<Vec<_>>();
        assert_eq!(transcripts, vec!["how old is", "the Brooklyn Bridge"]);
        // The accumulated results never shrink.
        let sizes = sizes.lock().expect("lock is not poisoned").clone();
        assert_eq!(sizes, vec![1, 2]);
        Ok(())
    }

    #[tokio::test]
    async fn completes_once_on_success() -> anyhow::Result<()> {
        let fake = FakeSpeech {
            responses: responses(),
            ..FakeSpeech::default()
        };
        let client = Speech::from_stub(fake);
        let stream = client.stream(config())?;
        let count = Arc::new(AtomicUsize::new(0));
        let on_complete = count.clone();
        stream.on_complete(move || {
            on_complete.fetch_add(1, Ordering::SeqCst);
        });
        stream.send(b"audio".to_vec())?;
        stream.stop();
        stream.wait_until_complete_for(Duration::from_secs(5)).await?;
        assert!(stream.is_complete());
        assert_eq!(count.load(Ordering::SeqCst), 1);

        // Waiting again returns immediately.
        stream.wait_until_complete_for(Duration::from_secs(5)).await?;
        stream.stop();
        assert_eq!(count.load(Ordering::SeqCst), 1);
        Ok(())
    }

    #[tokio::test]
    async fn completes_once_on_error() -> anyhow::Result<()> {
        let status = Status::default()
            .set_code(Code::Unavailable)
            .set_message("try again");
        let fake = FakeSpeech {
            responses: responses()[..2].to_vec(),
            trailer: Some(status.clone()),
            ..FakeSpeech::default()
        };
        let client = Speech::from_stub(fake);
        let stream = client.stream(config())?;
        let completed = Arc::new(AtomicUsize::new(0));
        let on_complete = completed.clone();
        stream.on_complete(move || {
            on_complete.fetch_add(1, Ordering::SeqCst);
        });
        let errors = Arc::new(Mutex::new(Vec::new()));
        let on_error = errors.clone();
        stream.on_error(move |e| {
            on_error
                .lock()
                .expect("lock is not poisoned")
                .push(e.status().cloned())
        });
        stream.send(b"audio".to_vec())?;
        stream.stop();
        stream.wait_until_complete_for(Duration::from_secs(5)).await?;

        assert_eq!(completed.load(Ordering::SeqCst), 1);
        let errors = errors.lock().expect("lock is not poisoned").clone();
        assert_eq!(errors, vec![Some(status)]);
        assert_eq!(stream.results().len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn start_twice_opens_one_stream() -> anyhow::Result<()> {
        let fake = FakeSpeech::default();
        let opened = fake.opened.clone();
        let requests = fake.requests.clone();
        let client = Speech::from_stub(fake);
        let stream = client.stream(config())?;
        assert!(!stream.is_started());
        stream.start();
        stream.start();
        assert!(stream.is_started());
        stream.stop();
        stream.wait_until_complete_for(Duration::from_secs(5)).await?;

        assert_eq!(opened.load(Ordering::SeqCst), 1);
        let got = requests.lock().expect("lock is not poisoned").clone();
        assert_eq!(got.len(), 1, "{got:?}");
        assert!(stream.results().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn stop_before_start() -> anyhow::Result<()> {
        let fake = FakeSpeech::default();
        let opened = fake.opened.clone();
        let client = Speech::from_stub(fake);
        let stream = client.stream(config())?;
        stream.stop();
        assert!(!stream.is_started());
        assert!(!stream.is_stopped());
        let got = stream
            .wait_until_complete_for(Duration::from_millis(10))
            .await;
        assert!(matches!(got, Err(ref e) if e.is_timeout()), "{got:?}");
        assert_eq!(opened.load(Ordering::SeqCst), 0);
        Ok(())
    }

    #[tokio::test]
    async fn disconnected() -> anyhow::Result<()> {
        let client = Speech::builder()
            .with_credentials(auth::credentials::Credentials::anonymous())
            .build()
            .await?;
        let got = client.stream(config());
        assert!(matches!(got, Err(ref e) if e.is_no_connection()), "{got:?}");
        Ok(())
    }
}
