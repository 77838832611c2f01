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

//! The request and response messages of the Cloud Speech-to-Text API.

use gax::error::rpc::Status;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Provides information to the recognizer that specifies how to process the
/// request.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RecognitionConfig {
    /// Encoding of audio data sent in all `RecognitionAudio` messages.
    pub encoding: AudioEncoding,

    /// Sample rate in Hertz of the audio data. Valid values are 8000-48000,
    /// 16000 is optimal.
    pub sample_rate_hertz: i32,

    /// The number of channels in the input audio data.
    pub audio_channel_count: i32,

    /// The language of the supplied audio as a BCP-47 language tag, e.g.
    /// `en-US`.
    pub language_code: String,

    /// Maximum number of recognition hypotheses to be returned.
    pub max_alternatives: i32,

    /// If `true`, the server attempts to filter out profanities.
    pub profanity_filter: bool,

    /// Word and phrase hints for the recognizer.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub speech_contexts: Vec<SpeechContext>,

    /// If `true`, the results include the start and end time of each word.
    pub enable_word_time_offsets: bool,

    /// If `true`, adds punctuation to recognition result hypotheses.
    pub enable_automatic_punctuation: bool,

    /// Which model to select for the request, e.g. `phone_call` or `video`.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub model: String,

    /// Set to true to use an enhanced model for speech recognition.
    pub use_enhanced: bool,
}

impl RecognitionConfig {
    /// Sets the value of [encoding][RecognitionConfig::encoding].
    pub fn set_encoding<T: Into<AudioEncoding>>(mut self, v: T) -> Self {
        self.encoding = v.into();
        self
    }

    /// Sets the value of [sample_rate_hertz][RecognitionConfig::sample_rate_hertz].
    pub fn set_sample_rate_hertz<T: Into<i32>>(mut self, v: T) -> Self {
        self.sample_rate_hertz = v.into();
        self
    }

    /// Sets the value of [audio_channel_count][RecognitionConfig::audio_channel_count].
    pub fn set_audio_channel_count<T: Into<i32>>(mut self, v: T) -> Self {
        self.audio_channel_count = v.into();
        self
    }

    /// Sets the value of [language_code][RecognitionConfig::language_code].
    pub fn set_language_code<T: Into<String>>(mut self, v: T) -> Self {
        self.language_code = v.into();
        self
    }

    /// Sets the value of [max_alternatives][RecognitionConfig::max_alternatives].
    pub fn set_max_alternatives<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_alternatives = v.into();
        self
    }

    /// Sets the value of [profanity_filter][RecognitionConfig::profanity_filter].
    pub fn set_profanity_filter<T: Into<bool>>(mut self, v: T) -> Self {
        self.profanity_filter = v.into();
        self
    }

    /// Sets the value of [speech_contexts][RecognitionConfig::speech_contexts].
    pub fn set_speech_contexts<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<SpeechContext>,
    {
        self.speech_contexts = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [enable_word_time_offsets][RecognitionConfig::enable_word_time_offsets].
    pub fn set_enable_word_time_offsets<T: Into<bool>>(mut self, v: T) -> Self {
        self.enable_word_time_offsets = v.into();
        self
    }

    /// Sets the value of [enable_automatic_punctuation][RecognitionConfig::enable_automatic_punctuation].
    pub fn set_enable_automatic_punctuation<T: Into<bool>>(mut self, v: T) -> Self {
        self.enable_automatic_punctuation = v.into();
        self
    }

    /// Sets the value of [model][RecognitionConfig::model].
    pub fn set_model<T: Into<String>>(mut self, v: T) -> Self {
        self.model = v.into();
        self
    }

    /// Sets the value of [use_enhanced][RecognitionConfig::use_enhanced].
    pub fn set_use_enhanced<T: Into<bool>>(mut self, v: T) -> Self {
        self.use_enhanced = v.into();
        self
    }
}

/// The encoding of the audio data sent in the request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum AudioEncoding {
    /// Not specified.
    #[default]
    EncodingUnspecified,
    /// Uncompressed 16-bit signed little-endian samples (Linear PCM).
    Linear16,
    /// Free Lossless Audio Codec.
    Flac,
    /// 8-bit samples that compand 14-bit audio samples using G.711 PCMU/mu-law.
    Mulaw,
    /// Adaptive Multi-Rate Narrowband codec. `sample_rate_hertz` must be 8000.
    Amr,
    /// Adaptive Multi-Rate Wideband codec. `sample_rate_hertz` must be 16000.
    AmrWb,
    /// Opus encoded audio frames in Ogg container.
    OggOpus,
    /// Speex with a header byte per frame.
    SpeexWithHeaderByte,
    /// Opus encoded audio frames in WebM container.
    WebmOpus,
}

impl AudioEncoding {
    /// The name of the encoding, as used in the service messages.
    pub fn name(&self) -> &str {
        match self {
            Self::EncodingUnspecified => "ENCODING_UNSPECIFIED",
            Self::Linear16 => "LINEAR16",
            Self::Flac => "FLAC",
            Self::Mulaw => "MULAW",
            Self::Amr => "AMR",
            Self::AmrWb => "AMR_WB",
            Self::OggOpus => "OGG_OPUS",
            Self::SpeexWithHeaderByte => "SPEEX_WITH_HEADER_BYTE",
            Self::WebmOpus => "WEBM_OPUS",
        }
    }
}

/// Provides "hints" to the speech recognizer to favor specific words and
/// phrases in the results.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SpeechContext {
    /// A list of strings containing words and phrases "hints".
    pub phrases: Vec<String>,
}

impl SpeechContext {
    /// Sets the value of [phrases][SpeechContext::phrases].
    pub fn set_phrases<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.phrases = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Contains audio data in the encoding specified in the `RecognitionConfig`.
///
/// Either `content` or `uri` must be supplied.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RecognitionAudio {
    /// The audio source, which is either inline content or a Cloud Storage
    /// URI.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub audio_source: Option<recognition_audio::AudioSource>,
}

impl RecognitionAudio {
    /// Sets the value of [audio_source][RecognitionAudio::audio_source] to
    /// inline content.
    pub fn set_content<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.audio_source = Some(recognition_audio::AudioSource::Content(v.into()));
        self
    }

    /// Sets the value of [audio_source][RecognitionAudio::audio_source] to a
    /// Cloud Storage URI.
    pub fn set_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.audio_source = Some(recognition_audio::AudioSource::Uri(v.into()));
        self
    }

    /// The inline content, if that is the audio source.
    pub fn content(&self) -> Option<&bytes::Bytes> {
        match &self.audio_source {
            Some(recognition_audio::AudioSource::Content(c)) => Some(c),
            _ => None,
        }
    }

    /// The Cloud Storage URI, if that is the audio source.
    pub fn uri(&self) -> Option<&str> {
        match &self.audio_source {
            Some(recognition_audio::AudioSource::Uri(u)) => Some(u),
            _ => None,
        }
    }
}

/// Defines additional types related to [RecognitionAudio].
pub mod recognition_audio {
    use super::*;

    /// The audio source, which is either inline content or a Cloud Storage
    /// URI.
    #[serde_with::serde_as]
    #[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    #[non_exhaustive]
    pub enum AudioSource {
        /// The audio data bytes, base64-encoded in JSON.
        Content(#[serde_as(as = "serde_with::base64::Base64")] bytes::Bytes),
        /// A URI pointing to a Cloud Storage object, `gs://bucket_name/object_name`.
        Uri(String),
    }
}

/// The top-level message sent by the client for the `Recognize` method.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RecognizeRequest {
    /// Provides information to the recognizer that specifies how to process
    /// the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<RecognitionConfig>,

    /// The audio data to be recognized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<RecognitionAudio>,
}

impl RecognizeRequest {
    /// Sets the value of [config][RecognizeRequest::config].
    pub fn set_config<T: Into<Option<RecognitionConfig>>>(mut self, v: T) -> Self {
        self.config = v.into();
        self
    }

    /// Sets the value of [audio][RecognizeRequest::audio].
    pub fn set_audio<T: Into<Option<RecognitionAudio>>>(mut self, v: T) -> Self {
        self.audio = v.into();
        self
    }
}

/// The only message returned to the client by the `Recognize` method.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RecognizeResponse {
    /// Sequential list of transcription results corresponding to sequential
    /// portions of audio.
    pub results: Vec<SpeechRecognitionResult>,

    /// When available, billed audio seconds for the corresponding request.
    #[serde(
        with = "gax::duration::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_billed_time: Option<Duration>,
}

impl RecognizeResponse {
    /// Sets the value of [results][RecognizeResponse::results].
    pub fn set_results<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<SpeechRecognitionResult>,
    {
        self.results = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The top-level message sent by the client for the `LongRunningRecognize`
/// method.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LongRunningRecognizeRequest {
    /// Provides information to the recognizer that specifies how to process
    /// the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<RecognitionConfig>,

    /// The audio data to be recognized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<RecognitionAudio>,
}

impl LongRunningRecognizeRequest {
    /// Sets the value of [config][LongRunningRecognizeRequest::config].
    pub fn set_config<T: Into<Option<RecognitionConfig>>>(mut self, v: T) -> Self {
        self.config = v.into();
        self
    }

    /// Sets the value of [audio][LongRunningRecognizeRequest::audio].
    pub fn set_audio<T: Into<Option<RecognitionAudio>>>(mut self, v: T) -> Self {
        self.audio = v.into();
        self
    }
}

/// The response of a `LongRunningRecognize` operation, once it completes.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LongRunningRecognizeResponse {
    /// Sequential list of transcription results corresponding to sequential
    /// portions of audio.
    pub results: Vec<SpeechRecognitionResult>,

    /// When available, billed audio seconds for the corresponding request.
    #[serde(
        with = "gax::duration::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_billed_time: Option<Duration>,
}

impl LongRunningRecognizeResponse {
    /// Sets the value of [results][LongRunningRecognizeResponse::results].
    pub fn set_results<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<SpeechRecognitionResult>,
    {
        self.results = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

impl lro::Message for LongRunningRecognizeResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.speech.v1.LongRunningRecognizeResponse"
    }
}

/// Describes the progress of a `LongRunningRecognize` operation.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LongRunningRecognizeMetadata {
    /// Approximate percentage of audio processed thus far.
    pub progress_percent: i32,

    /// Time when the request was received, in RFC 3339 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,

    /// Time of the most recent processing update, in RFC 3339 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_update_time: Option<String>,

    /// The URI of the audio file being transcribed. Empty if the audio was
    /// sent as byte content.
    pub uri: String,
}

impl LongRunningRecognizeMetadata {
    /// Sets the value of [progress_percent][LongRunningRecognizeMetadata::progress_percent].
    pub fn set_progress_percent<T: Into<i32>>(mut self, v: T) -> Self {
        self.progress_percent = v.into();
        self
    }

    /// Sets the value of [uri][LongRunningRecognizeMetadata::uri].
    pub fn set_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.uri = v.into();
        self
    }
}

impl lro::Message for LongRunningRecognizeMetadata {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.speech.v1.LongRunningRecognizeMetadata"
    }
}

/// A speech recognition result corresponding to a portion of the audio.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SpeechRecognitionResult {
    /// One or more recognition hypotheses, ordered in terms of accuracy.
    pub alternatives: Vec<SpeechRecognitionAlternative>,

    /// For multi-channel audio, the channel number corresponding to the
    /// recognized result.
    pub channel_tag: i32,

    /// Time offset of the end of this result relative to the beginning of the
    /// audio.
    #[serde(
        with = "gax::duration::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub result_end_time: Option<Duration>,

    /// The BCP-47 language tag of the language in this result.
    pub language_code: String,
}

impl SpeechRecognitionResult {
    /// Sets the value of [alternatives][SpeechRecognitionResult::alternatives].
    pub fn set_alternatives<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<SpeechRecognitionAlternative>,
    {
        self.alternatives = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Alternative hypotheses (a.k.a. n-best list).
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SpeechRecognitionAlternative {
    /// Transcript text representing the words that the user spoke.
    pub transcript: String,

    /// The confidence estimate between 0.0 and 1.0.
    pub confidence: f32,

    /// A list of word-specific information for each recognized word.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub words: Vec<WordInfo>,
}

impl SpeechRecognitionAlternative {
    /// Sets the value of [transcript][SpeechRecognitionAlternative::transcript].
    pub fn set_transcript<T: Into<String>>(mut self, v: T) -> Self {
        self.transcript = v.into();
        self
    }

    /// Sets the value of [confidence][SpeechRecognitionAlternative::confidence].
    pub fn set_confidence<T: Into<f32>>(mut self, v: T) -> Self {
        self.confidence = v.into();
        self
    }

    /// Sets the value of [words][SpeechRecognitionAlternative::words].
    pub fn set_words<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<WordInfo>,
    {
        self.words = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Word-specific information for recognized words.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct WordInfo {
    /// Time offset relative to the beginning of the audio corresponding to
    /// the start of the spoken word.
    #[serde(
        with = "gax::duration::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_time: Option<Duration>,

    /// Time offset relative to the beginning of the audio corresponding to
    /// the end of the spoken word.
    #[serde(
        with = "gax::duration::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub end_time: Option<Duration>,

    /// The word corresponding to this set of information.
    pub word: String,
}

impl WordInfo {
    /// Sets the value of [start_time][WordInfo::start_time].
    pub fn set_start_time<T: Into<Duration>>(mut self, v: T) -> Self {
        self.start_time = Some(v.into());
        self
    }

    /// Sets the value of [end_time][WordInfo::end_time].
    pub fn set_end_time<T: Into<Duration>>(mut self, v: T) -> Self {
        self.end_time = Some(v.into());
        self
    }

    /// Sets the value of [word][WordInfo::word].
    pub fn set_word<T: Into<String>>(mut self, v: T) -> Self {
        self.word = v.into();
        self
    }
}

/// Provides information to the recognizer that specifies how to process a
/// streaming request.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct StreamingRecognitionConfig {
    /// Provides information to the recognizer that specifies how to process
    /// the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<RecognitionConfig>,

    /// If `true`, the recognizer detects a single spoken utterance and stops
    /// recognition once the speaker pauses.
    pub single_utterance: bool,

    /// If `true`, interim results may be returned as they become available.
    pub interim_results: bool,

    /// If `true`, responses with voice activity speech events are returned
    /// as they are detected.
    pub enable_voice_activity_events: bool,
}

impl StreamingRecognitionConfig {
    /// Sets the value of [config][StreamingRecognitionConfig::config].
    pub fn set_config<T: Into<Option<RecognitionConfig>>>(mut self, v: T) -> Self {
        self.config = v.into();
        self
    }

    /// Sets the value of [single_utterance][StreamingRecognitionConfig::single_utterance].
    pub fn set_single_utterance<T: Into<bool>>(mut self, v: T) -> Self {
        self.single_utterance = v.into();
        self
    }

    /// Sets the value of [interim_results][StreamingRecognitionConfig::interim_results].
    pub fn set_interim_results<T: Into<bool>>(mut self, v: T) -> Self {
        self.interim_results = v.into();
        self
    }

    /// Sets the value of [enable_voice_activity_events][StreamingRecognitionConfig::enable_voice_activity_events].
    pub fn set_enable_voice_activity_events<T: Into<bool>>(mut self, v: T) -> Self {
        self.enable_voice_activity_events = v.into();
        self
    }
}

/// The top-level message sent by the client for the `StreamingRecognize`
/// method.
///
/// The first message must contain the streaming configuration and no audio.
/// All subsequent messages must contain audio and no configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct StreamingRecognizeRequest {
    /// The streaming request, which is either a streaming config or audio
    /// content.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub streaming_request: Option<streaming_recognize_request::StreamingRequest>,
}

impl StreamingRecognizeRequest {
    /// Sets the value of [streaming_request][StreamingRecognizeRequest::streaming_request]
    /// to a streaming configuration.
    pub fn set_streaming_config<T: Into<StreamingRecognitionConfig>>(mut self, v: T) -> Self {
        self.streaming_request = Some(
            streaming_recognize_request::StreamingRequest::StreamingConfig(v.into()),
        );
        self
    }

    /// Sets the value of [streaming_request][StreamingRecognizeRequest::streaming_request]
    /// to a chunk of audio.
    pub fn set_audio_content<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.streaming_request = Some(
            streaming_recognize_request::StreamingRequest::AudioContent(v.into()),
        );
        self
    }

    /// The streaming configuration, if this request carries one.
    pub fn streaming_config(&self) -> Option<&StreamingRecognitionConfig> {
        match &self.streaming_request {
            Some(streaming_recognize_request::StreamingRequest::StreamingConfig(c)) => Some(c),
            _ => None,
        }
    }

    /// The audio content, if this request carries audio.
    pub fn audio_content(&self) -> Option<&bytes::Bytes> {
        match &self.streaming_request {
            Some(streaming_recognize_request::StreamingRequest::AudioContent(a)) => Some(a),
            _ => None,
        }
    }
}

/// Defines additional types related to [StreamingRecognizeRequest].
pub mod streaming_recognize_request {
    use super::*;

    /// The streaming request, which is either a streaming config or audio
    /// content.
    #[serde_with::serde_as]
    #[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    #[non_exhaustive]
    pub enum StreamingRequest {
        /// Provides information to the recognizer that specifies how to
        /// process the request.
        StreamingConfig(StreamingRecognitionConfig),
        /// The audio data to be recognized.
        AudioContent(#[serde_as(as = "serde_with::base64::Base64")] bytes::Bytes),
    }
}

/// The messages returned to the client by the `StreamingRecognize` method.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct StreamingRecognizeResponse {
    /// If set, returns a status that specifies the error for the operation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Status>,

    /// This repeated list contains zero or more results that correspond to
    /// consecutive portions of the audio currently being processed.
    pub results: Vec<StreamingRecognitionResult>,

    /// Indicates the type of speech event.
    pub speech_event_type: SpeechEventType,

    /// When available, billed audio seconds for the stream.
    #[serde(
        with = "gax::duration::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_billed_time: Option<Duration>,
}

impl StreamingRecognizeResponse {
    /// Sets the value of [error][StreamingRecognizeResponse::error].
    pub fn set_error<T: Into<Option<Status>>>(mut self, v: T) -> Self {
        self.error = v.into();
        self
    }

    /// Sets the value of [results][StreamingRecognizeResponse::results].
    pub fn set_results<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<StreamingRecognitionResult>,
    {
        self.results = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [speech_event_type][StreamingRecognizeResponse::speech_event_type].
    pub fn set_speech_event_type<T: Into<SpeechEventType>>(mut self, v: T) -> Self {
        self.speech_event_type = v.into();
        self
    }
}

/// Indicates the type of speech event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum SpeechEventType {
    /// No speech event specified.
    #[default]
    SpeechEventUnspecified,
    /// The server has detected the end of the user's speech utterance and
    /// expects no additional speech. Only sent if `single_utterance` was set.
    EndOfSingleUtterance,
    /// Speech activity has started.
    SpeechActivityBegin,
    /// Speech activity has ended.
    SpeechActivityEnd,
    /// No speech activity was detected before the timeout.
    SpeechActivityTimeout,
}

/// A streaming speech recognition result corresponding to a portion of the
/// audio that is currently being processed.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct StreamingRecognitionResult {
    /// One or more recognition hypotheses, ordered in terms of accuracy.
    pub alternatives: Vec<SpeechRecognitionAlternative>,

    /// If `false`, this result represents an interim result that may change.
    /// If `true`, this is the final time the service returns this result.
    pub is_final: bool,

    /// An estimate of the likelihood that the recognizer will not change its
    /// guess about this interim result.
    pub stability: f32,

    /// Time offset of the end of this result relative to the beginning of the
    /// audio.
    #[serde(
        with = "gax::duration::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub result_end_time: Option<Duration>,

    /// For multi-channel audio, the channel number corresponding to the
    /// recognized result.
    pub channel_tag: i32,

    /// The BCP-47 language tag of the language in this result.
    pub language_code: String,
}

impl StreamingRecognitionResult {
    /// Sets the value of [alternatives][StreamingRecognitionResult::alternatives].
    pub fn set_alternatives<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<SpeechRecognitionAlternative>,
    {
        self.alternatives = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [is_final][StreamingRecognitionResult::is_final].
    pub fn set_is_final<T: Into<bool>>(mut self, v: T) -> Self {
        self.is_final = v.into();
        self
    }

    /// Sets the value of [stability][StreamingRecognitionResult::stability].
    pub fn set_stability<T: Into<f32>>(mut self, v: T) -> Self {
        self.stability = v.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn recognition_audio_content() -> anyhow::Result<()> {
        let audio = RecognitionAudio::default().set_content(bytes::Bytes::from_static(b"abc"));
        let got = serde_json::to_value(&audio)?;
        assert_eq!(got, json!({"content": "YWJj"}));
        let roundtrip = serde_json::from_value::<RecognitionAudio>(got)?;
        assert_eq!(roundtrip.content().map(|b| b.as_ref()), Some(b"abc".as_slice()));
        assert_eq!(roundtrip.uri(), None);
        Ok(())
    }

    #[test]
    fn recognition_audio_uri() -> anyhow::Result<()> {
        let audio = RecognitionAudio::default().set_uri("gs://bucket/audio.flac");
        let got = serde_json::to_value(&audio)?;
        assert_eq!(got, json!({"uri": "gs://bucket/audio.flac"}));
        Ok(())
    }

    #[test]
    fn streaming_response_from_json() -> anyhow::Result<()> {
        let input = json!({
            "results": [{
                "alternatives": [{
                    "transcript": "how old is the Brooklyn Bridge",
                    "confidence": 0.98,
                    "words": [{"startTime": "0s", "endTime": "0.3s", "word": "how"}],
                }],
                "isFinal": true,
            }],
            "speechEventType": "END_OF_SINGLE_UTTERANCE",
        });
        let got = serde_json::from_value::<StreamingRecognizeResponse>(input)?;
        assert_eq!(got.speech_event_type, SpeechEventType::EndOfSingleUtterance);
        assert_eq!(got.results.len(), 1);
        let result = &got.results[0];
        assert!(result.is_final);
        let word = &result.alternatives[0].words[0];
        assert_eq!(word.start_time, Some(Duration::ZERO));
        assert_eq!(word.end_time, Some(Duration::from_millis(300)));
        Ok(())
    }

    #[test]
    fn encoding_names() -> anyhow::Result<()> {
        for encoding in [
            AudioEncoding::Linear16,
            AudioEncoding::AmrWb,
            AudioEncoding::OggOpus,
            AudioEncoding::SpeexWithHeaderByte,
        ] {
            let got = serde_json::to_value(encoding)?;
            assert_eq!(got, json!(encoding.name()));
        }
        Ok(())
    }

    #[test]
    fn streaming_request_first_message() -> anyhow::Result<()> {
        let config = StreamingRecognitionConfig::default()
            .set_config(RecognitionConfig::default().set_encoding(AudioEncoding::Linear16))
            .set_interim_results(true);
        let request = StreamingRecognizeRequest::default().set_streaming_config(config.clone());
        assert_eq!(request.streaming_config(), Some(&config));
        assert_eq!(request.audio_content(), None);
        let got = serde_json::to_value(&request)?;
        assert_eq!(got["streamingConfig"]["config"]["encoding"], json!("LINEAR16"));
        assert_eq!(got["streamingConfig"]["interimResults"], json!(true));
        Ok(())
    }
}
