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

//! Defines the audio inputs for speech recognition.

use crate::model::{AudioEncoding, RecognitionAudio, RecognitionConfig};
use crate::{Error, Result};
use std::path::PathBuf;

/// Where the audio to recognize comes from.
///
/// Local files are read when the request is sent. Cloud Storage objects are
/// read by the service.
///
/// # Example
/// ```
/// # use google_cloud_speech_v1::audio::AudioSource;
/// let source: AudioSource = "gs://my-bucket/audio.flac".parse().unwrap();
/// assert!(matches!(source, AudioSource::Uri(_)));
/// let source: AudioSource = "path/to/audio.raw".parse().unwrap();
/// assert!(matches!(source, AudioSource::Path(_)));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum AudioSource {
    /// A local file.
    Path(PathBuf),
    /// Audio data already in memory.
    Bytes(bytes::Bytes),
    /// A Cloud Storage URI, `gs://bucket_name/object_name`.
    Uri(String),
}

impl AudioSource {
    /// Converts the source into the message sent to the service.
    ///
    /// Reads the file contents for [AudioSource::Path], failing with an I/O
    /// error if the file cannot be read.
    pub async fn resolve(&self) -> Result<RecognitionAudio> {
        match self {
            Self::Path(path) => {
                let contents = tokio::fs::read(path).await.map_err(Error::io)?;
                Ok(RecognitionAudio::default().set_content(contents))
            }
            Self::Bytes(b) => Ok(RecognitionAudio::default().set_content(b.clone())),
            Self::Uri(u) => Ok(RecognitionAudio::default().set_uri(u.clone())),
        }
    }
}

impl std::str::FromStr for AudioSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.starts_with("gs://") {
            return Ok(Self::Uri(s.to_string()));
        }
        Ok(Self::Path(PathBuf::from(s)))
    }
}

impl From<&str> for AudioSource {
    fn from(value: &str) -> Self {
        match value.parse() {
            Ok(s) => s,
            Err(e) => match e {},
        }
    }
}

impl From<String> for AudioSource {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<PathBuf> for AudioSource {
    fn from(value: PathBuf) -> Self {
        Self::Path(value)
    }
}

impl From<&std::path::Path> for AudioSource {
    fn from(value: &std::path::Path) -> Self {
        Self::Path(value.to_path_buf())
    }
}

impl From<bytes::Bytes> for AudioSource {
    fn from(value: bytes::Bytes) -> Self {
        Self::Bytes(value)
    }
}

impl From<Vec<u8>> for AudioSource {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value.into())
    }
}

/// Audio to recognize, with optional overrides for the recognition config.
///
/// Any value set here replaces the same field of the [RecognitionConfig]
/// used in the request.
///
/// # Example
/// ```
/// # use google_cloud_speech_v1::audio::Audio;
/// # use google_cloud_speech_v1::model::{AudioEncoding, RecognitionConfig};
/// let audio = Audio::new("gs://my-bucket/audio.raw")
///     .set_encoding(AudioEncoding::Linear16)
///     .set_sample_rate(16000)
///     .set_language("en-US");
/// let config = audio.apply(RecognitionConfig::default().set_max_alternatives(3));
/// assert_eq!(config.sample_rate_hertz, 16000);
/// assert_eq!(config.max_alternatives, 3);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct Audio {
    /// Where the audio data comes from.
    pub source: AudioSource,
    /// Overrides the encoding in the recognition config.
    pub encoding: Option<AudioEncoding>,
    /// Overrides the sample rate in the recognition config.
    pub sample_rate: Option<i32>,
    /// Overrides the language in the recognition config.
    pub language: Option<String>,
}

impl Audio {
    /// Creates audio from a source, with no overrides.
    pub fn new<T: Into<AudioSource>>(source: T) -> Self {
        Self {
            source: source.into(),
            encoding: None,
            sample_rate: None,
            language: None,
        }
    }

    /// Sets the value of [encoding][Audio::encoding].
    pub fn set_encoding<T: Into<AudioEncoding>>(mut self, v: T) -> Self {
        self.encoding = Some(v.into());
        self
    }

    /// Sets the value of [sample_rate][Audio::sample_rate].
    pub fn set_sample_rate<T: Into<i32>>(mut self, v: T) -> Self {
        self.sample_rate = Some(v.into());
        self
    }

    /// Sets the value of [language][Audio::language].
    pub fn set_language<T: Into<String>>(mut self, v: T) -> Self {
        self.language = Some(v.into());
        self
    }

    /// Returns `config` with the overrides in this audio applied.
    pub fn apply(&self, mut config: RecognitionConfig) -> RecognitionConfig {
        if let Some(e) = self.encoding {
            config.encoding = e;
        }
        if let Some(r) = self.sample_rate {
            config.sample_rate_hertz = r;
        }
        if let Some(l) = &self.language {
            config.language_code = l.clone();
        }
        config
    }
}

impl From<AudioSource> for Audio {
    fn from(value: AudioSource) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Audio {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Audio {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<PathBuf> for Audio {
    fn from(value: PathBuf) -> Self {
        Self::new(value)
    }
}

impl From<&std::path::Path> for Audio {
    fn from(value: &std::path::Path) -> Self {
        Self::new(value)
    }
}

impl From<bytes::Bytes> for Audio {
    fn from(value: bytes::Bytes) -> Self {
        Self::new(value)
    }
}

impl From<Vec<u8>> for Audio {
    fn from(value: Vec<u8>) -> Self {
        Self::new(value)
    }
}

impl AudioEncoding {
    /// Finds the encoding for a short name.
    ///
    /// Accepts `raw`, `linear`, and `linear16` for [AudioEncoding::Linear16],
    /// the lowercase names of the other encodings (`flac`, `mulaw`, `amr`,
    /// `amr_wb`, `ogg_opus`, `speex`, `webm_opus`), and the names used by the
    /// service, e.g. `LINEAR16`.
    ///
    /// # Example
    /// ```
    /// # use google_cloud_speech_v1::model::AudioEncoding;
    /// assert_eq!(AudioEncoding::from_alias("raw"), Some(AudioEncoding::Linear16));
    /// assert_eq!(AudioEncoding::from_alias("AMR_WB"), Some(AudioEncoding::AmrWb));
    /// assert_eq!(AudioEncoding::from_alias("mp3"), None);
    /// ```
    pub fn from_alias(alias: &str) -> Option<Self> {
        let encoding = match alias.to_ascii_lowercase().as_str() {
            "raw" | "linear" | "linear16" => Self::Linear16,
            "flac" => Self::Flac,
            "mulaw" => Self::Mulaw,
            "amr" => Self::Amr,
            "amr_wb" => Self::AmrWb,
            "ogg_opus" => Self::OggOpus,
            "speex" | "speex_with_header_byte" => Self::SpeexWithHeaderByte,
            "webm_opus" => Self::WebmOpus,
            _ => return None,
        };
        Some(encoding)
    }
}

impl std::str::FromStr for AudioEncoding {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_alias(s).ok_or_else(|| Error::binding(format!("unknown audio encoding `{s}`")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use test_case::test_case;

    #[test_case("gs://bucket/object.flac", AudioSource::Uri("gs://bucket/object.flac".into()))]
    #[test_case("audio.raw", AudioSource::Path("audio.raw".into()))]
    #[test_case("/tmp/gs://odd", AudioSource::Path("/tmp/gs://odd".into()))]
    #[test_case("https://example.com/a.raw", AudioSource::Path("https://example.com/a.raw".into()))]
    fn source_from_str(input: &str, want: AudioSource) {
        assert_eq!(AudioSource::from(input), want);
    }

    #[test_case("raw", AudioEncoding::Linear16)]
    #[test_case("linear", AudioEncoding::Linear16)]
    #[test_case("linear16", AudioEncoding::Linear16)]
    #[test_case("LINEAR16", AudioEncoding::Linear16)]
    #[test_case("flac", AudioEncoding::Flac)]
    #[test_case("mulaw", AudioEncoding::Mulaw)]
    #[test_case("amr", AudioEncoding::Amr)]
    #[test_case("amr_wb", AudioEncoding::AmrWb)]
    #[test_case("ogg_opus", AudioEncoding::OggOpus)]
    #[test_case("speex", AudioEncoding::SpeexWithHeaderByte)]
    fn encoding_aliases(alias: &str, want: AudioEncoding) -> anyhow::Result<()> {
        assert_eq!(AudioEncoding::from_alias(alias), Some(want));
        assert_eq!(alias.parse::<AudioEncoding>()?, want);
        Ok(())
    }

    #[test]
    fn encoding_unknown() {
        let got = "mp3".parse::<AudioEncoding>();
        assert!(matches!(got, Err(ref e) if e.is_binding()), "{got:?}");
    }

    #[test]
    fn apply_overrides() {
        let config = RecognitionConfig::default()
            .set_encoding(AudioEncoding::Flac)
            .set_sample_rate_hertz(8000)
            .set_language_code("fr-FR")
            .set_max_alternatives(2);

        let unchanged = Audio::new("audio.raw").apply(config.clone());
        assert_eq!(unchanged, config);

        let got = Audio::new("audio.raw")
            .set_encoding(AudioEncoding::Linear16)
            .set_sample_rate(16000)
            .set_language("en-US")
            .apply(config);
        assert_eq!(got.encoding, AudioEncoding::Linear16);
        assert_eq!(got.sample_rate_hertz, 16000);
        assert_eq!(got.language_code, "en-US");
        assert_eq!(got.max_alternatives, 2);
    }

    #[tokio::test]
    async fn resolve_path() -> anyhow::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"audio-bytes")?;
        let source = AudioSource::from(file.path());
        let got = source.resolve().await?;
        assert_eq!(
            got.content().map(|c| c.as_ref()),
            Some(b"audio-bytes".as_slice())
        );
        Ok(())
    }

    #[tokio::test]
    async fn resolve_missing_path() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let source = AudioSource::from(dir.path().join("missing.raw"));
        let got = source.resolve().await;
        assert!(matches!(got, Err(ref e) if e.is_io()), "{got:?}");
        Ok(())
    }

    #[tokio::test]
    async fn resolve_bytes_and_uri() -> anyhow::Result<()> {
        let got = AudioSource::from(vec![1_u8, 2, 3]).resolve().await?;
        assert_eq!(got.content().map(|c| c.to_vec()), Some(vec![1_u8, 2, 3]));
        let got = AudioSource::from("gs://b/o").resolve().await?;
        assert_eq!(got.uri(), Some("gs://b/o"));
        Ok(())
    }
}
