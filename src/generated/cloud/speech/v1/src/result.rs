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

//! Recognition results in a form convenient for applications.

use crate::model::{SpeechRecognitionAlternative, SpeechRecognitionResult, StreamingRecognitionResult};
use crate::{Error, Result};
use std::time::Duration;

/// The result of recognizing a portion of the audio.
///
/// The most likely hypothesis is promoted to `transcript` and `confidence`,
/// the remaining hypotheses are in `alternatives`.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct RecognitionResult {
    /// The most likely transcript.
    pub transcript: String,
    /// The confidence estimate for `transcript`, between 0.0 and 1.0.
    pub confidence: f32,
    /// Timing for each word in `transcript`, if requested.
    pub words: Vec<Word>,
    /// Other, less likely, hypotheses.
    pub alternatives: Vec<Alternative>,
}

/// A recognized word with its position in the audio.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct Word {
    pub word: String,
    /// Offset of the start of the word, relative to the beginning of the audio.
    pub start_time: Duration,
    /// Offset of the end of the word, relative to the beginning of the audio.
    pub end_time: Duration,
}

/// A recognition hypothesis other than the most likely one.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct Alternative {
    pub transcript: String,
    pub confidence: f32,
}

/// A result that may still change as the service receives more audio.
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub struct InterimResult {
    pub transcript: String,
    pub confidence: f32,
    pub words: Vec<Word>,
    pub alternatives: Vec<Alternative>,
    /// An estimate, between 0.0 and 1.0, of the likelihood that the service
    /// will not change this result.
    pub stability: f32,
}

fn split(
    alternatives: Vec<SpeechRecognitionAlternative>,
) -> Result<(SpeechRecognitionAlternative, Vec<Alternative>)> {
    let mut iter = alternatives.into_iter();
    let head = iter
        .next()
        .ok_or_else(|| Error::deser("the recognition result has no alternatives"))?;
    let rest = iter
        .map(|a| Alternative {
            transcript: a.transcript,
            confidence: a.confidence,
        })
        .collect();
    Ok((head, rest))
}

fn words(alternative: &SpeechRecognitionAlternative) -> Vec<Word> {
    alternative
        .words
        .iter()
        .map(|w| Word {
            word: w.word.clone(),
            start_time: w.start_time.unwrap_or_default(),
            end_time: w.end_time.unwrap_or_default(),
        })
        .collect()
}

impl TryFrom<SpeechRecognitionResult> for RecognitionResult {
    type Error = Error;

    fn try_from(value: SpeechRecognitionResult) -> Result<Self> {
        let (head, alternatives) = split(value.alternatives)?;
        Ok(Self {
            words: words(&head),
            transcript: head.transcript,
            confidence: head.confidence,
            alternatives,
        })
    }
}

impl TryFrom<StreamingRecognitionResult> for RecognitionResult {
    type Error = Error;

    fn try_from(value: StreamingRecognitionResult) -> Result<Self> {
        let (head, alternatives) = split(value.alternatives)?;
        Ok(Self {
            words: words(&head),
            transcript: head.transcript,
            confidence: head.confidence,
            alternatives,
        })
    }
}

impl TryFrom<StreamingRecognitionResult> for InterimResult {
    type Error = Error;

    fn try_from(value: StreamingRecognitionResult) -> Result<Self> {
        let stability = value.stability;
        let (head, alternatives) = split(value.alternatives)?;
        Ok(Self {
            words: words(&head),
            transcript: head.transcript,
            confidence: head.confidence,
            alternatives,
            stability,
        })
    }
}

/// Converts the results of a `Recognize` or `LongRunningRecognize` response.
pub(crate) fn from_results(results: Vec<SpeechRecognitionResult>) -> Result<Vec<RecognitionResult>> {
    results.into_iter().map(RecognitionResult::try_from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WordInfo;
    use pretty_assertions::assert_eq;

    fn alternative(transcript: &str, confidence: f32) -> SpeechRecognitionAlternative {
        SpeechRecognitionAlternative::default()
            .set_transcript(transcript)
            .set_confidence(confidence)
    }

    #[test]
    fn promotes_first_alternative() -> anyhow::Result<()> {
        let input = SpeechRecognitionResult::default().set_alternatives([
            alternative("how old is the Brooklyn Bridge", 0.98).set_words([
                WordInfo::default()
                    .set_word("how")
                    .set_start_time(Duration::ZERO)
                    .set_end_time(Duration::from_millis(300)),
            ]),
            alternative("how old is the Brooklyn bridge", 0.7),
        ]);
        let got = RecognitionResult::try_from(input)?;
        assert_eq!(got.transcript, "how old is the Brooklyn Bridge");
        assert_eq!(got.confidence, 0.98);
        assert_eq!(
            got.words,
            vec![Word {
                word: "how".into(),
                start_time: Duration::ZERO,
                end_time: Duration::from_millis(300),
            }]
        );
        assert_eq!(
            got.alternatives,
            vec![Alternative {
                transcript: "how old is the Brooklyn bridge".into(),
                confidence: 0.7,
            }]
        );
        Ok(())
    }

    #[test]
    fn no_alternatives() {
        let got = RecognitionResult::try_from(SpeechRecognitionResult::default());
        assert!(matches!(got, Err(ref e) if e.is_deserialization()), "{got:?}");
        let got = InterimResult::try_from(StreamingRecognitionResult::default());
        assert!(matches!(got, Err(ref e) if e.is_deserialization()), "{got:?}");
    }

    #[test]
    fn interim_keeps_stability() -> anyhow::Result<()> {
        let input = StreamingRecognitionResult::default()
            .set_alternatives([alternative("how old", 0.5)])
            .set_stability(0.25);
        let got = InterimResult::try_from(input)?;
        assert_eq!(got.transcript, "how old");
        assert_eq!(got.stability, 0.25);
        assert!(got.alternatives.is_empty(), "{got:?}");
        Ok(())
    }

    #[test]
    fn from_results_fails_on_any_bad_result() {
        let got = from_results(vec![
            SpeechRecognitionResult::default().set_alternatives([alternative("a", 0.9)]),
            SpeechRecognitionResult::default(),
        ]);
        assert!(matches!(got, Err(ref e) if e.is_deserialization()), "{got:?}");
    }
}
