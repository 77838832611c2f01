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

//! Serialize durations in the JSON format used by Google Cloud services.
//!
//! Durations are represented as a decimal number of seconds with an `s`
//! suffix, for example `"1.5s"` or `"3600s"`. Use these functions with the
//! `serde(with = ...)` attribute.
//!
//! # Example
//! ```
//! # use google_cloud_gax::duration;
//! use std::time::Duration;
//! #[derive(serde::Deserialize, serde::Serialize)]
//! struct Config {
//!     #[serde(with = "duration::optional")]
//!     ttl: Option<Duration>,
//! }
//! let config: Config = serde_json::from_str(r#"{"ttl": "1.5s"}"#)?;
//! assert_eq!(config.ttl, Some(Duration::from_millis(1500)));
//! # Ok::<(), serde_json::Error>(())
//! ```

use serde::{Deserialize, Deserializer, Serializer};
use std::time::Duration;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// Formats a duration as a string.
pub fn format(d: &Duration) -> String {
    let nanos = d.subsec_nanos();
    if nanos == 0 {
        return format!("{}s", d.as_secs());
    }
    let fraction = format!("{nanos:09}");
    format!("{}.{}s", d.as_secs(), fraction.trim_end_matches('0'))
}

/// Parses a duration string.
///
/// Returns `None` if the string is not a valid, non-negative duration.
pub fn parse(s: &str) -> Option<Duration> {
    let number = s.strip_suffix('s')?;
    let (secs, fraction) = match number.split_once('.') {
        None => (number, ""),
        Some((s, f)) => (s, f),
    };
    if secs.is_empty() || !secs.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if fraction.len() > 9 || !fraction.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let secs = secs.parse::<u64>().ok()?;
    let nanos = if fraction.is_empty() {
        0
    } else {
        let scale = 10_u32.pow(9 - fraction.len() as u32);
        fraction.parse::<u32>().ok()? * scale
    };
    debug_assert!(nanos < NANOS_PER_SECOND);
    Some(Duration::new(secs, nanos))
}

pub fn serialize<S>(d: &Duration, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format(d))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid duration `{s}`")))
}

/// The same functions for `Option<Duration>` fields.
pub mod optional {
    use super::*;

    pub fn serialize<S>(d: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match d {
            Some(d) => super::serialize(d, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Duration>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        s.map(|s| {
            parse(&s).ok_or_else(|| serde::de::Error::custom(format!("invalid duration `{s}`")))
        })
        .transpose()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use test_case::test_case;

    #[test_case(Duration::ZERO, "0s")]
    #[test_case(Duration::from_secs(3600), "3600s")]
    #[test_case(Duration::from_millis(1500), "1.5s")]
    #[test_case(Duration::from_nanos(1_000_000_001), "1.000000001s")]
    #[test_case(Duration::from_micros(200), "0.0002s")]
    fn format_and_parse(d: Duration, want: &str) {
        assert_eq!(format(&d), want);
        assert_eq!(parse(want), Some(d));
    }

    #[test_case(""; "empty")]
    #[test_case("1"; "no suffix")]
    #[test_case("s"; "no number")]
    #[test_case("-1s"; "negative")]
    #[test_case("1.0000000001s"; "too precise")]
    #[test_case("1.s2"; "garbage")]
    #[test_case(".5s"; "no seconds")]
    fn parse_invalid(input: &str) {
        assert_eq!(parse(input), None, "{input}");
    }

    #[derive(Debug, Default, PartialEq, Serialize, serde::Deserialize)]
    struct Holder {
        #[serde(with = "super")]
        required: Duration,
        #[serde(default, with = "super::optional", skip_serializing_if = "Option::is_none")]
        ttl: Option<Duration>,
    }

    #[test]
    fn serde() -> anyhow::Result<()> {
        let input = Holder {
            required: Duration::from_millis(2500),
            ttl: Some(Duration::from_secs(60)),
        };
        let json = serde_json::to_value(&input)?;
        assert_eq!(json, serde_json::json!({"required": "2.5s", "ttl": "60s"}));
        let got = serde_json::from_value::<Holder>(json)?;
        assert_eq!(got, input);

        let got = serde_json::from_value::<Holder>(serde_json::json!({"required": "1s"}))?;
        assert_eq!(got.ttl, None);

        let err = serde_json::from_value::<Holder>(serde_json::json!({"required": "abc"}));
        assert!(err.is_err(), "{err:?}");
        Ok(())
    }
}
