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

use gax::Result;
use gax::error::Error;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A message type that can be carried in an operation's metadata or response.
///
/// The operation payloads are JSON objects tagged with their type in an
/// `@type` field. Decoding checks this tag before converting the payload.
pub trait Message {
    /// The fully qualified type URL, e.g.
    /// `type.googleapis.com/google.protobuf.Empty`.
    fn typename() -> &'static str;
}

const TYPE_FIELD: &str = "@type";

/// Decodes a tagged payload into `T`.
///
/// Fails with a deserialization error if the payload is not an object, if it
/// is tagged with a different type, or if the fields do not match `T`.
pub fn from_any<T>(value: &serde_json::Value) -> Result<T>
where
    T: Message + DeserializeOwned,
{
    let map = value
        .as_object()
        .ok_or_else(|| Error::deser(format!("expected an object for {}", T::typename())))?;
    match map.get(TYPE_FIELD).and_then(|v| v.as_str()) {
        Some(t) if t == T::typename() => {}
        Some(t) => {
            return Err(Error::deser(format!(
                "mismatched payload type, expected {}, got {t}",
                T::typename()
            )));
        }
        None => {
            return Err(Error::deser(format!(
                "missing `{TYPE_FIELD}` field, expected {}",
                T::typename()
            )));
        }
    }
    let mut fields = map.clone();
    fields.remove(TYPE_FIELD);
    serde_json::from_value(serde_json::Value::Object(fields)).map_err(Error::deser)
}

/// Encodes `message` as a tagged payload.
pub fn to_any<T>(message: &T) -> Result<serde_json::Value>
where
    T: Message + Serialize,
{
    let value = serde_json::to_value(message).map_err(Error::ser)?;
    let serde_json::Value::Object(mut map) = value else {
        return Err(Error::ser(format!(
            "{} does not serialize as an object",
            T::typename()
        )));
    };
    map.insert(
        TYPE_FIELD.to_string(),
        serde_json::Value::String(T::typename().to_string()),
    );
    Ok(serde_json::Value::Object(map))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Empty;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Default, PartialEq, Deserialize, Serialize)]
    #[serde(default, rename_all = "camelCase")]
    struct Progress {
        percent_done: i32,
    }

    impl Message for Progress {
        fn typename() -> &'static str {
            "type.googleapis.com/test.Progress"
        }
    }

    #[test]
    fn decode() -> anyhow::Result<()> {
        let value = json!({"@type": "type.googleapis.com/test.Progress", "percentDone": 42});
        let got = from_any::<Progress>(&value)?;
        assert_eq!(got, Progress { percent_done: 42 });
        Ok(())
    }

    #[test]
    fn encode() -> anyhow::Result<()> {
        let got = to_any(&Progress { percent_done: 7 })?;
        assert_eq!(
            got,
            json!({"@type": "type.googleapis.com/test.Progress", "percentDone": 7})
        );
        assert_eq!(
            to_any(&Empty::default())?,
            json!({"@type": "type.googleapis.com/google.protobuf.Empty"})
        );
        Ok(())
    }

    #[test]
    fn decode_errors() {
        let mismatch = json!({"@type": "type.googleapis.com/google.protobuf.Empty"});
        let got = from_any::<Progress>(&mismatch);
        assert!(matches!(got, Err(ref e) if e.is_deserialization()), "{got:?}");

        let untagged = json!({"percentDone": 42});
        let got = from_any::<Progress>(&untagged);
        assert!(matches!(got, Err(ref e) if e.is_deserialization()), "{got:?}");

        let not_object = json!("abc");
        let got = from_any::<Progress>(&not_object);
        assert!(matches!(got, Err(ref e) if e.is_deserialization()), "{got:?}");

        let bad_field = json!({"@type": "type.googleapis.com/test.Progress", "percentDone": "x"});
        let got = from_any::<Progress>(&bad_field);
        assert!(matches!(got, Err(ref e) if e.is_deserialization()), "{got:?}");
    }
}
