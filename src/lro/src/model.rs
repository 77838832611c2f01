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

//! The messages used by the long-running operations service.

use gax::error::rpc::Status;
use serde::{Deserialize, Serialize};

/// This resource represents a long-running operation that is the result of a
/// network API call.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Operation {
    /// The server-assigned name, which is only unique within the same service
    /// that originally returns it.
    pub name: String,

    /// Service-specific metadata associated with the operation. It typically
    /// contains progress information and common metadata such as create time.
    /// The payload carries its type in an `@type` field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,

    /// If the value is `false`, it means the operation is still in progress.
    /// If `true`, the operation is completed, and either `error` or `response`
    /// is available.
    pub done: bool,

    /// The operation result, which can be either an `error` or a valid
    /// `response`.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub result: Option<operation::Result>,
}

impl Operation {
    /// Sets the value of [name][Operation::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [metadata][Operation::metadata].
    pub fn set_metadata<T: Into<serde_json::Value>>(mut self, v: T) -> Self {
        self.metadata = Some(v.into());
        self
    }

    /// Sets the value of [done][Operation::done].
    pub fn set_done<T: Into<bool>>(mut self, v: T) -> Self {
        self.done = v.into();
        self
    }

    /// Sets the value of [result][Operation::result].
    pub fn set_result<T: Into<Option<operation::Result>>>(mut self, v: T) -> Self {
        self.result = v.into();
        self
    }

    /// The error, if the operation completed with an error.
    pub fn error(&self) -> Option<&Status> {
        match &self.result {
            Some(operation::Result::Error(s)) => Some(s),
            _ => None,
        }
    }

    /// The response, if the operation completed successfully.
    pub fn response(&self) -> Option<&serde_json::Value> {
        match &self.result {
            Some(operation::Result::Response(r)) => Some(r),
            _ => None,
        }
    }
}

/// Defines additional types related to [Operation].
pub mod operation {
    use super::*;

    /// The operation result, which can be either an `error` or a valid
    /// `response`.
    #[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    #[non_exhaustive]
    pub enum Result {
        /// The error result of the operation in case of failure or cancellation.
        Error(Status),
        /// The normal response of the operation in case of success. The payload
        /// carries its type in an `@type` field.
        Response(serde_json::Value),
    }
}

/// The request message for `Operations.GetOperation`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetOperationRequest {
    /// The name of the operation resource.
    pub name: String,
}

impl GetOperationRequest {
    /// Sets the value of [name][GetOperationRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// The request message for `Operations.CancelOperation`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CancelOperationRequest {
    /// The name of the operation resource to be cancelled.
    pub name: String,
}

impl CancelOperationRequest {
    /// Sets the value of [name][CancelOperationRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// The request message for `Operations.DeleteOperation`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteOperationRequest {
    /// The name of the operation resource to be deleted.
    pub name: String,
}

impl DeleteOperationRequest {
    /// Sets the value of [name][DeleteOperationRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// A generic empty message.
///
/// Used as the response type of operations that produce no value, such as
/// deleting a resource.
#[derive(Clone, Copy, Debug, Default, PartialEq, Deserialize, Serialize)]
#[non_exhaustive]
pub struct Empty {}

impl crate::Message for Empty {
    fn typename() -> &'static str {
        "type.googleapis.com/google.protobuf.Empty"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gax::error::rpc::Code;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn deserialize_in_progress() -> anyhow::Result<()> {
        let input = json!({
            "name": "operations/abc",
            "metadata": {"@type": "type.googleapis.com/test.Metadata", "progress": 42},
        });
        let got = serde_json::from_value::<Operation>(input)?;
        let want = Operation::default()
            .set_name("operations/abc")
            .set_metadata(json!({"@type": "type.googleapis.com/test.Metadata", "progress": 42}));
        assert_eq!(got, want);
        assert_eq!(got.error(), None);
        assert_eq!(got.response(), None);
        Ok(())
    }

    #[test]
    fn deserialize_response() -> anyhow::Result<()> {
        let input = json!({
            "name": "operations/abc",
            "done": true,
            "response": {"@type": "type.googleapis.com/google.protobuf.Empty"},
        });
        let got = serde_json::from_value::<Operation>(input)?;
        assert!(got.done);
        assert_eq!(
            got.response(),
            Some(&json!({"@type": "type.googleapis.com/google.protobuf.Empty"}))
        );
        Ok(())
    }

    #[test]
    fn serialize_error() -> anyhow::Result<()> {
        let status = Status::default()
            .set_code(Code::PermissionDenied)
            .set_message("uh-oh");
        let op = Operation::default()
            .set_name("operations/abc")
            .set_done(true)
            .set_result(operation::Result::Error(status.clone()));
        let got = serde_json::to_value(&op)?;
        assert_eq!(got["error"]["message"], json!("uh-oh"));
        assert_eq!(got["done"], json!(true));
        assert!(got.get("response").is_none(), "{got:?}");

        let roundtrip = serde_json::from_value::<Operation>(got)?;
        assert_eq!(roundtrip.error(), Some(&status));
        Ok(())
    }
}
