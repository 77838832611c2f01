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

mod core_error;
pub use core_error::*;

/// Errors produced while formatting resource names.
///
/// These errors occur when a resource name template cannot be rendered with
/// the values provided by the application, or when the template itself is
/// malformed. The client fails these requests locally because it does not know
/// how to send them.
pub mod binding;

/// Errors and error details returned by Service RPCs.
///
/// The client libraries distinguish between errors detected while trying to
/// send a RPC (e.g. there is no transport configured), errors trying to
/// receive a response (e.g. the stream is dropped before the full response),
/// and errors returned by the service itself.
///
/// The types in this module represent detailed information returned by the
/// Google Cloud services.
///
/// # Examples
///
/// ```
/// # use google_cloud_gax::error;
/// use error::Error;
/// use error::rpc::Status;
/// fn handle_error(e: Error) {
///     if let Some(status) = e.status() {
///         println!("the service reported {status:?}")
///     }
/// }
/// ```
pub mod rpc;
