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

//! Common types shared by the Google Cloud client libraries for Rust.
//!
//! This crate contains the error model, the client builder, the per-request
//! options, the polling policies used with long-running operations, the
//! paginator used with list RPCs, and the resource name templates. Most
//! applications only use these types indirectly, through the service
//! specific crates.

/// An alias of [std::result::Result] where the error is always [Error][crate::error::Error].
///
/// This is the result type used by all functions wrapping RPCs.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

pub mod client_builder;
pub mod duration;
pub mod error;
pub mod linear_backoff;
pub mod loop_state;
pub mod options;
pub mod paginator;
pub mod path_template;
pub mod polling_backoff_policy;
pub mod polling_error_policy;
