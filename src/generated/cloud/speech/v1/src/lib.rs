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

//! Google Cloud Client Libraries for Rust - Cloud Speech-to-Text API
//!
//! This crate contains traits, types, and functions to interact with the
//! Speech-to-Text API. Most applications will use the structs defined in
//! the [client] module.
//!
//! The client supports three ways to recognize audio:
//! * [recognize][client::Speech::recognize] returns the results once all the
//!   audio is processed. Suitable for short audio.
//! * [recognize_job][client::Speech::recognize_job] starts a long-running
//!   [job][job::RecognizeJob].
//! * [stream][client::Speech::stream] opens a bidirectional
//!   [session][stream::RecognizeStream], returning results while the audio
//!   is sent.

pub use gax::Result;
pub use gax::error::Error;

pub mod audio;
pub mod builder;
pub mod client;
pub mod job;
pub mod model;
pub mod result;
pub mod stream;
pub mod stub;

pub(crate) mod tracing;

pub use audio::{Audio, AudioSource};
pub use result::{Alternative, InterimResult, RecognitionResult, Word};
