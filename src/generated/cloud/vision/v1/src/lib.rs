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

//! Google Cloud Client Libraries for Rust - Cloud Vision API
//!
//! This crate contains traits, types, and functions to interact with Cloud
//! Vision. Most applications will use the structs defined in the [client]
//! module:
//! * [ImageAnnotator](client::ImageAnnotator)
//! * [ProductSearch](client::ProductSearch)
//!
//! The feature detection helpers, such as
//! [label_detection](client::ImageAnnotator::label_detection), accept local
//! files, in-memory bytes and URIs through [ImageSource](image::ImageSource).

pub use gax::Result;
pub use gax::error::Error;

pub mod builder;
pub mod client;
pub mod image;
pub mod model;
pub mod paths;
pub mod stub;

pub(crate) mod tracing;
