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

//! Google Cloud Client Libraries for Rust - Authentication Components
//!
//! This crate contains the types and functions used by the client libraries
//! to find the [Credentials] and the default project of an application.
//!
//! Credentials are found by evaluating a list of sources: environment
//! variables naming a keyfile, environment variables containing the keyfile
//! itself, and finally the well-known file created by the Google Cloud CLI.
//! [Authentication methods at Google] is a good introduction on the topic.
//!
//! [Authentication methods at Google]: https://cloud.google.com/docs/authentication
//! [Credentials]: https://cloud.google.com/docs/authentication#credentials

pub mod errors;

/// Types and functions to work with Google Cloud authentication [Credentials].
///
/// [Credentials]: https://cloud.google.com/docs/authentication#credentials
pub mod credentials;

pub mod project;

/// A `Result` alias where the `Err` case is
/// `google_cloud_auth::errors::CredentialsError`.
pub type Result<T> = std::result::Result<T, crate::errors::CredentialsError>;
