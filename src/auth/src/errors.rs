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

//! Errors created during credential discovery.

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The error type for credential discovery.
///
/// Applications rarely need to create instances of this error type. The
/// exception might be when testing application code, where the application is
/// mocking a client library behavior.
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct CredentialsError(ErrorKind);

impl CredentialsError {
    /// None of the configured sources provided credentials.
    pub fn is_not_found(&self) -> bool {
        matches!(self.0, ErrorKind::NotFound)
    }

    /// A problem opening or reading a credentials file.
    pub fn is_loading(&self) -> bool {
        matches!(self.0, ErrorKind::Loading { .. })
    }

    /// A problem parsing a credentials JSON specification.
    pub fn is_parsing(&self) -> bool {
        matches!(self.0, ErrorKind::Parsing { .. })
    }

    /// The credentials type is invalid or unknown.
    pub fn is_unknown_type(&self) -> bool {
        matches!(self.0, ErrorKind::UnknownType(_))
    }

    pub(crate) fn not_found() -> Self {
        Self(ErrorKind::NotFound)
    }

    pub(crate) fn loading<S, T>(origin: S, source: T) -> Self
    where
        S: Into<String>,
        T: Into<BoxError>,
    {
        Self(ErrorKind::Loading {
            origin: origin.into(),
            source: source.into(),
        })
    }

    pub(crate) fn parsing<S, T>(origin: S, source: T) -> Self
    where
        S: Into<String>,
        T: Into<BoxError>,
    {
        Self(ErrorKind::Parsing {
            origin: origin.into(),
            source: source.into(),
        })
    }

    pub(crate) fn unknown_type<T: Into<String>>(credential_type: T) -> Self {
        Self(ErrorKind::UnknownType(credential_type.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error(
        "could not find default credentials, set one of the credential environment variables, or see https://cloud.google.com/docs/authentication/external/set-up-adc"
    )]
    NotFound,
    #[error("could not read the credentials from {origin}")]
    Loading {
        origin: String,
        #[source]
        source: BoxError,
    },
    #[error("cannot parse the credentials from {origin}")]
    Parsing {
        origin: String,
        #[source]
        source: BoxError,
    },
    #[error("unknown or invalid credentials type `{0}`")]
    UnknownType(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn constructors() {
        let error = CredentialsError::not_found();
        assert!(error.is_not_found(), "{error:?}");
        assert!(error.source().is_none(), "{error:?}");
        assert!(error.to_string().contains("default credentials"), "{error}");

        let error = CredentialsError::loading("$TEST_VAR", "test message");
        assert!(error.is_loading(), "{error:?}");
        assert!(error.to_string().contains("$TEST_VAR"), "{error}");
        let source = error.source().map(|e| e.to_string());
        assert_eq!(source.as_deref(), Some("test message"));

        let error = CredentialsError::parsing("/a/b/c.json", "test message");
        assert!(error.is_parsing(), "{error:?}");
        assert!(error.to_string().contains("/a/b/c.json"), "{error}");
        assert!(error.source().is_some(), "{error:?}");

        let error = CredentialsError::unknown_type("external_account");
        assert!(error.is_unknown_type(), "{error:?}");
        assert!(!error.is_not_found(), "{error:?}");
        assert!(error.to_string().contains("external_account"), "{error}");
    }
}
