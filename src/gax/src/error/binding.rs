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

/// A problem rendering or parsing a resource name template.
///
/// Applications can find this type in the [source][std::error::Error::source]
/// of an [Error][crate::error::Error] where `is_binding()` is true.
///
/// # Example
/// ```
/// # use google_cloud_gax::error::binding::*;
/// # use google_cloud_gax::path_template::PathTemplate;
/// use std::error::Error as _;
/// let template = PathTemplate::parse("projects/{project}/regions/{region}")?;
/// let err = template.render(&[("project", "my-project")]).unwrap_err();
/// let binding = err.source().and_then(|e| e.downcast_ref::<BindingError>());
/// assert!(matches!(binding, Some(BindingError { problem: BindingProblem::Unset(_), .. })));
/// # Ok::<(), google_cloud_gax::error::Error>(())
/// ```
#[derive(thiserror::Error, Debug, PartialEq)]
#[error("cannot bind `{template}`: {problem}")]
pub struct BindingError {
    /// The template being rendered or parsed.
    pub template: String,
    /// What went wrong.
    pub problem: BindingProblem,
}

impl BindingError {
    pub(crate) fn new<T: Into<String>>(template: T, problem: BindingProblem) -> Self {
        Self {
            template: template.into(),
            problem,
        }
    }
}

/// The specific problem detected in a [BindingError].
#[derive(thiserror::Error, Debug, PartialEq)]
#[non_exhaustive]
pub enum BindingProblem {
    /// The variable has no value.
    #[error("variable `{0}` needs to be set")]
    Unset(String),
    /// The variable is set to an empty string.
    #[error("variable `{0}` cannot be empty")]
    Empty(String),
    /// A single segment variable contains a `/`.
    #[error("variable `{0}` should be a single path segment; found: '{1}'")]
    MultipleSegments(String, String),
    /// The template itself is malformed.
    #[error("malformed template: {0}")]
    Malformed(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fmt_unset() {
        let e = BindingError::new("projects/{project}", BindingProblem::Unset("project".into()));
        let fmt = e.to_string();
        assert!(fmt.contains("projects/{project}"), "{fmt}");
        assert!(fmt.contains("`project` needs to be set"), "{fmt}");
    }

    #[test]
    fn fmt_multiple_segments() {
        let e = BindingError::new(
            "projects/{project}",
            BindingProblem::MultipleSegments("project".into(), "a/b".into()),
        );
        let fmt = e.to_string();
        assert!(fmt.contains("single path segment"), "{fmt}");
        assert!(fmt.contains("'a/b'"), "{fmt}");
    }

    #[test]
    fn fmt_malformed() {
        let e = BindingError::new("projects/{", BindingProblem::Malformed("unclosed".into()));
        let fmt = e.to_string();
        assert!(fmt.contains("malformed template: unclosed"), "{fmt}");
    }
}
