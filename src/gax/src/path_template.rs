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

//! Resource name templates.
//!
//! Google Cloud resources are identified by hierarchical names, such as
//! `projects/my-project/regions/us-central1/clusters/my-cluster`. The client
//! libraries describe the shape of these names with templates, where each
//! variable is a single path segment (`{cluster}`), or any number of path
//! segments (`{name=**}`).
//!
//! # Example
//! ```
//! # use google_cloud_gax::path_template::PathTemplate;
//! let template = PathTemplate::parse("projects/{project}/regions/{region}")?;
//! let name = template.render(&[("project", "my-project"), ("region", "us-central1")])?;
//! assert_eq!(name, "projects/my-project/regions/us-central1");
//!
//! let bindings = template.matches(&name).expect("name matches the template");
//! assert_eq!(bindings.get("region").map(String::as_str), Some("us-central1"));
//! # Ok::<(), google_cloud_gax::error::Error>(())
//! ```

use crate::Result;
use crate::error::Error;
use crate::error::binding::{BindingError, BindingProblem};
use std::collections::BTreeMap;

/// A parsed resource name template.
#[derive(Clone, Debug, PartialEq)]
pub struct PathTemplate {
    source: String,
    segments: Vec<Segment>,
}

#[derive(Clone, Debug, PartialEq)]
enum Segment {
    Literal(String),
    Variable { name: String, multi: bool },
}

impl PathTemplate {
    /// Parses a template.
    ///
    /// Returns a binding error if the template is malformed, for example, if
    /// it has empty segments, unbalanced braces, or repeated variables.
    pub fn parse<T: Into<String>>(template: T) -> Result<Self> {
        let source = template.into();
        let malformed = |msg: String| {
            Error::binding(BindingError::new(
                source.as_str(),
                BindingProblem::Malformed(msg),
            ))
        };
        if source.is_empty() {
            return Err(malformed("the template is empty".to_string()));
        }
        let mut segments = Vec::new();
        for part in source.split('/') {
            let segment = match part.strip_prefix('{').and_then(|p| p.strip_suffix('}')) {
                Some(inner) => {
                    let (name, multi) = match inner.split_once('=') {
                        None => (inner, false),
                        Some((name, "*")) => (name, false),
                        Some((name, "**")) => (name, true),
                        Some((_, pattern)) => {
                            return Err(malformed(format!("unsupported pattern `{pattern}`")));
                        }
                    };
                    if name.is_empty() || !name.chars().all(|c| c.is_alphanumeric() || c == '_')
                    {
                        return Err(malformed(format!("invalid variable name `{name}`")));
                    }
                    Segment::Variable {
                        name: name.to_string(),
                        multi,
                    }
                }
                None if part.is_empty() => {
                    return Err(malformed("empty path segment".to_string()));
                }
                None if part.contains(['{', '}']) => {
                    return Err(malformed(format!("unbalanced braces in `{part}`")));
                }
                None => Segment::Literal(part.to_string()),
            };
            segments.push(segment);
        }
        let mut names = Vec::new();
        for s in &segments {
            if let Segment::Variable { name, .. } = s {
                if names.contains(&name.as_str()) {
                    return Err(malformed(format!("variable `{name}` appears twice")));
                }
                names.push(name.as_str());
            }
        }
        Ok(Self { source, segments })
    }

    /// The template, as it was parsed.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// The names of the variables, in the order they appear.
    pub fn variables(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Variable { name, .. } => Some(name.as_str()),
                Segment::Literal(_) => None,
            })
            .collect()
    }

    /// Renders the template with the given variable values.
    ///
    /// Every variable must have a non-empty value. Single segment variables
    /// cannot contain `/`.
    pub fn render(&self, bindings: &[(&str, &str)]) -> Result<String> {
        let mut parts = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(l) => parts.push(l.as_str()),
                Segment::Variable { name, multi } => {
                    let value = bindings
                        .iter()
                        .find(|(n, _)| n == name)
                        .map(|(_, v)| *v)
                        .ok_or_else(|| self.error(BindingProblem::Unset(name.clone())))?;
                    if value.is_empty() {
                        return Err(self.error(BindingProblem::Empty(name.clone())));
                    }
                    if !multi && value.contains('/') {
                        return Err(self.error(BindingProblem::MultipleSegments(
                            name.clone(),
                            value.to_string(),
                        )));
                    }
                    parts.push(value);
                }
            }
        }
        Ok(parts.join("/"))
    }

    /// Matches a resource name against the template.
    ///
    /// Returns the value of each variable if `path` matches, `None` otherwise.
    pub fn matches(&self, path: &str) -> Option<BTreeMap<String, String>> {
        let parts: Vec<&str> = path.split('/').collect();
        if parts.iter().any(|p| p.is_empty()) {
            return None;
        }
        let mut bindings = BTreeMap::new();
        match_segments(&self.segments, &parts, &mut bindings).then_some(bindings)
    }

    fn error(&self, problem: BindingProblem) -> Error {
        Error::binding(BindingError::new(self.source.as_str(), problem))
    }
}

fn match_segments(
    segments: &[Segment],
    parts: &[&str],
    bindings: &mut BTreeMap<String, String>,
) -> bool {
    let Some((first, rest)) = segments.split_first() else {
        return parts.is_empty();
    };
    match first {
        Segment::Literal(l) => match parts.split_first() {
            Some((p, tail)) if p == l => match_segments(rest, tail, bindings),
            _ => false,
        },
        Segment::Variable { name, multi: false } => match parts.split_first() {
            Some((p, tail)) => {
                bindings.insert(name.clone(), p.to_string());
                match_segments(rest, tail, bindings)
            }
            None => false,
        },
        Segment::Variable { name, multi: true } => {
            // Prefer the longest match, a trailing `**` consumes everything.
            for n in (1..=parts.len()).rev() {
                let (head, tail) = parts.split_at(n);
                let mut attempt = bindings.clone();
                attempt.insert(name.clone(), head.join("/"));
                if match_segments(rest, tail, &mut attempt) {
                    *bindings = attempt;
                    return true;
                }
            }
            false
        }
    }
}

impl std::str::FromStr for PathTemplate {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for PathTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use test_case::test_case;

    fn problem(e: &Error) -> Option<&BindingProblem> {
        e.source()
            .and_then(|s| s.downcast_ref::<BindingError>())
            .map(|b| &b.problem)
    }

    #[test]
    fn parse_and_variables() -> anyhow::Result<()> {
        let template = PathTemplate::parse(
            "projects/{project}/locations/{location}/operations/{operation}",
        )?;
        assert_eq!(template.variables(), vec!["project", "location", "operation"]);
        assert_eq!(
            template.to_string(),
            "projects/{project}/locations/{location}/operations/{operation}"
        );
        let template: PathTemplate = "{name=**}/jobs/{job=*}".parse()?;
        assert_eq!(template.variables(), vec!["name", "job"]);
        Ok(())
    }

    #[test_case(""; "empty")]
    #[test_case("projects//{project}"; "empty segment")]
    #[test_case("projects/{project"; "unbalanced")]
    #[test_case("projects/x{project}"; "partial")]
    #[test_case("projects/{}"; "empty name")]
    #[test_case("projects/{project=foo}"; "bad pattern")]
    #[test_case("{a}/b/{a}"; "repeated")]
    fn parse_malformed(input: &str) {
        let err = PathTemplate::parse(input).unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert!(
            matches!(problem(&err), Some(BindingProblem::Malformed(_))),
            "{err:?}"
        );
    }

    #[test]
    fn render() -> anyhow::Result<()> {
        let template = PathTemplate::parse("projects/{project}/regions/{region}")?;
        let got = template.render(&[("region", "us-central1"), ("project", "p")])?;
        assert_eq!(got, "projects/p/regions/us-central1");
        Ok(())
    }

    #[test]
    fn render_multi_segment() -> anyhow::Result<()> {
        let template = PathTemplate::parse("{parent=**}/findings/{finding}")?;
        let got = template.render(&[
            ("parent", "organizations/o/sources/s"),
            ("finding", "f"),
        ])?;
        assert_eq!(got, "organizations/o/sources/s/findings/f");
        Ok(())
    }

    #[test]
    fn render_errors() -> anyhow::Result<()> {
        let template = PathTemplate::parse("projects/{project}/regions/{region}")?;

        let err = template.render(&[("project", "p")]).unwrap_err();
        assert_eq!(
            problem(&err),
            Some(&BindingProblem::Unset("region".to_string()))
        );

        let err = template
            .render(&[("project", ""), ("region", "r")])
            .unwrap_err();
        assert_eq!(
            problem(&err),
            Some(&BindingProblem::Empty("project".to_string()))
        );

        let err = template
            .render(&[("project", "p"), ("region", "a/b")])
            .unwrap_err();
        assert_eq!(
            problem(&err),
            Some(&BindingProblem::MultipleSegments(
                "region".to_string(),
                "a/b".to_string()
            ))
        );
        Ok(())
    }

    #[test]
    fn matches() -> anyhow::Result<()> {
        let template = PathTemplate::parse("projects/{project}/regions/{region}")?;
        let got = template.matches("projects/p/regions/r");
        let want = BTreeMap::from([
            ("project".to_string(), "p".to_string()),
            ("region".to_string(), "r".to_string()),
        ]);
        assert_eq!(got, Some(want));

        assert_eq!(template.matches("projects/p/zones/r"), None);
        assert_eq!(template.matches("projects/p/regions/r/extra"), None);
        assert_eq!(template.matches("projects/p/regions"), None);
        assert_eq!(template.matches("projects//regions/r"), None);
        Ok(())
    }

    #[test]
    fn matches_multi_segment() -> anyhow::Result<()> {
        let template = PathTemplate::parse("{parent=**}/findings/{finding}")?;
        let got = template.matches("organizations/o/sources/s/findings/f");
        let want = BTreeMap::from([
            ("parent".to_string(), "organizations/o/sources/s".to_string()),
            ("finding".to_string(), "f".to_string()),
        ]);
        assert_eq!(got, Some(want));
        assert_eq!(template.matches("findings/f"), None);

        let template = PathTemplate::parse("operations/{name=**}")?;
        let got = template.matches("operations/a/b/c");
        assert_eq!(
            got.and_then(|b| b.get("name").cloned()),
            Some("a/b/c".to_string())
        );
        Ok(())
    }
}
