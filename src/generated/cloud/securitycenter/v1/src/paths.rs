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

//! Resource names used by Security Command Center.

use crate::Result;
use gax::path_template::PathTemplate;
use std::collections::BTreeMap;

const ORGANIZATION: &str = "organizations/{organization}";
const ORGANIZATION_SETTINGS: &str = "organizations/{organization}/organizationSettings";
const SOURCE: &str = "organizations/{organization}/sources/{source}";
const FINDING: &str = "organizations/{organization}/sources/{source}/findings/{finding}";
const ASSET_SECURITY_MARKS: &str = "organizations/{organization}/assets/{asset}/securityMarks";
const FINDING_SECURITY_MARKS: &str =
    "organizations/{organization}/sources/{source}/findings/{finding}/securityMarks";

fn render(template: &str, bindings: &[(&str, &str)]) -> Result<String> {
    PathTemplate::parse(template)?.render(bindings)
}

/// Returns the name of an organization.
pub fn organization_path(organization: &str) -> Result<String> {
    render(ORGANIZATION, &[("organization", organization)])
}

/// Returns the name of the Security Command Center settings of an
/// organization.
pub fn organization_settings_path(organization: &str) -> Result<String> {
    render(ORGANIZATION_SETTINGS, &[("organization", organization)])
}

/// Returns the name of a finding source.
///
/// Use `-` as the `source` to list or group findings across all sources.
pub fn source_path(organization: &str, source: &str) -> Result<String> {
    render(SOURCE, &[("organization", organization), ("source", source)])
}

/// Returns the name of a finding.
pub fn finding_path(organization: &str, source: &str, finding: &str) -> Result<String> {
    render(
        FINDING,
        &[
            ("organization", organization),
            ("source", source),
            ("finding", finding),
        ],
    )
}

/// Returns the name of the security marks attached to an asset.
pub fn asset_security_marks_path(organization: &str, asset: &str) -> Result<String> {
    render(
        ASSET_SECURITY_MARKS,
        &[("organization", organization), ("asset", asset)],
    )
}

/// Returns the name of the security marks attached to a finding.
pub fn finding_security_marks_path(
    organization: &str,
    source: &str,
    finding: &str,
) -> Result<String> {
    render(
        FINDING_SECURITY_MARKS,
        &[
            ("organization", organization),
            ("source", source),
            ("finding", finding),
        ],
    )
}

/// Parses a finding name into its `organization`, `source` and `finding`
/// components.
pub fn match_finding_path(name: &str) -> Option<BTreeMap<String, String>> {
    PathTemplate::parse(FINDING).ok()?.matches(name)
}

/// Parses a source name.
pub fn match_source_path(name: &str) -> Option<BTreeMap<String, String>> {
    PathTemplate::parse(SOURCE).ok()?.matches(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(organization_path("123"), "organizations/123")]
    #[test_case(organization_settings_path("123"), "organizations/123/organizationSettings")]
    #[test_case(source_path("123", "-"), "organizations/123/sources/-")]
    #[test_case(finding_path("123", "456", "f1"), "organizations/123/sources/456/findings/f1")]
    #[test_case(asset_security_marks_path("123", "a1"), "organizations/123/assets/a1/securityMarks")]
    #[test_case(
        finding_security_marks_path("123", "456", "f1"),
        "organizations/123/sources/456/findings/f1/securityMarks"
    )]
    fn render(got: Result<String>, want: &str) -> anyhow::Result<()> {
        assert_eq!(got?, want);
        Ok(())
    }

    #[test]
    fn parse() {
        let got = match_finding_path("organizations/123/sources/456/findings/f1").unwrap_or_default();
        assert_eq!(got.get("source").map(String::as_str), Some("456"));
        assert!(match_source_path("organizations/123/sources/456/findings/f1").is_none());
        assert!(organization_path("").is_err());
    }
}
