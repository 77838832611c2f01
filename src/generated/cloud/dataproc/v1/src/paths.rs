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

//! Resource names used by the Dataproc services.
//!
//! # Example
//! ```
//! # use google_cloud_dataproc_v1::paths;
//! let name = paths::workflow_template_path("my-project", "us-central1", "nightly")?;
//! assert_eq!(name, "projects/my-project/regions/us-central1/workflowTemplates/nightly");
//! let parts = paths::match_workflow_template_path(&name).expect("a workflow template name");
//! assert_eq!(parts.get("workflow_template").map(String::as_str), Some("nightly"));
//! # gax::Result::<()>::Ok(())
//! ```

use crate::Result;
use gax::path_template::PathTemplate;
use std::collections::BTreeMap;

const REGION: &str = "projects/{project}/regions/{region}";
const CLUSTER: &str = "projects/{project}/regions/{region}/clusters/{cluster}";
const WORKFLOW_TEMPLATE: &str =
    "projects/{project}/regions/{region}/workflowTemplates/{workflow_template}";
const AUTOSCALING_POLICY: &str =
    "projects/{project}/regions/{region}/autoscalingPolicies/{autoscaling_policy}";

fn render(template: &str, bindings: &[(&str, &str)]) -> Result<String> {
    PathTemplate::parse(template)?.render(bindings)
}

fn matches(template: &str, name: &str) -> Option<BTreeMap<String, String>> {
    PathTemplate::parse(template).ok()?.matches(name)
}

/// Returns the fully-qualified name of a region.
pub fn region_path(project: &str, region: &str) -> Result<String> {
    render(REGION, &[("project", project), ("region", region)])
}

/// Returns the fully-qualified name of a cluster.
pub fn cluster_path(project: &str, region: &str, cluster: &str) -> Result<String> {
    render(
        CLUSTER,
        &[("project", project), ("region", region), ("cluster", cluster)],
    )
}

/// Returns the fully-qualified name of a workflow template.
pub fn workflow_template_path(
    project: &str,
    region: &str,
    workflow_template: &str,
) -> Result<String> {
    render(
        WORKFLOW_TEMPLATE,
        &[
            ("project", project),
            ("region", region),
            ("workflow_template", workflow_template),
        ],
    )
}

/// Returns the fully-qualified name of an autoscaling policy.
pub fn autoscaling_policy_path(
    project: &str,
    region: &str,
    autoscaling_policy: &str,
) -> Result<String> {
    render(
        AUTOSCALING_POLICY,
        &[
            ("project", project),
            ("region", region),
            ("autoscaling_policy", autoscaling_policy),
        ],
    )
}

/// Parses a region name into its `project` and `region` components.
pub fn match_region_path(name: &str) -> Option<BTreeMap<String, String>> {
    matches(REGION, name)
}

/// Parses a cluster name into its components.
pub fn match_cluster_path(name: &str) -> Option<BTreeMap<String, String>> {
    matches(CLUSTER, name)
}

/// Parses a workflow template name into its components.
pub fn match_workflow_template_path(name: &str) -> Option<BTreeMap<String, String>> {
    matches(WORKFLOW_TEMPLATE, name)
}

/// Parses an autoscaling policy name into its components.
pub fn match_autoscaling_policy_path(name: &str) -> Option<BTreeMap<String, String>> {
    matches(AUTOSCALING_POLICY, name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn render_all() -> anyhow::Result<()> {
        assert_eq!(region_path("p", "r")?, "projects/p/regions/r");
        assert_eq!(cluster_path("p", "r", "c")?, "projects/p/regions/r/clusters/c");
        assert_eq!(
            workflow_template_path("p", "r", "w")?,
            "projects/p/regions/r/workflowTemplates/w"
        );
        assert_eq!(
            autoscaling_policy_path("p", "r", "a")?,
            "projects/p/regions/r/autoscalingPolicies/a"
        );
        Ok(())
    }

    #[test_case("", "r"; "empty project")]
    #[test_case("p", ""; "empty region")]
    #[test_case("p/q", "r"; "slash in project")]
    fn render_errors(project: &str, region: &str) {
        let got = region_path(project, region);
        assert!(matches!(got, Err(ref e) if e.is_binding()), "{got:?}");
    }

    #[test]
    fn match_roundtrip() -> anyhow::Result<()> {
        let name = autoscaling_policy_path("p", "r", "scale-up")?;
        let got = match_autoscaling_policy_path(&name).unwrap_or_default();
        let want = BTreeMap::from([
            ("autoscaling_policy".to_string(), "scale-up".to_string()),
            ("project".to_string(), "p".to_string()),
            ("region".to_string(), "r".to_string()),
        ]);
        assert_eq!(got, want);
        assert!(match_cluster_path(&name).is_none());
        assert!(match_region_path("projects/p/regions/r").is_some());
        Ok(())
    }
}
