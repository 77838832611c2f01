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

//! Resource names used by the Kubernetes Engine API.
//!
//! ```
//! # use google_cloud_container_v1::paths;
//! let pool = paths::node_pool_path("my-project", "us-central1-a", "prod", "default-pool")?;
//! assert_eq!(
//!     pool,
//!     "projects/my-project/locations/us-central1-a/clusters/prod/nodePools/default-pool"
//! );
//! # gax::Result::<()>::Ok(())
//! ```

use crate::Result;
use gax::path_template::PathTemplate;
use std::collections::BTreeMap;

const LOCATION: &str = "projects/{project}/locations/{location}";
const CLUSTER: &str = "projects/{project}/locations/{location}/clusters/{cluster}";
const NODE_POOL: &str =
    "projects/{project}/locations/{location}/clusters/{cluster}/nodePools/{node_pool}";
const OPERATION: &str = "projects/{project}/locations/{location}/operations/{operation}";

/// Returns the name of a location, used as the parent of clusters and
/// operations.
pub fn location_path(project: &str, location: &str) -> Result<String> {
    PathTemplate::parse(LOCATION)?.render(&[("project", project), ("location", location)])
}

/// Returns the name of a cluster.
pub fn cluster_path(project: &str, location: &str, cluster: &str) -> Result<String> {
    PathTemplate::parse(CLUSTER)?.render(&[
        ("project", project),
        ("location", location),
        ("cluster", cluster),
    ])
}

/// Returns the name of a node pool.
pub fn node_pool_path(
    project: &str,
    location: &str,
    cluster: &str,
    node_pool: &str,
) -> Result<String> {
    PathTemplate::parse(NODE_POOL)?.render(&[
        ("project", project),
        ("location", location),
        ("cluster", cluster),
        ("node_pool", node_pool),
    ])
}

/// Returns the name of an operation.
pub fn operation_path(project: &str, location: &str, operation: &str) -> Result<String> {
    PathTemplate::parse(OPERATION)?.render(&[
        ("project", project),
        ("location", location),
        ("operation", operation),
    ])
}

/// Parses a cluster name.
pub fn match_cluster_path(name: &str) -> Option<BTreeMap<String, String>> {
    PathTemplate::parse(CLUSTER).ok()?.matches(name)
}

/// Parses a node pool name.
pub fn match_node_pool_path(name: &str) -> Option<BTreeMap<String, String>> {
    PathTemplate::parse(NODE_POOL).ok()?.matches(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn render() -> anyhow::Result<()> {
        assert_eq!(location_path("p", "-")?, "projects/p/locations/-");
        assert_eq!(
            cluster_path("p", "us-east1", "c")?,
            "projects/p/locations/us-east1/clusters/c"
        );
        assert_eq!(
            operation_path("p", "us-east1", "operation-1")?,
            "projects/p/locations/us-east1/operations/operation-1"
        );
        Ok(())
    }

    #[test]
    fn missing_binding() {
        let err = cluster_path("p", "", "c").unwrap_err();
        assert!(err.is_binding(), "{err:?}");
    }

    #[test]
    fn parse_node_pool() -> anyhow::Result<()> {
        let name = node_pool_path("p", "l", "c", "np")?;
        let got = match_node_pool_path(&name).unwrap_or_default();
        assert_eq!(got.get("node_pool").map(String::as_str), Some("np"));
        assert_eq!(got.get("cluster").map(String::as_str), Some("c"));
        assert!(match_cluster_path(&name).is_none());
        Ok(())
    }
}
