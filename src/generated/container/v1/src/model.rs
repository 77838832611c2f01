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

//! The request and response messages of the Kubernetes Engine API.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Parameters that describe the nodes in a cluster.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NodeConfig {
    /// The name of a Google Compute Engine machine type, for example
    /// `n1-standard-1`.
    pub machine_type: String,

    /// Size of the disk attached to each node, specified in GB.
    pub disk_size_gb: i32,

    /// The set of Google API scopes to be made available on all of the
    /// node VMs under the "default" service account.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub oauth_scopes: Vec<String>,

    /// The map of Kubernetes labels to be applied to each node.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,

    /// The image type to use for this node.
    pub image_type: String,

    /// Whether the nodes are created as preemptible VM instances.
    pub preemptible: bool,
}

impl NodeConfig {
    /// Sets the value of [machine_type][NodeConfig::machine_type].
    pub fn set_machine_type<T: Into<String>>(mut self, v: T) -> Self {
        self.machine_type = v.into();
        self
    }

    /// Sets the value of [disk_size_gb][NodeConfig::disk_size_gb].
    pub fn set_disk_size_gb<T: Into<i32>>(mut self, v: T) -> Self {
        self.disk_size_gb = v.into();
        self
    }

    /// Sets the value of [oauth_scopes][NodeConfig::oauth_scopes].
    pub fn set_oauth_scopes<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.oauth_scopes = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [labels][NodeConfig::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [image_type][NodeConfig::image_type].
    pub fn set_image_type<T: Into<String>>(mut self, v: T) -> Self {
        self.image_type = v.into();
        self
    }

    /// Sets the value of [preemptible][NodeConfig::preemptible].
    pub fn set_preemptible<T: Into<bool>>(mut self, v: T) -> Self {
        self.preemptible = v.into();
        self
    }
}

/// A Google Kubernetes Engine cluster.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Cluster {
    /// The name of this cluster. The name must be unique within this project
    /// and location.
    pub name: String,

    /// An optional description of this cluster.
    pub description: String,

    /// The number of nodes to create in this cluster.
    pub initial_node_count: i32,

    /// Parameters used in creating the cluster's nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_config: Option<NodeConfig>,

    /// The logging service the cluster should use to write logs.
    pub logging_service: String,

    /// The monitoring service the cluster should use to write metrics.
    pub monitoring_service: String,

    /// The name of the Google Compute Engine network to which the cluster is
    /// connected.
    pub network: String,

    /// The node pools associated with this cluster.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub node_pools: Vec<NodePool>,

    /// The list of Google Compute Engine zones in which the cluster's nodes
    /// should be located.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub locations: Vec<String>,

    /// The resource labels for the cluster to use to annotate any related
    /// Google Compute Engine resources.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub resource_labels: HashMap<String, String>,

    /// The initial Kubernetes version for this cluster.
    pub initial_cluster_version: String,

    /// Output only. Server-defined URL for the resource.
    pub self_link: String,

    /// Output only. The IP address of this cluster's master endpoint.
    pub endpoint: String,

    /// Output only. The current software version of the master endpoint.
    pub current_master_version: String,

    /// Output only. The time the cluster was created, in RFC 3339 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,

    /// Output only. The current status of this cluster.
    pub status: cluster::Status,

    /// Output only. Additional information about the current status of this
    /// cluster, if available.
    pub status_message: String,

    /// Output only. The number of nodes currently in the cluster.
    pub current_node_count: i32,

    /// Output only. The name of the Google Compute Engine zone or region in
    /// which the cluster resides.
    pub location: String,
}

impl Cluster {
    /// Sets the value of [name][Cluster::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [description][Cluster::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = v.into();
        self
    }

    /// Sets the value of [initial_node_count][Cluster::initial_node_count].
    pub fn set_initial_node_count<T: Into<i32>>(mut self, v: T) -> Self {
        self.initial_node_count = v.into();
        self
    }

    /// Sets the value of [node_config][Cluster::node_config].
    pub fn set_node_config<T: Into<Option<NodeConfig>>>(mut self, v: T) -> Self {
        self.node_config = v.into();
        self
    }

    /// Sets the value of [logging_service][Cluster::logging_service].
    pub fn set_logging_service<T: Into<String>>(mut self, v: T) -> Self {
        self.logging_service = v.into();
        self
    }

    /// Sets the value of [monitoring_service][Cluster::monitoring_service].
    pub fn set_monitoring_service<T: Into<String>>(mut self, v: T) -> Self {
        self.monitoring_service = v.into();
        self
    }

    /// Sets the value of [network][Cluster::network].
    pub fn set_network<T: Into<String>>(mut self, v: T) -> Self {
        self.network = v.into();
        self
    }

    /// Sets the value of [node_pools][Cluster::node_pools].
    pub fn set_node_pools<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<NodePool>,
    {
        self.node_pools = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [locations][Cluster::locations].
    pub fn set_locations<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.locations = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [resource_labels][Cluster::resource_labels].
    pub fn set_resource_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.resource_labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [initial_cluster_version][Cluster::initial_cluster_version].
    pub fn set_initial_cluster_version<T: Into<String>>(mut self, v: T) -> Self {
        self.initial_cluster_version = v.into();
        self
    }

    /// Sets the value of [status][Cluster::status].
    pub fn set_status<T: Into<cluster::Status>>(mut self, v: T) -> Self {
        self.status = v.into();
        self
    }

    /// Sets the value of [current_node_count][Cluster::current_node_count].
    pub fn set_current_node_count<T: Into<i32>>(mut self, v: T) -> Self {
        self.current_node_count = v.into();
        self
    }

    /// Sets the value of [location][Cluster::location].
    pub fn set_location<T: Into<String>>(mut self, v: T) -> Self {
        self.location = v.into();
        self
    }
}

/// Defines additional types related to [Cluster].
pub mod cluster {
    use super::*;

    /// The current status of the cluster.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    #[non_exhaustive]
    pub enum Status {
        /// Not set.
        #[default]
        StatusUnspecified,
        /// The cluster is being created.
        Provisioning,
        /// The cluster has been created and is fully usable.
        Running,
        /// Some work is actively being done on the cluster, such as upgrading
        /// the master or node software.
        Reconciling,
        /// The cluster is being deleted.
        Stopping,
        /// The cluster may be unusable.
        Error,
        /// The cluster requires user action to restore full functionality.
        Degraded,
    }
}

/// Settings for the cluster autoscaler of a node pool.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NodePoolAutoscaling {
    /// Is autoscaling enabled for this node pool.
    pub enabled: bool,

    /// Minimum number of nodes in the node pool.
    pub min_node_count: i32,

    /// Maximum number of nodes in the node pool.
    pub max_node_count: i32,
}

impl NodePoolAutoscaling {
    /// Sets the value of [enabled][NodePoolAutoscaling::enabled].
    pub fn set_enabled<T: Into<bool>>(mut self, v: T) -> Self {
        self.enabled = v.into();
        self
    }

    /// Sets the value of [min_node_count][NodePoolAutoscaling::min_node_count].
    pub fn set_min_node_count<T: Into<i32>>(mut self, v: T) -> Self {
        self.min_node_count = v.into();
        self
    }

    /// Sets the value of [max_node_count][NodePoolAutoscaling::max_node_count].
    pub fn set_max_node_count<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_node_count = v.into();
        self
    }
}

/// A group of nodes within a cluster that all have the same configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NodePool {
    /// The name of the node pool.
    pub name: String,

    /// The node configuration of the pool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<NodeConfig>,

    /// The initial node count for the pool.
    pub initial_node_count: i32,

    /// Autoscaler configuration for this node pool.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoscaling: Option<NodePoolAutoscaling>,

    /// The version of Kubernetes running on this node pool's nodes.
    pub version: String,

    /// Output only. The status of the nodes in this pool instance.
    pub status: node_pool::Status,

    /// Output only. Additional information about the current status of this
    /// node pool instance, if available.
    pub status_message: String,

    /// Output only. Server-defined URL for the resource.
    pub self_link: String,

    /// Output only. The resource URLs of the managed instance groups
    /// associated with this node pool.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub instance_group_urls: Vec<String>,
}

impl NodePool {
    /// Sets the value of [name][NodePool::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [config][NodePool::config].
    pub fn set_config<T: Into<Option<NodeConfig>>>(mut self, v: T) -> Self {
        self.config = v.into();
        self
    }

    /// Sets the value of [initial_node_count][NodePool::initial_node_count].
    pub fn set_initial_node_count<T: Into<i32>>(mut self, v: T) -> Self {
        self.initial_node_count = v.into();
        self
    }

    /// Sets the value of [autoscaling][NodePool::autoscaling].
    pub fn set_autoscaling<T: Into<Option<NodePoolAutoscaling>>>(mut self, v: T) -> Self {
        self.autoscaling = v.into();
        self
    }

    /// Sets the value of [version][NodePool::version].
    pub fn set_version<T: Into<String>>(mut self, v: T) -> Self {
        self.version = v.into();
        self
    }

    /// Sets the value of [status][NodePool::status].
    pub fn set_status<T: Into<node_pool::Status>>(mut self, v: T) -> Self {
        self.status = v.into();
        self
    }
}

/// Defines additional types related to [NodePool].
pub mod node_pool {
    use super::*;

    /// The current status of the node pool instance.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    #[non_exhaustive]
    pub enum Status {
        /// Not set.
        #[default]
        StatusUnspecified,
        /// The node pool is being created.
        Provisioning,
        /// The node pool has been created and is fully usable.
        Running,
        /// The node pool has been created and is partially usable.
        RunningWithError,
        /// Some work is actively being done on the node pool.
        Reconciling,
        /// The node pool is being deleted.
        Stopping,
        /// The node pool may be unusable.
        Error,
    }
}

/// Describes the changes applied by
/// [update_cluster][crate::client::ClusterManager::update_cluster]. Exactly
/// one update can be applied to a cluster with each request.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ClusterUpdate {
    /// The Kubernetes version to change the nodes to.
    pub desired_node_version: String,

    /// The monitoring service the cluster should use to write metrics.
    pub desired_monitoring_service: String,

    /// The node pool to be upgraded.
    pub desired_node_pool_id: String,

    /// The desired image type for the node pool.
    pub desired_image_type: String,

    /// Autoscaler configuration for the node pool named in
    /// `desired_node_pool_id`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_node_pool_autoscaling: Option<NodePoolAutoscaling>,

    /// The desired list of Google Compute Engine zones in which the cluster's
    /// nodes should be located.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub desired_locations: Vec<String>,

    /// The Kubernetes version to change the master to.
    pub desired_master_version: String,

    /// The logging service the cluster should use to write logs.
    pub desired_logging_service: String,
}

impl ClusterUpdate {
    /// Sets the value of [desired_node_version][ClusterUpdate::desired_node_version].
    pub fn set_desired_node_version<T: Into<String>>(mut self, v: T) -> Self {
        self.desired_node_version = v.into();
        self
    }

    /// Sets the value of [desired_monitoring_service][ClusterUpdate::desired_monitoring_service].
    pub fn set_desired_monitoring_service<T: Into<String>>(mut self, v: T) -> Self {
        self.desired_monitoring_service = v.into();
        self
    }

    /// Sets the value of [desired_node_pool_id][ClusterUpdate::desired_node_pool_id].
    pub fn set_desired_node_pool_id<T: Into<String>>(mut self, v: T) -> Self {
        self.desired_node_pool_id = v.into();
        self
    }

    /// Sets the value of [desired_image_type][ClusterUpdate::desired_image_type].
    pub fn set_desired_image_type<T: Into<String>>(mut self, v: T) -> Self {
        self.desired_image_type = v.into();
        self
    }

    /// Sets the value of [desired_node_pool_autoscaling][ClusterUpdate::desired_node_pool_autoscaling].
    pub fn set_desired_node_pool_autoscaling<T: Into<Option<NodePoolAutoscaling>>>(
        mut self,
        v: T,
    ) -> Self {
        self.desired_node_pool_autoscaling = v.into();
        self
    }

    /// Sets the value of [desired_locations][ClusterUpdate::desired_locations].
    pub fn set_desired_locations<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.desired_locations = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [desired_master_version][ClusterUpdate::desired_master_version].
    pub fn set_desired_master_version<T: Into<String>>(mut self, v: T) -> Self {
        self.desired_master_version = v.into();
        self
    }

    /// Sets the value of [desired_logging_service][ClusterUpdate::desired_logging_service].
    pub fn set_desired_logging_service<T: Into<String>>(mut self, v: T) -> Self {
        self.desired_logging_service = v.into();
        self
    }
}

/// Information about an operation executed by the Kubernetes Engine service.
///
/// Unlike the long-running operations of other services, these operations are
/// a resource of the service. Applications poll them with
/// [get_operation][crate::client::ClusterManager::get_operation].
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Operation {
    /// The server-assigned ID for the operation.
    pub name: String,

    /// The operation type.
    pub operation_type: operation::Type,

    /// The current status of the operation.
    pub status: operation::Status,

    /// Detailed operation progress, if available.
    pub detail: String,

    /// Output only. If an error has occurred, a textual description of the
    /// error.
    pub status_message: String,

    /// Server-defined URL for the resource.
    pub self_link: String,

    /// Server-defined URL for the target of the operation.
    pub target_link: String,

    /// The name of the Google Compute Engine zone or region in which the
    /// cluster resides.
    pub location: String,

    /// The time the operation started, in RFC 3339 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,

    /// The time the operation completed, in RFC 3339 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

impl Operation {
    /// Returns true if the operation has completed, successfully or not.
    pub fn is_done(&self) -> bool {
        self.status == operation::Status::Done
    }

    /// Returns true if the operation completed with an error message.
    pub fn is_error(&self) -> bool {
        self.is_done() && !self.status_message.is_empty()
    }

    /// Sets the value of [name][Operation::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [operation_type][Operation::operation_type].
    pub fn set_operation_type<T: Into<operation::Type>>(mut self, v: T) -> Self {
        self.operation_type = v.into();
        self
    }

    /// Sets the value of [status][Operation::status].
    pub fn set_status<T: Into<operation::Status>>(mut self, v: T) -> Self {
        self.status = v.into();
        self
    }

    /// Sets the value of [detail][Operation::detail].
    pub fn set_detail<T: Into<String>>(mut self, v: T) -> Self {
        self.detail = v.into();
        self
    }

    /// Sets the value of [status_message][Operation::status_message].
    pub fn set_status_message<T: Into<String>>(mut self, v: T) -> Self {
        self.status_message = v.into();
        self
    }

    /// Sets the value of [target_link][Operation::target_link].
    pub fn set_target_link<T: Into<String>>(mut self, v: T) -> Self {
        self.target_link = v.into();
        self
    }

    /// Sets the value of [location][Operation::location].
    pub fn set_location<T: Into<String>>(mut self, v: T) -> Self {
        self.location = v.into();
        self
    }
}

/// Defines additional types related to [Operation].
pub mod operation {
    use super::*;

    /// Current status of the operation.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    #[non_exhaustive]
    pub enum Status {
        /// Not set.
        #[default]
        StatusUnspecified,
        /// The operation has been created.
        Pending,
        /// The operation is currently running.
        Running,
        /// The operation is done, either cancelled or completed.
        Done,
        /// The operation is aborting.
        Aborting,
    }

    /// Operation type.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    #[non_exhaustive]
    pub enum Type {
        /// Not set.
        #[default]
        TypeUnspecified,
        /// Cluster create.
        CreateCluster,
        /// Cluster delete.
        DeleteCluster,
        /// A master upgrade.
        UpgradeMaster,
        /// A node upgrade.
        UpgradeNodes,
        /// Cluster repair.
        RepairCluster,
        /// Cluster update.
        UpdateCluster,
        /// Node pool create.
        CreateNodePool,
        /// Node pool delete.
        DeleteNodePool,
        /// Set node pool management.
        SetNodePoolManagement,
        /// Automatic node pool repair.
        AutoRepairNodes,
        /// Automatic node upgrade.
        AutoUpgradeNodes,
        /// Set labels.
        SetLabels,
        /// Set/generate master auth materials.
        SetMasterAuth,
        /// Set node pool size.
        SetNodePoolSize,
        /// Updates network policy for a cluster.
        SetNetworkPolicy,
        /// Set the maintenance policy.
        SetMaintenancePolicy,
    }
}

/// Kubernetes Engine service configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ServerConfig {
    /// Version of Kubernetes the service deploys by default.
    pub default_cluster_version: String,

    /// List of valid node upgrade target versions.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub valid_node_versions: Vec<String>,

    /// Default image type.
    pub default_image_type: String,

    /// List of valid image types.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub valid_image_types: Vec<String>,

    /// List of valid master versions.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub valid_master_versions: Vec<String>,
}

impl ServerConfig {
    /// Sets the value of [default_cluster_version][ServerConfig::default_cluster_version].
    pub fn set_default_cluster_version<T: Into<String>>(mut self, v: T) -> Self {
        self.default_cluster_version = v.into();
        self
    }

    /// Sets the value of [valid_master_versions][ServerConfig::valid_master_versions].
    pub fn set_valid_master_versions<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.valid_master_versions = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// ListClustersRequest lists clusters.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListClustersRequest {
    /// The parent (project and location) where the clusters will be listed.
    /// Specified in the format `projects/*/locations/*`. Location "-" matches
    /// all zones and all regions.
    pub parent: String,
}

impl ListClustersRequest {
    /// Sets the value of [parent][ListClustersRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }
}

/// ListClustersResponse is the result of ListClustersRequest.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListClustersResponse {
    /// A list of clusters in the project in the specified zone, or
    /// across all ones.
    pub clusters: Vec<Cluster>,

    /// If any zones are listed here, the list of clusters returned
    /// may be missing those zones.
    pub missing_zones: Vec<String>,
}

impl ListClustersResponse {
    /// Sets the value of [clusters][ListClustersResponse::clusters].
    pub fn set_clusters<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Cluster>,
    {
        self.clusters = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [missing_zones][ListClustersResponse::missing_zones].
    pub fn set_missing_zones<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.missing_zones = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// GetClusterRequest gets the settings of a cluster.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetClusterRequest {
    /// The name (project, location, cluster) of the cluster to retrieve.
    pub name: String,
}

impl GetClusterRequest {
    /// Sets the value of [name][GetClusterRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// CreateClusterRequest creates a cluster.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateClusterRequest {
    /// The parent (project and location) where the cluster will be created.
    pub parent: String,

    /// A cluster resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<Cluster>,
}

impl CreateClusterRequest {
    /// Sets the value of [parent][CreateClusterRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [cluster][CreateClusterRequest::cluster].
    pub fn set_cluster<T: Into<Option<Cluster>>>(mut self, v: T) -> Self {
        self.cluster = v.into();
        self
    }
}

/// UpdateClusterRequest updates the settings of a cluster.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateClusterRequest {
    /// The name (project, location, cluster) of the cluster to update.
    pub name: String,

    /// A description of the update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update: Option<ClusterUpdate>,
}

impl UpdateClusterRequest {
    /// Sets the value of [name][UpdateClusterRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [update][UpdateClusterRequest::update].
    pub fn set_update<T: Into<Option<ClusterUpdate>>>(mut self, v: T) -> Self {
        self.update = v.into();
        self
    }
}

/// DeleteClusterRequest deletes a cluster.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteClusterRequest {
    /// The name (project, location, cluster) of the cluster to delete.
    pub name: String,
}

impl DeleteClusterRequest {
    /// Sets the value of [name][DeleteClusterRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// ListNodePoolsRequest lists the node pool(s) for a cluster.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListNodePoolsRequest {
    /// The parent (project, location, cluster) where the node pools will be
    /// listed.
    pub parent: String,
}

impl ListNodePoolsRequest {
    /// Sets the value of [parent][ListNodePoolsRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }
}

/// ListNodePoolsResponse is the result of ListNodePoolsRequest.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListNodePoolsResponse {
    /// A list of node pools for a cluster.
    pub node_pools: Vec<NodePool>,
}

impl ListNodePoolsResponse {
    /// Sets the value of [node_pools][ListNodePoolsResponse::node_pools].
    pub fn set_node_pools<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<NodePool>,
    {
        self.node_pools = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// GetNodePoolRequest retrieves a node pool for a cluster.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetNodePoolRequest {
    /// The name (project, location, cluster, node pool) of the node pool.
    pub name: String,
}

impl GetNodePoolRequest {
    /// Sets the value of [name][GetNodePoolRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// CreateNodePoolRequest creates a node pool for a cluster.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateNodePoolRequest {
    /// The parent (project, location, cluster) where the node pool will be
    /// created.
    pub parent: String,

    /// The node pool to create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_pool: Option<NodePool>,
}

impl CreateNodePoolRequest {
    /// Sets the value of [parent][CreateNodePoolRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [node_pool][CreateNodePoolRequest::node_pool].
    pub fn set_node_pool<T: Into<Option<NodePool>>>(mut self, v: T) -> Self {
        self.node_pool = v.into();
        self
    }
}

/// DeleteNodePoolRequest deletes a node pool for a cluster.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteNodePoolRequest {
    /// The name (project, location, cluster, node pool) of the node pool to
    /// delete.
    pub name: String,
}

impl DeleteNodePoolRequest {
    /// Sets the value of [name][DeleteNodePoolRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// SetNodePoolSizeRequest sets the size of a node pool.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SetNodePoolSizeRequest {
    /// The name (project, location, cluster, node pool) of the node pool to
    /// resize.
    pub name: String,

    /// The desired node count for the pool.
    pub node_count: i32,
}

impl SetNodePoolSizeRequest {
    /// Sets the value of [name][SetNodePoolSizeRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [node_count][SetNodePoolSizeRequest::node_count].
    pub fn set_node_count<T: Into<i32>>(mut self, v: T) -> Self {
        self.node_count = v.into();
        self
    }
}

/// ListOperationsRequest lists operations.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListOperationsRequest {
    /// The parent (project and location) where the operations will be listed.
    pub parent: String,
}

impl ListOperationsRequest {
    /// Sets the value of [parent][ListOperationsRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }
}

/// ListOperationsResponse is the result of ListOperationsRequest.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListOperationsResponse {
    /// A list of operations in the project in the specified zone.
    pub operations: Vec<Operation>,

    /// If any zones are listed here, the list of operations returned
    /// may be missing the operations from those zones.
    pub missing_zones: Vec<String>,
}

impl ListOperationsResponse {
    /// Sets the value of [operations][ListOperationsResponse::operations].
    pub fn set_operations<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Operation>,
    {
        self.operations = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// GetOperationRequest gets a single operation.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetOperationRequest {
    /// The name (project, location, operation id) of the operation to get.
    pub name: String,
}

impl GetOperationRequest {
    /// Sets the value of [name][GetOperationRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// CancelOperationRequest cancels a single operation.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CancelOperationRequest {
    /// The name (project, location, operation id) of the operation to cancel.
    pub name: String,
}

impl CancelOperationRequest {
    /// Sets the value of [name][CancelOperationRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// Gets the current Kubernetes Engine service configuration.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetServerConfigRequest {
    /// The name (project and location) of the server config to get,
    /// specified in the format `projects/*/locations/*`.
    pub name: String,
}

impl GetServerConfigRequest {
    /// Sets the value of [name][GetServerConfigRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use test_case::test_case;

    #[test_case(operation::Status::StatusUnspecified, false)]
    #[test_case(operation::Status::Pending, false)]
    #[test_case(operation::Status::Running, false)]
    #[test_case(operation::Status::Aborting, false)]
    #[test_case(operation::Status::Done, true)]
    fn operation_is_done(status: operation::Status, want: bool) {
        let op = Operation::default().set_status(status);
        assert_eq!(op.is_done(), want);
    }

    #[test]
    fn operation_error() {
        let op = Operation::default()
            .set_status(operation::Status::Done)
            .set_status_message("quota exceeded");
        assert!(op.is_error());
        let op = op.set_status(operation::Status::Running);
        assert!(!op.is_error());
    }

    #[test]
    fn operation_from_json() -> anyhow::Result<()> {
        let input = json!({
            "name": "operation-123",
            "operationType": "CREATE_NODE_POOL",
            "status": "RUNNING",
            "targetLink": "https://container.googleapis.com/v1/projects/p/locations/l/clusters/c",
        });
        let got = serde_json::from_value::<Operation>(input)?;
        let want = Operation::default()
            .set_name("operation-123")
            .set_operation_type(operation::Type::CreateNodePool)
            .set_status(operation::Status::Running)
            .set_target_link("https://container.googleapis.com/v1/projects/p/locations/l/clusters/c");
        assert_eq!(got, want);
        Ok(())
    }

    #[test]
    fn cluster_to_json() -> anyhow::Result<()> {
        let cluster = Cluster::default()
            .set_name("c1")
            .set_initial_node_count(3)
            .set_node_config(NodeConfig::default().set_machine_type("e2-medium"))
            .set_status(cluster::Status::Running);
        let got = serde_json::to_value(&cluster)?;
        assert_eq!(got["name"], json!("c1"));
        assert_eq!(got["initialNodeCount"], json!(3));
        assert_eq!(got["nodeConfig"]["machineType"], json!("e2-medium"));
        assert_eq!(got["status"], json!("RUNNING"));
        assert!(got.get("nodePools").is_none(), "{got:?}");
        Ok(())
    }
}
