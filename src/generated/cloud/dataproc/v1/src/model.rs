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

//! The request and response messages of the Cloud Dataproc API.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A set of field paths, used to select the fields changed by an update.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FieldMask {
    pub paths: Vec<String>,
}

impl FieldMask {
    /// Sets the value of [paths][FieldMask::paths].
    pub fn set_paths<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.paths = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Describes the identifying information, config, and status of a cluster
/// of Compute Engine instances.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Cluster {
    /// The Google Cloud Platform project ID that the cluster belongs to.
    pub project_id: String,

    /// The cluster name. Cluster names within a project must be unique.
    pub cluster_name: String,

    /// The cluster config.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<ClusterConfig>,

    /// The labels to associate with this cluster.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,

    /// Output only. Cluster status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ClusterStatus>,

    /// Output only. The previous cluster status.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub status_history: Vec<ClusterStatus>,

    /// Output only. A cluster UUID, generated by the service.
    pub cluster_uuid: String,
}

impl Cluster {
    /// Sets the value of [project_id][Cluster::project_id].
    pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [cluster_name][Cluster::cluster_name].
    pub fn set_cluster_name<T: Into<String>>(mut self, v: T) -> Self {
        self.cluster_name = v.into();
        self
    }

    /// Sets the value of [config][Cluster::config].
    pub fn set_config<T: Into<Option<ClusterConfig>>>(mut self, v: T) -> Self {
        self.config = v.into();
        self
    }

    /// Sets the value of [labels][Cluster::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [status][Cluster::status].
    pub fn set_status<T: Into<Option<ClusterStatus>>>(mut self, v: T) -> Self {
        self.status = v.into();
        self
    }

    /// Sets the value of [cluster_uuid][Cluster::cluster_uuid].
    pub fn set_cluster_uuid<T: Into<String>>(mut self, v: T) -> Self {
        self.cluster_uuid = v.into();
        self
    }
}

impl lro::Message for Cluster {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dataproc.v1.Cluster"
    }
}

/// The cluster config.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ClusterConfig {
    /// A Cloud Storage bucket used to stage job dependencies, config files,
    /// and job driver console output.
    pub config_bucket: String,

    /// The Compute Engine config settings for the master instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_config: Option<InstanceGroupConfig>,

    /// The Compute Engine config settings for the worker instances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_config: Option<InstanceGroupConfig>,

    /// The Compute Engine config settings for the secondary worker instances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_worker_config: Option<InstanceGroupConfig>,

    /// Autoscaling config for the policy associated with the cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autoscaling_config: Option<AutoscalingConfig>,
}

impl ClusterConfig {
    /// Sets the value of [config_bucket][ClusterConfig::config_bucket].
    pub fn set_config_bucket<T: Into<String>>(mut self, v: T) -> Self {
        self.config_bucket = v.into();
        self
    }

    /// Sets the value of [master_config][ClusterConfig::master_config].
    pub fn set_master_config<T: Into<Option<InstanceGroupConfig>>>(mut self, v: T) -> Self {
        self.master_config = v.into();
        self
    }

    /// Sets the value of [worker_config][ClusterConfig::worker_config].
    pub fn set_worker_config<T: Into<Option<InstanceGroupConfig>>>(mut self, v: T) -> Self {
        self.worker_config = v.into();
        self
    }

    /// Sets the value of [secondary_worker_config][ClusterConfig::secondary_worker_config].
    pub fn set_secondary_worker_config<T: Into<Option<InstanceGroupConfig>>>(
        mut self,
        v: T,
    ) -> Self {
        self.secondary_worker_config = v.into();
        self
    }

    /// Sets the value of [autoscaling_config][ClusterConfig::autoscaling_config].
    pub fn set_autoscaling_config<T: Into<Option<AutoscalingConfig>>>(mut self, v: T) -> Self {
        self.autoscaling_config = v.into();
        self
    }
}

/// The config settings for Compute Engine resources in an instance group.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InstanceGroupConfig {
    /// The number of VM instances in the instance group.
    pub num_instances: i32,

    /// Output only. The list of instance names.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub instance_names: Vec<String>,

    /// The Compute Engine image resource used for cluster instances.
    pub image_uri: String,

    /// The Compute Engine machine type used for cluster instances.
    pub machine_type_uri: String,
}

impl InstanceGroupConfig {
    /// Sets the value of [num_instances][InstanceGroupConfig::num_instances].
    pub fn set_num_instances<T: Into<i32>>(mut self, v: T) -> Self {
        self.num_instances = v.into();
        self
    }

    /// Sets the value of [image_uri][InstanceGroupConfig::image_uri].
    pub fn set_image_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.image_uri = v.into();
        self
    }

    /// Sets the value of [machine_type_uri][InstanceGroupConfig::machine_type_uri].
    pub fn set_machine_type_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.machine_type_uri = v.into();
        self
    }
}

/// Autoscaling Policy config associated with the cluster.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AutoscalingConfig {
    /// The autoscaling policy used by the cluster, see
    /// [autoscaling_policy_path][crate::paths::autoscaling_policy_path].
    pub policy_uri: String,
}

impl AutoscalingConfig {
    /// Sets the value of [policy_uri][AutoscalingConfig::policy_uri].
    pub fn set_policy_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.policy_uri = v.into();
        self
    }
}

/// The status of a cluster and its instances.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ClusterStatus {
    /// The cluster's state.
    pub state: cluster_status::State,

    /// Output only. Details of the cluster's state.
    pub detail: String,

    /// Time when this state was entered, in RFC 3339 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_start_time: Option<String>,
}

impl ClusterStatus {
    /// Sets the value of [state][ClusterStatus::state].
    pub fn set_state<T: Into<cluster_status::State>>(mut self, v: T) -> Self {
        self.state = v.into();
        self
    }

    /// Sets the value of [detail][ClusterStatus::detail].
    pub fn set_detail<T: Into<String>>(mut self, v: T) -> Self {
        self.detail = v.into();
        self
    }
}

/// Defines additional types related to [ClusterStatus].
pub mod cluster_status {
    use super::*;

    /// The cluster state.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    #[non_exhaustive]
    pub enum State {
        /// The cluster state is unknown.
        #[default]
        Unknown,
        /// The cluster is being created and set up. It is not ready for use.
        Creating,
        /// The cluster is currently running and healthy.
        Running,
        /// The cluster encountered an error. It is not ready for use.
        Error,
        /// The cluster is being deleted. It cannot be used.
        Deleting,
        /// The cluster is being updated. It continues to accept and process
        /// jobs.
        Updating,
    }
}

/// Metadata describing the operation.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ClusterOperationMetadata {
    /// Output only. Name of the cluster for the operation.
    pub cluster_name: String,

    /// Output only. Cluster UUID for the operation.
    pub cluster_uuid: String,

    /// Output only. Current operation status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ClusterOperationStatus>,

    /// Output only. The previous operation status.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub status_history: Vec<ClusterOperationStatus>,

    /// Output only. The operation type.
    pub operation_type: String,

    /// Output only. Short description of operation.
    pub description: String,

    /// Output only. Labels associated with the operation.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,

    /// Output only. Errors encountered during operation execution.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

impl ClusterOperationMetadata {
    /// Sets the value of [cluster_name][ClusterOperationMetadata::cluster_name].
    pub fn set_cluster_name<T: Into<String>>(mut self, v: T) -> Self {
        self.cluster_name = v.into();
        self
    }

    /// Sets the value of [status][ClusterOperationMetadata::status].
    pub fn set_status<T: Into<Option<ClusterOperationStatus>>>(mut self, v: T) -> Self {
        self.status = v.into();
        self
    }

    /// Sets the value of [operation_type][ClusterOperationMetadata::operation_type].
    pub fn set_operation_type<T: Into<String>>(mut self, v: T) -> Self {
        self.operation_type = v.into();
        self
    }

    /// Sets the value of [description][ClusterOperationMetadata::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = v.into();
        self
    }
}

impl lro::Message for ClusterOperationMetadata {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dataproc.v1.ClusterOperationMetadata"
    }
}

/// The status of the operation.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ClusterOperationStatus {
    /// Output only. A message containing the operation state.
    pub state: cluster_operation_status::State,

    /// Output only. A message containing the detailed operation state.
    pub inner_state: String,

    /// Output only. A message containing any operation metadata details.
    pub details: String,

    /// Output only. The time this state was entered, in RFC 3339 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_start_time: Option<String>,
}

impl ClusterOperationStatus {
    /// Sets the value of [state][ClusterOperationStatus::state].
    pub fn set_state<T: Into<cluster_operation_status::State>>(mut self, v: T) -> Self {
        self.state = v.into();
        self
    }

    /// Sets the value of [details][ClusterOperationStatus::details].
    pub fn set_details<T: Into<String>>(mut self, v: T) -> Self {
        self.details = v.into();
        self
    }
}

/// Defines additional types related to [ClusterOperationStatus].
pub mod cluster_operation_status {
    use super::*;

    /// The operation state.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    #[non_exhaustive]
    pub enum State {
        /// Unused.
        #[default]
        Unknown,
        /// The operation has been created.
        Pending,
        /// The operation is running.
        Running,
        /// The operation is done; either cancelled or completed.
        Done,
    }
}

/// A request to create a cluster.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateClusterRequest {
    /// Required. The ID of the Google Cloud Platform project that the cluster
    /// belongs to.
    pub project_id: String,

    /// Required. The Dataproc region in which to handle the request.
    pub region: String,

    /// Required. The cluster to create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<Cluster>,

    /// A unique id used to identify the request. The service ignores
    /// duplicate requests with the same id.
    pub request_id: String,
}

impl CreateClusterRequest {
    /// Sets the value of [project_id][CreateClusterRequest::project_id].
    pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [region][CreateClusterRequest::region].
    pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
        self.region = v.into();
        self
    }

    /// Sets the value of [cluster][CreateClusterRequest::cluster].
    pub fn set_cluster<T: Into<Option<Cluster>>>(mut self, v: T) -> Self {
        self.cluster = v.into();
        self
    }

    /// Sets the value of [request_id][CreateClusterRequest::request_id].
    pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
        self.request_id = v.into();
        self
    }
}

/// A request to update a cluster.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateClusterRequest {
    /// Required. The ID of the Google Cloud Platform project the cluster
    /// belongs to.
    pub project_id: String,

    /// Required. The Dataproc region in which to handle the request.
    pub region: String,

    /// Required. The cluster name.
    pub cluster_name: String,

    /// Required. The changes to the cluster.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<Cluster>,

    /// Required. Specifies the path, relative to `Cluster`, of the field to
    /// update, e.g. `config.worker_config.num_instances`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_mask: Option<FieldMask>,

    /// A unique id used to identify the request.
    pub request_id: String,
}

impl UpdateClusterRequest {
    /// Sets the value of [project_id][UpdateClusterRequest::project_id].
    pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [region][UpdateClusterRequest::region].
    pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
        self.region = v.into();
        self
    }

    /// Sets the value of [cluster_name][UpdateClusterRequest::cluster_name].
    pub fn set_cluster_name<T: Into<String>>(mut self, v: T) -> Self {
        self.cluster_name = v.into();
        self
    }

    /// Sets the value of [cluster][UpdateClusterRequest::cluster].
    pub fn set_cluster<T: Into<Option<Cluster>>>(mut self, v: T) -> Self {
        self.cluster = v.into();
        self
    }

    /// Sets the value of [update_mask][UpdateClusterRequest::update_mask].
    pub fn set_update_mask<T: Into<Option<FieldMask>>>(mut self, v: T) -> Self {
        self.update_mask = v.into();
        self
    }

    /// Sets the value of [request_id][UpdateClusterRequest::request_id].
    pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
        self.request_id = v.into();
        self
    }
}

/// A request to delete a cluster.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteClusterRequest {
    /// Required. The ID of the Google Cloud Platform project that the cluster
    /// belongs to.
    pub project_id: String,

    /// Required. The Dataproc region in which to handle the request.
    pub region: String,

    /// Required. The cluster name.
    pub cluster_name: String,

    /// Specifying the `cluster_uuid` means the RPC fails if a cluster with
    /// the given UUID does not exist.
    pub cluster_uuid: String,

    /// A unique id used to identify the request.
    pub request_id: String,
}

impl DeleteClusterRequest {
    /// Sets the value of [project_id][DeleteClusterRequest::project_id].
    pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [region][DeleteClusterRequest::region].
    pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
        self.region = v.into();
        self
    }

    /// Sets the value of [cluster_name][DeleteClusterRequest::cluster_name].
    pub fn set_cluster_name<T: Into<String>>(mut self, v: T) -> Self {
        self.cluster_name = v.into();
        self
    }

    /// Sets the value of [cluster_uuid][DeleteClusterRequest::cluster_uuid].
    pub fn set_cluster_uuid<T: Into<String>>(mut self, v: T) -> Self {
        self.cluster_uuid = v.into();
        self
    }

    /// Sets the value of [request_id][DeleteClusterRequest::request_id].
    pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
        self.request_id = v.into();
        self
    }
}

/// Request to get the resource representation for a cluster in a project.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetClusterRequest {
    pub project_id: String,
    pub region: String,
    pub cluster_name: String,
}

impl GetClusterRequest {
    /// Sets the value of [project_id][GetClusterRequest::project_id].
    pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [region][GetClusterRequest::region].
    pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
        self.region = v.into();
        self
    }

    /// Sets the value of [cluster_name][GetClusterRequest::cluster_name].
    pub fn set_cluster_name<T: Into<String>>(mut self, v: T) -> Self {
        self.cluster_name = v.into();
        self
    }
}

/// A request to list the clusters in a project.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListClustersRequest {
    /// Required. The ID of the Google Cloud Platform project that the cluster
    /// belongs to.
    pub project_id: String,

    /// Required. The Dataproc region in which to handle the request.
    pub region: String,

    /// A filter constraining the clusters to list, e.g.
    /// `status.state = ACTIVE AND labels.env = staging`.
    pub filter: String,

    /// The standard List page size.
    pub page_size: i32,

    /// The standard List page token.
    pub page_token: String,
}

impl ListClustersRequest {
    /// Sets the value of [project_id][ListClustersRequest::project_id].
    pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [region][ListClustersRequest::region].
    pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
        self.region = v.into();
        self
    }

    /// Sets the value of [filter][ListClustersRequest::filter].
    pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.filter = v.into();
        self
    }

    /// Sets the value of [page_size][ListClustersRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][ListClustersRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

/// The list of all clusters in a project.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListClustersResponse {
    /// Output only. The clusters in the project.
    pub clusters: Vec<Cluster>,

    /// Output only. This token is included in the response if there are more
    /// results to fetch.
    pub next_page_token: String,
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

    /// Sets the value of [next_page_token][ListClustersResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for ListClustersResponse {
    type PageItem = Cluster;

    fn items(self) -> Vec<Self::PageItem> {
        self.clusters
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}

/// A request to collect cluster diagnostic information.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DiagnoseClusterRequest {
    pub project_id: String,
    pub region: String,
    pub cluster_name: String,
}

impl DiagnoseClusterRequest {
    /// Sets the value of [project_id][DiagnoseClusterRequest::project_id].
    pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [region][DiagnoseClusterRequest::region].
    pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
        self.region = v.into();
        self
    }

    /// Sets the value of [cluster_name][DiagnoseClusterRequest::cluster_name].
    pub fn set_cluster_name<T: Into<String>>(mut self, v: T) -> Self {
        self.cluster_name = v.into();
        self
    }
}

/// The location of diagnostic output.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DiagnoseClusterResults {
    /// Output only. The Cloud Storage URI of the diagnostic output.
    pub output_uri: String,
}

impl DiagnoseClusterResults {
    /// Sets the value of [output_uri][DiagnoseClusterResults::output_uri].
    pub fn set_output_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.output_uri = v.into();
        self
    }
}

impl lro::Message for DiagnoseClusterResults {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dataproc.v1.DiagnoseClusterResults"
    }
}

/// Encapsulates the full scoping used to reference a job.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct JobReference {
    /// The ID of the Google Cloud Platform project that the job belongs to.
    pub project_id: String,

    /// The job ID, which must be unique within the project. If not
    /// specified by the caller, the service generates one.
    pub job_id: String,
}

impl JobReference {
    /// Sets the value of [project_id][JobReference::project_id].
    pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [job_id][JobReference::job_id].
    pub fn set_job_id<T: Into<String>>(mut self, v: T) -> Self {
        self.job_id = v.into();
        self
    }
}

/// Dataproc job config.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct JobPlacement {
    /// Required. The name of the cluster where the job will be submitted.
    pub cluster_name: String,

    /// Output only. A cluster UUID generated by the service when the job is
    /// submitted.
    pub cluster_uuid: String,
}

impl JobPlacement {
    /// Sets the value of [cluster_name][JobPlacement::cluster_name].
    pub fn set_cluster_name<T: Into<String>>(mut self, v: T) -> Self {
        self.cluster_name = v.into();
        self
    }
}

/// A job running on a cluster.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Job {
    /// The fully qualified reference to the job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<JobReference>,

    /// Required. Job information, including how, when, and where to run the
    /// job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<JobPlacement>,

    /// Required. The application or framework executed by the job.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub type_job: Option<job::TypeJob>,

    /// Output only. The job status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<JobStatus>,

    /// Output only. The previous job status.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub status_history: Vec<JobStatus>,

    /// Output only. A URI pointing to the location of the stdout of the job's
    /// driver program.
    pub driver_output_resource_uri: String,

    /// The labels to associate with this job.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
}

impl Job {
    /// Sets the value of [reference][Job::reference].
    pub fn set_reference<T: Into<Option<JobReference>>>(mut self, v: T) -> Self {
        self.reference = v.into();
        self
    }

    /// Sets the value of [placement][Job::placement].
    pub fn set_placement<T: Into<Option<JobPlacement>>>(mut self, v: T) -> Self {
        self.placement = v.into();
        self
    }

    /// Sets the value of [type_job][Job::type_job].
    pub fn set_type_job<T: Into<Option<job::TypeJob>>>(mut self, v: T) -> Self {
        self.type_job = v.into();
        self
    }

    /// Sets the value of [status][Job::status].
    pub fn set_status<T: Into<Option<JobStatus>>>(mut self, v: T) -> Self {
        self.status = v.into();
        self
    }

    /// Sets the value of [labels][Job::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// The job ID, empty if the job has no reference.
    pub fn job_id(&self) -> &str {
        self.reference
            .as_ref()
            .map(|r| r.job_id.as_str())
            .unwrap_or_default()
    }
}

/// Defines additional types related to [Job].
pub mod job {
    use super::*;

    /// The application or framework executed by a job.
    #[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    #[non_exhaustive]
    pub enum TypeJob {
        HadoopJob(HadoopJob),
        SparkJob(SparkJob),
        PysparkJob(PySparkJob),
        HiveJob(HiveJob),
    }

    impl From<HadoopJob> for TypeJob {
        fn from(v: HadoopJob) -> Self {
            Self::HadoopJob(v)
        }
    }

    impl From<SparkJob> for TypeJob {
        fn from(v: SparkJob) -> Self {
            Self::SparkJob(v)
        }
    }

    impl From<PySparkJob> for TypeJob {
        fn from(v: PySparkJob) -> Self {
            Self::PysparkJob(v)
        }
    }

    impl From<HiveJob> for TypeJob {
        fn from(v: HiveJob) -> Self {
            Self::HiveJob(v)
        }
    }
}

/// A Dataproc job for running Apache Hadoop MapReduce jobs.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct HadoopJob {
    /// The HCFS URI of the jar file containing the main class.
    pub main_jar_file_uri: String,
    /// The name of the driver's main class.
    pub main_class: String,
    /// The arguments to pass to the driver.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    /// Jar file URIs to add to the CLASSPATHs.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub jar_file_uris: Vec<String>,
}

impl HadoopJob {
    /// Sets the value of [main_jar_file_uri][HadoopJob::main_jar_file_uri].
    pub fn set_main_jar_file_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.main_jar_file_uri = v.into();
        self
    }

    /// Sets the value of [main_class][HadoopJob::main_class].
    pub fn set_main_class<T: Into<String>>(mut self, v: T) -> Self {
        self.main_class = v.into();
        self
    }

    /// Sets the value of [args][HadoopJob::args].
    pub fn set_args<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.args = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A Dataproc job for running Apache Spark applications on YARN.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SparkJob {
    pub main_jar_file_uri: String,
    pub main_class: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub jar_file_uris: Vec<String>,
}

impl SparkJob {
    /// Sets the value of [main_class][SparkJob::main_class].
    pub fn set_main_class<T: Into<String>>(mut self, v: T) -> Self {
        self.main_class = v.into();
        self
    }

    /// Sets the value of [jar_file_uris][SparkJob::jar_file_uris].
    pub fn set_jar_file_uris<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.jar_file_uris = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [args][SparkJob::args].
    pub fn set_args<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.args = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A Dataproc job for running Apache PySpark applications on YARN.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct PySparkJob {
    /// Required. The HCFS URI of the main Python file to use as the driver.
    pub main_python_file_uri: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
    /// HCFS file URIs of Python files to pass to the PySpark framework.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub python_file_uris: Vec<String>,
}

impl PySparkJob {
    /// Sets the value of [main_python_file_uri][PySparkJob::main_python_file_uri].
    pub fn set_main_python_file_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.main_python_file_uri = v.into();
        self
    }
}

/// A Dataproc job for running Apache Hive queries on YARN.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct HiveJob {
    /// The HCFS URI of the script that contains Hive queries.
    pub query_file_uri: String,
    /// Mapping of query variable names to values.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub script_variables: HashMap<String, String>,
    /// Whether to continue executing queries if a query fails.
    pub continue_on_failure: bool,
}

impl HiveJob {
    /// Sets the value of [query_file_uri][HiveJob::query_file_uri].
    pub fn set_query_file_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.query_file_uri = v.into();
        self
    }
}

/// Dataproc job status.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct JobStatus {
    /// Output only. A state message specifying the overall job state.
    pub state: job_status::State,

    /// Output only. Optional job state details, such as an error description.
    pub details: String,

    /// Output only. The time when this state was entered, in RFC 3339 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_start_time: Option<String>,
}

impl JobStatus {
    /// Sets the value of [state][JobStatus::state].
    pub fn set_state<T: Into<job_status::State>>(mut self, v: T) -> Self {
        self.state = v.into();
        self
    }

    /// Sets the value of [details][JobStatus::details].
    pub fn set_details<T: Into<String>>(mut self, v: T) -> Self {
        self.details = v.into();
        self
    }
}

/// Defines additional types related to [JobStatus].
pub mod job_status {
    use super::*;

    /// The job state.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    #[non_exhaustive]
    pub enum State {
        #[default]
        StateUnspecified,
        Pending,
        SetupDone,
        Running,
        CancelPending,
        CancelStarted,
        Cancelled,
        Done,
        Error,
        AttemptFailure,
    }

    impl State {
        /// Returns true if the job reached a final state.
        pub fn is_terminal(&self) -> bool {
            matches!(self, Self::Cancelled | Self::Done | Self::Error)
        }
    }
}

/// A request to submit a job.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SubmitJobRequest {
    pub project_id: String,
    pub region: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job: Option<Job>,
    pub request_id: String,
}

impl SubmitJobRequest {
    /// Sets the value of [project_id][SubmitJobRequest::project_id].
    pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [region][SubmitJobRequest::region].
    pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
        self.region = v.into();
        self
    }

    /// Sets the value of [job][SubmitJobRequest::job].
    pub fn set_job<T: Into<Option<Job>>>(mut self, v: T) -> Self {
        self.job = v.into();
        self
    }

    /// Sets the value of [request_id][SubmitJobRequest::request_id].
    pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
        self.request_id = v.into();
        self
    }
}

/// A request to get the resource representation for a job in a project.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetJobRequest {
    pub project_id: String,
    pub region: String,
    pub job_id: String,
}

impl GetJobRequest {
    /// Sets the value of [project_id][GetJobRequest::project_id].
    pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [region][GetJobRequest::region].
    pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
        self.region = v.into();
        self
    }

    /// Sets the value of [job_id][GetJobRequest::job_id].
    pub fn set_job_id<T: Into<String>>(mut self, v: T) -> Self {
        self.job_id = v.into();
        self
    }
}

/// A request to list jobs in a project.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListJobsRequest {
    pub project_id: String,
    pub region: String,
    pub page_size: i32,
    pub page_token: String,
    /// If set, the returned jobs list includes only jobs that were submitted
    /// to the named cluster.
    pub cluster_name: String,
    /// Specifies enumerated categories of jobs to list.
    pub job_state_matcher: list_jobs_request::JobStateMatcher,
    /// A filter constraining the jobs to list, e.g.
    /// `status.state = ACTIVE AND labels.env = staging`.
    pub filter: String,
}

impl ListJobsRequest {
    /// Sets the value of [project_id][ListJobsRequest::project_id].
    pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [region][ListJobsRequest::region].
    pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
        self.region = v.into();
        self
    }

    /// Sets the value of [page_size][ListJobsRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][ListJobsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }

    /// Sets the value of [cluster_name][ListJobsRequest::cluster_name].
    pub fn set_cluster_name<T: Into<String>>(mut self, v: T) -> Self {
        self.cluster_name = v.into();
        self
    }

    /// Sets the value of [job_state_matcher][ListJobsRequest::job_state_matcher].
    pub fn set_job_state_matcher<T: Into<list_jobs_request::JobStateMatcher>>(
        mut self,
        v: T,
    ) -> Self {
        self.job_state_matcher = v.into();
        self
    }

    /// Sets the value of [filter][ListJobsRequest::filter].
    pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.filter = v.into();
        self
    }
}

/// Defines additional types related to [ListJobsRequest].
pub mod list_jobs_request {
    use super::*;

    /// A matcher that specifies categories of job states.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    #[non_exhaustive]
    pub enum JobStateMatcher {
        /// Match all jobs, regardless of state.
        #[default]
        All,
        /// Only match jobs in non-terminal states.
        Active,
        /// Only match jobs in terminal states.
        NonActive,
    }
}

/// A list of jobs in a project.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListJobsResponse {
    pub jobs: Vec<Job>,
    pub next_page_token: String,
}

impl ListJobsResponse {
    /// Sets the value of [jobs][ListJobsResponse::jobs].
    pub fn set_jobs<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Job>,
    {
        self.jobs = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][ListJobsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for ListJobsResponse {
    type PageItem = Job;

    fn items(self) -> Vec<Self::PageItem> {
        self.jobs
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}

/// A request to update a job.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateJobRequest {
    pub project_id: String,
    pub region: String,
    pub job_id: String,
    /// Required. The changes to the job.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job: Option<Job>,
    /// Required. Specifies the path, relative to `Job`, of the field to
    /// update. Currently only `labels` can be updated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_mask: Option<FieldMask>,
}

impl UpdateJobRequest {
    /// Sets the value of [project_id][UpdateJobRequest::project_id].
    pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [region][UpdateJobRequest::region].
    pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
        self.region = v.into();
        self
    }

    /// Sets the value of [job_id][UpdateJobRequest::job_id].
    pub fn set_job_id<T: Into<String>>(mut self, v: T) -> Self {
        self.job_id = v.into();
        self
    }

    /// Sets the value of [job][UpdateJobRequest::job].
    pub fn set_job<T: Into<Option<Job>>>(mut self, v: T) -> Self {
        self.job = v.into();
        self
    }

    /// Sets the value of [update_mask][UpdateJobRequest::update_mask].
    pub fn set_update_mask<T: Into<Option<FieldMask>>>(mut self, v: T) -> Self {
        self.update_mask = v.into();
        self
    }
}

/// A request to cancel a job.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CancelJobRequest {
    pub project_id: String,
    pub region: String,
    pub job_id: String,
}

impl CancelJobRequest {
    /// Sets the value of [project_id][CancelJobRequest::project_id].
    pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [region][CancelJobRequest::region].
    pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
        self.region = v.into();
        self
    }

    /// Sets the value of [job_id][CancelJobRequest::job_id].
    pub fn set_job_id<T: Into<String>>(mut self, v: T) -> Self {
        self.job_id = v.into();
        self
    }
}

/// A request to delete a job.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteJobRequest {
    pub project_id: String,
    pub region: String,
    pub job_id: String,
}

impl DeleteJobRequest {
    /// Sets the value of [project_id][DeleteJobRequest::project_id].
    pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
        self.project_id = v.into();
        self
    }

    /// Sets the value of [region][DeleteJobRequest::region].
    pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
        self.region = v.into();
        self
    }

    /// Sets the value of [job_id][DeleteJobRequest::job_id].
    pub fn set_job_id<T: Into<String>>(mut self, v: T) -> Self {
        self.job_id = v.into();
        self
    }
}

/// A Dataproc workflow template resource.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct WorkflowTemplate {
    /// The template id.
    pub id: String,

    /// Output only. The resource name of the workflow template, see
    /// [workflow_template_path][crate::paths::workflow_template_path].
    pub name: String,

    /// Used to perform a consistent read-modify-write.
    pub version: i32,

    /// Output only. The time template was created, in RFC 3339 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,

    /// Output only. The time template was last updated, in RFC 3339 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<String>,

    /// The labels to associate with this template.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,

    /// Required. WorkflowTemplate scheduling information.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<WorkflowTemplatePlacement>,

    /// Required. The Directed Acyclic Graph of Jobs to submit.
    pub jobs: Vec<OrderedJob>,
}

impl WorkflowTemplate {
    /// Sets the value of [id][WorkflowTemplate::id].
    pub fn set_id<T: Into<String>>(mut self, v: T) -> Self {
        self.id = v.into();
        self
    }

    /// Sets the value of [name][WorkflowTemplate::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [version][WorkflowTemplate::version].
    pub fn set_version<T: Into<i32>>(mut self, v: T) -> Self {
        self.version = v.into();
        self
    }

    /// Sets the value of [labels][WorkflowTemplate::labels].
    pub fn set_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [placement][WorkflowTemplate::placement].
    pub fn set_placement<T: Into<Option<WorkflowTemplatePlacement>>>(mut self, v: T) -> Self {
        self.placement = v.into();
        self
    }

    /// Sets the value of [jobs][WorkflowTemplate::jobs].
    pub fn set_jobs<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<OrderedJob>,
    {
        self.jobs = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Specifies workflow execution target.
///
/// Either a managed cluster, created for the workflow, or an existing
/// cluster selected by its labels.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct WorkflowTemplatePlacement {
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub placement: Option<workflow_template_placement::Placement>,
}

impl WorkflowTemplatePlacement {
    /// Sets the value of [placement][WorkflowTemplatePlacement::placement]
    /// to a managed cluster.
    pub fn set_managed_cluster<T: Into<ManagedCluster>>(mut self, v: T) -> Self {
        self.placement = Some(workflow_template_placement::Placement::ManagedCluster(
            v.into(),
        ));
        self
    }

    /// Sets the value of [placement][WorkflowTemplatePlacement::placement]
    /// to a cluster selector.
    pub fn set_cluster_selector<T: Into<ClusterSelector>>(mut self, v: T) -> Self {
        self.placement = Some(workflow_template_placement::Placement::ClusterSelector(
            v.into(),
        ));
        self
    }
}

/// Defines additional types related to [WorkflowTemplatePlacement].
pub mod workflow_template_placement {
    use super::*;

    /// The workflow execution target.
    #[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    #[non_exhaustive]
    pub enum Placement {
        /// A cluster that is managed by the workflow.
        ManagedCluster(ManagedCluster),
        /// A selector that chooses target cluster for jobs based on metadata.
        ClusterSelector(ClusterSelector),
    }
}

/// Cluster that is managed by the workflow.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ManagedCluster {
    /// Required. The cluster name prefix.
    pub cluster_name: String,
    /// Required. The cluster configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<ClusterConfig>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,
}

impl ManagedCluster {
    /// Sets the value of [cluster_name][ManagedCluster::cluster_name].
    pub fn set_cluster_name<T: Into<String>>(mut self, v: T) -> Self {
        self.cluster_name = v.into();
        self
    }

    /// Sets the value of [config][ManagedCluster::config].
    pub fn set_config<T: Into<Option<ClusterConfig>>>(mut self, v: T) -> Self {
        self.config = v.into();
        self
    }
}

/// A selector that chooses target cluster for jobs based on metadata.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ClusterSelector {
    /// The zone where workflow process executes.
    pub zone: String,
    /// Required. The cluster labels. Cluster must have all labels to match.
    pub cluster_labels: HashMap<String, String>,
}

impl ClusterSelector {
    /// Sets the value of [cluster_labels][ClusterSelector::cluster_labels].
    pub fn set_cluster_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.cluster_labels = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// A job executed by the workflow.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct OrderedJob {
    /// Required. The step id. The id must be unique among all jobs within the
    /// template.
    pub step_id: String,

    /// Required. The job definition.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub job_type: Option<job::TypeJob>,

    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub labels: HashMap<String, String>,

    /// The list of prerequisite job step ids. If not specified, the job will
    /// start at the beginning of workflow.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub prerequisite_step_ids: Vec<String>,
}

impl OrderedJob {
    /// Sets the value of [step_id][OrderedJob::step_id].
    pub fn set_step_id<T: Into<String>>(mut self, v: T) -> Self {
        self.step_id = v.into();
        self
    }

    /// Sets the value of [job_type][OrderedJob::job_type].
    pub fn set_job_type<T: Into<Option<job::TypeJob>>>(mut self, v: T) -> Self {
        self.job_type = v.into();
        self
    }

    /// Sets the value of [prerequisite_step_ids][OrderedJob::prerequisite_step_ids].
    pub fn set_prerequisite_step_ids<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.prerequisite_step_ids = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// A Dataproc workflow template resource.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct WorkflowMetadata {
    /// Output only. The resource name of the workflow template.
    pub template: String,

    /// Output only. The version of template at the time of workflow
    /// instantiation.
    pub version: i32,

    /// Output only. The create cluster operation metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_cluster: Option<ClusterOperation>,

    /// Output only. The workflow graph.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph: Option<WorkflowGraph>,

    /// Output only. The delete cluster operation metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delete_cluster: Option<ClusterOperation>,

    /// Output only. The workflow state.
    pub state: workflow_metadata::State,

    /// Output only. The name of the target cluster.
    pub cluster_name: String,

    /// Map from parameter names to values that were used for those
    /// parameters.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub parameters: HashMap<String, String>,

    /// Output only. Workflow start time, in RFC 3339 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,

    /// Output only. Workflow end time, in RFC 3339 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,

    /// Output only. The UUID of target cluster.
    pub cluster_uuid: String,
}

impl WorkflowMetadata {
    /// Sets the value of [template][WorkflowMetadata::template].
    pub fn set_template<T: Into<String>>(mut self, v: T) -> Self {
        self.template = v.into();
        self
    }

    /// Sets the value of [state][WorkflowMetadata::state].
    pub fn set_state<T: Into<workflow_metadata::State>>(mut self, v: T) -> Self {
        self.state = v.into();
        self
    }

    /// Sets the value of [graph][WorkflowMetadata::graph].
    pub fn set_graph<T: Into<Option<WorkflowGraph>>>(mut self, v: T) -> Self {
        self.graph = v.into();
        self
    }

    /// Sets the value of [cluster_name][WorkflowMetadata::cluster_name].
    pub fn set_cluster_name<T: Into<String>>(mut self, v: T) -> Self {
        self.cluster_name = v.into();
        self
    }
}

impl lro::Message for WorkflowMetadata {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.dataproc.v1.WorkflowMetadata"
    }
}

/// Defines additional types related to [WorkflowMetadata].
pub mod workflow_metadata {
    use super::*;

    /// The operation state.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    #[non_exhaustive]
    pub enum State {
        #[default]
        Unknown,
        Pending,
        Running,
        Done,
    }
}

/// The cluster operation triggered by a workflow.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ClusterOperation {
    /// Output only. The id of the cluster operation.
    pub operation_id: String,
    /// Output only. Error, if operation failed.
    pub error: String,
    /// Output only. Indicates the operation is done.
    pub done: bool,
}

/// The workflow graph.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct WorkflowGraph {
    /// Output only. The workflow nodes.
    pub nodes: Vec<WorkflowNode>,
}

impl WorkflowGraph {
    /// Sets the value of [nodes][WorkflowGraph::nodes].
    pub fn set_nodes<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<WorkflowNode>,
    {
        self.nodes = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The workflow node.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct WorkflowNode {
    /// Output only. The name of the node.
    pub step_id: String,
    /// Output only. Node's prerequisite nodes.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub prerequisite_step_ids: Vec<String>,
    /// Output only. The job id; populated after the node enters RUNNING
    /// state.
    pub job_id: String,
    /// Output only. The node state.
    pub state: workflow_node::NodeState,
    /// Output only. The error detail.
    pub error: String,
}

impl WorkflowNode {
    /// Sets the value of [step_id][WorkflowNode::step_id].
    pub fn set_step_id<T: Into<String>>(mut self, v: T) -> Self {
        self.step_id = v.into();
        self
    }

    /// Sets the value of [state][WorkflowNode::state].
    pub fn set_state<T: Into<workflow_node::NodeState>>(mut self, v: T) -> Self {
        self.state = v.into();
        self
    }
}

/// Defines additional types related to [WorkflowNode].
pub mod workflow_node {
    use super::*;

    /// The workflow node state.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    #[non_exhaustive]
    pub enum NodeState {
        #[default]
        NodeStateUnspecified,
        Blocked,
        Runnable,
        Running,
        Completed,
        Failed,
    }
}

/// A request to create a workflow template.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateWorkflowTemplateRequest {
    /// Required. The resource name of the region, see
    /// [region_path][crate::paths::region_path].
    pub parent: String,

    /// Required. The Dataproc workflow template to create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<WorkflowTemplate>,
}

impl CreateWorkflowTemplateRequest {
    /// Sets the value of [parent][CreateWorkflowTemplateRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [template][CreateWorkflowTemplateRequest::template].
    pub fn set_template<T: Into<Option<WorkflowTemplate>>>(mut self, v: T) -> Self {
        self.template = v.into();
        self
    }
}

/// A request to fetch a workflow template.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetWorkflowTemplateRequest {
    /// Required. The resource name of the workflow template.
    pub name: String,

    /// The version of workflow template to retrieve. If unspecified, retrieves
    /// the current version.
    pub version: i32,
}

impl GetWorkflowTemplateRequest {
    /// Sets the value of [name][GetWorkflowTemplateRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [version][GetWorkflowTemplateRequest::version].
    pub fn set_version<T: Into<i32>>(mut self, v: T) -> Self {
        self.version = v.into();
        self
    }
}

/// A request to instantiate a workflow template.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InstantiateWorkflowTemplateRequest {
    /// Required. The resource name of the workflow template.
    pub name: String,

    /// The version of workflow template to instantiate. If specified, the
    /// workflow will be instantiated only if the current version of the
    /// workflow template has the supplied version.
    pub version: i32,

    /// A tag that prevents multiple concurrent workflow instances with the
    /// same tag from running.
    pub request_id: String,

    /// Map from parameter names to values that should be used for those
    /// parameters.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub parameters: HashMap<String, String>,
}

impl InstantiateWorkflowTemplateRequest {
    /// Sets the value of [name][InstantiateWorkflowTemplateRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [version][InstantiateWorkflowTemplateRequest::version].
    pub fn set_version<T: Into<i32>>(mut self, v: T) -> Self {
        self.version = v.into();
        self
    }

    /// Sets the value of [request_id][InstantiateWorkflowTemplateRequest::request_id].
    pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
        self.request_id = v.into();
        self
    }

    /// Sets the value of [parameters][InstantiateWorkflowTemplateRequest::parameters].
    pub fn set_parameters<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.parameters = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// A request to instantiate an inline workflow template.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InstantiateInlineWorkflowTemplateRequest {
    /// Required. The resource name of the region.
    pub parent: String,

    /// Required. The workflow template to instantiate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<WorkflowTemplate>,

    pub request_id: String,
}

impl InstantiateInlineWorkflowTemplateRequest {
    /// Sets the value of [parent][InstantiateInlineWorkflowTemplateRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [template][InstantiateInlineWorkflowTemplateRequest::template].
    pub fn set_template<T: Into<Option<WorkflowTemplate>>>(mut self, v: T) -> Self {
        self.template = v.into();
        self
    }

    /// Sets the value of [request_id][InstantiateInlineWorkflowTemplateRequest::request_id].
    pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
        self.request_id = v.into();
        self
    }
}

/// A request to update a workflow template.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateWorkflowTemplateRequest {
    /// Required. The updated workflow template. The `template.version` field
    /// must match the current version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<WorkflowTemplate>,
}

impl UpdateWorkflowTemplateRequest {
    /// Sets the value of [template][UpdateWorkflowTemplateRequest::template].
    pub fn set_template<T: Into<Option<WorkflowTemplate>>>(mut self, v: T) -> Self {
        self.template = v.into();
        self
    }
}

/// A request to list workflow templates in a project.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListWorkflowTemplatesRequest {
    /// Required. The resource name of the region.
    pub parent: String,
    pub page_size: i32,
    pub page_token: String,
}

impl ListWorkflowTemplatesRequest {
    /// Sets the value of [parent][ListWorkflowTemplatesRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [page_size][ListWorkflowTemplatesRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }

    /// Sets the value of [page_token][ListWorkflowTemplatesRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }
}

/// A response to a request to list workflow templates in a project.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListWorkflowTemplatesResponse {
    /// Output only. WorkflowTemplates list.
    pub templates: Vec<WorkflowTemplate>,
    /// Output only. This token is included in the response if there are more
    /// results to fetch.
    pub next_page_token: String,
}

impl ListWorkflowTemplatesResponse {
    /// Sets the value of [templates][ListWorkflowTemplatesResponse::templates].
    pub fn set_templates<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<WorkflowTemplate>,
    {
        self.templates = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][ListWorkflowTemplatesResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for ListWorkflowTemplatesResponse {
    type PageItem = WorkflowTemplate;

    fn items(self) -> Vec<Self::PageItem> {
        self.templates
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}

/// A request to delete a workflow template.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteWorkflowTemplateRequest {
    /// Required. The resource name of the workflow template.
    pub name: String,

    /// The version of workflow template to delete. If specified, will only
    /// delete the template if the current server version matches specified
    /// version.
    pub version: i32,
}

impl DeleteWorkflowTemplateRequest {
    /// Sets the value of [name][DeleteWorkflowTemplateRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [version][DeleteWorkflowTemplateRequest::version].
    pub fn set_version<T: Into<i32>>(mut self, v: T) -> Self {
        self.version = v.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn job_type_is_flattened() -> anyhow::Result<()> {
        let job = Job::default()
            .set_placement(JobPlacement::default().set_cluster_name("etl"))
            .set_type_job(job::TypeJob::from(
                SparkJob::default()
                    .set_main_class("org.apache.spark.examples.SparkPi")
                    .set_args(["1000"]),
            ));
        let got = serde_json::to_value(&job)?;
        let want = json!({
            "placement": {"clusterName": "etl", "clusterUuid": ""},
            "sparkJob": {"mainJarFileUri": "", "mainClass": "org.apache.spark.examples.SparkPi", "args": ["1000"]},
            "driverOutputResourceUri": "",
        });
        assert_eq!(got, want);
        let roundtrip = serde_json::from_value::<Job>(got)?;
        assert_eq!(roundtrip, job);
        Ok(())
    }

    #[test]
    fn job_id() {
        assert_eq!(Job::default().job_id(), "");
        let job =
            Job::default().set_reference(JobReference::default().set_job_id("job-123"));
        assert_eq!(job.job_id(), "job-123");
    }

    #[test]
    fn terminal_job_states() {
        use job_status::State;
        assert!(State::Done.is_terminal());
        assert!(State::Error.is_terminal());
        assert!(State::Cancelled.is_terminal());
        assert!(!State::Running.is_terminal());
        assert!(!State::CancelPending.is_terminal());
    }

    #[test]
    fn cluster_state_names() -> anyhow::Result<()> {
        let status = ClusterStatus::default().set_state(cluster_status::State::Running);
        let got = serde_json::to_value(&status)?;
        assert_eq!(got, json!({"state": "RUNNING", "detail": ""}));
        Ok(())
    }

    #[test]
    fn workflow_placement() -> anyhow::Result<()> {
        let placement = WorkflowTemplatePlacement::default().set_cluster_selector(
            ClusterSelector::default().set_cluster_labels([("env", "prod")]),
        );
        let got = serde_json::to_value(&placement)?;
        assert_eq!(
            got,
            json!({"clusterSelector": {"zone": "", "clusterLabels": {"env": "prod"}}})
        );
        Ok(())
    }

    #[test]
    fn pageable_responses() {
        use gax::paginator::PageableResponse;
        let response = ListClustersResponse::default()
            .set_clusters([Cluster::default().set_cluster_name("a")])
            .set_next_page_token("next");
        assert_eq!(response.next_page_token(), "next");
        let items = response.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].cluster_name, "a");
    }
}
