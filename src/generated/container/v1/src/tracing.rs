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

use crate::Result;
use crate::model;
use gax::options::RequestOptions;

/// Implements a [ClusterManager](super::stub::ClusterManager) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct ClusterManager<T>
where
    T: super::stub::ClusterManager + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> ClusterManager<T>
where
    T: super::stub::ClusterManager + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

#[async_trait::async_trait]
impl<T> super::stub::ClusterManager for ClusterManager<T>
where
    T: super::stub::ClusterManager + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn list_clusters(
        &self,
        req: model::ListClustersRequest,
        options: RequestOptions,
    ) -> Result<model::ListClustersResponse> {
        self.inner.list_clusters(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_cluster(
        &self,
        req: model::GetClusterRequest,
        options: RequestOptions,
    ) -> Result<model::Cluster> {
        self.inner.get_cluster(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_cluster(
        &self,
        req: model::CreateClusterRequest,
        options: RequestOptions,
    ) -> Result<model::Operation> {
        self.inner.create_cluster(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_cluster(
        &self,
        req: model::UpdateClusterRequest,
        options: RequestOptions,
    ) -> Result<model::Operation> {
        self.inner.update_cluster(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_cluster(
        &self,
        req: model::DeleteClusterRequest,
        options: RequestOptions,
    ) -> Result<model::Operation> {
        self.inner.delete_cluster(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_node_pools(
        &self,
        req: model::ListNodePoolsRequest,
        options: RequestOptions,
    ) -> Result<model::ListNodePoolsResponse> {
        self.inner.list_node_pools(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_node_pool(
        &self,
        req: model::GetNodePoolRequest,
        options: RequestOptions,
    ) -> Result<model::NodePool> {
        self.inner.get_node_pool(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_node_pool(
        &self,
        req: model::CreateNodePoolRequest,
        options: RequestOptions,
    ) -> Result<model::Operation> {
        self.inner.create_node_pool(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_node_pool(
        &self,
        req: model::DeleteNodePoolRequest,
        options: RequestOptions,
    ) -> Result<model::Operation> {
        self.inner.delete_node_pool(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn set_node_pool_size(
        &self,
        req: model::SetNodePoolSizeRequest,
        options: RequestOptions,
    ) -> Result<model::Operation> {
        self.inner.set_node_pool_size(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_operations(
        &self,
        req: model::ListOperationsRequest,
        options: RequestOptions,
    ) -> Result<model::ListOperationsResponse> {
        self.inner.list_operations(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_operation(
        &self,
        req: model::GetOperationRequest,
        options: RequestOptions,
    ) -> Result<model::Operation> {
        self.inner.get_operation(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn cancel_operation(
        &self,
        req: model::CancelOperationRequest,
        options: RequestOptions,
    ) -> Result<()> {
        self.inner.cancel_operation(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_server_config(
        &self,
        req: model::GetServerConfigRequest,
        options: RequestOptions,
    ) -> Result<model::ServerConfig> {
        self.inner.get_server_config(req, options).await
    }
}
