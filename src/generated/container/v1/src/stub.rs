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

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! client and service behavior. Such test can define mocks implementing the
//! trait(s) defined in this module, initialize the client with an instance of
//! this mock in their tests, and verify their application responds as expected.

use crate::Result;
use crate::model;
use gax::error::Error;
use gax::error::rpc::{Code, Status};
use gax::options::RequestOptions;
use std::sync::Arc;

fn unimplemented<T>(method: &str) -> Result<T> {
    Err(Error::service(
        Status::default()
            .set_code(Code::Unimplemented)
            .set_message(format!("{method} is not implemented by this stub")),
    ))
}

/// Defines the trait used to implement [crate::client::ClusterManager].
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
#[async_trait::async_trait]
pub trait ClusterManager: std::fmt::Debug + Send + Sync {
    /// Implements [crate::client::ClusterManager::list_clusters].
    async fn list_clusters(
        &self,
        _req: model::ListClustersRequest,
        _options: RequestOptions,
    ) -> Result<model::ListClustersResponse> {
        unimplemented("list_clusters")
    }

    /// Implements [crate::client::ClusterManager::get_cluster].
    async fn get_cluster(
        &self,
        _req: model::GetClusterRequest,
        _options: RequestOptions,
    ) -> Result<model::Cluster> {
        unimplemented("get_cluster")
    }

    /// Implements [crate::client::ClusterManager::create_cluster].
    async fn create_cluster(
        &self,
        _req: model::CreateClusterRequest,
        _options: RequestOptions,
    ) -> Result<model::Operation> {
        unimplemented("create_cluster")
    }

    /// Implements [crate::client::ClusterManager::update_cluster].
    async fn update_cluster(
        &self,
        _req: model::UpdateClusterRequest,
        _options: RequestOptions,
    ) -> Result<model::Operation> {
        unimplemented("update_cluster")
    }

    /// Implements [crate::client::ClusterManager::delete_cluster].
    async fn delete_cluster(
        &self,
        _req: model::DeleteClusterRequest,
        _options: RequestOptions,
    ) -> Result<model::Operation> {
        unimplemented("delete_cluster")
    }

    /// Implements [crate::client::ClusterManager::list_node_pools].
    async fn list_node_pools(
        &self,
        _req: model::ListNodePoolsRequest,
        _options: RequestOptions,
    ) -> Result<model::ListNodePoolsResponse> {
        unimplemented("list_node_pools")
    }

    /// Implements [crate::client::ClusterManager::get_node_pool].
    async fn get_node_pool(
        &self,
        _req: model::GetNodePoolRequest,
        _options: RequestOptions,
    ) -> Result<model::NodePool> {
        unimplemented("get_node_pool")
    }

    /// Implements [crate::client::ClusterManager::create_node_pool].
    async fn create_node_pool(
        &self,
        _req: model::CreateNodePoolRequest,
        _options: RequestOptions,
    ) -> Result<model::Operation> {
        unimplemented("create_node_pool")
    }

    /// Implements [crate::client::ClusterManager::delete_node_pool].
    async fn delete_node_pool(
        &self,
        _req: model::DeleteNodePoolRequest,
        _options: RequestOptions,
    ) -> Result<model::Operation> {
        unimplemented("delete_node_pool")
    }

    /// Implements [crate::client::ClusterManager::set_node_pool_size].
    async fn set_node_pool_size(
        &self,
        _req: model::SetNodePoolSizeRequest,
        _options: RequestOptions,
    ) -> Result<model::Operation> {
        unimplemented("set_node_pool_size")
    }

    /// Implements [crate::client::ClusterManager::list_operations].
    async fn list_operations(
        &self,
        _req: model::ListOperationsRequest,
        _options: RequestOptions,
    ) -> Result<model::ListOperationsResponse> {
        unimplemented("list_operations")
    }

    /// Implements [crate::client::ClusterManager::get_operation].
    async fn get_operation(
        &self,
        _req: model::GetOperationRequest,
        _options: RequestOptions,
    ) -> Result<model::Operation> {
        unimplemented("get_operation")
    }

    /// Implements [crate::client::ClusterManager::cancel_operation].
    async fn cancel_operation(
        &self,
        _req: model::CancelOperationRequest,
        _options: RequestOptions,
    ) -> Result<()> {
        unimplemented("cancel_operation")
    }

    /// Implements [crate::client::ClusterManager::get_server_config].
    async fn get_server_config(
        &self,
        _req: model::GetServerConfigRequest,
        _options: RequestOptions,
    ) -> Result<model::ServerConfig> {
        unimplemented("get_server_config")
    }
}

#[async_trait::async_trait]
impl<T> ClusterManager for Arc<T>
where
    T: ClusterManager + ?Sized,
{
    async fn list_clusters(
        &self,
        req: model::ListClustersRequest,
        options: RequestOptions,
    ) -> Result<model::ListClustersResponse> {
        (**self).list_clusters(req, options).await
    }

    async fn get_cluster(
        &self,
        req: model::GetClusterRequest,
        options: RequestOptions,
    ) -> Result<model::Cluster> {
        (**self).get_cluster(req, options).await
    }

    async fn create_cluster(
        &self,
        req: model::CreateClusterRequest,
        options: RequestOptions,
    ) -> Result<model::Operation> {
        (**self).create_cluster(req, options).await
    }

    async fn update_cluster(
        &self,
        req: model::UpdateClusterRequest,
        options: RequestOptions,
    ) -> Result<model::Operation> {
        (**self).update_cluster(req, options).await
    }

    async fn delete_cluster(
        &self,
        req: model::DeleteClusterRequest,
        options: RequestOptions,
    ) -> Result<model::Operation> {
        (**self).delete_cluster(req, options).await
    }

    async fn list_node_pools(
        &self,
        req: model::ListNodePoolsRequest,
        options: RequestOptions,
    ) -> Result<model::ListNodePoolsResponse> {
        (**self).list_node_pools(req, options).await
    }

    async fn get_node_pool(
        &self,
        req: model::GetNodePoolRequest,
        options: RequestOptions,
    ) -> Result<model::NodePool> {
        (**self).get_node_pool(req, options).await
    }

    async fn create_node_pool(
        &self,
        req: model::CreateNodePoolRequest,
        options: RequestOptions,
    ) -> Result<model::Operation> {
        (**self).create_node_pool(req, options).await
    }

    async fn delete_node_pool(
        &self,
        req: model::DeleteNodePoolRequest,
        options: RequestOptions,
    ) -> Result<model::Operation> {
        (**self).delete_node_pool(req, options).await
    }

    async fn set_node_pool_size(
        &self,
        req: model::SetNodePoolSizeRequest,
        options: RequestOptions,
    ) -> Result<model::Operation> {
        (**self).set_node_pool_size(req, options).await
    }

    async fn list_operations(
        &self,
        req: model::ListOperationsRequest,
        options: RequestOptions,
    ) -> Result<model::ListOperationsResponse> {
        (**self).list_operations(req, options).await
    }

    async fn get_operation(
        &self,
        req: model::GetOperationRequest,
        options: RequestOptions,
    ) -> Result<model::Operation> {
        (**self).get_operation(req, options).await
    }

    async fn cancel_operation(
        &self,
        req: model::CancelOperationRequest,
        options: RequestOptions,
    ) -> Result<()> {
        (**self).cancel_operation(req, options).await
    }

    async fn get_server_config(
        &self,
        req: model::GetServerConfigRequest,
        options: RequestOptions,
    ) -> Result<model::ServerConfig> {
        (**self).get_server_config(req, options).await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    mockall::mock! {
        #[derive(Debug)]
        pub(crate) ClusterManager {}
        #[async_trait::async_trait]
        impl super::ClusterManager for ClusterManager {
            async fn list_clusters(&self, req: model::ListClustersRequest, options: RequestOptions) -> Result<model::ListClustersResponse>;
            async fn get_cluster(&self, req: model::GetClusterRequest, options: RequestOptions) -> Result<model::Cluster>;
            async fn create_cluster(&self, req: model::CreateClusterRequest, options: RequestOptions) -> Result<model::Operation>;
            async fn update_cluster(&self, req: model::UpdateClusterRequest, options: RequestOptions) -> Result<model::Operation>;
            async fn list_node_pools(&self, req: model::ListNodePoolsRequest, options: RequestOptions) -> Result<model::ListNodePoolsResponse>;
            async fn set_node_pool_size(&self, req: model::SetNodePoolSizeRequest, options: RequestOptions) -> Result<model::Operation>;
            async fn get_operation(&self, req: model::GetOperationRequest, options: RequestOptions) -> Result<model::Operation>;
            async fn cancel_operation(&self, req: model::CancelOperationRequest, options: RequestOptions) -> Result<()>;
        }
    }

    #[derive(Debug)]
    struct Empty;
    impl ClusterManager for Empty {}

    #[tokio::test]
    async fn defaults_are_unimplemented() {
        let stub: Arc<dyn ClusterManager> = Arc::new(Empty);
        let got = stub
            .get_server_config(
                model::GetServerConfigRequest::default(),
                RequestOptions::default(),
            )
            .await;
        let code = got.as_ref().err().and_then(|e| e.status()).map(|s| s.code);
        assert_eq!(code, Some(Code::Unimplemented), "{got:?}");
    }
}
