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

pub mod cluster_manager {
    use crate::Result;
    use crate::model;
    use gax::error::Error;
    use gax::options::RequestOptions;
    use gax::options::internal::with_attempt_timeout;
    use std::sync::Arc;

    /// A builder for [ClusterManager][crate::client::ClusterManager].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use google_cloud_container_v1::*;
    /// # use builder::cluster_manager::ClientBuilder;
    /// # use client::ClusterManager;
    /// let builder: ClientBuilder = ClusterManager::builder();
    /// let client = builder
    ///     .with_endpoint("https://container.googleapis.com")
    ///     .with_credentials(auth::credentials::Credentials::anonymous())
    ///     .build()
    ///     .await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder = gax::client_builder::ClientBuilder<
        client::Factory,
        auth::credentials::Credentials,
        Arc<dyn crate::stub::ClusterManager>,
    >;

    pub(crate) mod client {
        use super::super::super::client::ClusterManager;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = ClusterManager;
            type Credentials = auth::credentials::Credentials;
            type Transport = std::sync::Arc<dyn crate::stub::ClusterManager>;
            async fn build(
                self,
                config: gax::client_builder::internal::ClientConfig<Self::Credentials>,
                transport: Option<Self::Transport>,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config, transport).await
            }
        }
    }

    /// Common implementation for [crate::client::ClusterManager] request builders.
    #[derive(Clone, Debug)]
    pub struct RequestBuilder<R: std::default::Default> {
        stub: Option<Arc<dyn crate::stub::ClusterManager>>,
        request: R,
        options: RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: Option<Arc<dyn crate::stub::ClusterManager>>,
            options: RequestOptions,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options,
            }
        }

        fn connected(&self) -> Result<Arc<dyn crate::stub::ClusterManager>> {
            self.stub.clone().ok_or_else(Error::no_connection)
        }
    }

    /// Defines a request builder: its constructor, `with_request()`, `send()`
    /// and the [RequestBuilder][gax::options::internal::RequestBuilder] impl.
    macro_rules! request_builder {
        ($(#[$attr:meta])* $name:ident, $request:ty, $method:ident, $response:ty) => {
            $(#[$attr])*
            #[derive(Clone, Debug)]
            pub struct $name(RequestBuilder<$request>);

            impl $name {
                pub(crate) fn new(
                    stub: Option<Arc<dyn crate::stub::ClusterManager>>,
                    options: RequestOptions,
                ) -> Self {
                    Self(RequestBuilder::new(stub, options))
                }

                /// Sets the full request, replacing any prior values.
                pub fn with_request<V: Into<$request>>(mut self, v: V) -> Self {
                    self.0.request = v.into();
                    self
                }

                /// Sends the request.
                pub async fn send(self) -> Result<$response> {
                    let stub = self.0.connected()?;
                    let options = self.0.options;
                    with_attempt_timeout(&options, stub.$method(self.0.request, options.clone()))
                        .await
                }
            }

            #[doc(hidden)]
            impl gax::options::internal::RequestBuilder for $name {
                fn request_options(&mut self) -> &mut RequestOptions {
                    &mut self.0.options
                }
            }
        };
    }

    request_builder!(
        /// The request builder for [ClusterManager::list_clusters][crate::client::ClusterManager::list_clusters] calls.
        ListClusters,
        model::ListClustersRequest,
        list_clusters,
        model::ListClustersResponse
    );

    impl ListClusters {
        /// Sets the value of [parent][model::ListClustersRequest::parent].
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }
    }

    request_builder!(
        /// The request builder for [ClusterManager::get_cluster][crate::client::ClusterManager::get_cluster] calls.
        GetCluster,
        model::GetClusterRequest,
        get_cluster,
        model::Cluster
    );

    impl GetCluster {
        /// Sets the value of [name][model::GetClusterRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    request_builder!(
        /// The request builder for [ClusterManager::create_cluster][crate::client::ClusterManager::create_cluster] calls.
        CreateCluster,
        model::CreateClusterRequest,
        create_cluster,
        model::Operation
    );

    impl CreateCluster {
        /// Sets the value of [parent][model::CreateClusterRequest::parent].
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [cluster][model::CreateClusterRequest::cluster].
        pub fn set_cluster<T: Into<model::Cluster>>(mut self, v: T) -> Self {
            self.0.request.cluster = Some(v.into());
            self
        }
    }

    request_builder!(
        /// The request builder for [ClusterManager::update_cluster][crate::client::ClusterManager::update_cluster] calls.
        UpdateCluster,
        model::UpdateClusterRequest,
        update_cluster,
        model::Operation
    );

    impl UpdateCluster {
        /// Sets the value of [name][model::UpdateClusterRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }

        /// Sets the value of [update][model::UpdateClusterRequest::update].
        pub fn set_update<T: Into<model::ClusterUpdate>>(mut self, v: T) -> Self {
            self.0.request.update = Some(v.into());
            self
        }
    }

    request_builder!(
        /// The request builder for [ClusterManager::delete_cluster][crate::client::ClusterManager::delete_cluster] calls.
        DeleteCluster,
        model::DeleteClusterRequest,
        delete_cluster,
        model::Operation
    );

    impl DeleteCluster {
        /// Sets the value of [name][model::DeleteClusterRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    request_builder!(
        /// The request builder for [ClusterManager::list_node_pools][crate::client::ClusterManager::list_node_pools] calls.
        ListNodePools,
        model::ListNodePoolsRequest,
        list_node_pools,
        model::ListNodePoolsResponse
    );

    impl ListNodePools {
        /// Sets the value of [parent][model::ListNodePoolsRequest::parent].
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }
    }

    request_builder!(
        /// The request builder for [ClusterManager::get_node_pool][crate::client::ClusterManager::get_node_pool] calls.
        GetNodePool,
        model::GetNodePoolRequest,
        get_node_pool,
        model::NodePool
    );

    impl GetNodePool {
        /// Sets the value of [name][model::GetNodePoolRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    request_builder!(
        /// The request builder for [ClusterManager::create_node_pool][crate::client::ClusterManager::create_node_pool] calls.
        CreateNodePool,
        model::CreateNodePoolRequest,
        create_node_pool,
        model::Operation
    );

    impl CreateNodePool {
        /// Sets the value of [parent][model::CreateNodePoolRequest::parent].
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [node_pool][model::CreateNodePoolRequest::node_pool].
        pub fn set_node_pool<T: Into<model::NodePool>>(mut self, v: T) -> Self {
            self.0.request.node_pool = Some(v.into());
            self
        }
    }

    request_builder!(
        /// The request builder for [ClusterManager::delete_node_pool][crate::client::ClusterManager::delete_node_pool] calls.
        DeleteNodePool,
        model::DeleteNodePoolRequest,
        delete_node_pool,
        model::Operation
    );

    impl DeleteNodePool {
        /// Sets the value of [name][model::DeleteNodePoolRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    request_builder!(
        /// The request builder for [ClusterManager::set_node_pool_size][crate::client::ClusterManager::set_node_pool_size] calls.
        SetNodePoolSize,
        model::SetNodePoolSizeRequest,
        set_node_pool_size,
        model::Operation
    );

    impl SetNodePoolSize {
        /// Sets the value of [name][model::SetNodePoolSizeRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }

        /// Sets the value of [node_count][model::SetNodePoolSizeRequest::node_count].
        pub fn set_node_count<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.node_count = v.into();
            self
        }
    }

    request_builder!(
        /// The request builder for [ClusterManager::list_operations][crate::client::ClusterManager::list_operations] calls.
        ListOperations,
        model::ListOperationsRequest,
        list_operations,
        model::ListOperationsResponse
    );

    impl ListOperations {
        /// Sets the value of [parent][model::ListOperationsRequest::parent].
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }
    }

    request_builder!(
        /// The request builder for [ClusterManager::get_operation][crate::client::ClusterManager::get_operation] calls.
        GetOperation,
        model::GetOperationRequest,
        get_operation,
        model::Operation
    );

    impl GetOperation {
        /// Sets the value of [name][model::GetOperationRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    request_builder!(
        /// The request builder for [ClusterManager::cancel_operation][crate::client::ClusterManager::cancel_operation] calls.
        CancelOperation,
        model::CancelOperationRequest,
        cancel_operation,
        ()
    );

    impl CancelOperation {
        /// Sets the value of [name][model::CancelOperationRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    request_builder!(
        /// The request builder for [ClusterManager::get_server_config][crate::client::ClusterManager::get_server_config] calls.
        GetServerConfig,
        model::GetServerConfigRequest,
        get_server_config,
        model::ServerConfig
    );

    impl GetServerConfig {
        /// Sets the value of [name][model::GetServerConfigRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }
}
