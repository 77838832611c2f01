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
use gax::error::Error;
use gax::error::rpc::{Code, Status};
use gax::linear_backoff::LinearBackoff;
use gax::loop_state::LoopState;
use gax::options::RequestOptions;
use gax::polling_backoff_policy::PollingBackoffPolicy;
use gax::polling_error_policy::{LimitedElapsedTime, PollingErrorPolicy};
use std::sync::Arc;
use std::time::Instant;

const SERVICE: &str = "CONTAINER";

/// Implements a client for the Kubernetes Engine API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use google_cloud_container_v1::{client::ClusterManager, paths};
/// let client = ClusterManager::builder().build().await?;
/// let parent = paths::location_path("my-project", "-")?;
/// let response = client.list_clusters(parent).send().await?;
/// for cluster in response.clusters {
///     println!("{} {:?}", cluster.name, cluster.status);
/// }
/// # anyhow::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Google Kubernetes Engine Cluster Manager v1
///
/// # Operations
///
/// The mutating methods return a [model::Operation]. These are resources of
/// the Kubernetes Engine service, and not the long-running operations used by
/// other services. Use [wait_operation()][ClusterManager::wait_operation] to
/// poll one until it completes.
///
/// # Pooling and Cloning
///
/// `ClusterManager` holds a connection pool internally, it is advised to
/// create one and the reuse it.  You do not need to wrap `ClusterManager` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally.
#[derive(Clone, Debug)]
pub struct ClusterManager {
    inner: Option<Arc<dyn super::stub::ClusterManager>>,
    options: RequestOptions,
    project: Option<String>,
}

impl ClusterManager {
    /// Returns a builder for [ClusterManager].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use google_cloud_container_v1::client::ClusterManager;
    /// let client = ClusterManager::builder()
    ///     .with_credentials(auth::credentials::Credentials::anonymous())
    ///     .build()
    ///     .await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::cluster_manager::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::cluster_manager::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::ClusterManager + 'static,
    {
        Self {
            inner: Some(Arc::new(stub)),
            options: RequestOptions::default(),
            project: None,
        }
    }

    pub(crate) async fn new(
        config: gax::client_builder::internal::ClientConfig<auth::credentials::Credentials>,
        transport: Option<Arc<dyn super::stub::ClusterManager>>,
    ) -> gax::client_builder::Result<Self> {
        let env = auth::credentials::SystemEnvironment;
        let cred = match config.cred.clone() {
            Some(c) => c,
            None => auth::credentials::Discovery::for_service(SERVICE)
                .resolve(&env)
                .map_err(gax::client_builder::Error::cred)?,
        };
        let project = config
            .project
            .clone()
            .or_else(|| auth::project::default_project(SERVICE, &env, Some(&cred)));
        let inner = transport.map(|t| {
            if config.tracing {
                Arc::new(super::tracing::ClusterManager::new(t))
                    as Arc<dyn super::stub::ClusterManager>
            } else {
                t
            }
        });
        Ok(Self {
            inner,
            options: config.default_options(),
            project,
        })
    }

    /// The project used by this client, if one was configured or discovered.
    pub fn project(&self) -> Option<&str> {
        self.project.as_deref()
    }

    /// Returns true if the client has a transport.
    pub fn is_connected(&self) -> bool {
        self.inner.is_some()
    }

    /// Lists all clusters owned by a project in either the specified zone or
    /// all zones.
    ///
    /// `parent` is a [location_path][crate::paths::location_path], use `-`
    /// as the location to match all zones and regions.
    pub fn list_clusters(
        &self,
        parent: impl Into<String>,
    ) -> super::builder::cluster_manager::ListClusters {
        super::builder::cluster_manager::ListClusters::new(self.inner.clone(), self.options.clone())
            .set_parent(parent)
    }

    /// Gets the details of a specific cluster.
    pub fn get_cluster(&self, name: impl Into<String>) -> super::builder::cluster_manager::GetCluster {
        super::builder::cluster_manager::GetCluster::new(self.inner.clone(), self.options.clone())
            .set_name(name)
    }

    /// Creates a cluster, consisting of the specified number and type of
    /// Google Compute Engine instances.
    ///
    /// By default, the cluster is created in the project's default network.
    pub fn create_cluster(
        &self,
        parent: impl Into<String>,
        cluster: impl Into<model::Cluster>,
    ) -> super::builder::cluster_manager::CreateCluster {
        super::builder::cluster_manager::CreateCluster::new(
            self.inner.clone(),
            self.options.clone(),
        )
        .set_parent(parent)
        .set_cluster(cluster)
    }

    /// Updates the settings of a specific cluster.
    pub fn update_cluster(
        &self,
        name: impl Into<String>,
        update: impl Into<model::ClusterUpdate>,
    ) -> super::builder::cluster_manager::UpdateCluster {
        super::builder::cluster_manager::UpdateCluster::new(
            self.inner.clone(),
            self.options.clone(),
        )
        .set_name(name)
        .set_update(update)
    }

    /// Deletes the cluster, including the Kubernetes endpoint and all worker
    /// nodes.
    pub fn delete_cluster(
        &self,
        name: impl Into<String>,
    ) -> super::builder::cluster_manager::DeleteCluster {
        super::builder::cluster_manager::DeleteCluster::new(
            self.inner.clone(),
            self.options.clone(),
        )
        .set_name(name)
    }

    /// Lists the node pools for a cluster.
    pub fn list_node_pools(
        &self,
        parent: impl Into<String>,
    ) -> super::builder::cluster_manager::ListNodePools {
        super::builder::cluster_manager::ListNodePools::new(
            self.inner.clone(),
            self.options.clone(),
        )
        .set_parent(parent)
    }

    /// Retrieves the requested node pool.
    pub fn get_node_pool(
        &self,
        name: impl Into<String>,
    ) -> super::builder::cluster_manager::GetNodePool {
        super::builder::cluster_manager::GetNodePool::new(self.inner.clone(), self.options.clone())
            .set_name(name)
    }

    /// Creates a node pool for a cluster.
    pub fn create_node_pool(
        &self,
        parent: impl Into<String>,
        node_pool: impl Into<model::NodePool>,
    ) -> super::builder::cluster_manager::CreateNodePool {
        super::builder::cluster_manager::CreateNodePool::new(
            self.inner.clone(),
            self.options.clone(),
        )
        .set_parent(parent)
        .set_node_pool(node_pool)
    }

    /// Deletes a node pool from a cluster.
    pub fn delete_node_pool(
        &self,
        name: impl Into<String>,
    ) -> super::builder::cluster_manager::DeleteNodePool {
        super::builder::cluster_manager::DeleteNodePool::new(
            self.inner.clone(),
            self.options.clone(),
        )
        .set_name(name)
    }

    /// Sets the size for a specific node pool.
    pub fn set_node_pool_size(
        &self,
        name: impl Into<String>,
        node_count: i32,
    ) -> super::builder::cluster_manager::SetNodePoolSize {
        super::builder::cluster_manager::SetNodePoolSize::new(
            self.inner.clone(),
            self.options.clone(),
        )
        .set_name(name)
        .set_node_count(node_count)
    }

    /// Lists all operations in a project in a specific zone or all zones.
    pub fn list_operations(
        &self,
        parent: impl Into<String>,
    ) -> super::builder::cluster_manager::ListOperations {
        super::builder::cluster_manager::ListOperations::new(
            self.inner.clone(),
            self.options.clone(),
        )
        .set_parent(parent)
    }

    /// Gets the specified operation.
    pub fn get_operation(
        &self,
        name: impl Into<String>,
    ) -> super::builder::cluster_manager::GetOperation {
        super::builder::cluster_manager::GetOperation::new(self.inner.clone(), self.options.clone())
            .set_name(name)
    }

    /// Cancels the specified operation.
    pub fn cancel_operation(
        &self,
        name: impl Into<String>,
    ) -> super::builder::cluster_manager::CancelOperation {
        super::builder::cluster_manager::CancelOperation::new(
            self.inner.clone(),
            self.options.clone(),
        )
        .set_name(name)
    }

    /// Returns configuration info about the Google Kubernetes Engine service.
    pub fn get_server_config(
        &self,
        name: impl Into<String>,
    ) -> super::builder::cluster_manager::GetServerConfig {
        super::builder::cluster_manager::GetServerConfig::new(
            self.inner.clone(),
            self.options.clone(),
        )
        .set_name(name)
    }

    /// Polls `operation` until its status is `DONE`.
    ///
    /// `operation.name` must be the full resource name of the operation, see
    /// [operation_path][crate::paths::operation_path]. The polling policies
    /// configured in the client builder control the wait between polls and
    /// how long the loop runs. An operation that completes with a
    /// `status_message` is returned as an error.
    pub async fn wait_operation(&self, operation: model::Operation) -> Result<model::Operation> {
        let error_policy = self
            .options
            .polling_error_policy()
            .clone()
            .unwrap_or_else(|| Arc::new(LimitedElapsedTime::default()));
        let backoff_policy = self
            .options
            .polling_backoff_policy()
            .clone()
            .unwrap_or_else(|| Arc::new(LinearBackoff::default()));
        let loop_start = Instant::now();
        let mut attempt_count = 1;
        let mut current = operation;
        while !current.is_done() {
            if let Some(e) = error_policy.on_in_progress(loop_start, attempt_count, &current.name) {
                return Err(e);
            }
            tokio::time::sleep(backoff_policy.wait_period(loop_start, attempt_count)).await;
            attempt_count += 1;
            match self.get_operation(current.name.clone()).send().await {
                Ok(op) => current = op,
                Err(e) => match error_policy.on_error(loop_start, attempt_count, e) {
                    LoopState::Continue(e) => {
                        tracing::debug!("error polling {}: {e}", current.name);
                    }
                    LoopState::Permanent(e) | LoopState::Exhausted(e) => return Err(e),
                },
            }
        }
        if current.is_error() {
            return Err(Error::service(
                Status::default()
                    .set_code(Code::Unknown)
                    .set_message(current.status_message.clone()),
            ));
        }
        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stub::tests::MockClusterManager;
    use pretty_assertions::assert_eq;

    type TestResult = anyhow::Result<()>;

    const OPERATION: &str = "projects/test-project/locations/us-central1/operations/op-1";

    fn pending() -> model::Operation {
        model::Operation::default()
            .set_name(OPERATION)
            .set_operation_type(model::operation::Type::CreateCluster)
            .set_status(model::operation::Status::Pending)
    }

    #[tokio::test]
    async fn create_cluster() -> TestResult {
        let mut mock = MockClusterManager::new();
        mock.expect_create_cluster()
            .withf(|r, _| {
                r.parent == "projects/test-project/locations/us-central1"
                    && r.cluster.as_ref().map(|c| c.name.as_str()) == Some("prod")
            })
            .return_once(|_, _| Ok(pending()));

        let client = ClusterManager::from_stub(mock);
        let parent = crate::paths::location_path("test-project", "us-central1")?;
        let op = client
            .create_cluster(parent, model::Cluster::default().set_name("prod"))
            .send()
            .await?;
        assert_eq!(op.name, OPERATION);
        assert!(!op.is_done());
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn wait_operation_polls() -> TestResult {
        let mut mock = MockClusterManager::new();
        let mut seq = mockall::Sequence::new();
        mock.expect_get_operation()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|r, _| r.name == OPERATION)
            .return_once(|_, _| Ok(pending().set_status(model::operation::Status::Running)));
        mock.expect_get_operation()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(|_, _| Ok(pending().set_status(model::operation::Status::Done)));

        let client = ClusterManager::from_stub(mock);
        let done = client.wait_operation(pending()).await?;
        assert!(done.is_done());
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn wait_operation_attempt_limit() -> TestResult {
        use gax::polling_error_policy::{Aip194Strict, PollingErrorPolicyExt};
        let mut mock = MockClusterManager::new();
        mock.expect_get_operation()
            .times(2)
            .returning(|_, _| Ok(pending().set_status(model::operation::Status::Running)));

        let client = ClusterManager::builder()
            .with_credentials(auth::credentials::Credentials::anonymous())
            .with_project("test-project")
            .with_polling_error_policy(Aip194Strict.with_attempt_limit(3))
            .with_transport(Arc::new(mock) as Arc<dyn crate::stub::ClusterManager>)
            .build()
            .await?;
        let start = tokio::time::Instant::now();
        let err = client.wait_operation(pending()).await.unwrap_err();
        assert!(err.is_exhausted(), "{err:?}");
        // 5s + 7s
        assert_eq!(start.elapsed(), std::time::Duration::from_secs(12));
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn wait_operation_error_message() -> TestResult {
        let mut mock = MockClusterManager::new();
        mock.expect_get_operation().return_once(|_, _| {
            Ok(pending()
                .set_status(model::operation::Status::Done)
                .set_status_message("insufficient quota"))
        });

        let client = ClusterManager::from_stub(mock);
        let err = client.wait_operation(pending()).await.unwrap_err();
        let message = err.status().map(|s| s.message.clone()).unwrap_or_default();
        assert_eq!(message, "insufficient quota");
        Ok(())
    }

    #[tokio::test]
    async fn wait_done_operation_skips_polling() -> TestResult {
        let mock = MockClusterManager::new();
        let client = ClusterManager::from_stub(mock);
        let op = pending().set_status(model::operation::Status::Done);
        let got = client.wait_operation(op.clone()).await?;
        assert_eq!(got, op);
        Ok(())
    }

    #[tokio::test]
    async fn node_pools() -> TestResult {
        let mut mock = MockClusterManager::new();
        mock.expect_list_node_pools()
            .withf(|r, _| r.parent.ends_with("/clusters/prod"))
            .return_once(|_, _| {
                Ok(model::ListNodePoolsResponse::default().set_node_pools([
                    model::NodePool::default().set_name("default-pool"),
                    model::NodePool::default().set_name("gpu-pool"),
                ]))
            });
        mock.expect_set_node_pool_size()
            .withf(|r, _| r.name.ends_with("/nodePools/gpu-pool") && r.node_count == 5)
            .return_once(|_, _| {
                Ok(pending().set_operation_type(model::operation::Type::SetNodePoolSize))
            });

        let client = ClusterManager::from_stub(mock);
        let cluster = crate::paths::cluster_path("test-project", "us-central1", "prod")?;
        let pools = client.list_node_pools(cluster).send().await?;
        let names: Vec<_> = pools.node_pools.into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["default-pool", "gpu-pool"]);

        let pool =
            crate::paths::node_pool_path("test-project", "us-central1", "prod", "gpu-pool")?;
        let op = client.set_node_pool_size(pool, 5).send().await?;
        assert_eq!(op.operation_type, model::operation::Type::SetNodePoolSize);
        Ok(())
    }

    #[tokio::test]
    async fn disconnected() -> TestResult {
        let client = ClusterManager::builder()
            .with_credentials(auth::credentials::Credentials::anonymous())
            .build()
            .await?;
        assert!(!client.is_connected());
        let err = client
            .get_server_config("projects/p/locations/l")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_no_connection(), "{err:?}");
        Ok(())
    }
}
