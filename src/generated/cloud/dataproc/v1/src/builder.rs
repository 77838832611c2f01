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

pub mod cluster_controller {
    use crate::Result;
    use crate::model;
    use gax::error::Error;
    use gax::options::RequestOptions;
    use gax::options::internal::with_attempt_timeout;
    use gax::paginator::{ItemPaginator, Paginator};
    use std::sync::Arc;

    /// A builder for [ClusterController][crate::client::ClusterController].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use google_cloud_dataproc_v1::*;
    /// # use builder::cluster_controller::ClientBuilder;
    /// # use client::ClusterController;
    /// let builder: ClientBuilder = ClusterController::builder();
    /// let client = builder
    ///     .with_endpoint("https://dataproc.googleapis.com")
    ///     .with_credentials(auth::credentials::Credentials::anonymous())
    ///     .build()
    ///     .await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder = gax::client_builder::ClientBuilder<
        client::Factory,
        auth::credentials::Credentials,
        Arc<dyn crate::stub::ClusterController>,
    >;

    pub(crate) mod client {
        use super::super::super::client::ClusterController;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = ClusterController;
            type Credentials = auth::credentials::Credentials;
            type Transport = std::sync::Arc<dyn crate::stub::ClusterController>;
            async fn build(
                self,
                config: gax::client_builder::internal::ClientConfig<Self::Credentials>,
                transport: Option<Self::Transport>,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config, transport).await
            }
        }
    }

    /// Common implementation for [crate::client::ClusterController] request builders.
    #[derive(Clone, Debug)]
    pub struct RequestBuilder<R: std::default::Default> {
        stub: Option<Arc<dyn crate::stub::ClusterController>>,
        request: R,
        options: RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: Option<Arc<dyn crate::stub::ClusterController>>,
            options: RequestOptions,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options,
            }
        }

        fn connected(&self) -> Result<Arc<dyn crate::stub::ClusterController>> {
            self.stub.clone().ok_or_else(Error::no_connection)
        }
    }

    /// The request builder for [ClusterController::create_cluster][crate::client::ClusterController::create_cluster] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_dataproc_v1::builder::cluster_controller::CreateCluster;
    /// # async fn sample() -> gax::Result<()> {
    /// use lro::Poller;
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.poller().until_done().await?;
    ///
    /// fn prepare_request_builder() -> CreateCluster {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// # Ok(()) }
    /// ```
    #[derive(Clone, Debug)]
    pub struct CreateCluster(RequestBuilder<model::CreateClusterRequest>);

    impl CreateCluster {
        pub(crate) fn new(
            stub: Option<Arc<dyn crate::stub::ClusterController>>,
            options: RequestOptions,
        ) -> Self {
            Self(RequestBuilder::new(stub, options))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::CreateClusterRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets the value of [project_id][model::CreateClusterRequest::project_id].
        pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [region][model::CreateClusterRequest::region].
        pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.region = v.into();
            self
        }

        /// Sets the value of [cluster][model::CreateClusterRequest::cluster].
        pub fn set_cluster<T: Into<model::Cluster>>(mut self, v: T) -> Self {
            self.0.request.cluster = Some(v.into());
            self
        }

        /// Sets the value of [request_id][model::CreateClusterRequest::request_id].
        pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.request_id = v.into();
            self
        }

        /// Sends the request.
        ///
        /// # Long running operations
        ///
        /// This starts, but does not poll, a long-running operation. More
        /// details on [ClusterController::create_cluster][crate::client::ClusterController::create_cluster].
        pub async fn send(self) -> Result<lro::model::Operation> {
            let stub = self.0.connected()?;
            let options = self.0.options;
            with_attempt_timeout(&options, stub.create_cluster(self.0.request, options.clone()))
                .await
        }

        /// Starts the operation, returning a handle to track its progress.
        pub async fn start(
            self,
        ) -> Result<lro::Operation<model::Cluster, model::ClusterOperationMetadata>> {
            let stub = self.0.connected()?;
            let options = self.0.options.clone();
            let op = self.send().await?;
            Ok(lro::Operation::new(stub, options, op))
        }

        /// Creates a [Poller][lro::Poller] to work with `create_cluster`.
        pub fn poller(
            self,
        ) -> impl lro::Poller<model::Cluster, model::ClusterOperationMetadata> {
            lro::new_poller(move || self.start())
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateCluster {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ClusterController::update_cluster][crate::client::ClusterController::update_cluster] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateCluster(RequestBuilder<model::UpdateClusterRequest>);

    impl UpdateCluster {
        pub(crate) fn new(
            stub: Option<Arc<dyn crate::stub::ClusterController>>,
            options: RequestOptions,
        ) -> Self {
            Self(RequestBuilder::new(stub, options))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::UpdateClusterRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets the value of [project_id][model::UpdateClusterRequest::project_id].
        pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [region][model::UpdateClusterRequest::region].
        pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.region = v.into();
            self
        }

        /// Sets the value of [cluster_name][model::UpdateClusterRequest::cluster_name].
        pub fn set_cluster_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.cluster_name = v.into();
            self
        }

        /// Sets the value of [cluster][model::UpdateClusterRequest::cluster].
        pub fn set_cluster<T: Into<model::Cluster>>(mut self, v: T) -> Self {
            self.0.request.cluster = Some(v.into());
            self
        }

        /// Sets the value of [update_mask][model::UpdateClusterRequest::update_mask].
        pub fn set_update_mask<T: Into<model::FieldMask>>(mut self, v: T) -> Self {
            self.0.request.update_mask = Some(v.into());
            self
        }

        /// Sends the request.
        ///
        /// # Long running operations
        ///
        /// This starts, but does not poll, a long-running operation.
        pub async fn send(self) -> Result<lro::model::Operation> {
            let stub = self.0.connected()?;
            let options = self.0.options;
            with_attempt_timeout(&options, stub.update_cluster(self.0.request, options.clone()))
                .await
        }

        /// Starts the operation, returning a handle to track its progress.
        pub async fn start(
            self,
        ) -> Result<lro::Operation<model::Cluster, model::ClusterOperationMetadata>> {
            let stub = self.0.connected()?;
            let options = self.0.options.clone();
            let op = self.send().await?;
            Ok(lro::Operation::new(stub, options, op))
        }

        /// Creates a [Poller][lro::Poller] to work with `update_cluster`.
        pub fn poller(
            self,
        ) -> impl lro::Poller<model::Cluster, model::ClusterOperationMetadata> {
            lro::new_poller(move || self.start())
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateCluster {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ClusterController::delete_cluster][crate::client::ClusterController::delete_cluster] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteCluster(RequestBuilder<model::DeleteClusterRequest>);

    impl DeleteCluster {
        pub(crate) fn new(
            stub: Option<Arc<dyn crate::stub::ClusterController>>,
            options: RequestOptions,
        ) -> Self {
            Self(RequestBuilder::new(stub, options))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::DeleteClusterRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets the value of [project_id][model::DeleteClusterRequest::project_id].
        pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [region][model::DeleteClusterRequest::region].
        pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.region = v.into();
            self
        }

        /// Sets the value of [cluster_name][model::DeleteClusterRequest::cluster_name].
        pub fn set_cluster_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.cluster_name = v.into();
            self
        }

        /// Sets the value of [cluster_uuid][model::DeleteClusterRequest::cluster_uuid].
        pub fn set_cluster_uuid<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.cluster_uuid = v.into();
            self
        }

        /// Sends the request.
        ///
        /// # Long running operations
        ///
        /// This starts, but does not poll, a long-running operation.
        pub async fn send(self) -> Result<lro::model::Operation> {
            let stub = self.0.connected()?;
            let options = self.0.options;
            with_attempt_timeout(&options, stub.delete_cluster(self.0.request, options.clone()))
                .await
        }

        /// Starts the operation, returning a handle to track its progress.
        pub async fn start(
            self,
        ) -> Result<lro::Operation<lro::model::Empty, model::ClusterOperationMetadata>> {
            let stub = self.0.connected()?;
            let options = self.0.options.clone();
            let op = self.send().await?;
            Ok(lro::Operation::new(stub, options, op))
        }

        /// Creates a [Poller][lro::Poller] to work with `delete_cluster`.
        pub fn poller(
            self,
        ) -> impl lro::Poller<lro::model::Empty, model::ClusterOperationMetadata> {
            lro::new_poller(move || self.start())
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteCluster {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ClusterController::get_cluster][crate::client::ClusterController::get_cluster] calls.
    #[derive(Clone, Debug)]
    pub struct GetCluster(RequestBuilder<model::GetClusterRequest>);

    impl GetCluster {
        pub(crate) fn new(
            stub: Option<Arc<dyn crate::stub::ClusterController>>,
            options: RequestOptions,
        ) -> Self {
            Self(RequestBuilder::new(stub, options))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::GetClusterRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets the value of [project_id][model::GetClusterRequest::project_id].
        pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [region][model::GetClusterRequest::region].
        pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.region = v.into();
            self
        }

        /// Sets the value of [cluster_name][model::GetClusterRequest::cluster_name].
        pub fn set_cluster_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.cluster_name = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Cluster> {
            let stub = self.0.connected()?;
            let options = self.0.options;
            with_attempt_timeout(&options, stub.get_cluster(self.0.request, options.clone())).await
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetCluster {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ClusterController::list_clusters][crate::client::ClusterController::list_clusters] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_dataproc_v1::builder::cluster_controller::ListClusters;
    /// # async fn sample() -> gax::Result<()> {
    /// let builder = prepare_request_builder();
    /// let mut items = builder.by_item();
    /// while let Some(result) = items.next().await {
    ///   let item = result?;
    /// }
    ///
    /// fn prepare_request_builder() -> ListClusters {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// # Ok(()) }
    /// ```
    #[derive(Clone, Debug)]
    pub struct ListClusters(RequestBuilder<model::ListClustersRequest>);

    impl ListClusters {
        pub(crate) fn new(
            stub: Option<Arc<dyn crate::stub::ClusterController>>,
            options: RequestOptions,
        ) -> Self {
            Self(RequestBuilder::new(stub, options))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::ListClustersRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets the value of [project_id][model::ListClustersRequest::project_id].
        pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [region][model::ListClustersRequest::region].
        pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.region = v.into();
            self
        }

        /// Sets the value of [filter][model::ListClustersRequest::filter].
        pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.filter = v.into();
            self
        }

        /// Sets the value of [page_size][model::ListClustersRequest::page_size].
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.page_size = v.into();
            self
        }

        /// Sets the value of [page_token][model::ListClustersRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::ListClustersResponse> {
            let stub = self.0.connected()?;
            let options = self.0.options;
            with_attempt_timeout(&options, stub.list_clusters(self.0.request, options.clone()))
                .await
        }

        /// Streams each page in the collection.
        pub fn by_page(self) -> Paginator<model::ListClustersResponse, Error> {
            let token = self.0.request.page_token.clone();
            let execute = move |token: String| {
                let builder = self.clone().set_page_token(token);
                builder.send()
            };
            Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(self) -> ItemPaginator<model::ListClustersResponse, Error> {
            self.by_page().items()
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListClusters {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ClusterController::diagnose_cluster][crate::client::ClusterController::diagnose_cluster] calls.
    #[derive(Clone, Debug)]
    pub struct DiagnoseCluster(RequestBuilder<model::DiagnoseClusterRequest>);

    impl DiagnoseCluster {
        pub(crate) fn new(
            stub: Option<Arc<dyn crate::stub::ClusterController>>,
            options: RequestOptions,
        ) -> Self {
            Self(RequestBuilder::new(stub, options))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::DiagnoseClusterRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets the value of [project_id][model::DiagnoseClusterRequest::project_id].
        pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [region][model::DiagnoseClusterRequest::region].
        pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.region = v.into();
            self
        }

        /// Sets the value of [cluster_name][model::DiagnoseClusterRequest::cluster_name].
        pub fn set_cluster_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.cluster_name = v.into();
            self
        }

        /// Sends the request.
        ///
        /// # Long running operations
        ///
        /// This starts, but does not poll, a long-running operation.
        pub async fn send(self) -> Result<lro::model::Operation> {
            let stub = self.0.connected()?;
            let options = self.0.options;
            with_attempt_timeout(
                &options,
                stub.diagnose_cluster(self.0.request, options.clone()),
            )
            .await
        }

        /// Starts the operation, returning a handle to track its progress.
        pub async fn start(
            self,
        ) -> Result<lro::Operation<model::DiagnoseClusterResults, model::ClusterOperationMetadata>>
        {
            let stub = self.0.connected()?;
            let options = self.0.options.clone();
            let op = self.send().await?;
            Ok(lro::Operation::new(stub, options, op))
        }

        /// Creates a [Poller][lro::Poller] to work with `diagnose_cluster`.
        pub fn poller(
            self,
        ) -> impl lro::Poller<model::DiagnoseClusterResults, model::ClusterOperationMetadata>
        {
            lro::new_poller(move || self.start())
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DiagnoseCluster {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ClusterController::get_operation][crate::client::ClusterController::get_operation] calls.
    #[derive(Clone, Debug)]
    pub struct GetOperation(RequestBuilder<lro::model::GetOperationRequest>);

    impl GetOperation {
        pub(crate) fn new(
            stub: Option<Arc<dyn crate::stub::ClusterController>>,
            options: RequestOptions,
        ) -> Self {
            Self(RequestBuilder::new(stub, options))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<lro::model::GetOperationRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets the value of [name][lro::model::GetOperationRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<lro::model::Operation> {
            let stub = self.0.connected()?;
            let options = self.0.options;
            with_attempt_timeout(&options, stub.get_operation(self.0.request, options.clone()))
                .await
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetOperation {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }
}

pub mod job_controller {
    use crate::Result;
    use crate::model;
    use gax::error::Error;
    use gax::options::RequestOptions;
    use gax::options::internal::with_attempt_timeout;
    use gax::paginator::{ItemPaginator, Paginator};
    use std::sync::Arc;

    /// A builder for [JobController][crate::client::JobController].
    pub type ClientBuilder = gax::client_builder::ClientBuilder<
        client::Factory,
        auth::credentials::Credentials,
        Arc<dyn crate::stub::JobController>,
    >;

    pub(crate) mod client {
        use super::super::super::client::JobController;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = JobController;
            type Credentials = auth::credentials::Credentials;
            type Transport = std::sync::Arc<dyn crate::stub::JobController>;
            async fn build(
                self,
                config: gax::client_builder::internal::ClientConfig<Self::Credentials>,
                transport: Option<Self::Transport>,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config, transport).await
            }
        }
    }

    /// Common implementation for [crate::client::JobController] request builders.
    #[derive(Clone, Debug)]
    pub struct RequestBuilder<R: std::default::Default> {
        stub: Option<Arc<dyn crate::stub::JobController>>,
        request: R,
        options: RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: Option<Arc<dyn crate::stub::JobController>>,
            options: RequestOptions,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options,
            }
        }

        fn connected(&self) -> Result<Arc<dyn crate::stub::JobController>> {
            self.stub.clone().ok_or_else(Error::no_connection)
        }
    }

    /// The request builder for [JobController::submit_job][crate::client::JobController::submit_job] calls.
    #[derive(Clone, Debug)]
    pub struct SubmitJob(RequestBuilder<model::SubmitJobRequest>);

    impl SubmitJob {
        pub(crate) fn new(
            stub: Option<Arc<dyn crate::stub::JobController>>,
            options: RequestOptions,
        ) -> Self {
            Self(RequestBuilder::new(stub, options))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::SubmitJobRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets the value of [project_id][model::SubmitJobRequest::project_id].
        pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [region][model::SubmitJobRequest::region].
        pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.region = v.into();
            self
        }

        /// Sets the value of [job][model::SubmitJobRequest::job].
        pub fn set_job<T: Into<model::Job>>(mut self, v: T) -> Self {
            self.0.request.job = Some(v.into());
            self
        }

        /// Sets the value of [request_id][model::SubmitJobRequest::request_id].
        pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.request_id = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Job> {
            let stub = self.0.connected()?;
            let options = self.0.options;
            with_attempt_timeout(&options, stub.submit_job(self.0.request, options.clone())).await
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for SubmitJob {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobController::get_job][crate::client::JobController::get_job] calls.
    #[derive(Clone, Debug)]
    pub struct GetJob(RequestBuilder<model::GetJobRequest>);

    impl GetJob {
        pub(crate) fn new(
            stub: Option<Arc<dyn crate::stub::JobController>>,
            options: RequestOptions,
        ) -> Self {
            Self(RequestBuilder::new(stub, options))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::GetJobRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets the value of [project_id][model::GetJobRequest::project_id].
        pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [region][model::GetJobRequest::region].
        pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.region = v.into();
            self
        }

        /// Sets the value of [job_id][model::GetJobRequest::job_id].
        pub fn set_job_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.job_id = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Job> {
            let stub = self.0.connected()?;
            let options = self.0.options;
            with_attempt_timeout(&options, stub.get_job(self.0.request, options.clone())).await
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetJob {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobController::list_jobs][crate::client::JobController::list_jobs] calls.
    #[derive(Clone, Debug)]
    pub struct ListJobs(RequestBuilder<model::ListJobsRequest>);

    impl ListJobs {
        pub(crate) fn new(
            stub: Option<Arc<dyn crate::stub::JobController>>,
            options: RequestOptions,
        ) -> Self {
            Self(RequestBuilder::new(stub, options))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::ListJobsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets the value of [project_id][model::ListJobsRequest::project_id].
        pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [region][model::ListJobsRequest::region].
        pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.region = v.into();
            self
        }

        /// Sets the value of [page_size][model::ListJobsRequest::page_size].
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.page_size = v.into();
            self
        }

        /// Sets the value of [page_token][model::ListJobsRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }

        /// Sets the value of [cluster_name][model::ListJobsRequest::cluster_name].
        pub fn set_cluster_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.cluster_name = v.into();
            self
        }

        /// Sets the value of [job_state_matcher][model::ListJobsRequest::job_state_matcher].
        pub fn set_job_state_matcher<T: Into<model::list_jobs_request::JobStateMatcher>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.job_state_matcher = v.into();
            self
        }

        /// Sets the value of [filter][model::ListJobsRequest::filter].
        pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.filter = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::ListJobsResponse> {
            let stub = self.0.connected()?;
            let options = self.0.options;
            with_attempt_timeout(&options, stub.list_jobs(self.0.request, options.clone())).await
        }

        /// Streams each page in the collection.
        pub fn by_page(self) -> Paginator<model::ListJobsResponse, Error> {
            let token = self.0.request.page_token.clone();
            let execute = move |token: String| {
                let builder = self.clone().set_page_token(token);
                builder.send()
            };
            Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(self) -> ItemPaginator<model::ListJobsResponse, Error> {
            self.by_page().items()
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListJobs {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobController::update_job][crate::client::JobController::update_job] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateJob(RequestBuilder<model::UpdateJobRequest>);

    impl UpdateJob {
        pub(crate) fn new(
            stub: Option<Arc<dyn crate::stub::JobController>>,
            options: RequestOptions,
        ) -> Self {
            Self(RequestBuilder::new(stub, options))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::UpdateJobRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets the value of [project_id][model::UpdateJobRequest::project_id].
        pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [region][model::UpdateJobRequest::region].
        pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.region = v.into();
            self
        }

        /// Sets the value of [job_id][model::UpdateJobRequest::job_id].
        pub fn set_job_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.job_id = v.into();
            self
        }

        /// Sets the value of [job][model::UpdateJobRequest::job].
        pub fn set_job<T: Into<model::Job>>(mut self, v: T) -> Self {
            self.0.request.job = Some(v.into());
            self
        }

        /// Sets the value of [update_mask][model::UpdateJobRequest::update_mask].
        pub fn set_update_mask<T: Into<model::FieldMask>>(mut self, v: T) -> Self {
            self.0.request.update_mask = Some(v.into());
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Job> {
            let stub = self.0.connected()?;
            let options = self.0.options;
            with_attempt_timeout(&options, stub.update_job(self.0.request, options.clone())).await
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateJob {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobController::cancel_job][crate::client::JobController::cancel_job] calls.
    #[derive(Clone, Debug)]
    pub struct CancelJob(RequestBuilder<model::CancelJobRequest>);

    impl CancelJob {
        pub(crate) fn new(
            stub: Option<Arc<dyn crate::stub::JobController>>,
            options: RequestOptions,
        ) -> Self {
            Self(RequestBuilder::new(stub, options))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::CancelJobRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets the value of [project_id][model::CancelJobRequest::project_id].
        pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [region][model::CancelJobRequest::region].
        pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.region = v.into();
            self
        }

        /// Sets the value of [job_id][model::CancelJobRequest::job_id].
        pub fn set_job_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.job_id = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Job> {
            let stub = self.0.connected()?;
            let options = self.0.options;
            with_attempt_timeout(&options, stub.cancel_job(self.0.request, options.clone())).await
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CancelJob {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [JobController::delete_job][crate::client::JobController::delete_job] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteJob(RequestBuilder<model::DeleteJobRequest>);

    impl DeleteJob {
        pub(crate) fn new(
            stub: Option<Arc<dyn crate::stub::JobController>>,
            options: RequestOptions,
        ) -> Self {
            Self(RequestBuilder::new(stub, options))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::DeleteJobRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets the value of [project_id][model::DeleteJobRequest::project_id].
        pub fn set_project_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.project_id = v.into();
            self
        }

        /// Sets the value of [region][model::DeleteJobRequest::region].
        pub fn set_region<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.region = v.into();
            self
        }

        /// Sets the value of [job_id][model::DeleteJobRequest::job_id].
        pub fn set_job_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.job_id = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<()> {
            let stub = self.0.connected()?;
            let options = self.0.options;
            with_attempt_timeout(&options, stub.delete_job(self.0.request, options.clone())).await
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteJob {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }
}

pub mod workflow_template_service {
    use crate::Result;
    use crate::model;
    use gax::error::Error;
    use gax::options::RequestOptions;
    use gax::options::internal::with_attempt_timeout;
    use gax::paginator::{ItemPaginator, Paginator};
    use std::sync::Arc;

    /// A builder for [WorkflowTemplateService][crate::client::WorkflowTemplateService].
    pub type ClientBuilder = gax::client_builder::ClientBuilder<
        client::Factory,
        auth::credentials::Credentials,
        Arc<dyn crate::stub::WorkflowTemplateService>,
    >;

    pub(crate) mod client {
        use super::super::super::client::WorkflowTemplateService;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = WorkflowTemplateService;
            type Credentials = auth::credentials::Credentials;
            type Transport = std::sync::Arc<dyn crate::stub::WorkflowTemplateService>;
            async fn build(
                self,
                config: gax::client_builder::internal::ClientConfig<Self::Credentials>,
                transport: Option<Self::Transport>,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config, transport).await
            }
        }
    }

    /// Common implementation for [crate::client::WorkflowTemplateService] request builders.
    #[derive(Clone, Debug)]
    pub struct RequestBuilder<R: std::default::Default> {
        stub: Option<Arc<dyn crate::stub::WorkflowTemplateService>>,
        request: R,
        options: RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: Option<Arc<dyn crate::stub::WorkflowTemplateService>>,
            options: RequestOptions,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options,
            }
        }

        fn connected(&self) -> Result<Arc<dyn crate::stub::WorkflowTemplateService>> {
            self.stub.clone().ok_or_else(Error::no_connection)
        }
    }

    /// The request builder for [WorkflowTemplateService::create_workflow_template][crate::client::WorkflowTemplateService::create_workflow_template] calls.
    #[derive(Clone, Debug)]
    pub struct CreateWorkflowTemplate(RequestBuilder<model::CreateWorkflowTemplateRequest>);

    impl CreateWorkflowTemplate {
        pub(crate) fn new(
            stub: Option<Arc<dyn crate::stub::WorkflowTemplateService>>,
            options: RequestOptions,
        ) -> Self {
            Self(RequestBuilder::new(stub, options))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::CreateWorkflowTemplateRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets the value of [parent][model::CreateWorkflowTemplateRequest::parent].
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [template][model::CreateWorkflowTemplateRequest::template].
        pub fn set_template<T: Into<model::WorkflowTemplate>>(mut self, v: T) -> Self {
            self.0.request.template = Some(v.into());
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::WorkflowTemplate> {
            let stub = self.0.connected()?;
            let options = self.0.options;
            with_attempt_timeout(
                &options,
                stub.create_workflow_template(self.0.request, options.clone()),
            )
            .await
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateWorkflowTemplate {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [WorkflowTemplateService::get_workflow_template][crate::client::WorkflowTemplateService::get_workflow_template] calls.
    #[derive(Clone, Debug)]
    pub struct GetWorkflowTemplate(RequestBuilder<model::GetWorkflowTemplateRequest>);

    impl GetWorkflowTemplate {
        pub(crate) fn new(
            stub: Option<Arc<dyn crate::stub::WorkflowTemplateService>>,
            options: RequestOptions,
        ) -> Self {
            Self(RequestBuilder::new(stub, options))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::GetWorkflowTemplateRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets the value of [name][model::GetWorkflowTemplateRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }

        /// Sets the value of [version][model::GetWorkflowTemplateRequest::version].
        pub fn set_version<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.version = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::WorkflowTemplate> {
            let stub = self.0.connected()?;
            let options = self.0.options;
            with_attempt_timeout(
                &options,
                stub.get_workflow_template(self.0.request, options.clone()),
            )
            .await
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetWorkflowTemplate {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [WorkflowTemplateService::instantiate_workflow_template][crate::client::WorkflowTemplateService::instantiate_workflow_template] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_dataproc_v1::builder::workflow_template_service::InstantiateWorkflowTemplate;
    /// # async fn sample() -> gax::Result<()> {
    /// use lro::Poller;
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.poller().until_done().await?;
    ///
    /// fn prepare_request_builder() -> InstantiateWorkflowTemplate {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// # Ok(()) }
    /// ```
    #[derive(Clone, Debug)]
    pub struct InstantiateWorkflowTemplate(
        RequestBuilder<model::InstantiateWorkflowTemplateRequest>,
    );

    impl InstantiateWorkflowTemplate {
        pub(crate) fn new(
            stub: Option<Arc<dyn crate::stub::WorkflowTemplateService>>,
            options: RequestOptions,
        ) -> Self {
            Self(RequestBuilder::new(stub, options))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::InstantiateWorkflowTemplateRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets the value of [name][model::InstantiateWorkflowTemplateRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }

        /// Sets the value of [version][model::InstantiateWorkflowTemplateRequest::version].
        pub fn set_version<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.version = v.into();
            self
        }

        /// Sets the value of [request_id][model::InstantiateWorkflowTemplateRequest::request_id].
        pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.request_id = v.into();
            self
        }

        /// Sets the value of [parameters][model::InstantiateWorkflowTemplateRequest::parameters].
        pub fn set_parameters<T, K, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = (K, V)>,
            K: Into<String>,
            V: Into<String>,
        {
            self.0.request.parameters = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
            self
        }

        /// Sends the request.
        ///
        /// # Long running operations
        ///
        /// This starts, but does not poll, a long-running operation.
        pub async fn send(self) -> Result<lro::model::Operation> {
            let stub = self.0.connected()?;
            let options = self.0.options;
            with_attempt_timeout(
                &options,
                stub.instantiate_workflow_template(self.0.request, options.clone()),
            )
            .await
        }

        /// Starts the operation, returning a handle to track its progress.
        pub async fn start(
            self,
        ) -> Result<lro::Operation<lro::model::Empty, model::WorkflowMetadata>> {
            let stub = self.0.connected()?;
            let options = self.0.options.clone();
            let op = self.send().await?;
            Ok(lro::Operation::new(stub, options, op))
        }

        /// Creates a [Poller][lro::Poller] to work with `instantiate_workflow_template`.
        pub fn poller(self) -> impl lro::Poller<lro::model::Empty, model::WorkflowMetadata> {
            lro::new_poller(move || self.start())
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for InstantiateWorkflowTemplate {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [WorkflowTemplateService::instantiate_inline_workflow_template][crate::client::WorkflowTemplateService::instantiate_inline_workflow_template] calls.
    #[derive(Clone, Debug)]
    pub struct InstantiateInlineWorkflowTemplate(
        RequestBuilder<model::InstantiateInlineWorkflowTemplateRequest>,
    );

    impl InstantiateInlineWorkflowTemplate {
        pub(crate) fn new(
            stub: Option<Arc<dyn crate::stub::WorkflowTemplateService>>,
            options: RequestOptions,
        ) -> Self {
            Self(RequestBuilder::new(stub, options))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::InstantiateInlineWorkflowTemplateRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets the value of [parent][model::InstantiateInlineWorkflowTemplateRequest::parent].
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [template][model::InstantiateInlineWorkflowTemplateRequest::template].
        pub fn set_template<T: Into<model::WorkflowTemplate>>(mut self, v: T) -> Self {
            self.0.request.template = Some(v.into());
            self
        }

        /// Sets the value of [request_id][model::InstantiateInlineWorkflowTemplateRequest::request_id].
        pub fn set_request_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.request_id = v.into();
            self
        }

        /// Sends the request.
        ///
        /// # Long running operations
        ///
        /// This starts, but does not poll, a long-running operation.
        pub async fn send(self) -> Result<lro::model::Operation> {
            let stub = self.0.connected()?;
            let options = self.0.options;
            with_attempt_timeout(
                &options,
                stub.instantiate_inline_workflow_template(self.0.request, options.clone()),
            )
            .await
        }

        /// Starts the operation, returning a handle to track its progress.
        pub async fn start(
            self,
        ) -> Result<lro::Operation<lro::model::Empty, model::WorkflowMetadata>> {
            let stub = self.0.connected()?;
            let options = self.0.options.clone();
            let op = self.send().await?;
            Ok(lro::Operation::new(stub, options, op))
        }

        /// Creates a [Poller][lro::Poller] to work with `instantiate_inline_workflow_template`.
        pub fn poller(self) -> impl lro::Poller<lro::model::Empty, model::WorkflowMetadata> {
            lro::new_poller(move || self.start())
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for InstantiateInlineWorkflowTemplate {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [WorkflowTemplateService::update_workflow_template][crate::client::WorkflowTemplateService::update_workflow_template] calls.
    #[derive(Clone, Debug)]
    pub struct UpdateWorkflowTemplate(RequestBuilder<model::UpdateWorkflowTemplateRequest>);

    impl UpdateWorkflowTemplate {
        pub(crate) fn new(
            stub: Option<Arc<dyn crate::stub::WorkflowTemplateService>>,
            options: RequestOptions,
        ) -> Self {
            Self(RequestBuilder::new(stub, options))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::UpdateWorkflowTemplateRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets the value of [template][model::UpdateWorkflowTemplateRequest::template].
        pub fn set_template<T: Into<model::WorkflowTemplate>>(mut self, v: T) -> Self {
            self.0.request.template = Some(v.into());
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::WorkflowTemplate> {
            let stub = self.0.connected()?;
            let options = self.0.options;
            with_attempt_timeout(
                &options,
                stub.update_workflow_template(self.0.request, options.clone()),
            )
            .await
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for UpdateWorkflowTemplate {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [WorkflowTemplateService::list_workflow_templates][crate::client::WorkflowTemplateService::list_workflow_templates] calls.
    #[derive(Clone, Debug)]
    pub struct ListWorkflowTemplates(RequestBuilder<model::ListWorkflowTemplatesRequest>);

    impl ListWorkflowTemplates {
        pub(crate) fn new(
            stub: Option<Arc<dyn crate::stub::WorkflowTemplateService>>,
            options: RequestOptions,
        ) -> Self {
            Self(RequestBuilder::new(stub, options))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::ListWorkflowTemplatesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets the value of [parent][model::ListWorkflowTemplatesRequest::parent].
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [page_size][model::ListWorkflowTemplatesRequest::page_size].
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.page_size = v.into();
            self
        }

        /// Sets the value of [page_token][model::ListWorkflowTemplatesRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::ListWorkflowTemplatesResponse> {
            let stub = self.0.connected()?;
            let options = self.0.options;
            with_attempt_timeout(
                &options,
                stub.list_workflow_templates(self.0.request, options.clone()),
            )
            .await
        }

        /// Streams each page in the collection.
        pub fn by_page(self) -> Paginator<model::ListWorkflowTemplatesResponse, Error> {
            let token = self.0.request.page_token.clone();
            let execute = move |token: String| {
                let builder = self.clone().set_page_token(token);
                builder.send()
            };
            Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(self) -> ItemPaginator<model::ListWorkflowTemplatesResponse, Error> {
            self.by_page().items()
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListWorkflowTemplates {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [WorkflowTemplateService::delete_workflow_template][crate::client::WorkflowTemplateService::delete_workflow_template] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteWorkflowTemplate(RequestBuilder<model::DeleteWorkflowTemplateRequest>);

    impl DeleteWorkflowTemplate {
        pub(crate) fn new(
            stub: Option<Arc<dyn crate::stub::WorkflowTemplateService>>,
            options: RequestOptions,
        ) -> Self {
            Self(RequestBuilder::new(stub, options))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::DeleteWorkflowTemplateRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets the value of [name][model::DeleteWorkflowTemplateRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }

        /// Sets the value of [version][model::DeleteWorkflowTemplateRequest::version].
        pub fn set_version<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.version = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<()> {
            let stub = self.0.connected()?;
            let options = self.0.options;
            with_attempt_timeout(
                &options,
                stub.delete_workflow_template(self.0.request, options.clone()),
            )
            .await
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteWorkflowTemplate {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }
}
