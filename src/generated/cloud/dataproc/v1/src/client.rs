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

use crate::model;
use gax::client_builder::internal::ClientConfig;
use gax::options::RequestOptions;
use std::sync::Arc;

const SERVICE: &str = "DATAPROC";

/// Resolves the credentials and the default project for a Dataproc client.
fn discover_project(
    config: &ClientConfig<auth::credentials::Credentials>,
) -> gax::client_builder::Result<Option<String>> {
    let env = auth::credentials::SystemEnvironment;
    let cred = match config.cred.clone() {
        Some(c) => c,
        None => auth::credentials::Discovery::for_service(SERVICE)
            .resolve(&env)
            .map_err(gax::client_builder::Error::cred)?,
    };
    Ok(config
        .project
        .clone()
        .or_else(|| auth::project::default_project(SERVICE, &env, Some(&cred))))
}

/// Implements a client for the Cloud Dataproc API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use google_cloud_dataproc_v1::client::ClusterController;
/// let client = ClusterController::builder().build().await?;
/// let mut clusters = client.list_clusters("my-project", "us-central1").by_item();
/// while let Some(cluster) = clusters.next().await {
///     println!("{}", cluster?.cluster_name);
/// }
/// # anyhow::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// The ClusterControllerService provides methods to manage clusters
/// of Compute Engine instances.
///
/// # Configuration
///
/// To configure `ClusterController` use the `with_*` methods in the type
/// returned by [builder()][ClusterController::builder]. Without a transport
/// the client is disconnected, and its RPCs fail with
/// [no_connection][gax::error::Error::no_connection].
///
/// # Pooling and Cloning
///
/// `ClusterController` holds a connection pool internally, it is advised to
/// create one and the reuse it.  You do not need to wrap `ClusterController` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally.
#[derive(Clone, Debug)]
pub struct ClusterController {
    inner: Option<Arc<dyn super::stub::ClusterController>>,
    options: RequestOptions,
    project: Option<String>,
}

impl ClusterController {
    /// Returns a builder for [ClusterController].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use google_cloud_dataproc_v1::client::ClusterController;
    /// let client = ClusterController::builder()
    ///     .with_credentials(auth::credentials::Credentials::anonymous())
    ///     .build()
    ///     .await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::cluster_controller::ClientBuilder {
        gax::client_builder::internal::new_builder(
            super::builder::cluster_controller::client::Factory,
        )
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::ClusterController + 'static,
    {
        Self {
            inner: Some(Arc::new(stub)),
            options: RequestOptions::default(),
            project: None,
        }
    }

    pub(crate) async fn new(
        config: ClientConfig<auth::credentials::Credentials>,
        transport: Option<Arc<dyn super::stub::ClusterController>>,
    ) -> gax::client_builder::Result<Self> {
        let project = discover_project(&config)?;
        let inner = transport.map(|t| {
            if config.tracing {
                Arc::new(super::tracing::ClusterController::new(t))
                    as Arc<dyn super::stub::ClusterController>
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

    /// Creates a cluster in a project.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// The returned operation resolves to the created [Cluster][model::Cluster],
    /// its metadata is a [ClusterOperationMetadata][model::ClusterOperationMetadata].
    ///
    /// [long-running operation]: https://google.aip.dev/151
    pub fn create_cluster(
        &self,
        project_id: impl Into<String>,
        region: impl Into<String>,
        cluster: impl Into<model::Cluster>,
    ) -> super::builder::cluster_controller::CreateCluster {
        super::builder::cluster_controller::CreateCluster::new(
            self.inner.clone(),
            self.options.clone(),
        )
        .set_project_id(project_id)
        .set_region(region)
        .set_cluster(cluster)
    }

    /// Updates a cluster in a project.
    ///
    /// Only the fields named in `update_mask` are changed.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    ///
    /// [long-running operation]: https://google.aip.dev/151
    pub fn update_cluster(
        &self,
        project_id: impl Into<String>,
        region: impl Into<String>,
        cluster_name: impl Into<String>,
        cluster: impl Into<model::Cluster>,
        update_mask: impl Into<model::FieldMask>,
    ) -> super::builder::cluster_controller::UpdateCluster {
        super::builder::cluster_controller::UpdateCluster::new(
            self.inner.clone(),
            self.options.clone(),
        )
        .set_project_id(project_id)
        .set_region(region)
        .set_cluster_name(cluster_name)
        .set_cluster(cluster)
        .set_update_mask(update_mask)
    }

    /// Deletes a cluster in a project.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    ///
    /// [long-running operation]: https://google.aip.dev/151
    pub fn delete_cluster(
        &self,
        project_id: impl Into<String>,
        region: impl Into<String>,
        cluster_name: impl Into<String>,
    ) -> super::builder::cluster_controller::DeleteCluster {
        super::builder::cluster_controller::DeleteCluster::new(
            self.inner.clone(),
            self.options.clone(),
        )
        .set_project_id(project_id)
        .set_region(region)
        .set_cluster_name(cluster_name)
    }

    /// Gets the resource representation for a cluster in a project.
    pub fn get_cluster(
        &self,
        project_id: impl Into<String>,
        region: impl Into<String>,
        cluster_name: impl Into<String>,
    ) -> super::builder::cluster_controller::GetCluster {
        super::builder::cluster_controller::GetCluster::new(
            self.inner.clone(),
            self.options.clone(),
        )
        .set_project_id(project_id)
        .set_region(region)
        .set_cluster_name(cluster_name)
    }

    /// Lists all regions/{region}/clusters in a project alphabetically.
    pub fn list_clusters(
        &self,
        project_id: impl Into<String>,
        region: impl Into<String>,
    ) -> super::builder::cluster_controller::ListClusters {
        super::builder::cluster_controller::ListClusters::new(
            self.inner.clone(),
            self.options.clone(),
        )
        .set_project_id(project_id)
        .set_region(region)
    }

    /// Gets cluster diagnostic information.
    ///
    /// # Long running operations
    ///
    /// The operation resolves to a
    /// [DiagnoseClusterResults][model::DiagnoseClusterResults] with the
    /// location of the diagnostic output.
    pub fn diagnose_cluster(
        &self,
        project_id: impl Into<String>,
        region: impl Into<String>,
        cluster_name: impl Into<String>,
    ) -> super::builder::cluster_controller::DiagnoseCluster {
        super::builder::cluster_controller::DiagnoseCluster::new(
            self.inner.clone(),
            self.options.clone(),
        )
        .set_project_id(project_id)
        .set_region(region)
        .set_cluster_name(cluster_name)
    }

    /// Provides the [Operations][lro::stub::Operations] service functionality
    /// in this service.
    pub fn get_operation(
        &self,
        name: impl Into<String>,
    ) -> super::builder::cluster_controller::GetOperation {
        super::builder::cluster_controller::GetOperation::new(
            self.inner.clone(),
            self.options.clone(),
        )
        .set_name(name)
    }
}

/// Implements a client for the Cloud Dataproc API.
///
/// # Service Description
///
/// The JobController provides methods to manage jobs.
///
/// # Pooling and Cloning
///
/// `JobController` holds a connection pool internally, it is advised to
/// create one and the reuse it.
#[derive(Clone, Debug)]
pub struct JobController {
    inner: Option<Arc<dyn super::stub::JobController>>,
    options: RequestOptions,
    project: Option<String>,
}

impl JobController {
    /// Returns a builder for [JobController].
    pub fn builder() -> super::builder::job_controller::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::job_controller::client::Factory)
    }

    /// Creates a new client from the provided stub.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::JobController + 'static,
    {
        Self {
            inner: Some(Arc::new(stub)),
            options: RequestOptions::default(),
            project: None,
        }
    }

    pub(crate) async fn new(
        config: ClientConfig<auth::credentials::Credentials>,
        transport: Option<Arc<dyn super::stub::JobController>>,
    ) -> gax::client_builder::Result<Self> {
        let project = discover_project(&config)?;
        let inner = transport.map(|t| {
            if config.tracing {
                Arc::new(super::tracing::JobController::new(t))
                    as Arc<dyn super::stub::JobController>
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

    /// Submits a job to a cluster.
    pub fn submit_job(
        &self,
        project_id: impl Into<String>,
        region: impl Into<String>,
        job: impl Into<model::Job>,
    ) -> super::builder::job_controller::SubmitJob {
        super::builder::job_controller::SubmitJob::new(self.inner.clone(), self.options.clone())
            .set_project_id(project_id)
            .set_region(region)
            .set_job(job)
    }

    /// Gets the resource representation for a job in a project.
    pub fn get_job(
        &self,
        project_id: impl Into<String>,
        region: impl Into<String>,
        job_id: impl Into<String>,
    ) -> super::builder::job_controller::GetJob {
        super::builder::job_controller::GetJob::new(self.inner.clone(), self.options.clone())
            .set_project_id(project_id)
            .set_region(region)
            .set_job_id(job_id)
    }

    /// Lists regions/{region}/jobs in a project.
    pub fn list_jobs(
        &self,
        project_id: impl Into<String>,
        region: impl Into<String>,
    ) -> super::builder::job_controller::ListJobs {
        super::builder::job_controller::ListJobs::new(self.inner.clone(), self.options.clone())
            .set_project_id(project_id)
            .set_region(region)
    }

    /// Updates a job in a project.
    pub fn update_job(
        &self,
        project_id: impl Into<String>,
        region: impl Into<String>,
        job_id: impl Into<String>,
        job: impl Into<model::Job>,
        update_mask: impl Into<model::FieldMask>,
    ) -> super::builder::job_controller::UpdateJob {
        super::builder::job_controller::UpdateJob::new(self.inner.clone(), self.options.clone())
            .set_project_id(project_id)
            .set_region(region)
            .set_job_id(job_id)
            .set_job(job)
            .set_update_mask(update_mask)
    }

    /// Starts a job cancellation request.
    ///
    /// To access the job resource after cancellation, call
    /// [list_jobs][JobController::list_jobs] or
    /// [get_job][JobController::get_job].
    pub fn cancel_job(
        &self,
        project_id: impl Into<String>,
        region: impl Into<String>,
        job_id: impl Into<String>,
    ) -> super::builder::job_controller::CancelJob {
        super::builder::job_controller::CancelJob::new(self.inner.clone(), self.options.clone())
            .set_project_id(project_id)
            .set_region(region)
            .set_job_id(job_id)
    }

    /// Deletes the job from the project. If the job is active, the delete
    /// fails with `FAILED_PRECONDITION`.
    pub fn delete_job(
        &self,
        project_id: impl Into<String>,
        region: impl Into<String>,
        job_id: impl Into<String>,
    ) -> super::builder::job_controller::DeleteJob {
        super::builder::job_controller::DeleteJob::new(self.inner.clone(), self.options.clone())
            .set_project_id(project_id)
            .set_region(region)
            .set_job_id(job_id)
    }
}

/// Implements a client for the Cloud Dataproc API.
///
/// # Service Description
///
/// The API interface for managing Workflow Templates in the
/// Dataproc API.
#[derive(Clone, Debug)]
pub struct WorkflowTemplateService {
    inner: Option<Arc<dyn super::stub::WorkflowTemplateService>>,
    options: RequestOptions,
    project: Option<String>,
}

impl WorkflowTemplateService {
    /// Returns a builder for [WorkflowTemplateService].
    pub fn builder() -> super::builder::workflow_template_service::ClientBuilder {
        gax::client_builder::internal::new_builder(
            super::builder::workflow_template_service::client::Factory,
        )
    }

    /// Creates a new client from the provided stub.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::WorkflowTemplateService + 'static,
    {
        Self {
            inner: Some(Arc::new(stub)),
            options: RequestOptions::default(),
            project: None,
        }
    }

    pub(crate) async fn new(
        config: ClientConfig<auth::credentials::Credentials>,
        transport: Option<Arc<dyn super::stub::WorkflowTemplateService>>,
    ) -> gax::client_builder::Result<Self> {
        let project = discover_project(&config)?;
        let inner = transport.map(|t| {
            if config.tracing {
                Arc::new(super::tracing::WorkflowTemplateService::new(t))
                    as Arc<dyn super::stub::WorkflowTemplateService>
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

    /// Creates new workflow template.
    ///
    /// `parent` is a region name, see [region_path][crate::paths::region_path].
    pub fn create_workflow_template(
        &self,
        parent: impl Into<String>,
        template: impl Into<model::WorkflowTemplate>,
    ) -> super::builder::workflow_template_service::CreateWorkflowTemplate {
        super::builder::workflow_template_service::CreateWorkflowTemplate::new(
            self.inner.clone(),
            self.options.clone(),
        )
        .set_parent(parent)
        .set_template(template)
    }

    /// Retrieves the latest workflow template.
    ///
    /// Can retrieve previously instantiated template by specifying optional
    /// version parameter.
    pub fn get_workflow_template(
        &self,
        name: impl Into<String>,
    ) -> super::builder::workflow_template_service::GetWorkflowTemplate {
        super::builder::workflow_template_service::GetWorkflowTemplate::new(
            self.inner.clone(),
            self.options.clone(),
        )
        .set_name(name)
    }

    /// Instantiates a template and begins execution.
    ///
    /// # Long running operations
    ///
    /// The operation completes with an empty response once the workflow
    /// finishes. Its metadata is a [WorkflowMetadata][model::WorkflowMetadata]
    /// tracking the cluster and job progress.
    pub fn instantiate_workflow_template(
        &self,
        name: impl Into<String>,
    ) -> super::builder::workflow_template_service::InstantiateWorkflowTemplate {
        super::builder::workflow_template_service::InstantiateWorkflowTemplate::new(
            self.inner.clone(),
            self.options.clone(),
        )
        .set_name(name)
    }

    /// Instantiates a template and begins execution, without first saving it.
    pub fn instantiate_inline_workflow_template(
        &self,
        parent: impl Into<String>,
        template: impl Into<model::WorkflowTemplate>,
    ) -> super::builder::workflow_template_service::InstantiateInlineWorkflowTemplate {
        super::builder::workflow_template_service::InstantiateInlineWorkflowTemplate::new(
            self.inner.clone(),
            self.options.clone(),
        )
        .set_parent(parent)
        .set_template(template)
    }

    /// Updates (replaces) workflow template. The updated template
    /// must contain version that matches the current server version.
    pub fn update_workflow_template(
        &self,
        template: impl Into<model::WorkflowTemplate>,
    ) -> super::builder::workflow_template_service::UpdateWorkflowTemplate {
        super::builder::workflow_template_service::UpdateWorkflowTemplate::new(
            self.inner.clone(),
            self.options.clone(),
        )
        .set_template(template)
    }

    /// Lists workflows that match the specified filter in the request.
    pub fn list_workflow_templates(
        &self,
        parent: impl Into<String>,
    ) -> super::builder::workflow_template_service::ListWorkflowTemplates {
        super::builder::workflow_template_service::ListWorkflowTemplates::new(
            self.inner.clone(),
            self.options.clone(),
        )
        .set_parent(parent)
    }

    /// Deletes a workflow template. It does not cancel in-progress workflows.
    pub fn delete_workflow_template(
        &self,
        name: impl Into<String>,
    ) -> super::builder::workflow_template_service::DeleteWorkflowTemplate {
        super::builder::workflow_template_service::DeleteWorkflowTemplate::new(
            self.inner.clone(),
            self.options.clone(),
        )
        .set_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stub::tests::{MockClusterController, MockJobController, MockWorkflowTemplateService};
    use gax::paginator::PageableResponse;
    use lro::Poller;
    use pretty_assertions::assert_eq;

    type TestResult = anyhow::Result<()>;

    fn running(name: &str) -> anyhow::Result<lro::model::Operation> {
        let metadata = model::ClusterOperationMetadata::default()
            .set_cluster_name("test-cluster")
            .set_operation_type("CREATE");
        Ok(lro::model::Operation::default()
            .set_name(name)
            .set_metadata(lro::to_any(&metadata)?))
    }

    fn done(name: &str) -> anyhow::Result<lro::model::Operation> {
        let cluster = model::Cluster::default()
            .set_project_id("test-project")
            .set_cluster_name("test-cluster");
        Ok(lro::model::Operation::default()
            .set_name(name)
            .set_done(true)
            .set_result(lro::model::operation::Result::Response(lro::to_any(
                &cluster,
            )?)))
    }

    #[tokio::test(start_paused = true)]
    async fn create_cluster_polls_until_done() -> TestResult {
        let mut mock = MockClusterController::new();
        let start = running("operations/create-001")?;
        mock.expect_create_cluster()
            .withf(|r, _| {
                r.project_id == "test-project"
                    && r.region == "us-central1"
                    && r.cluster.as_ref().map(|c| c.cluster_name.as_str()) == Some("test-cluster")
            })
            .return_once(move |_, _| Ok(start));
        let mut seq = mockall::Sequence::new();
        let polled = running("operations/create-001")?;
        mock.expect_get_operation()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(move |_, _| Ok(polled));
        let finished = done("operations/create-001")?;
        mock.expect_get_operation()
            .times(1)
            .in_sequence(&mut seq)
            .withf(|r, _| r.name == "operations/create-001")
            .return_once(move |_, _| Ok(finished));

        let client = ClusterController::from_stub(mock);
        let cluster = client
            .create_cluster(
                "test-project",
                "us-central1",
                model::Cluster::default().set_cluster_name("test-cluster"),
            )
            .poller()
            .until_done()
            .await?;
        assert_eq!(cluster.cluster_name, "test-cluster");
        assert_eq!(cluster.project_id, "test-project");
        Ok(())
    }

    #[tokio::test]
    async fn create_cluster_start_exposes_metadata() -> TestResult {
        let mut mock = MockClusterController::new();
        let start = running("operations/create-002")?;
        mock.expect_create_cluster().return_once(move |_, _| Ok(start));

        let client = ClusterController::from_stub(mock);
        let op = client
            .create_cluster("test-project", "us-central1", model::Cluster::default())
            .start()
            .await?;
        assert_eq!(op.name(), "operations/create-002");
        assert!(!op.done());
        let metadata = op.metadata()?;
        assert_eq!(
            metadata.map(|m| m.cluster_name),
            Some("test-cluster".to_string())
        );
        Ok(())
    }

    #[tokio::test]
    async fn list_clusters_by_item() -> TestResult {
        let mut mock = MockClusterController::new();
        mock.expect_list_clusters()
            .withf(|r, _| r.page_token.is_empty())
            .return_once(|_, _| {
                Ok(model::ListClustersResponse::default()
                    .set_clusters([
                        model::Cluster::default().set_cluster_name("c1"),
                        model::Cluster::default().set_cluster_name("c2"),
                    ])
                    .set_next_page_token("page-2"))
            });
        mock.expect_list_clusters()
            .withf(|r, _| r.page_token == "page-2")
            .return_once(|_, _| {
                Ok(model::ListClustersResponse::default()
                    .set_clusters([model::Cluster::default().set_cluster_name("c3")]))
            });

        let client = ClusterController::from_stub(mock);
        let mut items = client.list_clusters("test-project", "us-central1").by_item();
        let mut names = Vec::new();
        while let Some(cluster) = items.next().await {
            names.push(cluster?.cluster_name);
        }
        assert_eq!(names, vec!["c1", "c2", "c3"]);
        Ok(())
    }

    #[tokio::test]
    async fn list_jobs_by_page() -> TestResult {
        let mut mock = MockJobController::new();
        mock.expect_list_jobs()
            .withf(|r, _| r.page_token.is_empty() && r.cluster_name == "test-cluster")
            .return_once(|_, _| {
                Ok(model::ListJobsResponse::default()
                    .set_jobs([model::Job::default()])
                    .set_next_page_token("next"))
            });
        mock.expect_list_jobs()
            .withf(|r, _| r.page_token == "next")
            .return_once(|_, _| Ok(model::ListJobsResponse::default()));

        let client = JobController::from_stub(mock);
        let mut pages = client
            .list_jobs("test-project", "us-central1")
            .set_cluster_name("test-cluster")
            .by_page();
        let mut tokens = Vec::new();
        while let Some(page) = pages.next().await {
            tokens.push(page?.next_page_token());
        }
        assert_eq!(tokens, vec!["next".to_string(), String::new()]);
        Ok(())
    }

    #[tokio::test]
    async fn submit_and_cancel_job() -> TestResult {
        let mut mock = MockJobController::new();
        mock.expect_submit_job()
            .withf(|r, _| r.job.as_ref().map(|j| j.job_id()) == Some("job-1"))
            .return_once(|r, _| Ok(r.job.unwrap_or_default()));
        mock.expect_cancel_job()
            .withf(|r, _| r.job_id == "job-1")
            .return_once(|_, _| {
                Ok(model::Job::default().set_status(
                    model::JobStatus::default().set_state(model::job_status::State::Cancelled),
                ))
            });

        let client = JobController::from_stub(mock);
        let job = model::Job::default()
            .set_reference(model::JobReference::default().set_job_id("job-1"));
        let submitted = client
            .submit_job("test-project", "us-central1", job)
            .send()
            .await?;
        assert_eq!(submitted.job_id(), "job-1");

        let cancelled = client
            .cancel_job("test-project", "us-central1", "job-1")
            .send()
            .await?;
        let state = cancelled.status.map(|s| s.state).unwrap_or_default();
        assert!(state.is_terminal(), "{state:?}");
        Ok(())
    }

    #[tokio::test]
    async fn instantiate_workflow_template_errors() -> TestResult {
        let mut mock = MockWorkflowTemplateService::new();
        mock.expect_instantiate_workflow_template()
            .return_once(|_, _| {
                Ok(lro::model::Operation::default()
                    .set_name("operations/wf-001")
                    .set_done(true)
                    .set_result(lro::model::operation::Result::Error(
                        gax::error::rpc::Status::default()
                            .set_code(gax::error::rpc::Code::NotFound)
                            .set_message("template not found"),
                    )))
            });

        let client = WorkflowTemplateService::from_stub(mock);
        let name = crate::paths::workflow_template_path("test-project", "us-central1", "nightly")?;
        let err = client
            .instantiate_workflow_template(name)
            .poller()
            .until_done()
            .await
            .unwrap_err();
        let status = err.status().cloned().unwrap_or_default();
        assert_eq!(status.code, gax::error::rpc::Code::NotFound);
        Ok(())
    }

    #[tokio::test]
    async fn disconnected_clients() -> TestResult {
        let client = ClusterController::builder()
            .with_credentials(auth::credentials::Credentials::anonymous())
            .with_project("test-project")
            .build()
            .await?;
        assert!(!client.is_connected());
        assert_eq!(client.project(), Some("test-project"));
        let err = client
            .get_cluster("test-project", "us-central1", "c1")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_no_connection(), "{err:?}");

        let jobs = JobController::builder()
            .with_credentials(auth::credentials::Credentials::anonymous())
            .build()
            .await?;
        let err = jobs
            .delete_job("test-project", "us-central1", "j1")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_no_connection(), "{err:?}");
        Ok(())
    }
}
