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

/// Implements the [lro::stub::Operations] methods of a decorator.
macro_rules! operations_decorator {
    ($name:ident, $bound:path) => {
        #[async_trait::async_trait]
        impl<T> lro::stub::Operations for $name<T>
        where
            T: $bound + std::fmt::Debug + Send + Sync,
        {
            #[tracing::instrument(ret)]
            async fn get_operation(
                &self,
                req: lro::model::GetOperationRequest,
                options: RequestOptions,
            ) -> Result<lro::model::Operation> {
                self.inner.get_operation(req, options).await
            }

            #[tracing::instrument(ret)]
            async fn cancel_operation(
                &self,
                req: lro::model::CancelOperationRequest,
                options: RequestOptions,
            ) -> Result<()> {
                self.inner.cancel_operation(req, options).await
            }

            #[tracing::instrument(ret)]
            async fn delete_operation(
                &self,
                req: lro::model::DeleteOperationRequest,
                options: RequestOptions,
            ) -> Result<()> {
                self.inner.delete_operation(req, options).await
            }
        }
    };
}

/// Implements a [ClusterController](super::stub::ClusterController) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct ClusterController<T>
where
    T: super::stub::ClusterController + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> ClusterController<T>
where
    T: super::stub::ClusterController + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

operations_decorator!(ClusterController, super::stub::ClusterController);

#[async_trait::async_trait]
impl<T> super::stub::ClusterController for ClusterController<T>
where
    T: super::stub::ClusterController + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn create_cluster(
        &self,
        req: model::CreateClusterRequest,
        options: RequestOptions,
    ) -> Result<lro::model::Operation> {
        self.inner.create_cluster(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_cluster(
        &self,
        req: model::UpdateClusterRequest,
        options: RequestOptions,
    ) -> Result<lro::model::Operation> {
        self.inner.update_cluster(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_cluster(
        &self,
        req: model::DeleteClusterRequest,
        options: RequestOptions,
    ) -> Result<lro::model::Operation> {
        self.inner.delete_cluster(req, options).await
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
    async fn list_clusters(
        &self,
        req: model::ListClustersRequest,
        options: RequestOptions,
    ) -> Result<model::ListClustersResponse> {
        self.inner.list_clusters(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn diagnose_cluster(
        &self,
        req: model::DiagnoseClusterRequest,
        options: RequestOptions,
    ) -> Result<lro::model::Operation> {
        self.inner.diagnose_cluster(req, options).await
    }
}

/// Implements a [JobController](super::stub::JobController) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct JobController<T>
where
    T: super::stub::JobController + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> JobController<T>
where
    T: super::stub::JobController + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

#[async_trait::async_trait]
impl<T> super::stub::JobController for JobController<T>
where
    T: super::stub::JobController + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn submit_job(
        &self,
        req: model::SubmitJobRequest,
        options: RequestOptions,
    ) -> Result<model::Job> {
        self.inner.submit_job(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_job(&self, req: model::GetJobRequest, options: RequestOptions) -> Result<model::Job> {
        self.inner.get_job(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_jobs(
        &self,
        req: model::ListJobsRequest,
        options: RequestOptions,
    ) -> Result<model::ListJobsResponse> {
        self.inner.list_jobs(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_job(
        &self,
        req: model::UpdateJobRequest,
        options: RequestOptions,
    ) -> Result<model::Job> {
        self.inner.update_job(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn cancel_job(
        &self,
        req: model::CancelJobRequest,
        options: RequestOptions,
    ) -> Result<model::Job> {
        self.inner.cancel_job(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_job(&self, req: model::DeleteJobRequest, options: RequestOptions) -> Result<()> {
        self.inner.delete_job(req, options).await
    }
}

/// Implements a [WorkflowTemplateService](super::stub::WorkflowTemplateService) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct WorkflowTemplateService<T>
where
    T: super::stub::WorkflowTemplateService + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> WorkflowTemplateService<T>
where
    T: super::stub::WorkflowTemplateService + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

operations_decorator!(WorkflowTemplateService, super::stub::WorkflowTemplateService);

#[async_trait::async_trait]
impl<T> super::stub::WorkflowTemplateService for WorkflowTemplateService<T>
where
    T: super::stub::WorkflowTemplateService + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn create_workflow_template(
        &self,
        req: model::CreateWorkflowTemplateRequest,
        options: RequestOptions,
    ) -> Result<model::WorkflowTemplate> {
        self.inner.create_workflow_template(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_workflow_template(
        &self,
        req: model::GetWorkflowTemplateRequest,
        options: RequestOptions,
    ) -> Result<model::WorkflowTemplate> {
        self.inner.get_workflow_template(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn instantiate_workflow_template(
        &self,
        req: model::InstantiateWorkflowTemplateRequest,
        options: RequestOptions,
    ) -> Result<lro::model::Operation> {
        self.inner.instantiate_workflow_template(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn instantiate_inline_workflow_template(
        &self,
        req: model::InstantiateInlineWorkflowTemplateRequest,
        options: RequestOptions,
    ) -> Result<lro::model::Operation> {
        self.inner
            .instantiate_inline_workflow_template(req, options)
            .await
    }

    #[tracing::instrument(ret)]
    async fn update_workflow_template(
        &self,
        req: model::UpdateWorkflowTemplateRequest,
        options: RequestOptions,
    ) -> Result<model::WorkflowTemplate> {
        self.inner.update_workflow_template(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_workflow_templates(
        &self,
        req: model::ListWorkflowTemplatesRequest,
        options: RequestOptions,
    ) -> Result<model::ListWorkflowTemplatesResponse> {
        self.inner.list_workflow_templates(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_workflow_template(
        &self,
        req: model::DeleteWorkflowTemplateRequest,
        options: RequestOptions,
    ) -> Result<()> {
        self.inner.delete_workflow_template(req, options).await
    }
}
