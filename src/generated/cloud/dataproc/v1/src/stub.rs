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
use gax::options::RequestOptions;
use lro::stub::unimplemented_stub;
use std::sync::Arc;

/// Defines the trait used to implement [crate::client::ClusterController].
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
#[async_trait::async_trait]
pub trait ClusterController: lro::stub::Operations + std::fmt::Debug + Send + Sync {
    /// Implements [crate::client::ClusterController::create_cluster].
    async fn create_cluster(
        &self,
        _req: model::CreateClusterRequest,
        _options: RequestOptions,
    ) -> Result<lro::model::Operation> {
        unimplemented_stub("create_cluster")
    }

    /// Implements [crate::client::ClusterController::update_cluster].
    async fn update_cluster(
        &self,
        _req: model::UpdateClusterRequest,
        _options: RequestOptions,
    ) -> Result<lro::model::Operation> {
        unimplemented_stub("update_cluster")
    }

    /// Implements [crate::client::ClusterController::delete_cluster].
    async fn delete_cluster(
        &self,
        _req: model::DeleteClusterRequest,
        _options: RequestOptions,
    ) -> Result<lro::model::Operation> {
        unimplemented_stub("delete_cluster")
    }

    /// Implements [crate::client::ClusterController::get_cluster].
    async fn get_cluster(
        &self,
        _req: model::GetClusterRequest,
        _options: RequestOptions,
    ) -> Result<model::Cluster> {
        unimplemented_stub("get_cluster")
    }

    /// Implements [crate::client::ClusterController::list_clusters].
    async fn list_clusters(
        &self,
        _req: model::ListClustersRequest,
        _options: RequestOptions,
    ) -> Result<model::ListClustersResponse> {
        unimplemented_stub("list_clusters")
    }

    /// Implements [crate::client::ClusterController::diagnose_cluster].
    async fn diagnose_cluster(
        &self,
        _req: model::DiagnoseClusterRequest,
        _options: RequestOptions,
    ) -> Result<lro::model::Operation> {
        unimplemented_stub("diagnose_cluster")
    }
}

/// Defines the trait used to implement [crate::client::JobController].
#[async_trait::async_trait]
pub trait JobController: std::fmt::Debug + Send + Sync {
    /// Implements [crate::client::JobController::submit_job].
    async fn submit_job(
        &self,
        _req: model::SubmitJobRequest,
        _options: RequestOptions,
    ) -> Result<model::Job> {
        unimplemented_stub("submit_job")
    }

    /// Implements [crate::client::JobController::get_job].
    async fn get_job(
        &self,
        _req: model::GetJobRequest,
        _options: RequestOptions,
    ) -> Result<model::Job> {
        unimplemented_stub("get_job")
    }

    /// Implements [crate::client::JobController::list_jobs].
    async fn list_jobs(
        &self,
        _req: model::ListJobsRequest,
        _options: RequestOptions,
    ) -> Result<model::ListJobsResponse> {
        unimplemented_stub("list_jobs")
    }

    /// Implements [crate::client::JobController::update_job].
    async fn update_job(
        &self,
        _req: model::UpdateJobRequest,
        _options: RequestOptions,
    ) -> Result<model::Job> {
        unimplemented_stub("update_job")
    }

    /// Implements [crate::client::JobController::cancel_job].
    async fn cancel_job(
        &self,
        _req: model::CancelJobRequest,
        _options: RequestOptions,
    ) -> Result<model::Job> {
        unimplemented_stub("cancel_job")
    }

    /// Implements [crate::client::JobController::delete_job].
    async fn delete_job(
        &self,
        _req: model::DeleteJobRequest,
        _options: RequestOptions,
    ) -> Result<()> {
        unimplemented_stub("delete_job")
    }
}

/// Defines the trait used to implement [crate::client::WorkflowTemplateService].
#[async_trait::async_trait]
pub trait WorkflowTemplateService: lro::stub::Operations + std::fmt::Debug + Send + Sync {
    /// Implements [crate::client::WorkflowTemplateService::create_workflow_template].
    async fn create_workflow_template(
        &self,
        _req: model::CreateWorkflowTemplateRequest,
        _options: RequestOptions,
    ) -> Result<model::WorkflowTemplate> {
        unimplemented_stub("create_workflow_template")
    }

    /// Implements [crate::client::WorkflowTemplateService::get_workflow_template].
    async fn get_workflow_template(
        &self,
        _req: model::GetWorkflowTemplateRequest,
        _options: RequestOptions,
    ) -> Result<model::WorkflowTemplate> {
        unimplemented_stub("get_workflow_template")
    }

    /// Implements [crate::client::WorkflowTemplateService::instantiate_workflow_template].
    async fn instantiate_workflow_template(
        &self,
        _req: model::InstantiateWorkflowTemplateRequest,
        _options: RequestOptions,
    ) -> Result<lro::model::Operation> {
        unimplemented_stub("instantiate_workflow_template")
    }

    /// Implements [crate::client::WorkflowTemplateService::instantiate_inline_workflow_template].
    async fn instantiate_inline_workflow_template(
        &self,
        _req: model::InstantiateInlineWorkflowTemplateRequest,
        _options: RequestOptions,
    ) -> Result<lro::model::Operation> {
        unimplemented_stub("instantiate_inline_workflow_template")
    }

    /// Implements [crate::client::WorkflowTemplateService::update_workflow_template].
    async fn update_workflow_template(
        &self,
        _req: model::UpdateWorkflowTemplateRequest,
        _options: RequestOptions,
    ) -> Result<model::WorkflowTemplate> {
        unimplemented_stub("update_workflow_template")
    }

    /// Implements [crate::client::WorkflowTemplateService::list_workflow_templates].
    async fn list_workflow_templates(
        &self,
        _req: model::ListWorkflowTemplatesRequest,
        _options: RequestOptions,
    ) -> Result<model::ListWorkflowTemplatesResponse> {
        unimplemented_stub("list_workflow_templates")
    }

    /// Implements [crate::client::WorkflowTemplateService::delete_workflow_template].
    async fn delete_workflow_template(
        &self,
        _req: model::DeleteWorkflowTemplateRequest,
        _options: RequestOptions,
    ) -> Result<()> {
        unimplemented_stub("delete_workflow_template")
    }
}

#[async_trait::async_trait]
impl<T> ClusterController for Arc<T>
where
    T: ClusterController + ?Sized,
{
    async fn create_cluster(
        &self,
        req: model::CreateClusterRequest,
        options: RequestOptions,
    ) -> Result<lro::model::Operation> {
        (**self).create_cluster(req, options).await
    }

    async fn update_cluster(
        &self,
        req: model::UpdateClusterRequest,
        options: RequestOptions,
    ) -> Result<lro::model::Operation> {
        (**self).update_cluster(req, options).await
    }

    async fn delete_cluster(
        &self,
        req: model::DeleteClusterRequest,
        options: RequestOptions,
    ) -> Result<lro::model::Operation> {
        (**self).delete_cluster(req, options).await
    }

    async fn get_cluster(
        &self,
        req: model::GetClusterRequest,
        options: RequestOptions,
    ) -> Result<model::Cluster> {
        (**self).get_cluster(req, options).await
    }

    async fn list_clusters(
        &self,
        req: model::ListClustersRequest,
        options: RequestOptions,
    ) -> Result<model::ListClustersResponse> {
        (**self).list_clusters(req, options).await
    }

    async fn diagnose_cluster(
        &self,
        req: model::DiagnoseClusterRequest,
        options: RequestOptions,
    ) -> Result<lro::model::Operation> {
        (**self).diagnose_cluster(req, options).await
    }
}

#[async_trait::async_trait]
impl<T> JobController for Arc<T>
where
    T: JobController + ?Sized,
{
    async fn submit_job(
        &self,
        req: model::SubmitJobRequest,
        options: RequestOptions,
    ) -> Result<model::Job> {
        (**self).submit_job(req, options).await
    }

    async fn get_job(&self, req: model::GetJobRequest, options: RequestOptions) -> Result<model::Job> {
        (**self).get_job(req, options).await
    }

    async fn list_jobs(
        &self,
        req: model::ListJobsRequest,
        options: RequestOptions,
    ) -> Result<model::ListJobsResponse> {
        (**self).list_jobs(req, options).await
    }

    async fn update_job(
        &self,
        req: model::UpdateJobRequest,
        options: RequestOptions,
    ) -> Result<model::Job> {
        (**self).update_job(req, options).await
    }

    async fn cancel_job(
        &self,
        req: model::CancelJobRequest,
        options: RequestOptions,
    ) -> Result<model::Job> {
        (**self).cancel_job(req, options).await
    }

    async fn delete_job(&self, req: model::DeleteJobRequest, options: RequestOptions) -> Result<()> {
        (**self).delete_job(req, options).await
    }
}

#[async_trait::async_trait]
impl<T> WorkflowTemplateService for Arc<T>
where
    T: WorkflowTemplateService + ?Sized,
{
    async fn create_workflow_template(
        &self,
        req: model::CreateWorkflowTemplateRequest,
        options: RequestOptions,
    ) -> Result<model::WorkflowTemplate> {
        (**self).create_workflow_template(req, options).await
    }

    async fn get_workflow_template(
        &self,
        req: model::GetWorkflowTemplateRequest,
        options: RequestOptions,
    ) -> Result<model::WorkflowTemplate> {
        (**self).get_workflow_template(req, options).await
    }

    async fn instantiate_workflow_template(
        &self,
        req: model::InstantiateWorkflowTemplateRequest,
        options: RequestOptions,
    ) -> Result<lro::model::Operation> {
        (**self).instantiate_workflow_template(req, options).await
    }

    async fn instantiate_inline_workflow_template(
        &self,
        req: model::InstantiateInlineWorkflowTemplateRequest,
        options: RequestOptions,
    ) -> Result<lro::model::Operation> {
        (**self)
            .instantiate_inline_workflow_template(req, options)
            .await
    }

    async fn update_workflow_template(
        &self,
        req: model::UpdateWorkflowTemplateRequest,
        options: RequestOptions,
    ) -> Result<model::WorkflowTemplate> {
        (**self).update_workflow_template(req, options).await
    }

    async fn list_workflow_templates(
        &self,
        req: model::ListWorkflowTemplatesRequest,
        options: RequestOptions,
    ) -> Result<model::ListWorkflowTemplatesResponse> {
        (**self).list_workflow_templates(req, options).await
    }

    async fn delete_workflow_template(
        &self,
        req: model::DeleteWorkflowTemplateRequest,
        options: RequestOptions,
    ) -> Result<()> {
        (**self).delete_workflow_template(req, options).await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    mockall::mock! {
        #[derive(Debug)]
        pub(crate) ClusterController {}
        #[async_trait::async_trait]
        impl lro::stub::Operations for ClusterController {
            async fn get_operation(&self, req: lro::model::GetOperationRequest, options: RequestOptions) -> Result<lro::model::Operation>;
        }
        #[async_trait::async_trait]
        impl super::ClusterController for ClusterController {
            async fn create_cluster(&self, req: model::CreateClusterRequest, options: RequestOptions) -> Result<lro::model::Operation>;
            async fn delete_cluster(&self, req: model::DeleteClusterRequest, options: RequestOptions) -> Result<lro::model::Operation>;
            async fn get_cluster(&self, req: model::GetClusterRequest, options: RequestOptions) -> Result<model::Cluster>;
            async fn list_clusters(&self, req: model::ListClustersRequest, options: RequestOptions) -> Result<model::ListClustersResponse>;
            async fn diagnose_cluster(&self, req: model::DiagnoseClusterRequest, options: RequestOptions) -> Result<lro::model::Operation>;
        }
    }

    mockall::mock! {
        #[derive(Debug)]
        pub(crate) JobController {}
        #[async_trait::async_trait]
        impl super::JobController for JobController {
            async fn submit_job(&self, req: model::SubmitJobRequest, options: RequestOptions) -> Result<model::Job>;
            async fn get_job(&self, req: model::GetJobRequest, options: RequestOptions) -> Result<model::Job>;
            async fn list_jobs(&self, req: model::ListJobsRequest, options: RequestOptions) -> Result<model::ListJobsResponse>;
            async fn cancel_job(&self, req: model::CancelJobRequest, options: RequestOptions) -> Result<model::Job>;
        }
    }

    mockall::mock! {
        #[derive(Debug)]
        pub(crate) WorkflowTemplateService {}
        #[async_trait::async_trait]
        impl lro::stub::Operations for WorkflowTemplateService {
            async fn get_operation(&self, req: lro::model::GetOperationRequest, options: RequestOptions) -> Result<lro::model::Operation>;
        }
        #[async_trait::async_trait]
        impl super::WorkflowTemplateService for WorkflowTemplateService {
            async fn instantiate_workflow_template(&self, req: model::InstantiateWorkflowTemplateRequest, options: RequestOptions) -> Result<lro::model::Operation>;
            async fn list_workflow_templates(&self, req: model::ListWorkflowTemplatesRequest, options: RequestOptions) -> Result<model::ListWorkflowTemplatesResponse>;
        }
    }

    #[derive(Debug)]
    struct Empty;
    impl JobController for Empty {}

    #[tokio::test]
    async fn defaults_are_unimplemented() {
        let stub: Arc<dyn JobController> = Arc::new(Empty);
        let got = stub
            .delete_job(model::DeleteJobRequest::default(), RequestOptions::default())
            .await;
        assert!(matches!(got, Err(ref e) if e.status().is_some()), "{got:?}");
    }
}
