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

/// Implements a [SecurityCenter](super::stub::SecurityCenter) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct SecurityCenter<T>
where
    T: super::stub::SecurityCenter + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> SecurityCenter<T>
where
    T: super::stub::SecurityCenter + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

operations_decorator!(SecurityCenter, super::stub::SecurityCenter);

#[async_trait::async_trait]
impl<T> super::stub::SecurityCenter for SecurityCenter<T>
where
    T: super::stub::SecurityCenter + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn create_source(
        &self,
        req: model::CreateSourceRequest,
        options: RequestOptions,
    ) -> Result<model::Source> {
        self.inner.create_source(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn create_finding(
        &self,
        req: model::CreateFindingRequest,
        options: RequestOptions,
    ) -> Result<model::Finding> {
        self.inner.create_finding(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_source(
        &self,
        req: model::GetSourceRequest,
        options: RequestOptions,
    ) -> Result<model::Source> {
        self.inner.get_source(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_organization_settings(
        &self,
        req: model::GetOrganizationSettingsRequest,
        options: RequestOptions,
    ) -> Result<model::OrganizationSettings> {
        self.inner.get_organization_settings(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_sources(
        &self,
        req: model::ListSourcesRequest,
        options: RequestOptions,
    ) -> Result<model::ListSourcesResponse> {
        self.inner.list_sources(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_findings(
        &self,
        req: model::ListFindingsRequest,
        options: RequestOptions,
    ) -> Result<model::ListFindingsResponse> {
        self.inner.list_findings(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_assets(
        &self,
        req: model::ListAssetsRequest,
        options: RequestOptions,
    ) -> Result<model::ListAssetsResponse> {
        self.inner.list_assets(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn group_findings(
        &self,
        req: model::GroupFindingsRequest,
        options: RequestOptions,
    ) -> Result<model::GroupFindingsResponse> {
        self.inner.group_findings(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn run_asset_discovery(
        &self,
        req: model::RunAssetDiscoveryRequest,
        options: RequestOptions,
    ) -> Result<lro::model::Operation> {
        self.inner.run_asset_discovery(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn set_finding_state(
        &self,
        req: model::SetFindingStateRequest,
        options: RequestOptions,
    ) -> Result<model::Finding> {
        self.inner.set_finding_state(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_finding(
        &self,
        req: model::UpdateFindingRequest,
        options: RequestOptions,
    ) -> Result<model::Finding> {
        self.inner.update_finding(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_source(
        &self,
        req: model::UpdateSourceRequest,
        options: RequestOptions,
    ) -> Result<model::Source> {
        self.inner.update_source(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_organization_settings(
        &self,
        req: model::UpdateOrganizationSettingsRequest,
        options: RequestOptions,
    ) -> Result<model::OrganizationSettings> {
        self.inner.update_organization_settings(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn update_security_marks(
        &self,
        req: model::UpdateSecurityMarksRequest,
        options: RequestOptions,
    ) -> Result<model::SecurityMarks> {
        self.inner.update_security_marks(req, options).await
    }
}
