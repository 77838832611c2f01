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

/// Defines the trait used to implement [crate::client::SecurityCenter].
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
#[async_trait::async_trait]
pub trait SecurityCenter: lro::stub::Operations + std::fmt::Debug + Send + Sync {
    /// Implements [crate::client::SecurityCenter::create_source].
    async fn create_source(
        &self,
        _req: model::CreateSourceRequest,
        _options: RequestOptions,
    ) -> Result<model::Source> {
        unimplemented_stub("create_source")
    }

    /// Implements [crate::client::SecurityCenter::create_finding].
    async fn create_finding(
        &self,
        _req: model::CreateFindingRequest,
        _options: RequestOptions,
    ) -> Result<model::Finding> {
        unimplemented_stub("create_finding")
    }

    /// Implements [crate::client::SecurityCenter::get_source].
    async fn get_source(
        &self,
        _req: model::GetSourceRequest,
        _options: RequestOptions,
    ) -> Result<model::Source> {
        unimplemented_stub("get_source")
    }

    /// Implements [crate::client::SecurityCenter::get_organization_settings].
    async fn get_organization_settings(
        &self,
        _req: model::GetOrganizationSettingsRequest,
        _options: RequestOptions,
    ) -> Result<model::OrganizationSettings> {
        unimplemented_stub("get_organization_settings")
    }

    /// Implements [crate::client::SecurityCenter::list_sources].
    async fn list_sources(
        &self,
        _req: model::ListSourcesRequest,
        _options: RequestOptions,
    ) -> Result<model::ListSourcesResponse> {
        unimplemented_stub("list_sources")
    }

    /// Implements [crate::client::SecurityCenter::list_findings].
    async fn list_findings(
        &self,
        _req: model::ListFindingsRequest,
        _options: RequestOptions,
    ) -> Result<model::ListFindingsResponse> {
        unimplemented_stub("list_findings")
    }

    /// Implements [crate::client::SecurityCenter::list_assets].
    async fn list_assets(
        &self,
        _req: model::ListAssetsRequest,
        _options: RequestOptions,
    ) -> Result<model::ListAssetsResponse> {
        unimplemented_stub("list_assets")
    }

    /// Implements [crate::client::SecurityCenter::group_findings].
    async fn group_findings(
        &self,
        _req: model::GroupFindingsRequest,
        _options: RequestOptions,
    ) -> Result<model::GroupFindingsResponse> {
        unimplemented_stub("group_findings")
    }

    /// Implements [crate::client::SecurityCenter::run_asset_discovery].
    async fn run_asset_discovery(
        &self,
        _req: model::RunAssetDiscoveryRequest,
        _options: RequestOptions,
    ) -> Result<lro::model::Operation> {
        unimplemented_stub("run_asset_discovery")
    }

    /// Implements [crate::client::SecurityCenter::set_finding_state].
    async fn set_finding_state(
        &self,
        _req: model::SetFindingStateRequest,
        _options: RequestOptions,
    ) -> Result<model::Finding> {
        unimplemented_stub("set_finding_state")
    }

    /// Implements [crate::client::SecurityCenter::update_finding].
    async fn update_finding(
        &self,
        _req: model::UpdateFindingRequest,
        _options: RequestOptions,
    ) -> Result<model::Finding> {
        unimplemented_stub("update_finding")
    }

    /// Implements [crate::client::SecurityCenter::update_source].
    async fn update_source(
        &self,
        _req: model::UpdateSourceRequest,
        _options: RequestOptions,
    ) -> Result<model::Source> {
        unimplemented_stub("update_source")
    }

    /// Implements [crate::client::SecurityCenter::update_organization_settings].
    async fn update_organization_settings(
        &self,
        _req: model::UpdateOrganizationSettingsRequest,
        _options: RequestOptions,
    ) -> Result<model::OrganizationSettings> {
        unimplemented_stub("update_organization_settings")
    }

    /// Implements [crate::client::SecurityCenter::update_security_marks].
    async fn update_security_marks(
        &self,
        _req: model::UpdateSecurityMarksRequest,
        _options: RequestOptions,
    ) -> Result<model::SecurityMarks> {
        unimplemented_stub("update_security_marks")
    }
}

#[async_trait::async_trait]
impl<T> SecurityCenter for Arc<T>
where
    T: SecurityCenter + ?Sized,
{
    async fn create_source(
        &self,
        req: model::CreateSourceRequest,
        options: RequestOptions,
    ) -> Result<model::Source> {
        (**self).create_source(req, options).await
    }

    async fn create_finding(
        &self,
        req: model::CreateFindingRequest,
        options: RequestOptions,
    ) -> Result<model::Finding> {
        (**self).create_finding(req, options).await
    }

    async fn get_source(
        &self,
        req: model::GetSourceRequest,
        options: RequestOptions,
    ) -> Result<model::Source> {
        (**self).get_source(req, options).await
    }

    async fn get_organization_settings(
        &self,
        req: model::GetOrganizationSettingsRequest,
        options: RequestOptions,
    ) -> Result<model::OrganizationSettings> {
        (**self).get_organization_settings(req, options).await
    }

    async fn list_sources(
        &self,
        req: model::ListSourcesRequest,
        options: RequestOptions,
    ) -> Result<model::ListSourcesResponse> {
        (**self).list_sources(req, options).await
    }

    async fn list_findings(
        &self,
        req: model::ListFindingsRequest,
        options: RequestOptions,
    ) -> Result<model::ListFindingsResponse> {
        (**self).list_findings(req, options).await
    }

    async fn list_assets(
        &self,
        req: model::ListAssetsRequest,
        options: RequestOptions,
    ) -> Result<model::ListAssetsResponse> {
        (**self).list_assets(req, options).await
    }

    async fn group_findings(
        &self,
        req: model::GroupFindingsRequest,
        options: RequestOptions,
    ) -> Result<model::GroupFindingsResponse> {
        (**self).group_findings(req, options).await
    }

    async fn run_asset_discovery(
        &self,
        req: model::RunAssetDiscoveryRequest,
        options: RequestOptions,
    ) -> Result<lro::model::Operation> {
        (**self).run_asset_discovery(req, options).await
    }

    async fn set_finding_state(
        &self,
        req: model::SetFindingStateRequest,
        options: RequestOptions,
    ) -> Result<model::Finding> {
        (**self).set_finding_state(req, options).await
    }

    async fn update_finding(
        &self,
        req: model::UpdateFindingRequest,
        options: RequestOptions,
    ) -> Result<model::Finding> {
        (**self).update_finding(req, options).await
    }

    async fn update_source(
        &self,
        req: model::UpdateSourceRequest,
        options: RequestOptions,
    ) -> Result<model::Source> {
        (**self).update_source(req, options).await
    }

    async fn update_organization_settings(
        &self,
        req: model::UpdateOrganizationSettingsRequest,
        options: RequestOptions,
    ) -> Result<model::OrganizationSettings> {
        (**self).update_organization_settings(req, options).await
    }

    async fn update_security_marks(
        &self,
        req: model::UpdateSecurityMarksRequest,
        options: RequestOptions,
    ) -> Result<model::SecurityMarks> {
        (**self).update_security_marks(req, options).await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    mockall::mock! {
        #[derive(Debug)]
        pub(crate) SecurityCenter {}
        #[async_trait::async_trait]
        impl lro::stub::Operations for SecurityCenter {
            async fn get_operation(&self, req: lro::model::GetOperationRequest, options: RequestOptions) -> Result<lro::model::Operation>;
        }
        #[async_trait::async_trait]
        impl super::SecurityCenter for SecurityCenter {
            async fn create_source(&self, req: model::CreateSourceRequest, options: RequestOptions) -> Result<model::Source>;
            async fn create_finding(&self, req: model::CreateFindingRequest, options: RequestOptions) -> Result<model::Finding>;
            async fn get_organization_settings(&self, req: model::GetOrganizationSettingsRequest, options: RequestOptions) -> Result<model::OrganizationSettings>;
            async fn list_sources(&self, req: model::ListSourcesRequest, options: RequestOptions) -> Result<model::ListSourcesResponse>;
            async fn list_findings(&self, req: model::ListFindingsRequest, options: RequestOptions) -> Result<model::ListFindingsResponse>;
            async fn group_findings(&self, req: model::GroupFindingsRequest, options: RequestOptions) -> Result<model::GroupFindingsResponse>;
            async fn run_asset_discovery(&self, req: model::RunAssetDiscoveryRequest, options: RequestOptions) -> Result<lro::model::Operation>;
            async fn set_finding_state(&self, req: model::SetFindingStateRequest, options: RequestOptions) -> Result<model::Finding>;
            async fn update_security_marks(&self, req: model::UpdateSecurityMarksRequest, options: RequestOptions) -> Result<model::SecurityMarks>;
        }
    }

    #[derive(Debug)]
    struct Empty;
    impl lro::stub::Operations for Empty {}
    impl SecurityCenter for Empty {}

    #[tokio::test]
    async fn defaults_are_unimplemented() {
        let stub: Arc<dyn SecurityCenter> = Arc::new(Empty);
        let got = stub
            .update_source(model::UpdateSourceRequest::default(), RequestOptions::default())
            .await;
        assert!(matches!(got, Err(ref e) if e.status().is_some()), "{got:?}");
        let got = stub
            .get_operation(lro::model::GetOperationRequest::default(), RequestOptions::default())
            .await;
        assert!(got.is_err(), "{got:?}");
    }
}
