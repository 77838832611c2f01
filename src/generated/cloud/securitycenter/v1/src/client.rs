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

const SERVICE: &str = "SECURITYCENTER";

/// Implements a client for the Security Command Center API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use google_cloud_securitycenter_v1::client::SecurityCenter;
/// # use google_cloud_securitycenter_v1::paths;
/// let client = SecurityCenter::builder().build().await?;
/// let parent = paths::source_path("123", "-")?;
/// let mut findings = client.list_findings(parent).set_filter("state=\"ACTIVE\"").by_item();
/// while let Some(result) = findings.next().await {
///     println!("{:?}", result?.finding);
/// }
/// # anyhow::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// V1 APIs for Security Center service.
///
/// # Configuration
///
/// To configure `SecurityCenter` use the `with_*` methods in the type returned
/// by [builder()][SecurityCenter::builder].
///
/// # Pooling and Cloning
///
/// `SecurityCenter` holds a connection pool internally, it is advised to
/// create one and the reuse it.  You do not need to wrap `SecurityCenter` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally.
#[derive(Clone, Debug)]
pub struct SecurityCenter {
    inner: Option<Arc<dyn super::stub::SecurityCenter>>,
    options: RequestOptions,
    project: Option<String>,
}

impl SecurityCenter {
    /// Returns a builder for [SecurityCenter].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use google_cloud_securitycenter_v1::client::SecurityCenter;
    /// let client = SecurityCenter::builder()
    ///     .with_credentials(auth::credentials::Credentials::anonymous())
    ///     .build()
    ///     .await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::security_center::ClientBuilder {
        gax::client_builder::internal::new_builder(
            super::builder::security_center::client::Factory,
        )
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::SecurityCenter + 'static,
    {
        Self {
            inner: Some(Arc::new(stub)),
            options: RequestOptions::default(),
            project: None,
        }
    }

    pub(crate) async fn new(
        config: ClientConfig<auth::credentials::Credentials>,
        transport: Option<Arc<dyn super::stub::SecurityCenter>>,
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
                Arc::new(super::tracing::SecurityCenter::new(t))
                    as Arc<dyn super::stub::SecurityCenter>
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

    /// Creates a source.
    pub fn create_source(
        &self,
        parent: impl Into<String>,
        source: impl Into<model::Source>,
    ) -> super::builder::security_center::CreateSource {
        super::builder::security_center::CreateSource::new(
            self.inner.clone(),
            self.options.clone(),
        )
        .set_parent(parent)
        .set_source(source)
    }

    /// Creates a finding. The corresponding source must exist for finding
    /// creation to succeed.
    pub fn create_finding(
        &self,
        parent: impl Into<String>,
        finding_id: impl Into<String>,
        finding: impl Into<model::Finding>,
    ) -> super::builder::security_center::CreateFinding {
        super::builder::security_center::CreateFinding::new(
            self.inner.clone(),
            self.options.clone(),
        )
        .set_parent(parent)
        .set_finding_id(finding_id)
        .set_finding(finding)
    }

    /// Gets a source.
    pub fn get_source(
        &self,
        name: impl Into<String>,
    ) -> super::builder::security_center::GetSource {
        super::builder::security_center::GetSource::new(self.inner.clone(), self.options.clone())
            .set_name(name)
    }

    /// Gets the settings for an organization.
    pub fn get_organization_settings(
        &self,
        name: impl Into<String>,
    ) -> super::builder::security_center::GetOrganizationSettings {
        super::builder::security_center::GetOrganizationSettings::new(
            self.inner.clone(),
            self.options.clone(),
        )
        .set_name(name)
    }

    /// Lists all sources belonging to an organization.
    pub fn list_sources(
        &self,
        parent: impl Into<String>,
    ) -> super::builder::security_center::ListSources {
        super::builder::security_center::ListSources::new(
            self.inner.clone(),
            self.options.clone(),
        )
        .set_parent(parent)
    }

    /// Lists an organization or source's findings.
    ///
    /// To list across all sources provide a `-` as the source id, for example
    /// `organizations/{organization_id}/sources/-`.
    pub fn list_findings(
        &self,
        parent: impl Into<String>,
    ) -> super::builder::security_center::ListFindings {
        super::builder::security_center::ListFindings::new(
            self.inner.clone(),
            self.options.clone(),
        )
        .set_parent(parent)
    }

    /// Lists an organization's assets.
    pub fn list_assets(
        &self,
        parent: impl Into<String>,
    ) -> super::builder::security_center::ListAssets {
        super::builder::security_center::ListAssets::new(self.inner.clone(), self.options.clone())
            .set_parent(parent)
    }

    /// Filters an organization or source's findings and groups them by their
    /// specified properties.
    pub fn group_findings(
        &self,
        parent: impl Into<String>,
        group_by: impl Into<String>,
    ) -> super::builder::security_center::GroupFindings {
        super::builder::security_center::GroupFindings::new(
            self.inner.clone(),
            self.options.clone(),
        )
        .set_parent(parent)
        .set_group_by(group_by)
    }

    /// Runs asset discovery. The discovery is tracked with a long-running
    /// operation.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// The operation resolves to a
    /// [RunAssetDiscoveryResponse][model::RunAssetDiscoveryResponse].
    ///
    /// [long-running operation]: https://google.aip.dev/151
    pub fn run_asset_discovery(
        &self,
        parent: impl Into<String>,
    ) -> super::builder::security_center::RunAssetDiscovery {
        super::builder::security_center::RunAssetDiscovery::new(
            self.inner.clone(),
            self.options.clone(),
        )
        .set_parent(parent)
    }

    /// Updates the state of a finding.
    pub fn set_finding_state(
        &self,
        name: impl Into<String>,
        state: impl Into<model::finding::State>,
        start_time: impl Into<String>,
    ) -> super::builder::security_center::SetFindingState {
        super::builder::security_center::SetFindingState::new(
            self.inner.clone(),
            self.options.clone(),
        )
        .set_name(name)
        .set_state(state)
        .set_start_time(start_time)
    }

    /// Creates or updates a finding.
    ///
    /// The corresponding source must exist for a finding creation to succeed.
    pub fn update_finding(
        &self,
        finding: impl Into<model::Finding>,
    ) -> super::builder::security_center::UpdateFinding {
        super::builder::security_center::UpdateFinding::new(
            self.inner.clone(),
            self.options.clone(),
        )
        .set_finding(finding)
    }

    /// Updates a source.
    pub fn update_source(
        &self,
        source: impl Into<model::Source>,
    ) -> super::builder::security_center::UpdateSource {
        super::builder::security_center::UpdateSource::new(
            self.inner.clone(),
            self.options.clone(),
        )
        .set_source(source)
    }

    /// Updates an organization's settings.
    pub fn update_organization_settings(
        &self,
        organization_settings: impl Into<model::OrganizationSettings>,
    ) -> super::builder::security_center::UpdateOrganizationSettings {
        super::builder::security_center::UpdateOrganizationSettings::new(
            self.inner.clone(),
            self.options.clone(),
        )
        .set_organization_settings(organization_settings)
    }

    /// Updates security marks.
    pub fn update_security_marks(
        &self,
        security_marks: impl Into<model::SecurityMarks>,
    ) -> super::builder::security_center::UpdateSecurityMarks {
        super::builder::security_center::UpdateSecurityMarks::new(
            self.inner.clone(),
            self.options.clone(),
        )
        .set_security_marks(security_marks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paths;
    use crate::stub::tests::MockSecurityCenter;
    use lro::Poller;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    type TestResult = anyhow::Result<()>;

    #[tokio::test]
    async fn create_source_and_finding() -> TestResult {
        let mut mock = MockSecurityCenter::new();
        mock.expect_create_source()
            .withf(|r, _| {
                r.parent == "organizations/123"
                    && r.source.as_ref().map(|s| s.display_name.as_str()) == Some("scanner")
            })
            .return_once(|r, _| {
                Ok(r.source
                    .unwrap_or_default()
                    .set_name("organizations/123/sources/456"))
            });
        mock.expect_create_finding()
            .withf(|r, _| r.parent == "organizations/123/sources/456" && r.finding_id == "f1")
            .return_once(|r, _| {
                Ok(r.finding
                    .unwrap_or_default()
                    .set_name("organizations/123/sources/456/findings/f1"))
            });

        let client = SecurityCenter::from_stub(mock);
        let source = client
            .create_source(
                paths::organization_path("123")?,
                model::Source::default().set_display_name("scanner"),
            )
            .send()
            .await?;
        assert_eq!(source.name, "organizations/123/sources/456");

        let finding = client
            .create_finding(
                &source.name,
                "f1",
                model::Finding::default()
                    .set_state(model::finding::State::Active)
                    .set_category("MEDIUM_RISK_ONE")
                    .set_resource_name("//cloudresourcemanager.googleapis.com/projects/p1"),
            )
            .send()
            .await?;
        assert_eq!(finding.name, paths::finding_path("123", "456", "f1")?);
        assert_eq!(finding.state, model::finding::State::Active);
        Ok(())
    }

    #[tokio::test]
    async fn list_findings_across_pages() -> TestResult {
        let mut mock = MockSecurityCenter::new();
        mock.expect_list_findings()
            .withf(|r, _| {
                r.page_token.is_empty()
                    && r.parent == "organizations/123/sources/-"
                    && r.compare_duration == Some(Duration::from_secs(3600))
            })
            .return_once(|_, _| {
                Ok(model::ListFindingsResponse::default()
                    .set_list_findings_results([
                        model::list_findings_response::ListFindingsResult::default()
                            .set_finding(model::Finding::default().set_name("f1")),
                    ])
                    .set_next_page_token("page-2"))
            });
        mock.expect_list_findings()
            .withf(|r, _| r.page_token == "page-2")
            .return_once(|_, _| {
                Ok(model::ListFindingsResponse::default().set_list_findings_results([
                    model::list_findings_response::ListFindingsResult::default()
                        .set_finding(model::Finding::default().set_name("f2"))
                        .set_state_change(
                            model::list_findings_response::list_findings_result::StateChange::Added,
                        ),
                ]))
            });

        let client = SecurityCenter::from_stub(mock);
        let mut items = client
            .list_findings(paths::source_path("123", "-")?)
            .set_compare_duration(Duration::from_secs(3600))
            .by_item();
        let mut names = Vec::new();
        while let Some(result) = items.next().await {
            names.push(result?.finding.map(|f| f.name).unwrap_or_default());
        }
        assert_eq!(names, vec!["f1", "f2"]);
        Ok(())
    }

    #[tokio::test]
    async fn group_findings_by_category() -> TestResult {
        let mut mock = MockSecurityCenter::new();
        mock.expect_group_findings()
            .withf(|r, _| r.group_by == "category")
            .return_once(|_, _| {
                Ok(model::GroupFindingsResponse::default().set_group_by_results([
                    model::GroupResult::default()
                        .set_properties([("category", "OPEN_FIREWALL")])
                        .set_count(3),
                    model::GroupResult::default()
                        .set_properties([("category", "PUBLIC_BUCKET")])
                        .set_count(1),
                ]))
            });

        let client = SecurityCenter::from_stub(mock);
        let mut groups = client
            .group_findings("organizations/123/sources/-", "category")
            .by_item();
        let mut total = 0;
        while let Some(group) = groups.next().await {
            total += group?.count;
        }
        assert_eq!(total, 4);
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn run_asset_discovery_until_done() -> TestResult {
        let mut mock = MockSecurityCenter::new();
        mock.expect_run_asset_discovery()
            .withf(|r, _| r.parent == "organizations/123")
            .return_once(|_, _| {
                Ok(lro::model::Operation::default().set_name("organizations/123/operations/d1"))
            });
        let response = model::RunAssetDiscoveryResponse::default()
            .set_state(model::run_asset_discovery_response::State::Completed)
            .set_duration(Duration::from_secs(90));
        let any = lro::to_any(&response)?;
        mock.expect_get_operation()
            .withf(|r, _| r.name == "organizations/123/operations/d1")
            .return_once(move |_, _| {
                Ok(lro::model::Operation::default()
                    .set_name("organizations/123/operations/d1")
                    .set_done(true)
                    .set_result(lro::model::operation::Result::Response(any)))
            });

        let client = SecurityCenter::from_stub(mock);
        let got = client
            .run_asset_discovery("organizations/123")
            .poller()
            .until_done()
            .await?;
        assert_eq!(got, response);
        Ok(())
    }

    #[tokio::test]
    async fn set_finding_state_and_marks() -> TestResult {
        let mut mock = MockSecurityCenter::new();
        mock.expect_set_finding_state()
            .withf(|r, _| {
                r.state == model::finding::State::Inactive
                    && r.start_time.as_deref() == Some("2024-03-01T00:00:00Z")
            })
            .return_once(|r, _| {
                Ok(model::Finding::default()
                    .set_name(r.name)
                    .set_state(r.state))
            });
        mock.expect_update_security_marks()
            .withf(|r, _| {
                r.update_mask.as_ref().map(|m| m.paths.clone())
                    == Some(vec!["marks.triage".to_string()])
            })
            .return_once(|r, _| Ok(r.security_marks.unwrap_or_default()));

        let client = SecurityCenter::from_stub(mock);
        let name = paths::finding_path("123", "456", "f1")?;
        let finding = client
            .set_finding_state(&name, model::finding::State::Inactive, "2024-03-01T00:00:00Z")
            .send()
            .await?;
        assert_eq!(finding.state, model::finding::State::Inactive);

        let marks = client
            .update_security_marks(
                model::SecurityMarks::default()
                    .set_name(paths::finding_security_marks_path("123", "456", "f1")?)
                    .set_marks([("triage", "done")]),
            )
            .set_update_mask(model::FieldMask::default().set_paths(["marks.triage"]))
            .send()
            .await?;
        assert_eq!(marks.marks.get("triage").map(String::as_str), Some("done"));
        Ok(())
    }

    #[tokio::test]
    async fn organization_settings_errors() -> TestResult {
        let mut mock = MockSecurityCenter::new();
        mock.expect_get_organization_settings().return_once(|_, _| {
            Err(gax::error::Error::service(
                gax::error::rpc::Status::default()
                    .set_code(gax::error::rpc::Code::NotFound)
                    .set_message("no settings"),
            ))
        });

        let client = SecurityCenter::from_stub(mock);
        let err = client
            .get_organization_settings(paths::organization_settings_path("123")?)
            .send()
            .await
            .unwrap_err();
        let status = err.status().cloned().unwrap_or_default();
        assert_eq!(status.code, gax::error::rpc::Code::NotFound);
        Ok(())
    }

    #[tokio::test]
    async fn disconnected() -> TestResult {
        let client = SecurityCenter::builder()
            .with_credentials(auth::credentials::Credentials::anonymous())
            .build()
            .await?;
        assert!(!client.is_connected());
        let err = client
            .list_sources("organizations/123")
            .send()
            .await
            .unwrap_err();
        assert!(err.is_no_connection(), "{err:?}");
        Ok(())
    }
}
