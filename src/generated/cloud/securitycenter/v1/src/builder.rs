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

pub mod security_center {
    use crate::Result;
    use crate::model;
    use gax::error::Error;
    use gax::options::RequestOptions;
    use gax::options::internal::with_attempt_timeout;
    use gax::paginator::{ItemPaginator, Paginator};
    use std::sync::Arc;

    /// A builder for [SecurityCenter][crate::client::SecurityCenter].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use google_cloud_securitycenter_v1::*;
    /// # use builder::security_center::ClientBuilder;
    /// # use client::SecurityCenter;
    /// let builder: ClientBuilder = SecurityCenter::builder();
    /// let client = builder
    ///     .with_endpoint("https://securitycenter.googleapis.com")
    ///     .with_credentials(auth::credentials::Credentials::anonymous())
    ///     .build()
    ///     .await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder = gax::client_builder::ClientBuilder<
        client::Factory,
        auth::credentials::Credentials,
        Arc<dyn crate::stub::SecurityCenter>,
    >;

    pub(crate) mod client {
        use super::super::super::client::SecurityCenter;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = SecurityCenter;
            type Credentials = auth::credentials::Credentials;
            type Transport = std::sync::Arc<dyn crate::stub::SecurityCenter>;
            async fn build(
                self,
                config: gax::client_builder::internal::ClientConfig<Self::Credentials>,
                transport: Option<Self::Transport>,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config, transport).await
            }
        }
    }

    /// Common implementation for [crate::client::SecurityCenter] request builders.
    #[derive(Clone, Debug)]
    pub struct RequestBuilder<R: std::default::Default> {
        stub: Option<Arc<dyn crate::stub::SecurityCenter>>,
        request: R,
        options: RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: Option<Arc<dyn crate::stub::SecurityCenter>>,
            options: RequestOptions,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options,
            }
        }

        fn connected(&self) -> Result<Arc<dyn crate::stub::SecurityCenter>> {
            self.stub.clone().ok_or_else(Error::no_connection)
        }
    }

    macro_rules! request_builder {
        ($(#[$attr:meta])* $name:ident, $request:ty, $method:ident, $response:ty) => {
            $(#[$attr])*
            #[derive(Clone, Debug)]
            pub struct $name(RequestBuilder<$request>);

            impl $name {
                pub(crate) fn new(
                    stub: Option<Arc<dyn crate::stub::SecurityCenter>>,
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

    /// Adds `by_page()` and `by_item()` to a paginated request builder.
    macro_rules! paginated {
        ($name:ident, $response:ty) => {
            impl $name {
                /// Streams the responses back.
                pub fn by_page(self) -> Paginator<$response, Error> {
                    let token = self.0.request.page_token.clone();
                    let execute = move |token: String| {
                        let builder = self.clone().set_page_token(token);
                        builder.send()
                    };
                    Paginator::new(token, execute)
                }

                /// Streams each item in the collection.
                pub fn by_item(self) -> ItemPaginator<$response, Error> {
                    self.by_page().items()
                }

                /// Sets the value of `page_token`.
                pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
                    self.0.request.page_token = v.into();
                    self
                }

                /// Sets the value of `page_size`.
                pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
                    self.0.request.page_size = v.into();
                    self
                }
            }
        };
    }

    request_builder!(
        /// The request builder for [SecurityCenter::create_source][crate::client::SecurityCenter::create_source] calls.
        CreateSource,
        model::CreateSourceRequest,
        create_source,
        model::Source
    );

    impl CreateSource {
        /// Sets the value of [parent][model::CreateSourceRequest::parent].
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [source][model::CreateSourceRequest::source].
        pub fn set_source<T: Into<model::Source>>(mut self, v: T) -> Self {
            self.0.request.source = Some(v.into());
            self
        }
    }

    request_builder!(
        /// The request builder for [SecurityCenter::create_finding][crate::client::SecurityCenter::create_finding] calls.
        CreateFinding,
        model::CreateFindingRequest,
        create_finding,
        model::Finding
    );

    impl CreateFinding {
        /// Sets the value of [parent][model::CreateFindingRequest::parent].
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [finding_id][model::CreateFindingRequest::finding_id].
        pub fn set_finding_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.finding_id = v.into();
            self
        }

        /// Sets the value of [finding][model::CreateFindingRequest::finding].
        pub fn set_finding<T: Into<model::Finding>>(mut self, v: T) -> Self {
            self.0.request.finding = Some(v.into());
            self
        }
    }

    request_builder!(
        /// The request builder for [SecurityCenter::get_source][crate::client::SecurityCenter::get_source] calls.
        GetSource,
        model::GetSourceRequest,
        get_source,
        model::Source
    );

    impl GetSource {
        /// Sets the value of [name][model::GetSourceRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    request_builder!(
        /// The request builder for [SecurityCenter::get_organization_settings][crate::client::SecurityCenter::get_organization_settings] calls.
        GetOrganizationSettings,
        model::GetOrganizationSettingsRequest,
        get_organization_settings,
        model::OrganizationSettings
    );

    impl GetOrganizationSettings {
        /// Sets the value of [name][model::GetOrganizationSettingsRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }
    }

    request_builder!(
        /// The request builder for [SecurityCenter::list_sources][crate::client::SecurityCenter::list_sources] calls.
        ListSources,
        model::ListSourcesRequest,
        list_sources,
        model::ListSourcesResponse
    );
    paginated!(ListSources, model::ListSourcesResponse);

    impl ListSources {
        /// Sets the value of [parent][model::ListSourcesRequest::parent].
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }
    }

    request_builder!(
        /// The request builder for [SecurityCenter::list_findings][crate::client::SecurityCenter::list_findings] calls.
        ListFindings,
        model::ListFindingsRequest,
        list_findings,
        model::ListFindingsResponse
    );
    paginated!(ListFindings, model::ListFindingsResponse);

    impl ListFindings {
        /// Sets the value of [parent][model::ListFindingsRequest::parent].
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [filter][model::ListFindingsRequest::filter].
        pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.filter = v.into();
            self
        }

        /// Sets the value of [order_by][model::ListFindingsRequest::order_by].
        pub fn set_order_by<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.order_by = v.into();
            self
        }

        /// Sets the value of [read_time][model::ListFindingsRequest::read_time].
        pub fn set_read_time<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.read_time = Some(v.into());
            self
        }

        /// Sets the value of [compare_duration][model::ListFindingsRequest::compare_duration].
        pub fn set_compare_duration<T: Into<std::time::Duration>>(mut self, v: T) -> Self {
            self.0.request.compare_duration = Some(v.into());
            self
        }

        /// Sets the value of [field_mask][model::ListFindingsRequest::field_mask].
        pub fn set_field_mask<T: Into<model::FieldMask>>(mut self, v: T) -> Self {
            self.0.request.field_mask = Some(v.into());
            self
        }
    }

    request_builder!(
        /// The request builder for [SecurityCenter::list_assets][crate::client::SecurityCenter::list_assets] calls.
        ListAssets,
        model::ListAssetsRequest,
        list_assets,
        model::ListAssetsResponse
    );
    paginated!(ListAssets, model::ListAssetsResponse);

    impl ListAssets {
        /// Sets the value of [parent][model::ListAssetsRequest::parent].
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [filter][model::ListAssetsRequest::filter].
        pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.filter = v.into();
            self
        }

        /// Sets the value of [order_by][model::ListAssetsRequest::order_by].
        pub fn set_order_by<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.order_by = v.into();
            self
        }

        /// Sets the value of [read_time][model::ListAssetsRequest::read_time].
        pub fn set_read_time<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.read_time = Some(v.into());
            self
        }

        /// Sets the value of [compare_duration][model::ListAssetsRequest::compare_duration].
        pub fn set_compare_duration<T: Into<std::time::Duration>>(mut self, v: T) -> Self {
            self.0.request.compare_duration = Some(v.into());
            self
        }

        /// Sets the value of [field_mask][model::ListAssetsRequest::field_mask].
        pub fn set_field_mask<T: Into<model::FieldMask>>(mut self, v: T) -> Self {
            self.0.request.field_mask = Some(v.into());
            self
        }
    }

    request_builder!(
        /// The request builder for [SecurityCenter::group_findings][crate::client::SecurityCenter::group_findings] calls.
        GroupFindings,
        model::GroupFindingsRequest,
        group_findings,
        model::GroupFindingsResponse
    );
    paginated!(GroupFindings, model::GroupFindingsResponse);

    impl GroupFindings {
        /// Sets the value of [parent][model::GroupFindingsRequest::parent].
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [group_by][model::GroupFindingsRequest::group_by].
        pub fn set_group_by<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.group_by = v.into();
            self
        }

        /// Sets the value of [filter][model::GroupFindingsRequest::filter].
        pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.filter = v.into();
            self
        }

        /// Sets the value of [read_time][model::GroupFindingsRequest::read_time].
        pub fn set_read_time<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.read_time = Some(v.into());
            self
        }

        /// Sets the value of [compare_duration][model::GroupFindingsRequest::compare_duration].
        pub fn set_compare_duration<T: Into<std::time::Duration>>(mut self, v: T) -> Self {
            self.0.request.compare_duration = Some(v.into());
            self
        }
    }

    request_builder!(
        /// The request builder for [SecurityCenter::run_asset_discovery][crate::client::SecurityCenter::run_asset_discovery] calls.
        ///
        /// # Example
        /// ```no_run
        /// # use google_cloud_securitycenter_v1::builder::security_center::RunAssetDiscovery;
        /// # async fn sample() -> gax::Result<()> {
        /// use lro::Poller;
        ///
        /// let builder = prepare_request_builder();
        /// let response = builder.poller().until_done().await?;
        ///
        /// fn prepare_request_builder() -> RunAssetDiscovery {
        ///   # panic!();
        ///   // ... details omitted ...
        /// }
        /// # Ok(()) }
        /// ```
        RunAssetDiscovery,
        model::RunAssetDiscoveryRequest,
        run_asset_discovery,
        lro::model::Operation
    );

    impl RunAssetDiscovery {
        /// Sets the value of [parent][model::RunAssetDiscoveryRequest::parent].
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Starts the operation, returning a handle to track its progress.
        ///
        /// The service rejects new runs while a discovery for the same
        /// organization is in progress.
        pub async fn start(
            self,
        ) -> Result<lro::Operation<model::RunAssetDiscoveryResponse, lro::model::Empty>> {
            let stub = self.0.connected()?;
            let options = self.0.options.clone();
            let op = self.send().await?;
            Ok(lro::Operation::new(stub, options, op))
        }

        /// Creates a [Poller][lro::Poller] to work with `run_asset_discovery`.
        pub fn poller(
            self,
        ) -> impl lro::Poller<model::RunAssetDiscoveryResponse, lro::model::Empty> {
            lro::new_poller(move || self.start())
        }
    }

    request_builder!(
        /// The request builder for [SecurityCenter::set_finding_state][crate::client::SecurityCenter::set_finding_state] calls.
        SetFindingState,
        model::SetFindingStateRequest,
        set_finding_state,
        model::Finding
    );

    impl SetFindingState {
        /// Sets the value of [name][model::SetFindingStateRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }

        /// Sets the value of [state][model::SetFindingStateRequest::state].
        pub fn set_state<T: Into<model::finding::State>>(mut self, v: T) -> Self {
            self.0.request.state = v.into();
            self
        }

        /// Sets the value of [start_time][model::SetFindingStateRequest::start_time].
        pub fn set_start_time<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.start_time = Some(v.into());
            self
        }
    }

    request_builder!(
        /// The request builder for [SecurityCenter::update_finding][crate::client::SecurityCenter::update_finding] calls.
        UpdateFinding,
        model::UpdateFindingRequest,
        update_finding,
        model::Finding
    );

    impl UpdateFinding {
        /// Sets the value of [finding][model::UpdateFindingRequest::finding].
        pub fn set_finding<T: Into<model::Finding>>(mut self, v: T) -> Self {
            self.0.request.finding = Some(v.into());
            self
        }

        /// Sets the value of [update_mask][model::UpdateFindingRequest::update_mask].
        pub fn set_update_mask<T: Into<model::FieldMask>>(mut self, v: T) -> Self {
            self.0.request.update_mask = Some(v.into());
            self
        }
    }

    request_builder!(
        /// The request builder for [SecurityCenter::update_source][crate::client::SecurityCenter::update_source] calls.
        UpdateSource,
        model::UpdateSourceRequest,
        update_source,
        model::Source
    );

    impl UpdateSource {
        /// Sets the value of [source][model::UpdateSourceRequest::source].
        pub fn set_source<T: Into<model::Source>>(mut self, v: T) -> Self {
            self.0.request.source = Some(v.into());
            self
        }

        /// Sets the value of [update_mask][model::UpdateSourceRequest::update_mask].
        pub fn set_update_mask<T: Into<model::FieldMask>>(mut self, v: T) -> Self {
            self.0.request.update_mask = Some(v.into());
            self
        }
    }

    request_builder!(
        /// The request builder for [SecurityCenter::update_organization_settings][crate::client::SecurityCenter::update_organization_settings] calls.
        UpdateOrganizationSettings,
        model::UpdateOrganizationSettingsRequest,
        update_organization_settings,
        model::OrganizationSettings
    );

    impl UpdateOrganizationSettings {
        /// Sets the value of [organization_settings][model::UpdateOrganizationSettingsRequest::organization_settings].
        pub fn set_organization_settings<T: Into<model::OrganizationSettings>>(
            mut self,
            v: T,
        ) -> Self {
            self.0.request.organization_settings = Some(v.into());
            self
        }

        /// Sets the value of [update_mask][model::UpdateOrganizationSettingsRequest::update_mask].
        pub fn set_update_mask<T: Into<model::FieldMask>>(mut self, v: T) -> Self {
            self.0.request.update_mask = Some(v.into());
            self
        }
    }

    request_builder!(
        /// The request builder for [SecurityCenter::update_security_marks][crate::client::SecurityCenter::update_security_marks] calls.
        UpdateSecurityMarks,
        model::UpdateSecurityMarksRequest,
        update_security_marks,
        model::SecurityMarks
    );

    impl UpdateSecurityMarks {
        /// Sets the value of [security_marks][model::UpdateSecurityMarksRequest::security_marks].
        pub fn set_security_marks<T: Into<model::SecurityMarks>>(mut self, v: T) -> Self {
            self.0.request.security_marks = Some(v.into());
            self
        }

        /// Sets the value of [update_mask][model::UpdateSecurityMarksRequest::update_mask].
        pub fn set_update_mask<T: Into<model::FieldMask>>(mut self, v: T) -> Self {
            self.0.request.update_mask = Some(v.into());
            self
        }

        /// Sets the value of [start_time][model::UpdateSecurityMarksRequest::start_time].
        pub fn set_start_time<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.start_time = Some(v.into());
            self
        }
    }
}
