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

//! The request and response messages of the Security Command Center API.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// A set of field paths, used to select the fields changed by an update.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FieldMask {
    pub paths: Vec<String>,
}

impl FieldMask {
    /// Sets the value of [paths][FieldMask::paths].
    pub fn set_paths<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.paths = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Security Command Center finding source. A finding source is an entity or a
/// mechanism that can produce a finding.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Source {
    /// The relative resource name of this source, for example
    /// `organizations/{organization_id}/sources/{source_id}`.
    pub name: String,

    /// The source's display name.
    pub display_name: String,

    /// The description of the source (max of 1024 characters).
    pub description: String,
}

impl Source {
    /// Sets the value of [name][Source::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [display_name][Source::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = v.into();
        self
    }

    /// Sets the value of [description][Source::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = v.into();
        self
    }
}

/// User specified security marks that are attached to the parent Security
/// Command Center resource.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SecurityMarks {
    /// The relative resource name of the SecurityMarks.
    pub name: String,

    /// Mutable user specified security marks belonging to the parent resource.
    pub marks: HashMap<String, String>,
}

impl SecurityMarks {
    /// Sets the value of [name][SecurityMarks::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [marks][SecurityMarks::marks].
    pub fn set_marks<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.marks = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }
}

/// A record of an assessment or issue found by a security source.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Finding {
    /// The relative resource name of this finding.
    pub name: String,

    /// The relative resource name of the source the finding belongs to.
    pub parent: String,

    /// The full resource name of the Google Cloud resource this finding is
    /// for.
    pub resource_name: String,

    /// The state of the finding.
    pub state: finding::State,

    /// The additional taxonomy group within findings from a given source.
    pub category: String,

    /// The URI that, if available, points to a web page outside of Security
    /// Command Center where additional information about the finding can be
    /// found.
    pub external_uri: String,

    /// Source specific properties.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub source_properties: HashMap<String, serde_json::Value>,

    /// Output only. User specified security marks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_marks: Option<SecurityMarks>,

    /// The time at which the event took place, in RFC 3339 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_time: Option<String>,

    /// The time at which the finding was created, in RFC 3339 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
}

impl Finding {
    /// Sets the value of [name][Finding::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [parent][Finding::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [resource_name][Finding::resource_name].
    pub fn set_resource_name<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_name = v.into();
        self
    }

    /// Sets the value of [state][Finding::state].
    pub fn set_state<T: Into<finding::State>>(mut self, v: T) -> Self {
        self.state = v.into();
        self
    }

    /// Sets the value of [category][Finding::category].
    pub fn set_category<T: Into<String>>(mut self, v: T) -> Self {
        self.category = v.into();
        self
    }

    /// Sets the value of [external_uri][Finding::external_uri].
    pub fn set_external_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.external_uri = v.into();
        self
    }

    /// Sets the value of [source_properties][Finding::source_properties].
    pub fn set_source_properties<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<serde_json::Value>,
    {
        self.source_properties = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [security_marks][Finding::security_marks].
    pub fn set_security_marks<T: Into<Option<SecurityMarks>>>(mut self, v: T) -> Self {
        self.security_marks = v.into();
        self
    }

    /// Sets the value of [event_time][Finding::event_time].
    pub fn set_event_time<T: Into<String>>(mut self, v: T) -> Self {
        self.event_time = Some(v.into());
        self
    }
}

/// Defines additional types related to [Finding].
pub mod finding {
    use super::*;

    /// The state of the finding.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    #[non_exhaustive]
    pub enum State {
        /// Unspecified state.
        #[default]
        StateUnspecified,
        /// The finding requires attention and has not been addressed yet.
        Active,
        /// The finding has been fixed, triaged as a non-issue or otherwise
        /// addressed and is no longer active.
        Inactive,
    }
}

/// Security Command Center managed properties of an asset.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SecurityCenterProperties {
    /// The full resource name of the Google Cloud resource this asset
    /// represents.
    pub resource_name: String,

    /// The type of the Google Cloud resource, for example `google.compute.Instance`.
    pub resource_type: String,

    /// The full resource name of the immediate parent of the resource.
    pub resource_parent: String,

    /// The full resource name of the project the resource belongs to.
    pub resource_project: String,

    /// Owners of the Google Cloud resource.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resource_owners: Vec<String>,
}

impl SecurityCenterProperties {
    /// Sets the value of [resource_name][SecurityCenterProperties::resource_name].
    pub fn set_resource_name<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_name = v.into();
        self
    }

    /// Sets the value of [resource_type][SecurityCenterProperties::resource_type].
    pub fn set_resource_type<T: Into<String>>(mut self, v: T) -> Self {
        self.resource_type = v.into();
        self
    }
}

/// Security Command Center representation of a Google Cloud resource.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Asset {
    /// The relative resource name of this asset.
    pub name: String,

    /// Security Command Center managed properties.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_center_properties: Option<SecurityCenterProperties>,

    /// Resource managed properties.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub resource_properties: HashMap<String, serde_json::Value>,

    /// User specified security marks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_marks: Option<SecurityMarks>,

    /// The time at which the asset was created, in RFC 3339 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,

    /// The time at which the asset was last updated, in RFC 3339 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<String>,
}

impl Asset {
    /// Sets the value of [name][Asset::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [security_center_properties][Asset::security_center_properties].
    pub fn set_security_center_properties<T: Into<Option<SecurityCenterProperties>>>(
        mut self,
        v: T,
    ) -> Self {
        self.security_center_properties = v.into();
        self
    }
}

/// User specified settings that are attached to the Security Command Center
/// organization.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct OrganizationSettings {
    /// The relative resource name of the settings.
    pub name: String,

    /// A flag that indicates if Asset Discovery should be enabled.
    pub enable_asset_discovery: bool,

    /// The configuration used for Asset Discovery runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_discovery_config: Option<organization_settings::AssetDiscoveryConfig>,
}

impl OrganizationSettings {
    /// Sets the value of [name][OrganizationSettings::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [enable_asset_discovery][OrganizationSettings::enable_asset_discovery].
    pub fn set_enable_asset_discovery<T: Into<bool>>(mut self, v: T) -> Self {
        self.enable_asset_discovery = v.into();
        self
    }

    /// Sets the value of [asset_discovery_config][OrganizationSettings::asset_discovery_config].
    pub fn set_asset_discovery_config<
        T: Into<Option<organization_settings::AssetDiscoveryConfig>>,
    >(
        mut self,
        v: T,
    ) -> Self {
        self.asset_discovery_config = v.into();
        self
    }
}

/// Defines additional types related to [OrganizationSettings].
pub mod organization_settings {
    use super::*;

    /// The configuration used for Asset Discovery runs.
    #[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct AssetDiscoveryConfig {
        /// The project ids to use for filtering asset discovery.
        pub project_ids: Vec<String>,

        /// The mode to use for filtering asset discovery.
        pub inclusion_mode: asset_discovery_config::InclusionMode,
    }

    impl AssetDiscoveryConfig {
        /// Sets the value of [project_ids][AssetDiscoveryConfig::project_ids].
        pub fn set_project_ids<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<String>,
        {
            self.project_ids = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [inclusion_mode][AssetDiscoveryConfig::inclusion_mode].
        pub fn set_inclusion_mode<T: Into<asset_discovery_config::InclusionMode>>(
            mut self,
            v: T,
        ) -> Self {
            self.inclusion_mode = v.into();
            self
        }
    }

    /// Defines additional types related to [AssetDiscoveryConfig].
    pub mod asset_discovery_config {
        use super::*;

        /// The mode of inclusion when running Asset Discovery.
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        #[non_exhaustive]
        pub enum InclusionMode {
            /// Unspecified. Setting the mode with this value will disable
            /// inclusion/exclusion filtering for Asset Discovery.
            #[default]
            InclusionModeUnspecified,
            /// Asset Discovery will capture only the resources within the
            /// projects specified.
            IncludeOnly,
            /// Asset Discovery will ignore all resources under the projects
            /// specified.
            Exclude,
        }
    }
}

/// Request message for creating a source.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateSourceRequest {
    /// Resource name of the new source's parent, an organization.
    pub parent: String,

    /// The Source being created, only the display_name and description are
    /// used.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,
}

impl CreateSourceRequest {
    /// Sets the value of [parent][CreateSourceRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [source][CreateSourceRequest::source].
    pub fn set_source<T: Into<Option<Source>>>(mut self, v: T) -> Self {
        self.source = v.into();
        self
    }
}

/// Request message for creating a finding.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateFindingRequest {
    /// Resource name of the new finding's parent, a source.
    pub parent: String,

    /// Unique identifier provided by the client within the parent scope.
    pub finding_id: String,

    /// The Finding being created. The name and security_marks are ignored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finding: Option<Finding>,
}

impl CreateFindingRequest {
    /// Sets the value of [parent][CreateFindingRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [finding_id][CreateFindingRequest::finding_id].
    pub fn set_finding_id<T: Into<String>>(mut self, v: T) -> Self {
        self.finding_id = v.into();
        self
    }

    /// Sets the value of [finding][CreateFindingRequest::finding].
    pub fn set_finding<T: Into<Option<Finding>>>(mut self, v: T) -> Self {
        self.finding = v.into();
        self
    }
}

/// Request message for getting a source.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetSourceRequest {
    /// Relative resource name of the source.
    pub name: String,
}

impl GetSourceRequest {
    /// Sets the value of [name][GetSourceRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// Request message for getting organization settings.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetOrganizationSettingsRequest {
    /// Name of the organization to get organization settings for.
    pub name: String,
}

impl GetOrganizationSettingsRequest {
    /// Sets the value of [name][GetOrganizationSettingsRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }
}

/// Request message for listing sources.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListSourcesRequest {
    /// Resource name of the parent of sources to list.
    pub parent: String,

    /// The value returned by the last `ListSourcesResponse`; indicates
    /// that this is a continuation of a prior `ListSources` call.
    pub page_token: String,

    /// The maximum number of results to return in a single response.
    pub page_size: i32,
}

impl ListSourcesRequest {
    /// Sets the value of [parent][ListSourcesRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [page_token][ListSourcesRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }

    /// Sets the value of [page_size][ListSourcesRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }
}

/// Response message for listing sources.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListSourcesResponse {
    /// Sources belonging to the requested parent.
    pub sources: Vec<Source>,

    /// Token to retrieve the next page of results, or empty if there are no
    /// more results.
    pub next_page_token: String,
}

impl ListSourcesResponse {
    /// Sets the value of [sources][ListSourcesResponse::sources].
    pub fn set_sources<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Source>,
    {
        self.sources = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][ListSourcesResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for ListSourcesResponse {
    type PageItem = Source;

    fn items(self) -> Vec<Self::PageItem> {
        self.sources
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}

/// Request message for listing findings.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListFindingsRequest {
    /// Name of the source the findings belong to. To list across all sources
    /// provide a source_id of `-`.
    pub parent: String,

    /// Expression that defines the filter to apply across findings.
    pub filter: String,

    /// Expression that defines what fields and order to use for sorting.
    pub order_by: String,

    /// Time used as a reference point when filtering findings, in RFC 3339
    /// format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_time: Option<String>,

    /// When set, the response includes the state change of each finding over
    /// this period.
    #[serde(
        with = "gax::duration::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub compare_duration: Option<Duration>,

    /// A field mask to specify the Finding fields to be listed in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_mask: Option<FieldMask>,

    /// The value returned by the last `ListFindingsResponse`.
    pub page_token: String,

    /// The maximum number of results to return in a single response.
    pub page_size: i32,
}

impl ListFindingsRequest {
    /// Sets the value of [parent][ListFindingsRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [filter][ListFindingsRequest::filter].
    pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.filter = v.into();
        self
    }

    /// Sets the value of [order_by][ListFindingsRequest::order_by].
    pub fn set_order_by<T: Into<String>>(mut self, v: T) -> Self {
        self.order_by = v.into();
        self
    }

    /// Sets the value of [read_time][ListFindingsRequest::read_time].
    pub fn set_read_time<T: Into<String>>(mut self, v: T) -> Self {
        self.read_time = Some(v.into());
        self
    }

    /// Sets the value of [compare_duration][ListFindingsRequest::compare_duration].
    pub fn set_compare_duration<T: Into<Duration>>(mut self, v: T) -> Self {
        self.compare_duration = Some(v.into());
        self
    }

    /// Sets the value of [field_mask][ListFindingsRequest::field_mask].
    pub fn set_field_mask<T: Into<Option<FieldMask>>>(mut self, v: T) -> Self {
        self.field_mask = v.into();
        self
    }

    /// Sets the value of [page_token][ListFindingsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }

    /// Sets the value of [page_size][ListFindingsRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }
}

/// Response message for listing findings.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListFindingsResponse {
    /// Findings matching the list request.
    pub list_findings_results: Vec<list_findings_response::ListFindingsResult>,

    /// Time used for executing the list request, in RFC 3339 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_time: Option<String>,

    /// Token to retrieve the next page of results, or empty if there are no
    /// more results.
    pub next_page_token: String,

    /// The total number of findings matching the query.
    pub total_size: i32,
}

impl ListFindingsResponse {
    /// Sets the value of [list_findings_results][ListFindingsResponse::list_findings_results].
    pub fn set_list_findings_results<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<list_findings_response::ListFindingsResult>,
    {
        self.list_findings_results = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][ListFindingsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }

    /// Sets the value of [total_size][ListFindingsResponse::total_size].
    pub fn set_total_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.total_size = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for ListFindingsResponse {
    type PageItem = list_findings_response::ListFindingsResult;

    fn items(self) -> Vec<Self::PageItem> {
        self.list_findings_results
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}

/// Defines additional types related to [ListFindingsResponse].
pub mod list_findings_response {
    use super::*;

    /// Result containing the Finding and its StateChange.
    #[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct ListFindingsResult {
        /// Finding matching the search request.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub finding: Option<Finding>,

        /// State change of the finding between the points in time.
        pub state_change: list_findings_result::StateChange,
    }

    impl ListFindingsResult {
        /// Sets the value of [finding][ListFindingsResult::finding].
        pub fn set_finding<T: Into<Option<Finding>>>(mut self, v: T) -> Self {
            self.finding = v.into();
            self
        }

        /// Sets the value of [state_change][ListFindingsResult::state_change].
        pub fn set_state_change<T: Into<list_findings_result::StateChange>>(
            mut self,
            v: T,
        ) -> Self {
            self.state_change = v.into();
            self
        }
    }

    /// Defines additional types related to [ListFindingsResult].
    pub mod list_findings_result {
        use super::*;

        /// The change in state of the finding.
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        #[non_exhaustive]
        pub enum StateChange {
            /// State change is unused, this is the canonical default for
            /// this enum.
            #[default]
            Unused,
            /// The finding has changed state in some way between the points
            /// in time and existed at `read_time`.
            Changed,
            /// The finding has not changed state between the points in time
            /// and existed at `read_time`.
            Unchanged,
            /// The finding was created between the points in time.
            Added,
            /// The finding at timestamp does not match the filter specified,
            /// but it did at timestamp - `compare_duration`.
            Removed,
        }
    }
}

/// Request message for listing assets.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListAssetsRequest {
    /// Name of the organization assets should belong to.
    pub parent: String,

    /// Expression that defines the filter to apply across assets.
    pub filter: String,

    /// Expression that defines what fields and order to use for sorting.
    pub order_by: String,

    /// Time used as a reference point when filtering assets, in RFC 3339
    /// format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_time: Option<String>,

    /// When set, the response includes the state change of each asset over
    /// this period.
    #[serde(
        with = "gax::duration::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub compare_duration: Option<Duration>,

    /// A field mask to specify the fields to be listed in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_mask: Option<FieldMask>,

    /// The value returned by the last `ListAssetsResponse`.
    pub page_token: String,

    /// The maximum number of results to return in a single response.
    pub page_size: i32,
}

impl ListAssetsRequest {
    /// Sets the value of [parent][ListAssetsRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [filter][ListAssetsRequest::filter].
    pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.filter = v.into();
        self
    }

    /// Sets the value of [order_by][ListAssetsRequest::order_by].
    pub fn set_order_by<T: Into<String>>(mut self, v: T) -> Self {
        self.order_by = v.into();
        self
    }

    /// Sets the value of [read_time][ListAssetsRequest::read_time].
    pub fn set_read_time<T: Into<String>>(mut self, v: T) -> Self {
        self.read_time = Some(v.into());
        self
    }

    /// Sets the value of [compare_duration][ListAssetsRequest::compare_duration].
    pub fn set_compare_duration<T: Into<Duration>>(mut self, v: T) -> Self {
        self.compare_duration = Some(v.into());
        self
    }

    /// Sets the value of [field_mask][ListAssetsRequest::field_mask].
    pub fn set_field_mask<T: Into<Option<FieldMask>>>(mut self, v: T) -> Self {
        self.field_mask = v.into();
        self
    }

    /// Sets the value of [page_token][ListAssetsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }

    /// Sets the value of [page_size][ListAssetsRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }
}

/// Response message for listing assets.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListAssetsResponse {
    /// Assets matching the list request.
    pub list_assets_results: Vec<list_assets_response::ListAssetsResult>,

    /// Time used for executing the list request, in RFC 3339 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_time: Option<String>,

    /// Token to retrieve the next page of results, or empty if there are no
    /// more results.
    pub next_page_token: String,

    /// The total number of assets matching the query.
    pub total_size: i32,
}

impl ListAssetsResponse {
    /// Sets the value of [list_assets_results][ListAssetsResponse::list_assets_results].
    pub fn set_list_assets_results<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<list_assets_response::ListAssetsResult>,
    {
        self.list_assets_results = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][ListAssetsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for ListAssetsResponse {
    type PageItem = list_assets_response::ListAssetsResult;

    fn items(self) -> Vec<Self::PageItem> {
        self.list_assets_results
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}

/// Defines additional types related to [ListAssetsResponse].
pub mod list_assets_response {
    use super::*;

    /// Result containing the Asset and its State.
    #[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct ListAssetsResult {
        /// Asset matching the search request.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub asset: Option<Asset>,

        /// State change of the asset between the points in time.
        pub state_change: list_assets_result::StateChange,
    }

    impl ListAssetsResult {
        /// Sets the value of [asset][ListAssetsResult::asset].
        pub fn set_asset<T: Into<Option<Asset>>>(mut self, v: T) -> Self {
            self.asset = v.into();
            self
        }

        /// Sets the value of [state_change][ListAssetsResult::state_change].
        pub fn set_state_change<T: Into<list_assets_result::StateChange>>(
            mut self,
            v: T,
        ) -> Self {
            self.state_change = v.into();
            self
        }
    }

    /// Defines additional types related to [ListAssetsResult].
    pub mod list_assets_result {
        use super::*;

        /// The change in state of the asset.
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
        #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
        #[non_exhaustive]
        pub enum StateChange {
            /// State change is unused, this is the canonical default for
            /// this enum.
            #[default]
            Unused,
            /// Asset was added between the points in time.
            Added,
            /// Asset was removed between the points in time.
            Removed,
            /// Asset was present at both point(s) in time.
            Active,
        }
    }
}

/// Request message for grouping by findings.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GroupFindingsRequest {
    /// Name of the source to groupBy. To group across all sources provide a
    /// source_id of `-`.
    pub parent: String,

    /// Expression that defines the filter to apply across findings.
    pub filter: String,

    /// Expression that defines what finding fields to use for grouping,
    /// for example `"category,resource_name"`.
    pub group_by: String,

    /// Time used as a reference point when filtering findings, in RFC 3339
    /// format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_time: Option<String>,

    /// When set, the groups include the state change of the findings over
    /// this period.
    #[serde(
        with = "gax::duration::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub compare_duration: Option<Duration>,

    /// The value returned by the last `GroupFindingsResponse`.
    pub page_token: String,

    /// The maximum number of results to return in a single response.
    pub page_size: i32,
}

impl GroupFindingsRequest {
    /// Sets the value of [parent][GroupFindingsRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }

    /// Sets the value of [filter][GroupFindingsRequest::filter].
    pub fn set_filter<T: Into<String>>(mut self, v: T) -> Self {
        self.filter = v.into();
        self
    }

    /// Sets the value of [group_by][GroupFindingsRequest::group_by].
    pub fn set_group_by<T: Into<String>>(mut self, v: T) -> Self {
        self.group_by = v.into();
        self
    }

    /// Sets the value of [read_time][GroupFindingsRequest::read_time].
    pub fn set_read_time<T: Into<String>>(mut self, v: T) -> Self {
        self.read_time = Some(v.into());
        self
    }

    /// Sets the value of [compare_duration][GroupFindingsRequest::compare_duration].
    pub fn set_compare_duration<T: Into<Duration>>(mut self, v: T) -> Self {
        self.compare_duration = Some(v.into());
        self
    }

    /// Sets the value of [page_token][GroupFindingsRequest::page_token].
    pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.page_token = v.into();
        self
    }

    /// Sets the value of [page_size][GroupFindingsRequest::page_size].
    pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.page_size = v.into();
        self
    }
}

/// Result containing the properties and count of a groupBy request.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GroupResult {
    /// Properties matching the groupBy fields in the request.
    pub properties: HashMap<String, serde_json::Value>,

    /// Total count of resources for the given properties.
    #[serde(with = "count")]
    pub count: i64,
}

impl GroupResult {
    /// Sets the value of [properties][GroupResult::properties].
    pub fn set_properties<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<serde_json::Value>,
    {
        self.properties = v.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        self
    }

    /// Sets the value of [count][GroupResult::count].
    pub fn set_count<T: Into<i64>>(mut self, v: T) -> Self {
        self.count = v.into();
        self
    }
}

/// 64-bit integers are strings in the JSON encoding used by the service.
mod count {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(v: &i64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&v.to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Count {
            Number(i64),
            Text(String),
        }
        match Count::deserialize(deserializer)? {
            Count::Number(n) => Ok(n),
            Count::Text(s) => s.parse().map_err(serde::de::Error::custom),
        }
    }
}

/// Response message for group by findings.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GroupFindingsResponse {
    /// Group results. There exists an element for each existing unique
    /// combination of property/values.
    pub group_by_results: Vec<GroupResult>,

    /// Time used for executing the groupBy request, in RFC 3339 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_time: Option<String>,

    /// Token to retrieve the next page of results, or empty if there are no
    /// more results.
    pub next_page_token: String,

    /// The total number of results matching the query.
    pub total_size: i32,
}

impl GroupFindingsResponse {
    /// Sets the value of [group_by_results][GroupFindingsResponse::group_by_results].
    pub fn set_group_by_results<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<GroupResult>,
    {
        self.group_by_results = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][GroupFindingsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for GroupFindingsResponse {
    type PageItem = GroupResult;

    fn items(self) -> Vec<Self::PageItem> {
        self.group_by_results
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}

/// Request message for running asset discovery for an organization.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RunAssetDiscoveryRequest {
    /// Name of the organization to run asset discovery for.
    pub parent: String,
}

impl RunAssetDiscoveryRequest {
    /// Sets the value of [parent][RunAssetDiscoveryRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }
}

/// Response of asset discovery run.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct RunAssetDiscoveryResponse {
    /// The state of an asset discovery run.
    pub state: run_asset_discovery_response::State,

    /// The duration between asset discovery run start and end.
    #[serde(
        with = "gax::duration::optional",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration: Option<Duration>,
}

impl RunAssetDiscoveryResponse {
    /// Sets the value of [state][RunAssetDiscoveryResponse::state].
    pub fn set_state<T: Into<run_asset_discovery_response::State>>(mut self, v: T) -> Self {
        self.state = v.into();
        self
    }

    /// Sets the value of [duration][RunAssetDiscoveryResponse::duration].
    pub fn set_duration<T: Into<Duration>>(mut self, v: T) -> Self {
        self.duration = Some(v.into());
        self
    }
}

impl lro::Message for RunAssetDiscoveryResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.securitycenter.v1.RunAssetDiscoveryResponse"
    }
}

/// Defines additional types related to [RunAssetDiscoveryResponse].
pub mod run_asset_discovery_response {
    use super::*;

    /// The state of an asset discovery run.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    #[non_exhaustive]
    pub enum State {
        /// Asset discovery run state was unspecified.
        #[default]
        StateUnspecified,
        /// Asset discovery run completed successfully.
        Completed,
        /// Asset discovery run was cancelled with tasks still pending, as
        /// another run for the same organization was started with a higher
        /// priority.
        Superseded,
        /// Asset discovery run was killed and terminated.
        Terminated,
    }
}

/// Request message for updating a finding's state.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SetFindingStateRequest {
    /// The relative resource name of the finding.
    pub name: String,

    /// The desired State of the finding.
    pub state: finding::State,

    /// The time at which the updated state takes effect, in RFC 3339 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
}

impl SetFindingStateRequest {
    /// Sets the value of [name][SetFindingStateRequest::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [state][SetFindingStateRequest::state].
    pub fn set_state<T: Into<finding::State>>(mut self, v: T) -> Self {
        self.state = v.into();
        self
    }

    /// Sets the value of [start_time][SetFindingStateRequest::start_time].
    pub fn set_start_time<T: Into<String>>(mut self, v: T) -> Self {
        self.start_time = Some(v.into());
        self
    }
}

/// Request message for updating or creating a finding.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateFindingRequest {
    /// The finding resource to update or create if it does not already exist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finding: Option<Finding>,

    /// The FieldMask to use when updating the finding resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_mask: Option<FieldMask>,
}

impl UpdateFindingRequest {
    /// Sets the value of [finding][UpdateFindingRequest::finding].
    pub fn set_finding<T: Into<Option<Finding>>>(mut self, v: T) -> Self {
        self.finding = v.into();
        self
    }

    /// Sets the value of [update_mask][UpdateFindingRequest::update_mask].
    pub fn set_update_mask<T: Into<Option<FieldMask>>>(mut self, v: T) -> Self {
        self.update_mask = v.into();
        self
    }
}

/// Request message for updating a source.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateSourceRequest {
    /// The source resource to update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Source>,

    /// The FieldMask to use when updating the source resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_mask: Option<FieldMask>,
}

impl UpdateSourceRequest {
    /// Sets the value of [source][UpdateSourceRequest::source].
    pub fn set_source<T: Into<Option<Source>>>(mut self, v: T) -> Self {
        self.source = v.into();
        self
    }

    /// Sets the value of [update_mask][UpdateSourceRequest::update_mask].
    pub fn set_update_mask<T: Into<Option<FieldMask>>>(mut self, v: T) -> Self {
        self.update_mask = v.into();
        self
    }
}

/// Request message for updating an organization's settings.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateOrganizationSettingsRequest {
    /// The organization settings resource to update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization_settings: Option<OrganizationSettings>,

    /// The FieldMask to use when updating the settings resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_mask: Option<FieldMask>,
}

impl UpdateOrganizationSettingsRequest {
    /// Sets the value of [organization_settings][UpdateOrganizationSettingsRequest::organization_settings].
    pub fn set_organization_settings<T: Into<Option<OrganizationSettings>>>(
        mut self,
        v: T,
    ) -> Self {
        self.organization_settings = v.into();
        self
    }

    /// Sets the value of [update_mask][UpdateOrganizationSettingsRequest::update_mask].
    pub fn set_update_mask<T: Into<Option<FieldMask>>>(mut self, v: T) -> Self {
        self.update_mask = v.into();
        self
    }
}

/// Request message for updating a SecurityMarks resource.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct UpdateSecurityMarksRequest {
    /// The security marks resource to update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_marks: Option<SecurityMarks>,

    /// The FieldMask to use when updating the security marks resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_mask: Option<FieldMask>,

    /// The time at which the updated SecurityMarks take effect, in RFC 3339
    /// format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
}

impl UpdateSecurityMarksRequest {
    /// Sets the value of [security_marks][UpdateSecurityMarksRequest::security_marks].
    pub fn set_security_marks<T: Into<Option<SecurityMarks>>>(mut self, v: T) -> Self {
        self.security_marks = v.into();
        self
    }

    /// Sets the value of [update_mask][UpdateSecurityMarksRequest::update_mask].
    pub fn set_update_mask<T: Into<Option<FieldMask>>>(mut self, v: T) -> Self {
        self.update_mask = v.into();
        self
    }

    /// Sets the value of [start_time][UpdateSecurityMarksRequest::start_time].
    pub fn set_start_time<T: Into<String>>(mut self, v: T) -> Self {
        self.start_time = Some(v.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn group_result_count() -> anyhow::Result<()> {
        let got = serde_json::from_value::<GroupResult>(json!({
            "properties": {"category": "OPEN_FIREWALL"},
            "count": "42",
        }))?;
        let want = GroupResult::default()
            .set_properties([("category", "OPEN_FIREWALL")])
            .set_count(42);
        assert_eq!(got, want);
        assert_eq!(serde_json::to_value(&want)?["count"], json!("42"));

        let got = serde_json::from_value::<GroupResult>(json!({"count": 7}))?;
        assert_eq!(got.count, 7);
        Ok(())
    }

    #[test]
    fn list_findings_request_json() -> anyhow::Result<()> {
        let request = ListFindingsRequest::default()
            .set_parent("organizations/123/sources/-")
            .set_filter("category=\"OPEN_FIREWALL\"")
            .set_compare_duration(Duration::from_secs(86400));
        let got = serde_json::to_value(&request)?;
        assert_eq!(got["parent"], json!("organizations/123/sources/-"));
        assert_eq!(got["compareDuration"], json!("86400s"));
        assert!(got.get("readTime").is_none(), "{got:?}");
        Ok(())
    }

    #[test]
    fn finding_from_json() -> anyhow::Result<()> {
        let got = serde_json::from_value::<Finding>(json!({
            "name": "organizations/123/sources/456/findings/f1",
            "state": "ACTIVE",
            "category": "MEDIUM_RISK_ONE",
            "sourceProperties": {"score": 7.5},
            "eventTime": "2024-03-01T12:00:00Z",
        }))?;
        assert_eq!(got.state, finding::State::Active);
        assert_eq!(got.source_properties.get("score"), Some(&json!(7.5)));
        assert_eq!(got.event_time.as_deref(), Some("2024-03-01T12:00:00Z"));
        Ok(())
    }
}
