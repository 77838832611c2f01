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

//! The request and response messages of the Cloud Vision API.

use serde::{Deserialize, Serialize};

/// Client image to perform Google Cloud Vision API tasks over.
#[serde_with::serde_as]
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Image {
    /// Image content, represented as a stream of bytes. Base64-encoded in
    /// JSON.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde_as(as = "Option<serde_with::base64::Base64>")]
    pub content: Option<bytes::Bytes>,

    /// Google Cloud Storage image location, or publicly-accessible image URL.
    /// If both `content` and `source` are provided for an image, `content`
    /// takes precedence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ImageSource>,
}

impl Image {
    /// Sets the value of [content][Image::content].
    pub fn set_content<T: Into<bytes::Bytes>>(mut self, v: T) -> Self {
        self.content = Some(v.into());
        self
    }

    /// Sets the value of [source][Image::source].
    pub fn set_source<T: Into<Option<ImageSource>>>(mut self, v: T) -> Self {
        self.source = v.into();
        self
    }
}

/// External image source (Google Cloud Storage or web URL image location).
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ImageSource {
    /// The Google Cloud Storage URI, `gs://bucket_name/object_name`.
    pub gcs_image_uri: String,

    /// The URI of the source image, either a Cloud Storage URI or a publicly
    /// accessible HTTP or HTTPS URL.
    pub image_uri: String,
}

impl ImageSource {
    /// Sets the value of [gcs_image_uri][ImageSource::gcs_image_uri].
    pub fn set_gcs_image_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.gcs_image_uri = v.into();
        self
    }

    /// Sets the value of [image_uri][ImageSource::image_uri].
    pub fn set_image_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.image_uri = v.into();
        self
    }
}

/// The type of Google Cloud Vision API detection to perform, and the maximum
/// number of results to return for that type.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Feature {
    /// The feature type.
    #[serde(rename = "type")]
    pub r#type: feature::Type,

    /// Maximum number of results of this type. Does not apply to
    /// `TEXT_DETECTION`, `DOCUMENT_TEXT_DETECTION`, or `CROP_HINTS`.
    pub max_results: i32,

    /// Model to use for the feature, `builtin/stable` or `builtin/latest`.
    pub model: String,
}

impl Feature {
    /// Sets the value of [r#type][Feature::type].
    pub fn set_type<T: Into<feature::Type>>(mut self, v: T) -> Self {
        self.r#type = v.into();
        self
    }

    /// Sets the value of [max_results][Feature::max_results].
    pub fn set_max_results<T: Into<i32>>(mut self, v: T) -> Self {
        self.max_results = v.into();
        self
    }

    /// Sets the value of [model][Feature::model].
    pub fn set_model<T: Into<String>>(mut self, v: T) -> Self {
        self.model = v.into();
        self
    }
}

/// Defines additional types related to [Feature].
pub mod feature {
    use super::*;

    /// Type of Google Cloud Vision API feature to be extracted.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    #[non_exhaustive]
    pub enum Type {
        /// Unspecified feature type.
        #[default]
        TypeUnspecified,
        /// Run face detection.
        FaceDetection,
        /// Run landmark detection.
        LandmarkDetection,
        /// Run logo detection.
        LogoDetection,
        /// Run label detection.
        LabelDetection,
        /// Run text detection / optical character recognition (OCR).
        TextDetection,
        /// Run dense text document OCR. Takes precedence when both
        /// `DOCUMENT_TEXT_DETECTION` and `TEXT_DETECTION` are present.
        DocumentTextDetection,
        /// Run Safe Search to detect potentially unsafe or undesirable
        /// content.
        SafeSearchDetection,
        /// Compute a set of image properties, such as the image's dominant
        /// colors.
        ImageProperties,
        /// Run crop hints.
        CropHints,
        /// Run web detection.
        WebDetection,
        /// Run Product Search.
        ProductSearch,
        /// Run localizer for object detection.
        ObjectLocalization,
    }
}

/// Parameters for crop hints annotation request.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CropHintsParams {
    /// Aspect ratios in floats, representing the ratio of the width to the
    /// height of the image.
    pub aspect_ratios: Vec<f32>,
}

/// Parameters for a product search request.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ProductSearchParams {
    /// The resource name of a ProductSet to be searched for similar images.
    pub product_set: String,

    /// The list of product categories to search in.
    pub product_categories: Vec<String>,

    /// The filtering expression, for example `"color = red"`.
    pub filter: String,
}

impl ProductSearchParams {
    /// Sets the value of [product_set][ProductSearchParams::product_set].
    pub fn set_product_set<T: Into<String>>(mut self, v: T) -> Self {
        self.product_set = v.into();
        self
    }

    /// Sets the value of [product_categories][ProductSearchParams::product_categories].
    pub fn set_product_categories<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.product_categories = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// Image context and/or feature-specific parameters.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ImageContext {
    /// List of languages to use for TEXT_DETECTION.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub language_hints: Vec<String>,

    /// Parameters for crop hints annotation request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop_hints_params: Option<CropHintsParams>,

    /// Parameters for product search.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_search_params: Option<ProductSearchParams>,
}

impl ImageContext {
    /// Sets the value of [language_hints][ImageContext::language_hints].
    pub fn set_language_hints<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.language_hints = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [crop_hints_params][ImageContext::crop_hints_params].
    pub fn set_crop_hints_params<T: Into<Option<CropHintsParams>>>(mut self, v: T) -> Self {
        self.crop_hints_params = v.into();
        self
    }

    /// Sets the value of [product_search_params][ImageContext::product_search_params].
    pub fn set_product_search_params<T: Into<Option<ProductSearchParams>>>(
        mut self,
        v: T,
    ) -> Self {
        self.product_search_params = v.into();
        self
    }
}

/// Request for performing Google Cloud Vision API tasks over a user-provided
/// image, with user-requested features.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AnnotateImageRequest {
    /// The image to be processed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,

    /// Requested features.
    pub features: Vec<Feature>,

    /// Additional context that may accompany the image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_context: Option<ImageContext>,
}

impl AnnotateImageRequest {
    /// Sets the value of [image][AnnotateImageRequest::image].
    pub fn set_image<T: Into<Option<Image>>>(mut self, v: T) -> Self {
        self.image = v.into();
        self
    }

    /// Sets the value of [features][AnnotateImageRequest::features].
    pub fn set_features<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Feature>,
    {
        self.features = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [image_context][AnnotateImageRequest::image_context].
    pub fn set_image_context<T: Into<Option<ImageContext>>>(mut self, v: T) -> Self {
        self.image_context = v.into();
        self
    }
}

/// Multiple image annotation requests are batched into a single service call.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchAnnotateImagesRequest {
    /// Individual image annotation requests for this batch.
    pub requests: Vec<AnnotateImageRequest>,

    /// Target project and location to make a call, for example
    /// `projects/project-A/locations/eu`.
    pub parent: String,
}

impl BatchAnnotateImagesRequest {
    /// Sets the value of [requests][BatchAnnotateImagesRequest::requests].
    pub fn set_requests<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<AnnotateImageRequest>,
    {
        self.requests = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [parent][BatchAnnotateImagesRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }
}

/// A vertex represents a 2D point in the image, in pixels.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Vertex {
    pub x: i32,
    pub y: i32,
}

/// A vertex with coordinates normalized to `[0, 1]` relative to the image.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct NormalizedVertex {
    pub x: f32,
    pub y: f32,
}

/// A bounding polygon for the detected image annotation.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BoundingPoly {
    /// The bounding polygon vertices.
    pub vertices: Vec<Vertex>,

    /// The bounding polygon normalized vertices.
    pub normalized_vertices: Vec<NormalizedVertex>,
}

/// A bucketized representation of likelihood, intended to give clients
/// stable results across model upgrades.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum Likelihood {
    /// Unknown likelihood.
    #[default]
    Unknown,
    VeryUnlikely,
    Unlikely,
    Possible,
    Likely,
    VeryLikely,
}

/// A face annotation object contains the results of face detection.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct FaceAnnotation {
    /// The bounding polygon around the face.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_poly: Option<BoundingPoly>,

    /// A tighter bounding polygon, enclosing only the skin part of the face.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fd_bounding_poly: Option<BoundingPoly>,

    /// Detection confidence. Range `[0, 1]`.
    pub detection_confidence: f32,

    pub joy_likelihood: Likelihood,
    pub sorrow_likelihood: Likelihood,
    pub anger_likelihood: Likelihood,
    pub surprise_likelihood: Likelihood,
    pub under_exposed_likelihood: Likelihood,
    pub blurred_likelihood: Likelihood,
    pub headwear_likelihood: Likelihood,
}

/// Set of detected entity features.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct EntityAnnotation {
    /// Opaque entity ID.
    pub mid: String,

    /// The language code for the locale in which the entity textual
    /// `description` is expressed.
    pub locale: String,

    /// Entity textual description, expressed in its `locale` language.
    pub description: String,

    /// Overall score of the result. Range `[0, 1]`.
    pub score: f32,

    /// The relevancy of the ICA (Image Content Annotation) label to the image.
    pub topicality: f32,

    /// Image region to which this entity belongs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_poly: Option<BoundingPoly>,
}

impl EntityAnnotation {
    /// Sets the value of [description][EntityAnnotation::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = v.into();
        self
    }

    /// Sets the value of [score][EntityAnnotation::score].
    pub fn set_score<T: Into<f32>>(mut self, v: T) -> Self {
        self.score = v.into();
        self
    }
}

/// Set of detected objects with bounding boxes.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct LocalizedObjectAnnotation {
    pub mid: String,
    pub language_code: String,
    /// Object name, expressed in its `language_code` language.
    pub name: String,
    /// Score of the result. Range `[0, 1]`.
    pub score: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_poly: Option<BoundingPoly>,
}

/// Text detected in a document, flattened to its UTF-8 text.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct TextAnnotation {
    /// UTF-8 text detected on the pages.
    pub text: String,
}

/// Set of features pertaining to the image, computed by computer vision
/// methods over safe-search verticals.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct SafeSearchAnnotation {
    pub adult: Likelihood,
    pub spoof: Likelihood,
    pub medical: Likelihood,
    pub violence: Likelihood,
    pub racy: Likelihood,
}

/// Represents a color in the RGBA color space.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Color {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f32>,
}

/// Color information consists of RGB channels, score, and the fraction of
/// the image that the color occupies.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ColorInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    /// Image-specific score for this color. Value in range `[0, 1]`.
    pub score: f32,
    /// The fraction of pixels the color occupies in the image.
    pub pixel_fraction: f32,
}

/// Set of dominant colors and their corresponding scores.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DominantColorsAnnotation {
    pub colors: Vec<ColorInfo>,
}

/// Stores image properties, such as dominant colors.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ImageProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dominant_colors: Option<DominantColorsAnnotation>,
}

/// Single crop hint that is used to generate a new crop when serving an
/// image.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CropHint {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounding_poly: Option<BoundingPoly>,
    pub confidence: f32,
    /// Fraction of importance of this salient region with respect to the
    /// original image.
    pub importance_fraction: f32,
}

/// Set of crop hints that are used to generate new crops when serving
/// images.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CropHintsAnnotation {
    pub crop_hints: Vec<CropHint>,
}

/// Relevant information for the image from the Internet.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct WebDetection {
    /// Deduced entities from similar images on the Internet.
    pub web_entities: Vec<web_detection::WebEntity>,

    /// Fully matching images from the Internet.
    pub full_matching_images: Vec<web_detection::WebImage>,

    /// Web pages containing the matching images from the Internet.
    pub pages_with_matching_images: Vec<web_detection::WebPage>,

    /// The service's best guess as to the topic of the request image.
    pub best_guess_labels: Vec<web_detection::WebLabel>,
}

/// Defines additional types related to [WebDetection].
pub mod web_detection {
    use super::*;

    /// Entity deduced from similar images on the Internet.
    #[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct WebEntity {
        pub entity_id: String,
        pub score: f32,
        pub description: String,
    }

    /// Metadata for online images.
    #[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct WebImage {
        pub url: String,
        pub score: f32,
    }

    /// Metadata for web pages.
    #[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct WebPage {
        pub url: String,
        pub score: f32,
        pub page_title: String,
    }

    /// Label to provide extra metadata for the web detection.
    #[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct WebLabel {
        pub label: String,
        pub language_code: String,
    }
}

/// Results for a product search request.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ProductSearchResults {
    /// Timestamp of the index which provided these results, in RFC 3339
    /// format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_time: Option<String>,

    /// List of results, one for each product match.
    pub results: Vec<product_search_results::Result>,
}

/// Defines additional types related to [ProductSearchResults].
pub mod product_search_results {
    use super::*;

    /// Information about a product.
    #[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
    #[serde(default, rename_all = "camelCase")]
    #[non_exhaustive]
    pub struct Result {
        /// The Product.
        #[serde(skip_serializing_if = "Option::is_none")]
        pub product: Option<Product>,

        /// A confidence level on the match, ranging from 0 (no confidence)
        /// to 1 (full confidence).
        pub score: f32,

        /// The resource name of the image from the product that is the
        /// closest match to the query.
        pub image: String,
    }
}

/// Response to an image annotation request.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AnnotateImageResponse {
    pub face_annotations: Vec<FaceAnnotation>,
    pub landmark_annotations: Vec<EntityAnnotation>,
    pub logo_annotations: Vec<EntityAnnotation>,
    pub label_annotations: Vec<EntityAnnotation>,
    pub localized_object_annotations: Vec<LocalizedObjectAnnotation>,
    pub text_annotations: Vec<EntityAnnotation>,

    /// If present, text (OCR) detection or document (OCR) text detection has
    /// completed successfully.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_text_annotation: Option<TextAnnotation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub safe_search_annotation: Option<SafeSearchAnnotation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_properties_annotation: Option<ImageProperties>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub crop_hints_annotation: Option<CropHintsAnnotation>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub web_detection: Option<WebDetection>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_search_results: Option<ProductSearchResults>,

    /// If set, represents the error message for the operation. Note that
    /// filled-in image annotations are guaranteed to be correct, even when
    /// `error` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<gax::error::rpc::Status>,
}

impl AnnotateImageResponse {
    /// Sets the value of [label_annotations][AnnotateImageResponse::label_annotations].
    pub fn set_label_annotations<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<EntityAnnotation>,
    {
        self.label_annotations = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [error][AnnotateImageResponse::error].
    pub fn set_error<T: Into<Option<gax::error::rpc::Status>>>(mut self, v: T) -> Self {
        self.error = v.into();
        self
    }
}

/// Response to a batch image annotation request.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct BatchAnnotateImagesResponse {
    /// Individual responses to image annotation requests within the batch.
    pub responses: Vec<AnnotateImageResponse>,
}

impl BatchAnnotateImagesResponse {
    /// Sets the value of [responses][BatchAnnotateImagesResponse::responses].
    pub fn set_responses<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<AnnotateImageResponse>,
    {
        self.responses = v.into_iter().map(|i| i.into()).collect();
        self
    }
}

/// The Google Cloud Storage location where the input will be read from.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GcsSource {
    /// Google Cloud Storage URI for the input file. This must only be a
    /// Google Cloud Storage object. Wildcards are not currently supported.
    pub uri: String,
}

/// The Google Cloud Storage location where the output will be written to.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GcsDestination {
    /// Google Cloud Storage URI prefix where the results will be stored.
    pub uri: String,
}

/// The desired input location and metadata.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct InputConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gcs_source: Option<GcsSource>,

    /// The type of the file. Currently only `application/pdf`, `image/tiff`
    /// and `image/gif` are supported.
    pub mime_type: String,
}

impl InputConfig {
    /// Sets [gcs_source][InputConfig::gcs_source] to the given URI.
    pub fn set_gcs_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.gcs_source = Some(GcsSource { uri: v.into() });
        self
    }

    /// Sets the value of [mime_type][InputConfig::mime_type].
    pub fn set_mime_type<T: Into<String>>(mut self, v: T) -> Self {
        self.mime_type = v.into();
        self
    }
}

/// The desired output location and metadata.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct OutputConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gcs_destination: Option<GcsDestination>,

    /// The max number of response protos to put into each output JSON file
    /// on Google Cloud Storage. The valid range is `[1, 100]`.
    pub batch_size: i32,
}

impl OutputConfig {
    /// Sets [gcs_destination][OutputConfig::gcs_destination] to the given URI.
    pub fn set_gcs_uri<T: Into<String>>(mut self, v: T) -> Self {
        self.gcs_destination = Some(GcsDestination { uri: v.into() });
        self
    }

    /// Sets the value of [batch_size][OutputConfig::batch_size].
    pub fn set_batch_size<T: Into<i32>>(mut self, v: T) -> Self {
        self.batch_size = v.into();
        self
    }
}

/// An offline file annotation request.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AsyncAnnotateFileRequest {
    /// Information about the input file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_config: Option<InputConfig>,

    /// Requested features.
    pub features: Vec<Feature>,

    /// Additional context that may accompany the image(s) in the file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_context: Option<ImageContext>,

    /// The desired output location and metadata (e.g. format).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_config: Option<OutputConfig>,
}

impl AsyncAnnotateFileRequest {
    /// Sets the value of [input_config][AsyncAnnotateFileRequest::input_config].
    pub fn set_input_config<T: Into<Option<InputConfig>>>(mut self, v: T) -> Self {
        self.input_config = v.into();
        self
    }

    /// Sets the value of [features][AsyncAnnotateFileRequest::features].
    pub fn set_features<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Feature>,
    {
        self.features = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [image_context][AsyncAnnotateFileRequest::image_context].
    pub fn set_image_context<T: Into<Option<ImageContext>>>(mut self, v: T) -> Self {
        self.image_context = v.into();
        self
    }

    /// Sets the value of [output_config][AsyncAnnotateFileRequest::output_config].
    pub fn set_output_config<T: Into<Option<OutputConfig>>>(mut self, v: T) -> Self {
        self.output_config = v.into();
        self
    }
}

/// Multiple async file annotation requests are batched into a single service
/// call.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AsyncBatchAnnotateFilesRequest {
    /// Individual async file annotation requests for this batch.
    pub requests: Vec<AsyncAnnotateFileRequest>,

    /// Target project and location to make a call.
    pub parent: String,
}

impl AsyncBatchAnnotateFilesRequest {
    /// Sets the value of [requests][AsyncBatchAnnotateFilesRequest::requests].
    pub fn set_requests<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<AsyncAnnotateFileRequest>,
    {
        self.requests = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [parent][AsyncBatchAnnotateFilesRequest::parent].
    pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
        self.parent = v.into();
        self
    }
}

/// The response for a single offline file annotation request.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AsyncAnnotateFileResponse {
    /// The output location and metadata from AsyncAnnotateFileRequest.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_config: Option<OutputConfig>,
}

/// Response to an async batch file annotation request.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct AsyncBatchAnnotateFilesResponse {
    /// The list of file annotation responses, one for each request in
    /// AsyncBatchAnnotateFilesRequest.
    pub responses: Vec<AsyncAnnotateFileResponse>,
}

impl lro::Message for AsyncBatchAnnotateFilesResponse {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.vision.v1.AsyncBatchAnnotateFilesResponse"
    }
}

/// Contains metadata for the BatchAnnotateImages operation.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct OperationMetadata {
    /// Current state of the batch operation.
    pub state: operation_metadata::State,

    /// The time when the batch request was received, in RFC 3339 format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,

    /// The time when the operation result was last updated, in RFC 3339
    /// format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub update_time: Option<String>,
}

impl OperationMetadata {
    /// Sets the value of [state][OperationMetadata::state].
    pub fn set_state<T: Into<operation_metadata::State>>(mut self, v: T) -> Self {
        self.state = v.into();
        self
    }
}

impl lro::Message for OperationMetadata {
    fn typename() -> &'static str {
        "type.googleapis.com/google.cloud.vision.v1.OperationMetadata"
    }
}

/// Defines additional types related to [OperationMetadata].
pub mod operation_metadata {
    use super::*;

    /// Batch operation states.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
    #[serde(rename_all = "SCREAMING_SNAKE_CASE")]
    #[non_exhaustive]
    pub enum State {
        /// Invalid.
        #[default]
        StateUnspecified,
        /// Request is received.
        Created,
        /// Request is actively being processed.
        Running,
        /// The batch processing is done.
        Done,
        /// The batch processing was cancelled.
        Cancelled,
    }
}

/// A product label represented as a key-value pair.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

/// A Product contains ReferenceImages.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct Product {
    /// The resource name of the product, in the format
    /// `projects/PROJECT_ID/locations/LOC_ID/products/PRODUCT_ID`.
    pub name: String,

    /// The user-provided name for this Product. Must not be empty.
    pub display_name: String,

    /// User-provided metadata to be stored with this product.
    pub description: String,

    /// Immutable. The category for the product identified by the reference
    /// image, for example `apparel-v2` or `homegoods-v2`.
    pub product_category: String,

    /// Key-value pairs that can be attached to a product.
    pub product_labels: Vec<KeyValue>,
}

impl Product {
    /// Sets the value of [name][Product::name].
    pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
        self.name = v.into();
        self
    }

    /// Sets the value of [display_name][Product::display_name].
    pub fn set_display_name<T: Into<String>>(mut self, v: T) -> Self {
        self.display_name = v.into();
        self
    }

    /// Sets the value of [description][Product::description].
    pub fn set_description<T: Into<String>>(mut self, v: T) -> Self {
        self.description = v.into();
        self
    }

    /// Sets the value of [product_category][Product::product_category].
    pub fn set_product_category<T: Into<String>>(mut self, v: T) -> Self {
        self.product_category = v.into();
        self
    }

    /// Sets the value of [product_labels][Product::product_labels].
    pub fn set_product_labels<T, K, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.product_labels = v
            .into_iter()
            .map(|(key, value)| KeyValue {
                key: key.into(),
                value: value.into(),
            })
            .collect();
        self
    }
}

/// Request message for the `CreateProduct` method.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct CreateProductRequest {
    /// The project in which the Product should be created.
    pub parent: String,

    /// The product to create.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<Product>,

    /// A user-supplied resource id for this Product. If set, the server will
    /// attempt to use this value as the resource id.
    pub product_id: String,
}

/// Request message for the `GetProduct` method.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct GetProductRequest {
    pub name: String,
}

/// Request message for the `ListProducts` method.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListProductsRequest {
    /// The project or ProductSet that should be listed.
    pub parent: String,

    /// The maximum number of items to return. Default 10, maximum 100.
    pub page_size: i32,

    /// The next_page_token returned from a previous List request, if any.
    pub page_token: String,
}

/// Response message for the `ListProducts` method.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct ListProductsResponse {
    /// List of products.
    pub products: Vec<Product>,

    /// Token to retrieve the next page of results, or empty if there are no
    /// more results in the list.
    pub next_page_token: String,
}

impl ListProductsResponse {
    /// Sets the value of [products][ListProductsResponse::products].
    pub fn set_products<T, V>(mut self, v: T) -> Self
    where
        T: IntoIterator<Item = V>,
        V: Into<Product>,
    {
        self.products = v.into_iter().map(|i| i.into()).collect();
        self
    }

    /// Sets the value of [next_page_token][ListProductsResponse::next_page_token].
    pub fn set_next_page_token<T: Into<String>>(mut self, v: T) -> Self {
        self.next_page_token = v.into();
        self
    }
}

impl gax::paginator::PageableResponse for ListProductsResponse {
    type PageItem = Product;

    fn items(self) -> Vec<Self::PageItem> {
        self.products
    }

    fn next_page_token(&self) -> String {
        self.next_page_token.clone()
    }
}

/// Request message for the `DeleteProduct` method.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
#[non_exhaustive]
pub struct DeleteProductRequest {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn image_content_is_base64() -> anyhow::Result<()> {
        let image = Image::default().set_content(bytes::Bytes::from_static(b"abc"));
        let got = serde_json::to_value(&image)?;
        assert_eq!(got, json!({"content": "YWJj"}));
        let back = serde_json::from_value::<Image>(got)?;
        assert_eq!(back, image);
        Ok(())
    }

    #[test]
    fn feature_type_field() -> anyhow::Result<()> {
        let feature = Feature::default()
            .set_type(feature::Type::SafeSearchDetection)
            .set_max_results(10);
        let got = serde_json::to_value(&feature)?;
        assert_eq!(got["type"], json!("SAFE_SEARCH_DETECTION"));
        assert_eq!(got["maxResults"], json!(10));
        Ok(())
    }

    #[test]
    fn annotate_response_with_error() -> anyhow::Result<()> {
        let got = serde_json::from_value::<AnnotateImageResponse>(json!({
            "labelAnnotations": [{"description": "cat", "score": 0.9}],
            "safeSearchAnnotation": {"adult": "VERY_UNLIKELY", "racy": "POSSIBLE"},
            "error": {"code": 3, "message": "bad image"},
        }))?;
        assert_eq!(got.label_annotations[0].description, "cat");
        let safe = got.safe_search_annotation.unwrap_or_default();
        assert_eq!(safe.racy, Likelihood::Possible);
        assert!(safe.adult < Likelihood::Unlikely);
        assert_eq!(got.error.map(|e| e.message), Some("bad image".to_string()));
        Ok(())
    }
}
