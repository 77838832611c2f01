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

use crate::image::ImageSource;
use crate::model;
use gax::client_builder::internal::ClientConfig;
use gax::options::RequestOptions;
use std::sync::Arc;

const SERVICE: &str = "VISION";

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

/// Defines a feature detection helper of [ImageAnnotator].
macro_rules! feature_helper {
    ($(#[$attr:meta])* $name:ident, $feature:ident) => {
        $(#[$attr])*
        pub fn $name<I, T>(&self, images: I) -> super::builder::image_annotator::DetectFeature
        where
            I: IntoIterator<Item = T>,
            T: Into<ImageSource>,
        {
            super::builder::image_annotator::DetectFeature::new(
                self.inner.clone(),
                self.options.clone(),
                model::feature::Type::$feature,
                images.into_iter().map(Into::into).collect(),
            )
        }
    };
}

/// Implements a client for the Cloud Vision API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use google_cloud_vision_v1::client::ImageAnnotator;
/// let client = ImageAnnotator::builder().build().await?;
/// let response = client
///     .safe_search_detection(["gs://my-bucket/photo.jpg"])
///     .send()
///     .await?;
/// println!("{:?}", response.responses[0].safe_search_annotation);
/// # anyhow::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Service that performs Google Cloud Vision API detection tasks over client
/// images, such as face, landmark, logo, label, and text detection. The
/// ImageAnnotator service returns detected entities from the images.
///
/// # Configuration
///
/// To configure `ImageAnnotator` use the `with_*` methods in the type returned
/// by [builder()][ImageAnnotator::builder].
///
/// # Pooling and Cloning
///
/// `ImageAnnotator` holds a connection pool internally, it is advised to
/// create one and the reuse it.  You do not need to wrap `ImageAnnotator` in
/// an [Rc](std::rc::Rc) or [Arc] to reuse it, because it already uses an `Arc`
/// internally.
#[derive(Clone, Debug)]
pub struct ImageAnnotator {
    inner: Option<Arc<dyn super::stub::ImageAnnotator>>,
    options: RequestOptions,
    project: Option<String>,
}

impl ImageAnnotator {
    /// Returns a builder for [ImageAnnotator].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use google_cloud_vision_v1::client::ImageAnnotator;
    /// let client = ImageAnnotator::builder()
    ///     .with_credentials(auth::credentials::Credentials::anonymous())
    ///     .build()
    ///     .await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub fn builder() -> super::builder::image_annotator::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::image_annotator::client::Factory)
    }

    /// Creates a new client from the provided stub.
    ///
    /// The most common case for calling this function is in tests mocking the
    /// client's behavior.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::ImageAnnotator + 'static,
    {
        Self {
            inner: Some(Arc::new(stub)),
            options: RequestOptions::default(),
            project: None,
        }
    }

    pub(crate) async fn new(
        config: ClientConfig<auth::credentials::Credentials>,
        transport: Option<Arc<dyn super::stub::ImageAnnotator>>,
    ) -> gax::client_builder::Result<Self> {
        let project = discover_project(&config)?;
        let inner = transport.map(|t| {
            if config.tracing {
                Arc::new(super::tracing::ImageAnnotator::new(t))
                    as Arc<dyn super::stub::ImageAnnotator>
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

    /// Run image detection and annotation for a batch of images.
    pub fn batch_annotate_images<I, T>(
        &self,
        requests: I,
    ) -> super::builder::image_annotator::BatchAnnotateImages
    where
        I: IntoIterator<Item = T>,
        T: Into<model::AnnotateImageRequest>,
    {
        super::builder::image_annotator::BatchAnnotateImages::new(
            self.inner.clone(),
            self.options.clone(),
        )
        .set_requests(requests)
    }

    /// Run asynchronous image detection and annotation for a list of generic
    /// files, such as PDF files, which may contain multiple pages and multiple
    /// images per page.
    ///
    /// # Long running operations
    ///
    /// This method is used to start, and/or poll a [long-running Operation].
    /// The operation metadata is an
    /// [OperationMetadata][model::OperationMetadata], the result an
    /// [AsyncBatchAnnotateFilesResponse][model::AsyncBatchAnnotateFilesResponse].
    ///
    /// [long-running operation]: https://google.aip.dev/151
    pub fn async_batch_annotate_files<I, T>(
        &self,
        requests: I,
    ) -> super::builder::image_annotator::AsyncBatchAnnotateFiles
    where
        I: IntoIterator<Item = T>,
        T: Into<model::AsyncAnnotateFileRequest>,
    {
        super::builder::image_annotator::AsyncBatchAnnotateFiles::new(
            self.inner.clone(),
            self.options.clone(),
        )
        .set_requests(requests)
    }

    feature_helper!(
        /// Detects faces within the images.
        face_detection,
        FaceDetection
    );

    feature_helper!(
        /// Detects popular natural and man-made structures within the images.
        landmark_detection,
        LandmarkDetection
    );

    feature_helper!(
        /// Detects popular product logos within the images.
        logo_detection,
        LogoDetection
    );

    feature_helper!(
        /// Detects broad sets of categories within the images.
        label_detection,
        LabelDetection
    );

    feature_helper!(
        /// Performs optical character recognition (OCR) on the images.
        text_detection,
        TextDetection
    );

    feature_helper!(
        /// Performs dense text document OCR on the images.
        document_text_detection,
        DocumentTextDetection
    );

    feature_helper!(
        /// Detects explicit content, such as adult or violent content, within
        /// the images.
        safe_search_detection,
        SafeSearchDetection
    );

    feature_helper!(
        /// Computes image properties, such as dominant colors.
        image_properties_detection,
        ImageProperties
    );

    feature_helper!(
        /// Searches the Internet for similar images.
        web_detection,
        WebDetection
    );

    feature_helper!(
        /// Searches a product set for products similar to the images. Set the
        /// product set with [ImageContext::product_search_params][model::ImageContext::product_search_params].
        product_search_detection,
        ProductSearch
    );

    feature_helper!(
        /// Detects and extracts multiple objects in the images.
        object_localization_detection,
        ObjectLocalization
    );

    feature_helper!(
        /// Suggests vertices for crop regions of the images.
        crop_hints_detection,
        CropHints
    );
}

/// Implements a client for the Cloud Vision Product Search API.
///
/// # Example
/// ```no_run
/// # tokio_test::block_on(async {
/// # use google_cloud_vision_v1::client::ProductSearch;
/// # use google_cloud_vision_v1::paths;
/// let client = ProductSearch::builder().build().await?;
/// let mut products = client.list_products(paths::location_path("my-project", "us-west1")?).by_item();
/// while let Some(product) = products.next().await {
///     println!("{}", product?.display_name);
/// }
/// # anyhow::Result::<()>::Ok(()) });
/// ```
///
/// # Service Description
///
/// Manages Products and ProductSets of reference images for use in product
/// search.
///
/// # Pooling and Cloning
///
/// `ProductSearch` holds a connection pool internally, it is advised to
/// create one and the reuse it.
#[derive(Clone, Debug)]
pub struct ProductSearch {
    inner: Option<Arc<dyn super::stub::ProductSearch>>,
    options: RequestOptions,
    project: Option<String>,
}

impl ProductSearch {
    /// Returns a builder for [ProductSearch].
    pub fn builder() -> super::builder::product_search::ClientBuilder {
        gax::client_builder::internal::new_builder(super::builder::product_search::client::Factory)
    }

    /// Creates a new client from the provided stub.
    pub fn from_stub<T>(stub: T) -> Self
    where
        T: super::stub::ProductSearch + 'static,
    {
        Self {
            inner: Some(Arc::new(stub)),
            options: RequestOptions::default(),
            project: None,
        }
    }

    pub(crate) async fn new(
        config: ClientConfig<auth::credentials::Credentials>,
        transport: Option<Arc<dyn super::stub::ProductSearch>>,
    ) -> gax::client_builder::Result<Self> {
        let project = discover_project(&config)?;
        let inner = transport.map(|t| {
            if config.tracing {
                Arc::new(super::tracing::ProductSearch::new(t))
                    as Arc<dyn super::stub::ProductSearch>
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

    /// Creates and returns a new product resource.
    ///
    /// Possible errors:
    ///
    /// * Returns INVALID_ARGUMENT if display_name is missing or longer than
    ///   4096 characters.
    /// * Returns INVALID_ARGUMENT if product_category is missing or invalid.
    pub fn create_product(
        &self,
        parent: impl Into<String>,
        product: impl Into<model::Product>,
    ) -> super::builder::product_search::CreateProduct {
        super::builder::product_search::CreateProduct::new(self.inner.clone(), self.options.clone())
            .set_parent(parent)
            .set_product(product)
    }

    /// Gets information associated with a Product.
    pub fn get_product(
        &self,
        name: impl Into<String>,
    ) -> super::builder::product_search::GetProduct {
        super::builder::product_search::GetProduct::new(self.inner.clone(), self.options.clone())
            .set_name(name)
    }

    /// Lists products in an unspecified order.
    pub fn list_products(
        &self,
        parent: impl Into<String>,
    ) -> super::builder::product_search::ListProducts {
        super::builder::product_search::ListProducts::new(self.inner.clone(), self.options.clone())
            .set_parent(parent)
    }

    /// Permanently deletes a product and its reference images.
    pub fn delete_product(
        &self,
        name: impl Into<String>,
    ) -> super::builder::product_search::DeleteProduct {
        super::builder::product_search::DeleteProduct::new(self.inner.clone(), self.options.clone())
            .set_name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::image_annotator::DEFAULT_MAX_RESULTS;
    use crate::paths;
    use crate::stub::tests::{MockImageAnnotator, MockProductSearch};
    use lro::Poller;
    use model::feature::Type;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use test_case::test_case;

    type TestResult = anyhow::Result<()>;

    fn labels() -> model::BatchAnnotateImagesResponse {
        model::BatchAnnotateImagesResponse::default().set_responses([
            model::AnnotateImageResponse::default().set_label_annotations([
                model::EntityAnnotation::default()
                    .set_description("cat")
                    .set_score(0.97_f32),
            ]),
        ])
    }

    #[test_case(ImageAnnotator::face_detection, Type::FaceDetection)]
    #[test_case(ImageAnnotator::landmark_detection, Type::LandmarkDetection)]
    #[test_case(ImageAnnotator::logo_detection, Type::LogoDetection)]
    #[test_case(ImageAnnotator::label_detection, Type::LabelDetection)]
    #[test_case(ImageAnnotator::text_detection, Type::TextDetection)]
    #[test_case(ImageAnnotator::document_text_detection, Type::DocumentTextDetection)]
    #[test_case(ImageAnnotator::safe_search_detection, Type::SafeSearchDetection)]
    #[test_case(ImageAnnotator::image_properties_detection, Type::ImageProperties)]
    #[test_case(ImageAnnotator::web_detection, Type::WebDetection)]
    #[test_case(ImageAnnotator::product_search_detection, Type::ProductSearch)]
    #[test_case(ImageAnnotator::object_localization_detection, Type::ObjectLocalization)]
    #[test_case(ImageAnnotator::crop_hints_detection, Type::CropHints)]
    #[tokio::test]
    async fn feature_helpers(
        helper: fn(
            &ImageAnnotator,
            [&'static str; 1],
        ) -> crate::builder::image_annotator::DetectFeature,
        want: Type,
    ) -> TestResult {
        let mut mock = MockImageAnnotator::new();
        mock.expect_batch_annotate_images()
            .withf(move |r, _| {
                r.requests.len() == 1
                    && r.requests[0].features
                        == vec![
                            model::Feature::default()
                                .set_type(want)
                                .set_max_results(DEFAULT_MAX_RESULTS),
                        ]
            })
            .return_once(|_, _| Ok(labels()));

        let client = ImageAnnotator::from_stub(mock);
        let response = helper(&client, ["gs://bucket/cat.jpg"]).send().await?;
        assert_eq!(response, labels());
        Ok(())
    }

    #[tokio::test]
    async fn label_detection_resolves_images() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"GIF89a")?;
        let path = file.path().to_path_buf();

        let mut mock = MockImageAnnotator::new();
        mock.expect_batch_annotate_images()
            .withf(|r, _| {
                let images = r
                    .requests
                    .iter()
                    .map(|r| r.image.clone().unwrap_or_default())
                    .collect::<Vec<_>>();
                images.len() == 3
                    && images[0].content.as_deref() == Some(&b"GIF89a"[..])
                    && images[1].source.as_ref().map(|s| s.gcs_image_uri.as_str())
                        == Some("gs://bucket/cat.jpg")
                    && images[2].source.as_ref().map(|s| s.image_uri.as_str())
                        == Some("https://example.com/dog.png")
                    && r.requests.iter().all(|r| r.features[0].max_results == 3)
                    && r.requests.iter().all(|r| {
                        r.image_context.as_ref().map(|c| c.language_hints.clone())
                            == Some(vec!["en".to_string()])
                    })
            })
            .return_once(|_, _| Ok(labels()));

        let client = ImageAnnotator::from_stub(mock);
        let response = client
            .label_detection([ImageSource::from(path)])
            .add_image("gs://bucket/cat.jpg")
            .add_image("https://example.com/dog.png")
            .set_max_results(3)
            .set_image_context(model::ImageContext::default().set_language_hints(["en"]))
            .send()
            .await?;
        assert_eq!(response.responses.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn unreadable_image_sends_nothing() {
        let mock = MockImageAnnotator::new();
        let client = ImageAnnotator::from_stub(mock);
        let err = client
            .text_detection(["/no/such/dir/page.png"])
            .send()
            .await
            .unwrap_err();
        assert!(err.is_io(), "{err:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn offline_annotation() -> TestResult {
        let mut mock = MockImageAnnotator::new();
        mock.expect_async_batch_annotate_files()
            .withf(|r, _| {
                let file = &r.requests[0];
                file.input_config
                    .as_ref()
                    .and_then(|c| c.gcs_source.as_ref())
                    .map(|s| s.uri.as_str())
                    == Some("gs://bucket/scan.pdf")
                    && file.input_config.as_ref().map(|c| c.mime_type.as_str())
                        == Some("application/pdf")
                    && file.output_config.as_ref().map(|c| c.batch_size) == Some(2)
            })
            .return_once(|_, _| Ok(lro::model::Operation::default().set_name("operations/ocr-1")));
        let response = model::AsyncBatchAnnotateFilesResponse::default();
        let any = lro::to_any(&response)?;
        mock.expect_get_operation().return_once(move |_, _| {
            Ok(lro::model::Operation::default()
                .set_name("operations/ocr-1")
                .set_done(true)
                .set_result(lro::model::operation::Result::Response(any)))
        });

        let client = ImageAnnotator::from_stub(mock);
        let got = client
            .document_text_detection(["gs://bucket/scan.pdf"])
            .set_mime_type("application/pdf")
            .set_batch_size(2)
            .offline_poller("gs://bucket/output/")
            .until_done()
            .await?;
        assert_eq!(got, response);
        Ok(())
    }

    #[tokio::test]
    async fn offline_annotation_needs_gcs() {
        let mock = MockImageAnnotator::new();
        let client = ImageAnnotator::from_stub(mock);
        let err = client
            .document_text_detection(["https://example.com/scan.pdf"])
            .start_offline("gs://bucket/output/")
            .await
            .unwrap_err();
        assert!(err.is_binding(), "{err:?}");
    }

    #[tokio::test]
    async fn products() -> TestResult {
        let mut mock = MockProductSearch::new();
        mock.expect_create_product()
            .withf(|r, _| r.parent == "projects/p/locations/us-west1" && r.product_id == "sneaker")
            .return_once(|r, _| {
                Ok(r.product
                    .unwrap_or_default()
                    .set_name("projects/p/locations/us-west1/products/sneaker"))
            });
        mock.expect_list_products()
            .withf(|r, _| r.page_token.is_empty())
            .return_once(|_, _| {
                Ok(model::ListProductsResponse::default()
                    .set_products([model::Product::default().set_display_name("Sneaker")])
                    .set_next_page_token("p2"))
            });
        mock.expect_list_products()
            .withf(|r, _| r.page_token == "p2")
            .return_once(|_, _| {
                Ok(model::ListProductsResponse::default()
                    .set_products([model::Product::default().set_display_name("Boot")]))
            });
        mock.expect_delete_product()
            .withf(|r, _| r.name == "projects/p/locations/us-west1/products/sneaker")
            .return_once(|_, _| Ok(()));

        let client = ProductSearch::from_stub(mock);
        let location = paths::location_path("p", "us-west1")?;
        let product = client
            .create_product(
                &location,
                model::Product::default()
                    .set_display_name("Sneaker")
                    .set_product_category("apparel-v2")
                    .set_product_labels([("color", "red")]),
            )
            .set_product_id("sneaker")
            .send()
            .await?;
        assert_eq!(product.name, paths::product_path("p", "us-west1", "sneaker")?);
        assert_eq!(product.product_labels[0].value, "red");

        let mut items = client.list_products(&location).by_item();
        let mut names = Vec::new();
        while let Some(p) = items.next().await {
            names.push(p?.display_name);
        }
        assert_eq!(names, vec!["Sneaker", "Boot"]);

        client.delete_product(&product.name).send().await?;
        Ok(())
    }

    #[tokio::test]
    async fn get_product_not_found() -> TestResult {
        let mut mock = MockProductSearch::new();
        mock.expect_get_product().return_once(|_, _| {
            Err(gax::error::Error::service(
                gax::error::rpc::Status::default()
                    .set_code(gax::error::rpc::Code::NotFound)
                    .set_message("no such product"),
            ))
        });
        let client = ProductSearch::from_stub(mock);
        let err = client
            .get_product(paths::product_path("p", "us-west1", "missing")?)
            .send()
            .await
            .unwrap_err();
        assert_eq!(
            err.status().map(|s| s.code),
            Some(gax::error::rpc::Code::NotFound)
        );
        Ok(())
    }

    #[tokio::test]
    async fn disconnected() -> TestResult {
        let client = ImageAnnotator::builder()
            .with_credentials(auth::credentials::Credentials::anonymous())
            .with_project("test-project")
            .build()
            .await?;
        assert!(!client.is_connected());
        assert_eq!(client.project(), Some("test-project"));
        let err = client
            .label_detection(["gs://bucket/cat.jpg"])
            .send()
            .await
            .unwrap_err();
        assert!(err.is_no_connection(), "{err:?}");
        Ok(())
    }
}
