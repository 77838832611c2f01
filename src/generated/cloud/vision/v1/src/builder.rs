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

pub mod image_annotator {
    use crate::Result;
    use crate::image::ImageSource;
    use crate::model;
    use gax::error::Error;
    use gax::options::RequestOptions;
    use gax::options::internal::with_attempt_timeout;
    use std::sync::Arc;

    /// The number of results requested by the feature detection helpers,
    /// unless changed with `set_max_results()`.
    pub const DEFAULT_MAX_RESULTS: i32 = 10;

    /// The number of responses per output file in offline annotations.
    pub const DEFAULT_BATCH_SIZE: i32 = 10;

    /// A builder for [ImageAnnotator][crate::client::ImageAnnotator].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use google_cloud_vision_v1::*;
    /// # use builder::image_annotator::ClientBuilder;
    /// # use client::ImageAnnotator;
    /// let builder: ClientBuilder = ImageAnnotator::builder();
    /// let client = builder
    ///     .with_endpoint("https://vision.googleapis.com")
    ///     .with_credentials(auth::credentials::Credentials::anonymous())
    ///     .build()
    ///     .await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder = gax::client_builder::ClientBuilder<
        client::Factory,
        auth::credentials::Credentials,
        Arc<dyn crate::stub::ImageAnnotator>,
    >;

    pub(crate) mod client {
        use super::super::super::client::ImageAnnotator;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = ImageAnnotator;
            type Credentials = auth::credentials::Credentials;
            type Transport = std::sync::Arc<dyn crate::stub::ImageAnnotator>;
            async fn build(
                self,
                config: gax::client_builder::internal::ClientConfig<Self::Credentials>,
                transport: Option<Self::Transport>,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config, transport).await
            }
        }
    }

    /// Common implementation for [crate::client::ImageAnnotator] request builders.
    #[derive(Clone, Debug)]
    pub struct RequestBuilder<R: std::default::Default> {
        stub: Option<Arc<dyn crate::stub::ImageAnnotator>>,
        request: R,
        options: RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: Option<Arc<dyn crate::stub::ImageAnnotator>>,
            options: RequestOptions,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options,
            }
        }

        fn connected(&self) -> Result<Arc<dyn crate::stub::ImageAnnotator>> {
            self.stub.clone().ok_or_else(Error::no_connection)
        }
    }

    /// The request builder for [ImageAnnotator::batch_annotate_images][crate::client::ImageAnnotator::batch_annotate_images] calls.
    #[derive(Clone, Debug)]
    pub struct BatchAnnotateImages(RequestBuilder<model::BatchAnnotateImagesRequest>);

    impl BatchAnnotateImages {
        pub(crate) fn new(
            stub: Option<Arc<dyn crate::stub::ImageAnnotator>>,
            options: RequestOptions,
        ) -> Self {
            Self(RequestBuilder::new(stub, options))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::BatchAnnotateImagesRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets the value of [requests][model::BatchAnnotateImagesRequest::requests].
        pub fn set_requests<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<model::AnnotateImageRequest>,
        {
            self.0.request.requests = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [parent][model::BatchAnnotateImagesRequest::parent].
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::BatchAnnotateImagesResponse> {
            let stub = self.0.connected()?;
            let options = self.0.options;
            with_attempt_timeout(
                &options,
                stub.batch_annotate_images(self.0.request, options.clone()),
            )
            .await
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for BatchAnnotateImages {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ImageAnnotator::async_batch_annotate_files][crate::client::ImageAnnotator::async_batch_annotate_files] calls.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_vision_v1::builder::image_annotator::AsyncBatchAnnotateFiles;
    /// # async fn sample() -> gax::Result<()> {
    /// use lro::Poller;
    ///
    /// let builder = prepare_request_builder();
    /// let response = builder.poller().until_done().await?;
    ///
    /// fn prepare_request_builder() -> AsyncBatchAnnotateFiles {
    ///   # panic!();
    ///   // ... details omitted ...
    /// }
    /// # Ok(()) }
    /// ```
    #[derive(Clone, Debug)]
    pub struct AsyncBatchAnnotateFiles(RequestBuilder<model::AsyncBatchAnnotateFilesRequest>);

    impl AsyncBatchAnnotateFiles {
        pub(crate) fn new(
            stub: Option<Arc<dyn crate::stub::ImageAnnotator>>,
            options: RequestOptions,
        ) -> Self {
            Self(RequestBuilder::new(stub, options))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::AsyncBatchAnnotateFilesRequest>>(
            mut self,
            v: V,
        ) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets the value of [requests][model::AsyncBatchAnnotateFilesRequest::requests].
        pub fn set_requests<T, V>(mut self, v: T) -> Self
        where
            T: IntoIterator<Item = V>,
            V: Into<model::AsyncAnnotateFileRequest>,
        {
            self.0.request.requests = v.into_iter().map(|i| i.into()).collect();
            self
        }

        /// Sets the value of [parent][model::AsyncBatchAnnotateFilesRequest::parent].
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sends the request.
        ///
        /// # Long running operations
        ///
        /// This starts, but does not poll, a long-running operation.
        pub async fn send(self) -> Result<lro::model::Operation> {
            let stub = self.0.connected()?;
            let options = self.0.options;
            with_attempt_timeout(
                &options,
                stub.async_batch_annotate_files(self.0.request, options.clone()),
            )
            .await
        }

        /// Starts the operation, returning a handle to track its progress.
        pub async fn start(
            self,
        ) -> Result<lro::Operation<model::AsyncBatchAnnotateFilesResponse, model::OperationMetadata>>
        {
            let stub = self.0.connected()?;
            let options = self.0.options.clone();
            let op = self.send().await?;
            Ok(lro::Operation::new(stub, options, op))
        }

        /// Creates a [Poller][lro::Poller] to work with `async_batch_annotate_files`.
        pub fn poller(
            self,
        ) -> impl lro::Poller<model::AsyncBatchAnnotateFilesResponse, model::OperationMetadata>
        {
            lro::new_poller(move || self.start())
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for AsyncBatchAnnotateFiles {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for the feature detection helpers, such as
    /// [ImageAnnotator::label_detection][crate::client::ImageAnnotator::label_detection].
    ///
    /// Each image becomes one [AnnotateImageRequest][model::AnnotateImageRequest]
    /// asking for a single feature.
    ///
    /// # Example
    /// ```no_run
    /// # use google_cloud_vision_v1::client::ImageAnnotator;
    /// # async fn sample(client: &ImageAnnotator) -> gax::Result<()> {
    /// let response = client
    ///     .label_detection(["gs://my-bucket/cat.jpg", "images/dog.png"])
    ///     .set_max_results(5)
    ///     .send()
    ///     .await?;
    /// for r in response.responses {
    ///     println!("{:?}", r.label_annotations);
    /// }
    /// # Ok(()) }
    /// ```
    #[derive(Clone, Debug)]
    pub struct DetectFeature {
        stub: Option<Arc<dyn crate::stub::ImageAnnotator>>,
        options: RequestOptions,
        images: Vec<ImageSource>,
        feature: model::Feature,
        image_context: Option<model::ImageContext>,
        parent: String,
        mime_type: String,
        batch_size: i32,
    }

    impl DetectFeature {
        pub(crate) fn new(
            stub: Option<Arc<dyn crate::stub::ImageAnnotator>>,
            options: RequestOptions,
            feature: model::feature::Type,
            images: Vec<ImageSource>,
        ) -> Self {
            Self {
                stub,
                options,
                images,
                feature: model::Feature::default()
                    .set_type(feature)
                    .set_max_results(DEFAULT_MAX_RESULTS),
                image_context: None,
                parent: String::new(),
                mime_type: String::new(),
                batch_size: DEFAULT_BATCH_SIZE,
            }
        }

        /// Adds one more image to annotate.
        pub fn add_image<T: Into<ImageSource>>(mut self, v: T) -> Self {
            self.images.push(v.into());
            self
        }

        /// Sets the maximum number of results for the feature.
        pub fn set_max_results<T: Into<i32>>(mut self, v: T) -> Self {
            self.feature.max_results = v.into();
            self
        }

        /// Sets the model used for the feature, `builtin/stable` or
        /// `builtin/latest`.
        pub fn set_model<T: Into<String>>(mut self, v: T) -> Self {
            self.feature.model = v.into();
            self
        }

        /// Sets the context sent with every image.
        pub fn set_image_context<T: Into<model::ImageContext>>(mut self, v: T) -> Self {
            self.image_context = Some(v.into());
            self
        }

        /// Sets the project and location that process the request.
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.parent = v.into();
            self
        }

        /// Sets the mime type of the files, used by offline annotations.
        pub fn set_mime_type<T: Into<String>>(mut self, v: T) -> Self {
            self.mime_type = v.into();
            self
        }

        /// Sets the number of responses per output file, used by offline
        /// annotations.
        pub fn set_batch_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.batch_size = v.into();
            self
        }

        /// Annotates the images and waits for the results.
        ///
        /// Local files are read before the request is sent. An unreadable
        /// file fails the call with an I/O error and nothing is sent.
        pub async fn send(self) -> Result<model::BatchAnnotateImagesResponse> {
            let stub = self.connected()?;
            let images =
                futures::future::try_join_all(self.images.iter().map(|i| i.resolve())).await?;
            let requests = images.into_iter().map(|image| {
                model::AnnotateImageRequest::default()
                    .set_image(image)
                    .set_features([self.feature.clone()])
                    .set_image_context(self.image_context.clone())
            });
            let request = model::BatchAnnotateImagesRequest::default()
                .set_requests(requests)
                .set_parent(self.parent);
            let options = self.options;
            with_attempt_timeout(&options, stub.batch_annotate_images(request, options.clone()))
                .await
        }

        /// Starts an offline annotation, writing the results to `destination`.
        ///
        /// Offline annotations read the images from Cloud Storage, all the
        /// images must be `gs://` URIs.
        pub async fn start_offline(
            self,
            destination: impl Into<String>,
        ) -> Result<lro::Operation<model::AsyncBatchAnnotateFilesResponse, model::OperationMetadata>>
        {
            let request = self.offline_request(destination.into())?;
            AsyncBatchAnnotateFiles::new(self.stub, self.options)
                .with_request(request)
                .start()
                .await
        }

        /// Creates a [Poller][lro::Poller] for an offline annotation.
        pub fn offline_poller(
            self,
            destination: impl Into<String>,
        ) -> impl lro::Poller<model::AsyncBatchAnnotateFilesResponse, model::OperationMetadata>
        {
            let destination = destination.into();
            lro::new_poller(move || self.start_offline(destination))
        }

        fn offline_request(
            &self,
            destination: String,
        ) -> Result<model::AsyncBatchAnnotateFilesRequest> {
            let requests = self
                .images
                .iter()
                .map(|image| {
                    let uri = image.gcs_uri().ok_or_else(|| {
                        Error::binding("offline annotations need `gs://` image URIs")
                    })?;
                    Ok(model::AsyncAnnotateFileRequest::default()
                        .set_input_config(
                            model::InputConfig::default()
                                .set_gcs_uri(uri)
                                .set_mime_type(self.mime_type.clone()),
                        )
                        .set_features([self.feature.clone()])
                        .set_image_context(self.image_context.clone())
                        .set_output_config(
                            model::OutputConfig::default()
                                .set_gcs_uri(destination.clone())
                                .set_batch_size(self.batch_size),
                        ))
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(model::AsyncBatchAnnotateFilesRequest::default()
                .set_requests(requests)
                .set_parent(self.parent.clone()))
        }

        fn connected(&self) -> Result<Arc<dyn crate::stub::ImageAnnotator>> {
            self.stub.clone().ok_or_else(Error::no_connection)
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DetectFeature {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.options
        }
    }
}

pub mod product_search {
    use crate::Result;
    use crate::model;
    use gax::error::Error;
    use gax::options::RequestOptions;
    use gax::options::internal::with_attempt_timeout;
    use gax::paginator::{ItemPaginator, Paginator};
    use std::sync::Arc;

    /// A builder for [ProductSearch][crate::client::ProductSearch].
    ///
    /// ```
    /// # tokio_test::block_on(async {
    /// # use google_cloud_vision_v1::*;
    /// # use builder::product_search::ClientBuilder;
    /// # use client::ProductSearch;
    /// let builder: ClientBuilder = ProductSearch::builder();
    /// let client = builder
    ///     .with_endpoint("https://vision.googleapis.com")
    ///     .with_credentials(auth::credentials::Credentials::anonymous())
    ///     .build()
    ///     .await?;
    /// # gax::client_builder::Result::<()>::Ok(()) });
    /// ```
    pub type ClientBuilder = gax::client_builder::ClientBuilder<
        client::Factory,
        auth::credentials::Credentials,
        Arc<dyn crate::stub::ProductSearch>,
    >;

    pub(crate) mod client {
        use super::super::super::client::ProductSearch;
        pub struct Factory;
        impl gax::client_builder::internal::ClientFactory for Factory {
            type Client = ProductSearch;
            type Credentials = auth::credentials::Credentials;
            type Transport = std::sync::Arc<dyn crate::stub::ProductSearch>;
            async fn build(
                self,
                config: gax::client_builder::internal::ClientConfig<Self::Credentials>,
                transport: Option<Self::Transport>,
            ) -> gax::client_builder::Result<Self::Client> {
                Self::Client::new(config, transport).await
            }
        }
    }

    /// Common implementation for [crate::client::ProductSearch] request builders.
    #[derive(Clone, Debug)]
    pub struct RequestBuilder<R: std::default::Default> {
        stub: Option<Arc<dyn crate::stub::ProductSearch>>,
        request: R,
        options: RequestOptions,
    }

    impl<R> RequestBuilder<R>
    where
        R: std::default::Default,
    {
        pub(crate) fn new(
            stub: Option<Arc<dyn crate::stub::ProductSearch>>,
            options: RequestOptions,
        ) -> Self {
            Self {
                stub,
                request: R::default(),
                options,
            }
        }

        fn connected(&self) -> Result<Arc<dyn crate::stub::ProductSearch>> {
            self.stub.clone().ok_or_else(Error::no_connection)
        }
    }

    /// The request builder for [ProductSearch::create_product][crate::client::ProductSearch::create_product] calls.
    #[derive(Clone, Debug)]
    pub struct CreateProduct(RequestBuilder<model::CreateProductRequest>);

    impl CreateProduct {
        pub(crate) fn new(
            stub: Option<Arc<dyn crate::stub::ProductSearch>>,
            options: RequestOptions,
        ) -> Self {
            Self(RequestBuilder::new(stub, options))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::CreateProductRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets the value of [parent][model::CreateProductRequest::parent].
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [product][model::CreateProductRequest::product].
        pub fn set_product<T: Into<model::Product>>(mut self, v: T) -> Self {
            self.0.request.product = Some(v.into());
            self
        }

        /// Sets the value of [product_id][model::CreateProductRequest::product_id].
        pub fn set_product_id<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.product_id = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Product> {
            let stub = self.0.connected()?;
            let options = self.0.options;
            with_attempt_timeout(&options, stub.create_product(self.0.request, options.clone()))
                .await
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for CreateProduct {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProductSearch::get_product][crate::client::ProductSearch::get_product] calls.
    #[derive(Clone, Debug)]
    pub struct GetProduct(RequestBuilder<model::GetProductRequest>);

    impl GetProduct {
        pub(crate) fn new(
            stub: Option<Arc<dyn crate::stub::ProductSearch>>,
            options: RequestOptions,
        ) -> Self {
            Self(RequestBuilder::new(stub, options))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::GetProductRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets the value of [name][model::GetProductRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::Product> {
            let stub = self.0.connected()?;
            let options = self.0.options;
            with_attempt_timeout(&options, stub.get_product(self.0.request, options.clone())).await
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for GetProduct {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProductSearch::list_products][crate::client::ProductSearch::list_products] calls.
    #[derive(Clone, Debug)]
    pub struct ListProducts(RequestBuilder<model::ListProductsRequest>);

    impl ListProducts {
        pub(crate) fn new(
            stub: Option<Arc<dyn crate::stub::ProductSearch>>,
            options: RequestOptions,
        ) -> Self {
            Self(RequestBuilder::new(stub, options))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::ListProductsRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets the value of [parent][model::ListProductsRequest::parent].
        pub fn set_parent<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.parent = v.into();
            self
        }

        /// Sets the value of [page_size][model::ListProductsRequest::page_size].
        pub fn set_page_size<T: Into<i32>>(mut self, v: T) -> Self {
            self.0.request.page_size = v.into();
            self
        }

        /// Sets the value of [page_token][model::ListProductsRequest::page_token].
        pub fn set_page_token<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.page_token = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<model::ListProductsResponse> {
            let stub = self.0.connected()?;
            let options = self.0.options;
            with_attempt_timeout(&options, stub.list_products(self.0.request, options.clone()))
                .await
        }

        /// Streams the responses back.
        pub fn by_page(self) -> Paginator<model::ListProductsResponse, Error> {
            let token = self.0.request.page_token.clone();
            let execute = move |token: String| {
                let builder = self.clone().set_page_token(token);
                builder.send()
            };
            Paginator::new(token, execute)
        }

        /// Streams each item in the collection.
        pub fn by_item(self) -> ItemPaginator<model::ListProductsResponse, Error> {
            self.by_page().items()
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for ListProducts {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }

    /// The request builder for [ProductSearch::delete_product][crate::client::ProductSearch::delete_product] calls.
    #[derive(Clone, Debug)]
    pub struct DeleteProduct(RequestBuilder<model::DeleteProductRequest>);

    impl DeleteProduct {
        pub(crate) fn new(
            stub: Option<Arc<dyn crate::stub::ProductSearch>>,
            options: RequestOptions,
        ) -> Self {
            Self(RequestBuilder::new(stub, options))
        }

        /// Sets the full request, replacing any prior values.
        pub fn with_request<V: Into<model::DeleteProductRequest>>(mut self, v: V) -> Self {
            self.0.request = v.into();
            self
        }

        /// Sets the value of [name][model::DeleteProductRequest::name].
        pub fn set_name<T: Into<String>>(mut self, v: T) -> Self {
            self.0.request.name = v.into();
            self
        }

        /// Sends the request.
        pub async fn send(self) -> Result<()> {
            let stub = self.0.connected()?;
            let options = self.0.options;
            with_attempt_timeout(&options, stub.delete_product(self.0.request, options.clone()))
                .await
        }
    }

    #[doc(hidden)]
    impl gax::options::internal::RequestBuilder for DeleteProduct {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0.options
        }
    }
}
