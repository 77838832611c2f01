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

/// Defines the trait used to implement [crate::client::ImageAnnotator].
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
#[async_trait::async_trait]
pub trait ImageAnnotator: lro::stub::Operations + std::fmt::Debug + Send + Sync {
    /// Implements [crate::client::ImageAnnotator::batch_annotate_images].
    async fn batch_annotate_images(
        &self,
        _req: model::BatchAnnotateImagesRequest,
        _options: RequestOptions,
    ) -> Result<model::BatchAnnotateImagesResponse> {
        unimplemented_stub("batch_annotate_images")
    }

    /// Implements [crate::client::ImageAnnotator::async_batch_annotate_files].
    async fn async_batch_annotate_files(
        &self,
        _req: model::AsyncBatchAnnotateFilesRequest,
        _options: RequestOptions,
    ) -> Result<lro::model::Operation> {
        unimplemented_stub("async_batch_annotate_files")
    }
}

/// Defines the trait used to implement [crate::client::ProductSearch].
#[async_trait::async_trait]
pub trait ProductSearch: std::fmt::Debug + Send + Sync {
    /// Implements [crate::client::ProductSearch::create_product].
    async fn create_product(
        &self,
        _req: model::CreateProductRequest,
        _options: RequestOptions,
    ) -> Result<model::Product> {
        unimplemented_stub("create_product")
    }

    /// Implements [crate::client::ProductSearch::get_product].
    async fn get_product(
        &self,
        _req: model::GetProductRequest,
        _options: RequestOptions,
    ) -> Result<model::Product> {
        unimplemented_stub("get_product")
    }

    /// Implements [crate::client::ProductSearch::list_products].
    async fn list_products(
        &self,
        _req: model::ListProductsRequest,
        _options: RequestOptions,
    ) -> Result<model::ListProductsResponse> {
        unimplemented_stub("list_products")
    }

    /// Implements [crate::client::ProductSearch::delete_product].
    async fn delete_product(
        &self,
        _req: model::DeleteProductRequest,
        _options: RequestOptions,
    ) -> Result<()> {
        unimplemented_stub("delete_product")
    }
}

#[async_trait::async_trait]
impl<T> ImageAnnotator for Arc<T>
where
    T: ImageAnnotator + ?Sized,
{
    async fn batch_annotate_images(
        &self,
        req: model::BatchAnnotateImagesRequest,
        options: RequestOptions,
    ) -> Result<model::BatchAnnotateImagesResponse> {
        (**self).batch_annotate_images(req, options).await
    }

    async fn async_batch_annotate_files(
        &self,
        req: model::AsyncBatchAnnotateFilesRequest,
        options: RequestOptions,
    ) -> Result<lro::model::Operation> {
        (**self).async_batch_annotate_files(req, options).await
    }
}

#[async_trait::async_trait]
impl<T> ProductSearch for Arc<T>
where
    T: ProductSearch + ?Sized,
{
    async fn create_product(
        &self,
        req: model::CreateProductRequest,
        options: RequestOptions,
    ) -> Result<model::Product> {
        (**self).create_product(req, options).await
    }

    async fn get_product(
        &self,
        req: model::GetProductRequest,
        options: RequestOptions,
    ) -> Result<model::Product> {
        (**self).get_product(req, options).await
    }

    async fn list_products(
        &self,
        req: model::ListProductsRequest,
        options: RequestOptions,
    ) -> Result<model::ListProductsResponse> {
        (**self).list_products(req, options).await
    }

    async fn delete_product(
        &self,
        req: model::DeleteProductRequest,
        options: RequestOptions,
    ) -> Result<()> {
        (**self).delete_product(req, options).await
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    mockall::mock! {
        #[derive(Debug)]
        pub(crate) ImageAnnotator {}
        #[async_trait::async_trait]
        impl lro::stub::Operations for ImageAnnotator {
            async fn get_operation(&self, req: lro::model::GetOperationRequest, options: RequestOptions) -> Result<lro::model::Operation>;
        }
        #[async_trait::async_trait]
        impl super::ImageAnnotator for ImageAnnotator {
            async fn batch_annotate_images(&self, req: model::BatchAnnotateImagesRequest, options: RequestOptions) -> Result<model::BatchAnnotateImagesResponse>;
            async fn async_batch_annotate_files(&self, req: model::AsyncBatchAnnotateFilesRequest, options: RequestOptions) -> Result<lro::model::Operation>;
        }
    }

    mockall::mock! {
        #[derive(Debug)]
        pub(crate) ProductSearch {}
        #[async_trait::async_trait]
        impl super::ProductSearch for ProductSearch {
            async fn create_product(&self, req: model::CreateProductRequest, options: RequestOptions) -> Result<model::Product>;
            async fn get_product(&self, req: model::GetProductRequest, options: RequestOptions) -> Result<model::Product>;
            async fn list_products(&self, req: model::ListProductsRequest, options: RequestOptions) -> Result<model::ListProductsResponse>;
            async fn delete_product(&self, req: model::DeleteProductRequest, options: RequestOptions) -> Result<()>;
        }
    }

    #[derive(Debug)]
    struct Empty;
    impl ProductSearch for Empty {}

    #[tokio::test]
    async fn defaults_are_unimplemented() {
        let stub: Arc<dyn ProductSearch> = Arc::new(Empty);
        let got = stub
            .get_product(model::GetProductRequest::default(), RequestOptions::default())
            .await;
        assert!(matches!(got, Err(ref e) if e.status().is_some()), "{got:?}");
    }
}
