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

/// Implements a [ImageAnnotator](super::stub::ImageAnnotator) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct ImageAnnotator<T>
where
    T: super::stub::ImageAnnotator + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> ImageAnnotator<T>
where
    T: super::stub::ImageAnnotator + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

operations_decorator!(ImageAnnotator, super::stub::ImageAnnotator);

#[async_trait::async_trait]
impl<T> super::stub::ImageAnnotator for ImageAnnotator<T>
where
    T: super::stub::ImageAnnotator + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn batch_annotate_images(
        &self,
        req: model::BatchAnnotateImagesRequest,
        options: RequestOptions,
    ) -> Result<model::BatchAnnotateImagesResponse> {
        self.inner.batch_annotate_images(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn async_batch_annotate_files(
        &self,
        req: model::AsyncBatchAnnotateFilesRequest,
        options: RequestOptions,
    ) -> Result<lro::model::Operation> {
        self.inner.async_batch_annotate_files(req, options).await
    }
}

/// Implements a [ProductSearch](super::stub::ProductSearch) decorator for logging and tracing.
#[derive(Clone, Debug)]
pub struct ProductSearch<T>
where
    T: super::stub::ProductSearch + std::fmt::Debug + Send + Sync,
{
    inner: T,
}

impl<T> ProductSearch<T>
where
    T: super::stub::ProductSearch + std::fmt::Debug + Send + Sync,
{
    pub fn new(inner: T) -> Self {
        Self { inner }
    }
}

#[async_trait::async_trait]
impl<T> super::stub::ProductSearch for ProductSearch<T>
where
    T: super::stub::ProductSearch + std::fmt::Debug + Send + Sync,
{
    #[tracing::instrument(ret)]
    async fn create_product(
        &self,
        req: model::CreateProductRequest,
        options: RequestOptions,
    ) -> Result<model::Product> {
        self.inner.create_product(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn get_product(
        &self,
        req: model::GetProductRequest,
        options: RequestOptions,
    ) -> Result<model::Product> {
        self.inner.get_product(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn list_products(
        &self,
        req: model::ListProductsRequest,
        options: RequestOptions,
    ) -> Result<model::ListProductsResponse> {
        self.inner.list_products(req, options).await
    }

    #[tracing::instrument(ret)]
    async fn delete_product(
        &self,
        req: model::DeleteProductRequest,
        options: RequestOptions,
    ) -> Result<()> {
        self.inner.delete_product(req, options).await
    }
}
