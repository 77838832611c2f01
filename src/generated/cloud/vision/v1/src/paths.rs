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

//! Resource names used by the Cloud Vision API.

use crate::Result;
use gax::path_template::PathTemplate;
use std::collections::BTreeMap;

const LOCATION: &str = "projects/{project}/locations/{location}";
const PRODUCT_SET: &str = "projects/{project}/locations/{location}/productSets/{product_set}";
const PRODUCT: &str = "projects/{project}/locations/{location}/products/{product}";
const REFERENCE_IMAGE: &str =
    "projects/{project}/locations/{location}/products/{product}/referenceImages/{reference_image}";

/// Returns the name of a location, the parent of products and product sets.
pub fn location_path(project: &str, location: &str) -> Result<String> {
    PathTemplate::parse(LOCATION)?.render(&[("project", project), ("location", location)])
}

/// Returns the name of a product set.
pub fn product_set_path(project: &str, location: &str, product_set: &str) -> Result<String> {
    PathTemplate::parse(PRODUCT_SET)?.render(&[
        ("project", project),
        ("location", location),
        ("product_set", product_set),
    ])
}

/// Returns the name of a product.
pub fn product_path(project: &str, location: &str, product: &str) -> Result<String> {
    PathTemplate::parse(PRODUCT)?.render(&[
        ("project", project),
        ("location", location),
        ("product", product),
    ])
}

/// Returns the name of a reference image of a product.
pub fn reference_image_path(
    project: &str,
    location: &str,
    product: &str,
    reference_image: &str,
) -> Result<String> {
    PathTemplate::parse(REFERENCE_IMAGE)?.render(&[
        ("project", project),
        ("location", location),
        ("product", product),
        ("reference_image", reference_image),
    ])
}

/// Parses a product name.
pub fn match_product_path(name: &str) -> Option<BTreeMap<String, String>> {
    PathTemplate::parse(PRODUCT).ok()?.matches(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn render() -> anyhow::Result<()> {
        assert_eq!(
            location_path("p", "us-west1")?,
            "projects/p/locations/us-west1"
        );
        assert_eq!(
            product_set_path("p", "us-west1", "shoes")?,
            "projects/p/locations/us-west1/productSets/shoes"
        );
        assert_eq!(
            product_path("p", "us-west1", "sneaker")?,
            "projects/p/locations/us-west1/products/sneaker"
        );
        assert_eq!(
            reference_image_path("p", "us-west1", "sneaker", "side")?,
            "projects/p/locations/us-west1/products/sneaker/referenceImages/side"
        );
        Ok(())
    }

    #[test]
    fn errors() {
        let err = product_path("p", "", "sneaker").unwrap_err();
        assert!(err.is_binding(), "{err:?}");
    }

    #[test]
    fn parse() {
        let got = match_product_path("projects/p/locations/us-west1/products/sneaker")
            .unwrap_or_default();
        assert_eq!(got.get("product").map(String::as_str), Some("sneaker"));
        assert!(match_product_path("projects/p/locations/us-west1").is_none());
    }
}
