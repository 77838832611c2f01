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

//! Defines the image inputs for the feature detection helpers.

use crate::model;
use crate::{Error, Result};
use std::path::PathBuf;

const GCS_SCHEME: &str = "gs://";

/// Where an image to annotate comes from.
///
/// Local files are read when the request is sent. URIs are fetched by the
/// service.
///
/// # Example
/// ```
/// # use google_cloud_vision_v1::image::ImageSource;
/// let source = ImageSource::from("gs://my-bucket/cat.jpg");
/// assert_eq!(source.gcs_uri(), Some("gs://my-bucket/cat.jpg"));
/// let source = ImageSource::from("https://example.com/cat.jpg");
/// assert!(matches!(source, ImageSource::Uri(_)));
/// let source = ImageSource::from("images/cat.jpg");
/// assert!(matches!(source, ImageSource::Path(_)));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[non_exhaustive]
pub enum ImageSource {
    /// A local file.
    Path(PathBuf),
    /// Image data already in memory.
    Bytes(bytes::Bytes),
    /// A Cloud Storage URI or a publicly accessible HTTP(S) URL.
    Uri(String),
}

impl ImageSource {
    /// Converts the source into the image sent to the service.
    ///
    /// `gs://` URIs become a `gcs_image_uri`, any other URI becomes an
    /// `image_uri`. Reads the file contents for [ImageSource::Path].
    pub async fn resolve(&self) -> Result<model::Image> {
        match self {
            Self::Path(path) => {
                let contents = tokio::fs::read(path).await.map_err(Error::io)?;
                Ok(model::Image::default().set_content(contents))
            }
            Self::Bytes(b) => Ok(model::Image::default().set_content(b.clone())),
            Self::Uri(u) if u.starts_with(GCS_SCHEME) => Ok(model::Image::default()
                .set_source(model::ImageSource::default().set_gcs_image_uri(u.clone()))),
            Self::Uri(u) => Ok(model::Image::default()
                .set_source(model::ImageSource::default().set_image_uri(u.clone()))),
        }
    }

    /// The Cloud Storage URI, if the image lives in Cloud Storage.
    pub fn gcs_uri(&self) -> Option<&str> {
        match self {
            Self::Uri(u) if u.starts_with(GCS_SCHEME) => Some(u),
            _ => None,
        }
    }
}

impl std::str::FromStr for ImageSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.contains("://") {
            return Ok(Self::Uri(s.to_string()));
        }
        Ok(Self::Path(PathBuf::from(s)))
    }
}

impl From<&str> for ImageSource {
    fn from(value: &str) -> Self {
        match value.parse() {
            Ok(s) => s,
            Err(e) => match e {},
        }
    }
}

impl From<String> for ImageSource {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<&String> for ImageSource {
    fn from(value: &String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<PathBuf> for ImageSource {
    fn from(value: PathBuf) -> Self {
        Self::Path(value)
    }
}

impl From<&std::path::Path> for ImageSource {
    fn from(value: &std::path::Path) -> Self {
        Self::Path(value.to_path_buf())
    }
}

impl From<bytes::Bytes> for ImageSource {
    fn from(value: bytes::Bytes) -> Self {
        Self::Bytes(value)
    }
}

impl From<Vec<u8>> for ImageSource {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use test_case::test_case;

    #[test_case("gs://bucket/a.png", Some("gs://bucket/a.png"), None)]
    #[test_case("https://example.com/a.png", None, Some("https://example.com/a.png"))]
    #[tokio::test]
    async fn resolve_uri(
        input: &str,
        gcs: Option<&str>,
        uri: Option<&str>,
    ) -> anyhow::Result<()> {
        let image = ImageSource::from(input).resolve().await?;
        let source = image.source.unwrap_or_default();
        assert_eq!(
            (!source.gcs_image_uri.is_empty()).then_some(source.gcs_image_uri.as_str()),
            gcs
        );
        assert_eq!(
            (!source.image_uri.is_empty()).then_some(source.image_uri.as_str()),
            uri
        );
        assert!(image.content.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn resolve_path() -> anyhow::Result<()> {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(b"\x89PNG")?;
        let path = file.path().to_string_lossy().to_string();
        let image = ImageSource::from(path).resolve().await?;
        assert_eq!(image.content.as_deref(), Some(&b"\x89PNG"[..]));
        assert!(image.source.is_none());
        Ok(())
    }

    #[tokio::test]
    async fn resolve_missing_path() {
        let source = ImageSource::from("/no/such/dir/image.jpg");
        let err = source.resolve().await.unwrap_err();
        assert!(err.is_io(), "{err:?}");
    }

    #[tokio::test]
    async fn resolve_bytes() -> anyhow::Result<()> {
        let image = ImageSource::from(vec![1_u8, 2, 3]).resolve().await?;
        assert_eq!(image.content.as_deref(), Some(&[1_u8, 2, 3][..]));
        Ok(())
    }
}
