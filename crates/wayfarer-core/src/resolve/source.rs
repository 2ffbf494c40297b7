//! Image sources and the resolver that turns them into decoded images.

use super::decode::{DecodedImage, ImageDecoder};
use super::fetch::fetch_bytes;
use crate::error::SourceError;

/// Where the image for one interaction comes from.
#[derive(Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// A user-supplied URL, fetched over HTTP(S)
    RemoteUrl(String),
    /// Raw bytes of an uploaded file
    UploadedBytes(Vec<u8>),
}

impl ImageSource {
    /// Short human-readable label for summaries and logs.
    pub fn label(&self) -> String {
        match self {
            ImageSource::RemoteUrl(url) => url.clone(),
            ImageSource::UploadedBytes(bytes) => format!("upload ({} bytes)", bytes.len()),
        }
    }
}

impl std::fmt::Debug for ImageSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageSource::RemoteUrl(url) => f.debug_tuple("RemoteUrl").field(url).finish(),
            ImageSource::UploadedBytes(bytes) => f
                .debug_tuple("UploadedBytes")
                .field(&format_args!("{} bytes", bytes.len()))
                .finish(),
        }
    }
}

/// Normalizes any [`ImageSource`] into a [`DecodedImage`].
pub struct ImageResolver {
    client: reqwest::Client,
}

impl ImageResolver {
    /// Create a resolver with a default HTTP client.
    pub fn new() -> Self {
        // Some image hosts refuse requests without a User-Agent.
        let client = reqwest::Client::builder()
            .user_agent(concat!("wayfarer/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Falling back to default HTTP client: {e}");
                reqwest::Client::new()
            });
        Self { client }
    }

    /// Create a resolver that fetches with the given client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Fetch (for URLs) and decode the image.
    pub async fn resolve(&self, source: ImageSource) -> Result<DecodedImage, SourceError> {
        match source {
            ImageSource::RemoteUrl(url) => {
                let url = url.trim();
                tracing::info!("Fetching image from {url}");
                let bytes = fetch_bytes(&self.client, url).await?;
                ImageDecoder::decode(bytes).await
            }
            ImageSource::UploadedBytes(bytes) => {
                tracing::info!("Decoding uploaded image ({} bytes)", bytes.len());
                ImageDecoder::decode(bytes).await
            }
        }
    }
}

impl Default for ImageResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::testutil::encode_image;
    use image::ImageFormat;

    #[tokio::test]
    async fn test_resolve_uploaded_bytes() {
        let resolver = ImageResolver::new();
        for format in [ImageFormat::Jpeg, ImageFormat::Png] {
            let bytes = encode_image(40, 30, format);
            let decoded = resolver
                .resolve(ImageSource::UploadedBytes(bytes))
                .await
                .unwrap();
            assert_eq!(decoded.format, format);
            assert_eq!((decoded.width, decoded.height), (40, 30));
        }
    }

    #[tokio::test]
    async fn test_resolve_malformed_upload_is_decode_error() {
        let resolver = ImageResolver::new();
        let err = resolver
            .resolve(ImageSource::UploadedBytes(b"definitely not pixels".to_vec()))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[tokio::test]
    async fn test_resolve_url_success() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/tower.png")
            .with_status(200)
            .with_header("content-type", "image/png")
            .with_body(encode_image(16, 48, ImageFormat::Png))
            .create_async()
            .await;

        let resolver = ImageResolver::new();
        let decoded = resolver
            .resolve(ImageSource::RemoteUrl(format!("{}/tower.png", server.url())))
            .await
            .unwrap();
        assert_eq!(decoded.format, ImageFormat::Png);
        assert_eq!((decoded.width, decoded.height), (16, 48));
    }

    #[tokio::test]
    async fn test_resolve_url_404_is_network_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/missing.jpg")
            .with_status(404)
            .with_body("Not Found")
            .create_async()
            .await;

        let resolver = ImageResolver::new();
        let err = resolver
            .resolve(ImageSource::RemoteUrl(format!("{}/missing.jpg", server.url())))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Network);
    }

    #[tokio::test]
    async fn test_resolve_url_non_image_is_decode_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/page")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<!doctype html><title>Louvre</title>")
            .create_async()
            .await;

        let resolver = ImageResolver::new();
        let err = resolver
            .resolve(ImageSource::RemoteUrl(format!("{}/page", server.url())))
            .await
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Decode);
    }

    #[tokio::test]
    async fn test_resolve_url_content_type_is_ignored() {
        // A PNG served as octet-stream still decodes by content
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/blob")
            .with_status(200)
            .with_header("content-type", "application/octet-stream")
            .with_body(encode_image(8, 8, ImageFormat::Png))
            .create_async()
            .await;

        let resolver = ImageResolver::new();
        let decoded = resolver
            .resolve(ImageSource::RemoteUrl(format!("  {}/blob ", server.url())))
            .await
            .unwrap();
        assert_eq!(decoded.format, ImageFormat::Png);
    }

    #[test]
    fn test_source_label() {
        assert_eq!(
            ImageSource::RemoteUrl("https://example.com/a.jpg".into()).label(),
            "https://example.com/a.jpg"
        );
        assert_eq!(
            ImageSource::UploadedBytes(vec![0; 12]).label(),
            "upload (12 bytes)"
        );
    }
}
