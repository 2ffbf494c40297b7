//! Image decoding with content-based format detection.

use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};
use std::io::Cursor;

use crate::error::SourceError;

/// An image decoded into memory, together with the bytes it came from.
///
/// Owned by the interaction that produced it and dropped with it.
pub struct DecodedImage {
    /// The decoded pixel data
    pub image: DynamicImage,
    /// Format detected from the content
    pub format: ImageFormat,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// The original encoded bytes
    pub bytes: Vec<u8>,
}

impl DecodedImage {
    /// Size of the original encoded image in bytes.
    pub fn byte_len(&self) -> usize {
        self.bytes.len()
    }

    /// Short lowercase name of the detected format ("jpeg", "png", ...).
    pub fn format_name(&self) -> &'static str {
        format_to_str(self.format)
    }
}

impl std::fmt::Debug for DecodedImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecodedImage")
            .field("format", &self.format)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("byte_len", &self.bytes.len())
            .finish()
    }
}

/// Stateless image decoder.
pub struct ImageDecoder;

impl ImageDecoder {
    /// Decode an in-memory buffer on the blocking thread pool.
    pub async fn decode(bytes: Vec<u8>) -> Result<DecodedImage, SourceError> {
        tokio::task::spawn_blocking(move || Self::decode_sync(bytes))
            .await
            .map_err(|e| SourceError::decode(format!("Task join error: {e}")))?
    }

    /// Synchronous decode. The format comes from the content, never from a
    /// file name or a `Content-Type` header.
    pub fn decode_sync(bytes: Vec<u8>) -> Result<DecodedImage, SourceError> {
        if bytes.is_empty() {
            return Err(SourceError::decode("no image data"));
        }

        let reader = ImageReader::new(Cursor::new(bytes.as_slice()))
            .with_guessed_format()
            .map_err(|e| SourceError::decode(format!("Cannot detect image format: {e}")))?;
        let format = reader
            .format()
            .ok_or_else(|| SourceError::decode("Unrecognized image format"))?;
        let image = reader
            .decode()
            .map_err(|e| SourceError::decode(e.to_string()))?;

        let (width, height) = image.dimensions();
        tracing::debug!(
            "Decoded {} image {}x{} ({} bytes)",
            format_to_str(format),
            width,
            height,
            bytes.len()
        );

        Ok(DecodedImage {
            image,
            format,
            width,
            height,
            bytes,
        })
    }
}

/// Convert an ImageFormat to a string representation.
pub fn format_to_str(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Jpeg => "jpeg",
        ImageFormat::Png => "png",
        ImageFormat::WebP => "webp",
        ImageFormat::Gif => "gif",
        ImageFormat::Tiff => "tiff",
        ImageFormat::Bmp => "bmp",
        ImageFormat::Ico => "ico",
        ImageFormat::Pnm => "pnm",
        ImageFormat::Avif => "avif",
        _ => "unknown",
    }
}
