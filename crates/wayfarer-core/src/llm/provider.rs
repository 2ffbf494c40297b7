//! LLM provider trait and request/response types.
//!
//! The provider is the authenticated model handle: created once at startup,
//! shared read-only by every interaction afterwards.

use crate::config::{Config, InferenceConfig};
use crate::error::{ConfigError, InferenceError};
use crate::resolve::DecodedImage;
use async_trait::async_trait;
use base64::Engine;
use image::{DynamicImage, ImageFormat};
use std::io::Cursor;
use std::time::Duration;

/// Base64-encoded image ready to send to an LLM API.
#[derive(Debug, Clone)]
pub struct ImageInput {
    /// Base64-encoded image bytes
    pub data: String,
    /// MIME type (e.g., "image/jpeg", "image/png")
    pub media_type: String,
}

impl ImageInput {
    /// Create an `ImageInput` from raw bytes and format string.
    ///
    /// The format is the image format identifier (e.g., "jpeg", "png", "webp").
    pub fn from_bytes(bytes: &[u8], format: &str) -> Self {
        let media_type = match format {
            "jpeg" | "jpg" => "image/jpeg",
            "png" => "image/png",
            "webp" => "image/webp",
            other => {
                tracing::warn!("Unknown image format '{other}', defaulting to image/jpeg");
                "image/jpeg"
            }
        };

        Self {
            data: base64::engine::general_purpose::STANDARD.encode(bytes),
            media_type: media_type.to_string(),
        }
    }

    /// Prepare a decoded image for upload.
    ///
    /// JPEG, PNG and WebP go out as their original bytes. Other formats are
    /// re-encoded as PNG. When `max_dimension` is non-zero and either side
    /// exceeds it, the image is downscaled (aspect preserved) and sent as JPEG.
    pub fn from_decoded(image: &DecodedImage, max_dimension: u32) -> Result<Self, InferenceError> {
        if max_dimension > 0 && (image.width > max_dimension || image.height > max_dimension) {
            let scaled = image.image.thumbnail(max_dimension, max_dimension);
            tracing::debug!(
                "Downscaled {}x{} to {}x{} before upload",
                image.width,
                image.height,
                scaled.width(),
                scaled.height()
            );
            let rgb = DynamicImage::ImageRgb8(scaled.to_rgb8());
            let bytes = encode(&rgb, ImageFormat::Jpeg)?;
            return Ok(Self::from_bytes(&bytes, "jpeg"));
        }

        match image.format {
            ImageFormat::Jpeg | ImageFormat::Png | ImageFormat::WebP => {
                Ok(Self::from_bytes(&image.bytes, image.format_name()))
            }
            _ => {
                let bytes = encode(&image.image, ImageFormat::Png)?;
                Ok(Self::from_bytes(&bytes, "png"))
            }
        }
    }

    /// Size of the decoded payload in bytes (approximate, from base64 length).
    pub fn payload_len(&self) -> usize {
        self.data.len() / 4 * 3
    }
}

fn encode(image: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>, InferenceError> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, format)
        .map_err(|e| InferenceError::new(format!("Failed to prepare image for upload: {e}")))?;
    Ok(buffer.into_inner())
}

/// A single multimodal generation request.
#[derive(Debug, Clone)]
pub struct LlmRequest {
    /// The image to analyze
    pub image: ImageInput,
    /// Text prompt for the model
    pub prompt: String,
    /// Maximum tokens to generate; provider default when `None`
    pub max_output_tokens: Option<u32>,
    /// Sampling temperature; provider default when `None`
    pub temperature: Option<f32>,
}

impl LlmRequest {
    pub fn new(image: ImageInput, prompt: &str, options: &InferenceConfig) -> Self {
        Self {
            image,
            prompt: prompt.to_string(),
            max_output_tokens: options.max_output_tokens,
            temperature: options.temperature,
        }
    }
}

/// The response from a generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct LlmResponse {
    /// Generated text
    pub text: String,
    /// Model identifier used
    pub model: String,
    /// Number of tokens used (input + output), if reported
    pub tokens_used: Option<u32>,
    /// Round-trip latency in milliseconds
    pub latency_ms: u64,
}

/// Trait that LLM providers implement.
///
/// Uses `async_trait` because native async fn in trait is not object-safe
/// (we need `Box<dyn LlmProvider>` for dynamic dispatch).
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Provider name for logging (e.g., "gemini").
    fn name(&self) -> &str;

    /// Model the provider sends requests to.
    fn model(&self) -> &str;

    /// Generate text for the given request.
    async fn generate(&self, request: &LlmRequest) -> Result<LlmResponse, InferenceError>;

    /// Per-request timeout for this provider.
    fn timeout(&self) -> Duration;
}

/// Create the model handle from configuration.
///
/// Fails with [`ConfigError::MissingApiKey`] when no key is available, which
/// callers treat as fatal at startup.
pub fn connect(config: &Config) -> Result<Box<dyn LlmProvider>, ConfigError> {
    let api_key = config.api_key()?;
    Ok(Box::new(super::gemini::GeminiProvider::new(
        &config.gemini.endpoint,
        &api_key,
        &config.gemini.model,
        Duration::from_millis(config.limits.llm_timeout_ms),
    )))
}
