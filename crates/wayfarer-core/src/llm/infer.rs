//! The inference client: one image, one prompt, one model call.

use super::provider::{ImageInput, LlmProvider, LlmRequest, LlmResponse};
use crate::config::InferenceConfig;
use crate::error::InferenceError;
use crate::resolve::DecodedImage;

/// Send `image` and `prompt` to the model and wait for the full response.
///
/// Every failure, including the provider's own timeout elapsing, comes back
/// as an [`InferenceError`] carrying the provider's message. Nothing is retried.
pub async fn infer(
    handle: &dyn LlmProvider,
    image: &DecodedImage,
    prompt: &str,
    options: &InferenceConfig,
) -> Result<LlmResponse, InferenceError> {
    let input = ImageInput::from_decoded(image, options.max_image_dimension)?;
    let request = LlmRequest::new(input, prompt, options);
    let timeout = handle.timeout();

    tracing::info!("Generating with {} ({})", handle.name(), handle.model());

    match tokio::time::timeout(timeout, handle.generate(&request)).await {
        Ok(Ok(response)) => {
            tracing::info!(
                "Generated {} chars in {}ms{}",
                response.text.len(),
                response.latency_ms,
                response
                    .tokens_used
                    .map(|t| format!(", {t} tokens"))
                    .unwrap_or_default()
            );
            Ok(response)
        }
        Ok(Err(e)) => {
            tracing::warn!("Generation failed: {}", e.message);
            Err(e)
        }
        Err(_) => {
            tracing::warn!("Generation timed out after {}ms", timeout.as_millis());
            Err(InferenceError::new(format!(
                "Timeout after {}ms",
                timeout.as_millis()
            )))
        }
    }
}
