//! Result types produced by an interaction.

use serde::{Deserialize, Serialize};

use crate::error::{ErrorKind, InferenceError};
use crate::llm::LlmResponse;
use crate::prompt::{sections_present, GuideSection};
use crate::resolve::DecodedImage;

/// Outcome of one generate action.
#[derive(Debug, Clone, PartialEq)]
pub enum InferenceResult {
    /// The model answered; the text is in `LlmResponse::text`
    Success(LlmResponse),
    /// A step failed; the message is shown to the user as-is
    Failure(ErrorKind, String),
}

impl InferenceResult {
    pub fn is_success(&self) -> bool {
        matches!(self, InferenceResult::Success(_))
    }

    /// Generated text, if the call succeeded.
    pub fn text(&self) -> Option<&str> {
        match self {
            InferenceResult::Success(resp) => Some(&resp.text),
            InferenceResult::Failure(..) => None,
        }
    }
}

impl From<Result<LlmResponse, InferenceError>> for InferenceResult {
    fn from(result: Result<LlmResponse, InferenceError>) -> Self {
        match result {
            Ok(resp) => InferenceResult::Success(resp),
            Err(e) => InferenceResult::Failure(e.kind(), e.message),
        }
    }
}

/// Machine-readable record of one completed guide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuideReport {
    /// URL or upload label the image came from
    pub source: String,

    /// Image width in pixels
    pub width: u32,

    /// Image height in pixels
    pub height: u32,

    /// Detected format ("jpeg", "png", ...)
    pub format: String,

    /// Model that produced the text
    pub model: String,

    /// Round-trip latency of the model call
    pub latency_ms: u64,

    /// Total tokens, if the provider reported them
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens_used: Option<u32>,

    /// Requested sections that appear in the text
    pub sections: Vec<GuideSection>,

    /// The generated guide
    pub text: String,
}

impl GuideReport {
    pub fn new(source: String, image: &DecodedImage, response: &LlmResponse) -> Self {
        Self {
            source,
            width: image.width,
            height: image.height,
            format: image.format_name().to_string(),
            model: response.model.clone(),
            latency_ms: response.latency_ms,
            tokens_used: response.tokens_used,
            sections: sections_present(&response.text),
            text: response.text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(text: &str) -> LlmResponse {
        LlmResponse {
            text: text.to_string(),
            model: "gemini-1.5-flash".to_string(),
            tokens_used: None,
            latency_ms: 1200,
        }
    }

    #[test]
    fn test_from_ok() {
        let result = InferenceResult::from(Ok(response("Nice place")));
        assert!(result.is_success());
        assert_eq!(result.text(), Some("Nice place"));
    }

    #[test]
    fn test_from_err() {
        let result = InferenceResult::from(Err(InferenceError::with_status("quota", 429)));
        assert_eq!(
            result,
            InferenceResult::Failure(ErrorKind::Inference, "quota".to_string())
        );
        assert_eq!(result.text(), None);
    }

    #[test]
    fn test_report_skips_missing_tokens() {
        let report = GuideReport {
            source: "upload (10 bytes)".into(),
            width: 1,
            height: 1,
            format: "png".into(),
            model: "m".into(),
            latency_ms: 5,
            tokens_used: None,
            sections: vec![GuideSection::Food],
            text: "Eat here".into(),
        };
        let json = serde_json::to_string(&report).unwrap();
        assert!(!json.contains("tokens_used"));
        assert!(json.contains("\"sections\":[\"food\"]"));
    }
}
