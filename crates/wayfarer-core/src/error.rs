//! Error types for Wayfarer.
//!
//! Each boundary (network fetch, decode, inference) has its own error type so
//! callers can map a failure to an [`ErrorKind`] without string matching.

use std::fmt;
use thiserror::Error;

/// Classification of why a step in an interaction failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Image URL unreachable or returned a non-success status
    Network,
    /// Bytes could not be parsed as a supported image format
    Decode,
    /// The external generation call failed
    Inference,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Network => "network",
            ErrorKind::Decode => "decode",
            ErrorKind::Inference => "inference",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level error type for Wayfarer operations.
#[derive(Error, Debug)]
pub enum WayfarerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Image could not be fetched or decoded
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Model call failed
    #[error(transparent)]
    Inference(#[from] InferenceError),
}

impl WayfarerError {
    /// The per-interaction kind of this error, if it has one.
    ///
    /// Configuration errors are not part of an interaction and return `None`.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            WayfarerError::Config(_) => None,
            WayfarerError::Source(e) => Some(e.kind()),
            WayfarerError::Inference(e) => Some(e.kind()),
        }
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),

    /// The Gemini API key is not set
    #[error("Gemini API key not found. Please set the {var} environment variable.")]
    MissingApiKey { var: String },
}

/// Errors from turning an image source into a decoded image.
#[derive(Error, Debug)]
pub enum SourceError {
    /// Transport failure or non-success HTTP status
    #[error("Error fetching image from {url}: {message}")]
    Network { url: String, message: String },

    /// Bytes are not a decodable image
    #[error("Error opening image: {message}")]
    Decode { message: String },
}

impl SourceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SourceError::Network { .. } => ErrorKind::Network,
            SourceError::Decode { .. } => ErrorKind::Decode,
        }
    }

    /// The failure without the "Error ..." prefix, for display under a heading.
    pub fn detail(&self) -> String {
        match self {
            SourceError::Network { url, message } => format!("{url}: {message}"),
            SourceError::Decode { message } => message.clone(),
        }
    }

    pub(crate) fn decode(message: impl Into<String>) -> Self {
        SourceError::Decode {
            message: message.into(),
        }
    }
}

/// Failure of the external generation call.
///
/// Not subdivided further: auth, quota, malformed request and provider-side
/// errors all land here with the provider's message passed through.
#[derive(Error, Debug, Clone)]
#[error("Error generating content: {message}")]
pub struct InferenceError {
    pub message: String,
    /// HTTP status returned by the provider, when the failure was an HTTP error
    pub status_code: Option<u16>,
}

impl InferenceError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: None,
        }
    }

    pub fn with_status(message: impl Into<String>, status_code: u16) -> Self {
        Self {
            message: message.into(),
            status_code: Some(status_code),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Inference
    }
}

/// Convenience type alias for Wayfarer results.
pub type Result<T> = std::result::Result<T, WayfarerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_error_kinds() {
        let net = SourceError::Network {
            url: "https://example.com/a.jpg".into(),
            message: "HTTP 404 Not Found".into(),
        };
        assert_eq!(net.kind(), ErrorKind::Network);
        assert_eq!(SourceError::decode("bad").kind(), ErrorKind::Decode);
        assert_eq!(net.detail(), "https://example.com/a.jpg: HTTP 404 Not Found");
    }

    #[test]
    fn test_wayfarer_error_kind() {
        let err: WayfarerError = InferenceError::with_status("quota exceeded", 429).into();
        assert_eq!(err.kind(), Some(ErrorKind::Inference));

        let err: WayfarerError = ConfigError::ValidationError("x".into()).into();
        assert_eq!(err.kind(), None);
    }

    #[test]
    fn test_missing_key_message_names_variable() {
        let err = ConfigError::MissingApiKey {
            var: "GEMINI_API_KEY".into(),
        };
        assert!(err.to_string().contains("GEMINI_API_KEY"));
    }

    #[test]
    fn test_inference_message_preserved() {
        let err = InferenceError::new("API key not valid");
        assert!(err.to_string().contains("API key not valid"));
        assert_eq!(err.status_code, None);
    }
}
