//! Wayfarer Core - image in, travel guide out.
//!
//! Wayfarer takes a photo of a place (from a URL or an uploaded file), sends
//! it to a multimodal model together with a fixed travel-guide prompt, and
//! returns the model's description of the place, nearby accommodations and
//! local food.
//!
//! # Architecture
//!
//! ```text
//! ImageSource → Resolve (fetch/decode) → DecodedImage → Infer (Gemini) → text
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use wayfarer_core::{Config, ImageSource, Wayfarer};
//!
//! #[tokio::main]
//! async fn main() -> wayfarer_core::Result<()> {
//!     let app = Wayfarer::new(Config::load()?)?;
//!
//!     let image = app
//!         .resolve(ImageSource::RemoteUrl("https://example.com/eiffel.jpg".into()))
//!         .await?;
//!     let guide = app.describe(&image).await?;
//!     println!("{}", guide.text);
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod config;
pub mod error;
pub mod interaction;
pub mod llm;
pub mod output;
pub mod prompt;
pub mod resolve;
pub mod types;

#[cfg(test)]
pub(crate) mod testutil;

// Re-exports for convenient access
pub use config::Config;
pub use error::{ConfigError, ErrorKind, InferenceError, Result, SourceError, WayfarerError};
pub use interaction::{Interaction, InteractionError, InteractionState};
pub use llm::{LlmProvider, LlmResponse};
pub use output::{OutputFormat, OutputWriter};
pub use prompt::TRAVEL_GUIDE_PROMPT;
pub use resolve::{DecodedImage, ImageResolver, ImageSource};
pub use types::{GuideReport, InferenceResult};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Process-wide application context.
///
/// Built once at startup and borrowed by every interaction. Holds the
/// configuration, the authenticated model handle and the image resolver; all
/// read-only after construction.
pub struct Wayfarer {
    config: Config,
    provider: Box<dyn LlmProvider>,
    resolver: ImageResolver,
}

impl Wayfarer {
    /// Create the context, connecting to the configured model.
    ///
    /// Fails with [`ConfigError::MissingApiKey`] when no API key is available.
    pub fn new(config: Config) -> std::result::Result<Self, ConfigError> {
        let provider = llm::connect(&config)?;
        tracing::debug!(
            "Initializing Wayfarer v{} with {} ({})",
            VERSION,
            provider.name(),
            provider.model()
        );
        Ok(Self::with_provider(config, provider))
    }

    /// Create the context around an already-constructed model handle.
    pub fn with_provider(config: Config, provider: Box<dyn LlmProvider>) -> Self {
        Self {
            config,
            provider,
            resolver: ImageResolver::new(),
        }
    }

    /// Get a reference to the current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The model handle.
    pub fn provider(&self) -> &dyn LlmProvider {
        self.provider.as_ref()
    }

    /// Fetch and decode an image source.
    pub async fn resolve(
        &self,
        source: ImageSource,
    ) -> std::result::Result<DecodedImage, SourceError> {
        self.resolver.resolve(source).await
    }

    /// Run the travel-guide prompt on a decoded image.
    pub async fn describe(
        &self,
        image: &DecodedImage,
    ) -> std::result::Result<LlmResponse, InferenceError> {
        llm::infer(
            self.provider.as_ref(),
            image,
            TRAVEL_GUIDE_PROMPT,
            &self.config.inference,
        )
        .await
    }

    /// Start a new interaction against this context.
    pub fn interaction(&self) -> Interaction<'_> {
        Interaction::new(self)
    }
}
