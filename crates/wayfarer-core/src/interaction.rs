//! Per-interaction state machine.
//!
//! ```text
//! AwaitingInput --provide_source--> ImageResolved --generate--> InferenceInProgress --> Done | Failed
//! ```
//!
//! Providing a new source from any state starts over: the previous image and
//! result are dropped. Failures are terminal for the cycle and never retried;
//! the caller re-triggers `generate` or provides a new source.

use thiserror::Error;

use crate::error::SourceError;
use crate::resolve::{DecodedImage, ImageSource};
use crate::types::InferenceResult;
use crate::Wayfarer;

/// Where an interaction currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionState {
    AwaitingInput,
    ImageResolved,
    InferenceInProgress,
    Done,
    Failed,
}

/// Misuse of the interaction API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InteractionError {
    #[error("No image has been provided yet")]
    NoImage,
}

/// One resolve → infer → render cycle.
pub struct Interaction<'a> {
    app: &'a Wayfarer,
    state: InteractionState,
    source_label: Option<String>,
    image: Option<DecodedImage>,
    result: Option<InferenceResult>,
}

impl<'a> Interaction<'a> {
    pub fn new(app: &'a Wayfarer) -> Self {
        Self {
            app,
            state: InteractionState::AwaitingInput,
            source_label: None,
            image: None,
            result: None,
        }
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// The resolved image, if the last source decoded successfully.
    pub fn image(&self) -> Option<&DecodedImage> {
        self.image.as_ref()
    }

    /// Label of the source the current image came from.
    pub fn source_label(&self) -> Option<&str> {
        self.source_label.as_deref()
    }

    /// Outcome of the last step that produced one.
    pub fn result(&self) -> Option<&InferenceResult> {
        self.result.as_ref()
    }

    /// Drop the image and result and wait for a new source.
    pub fn reset(&mut self) {
        self.state = InteractionState::AwaitingInput;
        self.source_label = None;
        self.image = None;
        self.result = None;
    }

    /// Resolve a new source, replacing anything held from a previous cycle.
    ///
    /// On failure the interaction moves to `Failed` and the error is also
    /// recorded as the interaction's result.
    pub async fn provide_source(
        &mut self,
        source: ImageSource,
    ) -> Result<&DecodedImage, SourceError> {
        self.reset();
        let label = source.label();

        match self.app.resolve(source).await {
            Ok(image) => {
                tracing::debug!("Interaction: image resolved from {label}");
                self.state = InteractionState::ImageResolved;
                self.source_label = Some(label);
                Ok(self.image.insert(image))
            }
            Err(e) => {
                tracing::debug!("Interaction: resolve failed ({})", e.kind());
                self.state = InteractionState::Failed;
                self.result = Some(InferenceResult::Failure(e.kind(), e.detail()));
                Err(e)
            }
        }
    }

    /// Run the model on the held image with the fixed prompt.
    ///
    /// Legal whenever an image is held, so a failed or finished generation can
    /// be re-triggered by the user.
    pub async fn generate(&mut self) -> Result<&InferenceResult, InteractionError> {
        let image = match &self.image {
            Some(image) => image,
            None => return Err(InteractionError::NoImage),
        };
        self.state = InteractionState::InferenceInProgress;

        let result = InferenceResult::from(self.app.describe(image).await);

        self.state = if result.is_success() {
            InteractionState::Done
        } else {
            InteractionState::Failed
        };
        tracing::debug!("Interaction: generation finished ({:?})", self.state);
        Ok(self.result.insert(result))
    }
}
