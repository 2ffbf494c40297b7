//! LLM integration for travel-guide generation.
//!
//! Provides the provider abstraction (the model handle), the Gemini backend,
//! and the single-call inference client.

pub(crate) mod gemini;
pub(crate) mod infer;
pub(crate) mod provider;

pub use gemini::GeminiProvider;
pub use infer::infer;
pub use provider::{connect, ImageInput, LlmProvider, LlmRequest, LlmResponse};
