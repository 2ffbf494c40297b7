//! Image source resolution.
//!
//! - **source**: the `ImageSource` sum type and the resolver
//! - **fetch**: streaming HTTP retrieval for URL sources
//! - **decode**: content-sniffing image decode

pub mod decode;
mod fetch;
pub mod source;

pub use decode::{DecodedImage, ImageDecoder};
pub use source::{ImageResolver, ImageSource};
