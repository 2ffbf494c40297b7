//! Shared helpers for unit tests.

use crate::error::InferenceError;
use crate::llm::{LlmProvider, LlmRequest, LlmResponse};
use async_trait::async_trait;
use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use std::io::Cursor;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Encode a small gradient image in the given format.
pub(crate) fn encode_image(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 7 % 256) as u8, (y * 11 % 256) as u8, 128])
    });
    let mut buffer = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img)
        .write_to(&mut buffer, format)
        .unwrap();
    buffer.into_inner()
}

/// A scripted LLM provider.
///
/// Call `n` returns the `n`th scripted result; the last result repeats.
pub(crate) struct MockProvider {
    script: Vec<Result<String, String>>,
    call_count: AtomicU32,
    last_request: Mutex<Option<LlmRequest>>,
    delay: Option<Duration>,
    timeout: Duration,
}

impl MockProvider {
    pub(crate) fn sequence(script: Vec<Result<String, String>>) -> Self {
        assert!(!script.is_empty());
        Self {
            script,
            call_count: AtomicU32::new(0),
            last_request: Mutex::new(None),
            delay: None,
            timeout: Duration::from_secs(5),
        }
    }

    pub(crate) fn success(text: &str) -> Self {
        Self::sequence(vec![Ok(text.to_string())])
    }

    pub(crate) fn failing(message: &str) -> Self {
        Self::sequence(vec![Err(message.to_string())])
    }

    pub(crate) fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub(crate) fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub(crate) fn calls(&self) -> u32 {
        self.call_count.load(Ordering::SeqCst)
    }

    pub(crate) fn last_request(&self) -> Option<LlmRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn model(&self) -> &str {
        "mock-v1"
    }

    async fn generate(&self, request: &LlmRequest) -> Result<LlmResponse, InferenceError> {
        let idx = self.call_count.fetch_add(1, Ordering::SeqCst) as usize;
        *self.last_request.lock().unwrap() = Some(request.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.script[idx.min(self.script.len() - 1)] {
            Ok(text) => Ok(LlmResponse {
                text: text.clone(),
                model: "mock-v1".to_string(),
                tokens_used: Some(42),
                latency_ms: 10,
            }),
            Err(message) => Err(InferenceError::new(message.clone())),
        }
    }

    fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl LlmProvider for Arc<MockProvider> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn model(&self) -> &str {
        (**self).model()
    }

    async fn generate(&self, request: &LlmRequest) -> Result<LlmResponse, InferenceError> {
        (**self).generate(request).await
    }

    fn timeout(&self) -> Duration {
        (**self).timeout()
    }
}
