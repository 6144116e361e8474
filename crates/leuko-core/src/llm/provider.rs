//! Model client trait and request/response types.
//!
//! Defines the interface the session talks to, so the hosted model can be
//! replaced by a stub in tests.

use async_trait::async_trait;

use crate::error::ModelError;
use crate::intake::ImagePayload;
use crate::prompt::CLASSIFICATION_PROMPT;

/// A single classification request: the fixed prompt plus one image.
///
/// The prompt is always `CLASSIFICATION_PROMPT`, and a request cannot be
/// built without a payload.
#[derive(Debug, Clone)]
pub struct ModelRequest {
    prompt: &'static str,
    image: ImagePayload,
}

impl ModelRequest {
    pub fn classify(image: ImagePayload) -> Self {
        Self {
            prompt: CLASSIFICATION_PROMPT,
            image,
        }
    }

    pub fn prompt(&self) -> &str {
        self.prompt
    }

    pub fn image(&self) -> &ImagePayload {
        &self.image
    }
}

/// The model's answer.
#[derive(Debug, Clone)]
pub struct ModelResponse {
    /// Generated text, verbatim. Cell type, explanation and accuracy stay
    /// embedded in it.
    pub text: String,
    /// Model identifier used
    pub model: String,
    /// Number of tokens used (input + output), if reported
    pub tokens_used: Option<u32>,
    /// Round-trip latency in milliseconds
    pub latency_ms: u64,
}

/// Trait that hosted model clients implement.
///
/// Uses `async_trait` because native async fn in trait is not object-safe
/// (the session holds a `&dyn ModelClient`).
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Client name for logging (e.g., "gemini").
    fn name(&self) -> &str;

    /// Model variant requests are sent to.
    fn model(&self) -> &str;

    /// Whether a credential was loaded at startup.
    fn is_configured(&self) -> bool;

    /// Send the request and wait for the generated text.
    async fn classify(&self, request: &ModelRequest) -> Result<ModelResponse, ModelError>;
}
