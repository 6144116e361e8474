//! Hosted model integration.
//!
//! Provides the `ModelClient` abstraction the session calls and the Gemini
//! implementation used in production.

pub(crate) mod gemini;
pub(crate) mod provider;

pub use gemini::GeminiClient;
pub use provider::{ModelClient, ModelRequest, ModelResponse};
