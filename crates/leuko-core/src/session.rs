//! Per-session context: the selected image and what is currently displayed.
//!
//! ```text
//! Idle ──select──▶ FileSelected ──submit──▶ Submitted ──▶ ResultShown | ErrorShown
//!  ▲                    ▲                                        │
//!  └──────clear─────────┴─────────────select (new image)─────────┘
//! ```
//!
//! Transitions are driven only by the user. Nothing is retried or cached.

use crate::error::IntakeError;
use crate::intake;
use crate::llm::{ModelClient, ModelRequest};
use crate::types::UploadedImage;

/// What the presentation layer should currently show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// No image selected
    Idle,
    /// Image selected, preview shown, nothing submitted yet
    FileSelected,
    /// Classification call in flight
    Submitted,
    /// Model text, verbatim
    ResultShown(String),
    /// Inline error message
    ErrorShown(String),
}

/// One user's isolated interaction state.
#[derive(Debug)]
pub struct Session {
    image: Option<UploadedImage>,
    view: View,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            image: None,
            view: View::Idle,
        }
    }

    /// Replace the selected image, discarding any previous result or error.
    pub fn select(&mut self, image: UploadedImage) {
        tracing::debug!(file = image.file_name(), "Image selected");
        self.image = Some(image);
        self.view = View::FileSelected;
    }

    /// Drop the selected image and return to idle.
    pub fn clear(&mut self) {
        self.image = None;
        self.view = View::Idle;
    }

    pub fn image(&self) -> Option<&UploadedImage> {
        self.image.as_ref()
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    /// Text of the last successful classification, if it is still displayed.
    pub fn result(&self) -> Option<&str> {
        match &self.view {
            View::ResultShown(text) => Some(text),
            _ => None,
        }
    }

    /// Message of the last failure, if it is still displayed.
    pub fn error(&self) -> Option<&str> {
        match &self.view {
            View::ErrorShown(message) => Some(message),
            _ => None,
        }
    }

    /// Classify the selected image, waiting for the model's answer.
    ///
    /// Without a selected image no call is made and `IntakeError::MissingFile`
    /// is returned with the view left as it was. Model failures are not
    /// returned as errors: they land in `View::ErrorShown`, replacing any
    /// earlier result.
    pub async fn submit(&mut self, client: &dyn ModelClient) -> Result<&View, IntakeError> {
        let payload = intake::prepare(self.image.as_ref())?;
        let request = ModelRequest::classify(payload);

        self.view = View::Submitted;
        tracing::info!(
            client = client.name(),
            model = client.model(),
            file = self.image.as_ref().map(|i| i.file_name()).unwrap_or_default(),
            "Classifying image"
        );

        self.view = match client.classify(&request).await {
            Ok(response) => {
                tracing::info!(
                    model = %response.model,
                    latency_ms = response.latency_ms,
                    tokens = ?response.tokens_used,
                    "Classification received"
                );
                View::ResultShown(response.text)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Classification failed");
                View::ErrorShown(e.to_string())
            }
        };

        Ok(&self.view)
    }
}
