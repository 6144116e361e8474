//! Leuko Core - white blood cell image classification client.
//!
//! Leuko sends a microscope image of a white blood cell, together with a
//! fixed hematology prompt, to a hosted multimodal model and returns the
//! model's free-text answer. Classification itself happens remotely.
//!
//! # Architecture
//!
//! ```text
//! File → ImageIntake → UploadedImage → Session::submit → ModelClient → text
//! ```
//!
//! # Usage
//!
//! ```rust,ignore
//! use leuko_core::{Config, Credential, GeminiClient, ImageIntake, Session};
//!
//! #[tokio::main]
//! async fn main() -> leuko_core::Result<()> {
//!     let config = Config::load()?;
//!     let credential = Credential::from_config(&config.model);
//!     let client = GeminiClient::from_config(&config.model, None, credential);
//!
//!     let mut session = Session::new();
//!     session.select(ImageIntake::new(config.limits.clone()).load("cell.jpg".as_ref())?);
//!     session.submit(&client).await?;
//!     println!("{}", session.result().unwrap_or_default());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod credential;
pub mod error;
pub mod intake;
pub mod llm;
pub mod preview;
pub mod prompt;
pub mod session;
pub mod types;

// Re-exports for convenient access
pub use config::Config;
pub use credential::Credential;
pub use error::{ConfigError, IntakeError, LeukoError, ModelError, Result};
pub use intake::{ImageIntake, ImagePayload};
pub use llm::{GeminiClient, ModelClient, ModelRequest, ModelResponse};
pub use preview::{ImagePreview, PreviewRenderer};
pub use prompt::CLASSIFICATION_PROMPT;
pub use session::{Session, View};
pub use types::{ImageMime, UploadedImage};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
