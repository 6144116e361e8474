//! Command implementations for the `leuko` binary.

pub mod classify;
pub mod config;
pub mod interactive;

use leuko_core::{Config, Credential, GeminiClient};

/// Build the model client once per process from config and the startup credential.
pub(crate) fn build_client(
    config: &Config,
    model_override: Option<&str>,
    credential: Option<Credential>,
) -> GeminiClient {
    GeminiClient::from_config(&config.model, model_override, credential)
}
