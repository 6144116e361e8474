//! API key loading.
//!
//! The key is resolved once at startup and handed to the model client. It is
//! the only process-wide state.

use std::fmt;

use crate::config::ModelConfig;

/// Environment variable read when the config uses the default key reference.
pub const DEFAULT_API_KEY_VAR: &str = "GOOGLE_API_KEY";

/// Resolve `${ENV_VAR}` references in config strings.
///
/// Plain values pass through unchanged; empty values and unset variables
/// resolve to `None`.
pub fn resolve_env_var(value: &str) -> Option<String> {
    if value.starts_with("${") && value.ends_with('}') {
        let var_name = &value[2..value.len() - 1];
        std::env::var(var_name).ok().filter(|v| !v.is_empty())
    } else if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Name of the environment variable a `${VAR}` reference points at.
fn env_var_name(value: &str) -> Option<&str> {
    value
        .strip_prefix("${")
        .and_then(|rest| rest.strip_suffix('}'))
}

/// A loaded API key. `Debug` never prints the secret.
#[derive(Clone)]
pub struct Credential {
    key: String,
}

impl Credential {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Resolve the key configured for the model client.
    pub fn from_config(config: &ModelConfig) -> Option<Self> {
        resolve_env_var(&config.api_key).map(Self::new)
    }

    /// Name of the variable the user should set when no key was found.
    pub fn source_hint(config: &ModelConfig) -> String {
        env_var_name(&config.api_key)
            .unwrap_or(DEFAULT_API_KEY_VAR)
            .to_string()
    }

    pub fn expose(&self) -> &str {
        &self.key
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(****)")
    }
}
