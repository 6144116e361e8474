//! Sub-configuration structs with their defaults.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Hosted model settings.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Generative Language API base URL
    pub endpoint: String,

    /// Multimodal model variant
    pub model: String,

    /// API key (supports ${ENV_VAR} syntax)
    pub api_key: String,

    /// Per-request timeout in seconds. Unset means the HTTP client's default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl ModelConfig {
    /// The `api_key` value as it may be shown to the user.
    pub fn display_api_key(&self) -> &str {
        let key = self.api_key.as_str();
        if key.is_empty() || (key.starts_with("${") && key.ends_with('}')) {
            key
        } else {
            "****"
        }
    }
}

impl fmt::Debug for ModelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelConfig")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &self.display_api_key())
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            model: "gemini-1.5-flash".to_string(),
            api_key: "${GOOGLE_API_KEY}".to_string(),
            timeout_secs: None,
        }
    }
}

/// Limits applied to selected images.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum file size in megabytes.
    /// 20MB is the most the service accepts as inline request data.
    pub max_file_size_mb: u64,

    /// Maximum image dimension (width or height) decoded for the preview
    pub max_image_dimension: u32,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: 20,
            max_image_dimension: 10000,
        }
    }
}

/// Terminal preview settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PreviewConfig {
    /// Whether to render a colour preview of the selected image
    pub enabled: bool,

    /// Preview width in terminal columns
    pub width: u32,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            width: 48,
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level: error, warn, info, debug, trace
    pub level: String,

    /// Log format: "pretty" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}
