//! Configuration management for Leuko.
//!
//! Configuration is loaded from the platform config directory with sensible
//! defaults. A missing file is not an error.

mod types;
mod validate;

pub use types::*;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration structure for Leuko.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Hosted model settings
    pub model: ModelConfig,

    /// Image limits
    pub limits: LimitsConfig,

    /// Terminal preview settings
    pub preview: PreviewConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default config file path.
    ///
    /// - macOS: ~/Library/Application Support/com.leuko.leuko/config.toml
    /// - Linux: ~/.config/leuko/config.toml
    /// - Windows: C:\Users\<User>\AppData\Roaming\leuko\config\config.toml
    ///
    /// Falls back to ~/.leuko/config.toml if directory detection fails.
    pub fn default_path() -> PathBuf {
        directories::ProjectDirs::from("com", "leuko", "leuko")
            .map(|dirs| dirs.config_dir().to_path_buf().join("config.toml"))
            .unwrap_or_else(|| {
                let expanded = shellexpand::tilde("~/.leuko/config.toml");
                PathBuf::from(expanded.into_owned())
            })
    }

    /// Serialize the config to a pretty TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ValidationError(e.to_string()))
    }

    /// Copy of the config that is safe to print: a literal API key is masked,
    /// `${VAR}` references are kept as written.
    pub fn redacted(&self) -> Self {
        let mut config = self.clone();
        config.model.api_key = config.model.display_api_key().to_string();
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.model.model, "gemini-1.5-flash");
        assert_eq!(config.model.api_key, "${GOOGLE_API_KEY}");
        assert!(config.model.timeout_secs.is_none());
        assert_eq!(config.limits.max_file_size_mb, 20);
    }

    #[test]
    fn test_config_to_toml() {
        let config = Config::default();
        let toml = config.to_toml().unwrap();
        assert!(toml.contains("[model]"));
        assert!(toml.contains("[limits]"));
        assert!(!toml.contains("timeout_secs"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml(
            r#"
            [model]
            model = "gemini-1.5-pro"
            timeout_secs = 30
            "#,
        )
        .unwrap();
        assert_eq!(config.model.model, "gemini-1.5-pro");
        assert_eq!(config.model.timeout_secs, Some(30));
        assert_eq!(config.model.api_key, "${GOOGLE_API_KEY}");
        assert!(config.preview.enabled);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[preview]\nenabled = false\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert!(!config.preview.enabled);
    }

    #[test]
    fn test_redacted_masks_literal_key() {
        let config = Config::from_toml("[model]\napi_key = \"AIzaSy-literal-secret\"\n").unwrap();
        let shown = config.redacted().to_toml().unwrap();
        assert!(!shown.contains("AIzaSy-literal-secret"));
        assert!(shown.contains("api_key = \"****\""));
        assert!(!format!("{config:?}").contains("AIzaSy-literal-secret"));
    }

    #[test]
    fn test_redacted_keeps_env_reference() {
        let shown = Config::default().redacted().to_toml().unwrap();
        assert!(shown.contains("${GOOGLE_API_KEY}"));
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let err = Config::from_toml("[model\nmodel = ").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
