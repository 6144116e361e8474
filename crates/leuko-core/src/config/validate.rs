//! Configuration validation with range checks.

use crate::error::ConfigError;

use super::Config;

/// Widest preview the renderer will produce, in terminal columns.
const MAX_PREVIEW_WIDTH: u32 = 200;

/// Largest inline image the generateContent API accepts, in megabytes.
const MAX_FILE_SIZE_MB: u64 = 20;

impl Config {
    /// Validate configuration values are within acceptable ranges.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.model.model.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "model.model must not be empty".into(),
            ));
        }
        if !(self.model.endpoint.starts_with("http://")
            || self.model.endpoint.starts_with("https://"))
        {
            return Err(ConfigError::ValidationError(
                "model.endpoint must be an http(s) URL".into(),
            ));
        }
        if self.model.timeout_secs == Some(0) {
            return Err(ConfigError::ValidationError(
                "model.timeout_secs must be > 0 when set".into(),
            ));
        }
        if self.limits.max_file_size_mb == 0 || self.limits.max_file_size_mb > MAX_FILE_SIZE_MB {
            return Err(ConfigError::ValidationError(format!(
                "limits.max_file_size_mb must be between 1 and {MAX_FILE_SIZE_MB}"
            )));
        }
        if self.limits.max_image_dimension == 0 {
            return Err(ConfigError::ValidationError(
                "limits.max_image_dimension must be > 0".into(),
            ));
        }
        if self.preview.width == 0 || self.preview.width > MAX_PREVIEW_WIDTH {
            return Err(ConfigError::ValidationError(format!(
                "preview.width must be between 1 and {MAX_PREVIEW_WIDTH}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_passes_validation() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_model() {
        let mut config = Config::default();
        config.model.model = "  ".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("model.model"));
    }

    #[test]
    fn test_validate_rejects_non_http_endpoint() {
        let mut config = Config::default();
        config.model.endpoint = "generativelanguage.googleapis.com".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("model.endpoint"));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.model.timeout_secs = Some(0);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("timeout_secs"));
    }

    #[test]
    fn test_validate_rejects_zero_file_size() {
        let mut config = Config::default();
        config.limits.max_file_size_mb = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_file_size_mb"));
    }

    #[test]
    fn test_validate_rejects_file_size_above_service_ceiling() {
        let mut config = Config::default();
        config.limits.max_file_size_mb = MAX_FILE_SIZE_MB;
        assert!(config.validate().is_ok());

        config.limits.max_file_size_mb = MAX_FILE_SIZE_MB + 1;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_file_size_mb"));

        let err = Config::from_toml("[limits]\nmax_file_size_mb = 9223372036854775807").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_validate_rejects_preview_width_out_of_range() {
        let mut config = Config::default();
        config.preview.width = 0;
        assert!(config.validate().is_err());

        config.preview.width = MAX_PREVIEW_WIDTH + 1;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("preview.width"));
    }
}
