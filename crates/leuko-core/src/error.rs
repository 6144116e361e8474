//! Error types for Leuko.
//!
//! Errors are split by the component that raises them so the presentation
//! layer can show a precise inline message without inspecting strings.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for Leuko operations.
#[derive(Error, Debug)]
pub enum LeukoError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Image intake errors
    #[error("{0}")]
    Intake(#[from] IntakeError),

    /// Hosted model call errors
    #[error("{0}")]
    Model(#[from] ModelError),

    /// General I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the config file from disk
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// Failed to parse TOML configuration
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    /// Configuration values are invalid
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Errors raised while turning a selected file into a request payload.
#[derive(Error, Debug)]
pub enum IntakeError {
    /// Submission attempted without a selected image
    #[error("No file uploaded")]
    MissingFile,

    /// Selected path does not exist
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    /// Extension outside the accepted set
    #[error("Unsupported format for {path}: expected jpg, jpeg or png, got '{extension}'")]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// File exceeds size limit
    #[error("File too large: {path} ({size_mb}MB > {max_mb}MB)")]
    FileTooLarge {
        path: PathBuf,
        size_mb: u64,
        max_mb: u64,
    },

    /// Content is not the image type its extension declares
    #[error("Invalid image {path}: {message}")]
    InvalidImage { path: PathBuf, message: String },

    /// Reading the file failed
    #[error("Cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures of the outbound classification call.
///
/// Every variant is terminal for the attempt that produced it.
#[derive(Error, Debug)]
pub enum ModelError {
    /// No API key was found at startup
    #[error("API key not set. Set the {env_var} environment variable or add it to .env")]
    MissingApiKey { env_var: String },

    /// Transport-level failure (DNS, connect, TLS, timeout)
    #[error("Request to {model} failed: {message}")]
    Request { model: String, message: String },

    /// Service answered with a non-success status
    #[error("{model} returned HTTP {status}: {message}")]
    Http {
        model: String,
        status: u16,
        message: String,
    },

    /// The prompt or image was refused by the service's safety filters
    #[error("Request blocked by {model}: {reason}")]
    Blocked { model: String, reason: String },

    /// The call succeeded but produced no text
    #[error("{model} returned an empty response")]
    EmptyResponse { model: String },

    /// Response body could not be decoded
    #[error("Failed to parse {model} response: {message}")]
    Parse { model: String, message: String },
}

/// Convenience type alias for Leuko results.
pub type Result<T> = std::result::Result<T, LeukoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_message() {
        assert_eq!(IntakeError::MissingFile.to_string(), "No file uploaded");
    }

    #[test]
    fn test_http_error_includes_service_message() {
        let err = ModelError::Http {
            model: "gemini-1.5-flash".to_string(),
            status: 403,
            message: "API key not valid".to_string(),
        };
        let text = err.to_string();
        assert!(text.contains("403"));
        assert!(text.contains("API key not valid"));
    }

    #[test]
    fn test_leuko_error_is_transparent_for_intake() {
        let err: LeukoError = IntakeError::MissingFile.into();
        assert_eq!(err.to_string(), "No file uploaded");
    }
}
