//! Checks applied to a selected file before it becomes an `UploadedImage`.

use std::path::Path;

use crate::config::LimitsConfig;
use crate::error::IntakeError;
use crate::types::{ImageMime, UploadedImage};

/// Loads and validates files chosen by the user.
pub struct ImageIntake {
    limits: LimitsConfig,
}

impl ImageIntake {
    /// Create a new intake with the given limits.
    pub fn new(limits: LimitsConfig) -> Self {
        Self { limits }
    }

    /// Read a selected file into memory.
    ///
    /// Checks:
    /// - File exists
    /// - Extension is jpg, jpeg or png
    /// - File size is within limits
    /// - Content has JPEG or PNG magic bytes
    pub fn load(&self, path: &Path) -> Result<UploadedImage, IntakeError> {
        if !path.is_file() {
            return Err(IntakeError::NotFound(path.to_path_buf()));
        }

        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();
        if ImageMime::from_extension(&extension).is_none() {
            return Err(IntakeError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            });
        }

        let metadata = std::fs::metadata(path).map_err(|source| IntakeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        self.check_size(path, metadata.len())?;

        let bytes = std::fs::read(path).map_err(|source| IntakeError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let Some(image) = UploadedImage::from_path_bytes(path, bytes) else {
            return Err(IntakeError::UnsupportedFormat {
                path: path.to_path_buf(),
                extension,
            });
        };
        let image = self.check_content(path, image)?;

        tracing::debug!(
            file = image.file_name(),
            mime = %image.mime(),
            bytes = image.size(),
            "Image accepted"
        );
        Ok(image)
    }

    fn check_size(&self, path: &Path, len: u64) -> Result<(), IntakeError> {
        let max_bytes = self.limits.max_file_size_mb.saturating_mul(1024 * 1024);
        if len > max_bytes {
            return Err(IntakeError::FileTooLarge {
                path: path.to_path_buf(),
                size_mb: len / (1024 * 1024),
                max_mb: self.limits.max_file_size_mb,
            });
        }
        Ok(())
    }

    /// Reject content that is not JPEG/PNG. When the magic bytes disagree with
    /// the extension, the detected type wins so the payload is labelled truthfully.
    fn check_content(&self, path: &Path, image: UploadedImage) -> Result<UploadedImage, IntakeError> {
        let Some(detected) = ImageMime::sniff(image.bytes()) else {
            return Err(IntakeError::InvalidImage {
                path: path.to_path_buf(),
                message: "Unrecognized image format (invalid magic bytes)".to_string(),
            });
        };

        if detected == image.mime() {
            return Ok(image);
        }

        tracing::warn!(
            file = image.file_name(),
            declared = %image.mime(),
            detected = %detected,
            "Extension does not match image content, using detected type"
        );
        Ok(image.with_mime(detected))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const PNG_HEADER: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn write_file(dir: &Path, name: &str, bytes: &[u8]) -> std::path::PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(bytes).unwrap();
        path
    }

    fn intake() -> ImageIntake {
        ImageIntake::new(LimitsConfig::default())
    }

    #[test]
    fn test_load_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "cell.png", &PNG_HEADER);
        let image = intake().load(&path).unwrap();
        assert_eq!(image.mime(), ImageMime::Png);
        assert_eq!(image.file_name(), "cell.png");
        assert_eq!(image.bytes(), &PNG_HEADER);
    }

    #[test]
    fn test_load_missing_file() {
        let err = intake().load(Path::new("/nonexistent/cell.png")).unwrap_err();
        assert!(matches!(err, IntakeError::NotFound(_)));
    }

    #[test]
    fn test_load_rejects_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "cell.webp", b"RIFF0000WEBP");
        let err = intake().load(&path).unwrap_err();
        match err {
            IntakeError::UnsupportedFormat { extension, .. } => assert_eq!(extension, "webp"),
            other => panic!("Expected UnsupportedFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_load_rejects_oversized_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "big.jpg", &vec![0xFF; 2 * 1024 * 1024 + 1]);
        let intake = ImageIntake::new(LimitsConfig {
            max_file_size_mb: 2,
            ..LimitsConfig::default()
        });
        let err = intake.load(&path).unwrap_err();
        assert!(matches!(err, IntakeError::FileTooLarge { max_mb: 2, .. }));
    }

    #[test]
    fn test_load_with_unvalidated_huge_limit_does_not_overflow() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "cell.png", &PNG_HEADER);
        let intake = ImageIntake::new(LimitsConfig {
            max_file_size_mb: u64::MAX,
            ..LimitsConfig::default()
        });
        let image = intake.load(&path).unwrap();
        assert_eq!(image.mime(), ImageMime::Png);
    }

    #[test]
    fn test_load_rejects_non_image_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "notes.jpg", b"just some text");
        let err = intake().load(&path).unwrap_err();
        assert!(matches!(err, IntakeError::InvalidImage { .. }));
    }

    #[test]
    fn test_load_rejects_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "empty.png", &[]);
        let err = intake().load(&path).unwrap_err();
        assert!(matches!(err, IntakeError::InvalidImage { .. }));
    }

    #[test]
    fn test_load_uses_detected_type_on_mismatch() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(dir.path(), "mislabelled.jpg", &PNG_HEADER);
        let image = intake().load(&path).unwrap();
        assert_eq!(image.mime(), ImageMime::Png);
        assert_eq!(image.file_name(), "mislabelled.jpg");
    }
}
