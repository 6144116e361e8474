//! Core data types shared by intake, the model client and the session.

use std::fmt;
use std::path::Path;

/// Image formats accepted for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageMime {
    Jpeg,
    Png,
}

impl ImageMime {
    /// File extensions offered by the file picker.
    pub const EXTENSIONS: [&'static str; 3] = ["jpg", "jpeg", "png"];

    /// Map a file extension (case-insensitive) to its declared MIME type.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            _ => None,
        }
    }

    /// Identify the format from the leading magic bytes.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        // JPEG: FF D8 FF
        if bytes.len() >= 3 && bytes[..3] == [0xFF, 0xD8, 0xFF] {
            return Some(Self::Jpeg);
        }
        // PNG: 89 50 4E 47 0D 0A 1A 0A
        if bytes.len() >= 8 && bytes[..8] == [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A] {
            return Some(Self::Png);
        }
        None
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }

    pub(crate) fn image_format(&self) -> image::ImageFormat {
        match self {
            Self::Jpeg => image::ImageFormat::Jpeg,
            Self::Png => image::ImageFormat::Png,
        }
    }
}

impl fmt::Display for ImageMime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A file the user selected, held in memory for one session interaction.
///
/// Immutable once created; selecting another file replaces it.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    file_name: String,
    mime: ImageMime,
    bytes: Vec<u8>,
}

impl UploadedImage {
    pub fn new(file_name: impl Into<String>, mime: ImageMime, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            mime,
            bytes,
        }
    }

    /// Build from a path's file name, declaring the MIME type from its extension.
    pub fn from_path_bytes(path: &Path, bytes: Vec<u8>) -> Option<Self> {
        let mime = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(ImageMime::from_extension)?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Some(Self::new(file_name, mime, bytes))
    }

    pub(crate) fn with_mime(self, mime: ImageMime) -> Self {
        Self { mime, ..self }
    }

    /// Source file name, for display only.
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn mime(&self) -> ImageMime {
        self.mime
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}
