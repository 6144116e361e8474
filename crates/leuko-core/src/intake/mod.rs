//! Image intake: selected file → validated `UploadedImage` → request payload.

mod validate;

pub use validate::ImageIntake;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::error::IntakeError;
use crate::types::UploadedImage;

/// Base64-encoded image ready to send to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    /// MIME type ("image/jpeg" or "image/png")
    pub mime_type: String,
    /// Base64-encoded image bytes
    pub data: String,
}

impl ImagePayload {
    pub fn from_upload(image: &UploadedImage) -> Self {
        Self {
            mime_type: image.mime().as_str().to_string(),
            data: BASE64.encode(image.bytes()),
        }
    }
}

/// Convert the session's selected image into a request payload.
///
/// Fails with `IntakeError::MissingFile` when nothing is selected; callers
/// surface that as an inline message.
pub fn prepare(image: Option<&UploadedImage>) -> Result<ImagePayload, IntakeError> {
    let image = image.ok_or(IntakeError::MissingFile)?;
    Ok(ImagePayload::from_upload(image))
}
