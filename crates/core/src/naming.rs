//! Poster naming and upload checks.
//!
//! Every movie has exactly one canonical poster path, derived from its `mid`.

use image::ImageFormat;

use crate::error::CoreError;
use crate::types::DbId;

/// File extensions accepted on poster uploads (compared case-insensitively).
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg"];

/// Deterministic poster filename for a movie.
///
/// ```
/// use ymdb_core::naming::poster_filename;
///
/// assert_eq!(poster_filename(1), "00000001.png");
/// assert_eq!(poster_filename(255), "000000ff.png");
/// ```
pub fn poster_filename(mid: DbId) -> String {
    format!("{mid:08x}.png")
}

/// Whether the uploaded filename carries an allowed image extension.
pub fn is_allowed_image(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Check the upload's filename and sniff its bytes as PNG or JPEG.
pub fn validate_poster_upload(filename: &str, bytes: &[u8]) -> Result<ImageFormat, CoreError> {
    if !is_allowed_image(filename) {
        return Err(CoreError::Validation(format!(
            "file type not allowed, must be one of: {}",
            IMAGE_EXTENSIONS.join(", ")
        )));
    }
    if bytes.is_empty() {
        return Err(CoreError::Validation("poster image is empty".to_string()));
    }

    match image::guess_format(bytes) {
        Ok(format @ (ImageFormat::Png | ImageFormat::Jpeg)) => Ok(format),
        _ => Err(CoreError::Validation(
            "poster content is not a PNG or JPEG image".to_string(),
        )),
    }
}
