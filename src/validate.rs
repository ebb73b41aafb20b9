//! Background image validation
//!
//! Image settings accept a candidate value only when its file extension is on
//! a fixed allow-list of known image types. Rejections are not errors: the
//! value silently degrades to the previously stored one, which is treated as
//! already trusted and is not re-validated.

use tracing::debug;

/// A matched file extension with its MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileType {
    pub ext: &'static str,
    pub mime: &'static str,
}

/// Allowed image extensions, grouped by MIME type.
const IMAGE_MIMES: &[(&[&str], &str)] = &[
    (&["jpg", "jpeg", "jpe"], "image/jpeg"),
    (&["gif"], "image/gif"),
    (&["png"], "image/png"),
    (&["bmp"], "image/bmp"),
    (&["tif", "tiff"], "image/tiff"),
    (&["ico"], "image/x-icon"),
];

/// Look up the image file type for a file name or URL.
///
/// The extension is everything after the last `.`, matched case
/// insensitively against the allow-list. Returns `None` when there is no
/// extension or it is not a known image type. Trailing noise such as a
/// query string obscures the extension, so such references degrade to the
/// fallback.
pub fn image_file_type(name: &str) -> Option<FileType> {
    let (_, ext) = name.rsplit_once('.')?;
    let ext = ext.to_ascii_lowercase();

    for (exts, mime) in IMAGE_MIMES.iter().copied() {
        if let Some(matched) = exts.iter().copied().find(|e| *e == ext) {
            return Some(FileType { ext: matched, mime });
        }
    }
    None
}

/// Validate a candidate image reference against the extension allow-list.
///
/// Returns `candidate` unchanged when its extension is an allowed image
/// type, otherwise returns `fallback` (the previously stored value). Never
/// fails; unreadable input degrades to the fallback.
pub fn validate_image(candidate: &str, fallback: &str) -> String {
    match image_file_type(candidate) {
        Some(file_type) => {
            debug!(candidate = %candidate, mime = %file_type.mime, "image accepted");
            candidate.to_string()
        }
        None => {
            debug!(candidate = %candidate, "image rejected, keeping previous value");
            fallback.to_string()
        }
    }
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
