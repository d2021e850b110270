//! Local asset loading and encoding
//!
//! Reads are scoped per asset (open, read, close) with no retry. Callers
//! check existence first, so a failure here is a real I/O error and
//! propagates.

use base64::Engine;
use std::fs;
use std::path::Path;

use crate::error::PackError;

/// Read a CSS or JS asset as UTF-8 text.
pub fn load_text(path: &Path) -> Result<String, PackError> {
    fs::read_to_string(path).map_err(|source| PackError::ReadAsset {
        path: path.to_path_buf(),
        source,
    })
}

/// Read an image and encode it as a `data:image/<ext>;base64,...` URI.
///
/// The MIME subtype is the literal file extension with the leading dot
/// stripped; it is not validated against a known MIME list.
pub fn load_image_data_url(path: &Path) -> Result<String, PackError> {
    let bytes = fs::read(path).map_err(|source| PackError::ReadAsset {
        path: path.to_path_buf(),
        source,
    })?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    // Pre-size the output: prefix + subtype + encoded payload.
    let encoded_capacity = base64::encoded_len(bytes.len(), false).unwrap_or(0);
    let mut data_url = String::with_capacity(encoded_capacity + 20 + ext.len());

    data_url.push_str("data:image/");
    data_url.push_str(ext);
    data_url.push_str(";base64,");
    base64::engine::general_purpose::STANDARD.encode_string(&bytes, &mut data_url);

    Ok(data_url)
}
