//! Data URI construction

use crate::ImageFormat;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Returns the `data:<mime>;base64,` prefix for a format
pub fn prefix(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Jpeg => "data:image/jpeg;base64,",
        ImageFormat::Png => "data:image/png;base64,",
    }
}

/// Wraps encoded bytes into a single-line `data:` URI using standard padded base64
pub fn wrap(bytes: &[u8], format: ImageFormat) -> String {
    let prefix = prefix(format);
    let mut uri = String::with_capacity(prefix.len() + bytes.len().div_ceil(3) * 4);
    uri.push_str(prefix);
    STANDARD.encode_string(bytes, &mut uri);
    uri
}
