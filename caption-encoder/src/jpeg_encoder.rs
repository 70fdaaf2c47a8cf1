//! JPEG encoding functionality

use caption_core::{Error, Result};
use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;

/// Qualities tried when shrinking a JPEG, highest first
pub const JPEG_QUALITY_LADDER: [u8; 9] = [95, 85, 75, 65, 55, 45, 35, 25, 15];

/// Encodes an image to JPEG at the given quality (1-100).
///
/// The image must already be in a color type JPEG can carry (L8 or Rgb8).
pub fn encode_jpeg(image: &DynamicImage, quality: u8) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
    image.write_with_encoder(encoder).map_err(Error::Encode)?;
    Ok(buffer)
}

/// Drops alpha and widens to 8-bit RGB so the JPEG encoder accepts any input
pub fn prepare_for_jpeg(image: DynamicImage) -> DynamicImage {
    match image {
        DynamicImage::ImageRgb8(_) | DynamicImage::ImageLuma8(_) => image,
        other => DynamicImage::ImageRgb8(other.to_rgb8()),
    }
}
