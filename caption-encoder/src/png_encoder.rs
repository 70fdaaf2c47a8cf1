//! PNG encoding functionality
//!
//! PNG is lossless, so the ladder only varies deflate effort. An image that
//! is already well compressed will not shrink, and the fitter reports the
//! budget as exceeded once the ladder is exhausted.

use caption_core::{Error, Result};
use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::DynamicImage;

/// Deflate and filter settings for one PNG attempt
#[derive(Debug, Clone, Copy)]
pub struct PngSettings {
    pub compression: CompressionType,
    pub filter: FilterType,
}

/// Settings tried when shrinking a PNG, cheapest first
pub const PNG_COMPRESSION_LADDER: [PngSettings; 2] = [
    PngSettings {
        compression: CompressionType::Default,
        filter: FilterType::Adaptive,
    },
    PngSettings {
        compression: CompressionType::Best,
        filter: FilterType::Adaptive,
    },
];

/// Encodes an image to PNG with the given settings
pub fn encode_png(image: &DynamicImage, settings: PngSettings) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let encoder = PngEncoder::new_with_quality(&mut buffer, settings.compression, settings.filter);
    image.write_with_encoder(encoder).map_err(Error::Encode)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_images::noise;

    #[test]
    fn encoding_is_lossless() {
        let image = noise(32, 32);
        let encoded = encode_png(&image, PNG_COMPRESSION_LADDER[0]).unwrap();
        let decoded = image::load_from_memory_with_format(&encoded, image::ImageFormat::Png).unwrap();
        assert_eq!(decoded.to_rgb8(), image.to_rgb8());
    }

    #[test]
    fn every_setting_produces_valid_png() {
        let image = noise(16, 16);
        for settings in PNG_COMPRESSION_LADDER {
            let encoded = encode_png(&image, settings).unwrap();
            assert!(encoded.starts_with(&[0x89, b'P', b'N', b'G']));
        }
    }
}
