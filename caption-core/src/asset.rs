//! Image asset data structures

use crate::{Error, Result};
use std::path::Path;

/// Image formats accepted for captioning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Jpeg,
    Png,
}

impl ImageFormat {
    /// Maps a file extension (without the dot, any case) to a format
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            "png" => Ok(Self::Png),
            _ => Err(Error::UnsupportedFormat(ext.to_string())),
        }
    }

    /// Determines the format from a path's extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| Error::UnsupportedFormat(String::new()))?;
        Self::from_extension(ext)
    }

    /// MIME type of the format
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
        }
    }
}

/// Raw bytes of an image file together with its declared format
#[derive(Debug, Clone)]
pub struct ImageAsset {
    data: Vec<u8>,
    format: ImageFormat,
}

impl ImageAsset {
    /// Creates an asset from bytes that are already in memory
    pub fn new(data: Vec<u8>, format: ImageFormat) -> Self {
        Self { data, format }
    }

    /// Reads an asset from disk.
    ///
    /// The format is checked before the file is opened, so an unsupported
    /// extension never causes any I/O.
    pub fn read(path: &Path) -> Result<Self> {
        let format = ImageFormat::from_path(path)?;
        let data = std::fs::read(path)?;
        Ok(Self { data, format })
    }

    /// Original file bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Declared format
    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Returns the size of the asset data in bytes
    pub fn data_size(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn extensions_map_to_formats() {
        assert_eq!(ImageFormat::from_extension("jpg").unwrap(), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_extension("JPEG").unwrap(), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_extension("png").unwrap(), ImageFormat::Png);
    }

    #[test]
    fn unknown_extensions_are_rejected() {
        for ext in ["gif", "webp", "bmp", ""] {
            assert!(matches!(
                ImageFormat::from_extension(ext),
                Err(Error::UnsupportedFormat(_))
            ));
        }
        assert!(matches!(
            ImageFormat::from_path(&PathBuf::from("photo")),
            Err(Error::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn read_checks_format_before_touching_disk() {
        // The file does not exist; a format error proves no read was attempted
        let result = ImageAsset::read(&PathBuf::from("/nonexistent/picture.gif"));
        assert!(matches!(result, Err(Error::UnsupportedFormat(ext)) if ext == "gif"));
    }

    #[test]
    fn read_loads_bytes_and_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fake.jpg");
        std::fs::write(&path, b"0123456789").unwrap();

        let asset = ImageAsset::read(&path).unwrap();
        assert_eq!(asset.data(), b"0123456789");
        assert_eq!(asset.format(), ImageFormat::Jpeg);
        assert_eq!(asset.data_size(), 10);
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = ImageAsset::read(&dir.path().join("missing.png"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
