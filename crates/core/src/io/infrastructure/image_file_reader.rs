use std::path::Path;

use image::RgbaImage;

use crate::io::domain::image_io_error::ImageIoError;
use crate::io::domain::image_reader::ImageReader;

/// Decodes image files with the `image` crate.
///
/// Whatever the file's pixel format, the result is converted to RGBA8 so
/// the compositor only ever sees one layout.
pub struct ImageFileReader;

impl ImageFileReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileReader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageReader for ImageFileReader {
    fn read(&self, path: &Path) -> Result<RgbaImage, Box<dyn std::error::Error>> {
        let decoded = image::open(path).map_err(|source| ImageIoError::Decode {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!(
            "Decoded {} ({}x{}, {:?})",
            path.display(),
            decoded.width(),
            decoded.height(),
            decoded.color()
        );
        Ok(decoded.to_rgba8())
    }
}
