use std::path::Path;

use image::RgbaImage;

use crate::io::domain::image_io_error::ImageIoError;
use crate::io::domain::image_writer::ImageWriter;

/// Writes RGBA images with the `image` crate; the format follows the file extension.
pub struct ImageFileWriter;

impl ImageFileWriter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ImageFileWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageWriter for ImageFileWriter {
    fn write(&self, path: &Path, image: &RgbaImage) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| ImageIoError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        image.save(path).map_err(|source| ImageIoError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(())
    }
}
