use std::path::Path;

use image::RgbaImage;

/// Writes a rendered image to a file.
pub trait ImageWriter: Send {
    fn write(&self, path: &Path, image: &RgbaImage) -> Result<(), Box<dyn std::error::Error>>;
}
