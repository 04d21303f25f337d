use std::path::Path;

use image::RgbaImage;

/// Loads a source image as straight-alpha RGBA8.
pub trait ImageReader: Send {
    fn read(&self, path: &Path) -> Result<RgbaImage, Box<dyn std::error::Error>>;
}
