use std::borrow::Cow;

use image::{imageops, RgbaImage};

/// Centered square window inside a `width x height` image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CropWindow {
    pub x: u32,
    pub y: u32,
    pub side: u32,
}

/// Largest centered square: side `min(width, height)`, offset along the longer axis.
pub fn crop_window(width: u32, height: u32) -> CropWindow {
    if width > height {
        CropWindow {
            x: (width - height) / 2,
            y: 0,
            side: height,
        }
    } else if height > width {
        CropWindow {
            x: 0,
            y: (height - width) / 2,
            side: width,
        }
    } else {
        CropWindow {
            x: 0,
            y: 0,
            side: width,
        }
    }
}

/// Center-crops to a square so later scaling never squashes the subject.
///
/// Already-square images are borrowed rather than copied.
pub fn crop_to_square(image: &RgbaImage) -> Cow<'_, RgbaImage> {
    let (width, height) = image.dimensions();
    if width == height {
        return Cow::Borrowed(image);
    }
    let window = crop_window(width, height);
    log::debug!(
        "Cropping {width}x{height} to {side}x{side} at ({x}, {y})",
        side = window.side,
        x = window.x,
        y = window.y
    );
    Cow::Owned(imageops::crop_imm(image, window.x, window.y, window.side, window.side).to_image())
}
