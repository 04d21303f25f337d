use tiny_skia::Pixmap;

use crate::shared::pixel_format;

/// A `2r x 2r` image that is transparent outside a circle of radius `r`.
///
/// Pixels are stored premultiplied, ready to be blitted onto a surface.
#[derive(Clone, Debug, PartialEq)]
pub struct CircularImage {
    pixmap: Pixmap,
    radius: u32,
}

impl CircularImage {
    pub(crate) fn new(pixmap: Pixmap, radius: u32) -> Self {
        debug_assert_eq!(pixmap.width(), radius * 2, "width must equal the diameter");
        debug_assert_eq!(pixmap.height(), radius * 2, "height must equal the diameter");
        Self { pixmap, radius }
    }

    pub fn radius(&self) -> u32 {
        self.radius
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Straight-alpha RGBA at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        pixel_format::pixel_at(&self.pixmap, x, y)
    }

    pub fn as_pixmap(&self) -> &Pixmap {
        &self.pixmap
    }
}
