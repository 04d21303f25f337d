use image::{Rgba, RgbaImage};
use tiny_skia::{ColorU8, Pixmap};

/// Converts straight-alpha RGBA into a premultiplied pixmap.
///
/// Returns `None` for a zero-sized image, which tiny-skia cannot allocate.
pub fn premultiply(image: &RgbaImage) -> Option<Pixmap> {
    let mut pixmap = Pixmap::new(image.width(), image.height())?;
    for (dst, src) in pixmap.pixels_mut().iter_mut().zip(image.pixels()) {
        let [r, g, b, a] = src.0;
        *dst = ColorU8::from_rgba(r, g, b, a).premultiply();
    }
    Some(pixmap)
}

/// Converts a premultiplied pixmap back into straight-alpha RGBA.
pub fn demultiply(pixmap: &Pixmap) -> RgbaImage {
    let mut image = RgbaImage::new(pixmap.width(), pixmap.height());
    for (dst, src) in image.pixels_mut().zip(pixmap.pixels()) {
        let c = src.demultiply();
        *dst = Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    image
}

/// Straight-alpha RGBA of a single pixmap pixel, or `None` outside the pixmap.
pub fn pixel_at(pixmap: &Pixmap, x: u32, y: u32) -> Option<[u8; 4]> {
    // Pixmap::pixel only checks the flat index, so (width, y) would wrap to (0, y + 1).
    if x >= pixmap.width() || y >= pixmap.height() {
        return None;
    }
    let c = pixmap.pixel(x, y)?.demultiply();
    Some([c.red(), c.green(), c.blue(), c.alpha()])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_image_has_no_pixmap() {
        assert!(premultiply(&RgbaImage::new(0, 4)).is_none());
    }

    #[test]
    fn test_opaque_pixels_survive_both_directions() {
        let image = RgbaImage::from_pixel(3, 2, Rgba([12, 200, 77, 255]));
        let pixmap = premultiply(&image).unwrap();
        assert_eq!(demultiply(&pixmap), image);
    }

    #[test]
    fn test_premultiply_scales_color_by_alpha() {
        let image = RgbaImage::from_pixel(1, 1, Rgba([255, 0, 0, 0]));
        let pixmap = premultiply(&image).unwrap();
        let p = pixmap.pixel(0, 0).unwrap();
        assert_eq!((p.red(), p.alpha()), (0, 0));
    }

    #[test]
    fn test_pixel_at_out_of_bounds() {
        let pixmap = Pixmap::new(2, 2).unwrap();
        assert_eq!(pixel_at(&pixmap, 2, 0), None);
        assert_eq!(pixel_at(&pixmap, 0, 2), None);
        assert_eq!(pixel_at(&pixmap, 1, 1), Some([0, 0, 0, 0]));
    }
}
