use image::RgbaImage;
use tiny_skia::{
    BlendMode, FillRule, FilterQuality, Paint, PathBuilder, Pixmap, PixmapPaint, Transform,
};

use crate::shared::circular_image::CircularImage;
use crate::shared::pixel_format;

/// Clips a `2r x 2r` image to a circle of radius `r`.
///
/// Fills an anti-aliased circle into a transparent buffer, then draws the
/// image over it with source-in so only the circle keeps the image's pixels.
/// The circle's soft edge becomes graduated alpha. Returns `None` when the
/// image is empty or the radius is zero.
pub fn mask_to_circle(scaled: &RgbaImage, radius: u32) -> Option<CircularImage> {
    if radius == 0 {
        return None;
    }
    debug_assert_eq!(scaled.dimensions(), (radius * 2, radius * 2));

    let mut out = Pixmap::new(scaled.width(), scaled.height())?;
    let center_x = (scaled.width() / 2) as f32;
    let center_y = (scaled.height() / 2) as f32;
    let circle = PathBuilder::from_circle(center_x, center_y, radius as f32)?;

    let mut mask_paint = Paint::default();
    mask_paint.anti_alias = true;
    mask_paint.set_color_rgba8(0, 0, 0, 255);
    out.fill_path(
        &circle,
        &mask_paint,
        FillRule::Winding,
        Transform::identity(),
        None,
    );

    let source = pixel_format::premultiply(scaled)?;
    let source_in = PixmapPaint {
        opacity: 1.0,
        blend_mode: BlendMode::SourceIn,
        quality: FilterQuality::Nearest,
    };
    out.draw_pixmap(0, 0, source.as_ref(), &source_in, Transform::identity(), None);

    Some(CircularImage::new(out, radius))
}
