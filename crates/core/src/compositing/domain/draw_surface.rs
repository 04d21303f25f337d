use crate::shared::circular_image::CircularImage;
use crate::shared::color::Color;

/// Mutable 2D drawing target for the compositor.
///
/// Implementations draw in place; coordinates are in surface pixels with the
/// origin at the top-left corner.
pub trait DrawSurface {
    /// Strokes an anti-aliased circle outline centered on `radius`.
    fn stroke_circle(
        &mut self,
        center_x: f32,
        center_y: f32,
        radius: f32,
        stroke_width: f32,
        color: Color,
    );

    /// Blits `image` with its top-left corner at `(x, y)`, source-over.
    fn draw_image(&mut self, image: &CircularImage, x: i32, y: i32);
}
