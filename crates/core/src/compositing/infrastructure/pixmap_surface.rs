use image::RgbaImage;
use thiserror::Error;
use tiny_skia::{Paint, PathBuilder, Pixmap, PixmapPaint, Stroke, Transform};

use crate::compositing::domain::draw_surface::DrawSurface;
use crate::shared::circular_image::CircularImage;
use crate::shared::color::Color;
use crate::shared::pixel_format;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("cannot allocate a {width}x{height} drawing surface")]
    InvalidSize { width: u32, height: u32 },
}

/// In-memory [`DrawSurface`] backed by a tiny-skia pixmap.
///
/// Starts fully transparent.
#[derive(Clone, Debug)]
pub struct PixmapSurface {
    pixmap: Pixmap,
}

impl PixmapSurface {
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        let pixmap = Pixmap::new(width, height).ok_or(SurfaceError::InvalidSize { width, height })?;
        Ok(Self { pixmap })
    }

    pub fn size(&self) -> (u32, u32) {
        (self.pixmap.width(), self.pixmap.height())
    }

    pub fn fill(&mut self, color: Color) {
        self.pixmap.fill(color.to_skia());
    }

    /// Straight-alpha RGBA at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        pixel_format::pixel_at(&self.pixmap, x, y)
    }

    /// Raw premultiplied RGBA bytes.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    pub fn to_rgba_image(&self) -> RgbaImage {
        pixel_format::demultiply(&self.pixmap)
    }
}

impl DrawSurface for PixmapSurface {
    fn stroke_circle(
        &mut self,
        center_x: f32,
        center_y: f32,
        radius: f32,
        stroke_width: f32,
        color: Color,
    ) {
        if radius <= 0.0 || stroke_width <= 0.0 {
            log::debug!("Skipping degenerate ring (radius={radius}, width={stroke_width})");
            return;
        }
        let Some(path) = PathBuilder::from_circle(center_x, center_y, radius) else {
            log::debug!("Skipping degenerate ring (radius={radius})");
            return;
        };
        let mut paint = Paint::default();
        paint.anti_alias = true;
        paint.set_color(color.to_skia());
        let stroke = Stroke {
            width: stroke_width,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    fn draw_image(&mut self, image: &CircularImage, x: i32, y: i32) {
        self.pixmap.draw_pixmap(
            x,
            y,
            image.as_pixmap().as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
    }
}
