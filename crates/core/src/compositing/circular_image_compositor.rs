use image::RgbaImage;

use crate::compositing::circle_mask::mask_to_circle;
use crate::compositing::domain::draw_surface::DrawSurface;
use crate::compositing::scaling::scale_to_diameter;
use crate::compositing::square_crop::crop_to_square;
use crate::shared::border::BorderSpec;
use crate::shared::circle_spec::CircleSpec;
use crate::shared::circular_image::CircularImage;
use crate::shared::color::Color;
use crate::shared::view_geometry::{GeometryCache, GeometryPolicy, ViewGeometry};

/// What a [`CircularImageCompositor::render`] call ended up doing.
///
/// Every variant other than `Drawn` is a benign "nothing to draw yet".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    Drawn { radius: u32 },
    /// The view has no area; layout has not happened yet.
    SkippedEmptyView,
    /// The border is at least as wide as half the view.
    SkippedNoRoom,
    /// No source image, or an image with no pixels. The ring may still be drawn.
    SkippedNoImage,
}

impl RenderOutcome {
    pub fn is_drawn(&self) -> bool {
        matches!(self, RenderOutcome::Drawn { .. })
    }
}

/// Draws a source image clipped to a circle centered in a view, with an
/// optional ring border around it.
#[derive(Clone, Debug, Default)]
pub struct CircularImageCompositor {
    border: BorderSpec,
    geometry: GeometryCache,
}

impl CircularImageCompositor {
    pub fn new(border: BorderSpec, policy: GeometryPolicy) -> Self {
        Self {
            border,
            geometry: GeometryCache::new(policy),
        }
    }

    pub fn cached_geometry(&self) -> Option<ViewGeometry> {
        self.geometry.cached()
    }

    /// Draws one frame onto `surface`.
    ///
    /// The ring is stroked first at the inset radius so the image, drawn
    /// second, covers its inner half. Never fails: empty views, missing
    /// images and borders wider than the view all draw nothing.
    pub fn render<S: DrawSurface + ?Sized>(
        &mut self,
        surface: &mut S,
        source: Option<&RgbaImage>,
        view: ViewGeometry,
    ) -> RenderOutcome {
        let Some(geometry) = self.geometry.resolve(view) else {
            log::debug!("View is {}x{}, nothing to draw", view.width, view.height);
            return RenderOutcome::SkippedEmptyView;
        };
        let Some(circle) = CircleSpec::for_view(geometry, self.border) else {
            log::debug!(
                "Border width {} leaves no room in a {}x{} view",
                self.border.width,
                geometry.width,
                geometry.height
            );
            return RenderOutcome::SkippedNoRoom;
        };

        if self.border.is_visible() {
            let (cx, cy) = geometry.center();
            draw_border_ring(
                surface,
                cx as f32,
                cy as f32,
                circle.radius,
                self.border.width,
                self.border.color,
            );
        }

        let Some(round) = source.and_then(|image| round_image(image, circle.radius)) else {
            log::debug!("No source image to draw");
            return RenderOutcome::SkippedNoImage;
        };
        let (x, y) = circle.image_origin(geometry);
        surface.draw_image(&round, x, y);

        RenderOutcome::Drawn {
            radius: circle.radius,
        }
    }
}

/// Crops, scales and masks `source` into a circle of the given radius.
///
/// Each intermediate is dropped once the next stage has consumed it.
/// Returns `None` for an empty source or a zero radius.
pub fn round_image(source: &RgbaImage, radius: u32) -> Option<CircularImage> {
    if source.width() == 0 || source.height() == 0 || radius == 0 {
        return None;
    }
    let scaled = scale_to_diameter(crop_to_square(source), radius * 2);
    mask_to_circle(&scaled, radius)
}

/// Strokes the border ring centered on `radius`.
pub fn draw_border_ring<S: DrawSurface + ?Sized>(
    surface: &mut S,
    center_x: f32,
    center_y: f32,
    radius: u32,
    stroke_width: u32,
    color: Color,
) {
    surface.stroke_circle(
        center_x,
        center_y,
        radius as f32,
        stroke_width as f32,
        color,
    );
}
