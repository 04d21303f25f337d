use crate::shared::border::BorderSpec;
use crate::shared::view_geometry::ViewGeometry;

/// Circle placement for one view. The ring, if any, is centered on `radius`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CircleSpec {
    pub radius: u32,
}

impl CircleSpec {
    /// Half the view's smaller side, inset by the border width.
    ///
    /// Returns `None` when the border leaves no room for a circle.
    pub fn for_view(geometry: ViewGeometry, border: BorderSpec) -> Option<Self> {
        let outer = geometry.min_side() / 2;
        let radius = outer.checked_sub(border.width).filter(|r| *r > 0)?;
        Some(Self { radius })
    }

    pub fn diameter(&self) -> u32 {
        self.radius * 2
    }

    /// Top-left corner that centers a `2r x 2r` image in the view.
    pub fn image_origin(&self, geometry: ViewGeometry) -> (i32, i32) {
        let (cx, cy) = geometry.center();
        (
            cx as i32 - self.radius as i32,
            cy as i32 - self.radius as i32,
        )
    }
}
