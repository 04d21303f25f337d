use std::borrow::Cow;

use image::imageops::{self, FilterType};
use image::RgbaImage;

/// Resamples a square image to `diameter x diameter` with bilinear filtering.
///
/// Images already at the target size pass through untouched. The input is
/// consumed so a cropped intermediate is freed as soon as it has been scaled.
pub fn scale_to_diameter(square: Cow<'_, RgbaImage>, diameter: u32) -> Cow<'_, RgbaImage> {
    debug_assert!(diameter > 0, "diameter must be positive");
    if square.width() == diameter && square.height() == diameter {
        return square;
    }
    log::debug!(
        "Scaling {}x{} to {diameter}x{diameter}",
        square.width(),
        square.height()
    );
    Cow::Owned(imageops::resize(&*square, diameter, diameter, FilterType::Triangle))
}
