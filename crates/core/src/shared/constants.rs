use crate::shared::color::Color;

/// Ring width when none is configured: no ring.
pub const DEFAULT_BORDER_WIDTH: u32 = 0;

/// Ring color when none is configured: opaque white.
pub const DEFAULT_BORDER_COLOR: Color = Color::from_argb(0xFFFF_FFFF);

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif", "tiff", "tif", "webp"];

/// Output formats that keep the transparent corners around the circle.
pub const OUTPUT_EXTENSIONS: &[&str] = &["png", "tiff", "tif"];
