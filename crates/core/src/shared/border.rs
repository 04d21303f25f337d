use serde::{Deserialize, Serialize};

use crate::shared::color::Color;
use crate::shared::constants::{DEFAULT_BORDER_COLOR, DEFAULT_BORDER_WIDTH};

/// Ring drawn around the circular image. A width of zero means no ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BorderSpec {
    pub width: u32,
    pub color: Color,
}

impl BorderSpec {
    pub fn new(width: u32, color: Color) -> Self {
        Self { width, color }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.width > 0
    }
}

impl Default for BorderSpec {
    fn default() -> Self {
        Self {
            width: DEFAULT_BORDER_WIDTH,
            color: DEFAULT_BORDER_COLOR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_invisible_white() {
        let border = BorderSpec::default();
        assert_eq!(border.width, 0);
        assert_eq!(border.color, Color::WHITE);
        assert!(!border.is_visible());
    }

    #[test]
    fn test_positive_width_is_visible() {
        assert!(BorderSpec::new(1, Color::BLACK).is_visible());
    }

    #[test]
    fn test_deserialize_fills_missing_fields() {
        let border: BorderSpec = serde_json::from_str(r#"{"width": 4}"#).unwrap();
        assert_eq!(border, BorderSpec::new(4, Color::WHITE));
    }
}
