use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use roundview_core::shared::border::BorderSpec;
use roundview_core::shared::color::Color;
use roundview_core::shared::constants::{DEFAULT_BORDER_COLOR, DEFAULT_BORDER_WIDTH};
use serde::{Deserialize, Serialize};

/// Defaults applied when a flag is not given on the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default = "default_border_width")]
    pub border_width: u32,
    #[serde(default = "default_border_color")]
    pub border_color: Color,
    #[serde(default)]
    pub size: Option<u32>,
}

fn default_border_width() -> u32 {
    DEFAULT_BORDER_WIDTH
}

fn default_border_color() -> Color {
    DEFAULT_BORDER_COLOR
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            border_width: default_border_width(),
            border_color: default_border_color(),
            size: None,
        }
    }
}

impl Settings {
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("RoundView").join("settings.json"))
    }

    /// Loads the user's settings, falling back to defaults on any problem.
    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    pub fn load_from(path: &Path) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|json| match serde_json::from_str(&json) {
                Ok(settings) => Some(settings),
                Err(e) => {
                    log::warn!("Ignoring unreadable settings {}: {e}", path.display());
                    None
                }
            })
            .unwrap_or_default()
    }

    pub fn save(&self) -> io::Result<PathBuf> {
        let path = Self::config_path()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no config directory"))?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)
    }

    pub fn border(&self) -> BorderSpec {
        BorderSpec::new(self.border_width, self.border_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_border() {
        let settings = Settings::default();
        assert_eq!(settings.border(), BorderSpec::none());
        assert_eq!(settings.size, None);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("RoundView").join("settings.json");
        let settings = Settings {
            border_width: 6,
            border_color: Color::from_argb(0xFF336699),
            size: Some(256),
        };
        settings.save_to(&path).unwrap();
        assert_eq!(Settings::load_from(&path), settings);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(
            Settings::load_from(&dir.path().join("absent.json")),
            Settings::default()
        );
    }

    #[test]
    fn test_corrupt_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(Settings::load_from(&path), Settings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r##"{"border_color": "#FF000000"}"##).unwrap();
        let settings = Settings::load_from(&path);
        assert_eq!(settings.border_color, Color::BLACK);
        assert_eq!(settings.border_width, 0);
    }
}
