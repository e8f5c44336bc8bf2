//! Arena configuration
//!
//! Settings are read from `arena.json` in the user's config directory
//! (`~/.config/championship-wrestling/arena.json` on Linux). Every field is
//! optional; anything missing falls back to the defaults below.

use crate::error::GameError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const CONFIG_DIR_NAME: &str = "championship-wrestling";
const CONFIG_FILE_NAME: &str = "arena.json";

/// Largest accepted canvas side
const MAX_CANVAS_SIZE: u32 = 4096;
const MAX_WINDOW_SCALE: u32 = 6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub window_title: String,

    /// Logical canvas size; the scene is laid out for 800x600
    pub canvas_width: u32,
    pub canvas_height: u32,

    pub target_fps: u32,

    /// Fixed window scale. `None` picks the largest scale that fits the desktop.
    pub window_scale: Option<u32>,

    /// Start with the zone debug overlay visible
    pub show_zones: bool,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            window_title: "Championship Wrestling".to_string(),
            canvas_width: 800,
            canvas_height: 600,
            target_fps: 60,
            window_scale: None,
            show_zones: false,
        }
    }
}

impl ArenaConfig {
    /// Default location of the config file, if the platform has a config dir
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load the config from the default location.
    ///
    /// A missing file is not an error; a malformed one is.
    pub fn load() -> Result<Self, GameError> {
        match Self::default_path() {
            Some(path) if path.exists() => {
                let config = Self::load_from_file(&path)?;
                log::info!("Loaded arena config from {}", path.display());
                Ok(config)
            }
            Some(path) => {
                log::info!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => {
                log::warn!("Could not locate a config directory, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: ArenaConfig = serde_json::from_str(json)?;
        Ok(config.sanitized())
    }

    /// Frame duration for the configured FPS (zero FPS is treated as 1)
    pub fn frame_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs(1) / self.target_fps.max(1)
    }

    fn sanitized(mut self) -> Self {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            log::warn!(
                "Ignoring canvas size {}x{}, using 800x600",
                self.canvas_width,
                self.canvas_height
            );
            self.canvas_width = 800;
            self.canvas_height = 600;
        }
        if self.canvas_width > MAX_CANVAS_SIZE || self.canvas_height > MAX_CANVAS_SIZE {
            log::warn!(
                "Canvas size {}x{} too large, clamping to {}",
                self.canvas_width,
                self.canvas_height,
                MAX_CANVAS_SIZE
            );
            self.canvas_width = self.canvas_width.min(MAX_CANVAS_SIZE);
            self.canvas_height = self.canvas_height.min(MAX_CANVAS_SIZE);
        }
        match self.window_scale {
            Some(0) => self.window_scale = None,
            Some(scale) if scale > MAX_WINDOW_SCALE => {
                log::warn!("Window scale {}x too large, using {}x", scale, MAX_WINDOW_SCALE);
                self.window_scale = Some(MAX_WINDOW_SCALE);
            }
            _ => {}
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ArenaConfig::default();
        assert_eq!(config.canvas_width, 800);
        assert_eq!(config.canvas_height, 600);
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.window_scale, None);
        assert!(!config.show_zones);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ArenaConfig::from_json(r#"{ "target_fps": 30, "show_zones": true }"#).unwrap();
        assert_eq!(config.target_fps, 30);
        assert!(config.show_zones);
        assert_eq!(config.canvas_width, 800);
        assert_eq!(config.window_title, "Championship Wrestling");
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let result = ArenaConfig::from_json(r#"{ "target_fps": "fast" }"#);
        assert!(matches!(result, Err(GameError::Config(_))));
    }

    #[test]
    fn test_zero_sizes_are_replaced() {
        let config =
            ArenaConfig::from_json(r#"{ "canvas_width": 0, "window_scale": 0 }"#).unwrap();
        assert_eq!(config.canvas_width, 800);
        assert_eq!(config.canvas_height, 600);
        assert_eq!(config.window_scale, None);
    }

    #[test]
    fn test_oversized_values_are_clamped() {
        let config = ArenaConfig::from_json(
            r#"{ "canvas_width": 100000, "canvas_height": 700, "window_scale": 10000000 }"#,
        )
        .unwrap();
        assert_eq!(config.window_scale, Some(6));
        assert_eq!(config.canvas_width, 4096);
        assert_eq!(config.canvas_height, 700);

        // Largest window stays within u32
        let width = config.canvas_width.checked_mul(config.window_scale.unwrap());
        assert_eq!(width, Some(4096 * 6));

        let config = ArenaConfig::from_json(r#"{ "window_scale": 3 }"#).unwrap();
        assert_eq!(config.window_scale, Some(3));
    }

    #[test]
    fn test_frame_duration() {
        let config = ArenaConfig {
            target_fps: 50,
            ..Default::default()
        };
        assert_eq!(config.frame_duration(), std::time::Duration::from_millis(20));

        let stalled = ArenaConfig {
            target_fps: 0,
            ..Default::default()
        };
        assert_eq!(stalled.frame_duration(), std::time::Duration::from_secs(1));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = ArenaConfig::load_from_file("/definitely/not/here/arena.json");
        assert!(matches!(result, Err(GameError::Io(_))));
    }
}
