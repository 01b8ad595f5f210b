//! Configuration for the snowfall screensaver.
//!
//! Settings live in `config.toml` under the platform config directory
//! (for example `~/.config/snowfall/config.toml` on Linux). The file is
//! optional and every key in it is optional; anything left out keeps the
//! reference value.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use color_eyre::eyre::{WrapErr, eyre};
use directories::ProjectDirs;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use snowfall_core::{CellMetrics, FieldSettings};

const CONFIG_FILE: &str = "config.toml";

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Write log output to this file. Logging is disabled when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
    /// Particle population.
    pub particles: FieldSettings,
    /// Frame pacing and terminal geometry.
    pub display: DisplaySettings,
    /// Background fill.
    pub background: BackgroundSettings,
}

/// Frame pacing and the pixel size of a terminal cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Virtual pixels per cell, horizontally.
    pub cell_width: f32,
    /// Virtual pixels per cell, vertically.
    pub cell_height: f32,
    /// Target time between frames in milliseconds.
    pub frame_interval_ms: u64,
    /// Longest simulated step in milliseconds; 0 disables the limit.
    pub max_frame_delta_ms: u64,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        let cell = CellMetrics::default();
        Self {
            cell_width: cell.width,
            cell_height: cell.height,
            frame_interval_ms: 33,
            max_frame_delta_ms: 250,
        }
    }
}

impl DisplaySettings {
    pub fn cell_metrics(&self) -> CellMetrics {
        CellMetrics {
            width: self.cell_width,
            height: self.cell_height,
        }
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    pub fn max_frame_delta(&self) -> Duration {
        Duration::from_millis(self.max_frame_delta_ms)
    }
}

/// Background fill: an image when one is configured, otherwise a vertical
/// gradient from `top` to `bottom`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackgroundSettings {
    /// Path to a PNG or JPEG picture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<PathBuf>,
    /// Gradient color at the top row.
    pub top: [u8; 3],
    /// Gradient color at the bottom row.
    pub bottom: [u8; 3],
}

impl Default for BackgroundSettings {
    fn default() -> Self {
        Self {
            image: None,
            top: [8, 12, 32],
            bottom: [36, 52, 88],
        }
    }
}

impl Config {
    /// Default location of the config file, if the platform has one.
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "snowfall").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Load from the default location, falling back to defaults when the
    /// file does not exist.
    pub fn load() -> color_eyre::Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_or_default(&path),
            None => {
                debug!("no config directory available, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load from `path`, or return defaults when it does not exist.
    pub fn load_or_default(path: &Path) -> color_eyre::Result<Self> {
        if !path.exists() {
            debug!("config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::load_from(path)
    }

    /// Load and validate the config file at `path`.
    pub fn load_from(path: &Path) -> color_eyre::Result<Self> {
        let contents = fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_toml_str(&contents)
            .wrap_err_with(|| format!("invalid config file {}", path.display()))?;
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> color_eyre::Result<Self> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the config to `path` as TOML, creating parent directories.
    pub fn save_to(&self, path: &Path) -> color_eyre::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .wrap_err_with(|| format!("failed to create {}", parent.display()))?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)
            .wrap_err_with(|| format!("failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Reject values the simulation or the renderer cannot work with.
    pub fn validate(&self) -> color_eyre::Result<()> {
        self.particles.validate()?;

        let display = &self.display;
        let positive = |v: f32| v.is_finite() && v > 0.0;
        if !positive(display.cell_width) || !positive(display.cell_height) {
            return Err(eyre!(
                "cell size {}x{} must be positive",
                display.cell_width,
                display.cell_height
            ));
        }
        if display.frame_interval_ms == 0 {
            return Err(eyre!("frame_interval_ms must be at least 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("snowfall-config-test-{}", std::process::id()))
            .join(name)
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.particles, FieldSettings::default());
        assert_eq!(config.display.cell_metrics(), CellMetrics::default());
        assert_eq!(config.display.frame_interval(), Duration::from_millis(33));
        assert!(config.background.image.is_none());
        assert!(config.log_file.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_document_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_document_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            [particles]
            count = 1200
            respawn_offset = -80.0

            [background]
            top = [0, 0, 0]
            "#,
        )
        .unwrap();

        assert_eq!(config.particles.count, 1200);
        assert_eq!(config.particles.respawn_offset, -80.0);
        assert_eq!(config.particles.speed, 10..50);
        assert_eq!(config.background.top, [0, 0, 0]);
        assert_eq!(config.background.bottom, BackgroundSettings::default().bottom);
        assert_eq!(config.display, DisplaySettings::default());
    }

    #[test]
    fn test_ranges_in_toml() {
        let config = Config::from_toml_str(
            r#"
            [particles]
            speed = { start = 5, end = 15 }
            size_hundredths = { start = 1, end = 3 }
            "#,
        )
        .unwrap();
        assert_eq!(config.particles.speed, 5..15);
        assert_eq!(config.particles.size_hundredths, 1..3);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(Config::from_toml_str("[particles]\ncount = 0").is_err());
        assert!(Config::from_toml_str("[display]\ncell_width = 0.0").is_err());
        assert!(Config::from_toml_str("[display]\nframe_interval_ms = 0").is_err());
        assert!(Config::from_toml_str("[particles\ncount = 3").is_err());
    }

    #[test]
    fn test_save_and_load() {
        let path = temp_path("saved/config.toml");
        let mut config = Config::default();
        config.particles.count = 42;
        config.background.image = Some(PathBuf::from("/tmp/winter.png"));
        config.log_file = Some(PathBuf::from("/tmp/snowfall.log"));

        config.save_to(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);

        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_missing_file_is_default() {
        let path = temp_path("does/not/exist.toml");
        assert_eq!(Config::load_or_default(&path).unwrap(), Config::default());
    }
}
