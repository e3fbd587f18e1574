use serde::{Deserialize, Deserializer};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::trajectory::Palette;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("utc_offset_hours must be within ±{MAX_UTC_OFFSET_HOURS}, got {0}")]
    UtcOffset(i64),
}

const MAX_UTC_OFFSET_HOURS: i64 = 24;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub playback: PlaybackConfig,
    pub map: MapConfig,
    pub style: StyleConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PlaybackConfig {
    #[serde(default = "default_interval", deserialize_with = "deserialize_duration")]
    pub interval: Duration,
    #[serde(default = "default_repeat")]
    pub repeat: bool,
    #[serde(default = "default_utc_offset_hours")]
    pub utc_offset_hours: i64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            interval: default_interval(),
            repeat: default_repeat(),
            utc_offset_hours: default_utc_offset_hours(),
        }
    }
}

impl PlaybackConfig {
    pub fn utc_offset(&self) -> Result<chrono::Duration, ConfigError> {
        if self.utc_offset_hours.abs() > MAX_UTC_OFFSET_HOURS {
            return Err(ConfigError::UtcOffset(self.utc_offset_hours));
        }
        chrono::Duration::try_hours(self.utc_offset_hours)
            .ok_or(ConfigError::UtcOffset(self.utc_offset_hours))
    }
}

fn default_interval() -> Duration {
    Duration::from_millis(250)
}

fn default_repeat() -> bool {
    true
}

fn default_utc_offset_hours() -> i64 {
    1
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MapConfig {
    /// Padding added around the track before requesting tiles, in metres.
    #[serde(default = "default_margin_m")]
    pub margin_m: f64,
    #[serde(default = "default_zoom")]
    pub zoom: u8,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            margin_m: default_margin_m(),
            zoom: default_zoom(),
        }
    }
}

fn default_margin_m() -> f64 {
    3500.0
}

fn default_zoom() -> u8 {
    10
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    pub palette: Palette,
}

pub fn parse_duration(s: &str) -> Result<Duration, humantime::DurationError> {
    humantime::parse_duration(s.trim())
}

fn deserialize_duration<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
    let s = String::deserialize(deserializer)?;
    parse_duration(&s).map_err(serde::de::Error::custom)
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    pub fn from_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(yaml)?;
        config.playback.utc_offset()?;
        Ok(config)
    }
}
