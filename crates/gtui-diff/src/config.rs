//! Configuration for diff display and request scheduling
//!
//! Everything the staging view needs to present a diff is carried in an
//! explicit [`EngineConfig`] value. It can be loaded from TOML or built in
//! code; missing fields fall back to their defaults.

use crate::error::{EngineError, EngineResult};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Complete configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Width budget for diff rows and file paths
    pub display: DisplayConfig,
    /// Colours for each kind of diff row
    pub palette: DiffPalette,
    /// Debounce timings for diff requests
    pub schedule: ScheduleConfig,
}

/// Width budget used when formatting diffs for a panel
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Columns lost to panel padding
    pub padding: usize,
    /// Smallest usable width, applied after padding
    pub min_width: usize,
    /// Columns kept free at the end of every row
    pub reserve: usize,
    /// Marker appended to truncated rows
    pub ellipsis: String,
    /// Maximum width of a file path in the status list
    pub path_max: usize,
    /// Leading characters kept when a path is shortened
    pub path_prefix: usize,
    /// Trailing characters kept when a path is shortened
    pub path_suffix: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            padding: 2,
            min_width: 20,
            reserve: 5,
            ellipsis: "...".to_string(),
            path_max: 60,
            path_prefix: 30,
            path_suffix: 27,
        }
    }
}

impl DisplayConfig {
    /// Maximum characters of a diff row for a panel `width` columns wide
    pub fn row_width(&self, width: usize) -> usize {
        width
            .saturating_sub(self.padding)
            .max(self.min_width)
            .saturating_sub(self.reserve)
    }
}

/// Colours for diff rows
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DiffPalette {
    /// Added row foreground
    #[serde(with = "color_serde")]
    pub added: Color,
    /// Added row background
    #[serde(with = "color_serde")]
    pub added_bg: Color,
    /// Deleted row foreground
    #[serde(with = "color_serde")]
    pub deleted: Color,
    /// Deleted row background
    #[serde(with = "color_serde")]
    pub deleted_bg: Color,
    /// Unchanged row foreground
    #[serde(with = "color_serde")]
    pub context: Color,
    /// Placeholder messages ("No diff available", binary notice)
    #[serde(with = "color_serde")]
    pub notice: Color,
}

impl Default for DiffPalette {
    fn default() -> Self {
        DiffPalette {
            added: Color::Green,
            added_bg: Color::Rgb(0, 40, 0),
            deleted: Color::Red,
            deleted_bg: Color::Rgb(40, 0, 0),
            context: Color::White,
            notice: Color::DarkGray,
        }
    }
}

/// Timing policy for diff requests triggered by list navigation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ScheduleConfig {
    /// Milliseconds navigation must be idle before a diff starts
    pub nav_debounce_ms: u64,
    /// Minimum milliseconds between two diff computations
    pub min_interval_ms: u64,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        ScheduleConfig {
            nav_debounce_ms: 500,
            min_interval_ms: 100,
        }
    }
}

impl ScheduleConfig {
    /// Navigation debounce as a duration
    pub fn nav_debounce(&self) -> Duration {
        Duration::from_millis(self.nav_debounce_ms)
    }

    /// Minimum interval between diffs as a duration
    pub fn min_interval(&self) -> Duration {
        Duration::from_millis(self.min_interval_ms)
    }
}

impl EngineConfig {
    /// Parses a configuration from a TOML string
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML string is malformed or contains invalid values.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Serializes the configuration to a TOML string
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Loads a configuration file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> EngineResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml(&contents).map_err(|source| EngineError::Config {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded diff config from {:?}", path);
        Ok(config)
    }
}

/// Custom serde module for ratatui Color
mod color_serde {
    use ratatui::style::Color;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(color: &Color, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let s = match color {
            Color::Reset => "reset".to_string(),
            Color::Black => "black".to_string(),
            Color::Red => "red".to_string(),
            Color::Green => "green".to_string(),
            Color::Yellow => "yellow".to_string(),
            Color::Blue => "blue".to_string(),
            Color::Magenta => "magenta".to_string(),
            Color::Cyan => "cyan".to_string(),
            Color::Gray => "gray".to_string(),
            Color::DarkGray => "darkgray".to_string(),
            Color::LightRed => "lightred".to_string(),
            Color::LightGreen => "lightgreen".to_string(),
            Color::LightYellow => "lightyellow".to_string(),
            Color::LightBlue => "lightblue".to_string(),
            Color::LightMagenta => "lightmagenta".to_string(),
            Color::LightCyan => "lightcyan".to_string(),
            Color::White => "white".to_string(),
            Color::Rgb(r, g, b) => format!("#{:02x}{:02x}{:02x}", r, g, b),
            Color::Indexed(i) => format!("indexed:{}", i),
        };
        serializer.serialize_str(&s)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Color, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        parse_color(&s).map_err(serde::de::Error::custom)
    }

    pub(super) fn parse_color(s: &str) -> Result<Color, String> {
        let lower = s.to_lowercase();
        let named = match lower.as_str() {
            "reset" => Some(Color::Reset),
            "black" => Some(Color::Black),
            "red" => Some(Color::Red),
            "green" => Some(Color::Green),
            "yellow" => Some(Color::Yellow),
            "blue" => Some(Color::Blue),
            "magenta" => Some(Color::Magenta),
            "cyan" => Some(Color::Cyan),
            "gray" | "grey" => Some(Color::Gray),
            "darkgray" | "darkgrey" => Some(Color::DarkGray),
            "lightred" => Some(Color::LightRed),
            "lightgreen" => Some(Color::LightGreen),
            "lightyellow" => Some(Color::LightYellow),
            "lightblue" => Some(Color::LightBlue),
            "lightmagenta" => Some(Color::LightMagenta),
            "lightcyan" => Some(Color::LightCyan),
            "white" => Some(Color::White),
            _ => None,
        };
        if let Some(color) = named {
            return Ok(color);
        }

        if let Some(hex) = lower.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return Err(format!("invalid hex color: {}", s));
            }
            let channel = |range: std::ops::Range<usize>| {
                u8::from_str_radix(&hex[range], 16).map_err(|_| format!("invalid hex color: {}", s))
            };
            return Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?));
        }

        if let Some(idx) = lower.strip_prefix("indexed:") {
            return idx
                .parse::<u8>()
                .map(Color::Indexed)
                .map_err(|_| format!("invalid indexed color: {}", s));
        }

        Err(format!("unknown color: {}", s))
    }
}
