//! Configuration loading
//!
//! Parses the embedded TOML document into a [`ClockConfig`]. Any problem is
//! fatal at startup; there is no fallback configuration.

use std::fmt;

use log::*;
use serde::Deserialize;

use ringclock_core::config::{
    ClockConfig, FaceStyle, Palette, PinConfig, DEFAULT_UPDATE_INTERVAL_MS,
};
use ringclock_core::traits::MAX_BRIGHTNESS;
use ringclock_core::{ClockError, Orientation};

/// Embedded configuration (compiled into the binary)
/// Edit clock.toml and rebuild to customize
pub const EMBEDDED_CONFIG: &str = include_str!("../../clock.toml");

/// Configuration loading errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Document is not valid TOML or has wrong types
    TomlParse(String),
    /// Orientation is not one of N, E, S, W
    InvalidOrientation(String),
    /// Brightness above the 5-bit maximum
    InvalidBrightness(u8),
    /// Tick period of zero
    InvalidInterval,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::TomlParse(msg) => write!(f, "TOML parse error: {}", msg),
            ConfigError::InvalidOrientation(value) => {
                write!(f, "orientation {:?} is not one of N, E, S, W", value)
            }
            ConfigError::InvalidBrightness(value) => {
                write!(f, "brightness {} exceeds {}", value, MAX_BRIGHTNESS)
            }
            ConfigError::InvalidInterval => f.write_str("update_interval_ms must be above zero"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::TomlParse(e.message().to_string())
    }
}

impl From<ConfigError> for ClockError {
    fn from(e: ConfigError) -> Self {
        match e {
            ConfigError::InvalidOrientation(_) => ClockError::InvalidOrientation,
            _ => ClockError::InvalidConfig,
        }
    }
}

/// On-disk layout of clock.toml
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ClockToml {
    #[serde(default = "default_update_interval_ms")]
    update_interval_ms: u32,
    #[serde(default)]
    seconds_hand: bool,
    orientation: String,
    brightness: u8,
    #[serde(default)]
    colors: Palette,
    #[serde(default)]
    pins: PinConfig,
}

fn default_update_interval_ms() -> u32 {
    DEFAULT_UPDATE_INTERVAL_MS
}

/// Parse a TOML document into a clock configuration
pub fn parse_config(input: &str) -> Result<ClockConfig, ConfigError> {
    let raw: ClockToml = toml::from_str(input)?;

    let orientation: Orientation = raw
        .orientation
        .parse()
        .map_err(|_| ConfigError::InvalidOrientation(raw.orientation.clone()))?;

    if raw.brightness > MAX_BRIGHTNESS {
        return Err(ConfigError::InvalidBrightness(raw.brightness));
    }

    if raw.update_interval_ms == 0 {
        return Err(ConfigError::InvalidInterval);
    }

    Ok(ClockConfig {
        update_interval_ms: raw.update_interval_ms,
        style: FaceStyle {
            orientation,
            palette: raw.colors,
            seconds: raw.seconds_hand.into(),
            brightness: raw.brightness,
        },
        pins: raw.pins,
    })
}

/// Parse the configuration compiled into the binary
pub fn load_embedded() -> Result<ClockConfig, ConfigError> {
    let config = parse_config(EMBEDDED_CONFIG)?;
    info!(
        "Config: orientation={}, seconds={:?}, brightness={}, interval={}ms",
        config.style.orientation,
        config.style.seconds,
        config.style.brightness,
        config.update_interval_ms
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ringclock_core::config::SecondsDisplay;
    use ringclock_core::Color;

    #[test]
    fn test_embedded_config_matches_defaults() {
        assert_eq!(load_embedded(), Ok(ClockConfig::default()));
    }

    #[test]
    fn test_minimal_config() {
        let config = parse_config("orientation = \"S\"\nbrightness = 31\n").unwrap();

        assert_eq!(config.style.orientation, Orientation::South);
        assert_eq!(config.style.brightness, 31);
        assert_eq!(config.style.seconds, SecondsDisplay::Ticks);
        assert_eq!(config.style.palette, Palette::default());
        assert_eq!(config.pins, PinConfig::default());
        assert_eq!(config.update_interval_ms, DEFAULT_UPDATE_INTERVAL_MS);
    }

    #[test]
    fn test_full_config() {
        let input = r#"
update_interval_ms = 1000
seconds_hand = true
orientation = "W"
brightness = 4

[colors]
hour = [10, 0, 0]
minute = [0, 10, 0]
second = [0, 0, 10]

[pins]
power = 6
clock = 21
data = 20
"#;
        let config = parse_config(input).unwrap();

        assert_eq!(config.update_interval_ms, 1000);
        assert!(config.simulates_time());
        assert_eq!(config.style.seconds, SecondsDisplay::Hand);
        assert_eq!(config.style.orientation, Orientation::West);
        assert_eq!(config.style.palette.hour, Color::new(10, 0, 0));
        assert_eq!(config.style.palette.second, Color::new(0, 0, 10));
        assert_eq!(config.pins.clock, 21);
    }

    #[test]
    fn test_invalid_orientation() {
        let err = parse_config("orientation = \"NE\"\nbrightness = 1\n").unwrap_err();

        assert_eq!(err, ConfigError::InvalidOrientation("NE".to_string()));
        assert_eq!(ClockError::from(err), ClockError::InvalidOrientation);
    }

    #[test]
    fn test_invalid_brightness() {
        let err = parse_config("orientation = \"N\"\nbrightness = 32\n").unwrap_err();

        assert_eq!(err, ConfigError::InvalidBrightness(32));
        assert_eq!(ClockError::from(err), ClockError::InvalidConfig);
    }

    #[test]
    fn test_zero_interval() {
        let err =
            parse_config("update_interval_ms = 0\norientation = \"N\"\nbrightness = 1\n").unwrap_err();
        assert_eq!(err, ConfigError::InvalidInterval);
    }

    #[test]
    fn test_missing_orientation() {
        let err = parse_config("brightness = 1\n").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_unknown_key() {
        let err = parse_config("orientation = \"N\"\nbrightness = 1\nnleds = 24\n").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }
}
