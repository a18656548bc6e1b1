//! Configuration type definitions
//!
//! These types describe how the face looks and which lines drive the ring.
//! Values are fixed for the lifetime of the process.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::face::Orientation;
use crate::traits::MAX_BRIGHTNESS;

/// Default tick period in milliseconds
pub const DEFAULT_UPDATE_INTERVAL_MS: u32 = 5_000;

/// Tick periods at or below this run the simulated fast-forward clock
pub const SIMULATION_THRESHOLD_MS: u32 = 1_000;

/// Hand colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Palette {
    /// Hour hand
    pub hour: Color,
    /// Minute hand
    pub minute: Color,
    /// Seconds hand, or quarter tick marks when the hand is off
    pub second: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            hour: Color::new(2, 0, 2),
            minute: Color::new(0, 0, 20),
            second: Color::new(2, 2, 2),
        }
    }
}

/// What the second color is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SecondsDisplay {
    /// Static quarter-hour tick marks
    #[default]
    Ticks,
    /// Four LED wide sweeping seconds hand
    Hand,
}

impl From<bool> for SecondsDisplay {
    fn from(seconds_hand: bool) -> Self {
        if seconds_hand {
            SecondsDisplay::Hand
        } else {
            SecondsDisplay::Ticks
        }
    }
}

/// Everything the renderer needs to draw a face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaceStyle {
    pub orientation: Orientation,
    pub palette: Palette,
    pub seconds: SecondsDisplay,
    /// Global LED brightness (0-31)
    pub brightness: u8,
}

/// GPIO lines used by the ring (BCM numbering)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PinConfig {
    /// Strip power enable, active high
    pub power: u8,
    /// APA102 clock line
    pub clock: u8,
    /// APA102 data line
    pub data: u8,
}

impl Default for PinConfig {
    fn default() -> Self {
        // SPI0 CLK and MOSI, power switch on GPIO 5
        Self {
            power: 5,
            clock: 11,
            data: 10,
        }
    }
}

/// Complete clock configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ClockConfig {
    /// Tick period in milliseconds
    pub update_interval_ms: u32,
    /// Face appearance
    pub style: FaceStyle,
    /// Hardware lines
    pub pins: PinConfig,
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            update_interval_ms: DEFAULT_UPDATE_INTERVAL_MS,
            style: FaceStyle {
                orientation: Orientation::East,
                palette: Palette::default(),
                seconds: SecondsDisplay::Ticks,
                brightness: 1,
            },
            pins: PinConfig::default(),
        }
    }
}

impl ClockConfig {
    /// Check if ticks are fast enough to use the simulated clock
    ///
    /// Real time only moves the face every few seconds, so short intervals
    /// fast-forward through the day instead.
    pub fn simulates_time(&self) -> bool {
        self.update_interval_ms <= SIMULATION_THRESHOLD_MS
    }

    /// Check if the brightness fits the LED's 5-bit field
    pub fn brightness_valid(&self) -> bool {
        self.style.brightness <= MAX_BRIGHTNESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClockConfig::default();

        assert_eq!(config.update_interval_ms, 5_000);
        assert_eq!(config.style.orientation, Orientation::East);
        assert_eq!(config.style.seconds, SecondsDisplay::Ticks);
        assert_eq!(config.style.brightness, 1);
        assert_eq!(config.style.palette.hour, Color::new(2, 0, 2));
        assert_eq!(config.pins.power, 5);
        assert!(!config.simulates_time());
        assert!(config.brightness_valid());
    }

    #[test]
    fn test_simulation_threshold() {
        let mut config = ClockConfig::default();

        config.update_interval_ms = 1_000;
        assert!(config.simulates_time());

        config.update_interval_ms = 1_001;
        assert!(!config.simulates_time());
    }

    #[test]
    fn test_seconds_display_from_bool() {
        assert_eq!(SecondsDisplay::from(true), SecondsDisplay::Hand);
        assert_eq!(SecondsDisplay::from(false), SecondsDisplay::Ticks);
    }
}
