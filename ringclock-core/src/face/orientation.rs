//! Ring mounting orientation
//!
//! LED 0 sits wherever the ring's label points. The orientation names the
//! direction of the label and rotates logical twelve o'clock onto the
//! physical LED at the top.

use core::fmt;
use core::str::FromStr;

use crate::error::ClockError;

use super::geometry::NLEDS;

/// Direction the ring's label (LED 0) points when mounted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Orientation {
    /// Label at the top
    #[default]
    North,
    /// Label on the right
    East,
    /// Label at the bottom
    South,
    /// Label on the left
    West,
}

impl Orientation {
    /// All orientations, clockwise from North
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::East,
        Orientation::South,
        Orientation::West,
    ];

    /// LEDs to add to a logical index to reach the physical LED
    pub const fn offset(self) -> usize {
        match self {
            Orientation::North => 0,
            Orientation::East => 9,
            Orientation::South => 6,
            Orientation::West => 3,
        }
    }

    /// Map a logical ring index to the physical LED
    pub const fn rotate(self, index: usize) -> usize {
        (index + self.offset()) % NLEDS
    }

    /// Map a physical LED back to its logical ring index
    pub const fn unrotate(self, index: usize) -> usize {
        (index + NLEDS - self.offset()) % NLEDS
    }

    /// Single-letter configuration name
    pub const fn as_str(self) -> &'static str {
        match self {
            Orientation::North => "N",
            Orientation::East => "E",
            Orientation::South => "S",
            Orientation::West => "W",
        }
    }
}

impl FromStr for Orientation {
    type Err = ClockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "N" => Ok(Orientation::North),
            "E" => Ok(Orientation::East),
            "S" => Ok(Orientation::South),
            "W" => Ok(Orientation::West),
            _ => Err(ClockError::InvalidOrientation),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
