//! RGB colors for the LED ring
//!
//! Channels are plain intensities without an upper bound in the face logic.
//! Overlapping hands are added together, so a channel may exceed what the
//! LEDs can show; the strip driver clamps on output.

use core::ops::Add;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// RGB color with one intensity per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color {
    pub r: u16,
    pub g: u16,
    pub b: u16,
}

impl Color {
    /// All channels off
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// Create a color from channel intensities
    pub const fn new(r: u16, g: u16, b: u16) -> Self {
        Self { r, g, b }
    }

    /// Check if every channel is off
    pub const fn is_black(&self) -> bool {
        self.r == 0 && self.g == 0 && self.b == 0
    }

    /// Channels clamped to 8 bits, in `(r, g, b)` order
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        (clamp_u8(self.r), clamp_u8(self.g), clamp_u8(self.b))
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r.into(), g.into(), b.into())
    }
}

impl From<(u16, u16, u16)> for Color {
    fn from((r, g, b): (u16, u16, u16)) -> Self {
        Self::new(r, g, b)
    }
}

impl Add for Color {
    type Output = Color;

    fn add(self, rhs: Self) -> Self::Output {
        add_color(self, rhs)
    }
}

/// Blend two colors by adding them channel by channel
///
/// Saturates instead of wrapping so a blend never gets darker.
pub const fn add_color(a: Color, b: Color) -> Color {
    Color {
        r: a.r.saturating_add(b.r),
        g: a.g.saturating_add(b.g),
        b: a.b.saturating_add(b.b),
    }
}

fn clamp_u8(channel: u16) -> u8 {
    u8::try_from(channel).unwrap_or(u8::MAX)
}
