//! LED strip trait
//!
//! A strip is a fixed-size buffer of cells. Cells are staged with
//! [`LedStrip::set`] and only reach the LEDs on [`LedStrip::commit`].

use core::fmt;

use crate::color::Color;

/// Highest global brightness a cell can carry (5 bits on APA102-class LEDs)
pub const MAX_BRIGHTNESS: u8 = 31;

/// Errors that can occur while driving a strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StripError {
    /// Cell index past the end of the strip
    IndexOutOfRange,
    /// Strip was closed and can no longer be written
    Closed,
    /// A data or clock line could not be driven
    Bus,
}

impl fmt::Display for StripError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StripError::IndexOutOfRange => f.write_str("LED index out of range"),
            StripError::Closed => f.write_str("strip is closed"),
            StripError::Bus => f.write_str("bus write failed"),
        }
    }
}

/// One staged cell: global brightness plus color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedOutput {
    /// Global brightness (0-31, clamped by the driver)
    pub brightness: u8,
    /// Cell color (clamped to 8 bits per channel by the driver)
    pub color: Color,
}

impl LedOutput {
    /// Create a staged cell
    pub const fn new(brightness: u8, color: Color) -> Self {
        Self { brightness, color }
    }

    /// A cell that is off
    pub const fn off() -> Self {
        Self::new(0, Color::BLACK)
    }
}

/// Trait for addressable LED strips
///
/// Implementations own the physical bus. The clock only ever rewrites every
/// cell and then commits once.
pub trait LedStrip {
    /// Number of cells on the strip
    fn len(&self) -> usize;

    /// Check if the strip has no cells
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stage a cell for the next commit
    fn set(&mut self, index: usize, output: LedOutput) -> Result<(), StripError>;

    /// Flush every staged cell to the LEDs
    fn commit(&mut self) -> Result<(), StripError>;

    /// Release the strip
    ///
    /// After closing, `set` and `commit` fail with [`StripError::Closed`].
    fn close(&mut self) -> Result<(), StripError>;
}
