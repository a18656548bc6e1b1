//! Clock error types
//!
//! Every error here is fatal: the runtime logs it, releases the hardware
//! and exits. Nothing is retried.

use core::fmt;

use crate::traits::StripError;

/// Errors that stop the clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ClockError {
    /// GPIO lines or the LED strip could not be acquired
    HardwareUnavailable,
    /// Configured orientation is not one of N, E, S, W
    InvalidOrientation,
    /// Configuration could not be parsed or holds an out-of-range value
    InvalidConfig,
    /// Wall clock could not be read
    TimeSourceFailure,
    /// Writing to the LED strip failed
    Strip(StripError),
}

impl From<StripError> for ClockError {
    fn from(e: StripError) -> Self {
        ClockError::Strip(e)
    }
}

impl fmt::Display for ClockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClockError::HardwareUnavailable => f.write_str("LED hardware unavailable"),
            ClockError::InvalidOrientation => {
                f.write_str("invalid orientation, expected one of N, E, S, W")
            }
            ClockError::InvalidConfig => f.write_str("invalid clock configuration"),
            ClockError::TimeSourceFailure => f.write_str("time of day could not be read"),
            ClockError::Strip(e) => write!(f, "LED strip error: {}", e),
        }
    }
}
