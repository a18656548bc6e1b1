//! Time source trait

use crate::error::ClockError;
use crate::time::TimeOfDay;

/// Trait for anything that can tell the time of day
///
/// Takes `&mut self` because simulated clocks advance on every read.
pub trait TimeSource {
    /// Read the current time of day
    ///
    /// Fails with [`ClockError::TimeSourceFailure`] if the clock cannot be read.
    fn now(&mut self) -> Result<TimeOfDay, ClockError>;
}
