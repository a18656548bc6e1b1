//! Time of day
//!
//! The clock only cares about hour, minute and second. Dates and time
//! zones stay with whatever [`TimeSource`] produced the reading.

use crate::error::ClockError;
use crate::traits::TimeSource;

/// Hour (0-23), minute (0-59) and second (0-59)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimeOfDay {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
}

impl TimeOfDay {
    /// Midnight
    pub const MIDNIGHT: Self = Self::new(0, 0, 0);

    /// Create a time of day
    ///
    /// Values are not range checked; the face geometry reduces them modulo
    /// the ring anyway.
    pub const fn new(hour: u8, minute: u8, second: u8) -> Self {
        Self {
            hour,
            minute,
            second,
        }
    }

    /// Advance by one second, carrying into minutes and hours
    ///
    /// Wraps from 23:59:59 to 00:00:00.
    pub const fn next_second(self) -> Self {
        let second = (self.second + 1) % 60;
        let mut minute = self.minute;
        let mut hour = self.hour;

        if second == 0 {
            minute = (minute + 1) % 60;
            if minute == 0 {
                hour = (hour + 1) % 24;
            }
        }

        Self::new(hour, minute, second)
    }
}

/// Fast-forward clock for bench testing
///
/// Starts at midnight and moves one second forward on every read, so a
/// short tick interval sweeps through the whole day quickly.
#[derive(Debug, Clone, Default)]
pub struct SimulatedClock {
    current: TimeOfDay,
}

impl SimulatedClock {
    /// Create a simulated clock starting at midnight
    pub const fn new() -> Self {
        Self::starting_at(TimeOfDay::MIDNIGHT)
    }

    /// Create a simulated clock starting at `start`
    pub const fn starting_at(start: TimeOfDay) -> Self {
        Self { current: start }
    }

    /// Time that was last returned
    pub fn current(&self) -> TimeOfDay {
        self.current
    }
}

impl TimeSource for SimulatedClock {
    fn now(&mut self) -> Result<TimeOfDay, ClockError> {
        self.current = self.current.next_second();
        Ok(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_second_simple() {
        assert_eq!(
            TimeOfDay::new(3, 15, 20).next_second(),
            TimeOfDay::new(3, 15, 21)
        );
    }

    #[test]
    fn test_next_second_carries_minute() {
        assert_eq!(
            TimeOfDay::new(3, 15, 59).next_second(),
            TimeOfDay::new(3, 16, 0)
        );
    }

    #[test]
    fn test_next_second_carries_hour() {
        assert_eq!(
            TimeOfDay::new(3, 59, 59).next_second(),
            TimeOfDay::new(4, 0, 0)
        );
    }

    #[test]
    fn test_next_second_wraps_day() {
        assert_eq!(
            TimeOfDay::new(23, 59, 59).next_second(),
            TimeOfDay::MIDNIGHT
        );
    }

    #[test]
    fn test_simulated_clock_advances_per_read() {
        let mut clock = SimulatedClock::new();

        // First read is already one second past the start
        assert_eq!(clock.now(), Ok(TimeOfDay::new(0, 0, 1)));
        assert_eq!(clock.now(), Ok(TimeOfDay::new(0, 0, 2)));
        assert_eq!(clock.current(), TimeOfDay::new(0, 0, 2));
    }

    #[test]
    fn test_simulated_clock_full_day() {
        let mut clock = SimulatedClock::new();

        for _ in 0..(24 * 60 * 60 - 1) {
            clock.now().unwrap();
        }
        assert_eq!(clock.current(), TimeOfDay::new(23, 59, 59));
        assert_eq!(clock.now(), Ok(TimeOfDay::MIDNIGHT));
    }
}
