//! Wall clock and simulated time sources

use log::*;
use time::{OffsetDateTime, UtcOffset};

use ringclock_core::config::ClockConfig;
use ringclock_core::time::SimulatedClock;
use ringclock_core::traits::TimeSource;
use ringclock_core::{ClockError, TimeOfDay};

/// Local wall-clock time
///
/// The local UTC offset can only be looked up safely while the process has
/// a single thread, so it is resolved at startup. Later reads refresh it
/// when the lookup succeeds and keep the last known offset otherwise.
#[derive(Debug, Clone)]
pub struct SystemClock {
    offset: UtcOffset,
}

impl SystemClock {
    /// Resolve the local offset and create the clock
    ///
    /// Must run before any other thread is started.
    pub fn new() -> Result<Self, ClockError> {
        let offset = UtcOffset::current_local_offset().map_err(|e| {
            error!("Local time offset unavailable: {}", e);
            ClockError::TimeSourceFailure
        })?;
        Ok(Self::with_offset(offset))
    }

    /// Create a clock with a fixed UTC offset
    pub fn with_offset(offset: UtcOffset) -> Self {
        Self { offset }
    }

    /// Offset currently applied to UTC
    pub fn offset(&self) -> UtcOffset {
        self.offset
    }
}

impl TimeSource for SystemClock {
    fn now(&mut self) -> Result<TimeOfDay, ClockError> {
        if let Ok(offset) = UtcOffset::current_local_offset() {
            if offset != self.offset {
                info!("Local offset changed to {}", offset);
                self.offset = offset;
            }
        }

        let now = OffsetDateTime::now_utc().to_offset(self.offset);
        Ok(TimeOfDay::new(now.hour(), now.minute(), now.second()))
    }
}

/// Time source picked from the configuration
#[derive(Debug, Clone)]
pub enum ClockSource {
    /// Real local time
    System(SystemClock),
    /// Fast-forward from midnight, one second per tick
    Simulated(SimulatedClock),
}

impl ClockSource {
    /// Pick the time source for `config`
    ///
    /// Short tick periods fast-forward through a simulated day; anything
    /// longer follows the wall clock.
    pub fn for_config(config: &ClockConfig) -> Result<Self, ClockError> {
        if config.simulates_time() {
            info!("Simulating time, one second per tick");
            Ok(ClockSource::Simulated(SimulatedClock::new()))
        } else {
            Ok(ClockSource::System(SystemClock::new()?))
        }
    }
}

impl TimeSource for ClockSource {
    fn now(&mut self) -> Result<TimeOfDay, ClockError> {
        match self {
            ClockSource::System(clock) => clock.now(),
            ClockSource::Simulated(clock) => clock.now(),
        }
    }
}
