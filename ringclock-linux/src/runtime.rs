//! One clock tick
//!
//! Ties a time source, a face renderer and a strip together. The scheduling
//! lives in the tick task; this only does the work of a single tick.

use ringclock_core::config::FaceStyle;
use ringclock_core::traits::{LedStrip, TimeSource};
use ringclock_core::{ClockError, FaceRenderer};

/// Everything one clock needs to update its face
pub struct ClockRuntime<S, T> {
    renderer: FaceRenderer,
    strip: S,
    clock: T,
}

impl<S: LedStrip, T: TimeSource> ClockRuntime<S, T> {
    /// Create a runtime; the ring is assumed dark
    pub fn new(style: FaceStyle, strip: S, clock: T) -> Self {
        Self {
            renderer: FaceRenderer::new(style),
            strip,
            clock,
        }
    }

    /// Read the time and show it
    ///
    /// Returns `Ok(true)` if the strip was committed.
    pub fn tick(&mut self) -> Result<bool, ClockError> {
        let time = self.clock.now()?;
        Ok(self.renderer.render(time, &mut self.strip)?)
    }

    /// The face renderer
    pub fn renderer(&self) -> &FaceRenderer {
        &self.renderer
    }

    /// The strip, for shutdown
    pub fn strip_mut(&mut self) -> &mut S {
        &mut self.strip
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ringclock_core::config::ClockConfig;
    use ringclock_core::time::SimulatedClock;
    use ringclock_core::traits::{LedOutput, StripError};
    use ringclock_core::{TimeOfDay, NLEDS};

    #[derive(Default)]
    struct CountingStrip {
        commits: usize,
    }

    impl LedStrip for CountingStrip {
        fn len(&self) -> usize {
            NLEDS
        }

        fn set(&mut self, index: usize, _output: LedOutput) -> Result<(), StripError> {
            if index < NLEDS {
                Ok(())
            } else {
                Err(StripError::IndexOutOfRange)
            }
        }

        fn commit(&mut self) -> Result<(), StripError> {
            self.commits += 1;
            Ok(())
        }

        fn close(&mut self) -> Result<(), StripError> {
            Ok(())
        }
    }

    struct StoppedClock;

    impl TimeSource for StoppedClock {
        fn now(&mut self) -> Result<TimeOfDay, ClockError> {
            Err(ClockError::TimeSourceFailure)
        }
    }

    #[test]
    fn test_simulated_minute_commits_on_face_changes_only() {
        let style = ClockConfig::default().style;
        let mut runtime = ClockRuntime::new(style, CountingStrip::default(), SimulatedClock::new());

        // 00:00:01 through 00:01:00 in tick mode: first write, then the
        // seconds never show
        let mut commits = 0;
        for _ in 0..60 {
            if runtime.tick().unwrap() {
                commits += 1;
            }
        }

        assert_eq!(commits, 1);
        assert_eq!(runtime.strip_mut().commits, 1);
        assert_eq!(runtime.renderer().commits(), 1);
    }

    #[test]
    fn test_simulated_hour_commits() {
        let style = ClockConfig::default().style;
        let mut runtime = ClockRuntime::new(style, CountingStrip::default(), SimulatedClock::new());

        for _ in 0..3600 {
            runtime.tick().unwrap();
        }

        // Changes at 00:00:01 (first), minute hand at 03, 08, ..., 58,
        // hour hand widens at 16 and moves at 45
        assert_eq!(runtime.strip_mut().commits, 1 + 12 + 2);
    }

    #[test]
    fn test_time_failure_propagates() {
        let style = ClockConfig::default().style;
        let mut runtime = ClockRuntime::new(style, CountingStrip::default(), StoppedClock);

        assert_eq!(runtime.tick(), Err(ClockError::TimeSourceFailure));
        assert_eq!(runtime.strip_mut().commits, 0);
    }
}
