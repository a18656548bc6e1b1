//! LED test task
//!
//! Runs a red, green and blue chase around the ring to check the wiring,
//! then shuts the ring down and ends the process.

use std::process;

use embassy_time::{Duration, Timer};
use log::*;

use ringclock_core::patterns::rgb_chase;
use ringclock_core::traits::{LedOutput, LedStrip};
use ringclock_core::ClockError;

use crate::hardware::{shutdown, RingPower, RingStrip};

/// Chase settings
#[derive(Debug, Clone, Copy)]
pub struct DemoConfig {
    /// Frames shown before shutting down
    pub frames: usize,
    /// Delay between frames
    pub frame_interval: Duration,
    /// Global LED brightness (0-31)
    pub brightness: u8,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            frames: 100,
            frame_interval: Duration::from_millis(100),
            brightness: 1,
        }
    }
}

/// Stage and commit one chase frame
pub fn show_frame<S: LedStrip + ?Sized>(
    strip: &mut S,
    frame: usize,
    brightness: u8,
) -> Result<(), ClockError> {
    for (index, color) in rgb_chase(frame).iter().enumerate() {
        strip.set(index, LedOutput::new(brightness, *color))?;
    }
    strip.commit()?;
    Ok(())
}

/// Demo task - shows `config.frames` frames, then powers down and exits
#[embassy_executor::task]
pub async fn demo_task(mut strip: RingStrip, mut power: RingPower, config: DemoConfig) {
    info!("LED test: {} frames", config.frames);

    let mut code = 0;
    for frame in 0..config.frames {
        if let Err(e) = show_frame(&mut strip, frame, config.brightness) {
            error!("LED test failed on frame {}: {}", frame, e);
            code = 1;
            break;
        }
        Timer::after(config.frame_interval).await;
    }

    if let Err(e) = shutdown(&mut strip, &mut power) {
        error!("Shutdown incomplete: {}", e);
        code = 1;
    }

    info!("LED test done");
    process::exit(code);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ringclock_core::patterns::CHASE_COLORS;
    use ringclock_core::traits::StripError;
    use ringclock_core::NLEDS;

    struct RecordingStrip {
        cells: [LedOutput; NLEDS],
        commits: usize,
    }

    impl LedStrip for RecordingStrip {
        fn len(&self) -> usize {
            NLEDS
        }

        fn set(&mut self, index: usize, output: LedOutput) -> Result<(), StripError> {
            let cell = self.cells.get_mut(index).ok_or(StripError::IndexOutOfRange)?;
            *cell = output;
            Ok(())
        }

        fn commit(&mut self) -> Result<(), StripError> {
            self.commits += 1;
            Ok(())
        }

        fn close(&mut self) -> Result<(), StripError> {
            Ok(())
        }
    }

    #[test]
    fn test_show_frame() {
        let mut strip = RecordingStrip {
            cells: [LedOutput::off(); NLEDS],
            commits: 0,
        };

        show_frame(&mut strip, 1, 1).unwrap();

        assert_eq!(strip.commits, 1);
        assert_eq!(strip.cells[1], LedOutput::new(1, CHASE_COLORS[0]));
        assert_eq!(strip.cells[0], LedOutput::new(1, CHASE_COLORS[2]));
    }

    #[test]
    fn test_default_demo_config() {
        let config = DemoConfig::default();

        assert_eq!(config.frames, 100);
        assert_eq!(config.frame_interval, Duration::from_millis(100));
        assert_eq!(config.brightness, 1);
    }
}
