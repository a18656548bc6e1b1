//! Clock task
//!
//! Redraws the face on every tick. Any error stops the clock: the ring is
//! blanked, powered off, and the process exits non-zero.

use std::process;

use log::*;

use crate::clock_source::ClockSource;
use crate::hardware::{shutdown, RingPower, RingStrip};
use crate::runtime::ClockRuntime;

use super::tick::TICK_SIGNAL;

/// The runtime the clock task drives
pub type RingClock = ClockRuntime<RingStrip, ClockSource>;

/// Clock task - renders the time on each tick until something fails
#[embassy_executor::task]
pub async fn clock_task(mut clock: RingClock, mut power: RingPower) {
    info!("Clock task started");

    loop {
        let tick = TICK_SIGNAL.wait().await;

        match clock.tick() {
            Ok(true) => trace!("Tick {}: face updated", tick),
            Ok(false) => {}
            Err(e) => {
                error!("Clock stopped on tick {}: {}", tick, e);
                if let Err(e) = shutdown(clock.strip_mut(), &mut power) {
                    error!("Shutdown incomplete: {}", e);
                }
                process::exit(1);
            }
        }
    }
}
