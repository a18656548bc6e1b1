//! Tick task for time-based updates
//!
//! Provides the periodic ticks that make the clock task redraw the face.
//! The first tick fires immediately so the face shows up at startup.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Ticker};
use log::*;

/// Signal to notify the clock task of a tick, carries the tick number
pub static TICK_SIGNAL: Signal<CriticalSectionRawMutex, u32> = Signal::new();

/// Tick task - sends a numbered tick every `interval`
#[embassy_executor::task]
pub async fn tick_task(interval: Duration) {
    info!("Tick task started, every {} ms", interval.as_millis());

    let mut ticker = Ticker::every(interval);
    let mut tick: u32 = 0;

    loop {
        TICK_SIGNAL.signal(tick);
        tick = tick.wrapping_add(1);

        ticker.next().await;
    }
}
