//! Ringclock - LED ring wall clock
//!
//! Shows the local time on a ring of twelve APA102 LEDs wired to a Linux
//! board's GPIO header. Configuration is compiled in from clock.toml.
//!
//! Startup runs on the main thread before the executor exists: the local
//! UTC offset can only be read while the process is single-threaded.

use std::process;

use embassy_executor::Executor;
use embassy_time::Duration;
use log::*;
use static_cell::StaticCell;

use ringclock_core::ClockError;
use ringclock_linux::clock_source::ClockSource;
use ringclock_linux::config::load_embedded;
use ringclock_linux::hardware::{Hardware, RingPower};
use ringclock_linux::init_logging;
use ringclock_linux::tasks::{self, clock::RingClock};

static EXECUTOR: StaticCell<Executor> = StaticCell::new();

/// Load config, claim hardware and build the clock
fn setup() -> Result<(RingClock, RingPower, Duration), ClockError> {
    let config = load_embedded().map_err(|e| {
        error!("Failed to load embedded config: {}", e);
        ClockError::from(e)
    })?;

    // Resolve the time source before the executor starts any threads
    let clock_source = ClockSource::for_config(&config)?;
    let (strip, power) = Hardware::acquire(&config.pins)?.into_parts();

    let clock = RingClock::new(config.style, strip, clock_source);
    let interval = Duration::from_millis(u64::from(config.update_interval_ms));

    Ok((clock, power, interval))
}

fn main() {
    init_logging();
    info!("Ringclock starting...");

    let (clock, power, interval) = match setup() {
        Ok(parts) => parts,
        Err(e) => {
            error!("Startup failed: {}", e);
            process::exit(1);
        }
    };

    let executor = EXECUTOR.init(Executor::new());
    executor.run(|spawner| {
        spawner.must_spawn(tasks::tick_task(interval));
        spawner.must_spawn(tasks::clock_task(clock, power));
        info!("All tasks spawned, clock running");
    })
}
