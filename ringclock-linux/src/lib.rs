//! Ring clock runtime for Linux
//!
//! Shared pieces of the `ringclock` and `led-test` binaries: embedded
//! configuration, GPIO acquisition, wall-clock access and the embassy tasks
//! that drive the face.

pub mod clock_source;
pub mod config;
pub mod hardware;
pub mod runtime;
pub mod tasks;

use env_logger::Env;

/// Set up `env_logger`, defaulting to `info` unless `RUST_LOG` says otherwise
pub fn init_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}
