//! Hardware abstraction traits
//!
//! These traits define the interface between the clock face logic
//! and hardware-specific implementations.

pub mod strip;
pub mod time_source;

pub use strip::{LedOutput, LedStrip, StripError, MAX_BRIGHTNESS};
pub use time_source::TimeSource;
