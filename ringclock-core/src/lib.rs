//! Board-agnostic core logic for the LED ring clock
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Color arithmetic for compositing hands
//! - Ring geometry (time + orientation to LED indices)
//! - Face renderer with change detection
//! - Hardware abstraction traits (LED strip, time source)
//! - Configuration type definitions
//! - Demo patterns for hardware bring-up

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod color;
pub mod config;
pub mod error;
pub mod face;
pub mod logging;
pub mod patterns;
pub mod time;
pub mod traits;

pub use color::{add_color, Color};
pub use error::ClockError;
pub use face::{Face, FaceRenderer, Orientation, NLEDS};
pub use time::TimeOfDay;
