//! Embassy async tasks
//!
//! Each task runs independently and communicates via signals.

pub mod clock;
pub mod demo;
pub mod tick;

pub use clock::clock_task;
pub use demo::{demo_task, DemoConfig};
pub use tick::tick_task;
