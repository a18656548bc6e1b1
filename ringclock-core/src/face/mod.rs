//! Clock face
//!
//! Maps a time of day onto the LED ring and pushes changed faces to a strip.

pub mod geometry;
pub mod orientation;
pub mod renderer;

pub use geometry::{
    compute_face, hour_index, minute_index, second_index, seconds_hand_cells, Face,
    HandPositions, MINUTES_PER_LED, NLEDS, QUARTER_TICKS, SECONDS_HAND_WIDTH,
};
pub use orientation::Orientation;
pub use renderer::FaceRenderer;
