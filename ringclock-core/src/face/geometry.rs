//! Ring geometry
//!
//! Pure mapping from a time of day to a colored face. Each LED covers five
//! minutes (or five seconds), and the hands move between LEDs a little
//! before the reading strictly says so:
//!
//! - the hour hand steps to the next LED for the last quarter of the hour
//!   and spans two LEDs during the middle half
//! - the minute hand steps to the next LED once more than two minutes into
//!   its five minute bucket
//!
//! Overlapping hands add their colors so neither hides the other.

use heapless::Vec;

use crate::color::{add_color, Color};
use crate::config::{Palette, SecondsDisplay};
use crate::time::TimeOfDay;

use super::orientation::Orientation;

/// Number of LEDs on the ring
pub const NLEDS: usize = 12;

/// Minutes (and seconds) covered by one LED
pub const MINUTES_PER_LED: u8 = (60 / NLEDS) as u8;

/// LEDs lit by the sweeping seconds hand
pub const SECONDS_HAND_WIDTH: usize = 4;

/// Fixed quarter-hour tick positions
///
/// These are physical LED positions and do not follow the orientation,
/// unlike the hands. Kept as-is until the mounting intent is clarified.
pub const QUARTER_TICKS: [usize; 4] = [0, 3, 6, 9];

/// One color per LED, in commit order
pub type Face = [Color; NLEDS];

/// Wrap a possibly negative position onto the ring
fn ring(index: isize) -> usize {
    index.rem_euclid(NLEDS as isize) as usize
}

/// LED the hour points at, before progression
pub fn hour_index(hour: u8, orientation: Orientation) -> usize {
    orientation.rotate(usize::from(hour) % NLEDS)
}

/// LED covering the minute's five minute bucket, before progression
pub fn minute_index(minute: u8, orientation: Orientation) -> usize {
    orientation.rotate(usize::from((minute % 60) / MINUTES_PER_LED))
}

/// LED covering the second's five second bucket
pub fn second_index(second: u8, orientation: Orientation) -> usize {
    orientation.rotate(usize::from((second % 60) / MINUTES_PER_LED))
}

/// LEDs lit by the seconds hand centred on `second`
///
/// One LED behind, since the bucket division rounds down, and two ahead.
pub fn seconds_hand_cells(second: usize) -> Vec<usize, SECONDS_HAND_WIDTH> {
    let second = second as isize;
    (-1..=2).map(|delta| ring(second + delta)).collect()
}

/// Physical LED of every hand after progression rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HandPositions {
    pub hour: usize,
    /// Hour hand also covers the following LED
    pub hour_wide: bool,
    pub minute: usize,
    pub second: usize,
}

impl HandPositions {
    /// Place every hand for `time` on a ring mounted at `orientation`
    pub fn compute(time: TimeOfDay, orientation: Orientation) -> Self {
        let mut hour = hour_index(time.hour, orientation);
        if time.minute >= 45 {
            hour = (hour + 1) % NLEDS;
        }

        let mut minute = minute_index(time.minute, orientation);
        if time.minute % MINUTES_PER_LED > 2 {
            minute = (minute + 1) % NLEDS;
        }

        Self {
            hour,
            hour_wide: time.minute > 15 && time.minute < 45,
            minute,
            second: second_index(time.second, orientation),
        }
    }
}

fn blend(face: &mut Face, index: usize, color: Color) {
    face[index] = add_color(face[index], color);
}

/// Build the face for `time`
pub fn compute_face(
    time: TimeOfDay,
    orientation: Orientation,
    palette: &Palette,
    seconds: SecondsDisplay,
) -> Face {
    let hands = HandPositions::compute(time, orientation);
    let mut face = [Color::BLACK; NLEDS];

    blend(&mut face, hands.hour, palette.hour);
    blend(&mut face, hands.minute, palette.minute);

    if hands.hour_wide {
        blend(&mut face, (hands.hour + 1) % NLEDS, palette.hour);
    }

    match seconds {
        SecondsDisplay::Hand => {
            for cell in seconds_hand_cells(hands.second) {
                blend(&mut face, cell, palette.second);
            }
        }
        SecondsDisplay::Ticks => {
            for tick in QUARTER_TICKS {
                // Ticks only fill empty cells and never blend
                if face[tick].is_black() {
                    face[tick] = palette.second;
                }
            }
        }
    }

    face
}
