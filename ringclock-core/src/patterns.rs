//! Demo patterns for hardware bring-up

use crate::color::Color;
use crate::face::{Face, NLEDS};

/// Colors repeated around the ring by [`rgb_chase`]
pub const CHASE_COLORS: [Color; 3] = [
    Color::new(255, 0, 0),
    Color::new(0, 255, 0),
    Color::new(0, 0, 225),
];

/// Red, green and blue repeated around the ring, moved one LED per frame
pub fn rgb_chase(frame: usize) -> Face {
    let mut face = [Color::BLACK; NLEDS];
    for (led, color) in CHASE_COLORS.iter().cycle().take(NLEDS).enumerate() {
        face[(led + frame) % NLEDS] = *color;
    }
    face
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_frame() {
        let face = rgb_chase(0);

        assert_eq!(face[0], CHASE_COLORS[0]);
        assert_eq!(face[1], CHASE_COLORS[1]);
        assert_eq!(face[2], CHASE_COLORS[2]);
        assert_eq!(face[3], CHASE_COLORS[0]);
        assert!(face.iter().all(|c| !c.is_black()));
    }

    #[test]
    fn test_moves_one_led_per_frame() {
        let first = rgb_chase(0);
        let next = rgb_chase(1);

        for led in 0..NLEDS {
            assert_eq!(next[(led + 1) % NLEDS], first[led]);
        }
    }

    #[test]
    fn test_repeats_every_three_frames() {
        assert_eq!(rgb_chase(0), rgb_chase(3));
        assert_eq!(rgb_chase(5), rgb_chase(101));
    }
}
