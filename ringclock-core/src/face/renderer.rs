//! Face renderer
//!
//! Remembers the last face that reached the LEDs and only talks to the
//! strip when the new face differs. Most ticks change nothing, so most
//! ticks cost no bus traffic.

use crate::config::FaceStyle;
use crate::logging::{debug, trace};
use crate::time::TimeOfDay;
use crate::traits::{LedOutput, LedStrip, StripError};

use super::geometry::{compute_face, Face, NLEDS};
use crate::color::Color;

/// Stateful renderer for one ring
pub struct FaceRenderer {
    style: FaceStyle,
    /// Last face committed to the strip
    current: Face,
    commits: u32,
}

impl FaceRenderer {
    /// Create a renderer; the ring is assumed dark
    pub const fn new(style: FaceStyle) -> Self {
        Self {
            style,
            current: [Color::BLACK; NLEDS],
            commits: 0,
        }
    }

    /// Face style in use
    pub fn style(&self) -> &FaceStyle {
        &self.style
    }

    /// Last face committed to the strip
    pub fn current_face(&self) -> &Face {
        &self.current
    }

    /// Number of commits issued so far
    pub fn commits(&self) -> u32 {
        self.commits
    }

    /// Face that `time` would show, without touching any hardware
    pub fn face_at(&self, time: TimeOfDay) -> Face {
        compute_face(
            time,
            self.style.orientation,
            &self.style.palette,
            self.style.seconds,
        )
    }

    /// Show `time` on `strip`
    ///
    /// Rewrites every cell and commits once when the face changed. Returns
    /// `Ok(true)` if the strip was committed. On error the remembered face
    /// is left alone, so the next call writes again.
    pub fn render<S: LedStrip + ?Sized>(
        &mut self,
        time: TimeOfDay,
        strip: &mut S,
    ) -> Result<bool, StripError> {
        let target = self.face_at(time);

        if target == self.current {
            trace!(
                "Face unchanged at {}:{}:{}",
                time.hour,
                time.minute,
                time.second
            );
            return Ok(false);
        }

        for (index, color) in target.iter().enumerate() {
            strip.set(index, LedOutput::new(self.style.brightness, *color))?;
        }
        strip.commit()?;

        self.current = target;
        self.commits = self.commits.wrapping_add(1);
        debug!(
            "Face committed at {}:{}:{}",
            time.hour,
            time.minute,
            time.second
        );

        Ok(true)
    }
}
