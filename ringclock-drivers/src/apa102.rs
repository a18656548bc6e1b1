//! APA102 LED strip driver
//!
//! Bit-bangs the two-wire APA102 protocol over GPIO lines. Data is sampled
//! on the rising clock edge, most significant bit first:
//!
//! ```text
//! ┌──────────────┬───────────────────────────────┬─────────────┐
//! │ START        │ LED × N                       │ END         │
//! │ 32 × 0 bits  │ 111bbbbb  BLUE  GREEN  RED    │ ≥ 32 × 1    │
//! └──────────────┴───────────────────────────────┴─────────────┘
//! ```
//!
//! The end frame has to supply at least N/2 extra clock edges so the last
//! LED latches its data.

use embedded_hal::digital::OutputPin;
use ringclock_core::traits::{LedOutput, LedStrip, StripError, MAX_BRIGHTNESS};

/// Marker bits at the top of each LED frame's first byte
const LED_FRAME_MARKER: u8 = 0b1110_0000;

/// Bit-banged APA102 strip of `N` LEDs
pub struct Apa102<CLK, DATA, const N: usize> {
    clock: CLK,
    data: DATA,
    cells: [LedOutput; N],
    closed: bool,
}

impl<CLK: OutputPin, DATA: OutputPin, const N: usize> Apa102<CLK, DATA, N> {
    /// Bytes of `0xFF` sent after the LED frames
    pub const END_FRAME_LEN: usize = if (N + 15) / 16 > 4 { (N + 15) / 16 } else { 4 };

    /// Create a strip on the given lines; both lines are driven low
    ///
    /// Nothing is sent until the first commit.
    pub fn new(clock: CLK, data: DATA) -> Result<Self, StripError> {
        let mut strip = Self {
            clock,
            data,
            cells: [LedOutput::off(); N],
            closed: false,
        };
        strip.clock.set_low().map_err(|_| StripError::Bus)?;
        strip.data.set_low().map_err(|_| StripError::Bus)?;
        Ok(strip)
    }

    /// Encode one staged cell as it goes on the wire
    ///
    /// Brightness clamps to 5 bits and channels to 8 bits.
    pub fn led_frame(output: LedOutput) -> [u8; 4] {
        let (r, g, b) = output.color.to_rgb8();
        let brightness = output.brightness.min(MAX_BRIGHTNESS);
        [LED_FRAME_MARKER | brightness, b, g, r]
    }

    /// Currently staged cells
    pub fn cells(&self) -> &[LedOutput; N] {
        &self.cells
    }

    /// Check if the strip was closed
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Give back the clock and data lines
    pub fn release(self) -> (CLK, DATA) {
        (self.clock, self.data)
    }

    fn write_byte(&mut self, byte: u8) -> Result<(), StripError> {
        for bit in (0..8).rev() {
            if byte & (1 << bit) != 0 {
                self.data.set_high().map_err(|_| StripError::Bus)?;
            } else {
                self.data.set_low().map_err(|_| StripError::Bus)?;
            }
            self.clock.set_high().map_err(|_| StripError::Bus)?;
            self.clock.set_low().map_err(|_| StripError::Bus)?;
        }
        Ok(())
    }

    fn send(&mut self) -> Result<(), StripError> {
        for _ in 0..4 {
            self.write_byte(0x00)?;
        }

        for index in 0..N {
            for byte in Self::led_frame(self.cells[index]) {
                self.write_byte(byte)?;
            }
        }

        for _ in 0..Self::END_FRAME_LEN {
            self.write_byte(0xFF)?;
        }

        self.data.set_low().map_err(|_| StripError::Bus)
    }
}

impl<CLK: OutputPin, DATA: OutputPin, const N: usize> LedStrip for Apa102<CLK, DATA, N> {
    fn len(&self) -> usize {
        N
    }

    fn set(&mut self, index: usize, output: LedOutput) -> Result<(), StripError> {
        if self.closed {
            return Err(StripError::Closed);
        }
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(StripError::IndexOutOfRange)?;
        *cell = output;
        Ok(())
    }

    fn commit(&mut self) -> Result<(), StripError> {
        if self.closed {
            return Err(StripError::Closed);
        }
        self.send()
    }

    fn close(&mut self) -> Result<(), StripError> {
        if self.closed {
            return Ok(());
        }
        self.cells = [LedOutput::off(); N];
        let result = self.send();
        self.closed = true;
        result
    }
}
