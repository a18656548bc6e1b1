//! Strip power switch
//!
//! The ring's supply is gated by a GPIO line (directly or via a load switch).
//! The line is driven low on creation so the LEDs stay dark until the
//! runtime is ready.

use embedded_hal::digital::OutputPin;
use ringclock_core::ClockError;

/// Power enable line for the LED ring
pub struct PowerSwitch<P> {
    pin: P,
    /// If true, power ON = pin LOW
    inverted: bool,
    on: bool,
}

impl<P: OutputPin> PowerSwitch<P> {
    /// Create a power switch, initially off
    ///
    /// # Arguments
    /// - `pin`: The enable line
    /// - `inverted`: If true, power is ON when the pin is LOW
    pub fn new(pin: P, inverted: bool) -> Result<Self, ClockError> {
        let mut switch = Self {
            pin,
            inverted,
            on: false,
        };
        switch.set_on(false)?;
        Ok(switch)
    }

    /// Create a power switch with an active-high enable line
    pub fn new_active_high(pin: P) -> Result<Self, ClockError> {
        Self::new(pin, false)
    }

    /// Power the ring
    pub fn on(&mut self) -> Result<(), ClockError> {
        self.set_on(true)
    }

    /// Cut power to the ring
    pub fn off(&mut self) -> Result<(), ClockError> {
        self.set_on(false)
    }

    /// Check if the ring is powered
    pub fn is_on(&self) -> bool {
        self.on
    }

    /// Give back the enable line
    pub fn release(self) -> P {
        self.pin
    }

    fn set_on(&mut self, on: bool) -> Result<(), ClockError> {
        let result = if on != self.inverted {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        result.map_err(|_| ClockError::HardwareUnavailable)?;
        self.on = on;
        Ok(())
    }
}
