//! GPIO acquisition
//!
//! The ring hangs off three GPIO lines on the board's header: a power
//! enable line and the APA102 clock and data lines (SPI0 CLK and MOSI,
//! driven as plain GPIO).

use log::*;
use rppal::gpio::{Gpio, OutputPin};

use ringclock_core::config::PinConfig;
use ringclock_core::traits::LedStrip;
use ringclock_core::{ClockError, NLEDS};
use ringclock_drivers::{Apa102, PowerSwitch};

/// The clock's LED ring
pub type RingStrip = Apa102<OutputPin, OutputPin, NLEDS>;

/// The ring's power enable line
pub type RingPower = PowerSwitch<OutputPin>;

/// Acquired ring hardware, powered on
pub struct Hardware {
    pub strip: RingStrip,
    pub power: RingPower,
}

impl Hardware {
    /// Claim the GPIO lines, power the ring and set up the strip
    ///
    /// Fails with [`ClockError::HardwareUnavailable`] if any line cannot be
    /// claimed.
    pub fn acquire(pins: &PinConfig) -> Result<Self, ClockError> {
        let gpio = Gpio::new().map_err(|e| {
            error!("GPIO controller unavailable: {}", e);
            ClockError::HardwareUnavailable
        })?;

        let power = PowerSwitch::new_active_high(claim_output(&gpio, pins.power)?)?;
        let clock = claim_output(&gpio, pins.clock)?;
        let data = claim_output(&gpio, pins.data)?;
        let strip = Apa102::new(clock, data)?;

        let mut hardware = Self { strip, power };
        hardware.power.on()?;
        info!(
            "Ring powered via GPIO {} (clock GPIO {}, data GPIO {})",
            pins.power, pins.clock, pins.data
        );

        Ok(hardware)
    }

    /// Split into strip and power switch
    pub fn into_parts(self) -> (RingStrip, RingPower) {
        (self.strip, self.power)
    }
}

fn claim_output(gpio: &Gpio, pin: u8) -> Result<OutputPin, ClockError> {
    gpio.get(pin)
        .map(|pin| pin.into_output_low())
        .map_err(|e| {
            error!("GPIO {} unavailable: {}", pin, e);
            ClockError::HardwareUnavailable
        })
}

/// Blank the ring and cut its power
///
/// Power is cut even if blanking fails; the first error is returned.
pub fn shutdown<S, P>(strip: &mut S, power: &mut PowerSwitch<P>) -> Result<(), ClockError>
where
    S: LedStrip + ?Sized,
    P: embedded_hal::digital::OutputPin,
{
    let closed = strip.close();
    let powered_off = power.off();
    info!("Ring shut down");

    closed?;
    powered_off
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::convert::Infallible;
    use embedded_hal::digital::ErrorType;
    use ringclock_core::traits::{LedOutput, StripError};

    struct MockPin {
        high: bool,
    }

    impl ErrorType for MockPin {
        type Error = Infallible;
    }

    impl embedded_hal::digital::OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.high = false;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.high = true;
            Ok(())
        }
    }

    struct MockStrip {
        closed: bool,
        fail: bool,
    }

    impl LedStrip for MockStrip {
        fn len(&self) -> usize {
            NLEDS
        }

        fn set(&mut self, _index: usize, _output: LedOutput) -> Result<(), StripError> {
            Ok(())
        }

        fn commit(&mut self) -> Result<(), StripError> {
            Ok(())
        }

        fn close(&mut self) -> Result<(), StripError> {
            if self.fail {
                return Err(StripError::Bus);
            }
            self.closed = true;
            Ok(())
        }
    }

    #[test]
    fn test_shutdown_closes_and_powers_off() {
        let mut strip = MockStrip {
            closed: false,
            fail: false,
        };
        let mut power = PowerSwitch::new_active_high(MockPin { high: false }).unwrap();
        power.on().unwrap();

        assert_eq!(shutdown(&mut strip, &mut power), Ok(()));
        assert!(strip.closed);
        assert!(!power.is_on());
    }

    #[test]
    fn test_shutdown_cuts_power_when_close_fails() {
        let mut strip = MockStrip {
            closed: false,
            fail: true,
        };
        let mut power = PowerSwitch::new_active_high(MockPin { high: false }).unwrap();
        power.on().unwrap();

        assert_eq!(
            shutdown(&mut strip, &mut power),
            Err(ClockError::Strip(StripError::Bus))
        );
        assert!(!power.is_on());
        assert!(!power.release().high);
    }
}
