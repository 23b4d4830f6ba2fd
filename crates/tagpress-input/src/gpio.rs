//! Raspberry Pi GPIO backend.

#[cfg(feature = "gpio")]
mod backend {
    use rppal::gpio::{Gpio, InputPin};

    use crate::error::HardwareConfigError;
    use crate::line::{InputLine, Level, Pull};

    /// A BCM-numbered GPIO pin configured as an input.
    ///
    /// The pin is reset to its previous mode when this value is dropped.
    #[derive(Debug)]
    pub struct GpioLine {
        pin: InputPin,
    }

    impl GpioLine {
        /// Configure `pin` as an input with the given bias.
        pub fn acquire(pin: u8, pull: Pull) -> Result<Self, HardwareConfigError> {
            let gpio = Gpio::new().map_err(|e| HardwareConfigError::Controller {
                source: Box::new(e),
            })?;
            let raw = gpio.get(pin).map_err(|e| HardwareConfigError::Pin {
                pin,
                source: Box::new(e),
            })?;
            let mut input = match pull {
                Pull::Up => raw.into_input_pullup(),
                Pull::Down => raw.into_input_pulldown(),
                Pull::Off => raw.into_input(),
            };
            input.set_reset_on_drop(true);
            tracing::info!(pin, ?pull, "configured GPIO input");
            Ok(Self { pin: input })
        }

        pub fn pin(&self) -> u8 {
            self.pin.pin()
        }
    }

    impl InputLine for GpioLine {
        fn read(&mut self) -> Level {
            if self.pin.is_high() {
                Level::High
            } else {
                Level::Low
            }
        }
    }

    impl Drop for GpioLine {
        fn drop(&mut self) {
            tracing::info!(pin = self.pin.pin(), "released GPIO input");
        }
    }
}

#[cfg(not(feature = "gpio"))]
mod backend {
    use crate::error::HardwareConfigError;
    use crate::line::{InputLine, Level, Pull};

    /// Placeholder for builds without GPIO support; never constructible.
    #[derive(Debug)]
    pub struct GpioLine {
        pin: u8,
    }

    impl GpioLine {
        pub fn acquire(pin: u8, _pull: Pull) -> Result<Self, HardwareConfigError> {
            Err(HardwareConfigError::Unsupported { pin })
        }

        pub fn pin(&self) -> u8 {
            self.pin
        }
    }

    impl InputLine for GpioLine {
        fn read(&mut self) -> Level {
            Level::High
        }
    }
}

pub use backend::GpioLine;
