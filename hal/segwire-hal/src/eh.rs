//! `embedded-hal` pin adapter
//!
//! Lets any infallible `embedded-hal` 1.0 pin act as a bus line. For the
//! data line use a pin that can be read back while driven, such as an
//! open-drain output or a flex pin.

use core::convert::Infallible;

use embedded_hal::digital::{InputPin, OutputPin};

use crate::gpio::{InputLine, OutputLine};

/// Bus line backed by an `embedded-hal` pin
#[derive(Debug)]
pub struct EhLine<P> {
    pin: P,
}

impl<P> EhLine<P> {
    /// Wrap `pin`
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Give back the pin
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin<Error = Infallible>> OutputLine for EhLine<P> {
    fn set_high(&mut self) {
        self.pin.set_high().unwrap_or_else(|e| match e {});
    }

    fn set_low(&mut self) {
        self.pin.set_low().unwrap_or_else(|e| match e {});
    }
}

impl<P: InputPin<Error = Infallible>> InputLine for EhLine<P> {
    fn read_level(&mut self) -> bool {
        self.pin.is_high().unwrap_or_else(|e| match e {})
    }
}
