//! Port-level line handles
//!
//! Many MCUs group up to 16 pins into a port with an atomic set/reset
//! register (the low half sets bits, the high half clears them) and an
//! input data register. A [`PortLine`] binds one such port to a single
//! pin mask so it can be used as a bus line.

use crate::gpio::{InputLine, OutputLine};

/// Number of pins on one port
pub const PINS_PER_PORT: u8 = 16;

/// Port register block
///
/// Implementations write the set/reset register and read the input data
/// register of one GPIO port. Methods take `&self` because register blocks
/// are shared by every pin on the port.
pub trait GpioPort {
    /// Write the set/reset register
    ///
    /// Bits 0-15 drive the matching pins high, bits 16-31 drive them low.
    fn set_reset(&self, bits: u32);

    /// Read the input data register
    fn input(&self) -> u16;
}

impl<P: GpioPort + ?Sized> GpioPort for &P {
    fn set_reset(&self, bits: u32) {
        (**self).set_reset(bits);
    }

    fn input(&self) -> u16 {
        (**self).input()
    }
}

/// One pin of a [`GpioPort`], addressed by a single-bit mask
#[derive(Debug)]
pub struct PortLine<P> {
    port: P,
    mask: u16,
}

impl<P: GpioPort> PortLine<P> {
    /// Bind pin `pin` (0-15) of `port`
    ///
    /// Returns `None` if the pin number is out of range.
    pub fn new(port: P, pin: u8) -> Option<Self> {
        if pin >= PINS_PER_PORT {
            return None;
        }
        Some(Self {
            port,
            mask: 1 << pin,
        })
    }

    /// Bind the pin selected by `mask`
    ///
    /// Returns `None` unless exactly one bit is set.
    pub fn from_mask(port: P, mask: u16) -> Option<Self> {
        if mask.count_ones() != 1 {
            return None;
        }
        Some(Self { port, mask })
    }

    /// Pin mask of this line
    pub fn mask(&self) -> u16 {
        self.mask
    }

    /// Give back the port
    pub fn release(self) -> P {
        self.port
    }
}

impl<P: GpioPort> OutputLine for PortLine<P> {
    fn set_high(&mut self) {
        self.port.set_reset(u32::from(self.mask));
    }

    fn set_low(&mut self) {
        self.port.set_reset(u32::from(self.mask) << 16);
    }
}

impl<P: GpioPort> InputLine for PortLine<P> {
    fn read_level(&mut self) -> bool {
        self.port.input() & self.mask != 0
    }
}
