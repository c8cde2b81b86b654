//! TM1637 7-segment display controller
//!
//! The TM1637 drives up to six 7-segment digits and is controlled over a
//! two-wire bus that resembles I2C but has no device address and shifts
//! bits LSB first. The bus is bit-banged from two GPIO lines.
//!
//! # Wire protocol
//!
//! - START: data falls while clock is high
//! - STOP: data rises while clock is high
//! - Byte: 8 bits LSB first, each set while clock is low, latched on the
//!   rising edge
//! - ACK: one extra clock pulse after bit 8; the chip pulls data low
//!
//! # Frames
//!
//! Every operation is exactly one START ... STOP frame:
//!
//! ```text
//! init:        START 0x40 STOP
//! brightness:  START 0x80 | 0x08? | level STOP
//! segments:    START 0xC0 seg0 seg1 ... segN STOP
//! ```
//!
//! The chip only auto-increments the digit address within one frame, so
//! the segment bytes of a write always travel together behind `0xC0`.

pub mod command;
pub mod config;
pub mod driver;
pub mod segments;
pub mod transport;

pub use command::Brightness;
pub use config::{DigitCount, Tm1637Config, MAX_DIGITS};
pub use driver::Tm1637;
pub use segments::{encode_char, encode_str, SegmentBuffer};
pub use transport::{Ack, Transport};

/// TM1637 communication errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Tm1637Error {
    /// A byte of the frame was not acknowledged
    ///
    /// An absent chip and a transient bus error look the same. Formatted
    /// text that cannot be rendered is reported the same way.
    Nack,
}
