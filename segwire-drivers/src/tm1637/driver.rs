//! TM1637 display driver
//!
//! Sequences transport calls into the chip's command frames. All calls
//! block until their frame, including its STOP condition, is complete.

use core::fmt::{self, Write};

use heapless::String;
use segwire_hal::{MicroDelay, OpenDrainLine, OutputLine};

use super::command::{cmd, Brightness};
use super::config::{DigitCount, Tm1637Config, MAX_DIGITS};
use super::segments::encode_str;
use super::transport::Transport;
use super::Tm1637Error;

/// Capacity of the text buffer used by [`Tm1637::write_fmt`]
///
/// One character per digit position; decimal points count as characters.
pub const FMT_CAPACITY: usize = MAX_DIGITS;

/// TM1637 display
///
/// Owns the clock and data lines for its whole lifetime. Brightness is
/// write-only and not cached; resend it whenever the power state matters.
#[derive(Debug)]
pub struct Tm1637<CLK, DIO, D> {
    bus: Transport<CLK, DIO, D>,
    digits: DigitCount,
}

impl<CLK, DIO, D> Tm1637<CLK, DIO, D>
where
    CLK: OutputLine,
    DIO: OpenDrainLine,
    D: MicroDelay,
{
    /// Create a display on the given lines
    ///
    /// `digits` is clamped to 1-6. Nothing is sent until [`Tm1637::init`].
    pub fn new(clk: CLK, dio: DIO, delay: D, digits: u8) -> Self {
        Self {
            bus: Transport::new(clk, dio, delay),
            digits: DigitCount::new(digits),
        }
    }

    /// Create a display using the digit count of `config`
    pub fn with_config(clk: CLK, dio: DIO, delay: D, config: &Tm1637Config) -> Self {
        Self::new(clk, dio, delay, config.digits)
    }

    /// Idle the bus and select auto-increment write mode
    pub fn init(&mut self) -> Result<(), Tm1637Error> {
        self.bus.idle();
        debug!("tm1637: init, {=u8} digits", self.digits.get());
        self.bus.frame(|bus| bus.send(cmd::DATA_WRITE))
    }

    /// Initialize and apply `config`
    pub fn setup(&mut self, config: &Tm1637Config) -> Result<(), Tm1637Error> {
        self.init()?;
        self.set_digit_count(config.digits);
        self.set_brightness(config.brightness)
    }

    /// Set brightness 0-8, 0 switches the display off
    ///
    /// Levels above 8 are clamped.
    pub fn set_brightness(&mut self, level: u8) -> Result<(), Tm1637Error> {
        let brightness = Brightness::new(level);
        debug!("tm1637: brightness {=u8}", brightness.level());
        self.bus.frame(|bus| bus.send(brightness.command()))
    }

    /// Set the number of digit positions in use
    ///
    /// Clamped to 1-6. No chip I/O.
    pub fn set_digit_count(&mut self, count: u8) {
        self.digits = DigitCount::new(count);
        debug!("tm1637: {=u8} digits", self.digits.get());
    }

    /// Number of digit positions in use
    pub fn digit_count(&self) -> u8 {
        self.digits.get()
    }

    /// Write raw segment bytes starting at digit 0
    ///
    /// Exactly one byte per digit position is sent; extra input is ignored
    /// and missing positions are sent blank. Transmission stops at the first
    /// byte that is not acknowledged, but the frame is still closed.
    pub fn write_raw(&mut self, segments: &[u8]) -> Result<(), Tm1637Error> {
        let digits = self.digits.as_usize();
        trace!("tm1637: raw {=[u8]}", &segments[..digits.min(segments.len())]);

        self.bus.frame(|bus| {
            bus.send(cmd::ADDRESS_0)?;
            for position in 0..digits {
                bus.send(segments.get(position).copied().unwrap_or(0))?;
            }
            Ok(())
        })
    }

    /// Write text, one character per digit position
    ///
    /// See [`encode_str`](super::segments::encode_str) for the character
    /// set and the `.` decimal point syntax.
    pub fn write_str(&mut self, text: &str) -> Result<(), Tm1637Error> {
        let segments = encode_str(text, self.digits);
        self.write_raw(&segments)
    }

    /// Write formatted text
    ///
    /// Lets `write!(display, "{:4}", value)` work. Output longer than
    /// [`FMT_CAPACITY`] is truncated. If an argument fails to format,
    /// nothing is written to the display.
    pub fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<(), Tm1637Error> {
        let mut text = Truncating::<FMT_CAPACITY>::new();
        text.write_fmt(args).map_err(|_| Tm1637Error::Nack)?;
        self.write_str(&text.buf)
    }

    /// Blank every digit position
    pub fn clear(&mut self) -> Result<(), Tm1637Error> {
        self.write_raw(&[0; MAX_DIGITS])
    }

    /// Give back the lines and the delay
    pub fn release(self) -> (CLK, DIO, D) {
        self.bus.release()
    }
}

/// Text sink that keeps the prefix that fits and drops the rest
struct Truncating<const N: usize> {
    buf: String<N>,
    full: bool,
}

impl<const N: usize> Truncating<N> {
    fn new() -> Self {
        Self {
            buf: String::new(),
            full: false,
        }
    }
}

impl<const N: usize> Write for Truncating<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.full {
                break;
            }
            self.full = self.buf.push(c).is_err();
        }
        Ok(())
    }
}
