//! Digital line abstractions
//!
//! A line is one logical signal of a bus (clock or data). Two-wire display
//! buses drive the data line and read it back during the acknowledgment
//! window, so the data line needs both capabilities.

/// Digital output line
///
/// Implementations perform the actual pin write. Writes cannot fail.
pub trait OutputLine {
    /// Drive the line high (or release it, for open-drain lines)
    fn set_high(&mut self);

    /// Drive the line low
    fn set_low(&mut self);

    /// Drive the line to a specific level
    fn set_level(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }
}

/// Digital input line
pub trait InputLine {
    /// Sample the current electrical level of the line (true = high)
    fn read_level(&mut self) -> bool;

    /// Check if the line currently reads low
    fn is_low(&mut self) -> bool {
        !self.read_level()
    }
}

/// Line that can be both driven and sampled
///
/// The data line of a two-wire bus is of this kind: the receiver pulls it
/// low to acknowledge while the sender has released it.
pub trait OpenDrainLine: OutputLine + InputLine {}

// Blanket implementation for types that implement both traits
impl<T: OutputLine + InputLine> OpenDrainLine for T {}

impl<T: OutputLine + ?Sized> OutputLine for &mut T {
    fn set_high(&mut self) {
        (**self).set_high();
    }

    fn set_low(&mut self) {
        (**self).set_low();
    }
}

impl<T: InputLine + ?Sized> InputLine for &mut T {
    fn read_level(&mut self) -> bool {
        (**self).read_level()
    }
}
