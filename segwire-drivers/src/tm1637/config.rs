//! TM1637 configuration types

use super::command::Brightness;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of digit registers on the chip
pub const MAX_DIGITS: usize = 6;

/// Number of digit positions in use, always 1-6
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitCount(u8);

impl DigitCount {
    /// Smallest count
    pub const MIN: Self = Self(1);
    /// Largest count
    pub const MAX: Self = Self(MAX_DIGITS as u8);

    /// Clamp `count` into 1-6 (0 becomes 1, anything above 6 becomes 6)
    pub const fn new(count: u8) -> Self {
        if count == 0 {
            Self::MIN
        } else if count > Self::MAX.0 {
            Self::MAX
        } else {
            Self(count)
        }
    }

    /// Count as u8
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Count as usize
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

impl Default for DigitCount {
    fn default() -> Self {
        Self(4)
    }
}

impl From<u8> for DigitCount {
    fn from(count: u8) -> Self {
        Self::new(count)
    }
}

/// Display configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tm1637Config {
    /// Digit positions wired on the module (clamped to 1-6)
    pub digits: u8,
    /// Brightness level, 0 = off, 1-8 = on (clamped to 8)
    pub brightness: u8,
}

impl Default for Tm1637Config {
    fn default() -> Self {
        Self {
            digits: 4,
            brightness: 8,
        }
    }
}

impl Tm1637Config {
    /// Digit count after clamping
    pub fn digit_count(&self) -> DigitCount {
        DigitCount::new(self.digits)
    }

    /// Brightness after clamping
    pub fn brightness(&self) -> Brightness {
        Brightness::new(self.brightness)
    }
}
