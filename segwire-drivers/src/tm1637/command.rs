//! TM1637 command bytes
//!
//! The first byte of every frame selects the chip function; bits 7-6
//! identify the command class.

/// Command opcodes
pub mod cmd {
    /// Data command: write to display registers, auto-increment address
    pub const DATA_WRITE: u8 = 0x40;
    /// Address command: start at digit 0
    pub const ADDRESS_0: u8 = 0xC0;
    /// Display control: display off
    pub const DISPLAY_OFF: u8 = 0x80;
    /// Display control: display on, OR with brightness in bits 0-2
    pub const DISPLAY_ON: u8 = 0x88;
}

/// Mask of the brightness sub-field of the display control command
pub const BRIGHTNESS_MASK: u8 = 0x07;

/// Display power and brightness
///
/// Level 0 switches the display off; levels 1-8 switch it on with PWM duty
/// sub-field `level - 1`. Levels above 8 are clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Brightness(u8);

impl Brightness {
    /// Display off
    pub const OFF: Self = Self(0);
    /// Dimmest visible level
    pub const MIN: Self = Self(1);
    /// Brightest level
    pub const MAX: Self = Self(8);

    /// Create from a 0-8 level, clamping larger values to 8
    pub const fn new(level: u8) -> Self {
        if level > Self::MAX.0 {
            Self::MAX
        } else {
            Self(level)
        }
    }

    /// Level in 0-8
    pub const fn level(self) -> u8 {
        self.0
    }

    /// True unless this is [`Brightness::OFF`]
    pub const fn is_on(self) -> bool {
        self.0 != 0
    }

    /// Display control command byte for this level
    pub const fn command(self) -> u8 {
        if self.0 == 0 {
            cmd::DISPLAY_OFF
        } else {
            cmd::DISPLAY_ON | ((self.0 - 1) & BRIGHTNESS_MASK)
        }
    }
}

impl From<u8> for Brightness {
    fn from(level: u8) -> Self {
        Self::new(level)
    }
}
