//! Character to segment encoding
//!
//! Segment bytes are bitmasks, one per digit position:
//!
//! ```text
//!     --A--
//!    |     |
//!    F     B
//!    |     |
//!     --G--
//!    |     |
//!    E     C
//!    |     |
//!     --D--  .DP
//! ```
//!
//! Bit 0 is segment A, bit 6 is segment G, bit 7 is the decimal point.

use heapless::Vec;

use super::config::{DigitCount, MAX_DIGITS};

pub const SEG_A: u8 = 0b_0000_0001;
pub const SEG_B: u8 = 0b_0000_0010;
pub const SEG_C: u8 = 0b_0000_0100;
pub const SEG_D: u8 = 0b_0000_1000;
pub const SEG_E: u8 = 0b_0001_0000;
pub const SEG_F: u8 = 0b_0010_0000;
pub const SEG_G: u8 = 0b_0100_0000;
/// Decimal point
pub const SEG_DP: u8 = 0b_1000_0000;

/// Patterns for digits 0-9
pub const DIGITS: [u8; 10] = [
    0x3F, // 0
    0x06, // 1
    0x5B, // 2
    0x4F, // 3
    0x66, // 4
    0x6D, // 5
    0x7D, // 6
    0x07, // 7
    0x7F, // 8
    0x6F, // 9
];

/// Minus sign
pub const MINUS: u8 = SEG_G;

/// Encoded segment bytes, one per digit position
pub type SegmentBuffer = Vec<u8, MAX_DIGITS>;

/// Segment pattern for one character
///
/// Digits, `-` and (with the `alphabet` feature) a readable subset of
/// letters in either case are supported. Anything else, including space,
/// encodes to a blank digit.
pub fn encode_char(c: char) -> u8 {
    match c {
        '0'..='9' => DIGITS[c as usize - '0' as usize],
        '-' => MINUS,
        #[cfg(feature = "alphabet")]
        'A' | 'a' => 0x77,
        #[cfg(feature = "alphabet")]
        'B' | 'b' => 0x7C,
        #[cfg(feature = "alphabet")]
        'C' | 'c' => 0x58,
        #[cfg(feature = "alphabet")]
        'D' | 'd' => 0x5E,
        #[cfg(feature = "alphabet")]
        'E' | 'e' => 0x79,
        #[cfg(feature = "alphabet")]
        'F' | 'f' => 0x71,
        // Same shape as 9
        #[cfg(feature = "alphabet")]
        'G' | 'g' => 0x6F,
        #[cfg(feature = "alphabet")]
        'H' | 'h' => 0x76,
        #[cfg(feature = "alphabet")]
        'I' | 'i' => 0x04,
        #[cfg(feature = "alphabet")]
        'J' | 'j' => 0x0E,
        #[cfg(feature = "alphabet")]
        'L' | 'l' => 0x38,
        #[cfg(feature = "alphabet")]
        'N' | 'n' => 0x54,
        #[cfg(feature = "alphabet")]
        'O' | 'o' => 0x5C,
        #[cfg(feature = "alphabet")]
        'P' | 'p' => 0x73,
        #[cfg(feature = "alphabet")]
        'Q' | 'q' => 0x67,
        #[cfg(feature = "alphabet")]
        'R' | 'r' => 0x50,
        #[cfg(feature = "alphabet")]
        'S' | 's' => 0x6D,
        #[cfg(feature = "alphabet")]
        'T' | 't' => 0x78,
        #[cfg(feature = "alphabet")]
        'U' | 'u' => 0x1C,
        #[cfg(feature = "alphabet")]
        'Y' | 'y' => 0x6E,
        _ => 0,
    }
}

/// Encode `text` into exactly `digits` segment bytes
///
/// Each character fills one position. A `.` directly after a character
/// lights that position's decimal point and does not take a position of its
/// own. Positions left over when the text runs out are blank; characters
/// past the last position are never read.
pub fn encode_str(text: &str, digits: DigitCount) -> SegmentBuffer {
    let mut buffer = SegmentBuffer::new();
    let mut chars = text.chars().peekable();

    while buffer.len() < digits.as_usize() {
        let mut segments = chars.next().map_or(0, encode_char);
        if chars.next_if_eq(&'.').is_some() {
            segments |= SEG_DP;
        }
        // Cannot overflow: digits never exceeds MAX_DIGITS
        let _ = buffer.push(segments);
    }

    buffer
}
