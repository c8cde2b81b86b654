//! Bit-level transport
//!
//! Generates START/STOP conditions and shifts single bytes out over the
//! clock and data lines, sampling one acknowledgment bit per byte. Holds no
//! state besides the lines and the pulse delay.

use segwire_hal::{MicroDelay, OpenDrainLine, OutputLine};

use super::Tm1637Error;

/// Acknowledgment sampled after a byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Ack {
    /// Receiver pulled data low during the ACK pulse
    Ack,
    /// Data stayed high
    Nack,
}

impl Ack {
    /// Raw acknowledgment bit as sampled on the data line (0 = acknowledged)
    pub fn bit(self) -> u8 {
        match self {
            Ack::Ack => 0,
            Ack::Nack => 1,
        }
    }

    /// True if the byte was acknowledged
    pub fn is_ack(self) -> bool {
        self == Ack::Ack
    }

    /// Convert into a result, a missing acknowledgment being the error
    pub fn into_result(self) -> Result<(), Tm1637Error> {
        match self {
            Ack::Ack => Ok(()),
            Ack::Nack => Err(Tm1637Error::Nack),
        }
    }
}

/// Two-wire bit-banged transport
#[derive(Debug)]
pub struct Transport<CLK, DIO, D> {
    clk: CLK,
    dio: DIO,
    delay: D,
}

impl<CLK, DIO, D> Transport<CLK, DIO, D>
where
    CLK: OutputLine,
    DIO: OpenDrainLine,
    D: MicroDelay,
{
    /// Bind the clock line, data line and pulse delay
    ///
    /// The lines are not touched until [`Transport::idle`] or the first
    /// frame.
    pub fn new(clk: CLK, dio: DIO, delay: D) -> Self {
        Self { clk, dio, delay }
    }

    /// Pull both lines high (bus idle)
    pub fn idle(&mut self) {
        self.clk.set_high();
        self.dio.set_high();
    }

    /// START condition: data falls while clock is high
    pub fn start(&mut self) {
        self.clk.set_high();
        self.dio.set_high();
        self.delay.pulse();

        self.dio.set_low();
        self.delay.pulse();
    }

    /// STOP condition: data rises while clock is high, leaving the bus idle
    pub fn stop(&mut self) {
        self.dio.set_low();
        self.delay.pulse();

        self.clk.set_high();
        self.delay.pulse();

        self.dio.set_high();
        self.delay.pulse();
    }

    /// Shift out one byte LSB first and sample the acknowledgment
    pub fn write_byte(&mut self, byte: u8) -> Ack {
        let mut bits = byte;
        for _ in 0..8 {
            self.clk.set_low();
            self.delay.pulse();
            self.dio.set_level(bits & 0x01 != 0);
            self.delay.pulse();
            self.clk.set_high();
            self.delay.pulse();
            bits >>= 1;
        }

        // Release data and clock the ACK pulse
        self.clk.set_low();
        self.dio.set_high();
        self.delay.pulse();

        self.clk.set_high();
        self.delay.pulse();
        self.delay.pulse();

        let ack = if self.dio.is_low() { Ack::Ack } else { Ack::Nack };

        // Hold data where the chip left it until the ACK pulse ends
        self.dio.set_level(!ack.is_ack());
        self.delay.pulse();
        self.clk.set_low();
        self.delay.pulse();

        ack
    }

    /// Write one byte, turning a missing acknowledgment into an error
    pub fn send(&mut self, byte: u8) -> Result<(), Tm1637Error> {
        let ack = self.write_byte(byte);
        if !ack.is_ack() {
            warn!("tm1637: byte {=u8:#x} not acknowledged", byte);
        }
        ack.into_result()
    }

    /// Run `body` inside exactly one START ... STOP frame
    ///
    /// The STOP condition is issued whatever `body` returns.
    pub fn frame<T, F>(&mut self, body: F) -> T
    where
        F: FnOnce(&mut Self) -> T,
    {
        self.start();
        let result = body(self);
        self.stop();
        result
    }

    /// Give back the lines and the delay
    pub fn release(self) -> (CLK, DIO, D) {
        (self.clk, self.dio, self.delay)
    }
}
