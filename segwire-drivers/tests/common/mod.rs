//! Host-side TM1637 bus simulator
//!
//! Watches the pin writes of the driver, decodes START/STOP conditions and
//! bytes the way the chip does, and pulls the data line low during the
//! acknowledgment pulse.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use segwire_drivers::Tm1637;
use segwire_hal::{InputLine, NoDelay, OutputLine};

/// Simulated chip plus the pull-ups on both lines
#[derive(Debug)]
pub struct Chip {
    clk: bool,
    dio_driven: bool,
    pulling_low: bool,
    framing: bool,
    in_ack: bool,
    bits: u8,
    shift: u8,
    current: Vec<u8>,
    received: usize,
    /// Never acknowledge (no chip on the bus)
    pub absent: bool,
    /// Refuse to acknowledge the byte with this index (counted from 0)
    pub fail_at: Option<usize>,
    /// Every byte clocked in, grouped by frame
    pub frames: Vec<Vec<u8>>,
    pub starts: usize,
    pub stops: usize,
    /// Reads of the data line by the driver
    pub samples: usize,
    /// Digit registers as latched by address commands
    pub registers: [u8; 6],
    /// Last display control byte
    pub control: Option<u8>,
    /// Data command seen
    pub data_mode: bool,
}

impl Chip {
    fn new() -> Self {
        Self {
            clk: true,
            dio_driven: true,
            pulling_low: false,
            framing: false,
            in_ack: false,
            bits: 0,
            shift: 0,
            current: Vec::new(),
            received: 0,
            absent: false,
            fail_at: None,
            frames: Vec::new(),
            starts: 0,
            stops: 0,
            samples: 0,
            registers: [0; 6],
            control: None,
            data_mode: false,
        }
    }

    /// Level seen on the data wire
    pub fn data(&self) -> bool {
        self.dio_driven && !self.pulling_low
    }

    /// Both lines released high
    pub fn is_idle(&self) -> bool {
        self.clk && self.data() && !self.framing
    }

    /// All bytes of all frames in order
    pub fn bytes(&self) -> Vec<u8> {
        self.frames.iter().flatten().copied().collect()
    }

    fn set_clk(&mut self, level: bool) {
        if level == self.clk {
            return;
        }
        self.clk = level;

        if level {
            if self.framing && !self.in_ack && self.bits < 8 {
                self.shift |= u8::from(self.data()) << self.bits;
                self.bits += 1;
            }
        } else if self.in_ack {
            self.pulling_low = false;
            self.in_ack = false;
            self.bits = 0;
            self.shift = 0;
        } else if self.framing && self.bits == 8 {
            self.current.push(self.shift);
            let refused = self.absent || self.fail_at == Some(self.received);
            self.received += 1;
            self.pulling_low = !refused;
            self.in_ack = true;
        }
    }

    fn set_dio(&mut self, level: bool) {
        let before = self.data();
        self.dio_driven = level;
        let after = self.data();
        if !self.clk || before == after {
            return;
        }

        if after {
            self.stops += 1;
            if self.framing {
                let frame = core::mem::take(&mut self.current);
                self.latch(&frame);
                self.frames.push(frame);
            }
            self.framing = false;
        } else {
            self.starts += 1;
            self.framing = true;
            self.current.clear();
        }
        self.bits = 0;
        self.shift = 0;
    }

    fn latch(&mut self, frame: &[u8]) {
        let Some((&command, data)) = frame.split_first() else {
            return;
        };
        match command & 0xC0 {
            0x40 => self.data_mode = true,
            0x80 => self.control = Some(command),
            0xC0 => {
                let mut address = usize::from(command & 0x0F);
                for &byte in data {
                    if let Some(register) = self.registers.get_mut(address) {
                        *register = byte;
                    }
                    address += 1;
                }
            }
            _ => {}
        }
    }
}

pub type SharedChip = Rc<RefCell<Chip>>;

/// Clock line wired to the simulator
pub struct SimClk(SharedChip);

impl OutputLine for SimClk {
    fn set_high(&mut self) {
        self.0.borrow_mut().set_clk(true);
    }

    fn set_low(&mut self) {
        self.0.borrow_mut().set_clk(false);
    }
}

/// Data line wired to the simulator
pub struct SimDio(SharedChip);

impl OutputLine for SimDio {
    fn set_high(&mut self) {
        self.0.borrow_mut().set_dio(true);
    }

    fn set_low(&mut self) {
        self.0.borrow_mut().set_dio(false);
    }
}

impl InputLine for SimDio {
    fn read_level(&mut self) -> bool {
        let mut chip = self.0.borrow_mut();
        chip.samples += 1;
        chip.data()
    }
}

pub type SimDisplay = Tm1637<SimClk, SimDio, NoDelay>;

/// Display with `digits` positions wired to a fresh simulated chip
pub fn display(digits: u8) -> (SharedChip, SimDisplay) {
    let chip = Rc::new(RefCell::new(Chip::new()));
    let tm = Tm1637::new(
        SimClk(Rc::clone(&chip)),
        SimDio(Rc::clone(&chip)),
        NoDelay,
        digits,
    );
    (chip, tm)
}
