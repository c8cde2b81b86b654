//! Pulse-width delays
//!
//! Bit-banged buses only need a floor on pulse width, not precise timing,
//! so the delay is a single "wait one pulse" operation injected into the
//! transport.

use embedded_hal::delay::DelayNs;

/// Wait for one bus pulse
pub trait MicroDelay {
    /// Block for at least the minimum pulse width of the bus
    fn pulse(&mut self);
}

impl<T: MicroDelay + ?Sized> MicroDelay for &mut T {
    fn pulse(&mut self) {
        (**self).pulse();
    }
}

/// Busy-wait loop of a fixed number of iterations
///
/// Needs no timer. The iteration count must be calibrated for the core
/// clock so that one pulse lasts a few microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpinDelay {
    iterations: u32,
}

impl SpinDelay {
    /// Iterations that give a safe pulse width on a 48-72 MHz Cortex-M
    pub const DEFAULT_ITERATIONS: u32 = 50;

    /// Create a spin delay with the given iteration count
    pub const fn new(iterations: u32) -> Self {
        Self { iterations }
    }

    /// Iterations per pulse
    pub const fn iterations(&self) -> u32 {
        self.iterations
    }
}

impl Default for SpinDelay {
    fn default() -> Self {
        Self::new(Self::DEFAULT_ITERATIONS)
    }
}

impl MicroDelay for SpinDelay {
    fn pulse(&mut self) {
        for _ in 0..self.iterations {
            core::hint::spin_loop();
        }
    }
}

/// Delay that returns immediately
///
/// For host-side simulation, where pin writes are recorded rather than
/// clocked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoDelay;

impl MicroDelay for NoDelay {
    fn pulse(&mut self) {}
}

/// Pulse delay backed by an `embedded-hal` delay provider
#[derive(Debug)]
pub struct EhDelay<D> {
    delay: D,
    pulse_us: u32,
}

impl<D: DelayNs> EhDelay<D> {
    /// Default pulse width in microseconds
    pub const DEFAULT_PULSE_US: u32 = 5;

    /// Wrap `delay`, waiting `pulse_us` microseconds per pulse
    pub fn new(delay: D, pulse_us: u32) -> Self {
        Self { delay, pulse_us }
    }

    /// Wrap `delay` with the default pulse width
    pub fn with_default_pulse(delay: D) -> Self {
        Self::new(delay, Self::DEFAULT_PULSE_US)
    }

    /// Give back the delay provider
    pub fn release(self) -> D {
        self.delay
    }
}

impl<D: DelayNs> MicroDelay for EhDelay<D> {
    fn pulse(&mut self) {
        self.delay.delay_us(self.pulse_us);
    }
}
