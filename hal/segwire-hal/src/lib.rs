//! Segwire Hardware Abstraction Layer
//!
//! This crate defines the small set of capabilities a bit-banged display
//! bus needs from the hardware: a digital line that can be driven and read
//! back, and a short pulse delay. Drivers depend only on these traits, so
//! the same protocol code runs against register-level ports, any
//! `embedded-hal` pin, or a host-side simulator.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  segwire-drivers (protocol + encoders)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  segwire-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │   PortLine    │       │    EhLine     │
//! │ (set/reset +  │       │ (embedded-hal │
//! │  input regs)  │       │    pins)      │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputLine`], [`gpio::InputLine`] - Digital lines
//! - [`port::GpioPort`] - Port register block with atomic set/reset
//! - [`delay::MicroDelay`] - Pulse-width delay

#![no_std]
#![deny(unsafe_code)]

pub mod delay;
pub mod eh;
pub mod gpio;
pub mod port;

// Re-export key traits at crate root for convenience
pub use delay::{EhDelay, MicroDelay, NoDelay, SpinDelay};
pub use eh::EhLine;
pub use gpio::{InputLine, OpenDrainLine, OutputLine};
pub use port::{GpioPort, PortLine};
