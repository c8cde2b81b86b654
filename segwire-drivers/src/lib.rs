//! Display driver implementations
//!
//! This crate provides protocol drivers for simple display controllers
//! that are clocked entirely in software over `segwire-hal` lines:
//!
//! - TM1637 two-wire 7-segment controller (up to 6 digits)

#![no_std]
#![deny(unsafe_code)]

// This mod MUST go first, so that the others see its macros.
#[macro_use]
mod fmt;

pub mod tm1637;

pub use tm1637::{Tm1637, Tm1637Config, Tm1637Error};
