//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in ringclock-core, built on `embedded-hal` digital output pins:
//!
//! - APA102 LED strip, bit-banged over a clock and a data line
//! - Strip power switch

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod apa102;
pub mod power;

pub use apa102::Apa102;
pub use power::PowerSwitch;
