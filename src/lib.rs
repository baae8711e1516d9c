#![no_std]

//! Root clock generator (RCG) driver.
//!
//! An RCG block produces a clock output by selecting one of several parent
//! sources, dividing it with an integer pre-divider and, optionally, scaling
//! it with a fractional M/N counter pair. Staged register writes take effect
//! only after a hardware update latch is triggered and acknowledged.

pub mod constants;
pub mod errors;
pub mod regmap;
pub mod freq;
pub mod provider;
pub mod device;
