//! Control core — pure band classification and the two periodic cycles.
//!
//! Everything in this module is hardware-free: the sampler and blinker act
//! on port traits and lock-free shared state, so both cycles are fully
//! testable on the host and callable from timer-callback context on target.

pub mod blinker;
pub mod classify;
pub mod sampler;
pub mod state;

pub use classify::{Band, LedColour, LineMode, LinePattern};
