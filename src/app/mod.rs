//! Application layer — port traits and structured events.
//!
//! The control core interacts with hardware only through the **port
//! traits** defined in [`ports`], keeping the sampler and blinker fully
//! testable without real peripherals.

pub mod events;
pub mod ports;
