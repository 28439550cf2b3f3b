//! LED line driver, hardware initialisation, and timer plumbing.

pub mod hw_init;
pub mod hw_timer;
pub mod led_array;
