//! Temperature status readout.
//!
//! Each render performs a fresh temperature read (never the sample loop's
//! cached value) and formats it as `"CPU temperature = <int>.<milli> Grad\n"`
//! into a bounded string.  On a failed read the reporter logs and falls
//! through with its last known value, the same policy the sample loop uses.

use core::fmt::Write as _;

use log::warn;

use crate::app::ports::SensorPort;

/// Maximum rendered length; the widest i32 still fits with room to spare.
pub const STATUS_CAPACITY: usize = 64;

/// Bounded status-line formatter.
pub struct StatusReporter {
    last_millideg: i32,
}

impl StatusReporter {
    pub const fn new() -> Self {
        Self { last_millideg: 0 }
    }

    /// Fresh read + format.  The string is capped at [`STATUS_CAPACITY`].
    pub fn render<S: SensorPort>(&mut self, sensor: &mut S) -> heapless::String<STATUS_CAPACITY> {
        match sensor.read_millidegrees() {
            Ok(v) => self.last_millideg = v,
            Err(e) => warn!("status: {} — reporting last reading", e),
        }

        let mut line = heapless::String::new();
        let temp = self.last_millideg;
        let _ = write!(line, "CPU temperature = {}.{} Grad\n", temp / 1000, temp % 1000);
        line
    }
}
