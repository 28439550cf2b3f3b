//! Port traits — the boundary between control logic and the outside world.
//!
//! ```text
//!   Driver/adapter ──▶ Port trait ──▶ control core
//! ```
//!
//! Driven adapters (the CPU temperature source, the LED line driver, the
//! event log) implement these traits.  The sampler and blinker consume
//! them via generics, so the control core never touches hardware directly.

use crate::control::classify::LedColour;
use crate::error::SensorError;

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → control)
// ───────────────────────────────────────────────────────────────

/// Read-side port: the sample loop calls this to obtain the current CPU
/// temperature in milli-degrees.
pub trait SensorPort {
    /// A failed read yields [`SensorError::Unavailable`]; the caller is
    /// expected to fall back to its last known reading.
    fn read_millidegrees(&mut self) -> Result<i32, SensorError>;
}

// ───────────────────────────────────────────────────────────────
// LED port (driven adapter: control → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the control core calls this to drive the three lines.
/// Implementations must be callable from timer-callback context — no
/// blocking, no locks.
pub trait LedPort {
    /// Assert (`true`) or deassert (`false`) one line.
    fn set_line(&mut self, colour: LedColour, lit: bool);

    /// Assert all three lines (boot indication).
    fn all_on(&mut self) {
        for colour in LedColour::ALL {
            self.set_line(colour, true);
        }
    }

    /// Deassert all three lines.
    fn all_off(&mut self) {
        for colour in LedColour::ALL {
            self.set_line(colour, false);
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: control → logging)
// ───────────────────────────────────────────────────────────────

/// The main loop emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (serial log today;
/// a telemetry channel would implement the same trait).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
