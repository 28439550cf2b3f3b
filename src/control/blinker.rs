//! Blink loop body.
//!
//! Runs on every blink-timer firing, in timer-callback context, and toggles
//! whichever line the sample loop most recently published.  The cadence is
//! asymmetric on purpose: 1 ms asserted, 10 ms deasserted — a fast,
//! low-duty-cycle attention blink, identical for every band.  The returned
//! delay is the next re-arm period, so the alternation is self-scheduling.
//!
//! If the active line changed mid-cycle, the toggle applies to the new line
//! immediately; the old line's reverse transition is picked up by the next
//! sample cycle rewriting the full pattern.  One foreshortened or
//! lengthened cycle is accepted, not a defect.

use crate::app::ports::LedPort;
use crate::control::state::IndicatorState;

/// The blink cycle.  Period parameters are fixed at construction.
pub struct Blinker {
    on_ms: u32,
    off_ms: u32,
}

impl Blinker {
    pub const fn new(on_ms: u32, off_ms: u32) -> Self {
        Self { on_ms, off_ms }
    }

    /// One firing of the blink loop.  Returns the delay in milliseconds
    /// until the next firing.
    pub fn run_cycle<L: LedPort>(&self, state: &IndicatorState, leds: &mut L) -> u32 {
        let active = state.active();
        if state.flip_phase() {
            // Was lit: go dark for the long sub-period.
            leds.set_line(active, false);
            self.off_ms
        } else {
            leds.set_line(active, true);
            self.on_ms
        }
    }
}
