//! Shared indicator state between the two timer callbacks.
//!
//! The thermal sample loop is the sole writer of `active`; the blink loop
//! is the sole writer of `lit`.  Both callbacks may be in flight at
//! arbitrary relative times, so every access is a single-word atomic —
//! locks are off limits in timer-callback context.  An active-line change
//! takes effect on the very next blink firing; one foreshortened or
//! lengthened cycle on the old line is accepted.

use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::control::classify::LedColour;

/// Lock-free record of {active blinking line, lit/unlit phase}.
pub struct IndicatorState {
    active: AtomicU8,
    lit: AtomicBool,
}

impl IndicatorState {
    /// Startup state: RED active, phase lit (all lines are held asserted
    /// through the boot indication period anyway).
    pub const fn new() -> Self {
        Self {
            active: AtomicU8::new(LedColour::Red as u8),
            lit: AtomicBool::new(true),
        }
    }

    /// Publish a new active line.  Release pairs with the Acquire in
    /// [`active`](Self::active) so the blink callback never observes a
    /// torn index.
    pub fn set_active(&self, colour: LedColour) {
        self.active.store(colour as u8, Ordering::Release);
    }

    /// The line the blink loop should currently toggle.
    pub fn active(&self) -> LedColour {
        LedColour::from_u8(self.active.load(Ordering::Acquire))
    }

    /// Atomically flip the lit/unlit phase, returning the previous phase.
    pub fn flip_phase(&self) -> bool {
        self.lit.fetch_xor(true, Ordering::AcqRel)
    }

    /// Current phase without modifying it.
    pub fn is_lit(&self) -> bool {
        self.lit.load(Ordering::Acquire)
    }
}
