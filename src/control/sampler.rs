//! Thermal sample loop body.
//!
//! Runs once per T_sample firing, in timer-callback context: read the
//! temperature, classify it, drive the pattern's lines, publish the
//! blinking line for the blink loop.  The timer layer re-arms T_sample
//! after this returns (fixed-period re-arm, not fixed-rate — execution
//! jitter shifts subsequent firings).
//!
//! A failed sensor read is logged and the previous reading is reused for
//! that cycle — last-known-good, never reset to zero, never a skipped
//! classification.  The next periodic firing is the retry path.

use core::sync::atomic::{AtomicI32, AtomicU8, Ordering};

use log::warn;

use crate::app::ports::{LedPort, SensorPort};
use crate::control::classify::{self, Band, LedColour, LineMode};
use crate::control::state::IndicatorState;
use crate::thresholds::ThresholdStore;

/// The thermal sample cycle.  Interior state is atomic so a single static
/// instance can be shared between the timer callback and the main loop.
pub struct ThermalSampler {
    /// Last reading that classification ran on (milli-degrees).
    last_millideg: AtomicI32,
    /// Band of the most recent cycle, for change detection by the caller.
    band: AtomicU8,
}

impl ThermalSampler {
    pub const fn new() -> Self {
        Self {
            last_millideg: AtomicI32::new(0),
            band: AtomicU8::new(Band::Low as u8),
        }
    }

    /// Seed the last-known reading from the boot-time sensor probe, so a
    /// failure on the very first firing classifies a real value.
    pub fn seed_reading(&self, millideg: i32) {
        self.last_millideg.store(millideg, Ordering::Relaxed);
    }

    /// Reading the most recent cycle classified (possibly stale).
    pub fn last_reading(&self) -> i32 {
        self.last_millideg.load(Ordering::Relaxed)
    }

    /// Band of the most recent cycle.
    pub fn band(&self) -> Band {
        Band::from_u8(self.band.load(Ordering::Relaxed))
    }

    /// One firing of the sample loop.
    pub fn run_cycle<S: SensorPort, L: LedPort>(
        &self,
        sensor: &mut S,
        thresholds: &ThresholdStore,
        state: &IndicatorState,
        leds: &mut L,
    ) -> Band {
        let temp = match sensor.read_millidegrees() {
            Ok(v) => {
                self.last_millideg.store(v, Ordering::Relaxed);
                v
            }
            Err(e) => {
                // Fall through with the stale value; outputs still refresh.
                warn!("sampler: {} — reusing last reading", e);
                self.last_millideg.load(Ordering::Relaxed)
            }
        };

        let band = classify::classify(temp, &thresholds.get());
        let pattern = band.pattern();

        // Drive every line of the pattern unconditionally.  The blinking
        // line is asserted here too; the blink loop takes over from its
        // next firing.
        for colour in LedColour::ALL {
            leds.set_line(colour, pattern.mode(colour) != LineMode::Off);
        }

        // Publish after the lines are written; the blink callback picks up
        // the new index on its next firing, never a torn value.
        state.set_active(pattern.blinking());
        self.band.store(band as u8, Ordering::Relaxed);
        band
    }
}
