//! System configuration parameters
//!
//! All tunable parameters for the thermoled indicator.  The constants are
//! the compile-time defaults used by the static context; the struct carries
//! the same values for serialisation and runtime override of timer periods.

use serde::{Deserialize, Serialize};

/// Thermal sample period (milliseconds).  Also the boot all-on duration.
pub const SAMPLE_INTERVAL_MS: u32 = 5000;
/// Blink sub-period with the active LED asserted (milliseconds).
pub const BLINK_ON_MS: u32 = 1;
/// Blink sub-period with the active LED deasserted (milliseconds).
pub const BLINK_OFF_MS: u32 = 10;

/// Default band ceilings (milli-degrees).
pub const DEFAULT_GREEN_CEILING: i32 = 40_000;
pub const DEFAULT_YELLOW_CEILING: i32 = 60_000;
pub const DEFAULT_RED_CEILING: i32 = 75_000;

/// Core indicator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorConfig {
    // --- Timing ---
    /// Thermal sample interval (milliseconds)
    pub sample_interval_ms: u32,
    /// Blink on-time (milliseconds)
    pub blink_on_ms: u32,
    /// Blink off-time (milliseconds)
    pub blink_off_ms: u32,
    /// Status line log interval (seconds)
    pub status_interval_secs: u32,

    // --- Band ceilings (milli-degrees) ---
    /// GREEN band upper exclusive bound
    pub green_ceiling: i32,
    /// YELLOW band upper exclusive bound
    pub yellow_ceiling: i32,
    /// RED band upper exclusive bound
    pub red_ceiling: i32,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            // Timing
            sample_interval_ms: SAMPLE_INTERVAL_MS,
            blink_on_ms: BLINK_ON_MS,
            blink_off_ms: BLINK_OFF_MS,
            status_interval_secs: 60,

            // Ceilings
            green_ceiling: DEFAULT_GREEN_CEILING,
            yellow_ceiling: DEFAULT_YELLOW_CEILING,
            red_ceiling: DEFAULT_RED_CEILING,
        }
    }
}
