//! GPIO pin assignments for the thermoled indicator board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Indicator LEDs (active HIGH, series resistor per line)
// ---------------------------------------------------------------------------

/// Digital output: RED indicator LED.
pub const LED_RED_GPIO: i32 = 5;
/// Digital output: YELLOW indicator LED.
pub const LED_YELLOW_GPIO: i32 = 6;
/// Digital output: GREEN indicator LED.
pub const LED_GREEN_GPIO: i32 = 26;

/// All indicator lines in driver order (RED, YELLOW, GREEN).
pub const LED_GPIOS: [i32; 3] = [LED_RED_GPIO, LED_YELLOW_GPIO, LED_GREEN_GPIO];
