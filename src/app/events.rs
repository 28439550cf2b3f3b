//! Outbound application events.
//!
//! The main loop emits these through the [`EventSink`](super::ports::EventSink)
//! port.  Adapters on the other side decide what to do with them — log to
//! serial today, push over a telemetry channel tomorrow.

use crate::control::classify::{Band, LedColour};

/// Structured events emitted by the indicator firmware.
#[derive(Debug, Clone, Copy)]
pub enum AppEvent {
    /// The firmware has started (boot indication is active).
    Started,

    /// A thermal sample completed.
    SampleTaken { millidegrees: i32, band: Band },

    /// The classified band changed; a new line is blinking.
    BandChanged {
        from: Band,
        to: Band,
        active: LedColour,
    },

    /// The temperature source could not be read this cycle; the previous
    /// reading was reused.
    SensorFault,
}
