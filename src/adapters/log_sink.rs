//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the serial logger.  A future telemetry adapter would implement the
//! same trait.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Started => {
                info!("START | boot indication active (all lines on)");
            }
            AppEvent::SampleTaken { millidegrees, band } => {
                info!(
                    "SAMPLE | {}.{:03} C | band={:?}",
                    millidegrees / 1000,
                    (millidegrees % 1000).abs(),
                    band
                );
            }
            AppEvent::BandChanged { from, to, active } => {
                info!("BAND | {:?} -> {:?} | blinking={:?}", from, to, active);
            }
            AppEvent::SensorFault => {
                warn!("FAULT | temperature source unavailable, reading reused");
            }
        }
    }
}
