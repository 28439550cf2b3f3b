//! CPU die temperature source, in integer milli-degrees Celsius.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads the ESP32-S3 internal temperature sensor through the
//! handle owned by hw_init.  On host/test: reads a static `AtomicI32` for
//! injection, with a separate availability flag for fault injection.

use crate::app::ports::SensorPort;
use crate::error::SensorError;

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicBool, AtomicI32, Ordering};

#[cfg(not(target_os = "espidf"))]
static SIM_TEMP_MILLIDEG: AtomicI32 = AtomicI32::new(30_000);
#[cfg(not(target_os = "espidf"))]
static SIM_AVAILABLE: AtomicBool = AtomicBool::new(true);

/// Inject a simulated reading (milli-degrees).  Host targets only.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_millidegrees(millideg: i32) {
    SIM_TEMP_MILLIDEG.store(millideg, Ordering::Relaxed);
}

/// Simulate sensor availability.  `false` makes every read fail with
/// [`SensorError::Unavailable`] until re-enabled.  Host targets only.
#[cfg(not(target_os = "espidf"))]
pub fn sim_set_available(available: bool) {
    SIM_AVAILABLE.store(available, Ordering::Relaxed);
}

/// The CPU temperature source.
pub struct CpuTempSensor;

impl CpuTempSensor {
    pub const fn new() -> Self {
        Self
    }

    #[cfg(target_os = "espidf")]
    fn read_raw(&self) -> Result<i32, SensorError> {
        hw_init::temp_read_millidegrees().map_err(|_| SensorError::Unavailable)
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_raw(&self) -> Result<i32, SensorError> {
        if SIM_AVAILABLE.load(Ordering::Relaxed) {
            Ok(SIM_TEMP_MILLIDEG.load(Ordering::Relaxed))
        } else {
            Err(SensorError::Unavailable)
        }
    }
}

impl SensorPort for CpuTempSensor {
    fn read_millidegrees(&mut self) -> Result<i32, SensorError> {
        self.read_raw()
    }
}
