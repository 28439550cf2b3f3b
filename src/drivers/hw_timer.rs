//! Hardware timer module using ESP-IDF's esp_timer API.
//!
//! Two one-shot timers that re-arm themselves from inside their own
//! callbacks — re-arm-on-completion, so execution jitter shifts subsequent
//! firings rather than accumulating:
//!
//! - **thermal**: fires every T_sample (5 s default) and runs the sample
//!   cycle;
//! - **blink**: re-arms with whatever delay the blink cycle returns,
//!   producing the asymmetric 1 ms / 10 ms alternation.
//!
//! Both first fire one full T_sample after [`start_timers`], leaving the
//! boot all-on indication undisturbed.  Callbacks execute in the ESP timer
//! task context (not ISR) and touch shared state only through the atomics
//! in [`CONTEXT`](crate::context::CONTEXT).
//!
//! Shutdown contract: [`stop_timers`] stops and deletes both timers;
//! `esp_timer_delete` does not return while the callback is running, so
//! after it both loops are disarmed *and* joined.  Only then may
//! `hw_init::release_peripherals()` run.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

#[cfg(target_os = "espidf")]
use core::sync::atomic::{AtomicU32, Ordering};

#[cfg(target_os = "espidf")]
use log::info;

#[cfg(target_os = "espidf")]
use crate::context::CONTEXT;
#[cfg(target_os = "espidf")]
use crate::drivers::led_array::LedArray;
#[cfg(target_os = "espidf")]
use crate::sensors::CpuTempSensor;

#[cfg(target_os = "espidf")]
static mut THERMAL_TIMER: esp_timer_handle_t = core::ptr::null_mut();
#[cfg(target_os = "espidf")]
static mut BLINK_TIMER: esp_timer_handle_t = core::ptr::null_mut();

// ── Error type ────────────────────────────────────────────────

/// Errors while creating or arming the two timers.  Fatal at boot — a
/// firmware without its periodic loops has no control core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwTimerError {
    CreateFailed(i32),
    StartFailed(i32),
}

impl core::fmt::Display for HwTimerError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::CreateFailed(rc) => write!(f, "timer create failed (rc={})", rc),
            Self::StartFailed(rc) => write!(f, "timer start failed (rc={})", rc),
        }
    }
}

/// Fixed re-arm period of the thermal timer, set once in `start_timers()`.
#[cfg(target_os = "espidf")]
static SAMPLE_PERIOD_MS: AtomicU32 = AtomicU32::new(crate::config::SAMPLE_INTERVAL_MS);

/// SAFETY: THERMAL_TIMER is written once in `start_timers()` before any
/// callback fires.  Only read afterwards.
#[cfg(target_os = "espidf")]
unsafe fn thermal_timer() -> esp_timer_handle_t {
    unsafe { THERMAL_TIMER }
}

/// SAFETY: Same invariants as `thermal_timer()`.
#[cfg(target_os = "espidf")]
unsafe fn blink_timer() -> esp_timer_handle_t {
    unsafe { BLINK_TIMER }
}

#[cfg(target_os = "espidf")]
unsafe extern "C" fn thermal_cb(_arg: *mut core::ffi::c_void) {
    let mut sensor = CpuTempSensor::new();
    let mut leds = LedArray::new();
    let _ = CONTEXT
        .sampler
        .run_cycle(&mut sensor, &CONTEXT.thresholds, &CONTEXT.state, &mut leds);

    // Fixed-period re-arm after completion, not fixed-rate.
    let period_us = u64::from(SAMPLE_PERIOD_MS.load(Ordering::Relaxed)) * 1_000;
    // SAFETY: thermal_timer() contract — handle created before arming.
    unsafe {
        esp_timer_start_once(thermal_timer(), period_us);
    }
}

#[cfg(target_os = "espidf")]
unsafe extern "C" fn blink_cb(_arg: *mut core::ffi::c_void) {
    let mut leds = LedArray::new();
    let delay_ms = CONTEXT.blinker.run_cycle(&CONTEXT.state, &mut leds);

    // SAFETY: blink_timer() contract — handle created before arming.
    unsafe {
        esp_timer_start_once(blink_timer(), u64::from(delay_ms) * 1_000);
    }
}

/// Stop and delete both timers in reverse creation order.  Tolerates a
/// partially created set — null handles are skipped — so it serves both
/// the failed-boot unwind and the normal shutdown path.
#[cfg(target_os = "espidf")]
unsafe fn unwind_timers() {
    // SAFETY: caller holds the single boot-time context; null-checks guard
    // the not-yet-created handles.
    unsafe {
        let bt = blink_timer();
        if !bt.is_null() {
            esp_timer_stop(bt);
            esp_timer_delete(bt);
            BLINK_TIMER = core::ptr::null_mut();
        }
        let tt = thermal_timer();
        if !tt.is_null() {
            esp_timer_stop(tt);
            esp_timer_delete(tt);
            THERMAL_TIMER = core::ptr::null_mut();
        }
    }
}

/// Create both timers and arm their first firing `sample_interval_ms`
/// from now.  Any failure unwinds both timers and is fatal to boot —
/// without them the firmware would sit dark behind a live banner.
#[cfg(target_os = "espidf")]
pub fn start_timers(sample_interval_ms: u32) -> Result<(), HwTimerError> {
    SAMPLE_PERIOD_MS.store(sample_interval_ms, Ordering::Relaxed);
    let first_us = u64::from(sample_interval_ms) * 1_000;

    // SAFETY: THERMAL_TIMER and BLINK_TIMER are written here once at boot
    // from the single main-task context before any callback fires.
    unsafe {
        let thermal_args = esp_timer_create_args_t {
            callback: Some(thermal_cb),
            arg: core::ptr::null_mut(),
            dispatch_method: esp_timer_dispatch_t_ESP_TIMER_TASK,
            name: b"thermal\0".as_ptr() as *const _,
            skip_unhandled_events: false,
        };
        let ret = esp_timer_create(&thermal_args, &raw mut THERMAL_TIMER);
        if ret != ESP_OK {
            return Err(HwTimerError::CreateFailed(ret));
        }

        let blink_args = esp_timer_create_args_t {
            callback: Some(blink_cb),
            arg: core::ptr::null_mut(),
            dispatch_method: esp_timer_dispatch_t_ESP_TIMER_TASK,
            name: b"blink\0".as_ptr() as *const _,
            skip_unhandled_events: false,
        };
        let ret = esp_timer_create(&blink_args, &raw mut BLINK_TIMER);
        if ret != ESP_OK {
            unwind_timers();
            return Err(HwTimerError::CreateFailed(ret));
        }

        let ret = esp_timer_start_once(thermal_timer(), first_us);
        if ret != ESP_OK {
            unwind_timers();
            return Err(HwTimerError::StartFailed(ret));
        }
        let ret = esp_timer_start_once(blink_timer(), first_us);
        if ret != ESP_OK {
            unwind_timers();
            return Err(HwTimerError::StartFailed(ret));
        }

        info!(
            "hw_timer: thermal@{}ms + blink armed (first fire after boot indication)",
            sample_interval_ms
        );
    }
    Ok(())
}

#[cfg(not(target_os = "espidf"))]
pub fn start_timers(_sample_interval_ms: u32) -> Result<(), HwTimerError> {
    log::info!("hw_timer(sim): timers not started (cycles driven by sleep loop)");
    Ok(())
}

/// Disarm and join both periodic loops.  Must run before
/// `hw_init::release_peripherals()`.
#[cfg(target_os = "espidf")]
pub fn stop_timers() {
    // SAFETY: handles are valid if start_timers() succeeded; null-checks
    // prevent double-free.  esp_timer_delete blocks until an in-flight
    // callback returns — disarm-then-join.
    unsafe { unwind_timers() }
}

#[cfg(not(target_os = "espidf"))]
pub fn stop_timers() {}
