//! Thermoled Firmware — Main Entry Point
//!
//! Two self-re-arming timer callbacks do the real work; the main task only
//! initialises hardware, arms the timers, and reports.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │  thermal timer (5 s)          blink timer (1 ms / 10 ms)     │
//! │        │                              │                      │
//! │        ▼                              ▼                      │
//! │  ThermalSampler.run_cycle()    Blinker.run_cycle()           │
//! │        │     ▲                        │    ▲                 │
//! │        ▼     │ thresholds             ▼    │ active line     │
//! │  ┌──────────────────────────────────────────────┐            │
//! │  │        IndicatorContext (lock-free)          │            │
//! │  └──────────────────────────────────────────────┘            │
//! │        ▲                              │                      │
//! │  attribute boundary             LED lines (GPIO)             │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! Shutdown order, should it ever be needed: `hw_timer::stop_timers()`
//! first (disarm and join both callbacks), then
//! `hw_init::release_peripherals()` — never the reverse, so no firing can
//! touch a freed line or sensor handle.
#![deny(unused_must_use)]

// ── Module declarations ───────────────────────────────────────
pub mod config;
pub mod context;
pub mod error;
pub mod pins;
pub mod thresholds;

pub mod adapters;
pub mod app;
pub mod control;
pub mod drivers;
pub mod sensors;

// ── Imports ───────────────────────────────────────────────────
use anyhow::{bail, Result};
use log::{info, warn};

use adapters::log_sink::LogEventSink;
use adapters::loopback::LoopbackBuffer;
use adapters::status::StatusReporter;
use app::events::AppEvent;
use app::ports::{EventSink, LedPort, SensorPort};
use config::IndicatorConfig;
use context::CONTEXT;
use drivers::led_array::LedArray;
use sensors::CpuTempSensor;

const SELF_TEST_MSG: &[u8] = b"thermoled loopback self-test";

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. Bootstrap ──────────────────────────────────────────
    #[cfg(target_os = "espidf")]
    {
        esp_idf_svc::sys::link_patches();
        esp_idf_logger::init()?;
    }

    info!("╔══════════════════════════════════════╗");
    info!("║  Thermoled v{}                     ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    let config = IndicatorConfig::default();
    let mut log_sink = LogEventSink::new();

    // ── 2. Hardware ───────────────────────────────────────────
    // Acquisition failure is fatal; init_peripherals has already unwound
    // every partially acquired resource in reverse order.
    if let Err(e) = drivers::hw_init::init_peripherals() {
        bail!("hardware init failed: {e}");
    }

    // Boot indication: all three lines asserted until the first thermal
    // firing, one full sample period from now.
    let mut leds = LedArray::new();
    leds.all_on();

    // ── 3. Boot probe ─────────────────────────────────────────
    // Seed the sampler so a failure on the very first firing still
    // classifies a real reading.
    let mut sensor = CpuTempSensor::new();
    match sensor.read_millidegrees() {
        Ok(v) => {
            CONTEXT.sampler.seed_reading(v);
            info!("CPU temperature: {} C", v / 1000);
        }
        Err(e) => {
            warn!("boot probe failed: {}", e);
            log_sink.emit(&AppEvent::SensorFault);
        }
    }

    // ── 4. Loopback self-test ─────────────────────────────────
    {
        let mut dev = LoopbackBuffer::new();
        if let Err(e) = dev.open() {
            bail!("loopback self-test: open failed: {e}");
        }
        let written = dev.write(SELF_TEST_MSG);
        let mut back = [0u8; 64];
        let read = dev.read(&mut back);
        dev.release();
        if read != written || &back[..read] != SELF_TEST_MSG {
            bail!("loopback self-test: data mismatch");
        }
        info!("loopback self-test ok ({} bytes)", written);
    }

    log_sink.emit(&AppEvent::Started);

    // ── 5. Arm the timers ─────────────────────────────────────
    // Same fatal policy as peripheral init: a boot that cannot arm its
    // periodic loops must not report ready.
    if let Err(e) = drivers::hw_timer::start_timers(config.sample_interval_ms) {
        bail!("timer init failed: {e}");
    }

    info!("System ready. Entering monitor loop.");
    run_monitor_loop(&config, &mut log_sink)
}

// ── Monitor loop (target) ─────────────────────────────────────
//
// The timer callbacks own the control work; this loop only watches for
// band changes and periodically renders the status line.

#[cfg(target_os = "espidf")]
fn run_monitor_loop(config: &IndicatorConfig, log_sink: &mut LogEventSink) -> Result<()> {
    let mut status = StatusReporter::new();
    let mut sensor = CpuTempSensor::new();
    let mut prev_band = CONTEXT.sampler.band();
    let mut secs_since_status = 0u32;

    loop {
        std::thread::sleep(std::time::Duration::from_secs(1));

        let band = CONTEXT.sampler.band();
        if band != prev_band {
            log_sink.emit(&AppEvent::BandChanged {
                from: prev_band,
                to: band,
                active: CONTEXT.state.active(),
            });
            prev_band = band;
        }

        secs_since_status += 1;
        if secs_since_status >= config.status_interval_secs {
            let line = status.render(&mut sensor);
            info!("{}", line.trim_end());
            secs_since_status = 0;
        }
    }
}

// ── Monitor loop (host sim) ───────────────────────────────────
//
// Without hardware timers the sleep loop plays both of them: the blink
// cycle paces the loop with its own returned delay, and the thermal cycle
// fires whenever a full sample period has accumulated.

#[cfg(not(target_os = "espidf"))]
fn run_monitor_loop(config: &IndicatorConfig, log_sink: &mut LogEventSink) -> Result<()> {
    let mut status = StatusReporter::new();
    let mut sensor = CpuTempSensor::new();
    let mut leds = LedArray::new();
    let mut prev_band = CONTEXT.sampler.band();
    let mut ms_since_sample = 0u64;
    let mut ms_since_status = 0u64;

    loop {
        let delay_ms = CONTEXT.blinker.run_cycle(&CONTEXT.state, &mut leds);
        std::thread::sleep(std::time::Duration::from_millis(u64::from(delay_ms)));
        ms_since_sample += u64::from(delay_ms);
        ms_since_status += u64::from(delay_ms);

        if ms_since_sample >= u64::from(config.sample_interval_ms) {
            let band = CONTEXT.sampler.run_cycle(
                &mut sensor,
                &CONTEXT.thresholds,
                &CONTEXT.state,
                &mut leds,
            );
            log_sink.emit(&AppEvent::SampleTaken {
                millidegrees: CONTEXT.sampler.last_reading(),
                band,
            });
            if band != prev_band {
                log_sink.emit(&AppEvent::BandChanged {
                    from: prev_band,
                    to: band,
                    active: CONTEXT.state.active(),
                });
                prev_band = band;
            }
            ms_since_sample = 0;
        }

        if ms_since_status >= u64::from(config.status_interval_secs) * 1000 {
            let line = status.render(&mut sensor);
            info!("{}", line.trim_end());
            ms_since_status = 0;
        }
    }
}
