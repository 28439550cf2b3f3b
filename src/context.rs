//! Process-wide indicator context.
//!
//! One explicitly constructed object bundling every piece of state the two
//! timer callbacks and the main loop share: threshold ceilings, the
//! active-line/phase record, the sampler, and the blinker.  Everything
//! inside is interior-atomic and const-constructible, so the single
//! [`CONTEXT`] instance can be referenced from `extern "C"` timer
//! callbacks without locks.  Components receive `&IndicatorContext` (or a
//! field of it) as a parameter; tests construct their own instances.
//!
//! Lifecycle: initialised before the timers are armed; at shutdown the
//! timers are disarmed and joined first, then the peripherals released —
//! the context itself has no teardown.

use crate::config;
use crate::control::blinker::Blinker;
use crate::control::sampler::ThermalSampler;
use crate::control::state::IndicatorState;
use crate::thresholds::ThresholdStore;

/// Shared state of the indicator firmware.
pub struct IndicatorContext {
    /// Band ceilings, written by the attribute boundary.
    pub thresholds: ThresholdStore,
    /// Active-line / phase record shared by both loops.
    pub state: IndicatorState,
    /// The thermal sample cycle.
    pub sampler: ThermalSampler,
    /// The blink cycle (asymmetric 1 ms / 10 ms cadence).
    pub blinker: Blinker,
}

impl IndicatorContext {
    pub const fn new() -> Self {
        Self {
            thresholds: ThresholdStore::new(),
            state: IndicatorState::new(),
            sampler: ThermalSampler::new(),
            blinker: Blinker::new(config::BLINK_ON_MS, config::BLINK_OFF_MS),
        }
    }
}

/// The one live context, shared by the timer callbacks and the main loop.
pub static CONTEXT: IndicatorContext = IndicatorContext::new();
