//! Runtime-settable band ceilings.
//!
//! The three ceilings are written by the attribute boundary (any time) and
//! read by the thermal sample loop (timer-callback context, every firing).
//! Each ceiling is an `AtomicI32`, so a sample never observes a torn value
//! mid-update.  No cross-field consistency is enforced: the store accepts
//! any integers, including negative or non-monotonic triples — the
//! classifier is total over all of them.

use core::sync::atomic::{AtomicI32, Ordering};

use crate::config;

/// A point-in-time snapshot of the three ceilings (milli-degrees).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thresholds {
    /// GREEN band upper exclusive bound.
    pub green_ceiling: i32,
    /// YELLOW band upper exclusive bound.
    pub yellow_ceiling: i32,
    /// RED band upper exclusive bound.
    pub red_ceiling: i32,
}

/// Lock-free store for the three ceilings.
pub struct ThresholdStore {
    green: AtomicI32,
    yellow: AtomicI32,
    red: AtomicI32,
}

impl ThresholdStore {
    /// Construct with the firmware defaults (40/60/75 degrees).
    pub const fn new() -> Self {
        Self {
            green: AtomicI32::new(config::DEFAULT_GREEN_CEILING),
            yellow: AtomicI32::new(config::DEFAULT_YELLOW_CEILING),
            red: AtomicI32::new(config::DEFAULT_RED_CEILING),
        }
    }

    /// Snapshot all three ceilings.  Each field is individually atomic; a
    /// concurrent `set_*` is observed either entirely before or entirely
    /// after this load of that field.
    pub fn get(&self) -> Thresholds {
        Thresholds {
            green_ceiling: self.green.load(Ordering::Acquire),
            yellow_ceiling: self.yellow.load(Ordering::Acquire),
            red_ceiling: self.red.load(Ordering::Acquire),
        }
    }

    pub fn set_green(&self, v: i32) {
        self.green.store(v, Ordering::Release);
    }

    pub fn set_yellow(&self, v: i32) {
        self.yellow.store(v, Ordering::Release);
    }

    pub fn set_red(&self, v: i32) {
        self.red.store(v, Ordering::Release);
    }
}
