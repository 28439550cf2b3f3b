//! Fuzz target: threshold attribute store/show
//!
//! Drives arbitrary (possibly non-UTF-8-shaped, here lossy-decoded) text
//! through the attribute parser and asserts:
//! - No panics for any input
//! - Accepted input always leaves a value that `show` renders as a valid
//!   decimal integer with a trailing newline
//! - Rejected input never modifies the stored value
//!
//! cargo fuzz run fuzz_attr_parser

#![no_main]

use libfuzzer_sys::fuzz_target;
use thermoled::adapters::threshold_attrs::{show, store, ThresholdAttr};
use thermoled::thresholds::ThresholdStore;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    let thresholds = ThresholdStore::new();
    let attr = match data.first().copied().unwrap_or(0) % 3 {
        0 => ThresholdAttr::Green,
        1 => ThresholdAttr::Yellow,
        _ => ThresholdAttr::Red,
    };
    let before = thresholds.get();

    match store(&thresholds, attr, &text) {
        Ok(()) => {
            let shown = show(&thresholds, attr);
            assert!(shown.ends_with('\n'), "show always newline-terminates");
            assert!(
                shown.trim_end().parse::<i32>().is_ok(),
                "accepted input renders back as a decimal integer"
            );
        }
        Err(_) => {
            assert_eq!(thresholds.get(), before, "rejected input must not write");
        }
    }
});
