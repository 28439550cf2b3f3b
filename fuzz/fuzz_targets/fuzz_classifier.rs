//! Fuzz target: `classify` over arbitrary temperatures and ceilings
//!
//! Feeds arbitrary `(temp, green, yellow, red)` quadruples — including
//! negative, extreme, and non-monotonic ceilings — and asserts:
//! - No panics for any input
//! - The result matches the strict top-to-bottom range test
//! - Every resulting pattern has exactly one blinking line
//!
//! cargo fuzz run fuzz_classifier

#![no_main]

use libfuzzer_sys::fuzz_target;
use thermoled::control::classify::{classify, Band, LineMode};
use thermoled::thresholds::Thresholds;

fuzz_target!(|data: &[u8]| {
    if data.len() < 16 {
        return;
    }

    let word = |i: usize| i32::from_le_bytes(data[i..i + 4].try_into().unwrap());
    let temp = word(0);
    let t = Thresholds {
        green_ceiling: word(4),
        yellow_ceiling: word(8),
        red_ceiling: word(12),
    };

    let band = classify(temp, &t);

    let expected = if temp < t.green_ceiling {
        Band::Low
    } else if temp < t.yellow_ceiling {
        Band::Mid
    } else if temp < t.red_ceiling {
        Band::High
    } else {
        Band::Critical
    };
    assert_eq!(band, expected, "first-match-wins evaluation order");

    let p = band.pattern();
    let blinking = [p.red, p.yellow, p.green]
        .iter()
        .filter(|m| **m == LineMode::Blinking)
        .count();
    assert_eq!(blinking, 1, "exactly one blinking line per band");
});
