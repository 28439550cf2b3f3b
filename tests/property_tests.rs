//! Property tests for the pure core: classification, thresholds, the
//! attribute parser, and the loopback buffer.
//!
//! Runs on host (x86_64) only — proptest is not available for ESP32
//! targets.  On ESP32, these tests are compiled out.

#![cfg(not(target_os = "espidf"))]

use proptest::prelude::*;
use thermoled::adapters::loopback::{LoopbackBuffer, LOOPBACK_CAPACITY};
use thermoled::adapters::threshold_attrs::{self, ThresholdAttr};
use thermoled::control::classify::{classify, Band, LineMode};
use thermoled::thresholds::{ThresholdStore, Thresholds};

fn arb_thresholds() -> impl Strategy<Value = Thresholds> {
    // Deliberately unconstrained: negative and non-monotonic triples are
    // legal inputs everywhere downstream of the attribute boundary.
    (any::<i32>(), any::<i32>(), any::<i32>()).prop_map(|(g, y, r)| Thresholds {
        green_ceiling: g,
        yellow_ceiling: y,
        red_ceiling: r,
    })
}

// ── Classifier totality and shape ─────────────────────────────

proptest! {
    /// The classifier is a strict top-to-bottom range test; spelling the
    /// same decision as a chain of guards must agree for every input.
    #[test]
    fn classifier_matches_sequential_reference(
        temp in any::<i32>(),
        t in arb_thresholds(),
    ) {
        let expected = if temp < t.green_ceiling {
            Band::Low
        } else if temp < t.yellow_ceiling {
            Band::Mid
        } else if temp < t.red_ceiling {
            Band::High
        } else {
            Band::Critical
        };
        prop_assert_eq!(classify(temp, &t), expected);
    }

    /// A temperature equal to any ceiling never lands in the band below
    /// that ceiling (strict `<`, ties go up).
    #[test]
    fn ceiling_ties_never_fall_below(t in arb_thresholds()) {
        prop_assert_ne!(classify(t.green_ceiling, &t), Band::Low);
        if t.yellow_ceiling >= t.green_ceiling {
            prop_assert_ne!(classify(t.yellow_ceiling, &t), Band::Mid);
        }
        if t.red_ceiling >= t.yellow_ceiling && t.red_ceiling >= t.green_ceiling {
            prop_assert_ne!(classify(t.red_ceiling, &t), Band::High);
        }
    }

    /// With monotonic ceilings the band is monotone in temperature.
    #[test]
    fn band_is_monotone_for_ordered_ceilings(
        a in any::<i32>(),
        b in any::<i32>(),
        g in -100_000i32..100_000,
        step_y in 1i32..50_000,
        step_r in 1i32..50_000,
    ) {
        let t = Thresholds {
            green_ceiling: g,
            yellow_ceiling: g + step_y,
            red_ceiling: g + step_y + step_r,
        };
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(classify(lo, &t) as u8 <= classify(hi, &t) as u8);
    }

    /// Every reachable band's pattern has exactly one blinking line.
    #[test]
    fn every_pattern_has_one_blinking_line(
        temp in any::<i32>(),
        t in arb_thresholds(),
    ) {
        let p = classify(temp, &t).pattern();
        let blinking = [p.red, p.yellow, p.green]
            .iter()
            .filter(|m| **m == LineMode::Blinking)
            .count();
        prop_assert_eq!(blinking, 1);
    }
}

// ── Attribute parser vs. the classifier it feeds ─────────────

proptest! {
    /// Any value the parser accepts round-trips through the store and is
    /// what the classifier subsequently sees.
    #[test]
    fn stored_attribute_is_observed_by_classification(
        v in any::<i32>(),
        temp in any::<i32>(),
    ) {
        let store = ThresholdStore::new();
        let text = format!("{v}\n");
        prop_assert_eq!(threshold_attrs::store(&store, ThresholdAttr::Green, &text), Ok(()));

        let t = store.get();
        prop_assert_eq!(t.green_ceiling, v);
        // LOW is the first guard, so it depends on the green ceiling alone.
        prop_assert_eq!(classify(temp, &t) == Band::Low, temp < v);
    }

    /// The parser accepts exactly what a leading optionally-signed decimal
    /// integer grammar accepts; rejected input leaves the store untouched.
    #[test]
    fn rejected_input_leaves_value_untouched(junk in "[^0-9+\\- \\t][^0-9]*") {
        let store = ThresholdStore::new();
        let before = store.get();
        prop_assert!(threshold_attrs::store(&store, ThresholdAttr::Red, &junk).is_err());
        prop_assert_eq!(store.get(), before);
    }

    /// Show/store round-trip for every attribute.
    #[test]
    fn show_store_round_trip(v in any::<i32>()) {
        let store = ThresholdStore::new();
        for attr in [ThresholdAttr::Green, ThresholdAttr::Yellow, ThresholdAttr::Red] {
            let text = format!("{v}");
            threshold_attrs::store(&store, attr, &text).expect("decimal input");
            let shown = threshold_attrs::show(&store, attr);
            prop_assert_eq!(shown.trim_end().parse::<i32>().ok(), Some(v));
        }
    }
}

// ── Loopback length invariants ────────────────────────────────

proptest! {
    /// Stored length is min(input, capacity); one read drains exactly that
    /// many bytes (bounded by the reader) and the second read drains none.
    #[test]
    fn loopback_length_invariants(
        data in proptest::collection::vec(any::<u8>(), 0..=LOOPBACK_CAPACITY + 64),
        reader_len in 0usize..=LOOPBACK_CAPACITY + 64,
    ) {
        let mut dev = LoopbackBuffer::new();
        let stored = dev.write(&data);
        prop_assert_eq!(stored, data.len().min(LOOPBACK_CAPACITY));

        let mut out = vec![0u8; reader_len];
        let read = dev.read(&mut out);
        prop_assert_eq!(read, stored.min(reader_len));
        prop_assert_eq!(&out[..read], &data[..read]);

        prop_assert_eq!(dev.read(&mut out), 0, "read-once: second read is empty");
    }

    /// A write always replaces the previous contents entirely.
    #[test]
    fn loopback_write_replaces_contents(
        first in proptest::collection::vec(any::<u8>(), 1..=64),
        second in proptest::collection::vec(any::<u8>(), 1..=64),
    ) {
        let mut dev = LoopbackBuffer::new();
        dev.write(&first);
        dev.write(&second);

        let mut out = [0u8; 128];
        let read = dev.read(&mut out);
        prop_assert_eq!(read, second.len());
        prop_assert_eq!(&out[..read], &second[..]);
    }
}
