//! Integration tests: sample loop → shared state → blink loop → LED lines.

use thermoled::app::ports::{LedPort, SensorPort};
use thermoled::control::blinker::Blinker;
use thermoled::control::sampler::ThermalSampler;
use thermoled::control::state::IndicatorState;
use thermoled::control::{Band, LedColour};
use thermoled::error::SensorError;
use thermoled::thresholds::ThresholdStore;

// ── Mock implementations ──────────────────────────────────────

struct ScriptedSensor {
    readings: Vec<Result<i32, SensorError>>,
    next: usize,
}

impl ScriptedSensor {
    fn new(readings: Vec<Result<i32, SensorError>>) -> Self {
        Self { readings, next: 0 }
    }
}

impl SensorPort for ScriptedSensor {
    fn read_millidegrees(&mut self) -> Result<i32, SensorError> {
        let r = self.readings[self.next % self.readings.len()];
        self.next += 1;
        r
    }
}

#[derive(Default)]
struct RecordingLeds {
    levels: [bool; 3],
    writes: Vec<(LedColour, bool)>,
}

impl LedPort for RecordingLeds {
    fn set_line(&mut self, colour: LedColour, lit: bool) {
        self.levels[colour as usize] = lit;
        self.writes.push((colour, lit));
    }
}

// ── Warm-up ramp: GREEN → YELLOW → RED → RED (critical) ──────

#[test]
fn warming_ramp_retargets_the_blinking_line() {
    let thresholds = ThresholdStore::new();
    let state = IndicatorState::new();
    let sampler = ThermalSampler::new();
    let mut leds = RecordingLeds::default();
    let mut sensor = ScriptedSensor::new(vec![
        Ok(38_000),
        Ok(55_000),
        Ok(70_000),
        Ok(90_000),
    ]);

    let mut trace = Vec::new();
    for _ in 0..4 {
        let band = sampler.run_cycle(&mut sensor, &thresholds, &state, &mut leds);
        trace.push((band, state.active()));
    }

    assert_eq!(
        trace,
        [
            (Band::Low, LedColour::Green),
            (Band::Mid, LedColour::Yellow),
            (Band::High, LedColour::Red),
            (Band::Critical, LedColour::Red),
        ]
    );
    // Critical pattern holds yellow and green steady while red keeps
    // blinking.
    assert_eq!(leds.levels, [true, true, true]);
}

// ── Blink loop rides the line the sample loop publishes ──────

#[test]
fn blink_cycles_toggle_the_published_line_only() {
    let thresholds = ThresholdStore::new();
    let state = IndicatorState::new();
    let sampler = ThermalSampler::new();
    let blinker = Blinker::new(1, 10);
    let mut leds = RecordingLeds::default();
    let mut sensor = ScriptedSensor::new(vec![Ok(50_000)]); // MID → yellow

    sampler.run_cycle(&mut sensor, &thresholds, &state, &mut leds);
    leds.writes.clear();

    let delays: Vec<u32> = (0..6).map(|_| blinker.run_cycle(&state, &mut leds)).collect();

    // Sample cycle left the phase lit, so the first blink firing goes dark
    // for the long sub-period; thereafter the asymmetric cadence repeats.
    assert_eq!(delays, [10, 1, 10, 1, 10, 1]);
    for (colour, _) in &leds.writes {
        assert_eq!(*colour, LedColour::Yellow, "only the published line toggles");
    }
    // Green and red stay where the pattern put them.
    assert!(!leds.levels[LedColour::Green as usize]);
    assert!(!leds.levels[LedColour::Red as usize]);
}

#[test]
fn band_change_between_blink_firings_is_picked_up() {
    let thresholds = ThresholdStore::new();
    let state = IndicatorState::new();
    let sampler = ThermalSampler::new();
    let blinker = Blinker::new(1, 10);
    let mut leds = RecordingLeds::default();

    let mut cool = ScriptedSensor::new(vec![Ok(30_000)]);
    sampler.run_cycle(&mut cool, &thresholds, &state, &mut leds);
    let _ = blinker.run_cycle(&state, &mut leds); // green goes dark

    // Temperature jumps a band before the blink re-fires.
    let mut hot = ScriptedSensor::new(vec![Ok(70_000)]);
    sampler.run_cycle(&mut hot, &thresholds, &state, &mut leds);

    let _ = blinker.run_cycle(&state, &mut leds);
    assert_eq!(
        leds.writes.last(),
        Some(&(LedColour::Red, true)),
        "next firing toggles the newly published line"
    );
    // The sample cycle's full pattern rewrite already turned green off.
    assert!(!leds.levels[LedColour::Green as usize]);
}

// ── Sensor dropout: last-known-good, never a dark panel ──────

#[test]
fn sensor_dropout_keeps_classifying_the_stale_reading() {
    let thresholds = ThresholdStore::new();
    let state = IndicatorState::new();
    let sampler = ThermalSampler::new();
    let mut leds = RecordingLeds::default();
    let mut sensor = ScriptedSensor::new(vec![
        Ok(65_000),
        Err(SensorError::Unavailable),
        Err(SensorError::Unavailable),
        Ok(35_000),
    ]);

    assert_eq!(
        sampler.run_cycle(&mut sensor, &thresholds, &state, &mut leds),
        Band::High
    );
    for _ in 0..2 {
        assert_eq!(
            sampler.run_cycle(&mut sensor, &thresholds, &state, &mut leds),
            Band::High,
            "dropout cycles re-classify the stale reading"
        );
    }
    assert_eq!(sampler.last_reading(), 65_000);

    // Recovery is just the next successful periodic read.
    assert_eq!(
        sampler.run_cycle(&mut sensor, &thresholds, &state, &mut leds),
        Band::Low
    );
    assert_eq!(state.active(), LedColour::Green);
}

// ── Threshold writes take effect on the next sample cycle ────

#[test]
fn threshold_write_reclassifies_from_next_cycle() {
    let thresholds = ThresholdStore::new();
    let state = IndicatorState::new();
    let sampler = ThermalSampler::new();
    let mut leds = RecordingLeds::default();
    let mut sensor = ScriptedSensor::new(vec![Ok(50_000)]);

    assert_eq!(
        sampler.run_cycle(&mut sensor, &thresholds, &state, &mut leds),
        Band::Mid
    );

    // Raise the green ceiling above the current temperature, the way the
    // attribute surface would.
    thermoled::adapters::threshold_attrs::store(
        &thresholds,
        thermoled::adapters::threshold_attrs::ThresholdAttr::Green,
        "52000\n",
    )
    .expect("decimal input");

    assert_eq!(
        sampler.run_cycle(&mut sensor, &thresholds, &state, &mut leds),
        Band::Low,
        "new ceiling applies on the very next cycle"
    );
    assert_eq!(state.active(), LedColour::Green);
}

// ── Simulated hardware path end to end ───────────────────────

// The sim sensor and sim LED lines are process-global statics, so exactly
// one test goes through them.
#[test]
fn sim_hardware_path_end_to_end() {
    use thermoled::drivers::led_array::{sim_line, LedArray};
    use thermoled::sensors::cpu_temp::{sim_set_millidegrees, CpuTempSensor};

    // Lines power up asserted (boot indication).
    for colour in LedColour::ALL {
        assert!(sim_line(colour), "{:?} line starts high", colour);
    }

    let thresholds = ThresholdStore::new();
    let state = IndicatorState::new();
    let sampler = ThermalSampler::new();
    let blinker = Blinker::new(1, 10);
    let mut sensor = CpuTempSensor::new();
    let mut leds = LedArray::new();

    sim_set_millidegrees(38_000);
    assert_eq!(
        sampler.run_cycle(&mut sensor, &thresholds, &state, &mut leds),
        Band::Low
    );
    assert!(sim_line(LedColour::Green));
    assert!(!sim_line(LedColour::Yellow));
    assert!(!sim_line(LedColour::Red));

    // One full blink alternation on the green line.
    assert_eq!(blinker.run_cycle(&state, &mut leds), 10);
    assert!(!sim_line(LedColour::Green));
    assert_eq!(blinker.run_cycle(&state, &mut leds), 1);
    assert!(sim_line(LedColour::Green));

    sim_set_millidegrees(80_000);
    assert_eq!(
        sampler.run_cycle(&mut sensor, &thresholds, &state, &mut leds),
        Band::Critical
    );
    assert!(sim_line(LedColour::Green));
    assert!(sim_line(LedColour::Yellow));
    assert!(sim_line(LedColour::Red));
}
