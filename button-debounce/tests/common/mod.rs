use core::cell::Cell;

use button_debounce::{DebounceState, Debouncer, InputState};

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

#[derive(Debug, Clone, Copy)]
pub struct TestReading {
    pub time: u32,
    pub reading: bool,
}

/// Feed `sequence` through the debouncer, confirming each reported change like a caller would.
///
/// Returns the times at which the change callback fired.
pub fn run_reading_sequence(delay_ms: u32, sequence: &[TestReading]) -> Vec<u32> {
    let now = Cell::new(0u32);
    let debouncer = Debouncer::new(|| now.get(), button_debounce::DebounceConfig::new(delay_ms));
    let mut state = InputState::new(false);
    let mut fired_at = Vec::new();

    for step in sequence {
        now.set(step.time);
        let mut fired = false;
        let result = debouncer.evaluate(step.reading, &mut state, || fired = true);
        assert_eq!(fired, result == DebounceState::Debounced);
        if fired {
            fired_at.push(step.time);
            state.confirm(step.reading);
        }
    }
    fired_at
}

/// Poll `reading` every millisecond in `from..to`.
pub fn hold(reading: bool, from: u32, to: u32) -> impl Iterator<Item = TestReading> {
    (from..to).map(move |time| TestReading { time, reading })
}
