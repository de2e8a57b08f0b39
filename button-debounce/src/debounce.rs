//! Time based debouncing of a single input.
//!
//! A reading is reported once it has stayed unchanged for the debounce time. Each call
//! restarts the timer when the raw reading differs from the previous call's, and fires
//! the change callback when the timer has expired and the reading differs from the
//! stable state of the record.

use crate::clock::Clock;
use crate::config::DebounceConfig;
use crate::state::InputState;

/// Debounce state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DebounceState {
    /// The callback was fired in this call
    Debounced,
    /// The reading changed recently, the timer is still running
    InProgress,
    /// The reading is settled and equals the stable state
    Ignored,
}

/// Debounce `reading` against `state`, reading the current time from `clock`.
pub fn evaluate<R, C, F>(clock: &C, reading: R, state: &mut InputState<R>, delay_ms: u32, on_change: F) -> DebounceState
where
    R: Copy + PartialEq,
    C: Clock,
    F: FnOnce(),
{
    evaluate_at(clock.now_ms(), reading, state, delay_ms, on_change)
}

/// Same as [`evaluate`], with the current time `now` in ms given by the caller.
pub fn evaluate_at<R, F>(now: u32, reading: R, state: &mut InputState<R>, delay_ms: u32, on_change: F) -> DebounceState
where
    R: Copy + PartialEq,
    F: FnOnce(),
{
    if reading != state.last_raw_reading {
        // Raw reading changed, restart the timer
        trace!("Raw reading changed at {}ms", now);
        state.last_transition = now;
    }
    state.last_raw_reading = reading;

    let elapsed = now.wrapping_sub(state.last_transition);
    if elapsed < delay_ms {
        return DebounceState::InProgress;
    }

    if reading != state.stable_state {
        debug!("Debounced after {}ms", elapsed);
        on_change();
        DebounceState::Debounced
    } else {
        DebounceState::Ignored
    }
}

/// A clock together with the debounce time.
///
/// The debouncer holds no per-input state, the same instance can drive any number of
/// [`InputState`] records.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer<C: Clock> {
    clock: C,
    config: DebounceConfig,
}

impl<C: Clock> Debouncer<C> {
    pub fn new(clock: C, config: DebounceConfig) -> Self {
        Self { clock, config }
    }

    pub fn config(&self) -> &DebounceConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Debounce `reading` against `state`, see [`evaluate`].
    pub fn evaluate<R, F>(&self, reading: R, state: &mut InputState<R>, on_change: F) -> DebounceState
    where
        R: Copy + PartialEq,
        F: FnOnce(),
    {
        evaluate(&self.clock, reading, state, self.config.debounce_time, on_change)
    }
}
