//! Debounced digital input pin.

use embedded_hal::digital::InputPin;

use crate::clock::Clock;
use crate::config::DebounceConfig;
use crate::debounce::{DebounceState, Debouncer};
use crate::state::InputState;

/// An `InputPin` with its own debounce record.
///
/// Unlike the bare [`crate::debounce::evaluate`], the stable state is confirmed here as
/// soon as a change is debounced, so each settled change is reported exactly once.
pub struct DebouncedInput<P: InputPin, C: Clock> {
    /// Input pin
    pin: P,
    /// Debouncer
    debouncer: Debouncer<C>,
    /// Debounce record of the pin
    state: InputState<bool>,
    /// Pin active level
    low_active: bool,
}

impl<P: InputPin, C: Clock> DebouncedInput<P, C> {
    /// Create a debounced input, starting in the inactive state.
    pub fn new(pin: P, clock: C, config: DebounceConfig, low_active: bool) -> Self {
        Self {
            pin,
            debouncer: Debouncer::new(clock, config),
            state: InputState::new(false),
            low_active,
        }
    }

    /// Sample the pin once.
    ///
    /// `on_change` receives the new active state when a change is debounced. A failed pin
    /// read is returned as is and the debounce record stays untouched.
    pub fn poll<F: FnOnce(bool)>(&mut self, on_change: F) -> Result<DebounceState, P::Error> {
        let active = if self.low_active {
            self.pin.is_low()?
        } else {
            self.pin.is_high()?
        };

        let result = self.debouncer.evaluate(active, &mut self.state, || on_change(active));
        if let DebounceState::Debounced = result {
            self.state.confirm(active);
            info!("Input is now {}", if active { "active" } else { "inactive" });
        }
        Ok(result)
    }

    /// The last debounced state.
    pub fn is_active(&self) -> bool {
        self.state.stable_state()
    }

    pub fn state(&self) -> &InputState<bool> {
        &self.state
    }

    pub fn into_inner(self) -> P {
        self.pin
    }
}
