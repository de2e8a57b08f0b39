//! Time based debouncing of a single digital input.
//!
//! The core is [`debounce::evaluate`]: called on every poll with the current raw reading
//! and a caller-owned [`InputState`], it fires a callback once the reading has stayed
//! unchanged for the debounce time and differs from the recorded stable state.
//! [`DebouncedInput`] wraps an `embedded-hal` input pin around it.
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod clock;
pub mod config;
pub mod debounce;
pub mod input;
pub mod state;

pub use clock::{Clock, EmbassyClock};
pub use config::{DEBOUNCE_TIME_MS, DebounceConfig};
pub use debounce::{DebounceState, Debouncer, evaluate, evaluate_at};
pub use input::DebouncedInput;
pub use state::InputState;
