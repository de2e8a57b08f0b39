//! Caller-owned debounce record.

/// Debounce record of a single input, owned by the caller.
///
/// The record is only read and written through [`crate::debounce::evaluate`] and
/// [`InputState::confirm`]; one record per monitored input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InputState<R = bool> {
    /// Raw reading seen on the previous poll
    pub(crate) last_raw_reading: R,
    /// Last confirmed reading
    pub(crate) stable_state: R,
    /// Timestamp in ms of the last raw reading change
    pub(crate) last_transition: u32,
}

impl<R: Copy + PartialEq> InputState<R> {
    /// Create a record whose raw and stable readings are both `initial`, with the timer at 0.
    pub const fn new(initial: R) -> Self {
        Self {
            last_raw_reading: initial,
            stable_state: initial,
            last_transition: 0,
        }
    }

    pub fn last_raw_reading(&self) -> R {
        self.last_raw_reading
    }

    pub fn stable_state(&self) -> R {
        self.stable_state
    }

    pub fn last_transition(&self) -> u32 {
        self.last_transition
    }

    /// Record `reading` as the new stable state.
    ///
    /// The debounce operation itself never does this. Call it from, or right after,
    /// the change callback.
    pub fn confirm(&mut self, reading: R) {
        self.stable_state = reading;
    }
}

impl<R: Copy + PartialEq + Default> Default for InputState<R> {
    fn default() -> Self {
        Self::new(R::default())
    }
}
