//! Monotonic millisecond time sources.

use embassy_time::Instant;

/// A monotonic millisecond counter.
///
/// The counter is allowed to wrap at `u32::MAX`, elapsed time is always computed with
/// wrapping subtraction.
pub trait Clock {
    /// Milliseconds since an arbitrary, fixed origin.
    fn now_ms(&self) -> u32;
}

/// Clock backed by the `embassy-time` driver of the target.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        // Truncating to u32 gives the same wraparound as a 32-bit millis() counter
        Instant::now().as_millis() as u32
    }
}

impl Clock for &EmbassyClock {
    fn now_ms(&self) -> u32 {
        EmbassyClock.now_ms()
    }
}

impl<F: Fn() -> u32> Clock for F {
    fn now_ms(&self) -> u32 {
        self()
    }
}
