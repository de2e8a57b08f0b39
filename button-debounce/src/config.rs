//! Debounce configuration.

use embassy_time::Duration;

/// Default debounce time in milliseconds
pub const DEBOUNCE_TIME_MS: u32 = 20;

/// Configuration for debouncing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DebounceConfig {
    /// Debounce time in ms
    ///
    /// The reading must stay unchanged for at least this long before it is reported.
    /// Zero reports every change on the poll that observes it.
    pub debounce_time: u32,
}

impl Default for DebounceConfig {
    fn default() -> Self {
        Self {
            debounce_time: DEBOUNCE_TIME_MS,
        }
    }
}

impl DebounceConfig {
    pub const fn new(debounce_time: u32) -> Self {
        Self { debounce_time }
    }

    /// Create a config from a `Duration`, saturating at `u32::MAX` milliseconds.
    pub fn from_duration(duration: Duration) -> Self {
        let ms = duration.as_millis();
        Self {
            debounce_time: u32::try_from(ms).unwrap_or(u32::MAX),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_debounce_time() {
        assert_eq!(DebounceConfig::default().debounce_time, 20);
    }

    #[test]
    fn test_from_duration() {
        assert_eq!(DebounceConfig::from_duration(Duration::from_millis(35)), DebounceConfig::new(35));
        // Sub-millisecond durations round down
        assert_eq!(DebounceConfig::from_duration(Duration::from_micros(900)).debounce_time, 0);
        assert_eq!(
            DebounceConfig::from_duration(Duration::from_secs(5_000_000)).debounce_time,
            u32::MAX
        );
    }
}
