//! # Clock
//!
//! Timestamp sources for the `_aws.Timestamp` field

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of epoch millisecond timestamps, called once per payload
pub trait TimestampProvider: Send + Sync {
    fn current_timestamp_millis(&self) -> u64;
}

/// Wall clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimestampProvider for SystemClock {
    fn current_timestamp_millis(&self) -> u64 {
        // A clock set before 1970 reports the epoch rather than failing the metric
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or_default()
    }
}

/// Always the same timestamp, set via [Builder::with_timestamp](crate::Builder::with_timestamp)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub u64);

impl TimestampProvider for FixedClock {
    fn current_timestamp_millis(&self) -> u64 {
        self.0
    }
}

impl<T: TimestampProvider + ?Sized> TimestampProvider for Box<T> {
    fn current_timestamp_millis(&self) -> u64 {
        (**self).current_timestamp_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_after_2023() {
        assert!(SystemClock.current_timestamp_millis() > 1_672_531_200_000);
    }

    #[test]
    fn fixed_clock() {
        assert_eq!(FixedClock(1702425600000).current_timestamp_millis(), 1702425600000);
    }

    #[test]
    fn boxed_clocks_forward() {
        let clock: Box<dyn TimestampProvider> = Box::new(FixedClock(7));
        assert_eq!(clock.current_timestamp_millis(), 7);
    }
}
