//! Rate limiting for repetitive warnings.

use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// Lets one log line through per `interval`.
pub struct ThrottledLog {
    interval: Duration,
    last: Mutex<Option<Instant>>,
}

impl ThrottledLog {
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: Mutex::new(None),
        }
    }

    /// Returns `true` if the caller should emit its log line now.
    pub fn should_log(&self) -> bool {
        let now = Instant::now();
        let mut last = self.last.lock();
        match *last {
            Some(prev) if now.saturating_duration_since(prev) < self.interval => false,
            _ => {
                *last = Some(now);
                true
            }
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn first_call_logs_then_suppresses() {
        let throttle = ThrottledLog::new(Duration::from_secs(60));
        assert!(throttle.should_log());
        assert!(!throttle.should_log());
        assert!(!throttle.should_log());
    }

    #[test]
    fn zero_interval_never_suppresses() {
        let throttle = ThrottledLog::new(Duration::ZERO);
        assert!(throttle.should_log());
        assert!(throttle.should_log());
    }
}
