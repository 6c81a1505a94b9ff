//! Debouncing
//!
//! Holds the most recent value until it has been stable for the configured
//! delay. Time is passed in explicitly so the logic stays testable; views
//! drive `poll` from a `gpui` timer.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Store a value; replaces any pending one and restarts the deadline
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.delay));
    }

    /// Take the pending value if its deadline has passed
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, deadline)) if now >= *deadline => self.pending.take().map(|(v, _)| v),
            _ => None,
        }
    }

    /// Time left until the pending value settles
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|(_, deadline)| deadline.saturating_duration_since(now))
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_settles_after_delay() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        debouncer.push("re", start);

        assert_eq!(debouncer.poll(start + Duration::from_millis(299)), None);
        assert_eq!(debouncer.poll(start + Duration::from_millis(300)), Some("re"));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn test_push_restarts_deadline() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));
        debouncer.push("r", start);
        debouncer.push("re", start + Duration::from_millis(200));

        assert_eq!(debouncer.poll(start + Duration::from_millis(400)), None);
        assert_eq!(debouncer.poll(start + Duration::from_millis(500)), Some("re"));
    }

    #[test]
    fn test_zero_delay_settles_immediately() {
        let now = Instant::now();
        let mut debouncer = Debouncer::new(Duration::ZERO);
        debouncer.push(1, now);
        assert_eq!(debouncer.remaining(now), Some(Duration::ZERO));
        assert_eq!(debouncer.poll(now), Some(1));
    }
}
