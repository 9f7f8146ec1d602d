//! Quiet-period debouncing of vault change events.

use std::time::{Duration, Instant};

/// Quiet period after the last vault change before regenerating.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_secs(2);

/// Collapses a burst of triggers into one firing after a quiet period.
///
/// A trigger while a firing is pending moves the deadline instead of queueing
/// another firing.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self { delay, deadline: None }
    }

    /// Record an event at `now`, restarting the quiet period.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Fire at most once per quiet period. Returns `true` when due.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_idle_never_fires() {
        let mut d = Debouncer::default();
        let t0 = Instant::now();
        assert!(!d.poll(t0 + 10 * DEFAULT_DEBOUNCE));
    }

    #[test]
    fn test_fires_once_after_quiet_period() {
        let mut d = Debouncer::default();
        let t0 = Instant::now();

        d.trigger(t0);
        assert!(!d.poll(t0 + 1999 * MS));
        assert!(d.poll(t0 + 2000 * MS));
        assert!(!d.poll(t0 + 5000 * MS));
        assert!(!d.is_pending());
    }

    #[test]
    fn test_trigger_postpones_instead_of_queueing() {
        let mut d = Debouncer::default();
        let t0 = Instant::now();

        d.trigger(t0);
        d.trigger(t0 + 1500 * MS);
        assert!(!d.poll(t0 + 2000 * MS));
        assert_eq!(d.deadline(), Some(t0 + 3500 * MS));
        assert!(d.poll(t0 + 3500 * MS));
        assert!(!d.poll(t0 + 3600 * MS));
    }

    #[test]
    fn test_cancel() {
        let mut d = Debouncer::new(100 * MS);
        let t0 = Instant::now();
        d.trigger(t0);
        d.cancel();
        assert!(!d.poll(t0 + 200 * MS));
    }
}
