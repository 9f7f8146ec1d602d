//! Restartable fixed-period timer.

use std::time::{Duration, Instant};

/// Fires every `period` while running.
#[derive(Debug, Clone, Default)]
pub struct IntervalTimer {
    period: Option<Duration>,
    next: Option<Instant>,
}

impl IntervalTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// (Re)start with a new period; the first firing is one period from `now`.
    pub fn restart(&mut self, period: Duration, now: Instant) {
        self.period = Some(period);
        self.next = Some(now + period);
    }

    pub fn stop(&mut self) {
        self.period = None;
        self.next = None;
    }

    pub fn is_running(&self) -> bool {
        self.period.is_some()
    }

    pub fn period(&self) -> Option<Duration> {
        self.period
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.next
    }

    /// Returns `true` when a period has elapsed. Periods missed while the
    /// caller was busy collapse into this single firing.
    pub fn poll(&mut self, now: Instant) -> bool {
        let (Some(period), Some(next)) = (self.period, self.next) else {
            return false;
        };
        if now < next {
            return false;
        }

        let mut next = next;
        while next <= now {
            next += period;
        }
        self.next = Some(next);
        true
    }
}
