//! Combined regeneration schedule.

use std::time::{Duration, Instant};

use super::debounce::Debouncer;
use super::interval::IntervalTimer;
use crate::settings::MapSettings;

/// Why a regeneration is due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The vault went quiet after changes.
    Debounced,
    /// The recurring update interval elapsed.
    Interval,
}

/// Owns the change debouncer and the recurring update timer.
#[derive(Debug)]
pub struct Scheduler {
    auto_update: bool,
    debouncer: Debouncer,
    interval: IntervalTimer,
}

impl Scheduler {
    pub fn new(settings: &MapSettings, now: Instant) -> Self {
        Self::with_debounce(settings, Debouncer::default().delay(), now)
    }

    pub fn with_debounce(settings: &MapSettings, debounce: Duration, now: Instant) -> Self {
        let mut scheduler = Self {
            auto_update: settings.auto_update,
            debouncer: Debouncer::new(debounce),
            interval: IntervalTimer::new(),
        };
        scheduler.on_settings_changed(settings, now);
        scheduler
    }

    /// A file was created, deleted or renamed. Ignored unless auto-update is on.
    pub fn on_vault_changed(&mut self, now: Instant) {
        if self.auto_update {
            self.debouncer.trigger(now);
        }
    }

    /// Tear down the recurring timer and restart it from the new settings.
    pub fn on_settings_changed(&mut self, settings: &MapSettings, now: Instant) {
        self.auto_update = settings.auto_update;
        self.interval.stop();

        if self.auto_update {
            self.interval.restart(settings.update_period(), now);
            tracing::debug!(minutes = settings.update_interval, "interval timer restarted");
        } else {
            self.debouncer.cancel();
            tracing::debug!("auto-update disabled, timers stopped");
        }
    }

    /// The next regeneration that is due, if any. When the debounce and the
    /// interval are due together a single trigger covers both.
    pub fn poll(&mut self, now: Instant) -> Option<Trigger> {
        let debounced = self.debouncer.poll(now);
        let interval = self.interval.poll(now);

        match (debounced, interval) {
            (true, _) => Some(Trigger::Debounced),
            (false, true) => Some(Trigger::Interval),
            (false, false) => None,
        }
    }

    /// Earliest moment something may become due.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.debouncer.deadline(), self.interval.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn auto_update(&self) -> bool {
        self.auto_update
    }

    pub fn interval_period(&self) -> Option<Duration> {
        self.interval.period()
    }
}
