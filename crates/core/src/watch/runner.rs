//! The watch loop: events in, at most one regeneration at a time out.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Instant;

use chrono::Local;
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use thiserror::Error;

use super::events::{EventClass, EventClassifier};
use crate::map::{MapError, MapOutcome, update_map};
use crate::schedule::{Scheduler, Trigger};
use crate::settings::{MapSettings, SettingsStore};

#[derive(Debug, Error)]
pub enum WatchError {
    #[error("File watcher error: {0}")]
    Notify(#[from] notify::Error),

    #[error("File watcher stopped delivering events")]
    Disconnected,
}

/// Keeps a vault's map current until the event source goes away.
pub struct VaultWatcher {
    vault_root: PathBuf,
    settings_file: PathBuf,
    store: SettingsStore,
    settings: MapSettings,
    scheduler: Scheduler,
    classifier: EventClassifier,
}

impl VaultWatcher {
    pub fn new(vault_root: &Path, store: SettingsStore, now: Instant) -> Self {
        // Event paths are reported canonicalized on some platforms
        let root = vault_root.canonicalize().unwrap_or_else(|_| vault_root.to_path_buf());
        let settings_file = match store.path().strip_prefix(vault_root) {
            Ok(relative) => root.join(relative),
            Err(_) => canonical_file(store.path()),
        };

        let settings = store.load();
        let scheduler = Scheduler::new(&settings, now);
        let classifier = EventClassifier::new(&root, &settings_file, &settings);

        Self { vault_root: root, settings_file, store, settings, scheduler, classifier }
    }

    pub fn settings(&self) -> &MapSettings {
        &self.settings
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// React to one file system event.
    pub fn handle_event(&mut self, event: &Event, now: Instant) -> EventClass {
        let class = self.classifier.classify(event);
        match class {
            EventClass::VaultChanged => {
                tracing::debug!(kind = ?event.kind, paths = ?event.paths, "vault changed");
                self.scheduler.on_vault_changed(now);
            }
            EventClass::SettingsChanged => self.reload_settings(now),
            EventClass::Ignored => {}
        }
        class
    }

    /// Re-read the settings file and reschedule.
    pub fn reload_settings(&mut self, now: Instant) {
        let settings = self.store.load();
        if settings != self.settings {
            tracing::info!("settings changed, rescheduling");
        }
        self.scheduler.on_settings_changed(&settings, now);
        self.classifier.set_map_document(&settings);
        self.settings = settings;
    }

    /// The regeneration due at `now`, if any.
    pub fn due(&mut self, now: Instant) -> Option<Trigger> {
        self.scheduler.poll(now)
    }

    /// Regenerate the map with the current settings.
    pub fn regenerate(&self) -> Result<MapOutcome, MapError> {
        update_map(&self.vault_root, &self.settings, &Local::now())
    }

    /// Subscribe to the vault and process events until the watcher stops.
    pub fn run(mut self) -> Result<(), WatchError> {
        let (tx, rx) = mpsc::channel();
        let mut watcher = RecommendedWatcher::new(tx, notify::Config::default())?;
        watcher.watch(&self.vault_root, RecursiveMode::Recursive)?;

        // A settings file kept outside the vault needs its own subscription
        if !self.settings_file.starts_with(&self.vault_root)
            && let Some(dir) = self.settings_file.parent()
            && dir.is_dir()
        {
            watcher.watch(dir, RecursiveMode::NonRecursive)?;
        }

        tracing::info!(
            auto_update = self.settings.auto_update,
            interval = self.settings.update_interval,
            "watching {}",
            self.vault_root.display()
        );

        loop {
            match self.next_event(&rx) {
                Ok(Ok(event)) => {
                    self.handle_event(&event, Instant::now());
                }
                Ok(Err(e)) => tracing::warn!("watch error: {}", e),
                Err(RecvTimeoutError::Timeout) => {}
                Err(RecvTimeoutError::Disconnected) => return Err(WatchError::Disconnected),
            }

            if let Some(trigger) = self.due(Instant::now()) {
                self.run_update(trigger);
            }
        }
    }

    /// Wait for the next event, but no longer than the next scheduled firing.
    fn next_event(
        &self,
        rx: &Receiver<notify::Result<Event>>,
    ) -> Result<notify::Result<Event>, RecvTimeoutError> {
        match self.scheduler.next_deadline() {
            Some(deadline) => {
                rx.recv_timeout(deadline.saturating_duration_since(Instant::now()))
            }
            None => rx.recv().map_err(|_| RecvTimeoutError::Disconnected),
        }
    }

    fn run_update(&self, trigger: Trigger) {
        match self.regenerate() {
            Ok(outcome) => tracing::info!(
                ?trigger,
                files = outcome.files_listed,
                "map {} at {}",
                outcome.action.as_str(),
                outcome.path.display()
            ),
            Err(e) => tracing::error!(?trigger, "Failed to update map: {}", e),
        }
    }
}

/// Canonicalize a file that may not exist yet by canonicalizing its parent.
fn canonical_file(path: &Path) -> PathBuf {
    if let Ok(p) = path.canonicalize() {
        return p;
    }
    match (path.parent().and_then(|p| p.canonicalize().ok()), path.file_name()) {
        (Some(parent), Some(name)) => parent.join(name),
        _ => path.to_path_buf(),
    }
}
