//! Sorting raw file system events into what the watcher cares about.

use std::path::{Component, Path, PathBuf};

use notify::event::ModifyKind;
use notify::{Event, EventKind};

use crate::settings::{MapSettings, STATE_DIR};

/// How the watcher reacts to an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventClass {
    /// A vault file or folder was created, removed or renamed.
    VaultChanged,
    /// The settings file was written, replaced or removed.
    SettingsChanged,
    Ignored,
}

/// Classifies events relative to one vault and settings file.
#[derive(Debug, Clone)]
pub struct EventClassifier {
    vault_root: PathBuf,
    settings_file: PathBuf,
    map_document: PathBuf,
}

impl EventClassifier {
    pub fn new(vault_root: &Path, settings_file: &Path, settings: &MapSettings) -> Self {
        Self {
            vault_root: vault_root.to_path_buf(),
            settings_file: settings_file.to_path_buf(),
            map_document: PathBuf::from(settings.map_document_name()),
        }
    }

    /// Follow a rename of the map document.
    pub fn set_map_document(&mut self, settings: &MapSettings) {
        self.map_document = PathBuf::from(settings.map_document_name());
    }

    pub fn classify(&self, event: &Event) -> EventClass {
        if matches!(event.kind, EventKind::Access(_)) {
            return EventClass::Ignored;
        }

        if event.paths.iter().any(|p| p == &self.settings_file) {
            return EventClass::SettingsChanged;
        }

        // Content edits do not change the map; only the set of files does
        let structural = matches!(
            event.kind,
            EventKind::Create(_) | EventKind::Remove(_) | EventKind::Modify(ModifyKind::Name(_))
        );
        if structural && event.paths.iter().any(|p| self.is_listed_path(p)) {
            return EventClass::VaultChanged;
        }

        EventClass::Ignored
    }

    fn is_listed_path(&self, path: &Path) -> bool {
        let Ok(relative) = path.strip_prefix(&self.vault_root) else {
            return false;
        };

        if relative == self.map_document {
            return false;
        }

        match relative.components().next() {
            Some(Component::Normal(first)) => first != ".git" && first != STATE_DIR,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notify::event::{AccessKind, CreateKind, DataChange, RemoveKind, RenameMode};

    fn classifier() -> EventClassifier {
        EventClassifier::new(
            Path::new("/vault"),
            Path::new("/vault/.vaultmap/settings.toml"),
            &MapSettings::default(),
        )
    }

    fn event(kind: EventKind, path: &str) -> Event {
        Event::new(kind).add_path(PathBuf::from(path))
    }

    #[test]
    fn test_structural_changes_are_vault_changes() {
        let c = classifier();
        let create = EventKind::Create(CreateKind::File);
        let remove = EventKind::Remove(RemoveKind::Folder);
        let rename = EventKind::Modify(ModifyKind::Name(RenameMode::Both));

        assert_eq!(c.classify(&event(create, "/vault/a.md")), EventClass::VaultChanged);
        assert_eq!(c.classify(&event(remove, "/vault/Old")), EventClass::VaultChanged);
        assert_eq!(c.classify(&event(rename, "/vault/x/b.md")), EventClass::VaultChanged);
    }

    #[test]
    fn test_content_edits_and_access_ignored() {
        let c = classifier();
        let write = EventKind::Modify(ModifyKind::Data(DataChange::Content));
        let access = EventKind::Access(AccessKind::Read);

        assert_eq!(c.classify(&event(write, "/vault/a.md")), EventClass::Ignored);
        assert_eq!(c.classify(&event(access, "/vault/a.md")), EventClass::Ignored);
    }

    #[test]
    fn test_own_files_ignored() {
        let c = classifier();
        let create = EventKind::Create(CreateKind::File);

        assert_eq!(c.classify(&event(create, "/vault/Vault Map.md")), EventClass::Ignored);
        assert_eq!(c.classify(&event(create, "/vault/.git/index")), EventClass::Ignored);
        assert_eq!(c.classify(&event(create, "/vault/.vaultmap/tmp")), EventClass::Ignored);
        assert_eq!(c.classify(&event(create, "/elsewhere/a.md")), EventClass::Ignored);
    }

    #[test]
    fn test_settings_file_changes() {
        let c = classifier();
        let write = EventKind::Modify(ModifyKind::Data(DataChange::Content));
        let remove = EventKind::Remove(RemoveKind::File);

        assert_eq!(
            c.classify(&event(write, "/vault/.vaultmap/settings.toml")),
            EventClass::SettingsChanged
        );
        assert_eq!(
            c.classify(&event(remove, "/vault/.vaultmap/settings.toml")),
            EventClass::SettingsChanged
        );
    }

    #[test]
    fn test_renamed_map_document_followed() {
        let mut c = classifier();
        let settings = MapSettings { map_file_name: "Index".into(), ..MapSettings::default() };
        c.set_map_document(&settings);
        let create = EventKind::Create(CreateKind::File);

        assert_eq!(c.classify(&event(create, "/vault/Index.md")), EventClass::Ignored);
        assert_eq!(c.classify(&event(create, "/vault/Vault Map.md")), EventClass::VaultChanged);
    }
}
