//! Settings persistence.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::types::{
    Locale, MapSettings, PartialSettings, SortBy, is_vault_relative, merge_with_defaults,
    normalize_folders,
};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to write settings file {0}: {1}")]
    WriteError(String, #[source] std::io::Error),

    #[error("failed to serialize settings: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("unknown setting '{0}' (expected one of: {keys})", keys = MapSettings::KEYS.join(", "))]
    UnknownKey(String),

    #[error("invalid value '{value}' for {key}: {reason}")]
    InvalidValue { key: String, value: String, reason: String },
}

type Result<T> = std::result::Result<T, SettingsError>;

/// Settings stored as a TOML file.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings merged over the defaults. Never fails: a missing file
    /// yields the defaults, and an unreadable one is logged and ignored.
    pub fn load(&self) -> MapSettings {
        merge_with_defaults(self.load_partial())
    }

    fn load_partial(&self) -> PartialSettings {
        let content = match fs::read_to_string(&self.path) {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no settings at {}, using defaults", self.path.display());
                return PartialSettings::default();
            }
            Err(e) => {
                tracing::warn!("Failed to read settings {}: {}", self.path.display(), e);
                return PartialSettings::default();
            }
        };

        toml::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!("Failed to parse settings {}: {}", self.path.display(), e);
            PartialSettings::default()
        })
    }

    /// Persist the full settings object.
    pub fn save(&self, settings: &MapSettings) -> Result<()> {
        let content = toml::to_string_pretty(settings)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| SettingsError::WriteError(parent.display().to_string(), e))?;
        }
        fs::write(&self.path, content)
            .map_err(|e| SettingsError::WriteError(self.path.display().to_string(), e))?;

        tracing::debug!("saved settings to {}", self.path.display());
        Ok(())
    }

    /// Change one setting and persist the result immediately.
    pub fn set(&self, key: &str, value: &str) -> Result<MapSettings> {
        let mut settings = self.load();
        apply_edit(&mut settings, key, value)?;
        self.save(&settings)?;
        tracing::info!("setting {} = {}", key, value);
        Ok(settings)
    }

    /// Overwrite the stored settings with the defaults.
    pub fn reset(&self) -> Result<MapSettings> {
        let settings = MapSettings::default();
        self.save(&settings)?;
        Ok(settings)
    }
}

/// Apply a user edit given as text. Unlike stored values, bad input is an error.
pub fn apply_edit(settings: &mut MapSettings, key: &str, value: &str) -> Result<()> {
    let invalid = |reason: &str| SettingsError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let boolean = || parse_bool(value).ok_or_else(|| invalid("expected a boolean"));

    match key {
        "map_file_name" => {
            let name = value.trim();
            if name.is_empty() {
                return Err(invalid("name must not be empty"));
            }
            if !is_vault_relative(name) {
                return Err(invalid("name must be a path inside the vault"));
            }
            settings.map_file_name = name.to_string();
        }
        "auto_update" => settings.auto_update = boolean()?,
        "update_interval" => {
            let minutes: u32 =
                value.trim().parse().map_err(|_| invalid("expected whole minutes"))?;
            if !MapSettings::INTERVAL_RANGE.contains(&minutes) {
                return Err(invalid("expected 1 to 60 minutes"));
            }
            settings.update_interval = minutes;
        }
        "include_images" => settings.include_images = boolean()?,
        "include_pdfs" => settings.include_pdfs = boolean()?,
        "exclude_folders" => settings.exclude_folders = normalize_folders(value.split(',')),
        "sort_by" => {
            settings.sort_by = SortBy::parse(value)
                .ok_or_else(|| invalid("expected name, modified or created"))?;
        }
        "group_by_folder" => settings.group_by_folder = boolean()?,
        "show_file_count" => settings.show_file_count = boolean()?,
        "show_last_modified" => settings.show_last_modified = boolean()?,
        "locale" => {
            settings.locale = Locale::parse(value).ok_or_else(|| invalid("expected en or ru"))?;
        }
        other => return Err(SettingsError::UnknownKey(other.to_string())),
    }

    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
