//! Reading and writing the map document inside the vault.

use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use thiserror::Error;

use super::{GeneratedMap, generate_map};
use crate::settings::MapSettings;
use crate::vault::{ScanError, VaultSnapshot};

#[derive(Debug, Error)]
pub enum MapError {
    #[error("Vault scan failed: {0}")]
    Scan(#[from] ScanError),

    #[error("Failed to write map {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// What happened to the map document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapAction {
    Created,
    Updated,
}

impl MapAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
        }
    }
}

/// Result of writing the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapOutcome {
    pub path: PathBuf,
    pub action: MapAction,
    /// Number of files listed in the map.
    pub files_listed: usize,
}

/// Where the map document lives for the given settings.
pub fn map_path(vault_root: &Path, settings: &MapSettings) -> PathBuf {
    vault_root.join(settings.map_document_name())
}

/// Find the existing map document. Anything other than a readable, regular
/// markdown file counts as absent.
pub fn lookup_map(vault_root: &Path, settings: &MapSettings) -> Option<PathBuf> {
    let path = map_path(vault_root, settings);
    let is_markdown = path.extension().is_some_and(|e| e == "md");

    match fs::metadata(&path) {
        Ok(meta) if meta.is_file() && is_markdown => Some(path),
        Ok(_) => None,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!("map lookup for {} failed: {}", path.display(), e);
            }
            None
        }
    }
}

/// Regenerate the map, modifying it in place or creating it when absent.
pub fn update_map<Tz>(
    vault_root: &Path,
    settings: &MapSettings,
    now: &DateTime<Tz>,
) -> Result<MapOutcome, MapError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match lookup_map(vault_root, settings) {
        Some(path) => write_map(vault_root, &path, settings, now, MapAction::Updated),
        None => create_map(vault_root, settings, now),
    }
}

/// Generate the map and write it, replacing any existing document.
pub fn create_map<Tz>(
    vault_root: &Path,
    settings: &MapSettings,
    now: &DateTime<Tz>,
) -> Result<MapOutcome, MapError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let path = map_path(vault_root, settings);
    write_map(vault_root, &path, settings, now, MapAction::Created)
}

fn write_map<Tz>(
    vault_root: &Path,
    path: &Path,
    settings: &MapSettings,
    now: &DateTime<Tz>,
    action: MapAction,
) -> Result<MapOutcome, MapError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let snapshot = VaultSnapshot::scan(vault_root)?;
    let GeneratedMap { content, files_listed } = generate_map(&snapshot.files, settings, now);

    let write_err =
        |e: std::io::Error| MapError::Write { path: path.display().to_string(), source: e };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }
    fs::write(path, content).map_err(write_err)?;

    tracing::info!(files = files_listed, "map {} at {}", action.as_str(), path.display());

    Ok(MapOutcome { path: path.to_path_buf(), action, files_listed })
}
