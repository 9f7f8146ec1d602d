//! Recursive vault directory walker.

use std::fs::Metadata;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use thiserror::Error;
use walkdir::{DirEntry, WalkDir};

use super::entry::FileEntry;
use crate::settings::STATE_DIR;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("vault root does not exist: {0}")]
    MissingRoot(String),

    #[error("failed to walk vault directory {0}: {1}")]
    WalkError(String, #[source] walkdir::Error),

    #[error("failed to read file metadata {0}: {1}")]
    MetadataError(String, #[source] std::io::Error),
}

/// Directories that are never part of a vault listing.
const ALWAYS_SKIPPED: &[&str] = &[".git", STATE_DIR];

/// Read-only view of a vault's files and folders at one point in time.
#[derive(Debug, Clone, Default)]
pub struct VaultSnapshot {
    /// All files, sorted by path.
    pub files: Vec<FileEntry>,
    /// All folder paths below the root, sorted.
    pub folders: Vec<String>,
}

impl VaultSnapshot {
    /// Walk `root` and collect every file and folder.
    ///
    /// Hidden entries are reported like any other; folder exclusion is left
    /// to map generation so that it follows the user's settings.
    pub fn scan(root: &Path) -> Result<Self, ScanError> {
        let root = root
            .canonicalize()
            .map_err(|_| ScanError::MissingRoot(root.display().to_string()))?;

        if !root.is_dir() {
            return Err(ScanError::MissingRoot(root.display().to_string()));
        }

        let mut snapshot = Self::default();

        for entry in WalkDir::new(&root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| !is_skipped(e))
        {
            let entry =
                entry.map_err(|e| ScanError::WalkError(root.display().to_string(), e))?;
            if entry.depth() == 0 {
                continue;
            }

            let relative = relative_path(&root, entry.path());

            if entry.file_type().is_dir() {
                snapshot.folders.push(relative);
                continue;
            }

            let metadata = entry.metadata().map_err(|e| {
                ScanError::MetadataError(
                    entry.path().display().to_string(),
                    std::io::Error::other(e),
                )
            })?;
            let (modified_at, created_at) = timestamps(&metadata);

            snapshot.files.push(FileEntry::new(&relative, modified_at, created_at));
        }

        snapshot.files.sort_by(|a, b| a.path.cmp(&b.path));
        snapshot.folders.sort();

        tracing::debug!(
            files = snapshot.files.len(),
            folders = snapshot.folders.len(),
            "scanned vault {}",
            root.display()
        );

        Ok(snapshot)
    }
}

fn is_skipped(entry: &DirEntry) -> bool {
    // Never filter the root directory (depth 0)
    if entry.depth() == 0 {
        return false;
    }
    entry.file_type().is_dir()
        && ALWAYS_SKIPPED.contains(&entry.file_name().to_string_lossy().as_ref())
}

fn relative_path(root: &Path, path: &Path) -> String {
    let relative: PathBuf = path.strip_prefix(root).unwrap_or(path).to_path_buf();
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Modification and creation times in epoch milliseconds. Platforms without
/// a birth time report the modification time for both.
fn timestamps(metadata: &Metadata) -> (i64, i64) {
    let modified = metadata.modified().map(epoch_millis).unwrap_or(0);
    let created = metadata.created().map(epoch_millis).unwrap_or(modified);
    (modified, created)
}

fn epoch_millis(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(d) => i64::try_from(d.as_millis()).unwrap_or(i64::MAX),
        Err(e) => -i64::try_from(e.duration().as_millis()).unwrap_or(i64::MAX),
    }
}
