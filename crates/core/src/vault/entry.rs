//! A single file in a vault snapshot.

use serde::Serialize;

/// One vault file, with everything map generation needs precomputed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    /// Slash-separated path relative to the vault root.
    pub path: String,
    /// Final path segment, extension included.
    pub name: String,
    /// Name without extension.
    pub basename: String,
    /// Lower-cased extension, empty when the name has none.
    pub extension: String,
    /// Containing folder, `None` for files at the vault root.
    pub parent_path: Option<String>,
    /// Modification time in epoch milliseconds.
    pub modified_at: i64,
    /// Creation time in epoch milliseconds.
    pub created_at: i64,
}

impl FileEntry {
    /// Build an entry from a vault-relative path, deriving the name parts.
    ///
    /// Backslashes are normalized to `/`. A leading dot does not start an
    /// extension, so `.gitignore` has basename `.gitignore` and no extension.
    pub fn new(path: &str, modified_at: i64, created_at: i64) -> Self {
        let path = path.replace('\\', "/").trim_matches('/').to_string();

        let (parent_path, name) = match path.rsplit_once('/') {
            Some((parent, name)) => (Some(parent.to_string()), name.to_string()),
            None => (None, path.clone()),
        };

        let (basename, extension) = match name.rfind('.') {
            Some(idx) if idx > 0 => {
                (name[..idx].to_string(), name[idx + 1..].to_lowercase())
            }
            _ => (name.clone(), String::new()),
        };

        Self { path, name, basename, extension, parent_path, modified_at, created_at }
    }

    /// Whether the file lives directly in the vault root.
    pub fn is_at_root(&self) -> bool {
        self.parent_path.is_none()
    }
}
