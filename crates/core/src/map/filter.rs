//! Selection of the files that appear in a map.

use crate::settings::MapSettings;
use crate::vault::FileEntry;

/// Extensions gated by `include_images`.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "svg", "webp"];

/// Keep the files the map should list, in their original order.
pub fn filter_files<'a>(files: &'a [FileEntry], settings: &MapSettings) -> Vec<&'a FileEntry> {
    let map_name = settings.map_document_name();
    files.iter().filter(|f| is_listed(f, settings, &map_name)).collect()
}

fn is_listed(file: &FileEntry, settings: &MapSettings, map_name: &str) -> bool {
    // The map never lists itself
    if file.name == map_name {
        return false;
    }

    if settings.exclude_folders.iter().any(|folder| is_under(&file.path, folder)) {
        return false;
    }

    let extension = file.extension.to_lowercase();
    if !settings.include_images && IMAGE_EXTENSIONS.contains(&extension.as_str()) {
        return false;
    }
    if !settings.include_pdfs && extension == "pdf" {
        return false;
    }

    true
}

/// `path` lies inside `folder`. Sharing a prefix without the separator
/// (`Archive2/x` against `Archive`) does not count.
pub fn is_under(path: &str, folder: &str) -> bool {
    path.strip_prefix(folder).is_some_and(|rest| rest.starts_with('/'))
}
