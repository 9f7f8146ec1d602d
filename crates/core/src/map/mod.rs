//! Map document generation.
//!
//! The pipeline is pure: filter the snapshot, sort what is left, then render
//! either one section per folder or a single flat list. The same files,
//! settings and timestamp always produce the same text.
//!
//! # Example
//!
//! ```
//! use chrono::{FixedOffset, TimeZone};
//! use vaultmap_core::map::generate_map_content;
//! use vaultmap_core::settings::MapSettings;
//! use vaultmap_core::vault::FileEntry;
//!
//! let files = vec![FileEntry::new("Inbox.md", 0, 0)];
//! let now = FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
//!
//! let text = generate_map_content(&files, &MapSettings::default(), &now);
//! assert!(text.starts_with("# Vault Map\n"));
//! assert!(text.contains("- 📝 [[Inbox]]\n"));
//! ```

pub mod document;
pub mod filter;
pub mod icons;
pub mod labels;
pub mod render;
pub mod sort;

use std::fmt::Display;

use chrono::{DateTime, TimeZone};

use crate::settings::MapSettings;
use crate::vault::FileEntry;

pub use document::{
    MapAction, MapError, MapOutcome, create_map, lookup_map, map_path, update_map,
};
pub use filter::{IMAGE_EXTENSIONS, filter_files, is_under};
pub use icons::{DEFAULT_ICON, FILE_ICONS, icon_for};
pub use render::{FolderGroup, MapRenderer, group_by_folder};
pub use sort::{compare_names, sort_files};

/// A rendered map document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMap {
    pub content: String,
    /// Number of files that passed filtering and appear in `content`.
    pub files_listed: usize,
}

/// Filter, sort and render `files` into a map document.
pub fn generate_map<Tz>(
    files: &[FileEntry],
    settings: &MapSettings,
    now: &DateTime<Tz>,
) -> GeneratedMap
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut listed = filter_files(files, settings);
    sort_files(&mut listed, settings.sort_by);

    let renderer = MapRenderer::new(settings, now);
    let mut content = renderer.header(listed.len());

    if settings.group_by_folder {
        content.push_str(&renderer.grouped(&listed));
    } else {
        content.push_str(&renderer.flat(&listed));
    }

    GeneratedMap { content, files_listed: listed.len() }
}

/// Produce the full text of the map document.
pub fn generate_map_content<Tz>(
    files: &[FileEntry],
    settings: &MapSettings,
    now: &DateTime<Tz>,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    generate_map(files, settings, now).content
}
