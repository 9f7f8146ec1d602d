//! Markdown rendering of a filtered, sorted file list.

use std::collections::BTreeMap;
use std::fmt::Display;

use chrono::{DateTime, TimeZone};

use super::icons::icon_for;
use super::labels::{Labels, labels};
use crate::settings::MapSettings;
use crate::vault::FileEntry;

/// Files sharing a parent folder. `folder` is `None` for the vault root.
#[derive(Debug, PartialEq, Eq)]
pub struct FolderGroup<'a> {
    pub folder: Option<&'a str>,
    pub files: Vec<&'a FileEntry>,
}

/// Partition files by parent folder: the root first, then folders in
/// ascending path order. Files keep their relative order within a group.
pub fn group_by_folder<'a>(files: &[&'a FileEntry]) -> Vec<FolderGroup<'a>> {
    let mut groups: BTreeMap<Option<&'a str>, Vec<&'a FileEntry>> = BTreeMap::new();
    for &file in files {
        groups.entry(file.parent_path.as_deref()).or_default().push(file);
    }
    groups.into_iter().map(|(folder, files)| FolderGroup { folder, files }).collect()
}

/// Renders the parts of a map document for one settings/time combination.
pub struct MapRenderer<'a, Tz: TimeZone> {
    settings: &'a MapSettings,
    labels: &'static Labels,
    now: &'a DateTime<Tz>,
}

impl<'a, Tz> MapRenderer<'a, Tz>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    pub fn new(settings: &'a MapSettings, now: &'a DateTime<Tz>) -> Self {
        Self { settings, labels: labels(settings.locale), now }
    }

    /// Title, generation time and, when enabled, the total count.
    pub fn header(&self, total: usize) -> String {
        let mut out = String::new();
        out.push_str(&format!("# {}\n\n", self.settings.map_file_name));
        out.push_str(&format!(
            "*{}: {}*\n\n",
            self.labels.generated,
            self.now.format(self.labels.datetime_format)
        ));
        if self.settings.show_file_count {
            out.push_str(&format!("**{}:** {}\n\n", self.labels.total_files, total));
        }
        out
    }

    /// One section per folder.
    pub fn grouped(&self, files: &[&FileEntry]) -> String {
        let mut out = String::new();

        for group in group_by_folder(files) {
            let folder = group.folder.unwrap_or(self.labels.root_folder);
            out.push_str(&format!("## 📁 {}\n\n", folder));

            if self.settings.show_file_count {
                out.push_str(&format!(
                    "*{}: {}*\n\n",
                    self.labels.folder_files,
                    group.files.len()
                ));
            }

            for file in &group.files {
                out.push_str(&self.entry(file));
            }
            out.push('\n');
        }

        out
    }

    /// A single section listing every file.
    pub fn flat(&self, files: &[&FileEntry]) -> String {
        let mut out = format!("## {}\n\n", self.labels.all_files);
        for file in files {
            out.push_str(&self.entry(file));
        }
        out
    }

    /// One bullet line, newline included.
    pub fn entry(&self, file: &FileEntry) -> String {
        let mut line = format!("- {} [[{}]]", icon_for(&file.extension), file.basename);

        if file.path != file.name {
            line.push_str(&format!(" *({})*", file.path));
        }

        if self.settings.show_last_modified
            && let Some(modified) =
                self.now.timezone().timestamp_millis_opt(file.modified_at).single()
        {
            line.push_str(&format!(
                " - *{}: {}*",
                self.labels.modified,
                modified.format(self.labels.date_format)
            ));
        }

        line.push('\n');
        line
    }
}
