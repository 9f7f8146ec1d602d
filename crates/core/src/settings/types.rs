use std::fmt;
use std::path::{Component, Path};
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Sort key for map entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    /// Ascending by basename.
    #[default]
    Name,
    /// Most recently modified first.
    Modified,
    /// Most recently created first.
    Created,
}

impl SortBy {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "name" => Some(Self::Name),
            "modified" | "mtime" => Some(Self::Modified),
            "created" | "ctime" => Some(Self::Created),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Modified => "modified",
            Self::Created => "created",
        }
    }
}

/// Language of the labels and dates written into the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" | "en-us" | "english" => Some(Self::En),
            "ru" | "ru-ru" | "russian" => Some(Self::Ru),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
        }
    }
}

/// Fully resolved settings for one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MapSettings {
    /// Name of the generated document, without the `.md` extension.
    pub map_file_name: String,
    /// Regenerate on vault changes and on a fixed interval.
    pub auto_update: bool,
    /// Interval between scheduled regenerations, in minutes.
    pub update_interval: u32,
    pub include_images: bool,
    pub include_pdfs: bool,
    /// Folder path prefixes whose contents are left out of the map.
    pub exclude_folders: Vec<String>,
    pub sort_by: SortBy,
    pub group_by_folder: bool,
    /// Total count line, plus a count line per folder when grouped.
    pub show_file_count: bool,
    pub show_last_modified: bool,
    pub locale: Locale,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            map_file_name: MapSettings::DEFAULT_MAP_NAME.to_string(),
            auto_update: true,
            update_interval: 5,
            include_images: false,
            include_pdfs: false,
            exclude_folders: vec![".obsidian".to_string(), ".trash".to_string()],
            sort_by: SortBy::Name,
            group_by_folder: true,
            show_file_count: true,
            show_last_modified: false,
            locale: Locale::En,
        }
    }
}

impl MapSettings {
    /// Names of every editable setting, in display order.
    pub const KEYS: &'static [&'static str] = &[
        "map_file_name",
        "auto_update",
        "update_interval",
        "include_images",
        "include_pdfs",
        "exclude_folders",
        "sort_by",
        "group_by_folder",
        "show_file_count",
        "show_last_modified",
        "locale",
    ];

    pub const DEFAULT_MAP_NAME: &'static str = "Vault Map";

    /// Accepted range for `update_interval`, in minutes.
    pub const INTERVAL_RANGE: std::ops::RangeInclusive<u32> = 1..=60;

    /// Path of the map document relative to the vault root, extension
    /// included. A name that would leave the vault maps to the default.
    pub fn map_document_name(&self) -> String {
        if is_vault_relative(&self.map_file_name) {
            format!("{}.md", self.map_file_name)
        } else {
            format!("{}.md", Self::DEFAULT_MAP_NAME)
        }
    }

    pub fn update_period(&self) -> Duration {
        Duration::from_secs(u64::from(self.update_interval) * 60)
    }
}

impl fmt::Display for MapSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "map_file_name: {}", self.map_file_name)?;
        writeln!(f, "auto_update: {}", self.auto_update)?;
        writeln!(f, "update_interval: {}", self.update_interval)?;
        writeln!(f, "include_images: {}", self.include_images)?;
        writeln!(f, "include_pdfs: {}", self.include_pdfs)?;
        writeln!(f, "exclude_folders: {}", self.exclude_folders.join(", "))?;
        writeln!(f, "sort_by: {}", self.sort_by.as_str())?;
        writeln!(f, "group_by_folder: {}", self.group_by_folder)?;
        writeln!(f, "show_file_count: {}", self.show_file_count)?;
        writeln!(f, "show_last_modified: {}", self.show_last_modified)?;
        write!(f, "locale: {}", self.locale.as_str())
    }
}

/// Settings as stored: every key optional, unusable values read as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PartialSettings {
    #[serde(default, deserialize_with = "lenient")]
    pub map_file_name: Option<String>,
    #[serde(default, deserialize_with = "lenient")]
    pub auto_update: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub update_interval: Option<u32>,
    #[serde(default, deserialize_with = "lenient")]
    pub include_images: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub include_pdfs: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub exclude_folders: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub sort_by: Option<SortBy>,
    #[serde(default, deserialize_with = "lenient")]
    pub group_by_folder: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub show_file_count: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub show_last_modified: Option<bool>,
    #[serde(default, deserialize_with = "lenient")]
    pub locale: Option<Locale>,
}

/// Deserialize any value, keeping it only if it has the expected shape.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = toml::Value::deserialize(deserializer)?;
    Ok(value.try_into::<T>().ok())
}

/// Overlay stored values on the defaults.
///
/// Blank map names, names leaving the vault and intervals outside
/// [`MapSettings::INTERVAL_RANGE`] count as absent. Folder prefixes are trimmed and lose trailing slashes.
pub fn merge_with_defaults(partial: PartialSettings) -> MapSettings {
    let defaults = MapSettings::default();

    MapSettings {
        map_file_name: partial
            .map_file_name
            .map(|s| s.trim().to_string())
            .filter(|s| is_vault_relative(s))
            .unwrap_or(defaults.map_file_name),
        auto_update: partial.auto_update.unwrap_or(defaults.auto_update),
        update_interval: partial
            .update_interval
            .filter(|m| MapSettings::INTERVAL_RANGE.contains(m))
            .unwrap_or(defaults.update_interval),
        include_images: partial.include_images.unwrap_or(defaults.include_images),
        include_pdfs: partial.include_pdfs.unwrap_or(defaults.include_pdfs),
        exclude_folders: partial
            .exclude_folders
            .map(normalize_folders)
            .unwrap_or(defaults.exclude_folders),
        sort_by: partial.sort_by.unwrap_or(defaults.sort_by),
        group_by_folder: partial.group_by_folder.unwrap_or(defaults.group_by_folder),
        show_file_count: partial.show_file_count.unwrap_or(defaults.show_file_count),
        show_last_modified: partial
            .show_last_modified
            .unwrap_or(defaults.show_last_modified),
        locale: partial.locale.unwrap_or(defaults.locale),
    }
}

/// `name` is a non-empty relative path that stays inside the vault: no root,
/// no drive prefix, no `.` or `..` segments.
pub fn is_vault_relative(name: &str) -> bool {
    let path = Path::new(name);
    !name.trim().is_empty()
        && !path.has_root()
        && name.split(['/', '\\']).all(|seg| !seg.is_empty() && seg != "." && seg != "..")
        && path.components().all(|c| matches!(c, Component::Normal(_)))
}

pub(crate) fn normalize_folders<I, S>(folders: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    folders
        .into_iter()
        .map(|f| f.as_ref().trim().trim_end_matches('/').to_string())
        .filter(|f| !f.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> PartialSettings {
        toml::from_str(s).unwrap()
    }

    #[test]
    fn test_empty_partial_gives_defaults() {
        assert_eq!(merge_with_defaults(PartialSettings::default()), MapSettings::default());
        assert_eq!(merge_with_defaults(parse("")), MapSettings::default());
    }

    #[test]
    fn test_present_keys_override_defaults() {
        let merged = merge_with_defaults(parse(
            r#"
map_file_name = "Index"
sort_by = "modified"
include_pdfs = true
exclude_folders = ["Archive", "Templates/"]
"#,
        ));

        assert_eq!(merged.map_file_name, "Index");
        assert_eq!(merged.sort_by, SortBy::Modified);
        assert!(merged.include_pdfs);
        assert_eq!(merged.exclude_folders, vec!["Archive", "Templates"]);
        // untouched keys keep defaults
        assert!(merged.group_by_folder);
        assert_eq!(merged.update_interval, 5);
    }

    #[test]
    fn test_wrong_types_fall_back() {
        let merged = merge_with_defaults(parse(
            r#"
auto_update = "yes please"
update_interval = "ten"
sort_by = "size"
exclude_folders = 3
locale = "fr"
"#,
        ));

        assert_eq!(merged, MapSettings::default());
    }

    #[test]
    fn test_out_of_range_and_blank_values_fall_back() {
        let merged = merge_with_defaults(parse(
            r#"
map_file_name = "   "
update_interval = 0
"#,
        ));
        assert_eq!(merged.map_file_name, "Vault Map");
        assert_eq!(merged.update_interval, 5);

        let merged = merge_with_defaults(parse("update_interval = 61"));
        assert_eq!(merged.update_interval, 5);

        let merged = merge_with_defaults(parse("update_interval = 60"));
        assert_eq!(merged.update_interval, 60);
    }

    #[test]
    fn test_map_names_leaving_the_vault_fall_back() {
        for name in ["../escaped", "Maps/../../out", "/etc/passwd", "./Index", "Maps//Index"] {
            let merged = merge_with_defaults(parse(&format!("map_file_name = {name:?}")));
            assert_eq!(merged.map_file_name, "Vault Map", "{name}");
        }

        let merged = merge_with_defaults(parse(r#"map_file_name = "Maps/Index""#));
        assert_eq!(merged.map_file_name, "Maps/Index");
    }

    #[test]
    fn test_map_document_name_never_leaves_the_vault() {
        let nested = MapSettings { map_file_name: "Maps/Index".into(), ..MapSettings::default() };
        assert_eq!(nested.map_document_name(), "Maps/Index.md");

        let escaping = MapSettings { map_file_name: "../Index".into(), ..MapSettings::default() };
        assert_eq!(escaping.map_document_name(), "Vault Map.md");
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let merged = merge_with_defaults(parse("legacy_option = true\nshow_file_count = false"));
        assert!(!merged.show_file_count);
    }

    #[test]
    fn test_sort_by_parse() {
        assert_eq!(SortBy::parse("Name"), Some(SortBy::Name));
        assert_eq!(SortBy::parse(" modified "), Some(SortBy::Modified));
        assert_eq!(SortBy::parse("created"), Some(SortBy::Created));
        assert_eq!(SortBy::parse("size"), None);
    }

    #[test]
    fn test_update_period() {
        let settings = MapSettings { update_interval: 3, ..MapSettings::default() };
        assert_eq!(settings.update_period(), Duration::from_secs(180));
        assert_eq!(settings.map_document_name(), "Vault Map.md");
    }
}
