//! Localized text used when rendering a map.

use crate::settings::Locale;

/// Fixed strings and date formats for one locale.
#[derive(Debug)]
pub struct Labels {
    pub generated: &'static str,
    pub total_files: &'static str,
    pub root_folder: &'static str,
    pub folder_files: &'static str,
    pub all_files: &'static str,
    pub modified: &'static str,
    /// `chrono` format for the generation timestamp.
    pub datetime_format: &'static str,
    /// `chrono` format for per-file modification dates.
    pub date_format: &'static str,
}

static EN: Labels = Labels {
    generated: "Generated automatically",
    total_files: "Total files",
    root_folder: "Root folder",
    folder_files: "Files",
    all_files: "All files",
    modified: "modified",
    datetime_format: "%-m/%-d/%Y, %-I:%M:%S %p",
    date_format: "%-m/%-d/%Y",
};

static RU: Labels = Labels {
    generated: "Автоматически сгенерировано",
    total_files: "Всего файлов",
    root_folder: "Корневая папка",
    folder_files: "Файлов",
    all_files: "Все файлы",
    modified: "изменено",
    datetime_format: "%d.%m.%Y, %H:%M:%S",
    date_format: "%d.%m.%Y",
};

pub fn labels(locale: Locale) -> &'static Labels {
    match locale {
        Locale::En => &EN,
        Locale::Ru => &RU,
    }
}
