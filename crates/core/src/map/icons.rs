//! Extension to glyph lookup for map entries.

/// Glyph for extensions missing from [`FILE_ICONS`].
pub const DEFAULT_ICON: &str = "📄";

/// Lower-cased extension to display glyph.
pub static FILE_ICONS: &[(&str, &str)] = &[
    ("md", "📝"),
    ("png", "🖼️"),
    ("jpg", "🖼️"),
    ("jpeg", "🖼️"),
    ("gif", "🖼️"),
    ("svg", "🖼️"),
    ("webp", "🖼️"),
    ("pdf", "📄"),
    ("txt", "📄"),
    ("docx", "📄"),
    ("xlsx", "📊"),
    ("pptx", "📊"),
    ("mp3", "🎵"),
    ("mp4", "🎬"),
    ("zip", "🗜️"),
    ("json", "⚙️"),
    ("js", "⚙️"),
    ("ts", "⚙️"),
    ("css", "🎨"),
    ("html", "🌐"),
];

/// Look up the glyph for an extension, case-insensitively.
pub fn icon_for(extension: &str) -> &'static str {
    let extension = extension.to_lowercase();
    FILE_ICONS
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map_or(DEFAULT_ICON, |&(_, icon)| icon)
}
