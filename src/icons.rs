//! Extension-to-glyph lookup for rendered file entries

use std::collections::HashMap;
use std::path::Path;

/// Glyph used for files whose extension has no mapping.
pub const DEFAULT_GLYPH: &str = "📄";

/// Built-in extension table. Keys are lower-cased and carry the leading dot.
pub const DEFAULT_ICONS: &[(&str, &str)] = &[
    (".js", "📄"),
    (".rs", "📄"),
    (".json", "📋"),
    (".toml", "📋"),
    (".yml", "📋"),
    (".yaml", "📋"),
    (".css", "🎨"),
    (".html", "🌐"),
    (".md", "📝"),
    (".txt", "📝"),
    (".jpg", "🖼️"),
    (".jpeg", "🖼️"),
    (".png", "🖼️"),
    (".gif", "🖼️"),
    (".svg", "🖼️"),
    (".webp", "🖼️"),
    (".pdf", "📕"),
    (".doc", "📘"),
    (".docx", "📘"),
    (".xls", "📗"),
    (".xlsx", "📗"),
    (".zip", "📦"),
    (".rar", "📦"),
    (".tar", "📦"),
    (".gz", "📦"),
];

/// Immutable mapping from lower-cased, dot-prefixed file extensions to
/// display glyphs. Built once and injected into the renderer; lookups are
/// total, unmapped extensions fall back to the default glyph.
#[derive(Debug, Clone)]
pub struct IconMap {
    map: HashMap<String, String>,
    default_glyph: String,
}

impl IconMap {
    pub fn new(entries: &[(&str, &str)], default_glyph: &str) -> Self {
        let map = entries
            .iter()
            .map(|(ext, glyph)| (ext.to_lowercase(), glyph.to_string()))
            .collect();
        Self {
            map,
            default_glyph: default_glyph.to_string(),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_ICONS, DEFAULT_GLYPH)
    }

    /// Look up the glyph for a file's base name.
    ///
    /// Files without an extension (including dotfiles like `.gitignore`)
    /// get the default glyph.
    pub fn glyph_for(&self, file_name: &str) -> &str {
        match extension_of(file_name) {
            Some(ext) => self
                .map
                .get(&ext)
                .map(String::as_str)
                .unwrap_or(&self.default_glyph),
            None => &self.default_glyph,
        }
    }
}

impl Default for IconMap {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Extract the lower-cased, dot-prefixed extension of a base name.
/// `"a.tar.gz"` yields `".gz"`; `".gitignore"` and `"Makefile"` yield None.
fn extension_of(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
}
