//! Rendering configuration types

use crate::icons::IconMap;

pub const DEFAULT_OUTPUT_FILE: &str = "index.html";
pub const DEFAULT_TITLE: &str = "Directory Structure";

/// Page layout variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Layout {
    /// Banner with a menu toggle, slide-in navigation panel, embedded viewer.
    #[default]
    Sidebar,
    /// Always-visible navigation panel beside the embedded viewer.
    Split,
    /// Tree only; links navigate directly, no embedded viewer.
    Flat,
}

impl Layout {
    /// Whether the layout embeds a viewer frame that file links load into.
    pub fn has_viewer(&self) -> bool {
        !matches!(self, Layout::Flat)
    }
}

/// How file link targets are built. The two modes are mutually exclusive
/// per run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LinkMode {
    /// Relative references, resolved against the output document's location.
    #[default]
    Relative,
    /// A fixed base address concatenated with each entry's relative path.
    AbsoluteBase(String),
}

/// Configuration for HTML rendering.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub layout: Layout,
    pub link_mode: LinkMode,
    pub title: String,
    pub icons: IconMap,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            link_mode: LinkMode::default(),
            title: DEFAULT_TITLE.to_string(),
            icons: IconMap::with_defaults(),
        }
    }
}

impl OutputConfig {
    /// Build the activation target for a file's forward-slash relative path.
    pub fn link_target(&self, rel_path: &str) -> String {
        match &self.link_mode {
            LinkMode::Relative => rel_path.to_string(),
            LinkMode::AbsoluteBase(base) => {
                format!("{}/{}", base.trim_end_matches('/'), rel_path)
            }
        }
    }
}
